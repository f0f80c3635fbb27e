//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants
//! cover invalid composition settings and unrecognized catalog keys. Placement retries and
//! forced placements are internal heuristics and never surface here.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown theme '{id}'")]
    UnknownTheme { id: String },

    #[error("unknown style '{id}'")]
    UnknownStyle { id: String },

    #[error("unknown difficulty '{id}'")]
    UnknownDifficulty { id: String },

    #[error("unknown density '{id}'")]
    UnknownDensity { id: String },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "boom"));
    }

    #[test]
    fn from_str_allocates_owned_message() {
        let err: Error = "issue".into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "issue"));
    }

    #[test]
    fn unknown_key_messages_name_the_key() {
        let err = Error::UnknownTheme {
            id: "jungle".into(),
        };
        assert_eq!(err.to_string(), "unknown theme 'jungle'");

        let err = Error::UnknownDifficulty { id: "expert".into() };
        assert_eq!(err.to_string(), "unknown difficulty 'expert'");
    }
}
