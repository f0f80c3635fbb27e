//! Difficulty table: per-tier numeric parameters.
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Toddler,
    Kid,
    Teen,
    Adult,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Toddler,
        Difficulty::Kid,
        Difficulty::Teen,
        Difficulty::Adult,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Toddler => "toddler",
            Difficulty::Kid => "kid",
            Difficulty::Teen => "teen",
            Difficulty::Adult => "adult",
        }
    }

    /// Position in the table, 0 for toddler through 3 for adult.
    pub fn tier(self) -> usize {
        match self {
            Difficulty::Toddler => 0,
            Difficulty::Kid => 1,
            Difficulty::Teen => 2,
            Difficulty::Adult => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toddler" => Ok(Difficulty::Toddler),
            "kid" => Ok(Difficulty::Kid),
            "teen" => Ok(Difficulty::Teen),
            "adult" => Ok(Difficulty::Adult),
            other => Err(Error::UnknownDifficulty { id: other.into() }),
        }
    }
}

/// Coarse visual complexity of a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Complexity {
    Simple,
    Moderate,
    Detailed,
    Intricate,
}

/// Inclusive shape-count bounds for scatter styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DifficultyProfile {
    pub shape_count: CountRange,
    pub size_multiplier: f64,
    /// Smallest width or height a scattered shape may have, as a canvas fraction.
    pub min_region_size: f64,
    pub complexity: Complexity,
    pub include_details: bool,
}

static PROFILES: [DifficultyProfile; 4] = [
    DifficultyProfile {
        shape_count: CountRange { min: 3, max: 5 },
        size_multiplier: 1.5,
        min_region_size: 0.08,
        complexity: Complexity::Simple,
        include_details: false,
    },
    DifficultyProfile {
        shape_count: CountRange { min: 5, max: 8 },
        size_multiplier: 1.2,
        min_region_size: 0.05,
        complexity: Complexity::Moderate,
        include_details: false,
    },
    DifficultyProfile {
        shape_count: CountRange { min: 8, max: 12 },
        size_multiplier: 1.0,
        min_region_size: 0.03,
        complexity: Complexity::Detailed,
        include_details: true,
    },
    DifficultyProfile {
        shape_count: CountRange { min: 12, max: 18 },
        size_multiplier: 0.8,
        min_region_size: 0.02,
        complexity: Complexity::Intricate,
        include_details: true,
    },
];

pub fn difficulty_profile(level: Difficulty) -> &'static DifficultyProfile {
    &PROFILES[level.tier()]
}
