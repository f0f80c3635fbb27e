//! Visual styles and their default composition rules.
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::layout::{CompositionRules, Density};

/// Visual style of a generated page; selects the planners that run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Style {
    /// Free scatter with a focal point and depth layers.
    Scene,
    /// Concentric rings.
    Mandala,
    /// Two overlaid mandalas, the second offset in rotation.
    Kaleidoscope,
    /// Jittered grid.
    Pattern,
    /// Two overlaid grids, the second offset by half a cell.
    Mosaic,
    /// Flat free scatter without a focal point.
    Freeform,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::Scene,
        Style::Mandala,
        Style::Kaleidoscope,
        Style::Pattern,
        Style::Mosaic,
        Style::Freeform,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Scene => "scene",
            Style::Mandala => "mandala",
            Style::Kaleidoscope => "kaleidoscope",
            Style::Pattern => "pattern",
            Style::Mosaic => "mosaic",
            Style::Freeform => "freeform",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scene" => Ok(Style::Scene),
            "mandala" => Ok(Style::Mandala),
            "kaleidoscope" => Ok(Style::Kaleidoscope),
            "pattern" => Ok(Style::Pattern),
            "mosaic" => Ok(Style::Mosaic),
            "freeform" => Ok(Style::Freeform),
            other => Err(Error::UnknownStyle { id: other.into() }),
        }
    }
}

/// Default composition rules for `style`, used when a request carries none.
pub fn default_rules(style: Style) -> CompositionRules {
    match style {
        Style::Scene => CompositionRules::new()
            .with_focal_point([0.5, 0.55])
            .with_layering(true)
            .with_density(Density::Medium)
            .with_min_spacing(0.02),
        Style::Freeform => CompositionRules::new()
            .without_focal_point()
            .with_layering(false)
            .with_density(Density::Medium)
            .with_min_spacing(0.02),
        Style::Mandala | Style::Kaleidoscope => CompositionRules::new()
            .with_focal_point([0.5, 0.5])
            .with_layering(true)
            .with_density(Density::Medium)
            .with_min_spacing(0.02),
        Style::Pattern | Style::Mosaic => CompositionRules::new()
            .without_focal_point()
            .with_layering(false)
            .with_density(Density::Medium)
            .with_min_spacing(0.01),
    }
}
