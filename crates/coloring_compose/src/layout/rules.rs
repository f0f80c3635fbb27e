//! Composition rules shared by the layout planners.
use std::fmt;
use std::str::FromStr;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Qualitative spacing control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Density {
    Sparse,
    #[default]
    Medium,
    Dense,
}

impl Density {
    /// Factor applied to `min_spacing`.
    pub fn spacing_factor(self) -> f64 {
        match self {
            Density::Dense => 0.5,
            Density::Medium => 1.0,
            Density::Sparse => 2.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Density::Sparse => "sparse",
            Density::Medium => "medium",
            Density::Dense => "dense",
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Density {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sparse" => Ok(Density::Sparse),
            "medium" => Ok(Density::Medium),
            "dense" => Ok(Density::Dense),
            other => Err(Error::UnknownDensity { id: other.into() }),
        }
    }
}

/// Normalized point used for focal points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FocalPoint {
    pub x: f64,
    pub y: f64,
}

impl From<FocalPoint> for DVec2 {
    fn from(p: FocalPoint) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<mint::Point2<f64>> for FocalPoint {
    fn from(p: mint::Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Layout rules for a composition. One default set exists per style
/// (see [`crate::compose::default_rules`]).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompositionRules {
    /// Point shapes are pulled toward, in canvas fractions.
    pub focal_point: Option<FocalPoint>,
    /// Enables depth layers (size scaling, per-layer focal pull and balancing).
    pub layering: bool,
    pub density: Density,
    /// Base gap between shape boxes, in canvas fractions.
    pub min_spacing: f64,
}

impl Default for CompositionRules {
    fn default() -> Self {
        Self {
            focal_point: None,
            layering: true,
            density: Density::Medium,
            min_spacing: 0.02,
        }
    }
}

impl CompositionRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the focal point from anything convertible to a `mint` point.
    pub fn with_focal_point(mut self, point: impl Into<mint::Point2<f64>>) -> Self {
        self.focal_point = Some(FocalPoint::from(point.into()));
        self
    }

    pub fn without_focal_point(mut self) -> Self {
        self.focal_point = None;
        self
    }

    pub fn with_layering(mut self, layering: bool) -> Self {
        self.layering = layering;
        self
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn with_min_spacing(mut self, min_spacing: f64) -> Self {
        self.min_spacing = min_spacing;
        self
    }

    /// Gap enforced between two shape boxes after applying the density factor.
    pub fn effective_spacing(&self) -> f64 {
        self.min_spacing * self.density.spacing_factor()
    }

    /// Validates the rules, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(p) = self.focal_point {
            if !(0.0..=1.0).contains(&p.x) || !(0.0..=1.0).contains(&p.y) {
                return Err(Error::InvalidConfig(format!(
                    "focal_point must lie in [0, 1], got ({}, {})",
                    p.x, p.y
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.min_spacing) {
            return Err(Error::InvalidConfig(format!(
                "min_spacing must lie in [0, 1], got {}",
                self.min_spacing
            )));
        }

        Ok(())
    }
}
