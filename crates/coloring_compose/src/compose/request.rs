//! Generation requests and results.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::{Difficulty, ThemeId};
use crate::compose::style::{default_rules, Style};
use crate::error::Result;
use crate::layout::CompositionRules;
use crate::synth::ShapeDescriptor;

/// What to generate.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerationRequest {
    pub theme: ThemeId,
    pub style: Style,
    pub difficulty: Difficulty,
    /// Overrides the style's default rules.
    #[cfg_attr(feature = "serde", serde(default))]
    pub composition_rules: Option<CompositionRules>,
    /// Placement seed. Drawn from the clock when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

impl GenerationRequest {
    pub fn new(theme: ThemeId, style: Style, difficulty: Difficulty) -> Self {
        Self {
            theme,
            style,
            difficulty,
            composition_rules: None,
            seed: None,
        }
    }

    /// Parses the three string keys, failing on the first unknown one.
    pub fn from_keys(theme: &str, style: &str, difficulty: &str) -> Result<Self> {
        Ok(Self::new(theme.parse()?, style.parse()?, difficulty.parse()?))
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_composition_rules(mut self, rules: CompositionRules) -> Self {
        self.composition_rules = Some(rules);
        self
    }

    /// Rules the planners will see: the override if present, else the style default.
    pub fn effective_rules(&self) -> CompositionRules {
        self.composition_rules
            .clone()
            .unwrap_or_else(|| default_rules(self.style))
    }

    /// Validates the request, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(rules) = &self.composition_rules {
            rules.validate()?;
        }
        Ok(())
    }
}

/// Provenance of a [`GenerationResult`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerationMetadata {
    /// Placement seed. Passing it back in a request regenerates the same page.
    pub seed: u32,
    /// Theme as requested, possibly [`ThemeId::Random`].
    pub theme: ThemeId,
    /// Concrete theme the archetypes were drawn from.
    pub resolved_theme: ThemeId,
    pub style: Style,
    pub difficulty: Difficulty,
    /// Rules the planners ran with: the request's override or the style default.
    pub composition_rules: CompositionRules,
    pub shape_count: usize,
    /// Milliseconds since the Unix epoch.
    pub generated_at: u64,
}

/// Shapes in paint order (back to front) plus metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerationResult {
    pub shapes: Vec<ShapeDescriptor>,
    pub metadata: GenerationMetadata,
}

impl GenerationResult {
    /// A request that regenerates this result.
    pub fn regenerate_request(&self) -> GenerationRequest {
        GenerationRequest::new(
            self.metadata.theme,
            self.metadata.style,
            self.metadata.difficulty,
        )
        .with_seed(self.metadata.seed as u64)
        .with_composition_rules(self.metadata.composition_rules.clone())
    }
}
