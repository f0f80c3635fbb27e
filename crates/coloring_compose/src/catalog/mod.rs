//! Static, immutable catalog data: shape archetypes, themes and difficulty tiers.
pub mod archetype;
pub mod difficulty;
pub mod theme;

pub use archetype::{LayerPreference, ShapeArchetype, ShapeKind, ValueRange};
pub use difficulty::{difficulty_profile, Complexity, CountRange, Difficulty, DifficultyProfile};
pub use theme::{theme, Theme, ThemeId};
