//! Theme catalog: per-theme archetype palettes and preview colors.
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::archetype::{LayerPreference, ShapeArchetype, ShapeKind, ValueRange};
use crate::error::Error;

use LayerPreference::{Any, Background, Foreground, Midground};
use ShapeKind::*;

/// Theme identifier. [`ThemeId::Random`] resolves to a concrete theme at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThemeId {
    Sea,
    Space,
    Garden,
    Fantasy,
    Random,
}

impl ThemeId {
    /// Themes that carry archetypes.
    pub const CONCRETE: [ThemeId; 4] = [
        ThemeId::Sea,
        ThemeId::Space,
        ThemeId::Garden,
        ThemeId::Fantasy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Sea => "sea",
            ThemeId::Space => "space",
            ThemeId::Garden => "garden",
            ThemeId::Fantasy => "fantasy",
            ThemeId::Random => "random",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sea" => Ok(ThemeId::Sea),
            "space" => Ok(ThemeId::Space),
            "garden" => Ok(ThemeId::Garden),
            "fantasy" => Ok(ThemeId::Fantasy),
            "random" => Ok(ThemeId::Random),
            other => Err(Error::UnknownTheme { id: other.into() }),
        }
    }
}

/// Immutable catalog entry for a theme.
#[derive(Debug)]
pub struct Theme {
    pub id: ThemeId,
    pub name: &'static str,
    pub description: &'static str,
    /// Ordered archetype palette; order matters for weighted selection.
    pub archetypes: &'static [ShapeArchetype],
    /// Cosmetic colors for theme previews, as `#rrggbb`.
    pub preview_colors: &'static [&'static str],
}

static SEA_ARCHETYPES: [ShapeArchetype; 6] = [
    ShapeArchetype::new(Wave, ValueRange::new(0.25, 0.4), 3.0)
        .with_aspect(0.3, 0.5)
        .with_rotation(PI / 12.0)
        .with_layer(Background),
    ShapeArchetype::new(Circle, ValueRange::new(0.04, 0.1), 3.0).with_layer(Any),
    ShapeArchetype::new(Oval, ValueRange::new(0.12, 0.2), 2.5)
        .with_aspect(0.5, 0.7)
        .with_rotation(PI / 8.0)
        .with_layer(Midground),
    ShapeArchetype::new(Star, ValueRange::new(0.08, 0.14), 1.5)
        .with_rotation(PI / 5.0)
        .with_layer(Foreground),
    ShapeArchetype::new(Crescent, ValueRange::new(0.08, 0.12), 1.0)
        .with_rotation(PI / 4.0)
        .with_layer(Foreground),
    ShapeArchetype::new(Spiral, ValueRange::new(0.08, 0.14), 1.0).with_layer(Any),
];

static SPACE_ARCHETYPES: [ShapeArchetype; 6] = [
    ShapeArchetype::new(Circle, ValueRange::new(0.18, 0.3), 3.0).with_layer(Background),
    ShapeArchetype::new(Star, ValueRange::new(0.05, 0.1), 4.0)
        .with_rotation(PI / 5.0)
        .with_layer(Any),
    ShapeArchetype::new(Ring, ValueRange::new(0.14, 0.22), 1.5).with_layer(Midground),
    ShapeArchetype::new(Crescent, ValueRange::new(0.12, 0.18), 1.5)
        .with_rotation(PI / 3.0)
        .with_layer(Midground),
    ShapeArchetype::new(Triangle, ValueRange::new(0.1, 0.16), 1.0)
        .with_aspect(1.2, 1.6)
        .with_rotation(PI / 6.0)
        .with_layer(Foreground),
    ShapeArchetype::new(Diamond, ValueRange::new(0.06, 0.1), 1.0).with_layer(Any),
];

static GARDEN_ARCHETYPES: [ShapeArchetype; 6] = [
    ShapeArchetype::new(Circle, ValueRange::new(0.1, 0.16), 3.0).with_layer(Midground),
    ShapeArchetype::new(Heart, ValueRange::new(0.08, 0.14), 2.0)
        .with_rotation(PI / 10.0)
        .with_layer(Foreground),
    ShapeArchetype::new(Oval, ValueRange::new(0.08, 0.14), 2.5)
        .with_aspect(0.4, 0.6)
        .with_rotation(PI / 4.0)
        .with_layer(Any),
    ShapeArchetype::new(Rectangle, ValueRange::new(0.2, 0.35), 1.0)
        .with_aspect(0.25, 0.4)
        .with_layer(Background),
    ShapeArchetype::new(Triangle, ValueRange::new(0.16, 0.26), 1.5)
        .with_aspect(1.1, 1.4)
        .with_layer(Background),
    ShapeArchetype::new(Spiral, ValueRange::new(0.06, 0.1), 1.0).with_layer(Foreground),
];

static FANTASY_ARCHETYPES: [ShapeArchetype; 7] = [
    ShapeArchetype::new(Star, ValueRange::new(0.08, 0.14), 3.0)
        .with_rotation(PI / 5.0)
        .with_layer(Any),
    ShapeArchetype::new(Diamond, ValueRange::new(0.07, 0.12), 2.5).with_layer(Foreground),
    ShapeArchetype::new(Heart, ValueRange::new(0.1, 0.16), 2.0)
        .with_rotation(PI / 12.0)
        .with_layer(Midground),
    ShapeArchetype::new(Triangle, ValueRange::new(0.2, 0.32), 2.0)
        .with_aspect(1.0, 1.5)
        .with_layer(Background),
    ShapeArchetype::new(Crescent, ValueRange::new(0.12, 0.18), 1.0)
        .with_rotation(PI / 6.0)
        .with_layer(Background),
    ShapeArchetype::new(Ring, ValueRange::new(0.1, 0.16), 1.5).with_layer(Midground),
    ShapeArchetype::new(Rectangle, ValueRange::new(0.18, 0.28), 1.0)
        .with_aspect(0.3, 0.45)
        .with_layer(Background),
];

static SEA: Theme = Theme {
    id: ThemeId::Sea,
    name: "Under the Sea",
    description: "Waves, bubbles, fish and starfish",
    archetypes: &SEA_ARCHETYPES,
    preview_colors: &["#1e88e5", "#4dd0e1", "#ffb74d", "#f06292"],
};

static SPACE: Theme = Theme {
    id: ThemeId::Space,
    name: "Outer Space",
    description: "Planets, stars, moons and rockets",
    archetypes: &SPACE_ARCHETYPES,
    preview_colors: &["#283593", "#7e57c2", "#ffd54f", "#90a4ae"],
};

static GARDEN: Theme = Theme {
    id: ThemeId::Garden,
    name: "Garden",
    description: "Flowers, leaves, hedges and snails",
    archetypes: &GARDEN_ARCHETYPES,
    preview_colors: &["#43a047", "#e91e63", "#ffeb3b", "#8d6e63"],
};

static FANTASY: Theme = Theme {
    id: ThemeId::Fantasy,
    name: "Fantasy",
    description: "Castles, gems, hearts and magic stars",
    archetypes: &FANTASY_ARCHETYPES,
    preview_colors: &["#8e24aa", "#00acc1", "#fdd835", "#ef5350"],
};

/// Look up a concrete theme.
///
/// [`ThemeId::Random`] has no archetypes of its own; callers resolve it first
/// (see [`crate::compose::runner`]). Passing it here yields the sea theme.
pub fn theme(id: ThemeId) -> &'static Theme {
    match id {
        ThemeId::Sea | ThemeId::Random => &SEA,
        ThemeId::Space => &SPACE,
        ThemeId::Garden => &GARDEN,
        ThemeId::Fantasy => &FANTASY,
    }
}
