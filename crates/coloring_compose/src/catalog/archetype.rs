//! Abstract shape archetypes: reusable size, aspect, rotation and weight rules.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of shape an archetype describes.
///
/// The first five are native primitives the drawing layer understands directly.
/// The rest are semantic kinds that the synthesizer approximates with a native one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    Star,
    Heart,
    Oval,
    Diamond,
    Crescent,
    Ring,
    Wave,
    Spiral,
}

impl ShapeKind {
    pub const NATIVE: [ShapeKind; 5] = [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Star,
        ShapeKind::Heart,
    ];

    pub fn is_native(self) -> bool {
        Self::NATIVE.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Star => "star",
            ShapeKind::Heart => "heart",
            ShapeKind::Oval => "oval",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Crescent => "crescent",
            ShapeKind::Ring => "ring",
            ShapeKind::Wave => "wave",
            ShapeKind::Spiral => "spiral",
        }
    }
}

/// Depth bucket an archetype prefers in layered compositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayerPreference {
    Background,
    Midground,
    Foreground,
    Any,
}

impl LayerPreference {
    /// The fixed layer index for this preference, or `None` for [`LayerPreference::Any`].
    pub fn fixed_layer(self) -> Option<u8> {
        match self {
            LayerPreference::Background => Some(0),
            LayerPreference::Midground => Some(1),
            LayerPreference::Foreground => Some(2),
            LayerPreference::Any => None,
        }
    }
}

/// Closed interval `[min, max]` used for sizes and aspect ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Reusable abstract shape specification.
///
/// Sizes are fractions of the canvas edge. `max_rotation` is in radians and only
/// meaningful when `can_rotate` is set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeArchetype {
    pub kind: ShapeKind,
    pub size_range: ValueRange,
    pub aspect_range: ValueRange,
    pub can_rotate: bool,
    pub max_rotation: f64,
    pub layer_preference: LayerPreference,
    pub weight: f64,
}

impl ShapeArchetype {
    /// A non-rotating archetype with a square aspect and no layer preference.
    pub const fn new(kind: ShapeKind, size_range: ValueRange, weight: f64) -> Self {
        Self {
            kind,
            size_range,
            aspect_range: ValueRange::new(1.0, 1.0),
            can_rotate: false,
            max_rotation: 0.0,
            layer_preference: LayerPreference::Any,
            weight,
        }
    }

    pub const fn with_aspect(mut self, min: f64, max: f64) -> Self {
        self.aspect_range = ValueRange::new(min, max);
        self
    }

    pub const fn with_rotation(mut self, max_rotation: f64) -> Self {
        self.can_rotate = true;
        self.max_rotation = max_rotation;
        self
    }

    pub const fn with_layer(mut self, preference: LayerPreference) -> Self {
        self.layer_preference = preference;
        self
    }
}
