//! Concrete drawable shape descriptors emitted by the synthesizer.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::ShapeKind;

/// Identifier of a synthesized shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape-{}", self.0)
    }
}

/// Native primitive geometry in normalized canvas coordinates.
///
/// Rectangles, triangles and hearts are anchored at their top-left corner;
/// circles and stars at their center.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum ShapeGeometry {
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
    },
    Triangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Star {
        x: f64,
        y: f64,
        radius: f64,
        points: u8,
    },
    Heart {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

impl ShapeGeometry {
    /// Native kind of this geometry; never a semantic kind.
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeGeometry::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeGeometry::Circle { .. } => ShapeKind::Circle,
            ShapeGeometry::Triangle { .. } => ShapeKind::Triangle,
            ShapeGeometry::Star { .. } => ShapeKind::Star,
            ShapeGeometry::Heart { .. } => ShapeKind::Heart,
        }
    }

    /// Center point, whatever the anchor convention.
    pub fn center(&self) -> (f64, f64) {
        match *self {
            ShapeGeometry::Rectangle {
                x,
                y,
                width,
                height,
            }
            | ShapeGeometry::Triangle {
                x,
                y,
                width,
                height,
            }
            | ShapeGeometry::Heart {
                x,
                y,
                width,
                height,
            } => (x + width * 0.5, y + height * 0.5),
            ShapeGeometry::Circle { x, y, .. } | ShapeGeometry::Star { x, y, .. } => (x, y),
        }
    }
}

/// A concrete shape ready for an external drawing store.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeDescriptor {
    pub id: ShapeId,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub geometry: ShapeGeometry,
    /// Radians, applied around the shape center.
    pub rotation: f64,
    pub stroke_color: String,
    pub stroke_width: f64,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
}

impl ShapeDescriptor {
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }
}
