//! Post-placement transforms applied to overlay passes.
use crate::layout::PlacedShape;

/// Adjustments applied to every shape an overlay pass produces, before it is merged
/// on top of the primary pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PassOverlay {
    /// Radians added to the rotation of rotatable shapes.
    pub rotation_offset: f64,
    /// Layer forced onto every shape, if set.
    pub layer: Option<u8>,
}

impl PassOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rotation_offset(mut self, radians: f64) -> Self {
        self.rotation_offset = radians;
        self
    }

    pub fn with_layer(mut self, layer: u8) -> Self {
        self.layer = Some(layer);
        self
    }

    pub fn apply(&self, shapes: &mut [PlacedShape<'_>]) {
        for shape in shapes {
            if shape.archetype.can_rotate {
                shape.rotation += self.rotation_offset;
            }
            if let Some(layer) = self.layer {
                shape.layer = layer;
            }
        }
    }
}
