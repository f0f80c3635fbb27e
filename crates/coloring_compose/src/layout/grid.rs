//! Jittered-grid (tessellation) layout strategy.
use glam::DVec2;

use crate::catalog::ShapeArchetype;
use crate::layout::selection::{has_selectable, pick_weighted_archetype};
use crate::layout::{rotation_for, LayoutOutcome, LayoutPlanner, PlacedShape, MIN_EXTENT};
use crate::rng::{RandomExt, RandomSource};

/// Canvas margin kept free around the grid, as a canvas fraction.
pub const GRID_MARGIN: f64 = 0.1;

/// Largest shape extent relative to the smaller cell side.
pub const CELL_FILL: f64 = 0.8;

/// Placement frame of a grid: top-left corner of the first cell and cell size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFrame {
    pub origin: DVec2,
    pub cell: DVec2,
}

impl GridFrame {
    /// Frame dividing the canvas minus `margin` on every side into `cols x rows` cells.
    pub fn inset(cols: usize, rows: usize, margin: f64) -> Self {
        let span = 1.0 - 2.0 * margin;
        Self {
            origin: DVec2::splat(margin),
            cell: DVec2::new(span / cols.max(1) as f64, span / rows.max(1) as f64),
        }
    }

    /// The same frame moved by half a cell on both axes, so its cell centers land on
    /// the corners shared by neighbouring cells of `self`.
    pub fn shifted_half_cell(self) -> Self {
        Self {
            origin: self.origin + self.cell * 0.5,
            cell: self.cell,
        }
    }

    pub fn cell_center(&self, col: usize, row: usize) -> DVec2 {
        self.origin + (DVec2::new(col as f64, row as f64) + 0.5) * self.cell
    }
}

/// Jittered grid layout.
#[derive(Debug, Clone)]
pub struct GridLayout {
    pub cols: usize,
    pub rows: usize,
    /// Jitter amount in [0, 1]: maximum center offset as a fraction of the cell size.
    pub jitter: f64,
    pub size_multiplier: f64,
    /// Explicit frame; defaults to [`GridFrame::inset`] with [`GRID_MARGIN`].
    pub frame: Option<GridFrame>,
}

impl GridLayout {
    /// Create a new grid layout with specified jitter (0.0 to 1.0).
    pub fn new(cols: usize, rows: usize, jitter: f64) -> Self {
        Self {
            cols,
            rows,
            jitter: jitter.clamp(0.0, 1.0),
            size_multiplier: 1.0,
            frame: None,
        }
    }

    pub fn with_size_multiplier(mut self, size_multiplier: f64) -> Self {
        self.size_multiplier = size_multiplier;
        self
    }

    pub fn with_frame(mut self, frame: GridFrame) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn effective_frame(&self) -> GridFrame {
        self.frame
            .unwrap_or_else(|| GridFrame::inset(self.cols, self.rows, GRID_MARGIN))
    }
}

impl LayoutPlanner for GridLayout {
    fn plan<'a>(
        &self,
        archetypes: &'a [ShapeArchetype],
        rng: &mut dyn RandomSource,
    ) -> LayoutOutcome<'a> {
        let mut outcome = LayoutOutcome::default();
        if self.cols == 0 || self.rows == 0 || !has_selectable(archetypes) {
            return outcome;
        }

        let frame = self.effective_frame();
        let max_size = CELL_FILL * frame.cell.min_element();
        outcome.shapes.reserve(self.cols * self.rows);

        for row in 0..self.rows {
            for col in 0..self.cols {
                let Some(archetype) = pick_weighted_archetype(archetypes, rng) else {
                    return outcome;
                };
                let jx = rng.between(-1.0, 1.0);
                let jy = rng.between(-1.0, 1.0);
                let center =
                    frame.cell_center(col, row) + DVec2::new(jx, jy) * self.jitter * frame.cell;
                let size = (rng.between(archetype.size_range.min, archetype.size_range.max)
                    * self.size_multiplier)
                    .min(max_size)
                    .max(MIN_EXTENT);
                let rotation = rotation_for(archetype, rng);

                outcome.shapes.push(PlacedShape {
                    center,
                    width: size,
                    height: size,
                    rotation,
                    archetype,
                    layer: 0,
                    forced: false,
                });
            }
        }

        outcome
    }
}
