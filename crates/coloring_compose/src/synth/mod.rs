//! Shape synthesis: converts abstract placements into native primitive descriptors.
//!
//! Native kinds map one to one. Semantic kinds are approximated with the closest
//! native primitive, which is a known fidelity gap rather than an exact rendering:
//!
//! | kind | primitive |
//! |---|---|
//! | oval | circle, radius `max(w, h) / 2` |
//! | diamond | square rectangle of side `max(w, h)`, rotated exactly π/4 |
//! | crescent | heart scaled to 80% |
//! | ring, wave, spiral | circle, radius `max(w, h) / 2` |
use std::f64::consts::FRAC_PI_4;

use crate::catalog::ShapeKind;
use crate::layout::PlacedShape;
use crate::rng::{RandomExt, RandomSource};

pub mod descriptor;
pub mod ids;

pub use descriptor::{ShapeDescriptor, ShapeGeometry, ShapeId};
pub use ids::{Clock, FixedClock, IdSource, SequentialIds, SystemClock};

pub const STROKE_COLOR: &str = "#000000";
pub const STROKE_WIDTH: f64 = 2.0;

/// Scale applied to crescents drawn as hearts.
pub const CRESCENT_SCALE: f64 = 0.8;

/// Probability that a star gets the classic five points.
pub const FIVE_POINT_CHANCE: f64 = 0.7;

/// Convert placements into descriptors, preserving order.
///
/// `rng` only feeds per-shape stylistic choices such as star point counts; it should
/// be independent of the generator used for placement.
pub fn synthesize(
    placed: &[PlacedShape<'_>],
    rng: &mut dyn RandomSource,
    ids: &mut dyn IdSource,
    created_at: u64,
) -> Vec<ShapeDescriptor> {
    placed
        .iter()
        .map(|shape| synthesize_shape(shape, rng, ids, created_at))
        .collect()
}

pub fn synthesize_shape(
    shape: &PlacedShape<'_>,
    rng: &mut dyn RandomSource,
    ids: &mut dyn IdSource,
    created_at: u64,
) -> ShapeDescriptor {
    let (geometry, rotation) = geometry_for(shape, rng);
    ShapeDescriptor {
        id: ids.next_id(),
        geometry,
        rotation,
        stroke_color: STROKE_COLOR.to_owned(),
        stroke_width: STROKE_WIDTH,
        created_at,
    }
}

fn geometry_for(shape: &PlacedShape<'_>, rng: &mut dyn RandomSource) -> (ShapeGeometry, f64) {
    let c = shape.center;
    let (w, h) = (shape.width, shape.height);
    let radius = w.max(h) * 0.5;
    let circle = ShapeGeometry::Circle {
        x: c.x,
        y: c.y,
        radius,
    };

    match shape.archetype.kind {
        ShapeKind::Rectangle => (
            ShapeGeometry::Rectangle {
                x: c.x - w * 0.5,
                y: c.y - h * 0.5,
                width: w,
                height: h,
            },
            shape.rotation,
        ),
        ShapeKind::Triangle => (
            ShapeGeometry::Triangle {
                x: c.x - w * 0.5,
                y: c.y - h * 0.5,
                width: w,
                height: h,
            },
            shape.rotation,
        ),
        ShapeKind::Heart => (
            ShapeGeometry::Heart {
                x: c.x - w * 0.5,
                y: c.y - h * 0.5,
                width: w,
                height: h,
            },
            shape.rotation,
        ),
        ShapeKind::Circle => (circle, shape.rotation),
        ShapeKind::Star => (
            ShapeGeometry::Star {
                x: c.x,
                y: c.y,
                radius,
                points: star_points(rng),
            },
            shape.rotation,
        ),
        ShapeKind::Diamond => {
            let side = w.max(h);
            (
                ShapeGeometry::Rectangle {
                    x: c.x - side * 0.5,
                    y: c.y - side * 0.5,
                    width: side,
                    height: side,
                },
                FRAC_PI_4,
            )
        }
        ShapeKind::Crescent => {
            let (sw, sh) = (w * CRESCENT_SCALE, h * CRESCENT_SCALE);
            (
                ShapeGeometry::Heart {
                    x: c.x - sw * 0.5,
                    y: c.y - sh * 0.5,
                    width: sw,
                    height: sh,
                },
                shape.rotation,
            )
        }
        ShapeKind::Oval | ShapeKind::Ring | ShapeKind::Wave | ShapeKind::Spiral => {
            (circle, shape.rotation)
        }
    }
}

fn star_points(rng: &mut dyn RandomSource) -> u8 {
    if rng.chance(FIVE_POINT_CHANCE) {
        5
    } else {
        rng.int_between(4, 6) as u8
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::catalog::{ShapeArchetype, ValueRange};
    use crate::rng::ParkMiller;

    fn placed(archetype: &ShapeArchetype) -> PlacedShape<'_> {
        PlacedShape {
            center: DVec2::new(0.5, 0.4),
            width: 0.2,
            height: 0.1,
            rotation: 0.3,
            archetype,
            layer: 1,
            forced: false,
        }
    }

    fn archetype(kind: ShapeKind) -> ShapeArchetype {
        ShapeArchetype::new(kind, ValueRange::new(0.1, 0.2), 1.0)
    }

    #[test]
    fn every_kind_maps_to_a_native_primitive() {
        let mut rng = ParkMiller::new(9);
        let mut ids = SequentialIds::new();
        let kinds = [
            ShapeKind::Rectangle,
            ShapeKind::Circle,
            ShapeKind::Triangle,
            ShapeKind::Star,
            ShapeKind::Heart,
            ShapeKind::Oval,
            ShapeKind::Diamond,
            ShapeKind::Crescent,
            ShapeKind::Ring,
            ShapeKind::Wave,
            ShapeKind::Spiral,
        ];
        for kind in kinds {
            let a = archetype(kind);
            let d = synthesize_shape(&placed(&a), &mut rng, &mut ids, 0);
            assert!(d.kind().is_native(), "{kind:?} produced {:?}", d.kind());
            if kind.is_native() {
                assert_eq!(d.kind(), kind);
            }
        }
    }

    #[test]
    fn anchors_follow_primitive_conventions() {
        let mut rng = ParkMiller::new(1);
        let mut ids = SequentialIds::new();

        let rect = archetype(ShapeKind::Rectangle);
        let d = synthesize_shape(&placed(&rect), &mut rng, &mut ids, 0);
        match d.geometry {
            ShapeGeometry::Rectangle { x, y, width, height } => {
                assert!((x - 0.4).abs() < 1e-12);
                assert!((y - 0.35).abs() < 1e-12);
                assert_eq!((width, height), (0.2, 0.1));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(d.rotation, 0.3);

        let oval = archetype(ShapeKind::Oval);
        let d = synthesize_shape(&placed(&oval), &mut rng, &mut ids, 0);
        assert_eq!(
            d.geometry,
            ShapeGeometry::Circle {
                x: 0.5,
                y: 0.4,
                radius: 0.1
            }
        );
    }

    #[test]
    fn diamonds_become_rotated_squares() {
        let mut rng = ParkMiller::new(1);
        let mut ids = SequentialIds::new();
        let diamond = archetype(ShapeKind::Diamond);
        let d = synthesize_shape(&placed(&diamond), &mut rng, &mut ids, 0);
        assert_eq!(d.rotation, FRAC_PI_4);
        match d.geometry {
            ShapeGeometry::Rectangle { width, height, .. } => assert_eq!(width, height),
            other => panic!("unexpected {other:?}"),
        }
        let (cx, cy) = d.geometry.center();
        assert!((cx - 0.5).abs() < 1e-12 && (cy - 0.4).abs() < 1e-12);
    }

    #[test]
    fn crescents_are_scaled_hearts() {
        let mut rng = ParkMiller::new(1);
        let mut ids = SequentialIds::new();
        let crescent = archetype(ShapeKind::Crescent);
        let d = synthesize_shape(&placed(&crescent), &mut rng, &mut ids, 0);
        match d.geometry {
            ShapeGeometry::Heart { width, height, .. } => {
                assert!((width - 0.16).abs() < 1e-12);
                assert!((height - 0.08).abs() < 1e-12);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn star_points_stay_in_range() {
        let mut rng = ParkMiller::new(31);
        let mut fives = 0;
        for _ in 0..500 {
            let p = star_points(&mut rng);
            assert!((4..=6).contains(&p));
            if p == 5 {
                fives += 1;
            }
        }
        // 70% direct plus a third of the remainder.
        assert!(fives > 300);
    }

    #[test]
    fn descriptors_get_fresh_ids_and_fixed_stroke() {
        let mut rng = ParkMiller::new(2);
        let mut ids = SequentialIds::new();
        let a = archetype(ShapeKind::Heart);
        let shapes = vec![placed(&a), placed(&a), placed(&a)];
        let out = synthesize(&shapes, &mut rng, &mut ids, 1234);
        let got: Vec<_> = out.iter().map(|d| d.id).collect();
        assert_eq!(got, vec![ShapeId(1), ShapeId(2), ShapeId(3)]);
        assert!(out
            .iter()
            .all(|d| d.stroke_color == STROKE_COLOR
                && d.stroke_width == STROKE_WIDTH
                && d.created_at == 1234));
    }
}
