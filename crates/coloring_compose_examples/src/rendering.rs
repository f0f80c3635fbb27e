use std::f64::consts::{FRAC_PI_2, TAU};
use std::path::Path;

use anyhow::Context;
use coloring_compose::prelude::{GenerationResult, ShapeGeometry};
use glam::DVec2;
use image::{Rgb, RgbImage};
use tracing::info;

const CIRCLE_SEGMENTS: usize = 64;
const HEART_SEGMENTS: usize = 96;

/// Installs a `fmt` subscriber at INFO level. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .try_init();
}

/// Settings for the PNG preview.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Edge length of the square image in pixels.
    pub size_px: u32,
    pub background: [u8; 3],
    pub stroke: [u8; 3],
    /// Stroke width in pixels.
    pub stroke_px: f64,
}

impl RenderConfig {
    pub fn new(size_px: u32) -> Self {
        Self {
            size_px,
            background: [255, 255, 255],
            stroke: [0, 0, 0],
            stroke_px: 2.0,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_stroke(mut self, stroke: [u8; 3], stroke_px: f64) -> Self {
        self.stroke = stroke;
        self.stroke_px = stroke_px;
        self
    }
}

/// Closed outline of a shape in normalized canvas coordinates, rotation applied.
pub fn outline(geometry: &ShapeGeometry, rotation: f64) -> Vec<DVec2> {
    let (cx, cy) = geometry.center();
    let center = DVec2::new(cx, cy);

    let local: Vec<DVec2> = match *geometry {
        ShapeGeometry::Rectangle { width, height, .. } => {
            let h = DVec2::new(width, height) * 0.5;
            vec![
                DVec2::new(-h.x, -h.y),
                DVec2::new(h.x, -h.y),
                DVec2::new(h.x, h.y),
                DVec2::new(-h.x, h.y),
            ]
        }
        ShapeGeometry::Triangle { width, height, .. } => {
            let h = DVec2::new(width, height) * 0.5;
            vec![
                DVec2::new(0.0, -h.y),
                DVec2::new(h.x, h.y),
                DVec2::new(-h.x, h.y),
            ]
        }
        ShapeGeometry::Circle { radius, .. } => (0..CIRCLE_SEGMENTS)
            .map(|i| DVec2::from_angle(TAU * i as f64 / CIRCLE_SEGMENTS as f64) * radius)
            .collect(),
        ShapeGeometry::Star { radius, points, .. } => {
            let tips = points.max(2) as usize;
            (0..tips * 2)
                .map(|i| {
                    let r = if i % 2 == 0 { radius } else { radius * 0.5 };
                    let angle = TAU * i as f64 / (tips * 2) as f64 - FRAC_PI_2;
                    DVec2::from_angle(angle) * r
                })
                .collect()
        }
        ShapeGeometry::Heart { width, height, .. } => heart_outline(width, height),
    };

    let rot = DVec2::from_angle(rotation);
    local.into_iter().map(|p| center + rot.rotate(p)).collect()
}

/// Classic parametric heart, fitted to a `width x height` box around the origin.
fn heart_outline(width: f64, height: f64) -> Vec<DVec2> {
    let raw: Vec<DVec2> = (0..HEART_SEGMENTS)
        .map(|i| {
            let t = TAU * i as f64 / HEART_SEGMENTS as f64;
            let x = 16.0 * t.sin().powi(3);
            let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos()
                - (4.0 * t).cos());
            DVec2::new(x, y)
        })
        .collect();

    let min = raw.iter().copied().fold(DVec2::splat(f64::MAX), DVec2::min);
    let max = raw.iter().copied().fold(DVec2::splat(f64::MIN), DVec2::max);
    let span = (max - min).max(DVec2::splat(f64::EPSILON));
    let size = DVec2::new(width, height);
    raw.into_iter()
        .map(|p| ((p - min) / span - 0.5) * size)
        .collect()
}

/// Draws every shape outline, in paint order, and saves a PNG.
pub fn render_result_to_png(
    result: &GenerationResult,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let size = config.size_px.max(1);
    let mut img = RgbImage::from_pixel(size, size, Rgb(config.background));
    let scale = size as f64;

    for shape in &result.shapes {
        let points = outline(&shape.geometry, shape.rotation);
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            stroke_segment(&mut img, *a * scale, b * scale, config);
        }
    }

    img.save(path)
        .with_context(|| format!("saving {}", path.display()))?;
    info!("Wrote {} ({} shapes).", path.display(), result.shapes.len());
    Ok(())
}

fn stroke_segment(img: &mut RgbImage, a: DVec2, b: DVec2, config: &RenderConfig) {
    let radius = (config.stroke_px * 0.5).max(0.5);
    let steps = (a.distance(b).ceil() as usize).max(1);
    for s in 0..=steps {
        let p = a.lerp(b, s as f64 / steps as f64);
        stamp(img, p, radius, config.stroke);
    }
}

fn stamp(img: &mut RgbImage, p: DVec2, radius: f64, color: [u8; 3]) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    let r = radius.ceil() as i64;
    let (px, py) = (p.x.round() as i64, p.y.round() as i64);
    for y in (py - r).max(0)..=(py + r).min(h - 1) {
        for x in (px - r).max(0)..=(px + r).min(w - 1) {
            let d = DVec2::new(x as f64, y as f64) - p;
            if d.length_squared() <= radius * radius {
                img.put_pixel(x as u32, y as u32, Rgb(color));
            }
        }
    }
}
