#![forbid(unsafe_code)]
//! coloring_compose: procedural coloring-page composition.
//!
//! Modules:
//! - rng: Park–Miller seeded generator and sampling helpers
//! - catalog: themes, shape archetypes and difficulty tiers
//! - layout: free-scatter, mandala and grid planners over normalized canvas coordinates
//! - compose: styles, plans, runner and events
//! - synth: conversion of placements into native shape descriptors
//!
//! Given the same request and seed, generation is fully reproducible.
pub mod catalog;
pub mod compose;
pub mod error;
pub mod layout;
pub mod rng;
pub mod synth;

/// Convenient re-exports for common types. Import with `use coloring_compose::prelude::*;`.
pub mod prelude {
    pub use crate::catalog::{
        difficulty_profile, theme, Difficulty, DifficultyProfile, LayerPreference,
        ShapeArchetype, ShapeKind, Theme, ThemeId, ValueRange,
    };
    pub use crate::compose::events::{
        AsEventSink, EventSink, FnSink, GenerationEvent, GenerationEventKind, MultiSink, VecSink,
    };
    pub use crate::compose::overlay::PassOverlay;
    pub use crate::compose::plan::{build_plan, CompositionPlan, Pass, PassSeed};
    pub use crate::compose::runner::{generate, resolve_theme, run_plan, Generator};
    pub use crate::compose::{
        default_rules, GenerationMetadata, GenerationRequest, GenerationResult, Style,
    };
    pub use crate::error::{Error, Result};
    pub use crate::layout::{
        CompositionRules, Density, FocalPoint, FreeScatterLayout, GridFrame, GridLayout,
        LayoutOutcome, LayoutPlanner, MandalaLayout, PassStats, PlacedShape,
    };
    pub use crate::rng::{
        normalize_seed, offset_seed, ParkMiller, RandomExt, RandomSource, RngSource,
    };
    pub use crate::synth::{
        synthesize, Clock, FixedClock, IdSource, SequentialIds, ShapeDescriptor, ShapeGeometry,
        ShapeId, SystemClock,
    };
}
