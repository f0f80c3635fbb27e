//! Event types and sinks for observing generation runs.
//!
//! This module defines [`GenerationEvent`] and a set of sinks and adapters to emit,
//! collect, or forward events while a [`crate::compose::runner::Generator`] expands a
//! request into passes and shapes.
use glam::DVec2;

use crate::catalog::{Difficulty, ShapeKind, ThemeId};
use crate::compose::style::Style;
use crate::layout::PassStats;

/// Discriminant of a [`GenerationEvent`], used by sinks to opt out of event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationEventKind {
    GenerationStarted,
    PassStarted,
    ShapePlaced,
    PlacementForced,
    PassFinished,
    GenerationFinished,
    Warning,
}

/// Describes events emitted while generating a page.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum GenerationEvent {
    /// Emitted once the seed and theme are resolved, before any pass runs.
    GenerationStarted {
        /// Placement seed in use.
        seed: u32,
        /// Concrete theme the archetypes come from.
        theme: ThemeId,
        style: Style,
        difficulty: Difficulty,
        /// Number of passes in the plan.
        pass_count: usize,
    },

    /// Emitted when a pass starts.
    PassStarted {
        /// Index of the pass in the plan.
        index: usize,
        /// The pass id.
        id: String,
    },

    /// Emitted for every shape a pass keeps, in paint order.
    ShapePlaced {
        pass_index: usize,
        kind: ShapeKind,
        center: DVec2,
        layer: u8,
    },

    /// Emitted in addition to [`GenerationEvent::ShapePlaced`] when the shape was placed
    /// without a collision-free spot.
    PlacementForced {
        pass_index: usize,
        kind: ShapeKind,
        center: DVec2,
    },

    /// Emitted when a pass finishes.
    PassFinished {
        index: usize,
        id: String,
        /// Shapes kept by this pass.
        placed: usize,
        stats: PassStats,
    },

    /// Emitted after synthesis.
    GenerationFinished {
        seed: u32,
        shape_count: usize,
    },

    /// Non-fatal warning generated during generation.
    Warning {
        /// Context string (e.g. pass id).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

impl GenerationEvent {
    pub fn kind(&self) -> GenerationEventKind {
        match self {
            GenerationEvent::GenerationStarted { .. } => GenerationEventKind::GenerationStarted,
            GenerationEvent::PassStarted { .. } => GenerationEventKind::PassStarted,
            GenerationEvent::ShapePlaced { .. } => GenerationEventKind::ShapePlaced,
            GenerationEvent::PlacementForced { .. } => GenerationEventKind::PlacementForced,
            GenerationEvent::PassFinished { .. } => GenerationEventKind::PassFinished,
            GenerationEvent::GenerationFinished { .. } => GenerationEventKind::GenerationFinished,
            GenerationEvent::Warning { .. } => GenerationEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`GenerationEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: GenerationEvent);

    /// Whether events of `kind` should be built at all. Emitters skip constructing
    /// events a sink does not want.
    #[inline]
    fn wants(&self, _kind: GenerationEventKind) -> bool {
        true
    }

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = GenerationEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: GenerationEvent) {}

    #[inline]
    fn wants(&self, _kind: GenerationEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    #[inline]
    fn send(&mut self, event: GenerationEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally restricted to some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<GenerationEvent>,
    only: Option<Vec<GenerationEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
            only: None,
        }
    }

    /// Collect only events of the given kinds.
    pub fn only(kinds: impl IntoIterator<Item = GenerationEventKind>) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.into_iter().collect()),
        }
    }

    pub fn into_inner(self) -> Vec<GenerationEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[GenerationEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: GenerationEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: GenerationEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: GenerationEvent) {
        let kind = event.kind();
        let Some(last_idx) = self.sinks.iter().rposition(|s| s.wants(kind)) else {
            return;
        };
        for i in 0..last_idx {
            if self.sinks[i].wants(kind) {
                self.sinks[i].send(event.clone());
            }
        }
        self.sinks[last_idx].send(event);
    }

    fn wants(&self, kind: GenerationEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}

/// Minimal adapter trait for types that can expose an [`EventSink`].
pub trait AsEventSink {
    fn as_event_sink(&mut self) -> &mut dyn EventSink;
}

impl<S: EventSink> AsEventSink for S {
    fn as_event_sink(&mut self) -> &mut dyn EventSink {
        self
    }
}
