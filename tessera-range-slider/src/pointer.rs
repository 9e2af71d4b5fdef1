//! Gesture events and the pixel-to-fraction step.

use tracing::warn;

use crate::{
    geometry::GeometryAdapter,
    px::{Axis, Px, PxPosition},
    value::{ValueModel, round_to_fixed},
};

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Pointer went down and a drag began.
    Start,
    /// Pointer moved during a drag.
    Move,
    /// Pointer was released.
    End,
    /// The gesture was aborted, e.g. the pointer left the tracking surface.
    /// Handled exactly like [`GestureKind::End`].
    Cancel,
    /// A discrete tap: start and end in one event.
    Tap,
}

impl GestureKind {
    /// `true` for the kinds that open a gesture.
    pub fn begins(self) -> bool {
        matches!(self, GestureKind::Start | GestureKind::Tap)
    }

    /// `true` for the kinds that close a gesture.
    pub fn finishes(self) -> bool {
        matches!(
            self,
            GestureKind::End | GestureKind::Cancel | GestureKind::Tap
        )
    }
}

/// A pointer event delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureEvent {
    /// Gesture phase.
    pub kind: GestureKind,
    /// Absolute pointer position, in the same space as
    /// [`GeometryAdapter::track_offset`].
    pub position: PxPosition,
}

impl GestureEvent {
    /// Creates an event.
    pub const fn new(kind: GestureKind, position: PxPosition) -> Self {
        Self { kind, position }
    }

    /// Shorthand for a horizontal slider event at `x`.
    pub const fn at_x(kind: GestureKind, x: i32) -> Self {
        Self::new(kind, PxPosition::new(Px(x), Px(0)))
    }

    /// Shorthand for a vertical slider event at `y`.
    pub const fn at_y(kind: GestureKind, y: i32) -> Self {
        Self::new(kind, PxPosition::new(Px(0), Px(y)))
    }
}

/// Measurements taken for one input event.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Track length at the time of the event.
    pub track_width: Px,
    /// Track leading edge at the time of the event.
    pub track_offset: Px,
    /// Pointer position relative to the track's leading edge.
    pub pointer: f64,
    /// Pointer position as a track fraction, clamped to `[p_min, p_max]`.
    pub fraction: f64,
}

/// Measures the track and converts `position` into a clamped track fraction.
///
/// Geometry is read fresh on every call. A zero-width track yields fraction
/// 0 (before clamping) so a hidden slider never feeds NaN into the model.
pub fn sample_pointer<G: GeometryAdapter + ?Sized>(
    geometry: &G,
    axis: Axis,
    position: PxPosition,
    model: &ValueModel,
) -> PointerSample {
    let track_width = geometry.track_width(axis);
    let track_offset = geometry.track_offset(axis);
    let pointer = position.along(axis).to_f64() - track_offset.to_f64();

    let raw = if track_width.raw() <= 0 {
        warn!(
            width = track_width.raw(),
            "slider track has no extent, treating pointer as fraction 0"
        );
        0.0
    } else {
        pointer / track_width.to_f64()
    };

    PointerSample {
        track_width,
        track_offset,
        pointer,
        fraction: model.limit(round_to_fixed(raw)),
    }
}
