//! Test doubles shared by the unit tests.

use std::cell::Cell;

use tracing_subscriber::EnvFilter;

use crate::{
    geometry::{GeometryAdapter, ThumbExtent},
    handle::SliderHandle,
    px::{Axis, Px},
    render::{TickPattern, TrackHighlight},
};

/// Size of the fake thumbs along the slider axis.
pub(crate) const THUMB_SIZE: i32 = 10;

/// Installs a test-writer subscriber; honours `RUST_LOG`.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A call the core made into the geometry adapter.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum GeometryCall {
    Focus(SliderHandle),
    Thumb(SliderHandle, f64),
    Highlight(TrackHighlight),
    Background(Option<TickPattern>),
}

/// In-memory track that records everything applied to it.
///
/// Thumb extents follow the applied percentages, the way a laid-out widget tree
/// would after a re-render.
#[derive(Debug, Clone)]
pub(crate) struct RecordingGeometry {
    pub axis: Axis,
    pub offset: Px,
    pub width: Px,
    pub lower: ThumbExtent,
    pub upper: ThumbExtent,
    pub calls: Vec<GeometryCall>,
    /// Number of track measurements taken.
    pub reads: Cell<usize>,
}

impl RecordingGeometry {
    pub fn new(axis: Axis, offset: i32, width: i32) -> Self {
        Self {
            axis,
            offset: Px(offset),
            width: Px(width),
            lower: ThumbExtent::new(Px(-THUMB_SIZE / 2), Px(THUMB_SIZE)),
            upper: ThumbExtent::new(Px(width - THUMB_SIZE / 2), Px(THUMB_SIZE)),
            calls: Vec::new(),
            reads: Cell::new(0),
        }
    }

    pub fn horizontal(offset: i32, width: i32) -> Self {
        Self::new(Axis::Horizontal, offset, width)
    }

    pub fn vertical(offset: i32, width: i32) -> Self {
        Self::new(Axis::Vertical, offset, width)
    }

    pub fn focused(&self) -> Vec<SliderHandle> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                GeometryCall::Focus(handle) => Some(*handle),
                _ => None,
            })
            .collect()
    }

    pub fn last_highlight(&self) -> Option<TrackHighlight> {
        self.calls.iter().rev().find_map(|call| match call {
            GeometryCall::Highlight(highlight) => Some(*highlight),
            _ => None,
        })
    }

    pub fn last_background(&self) -> Option<Option<TickPattern>> {
        self.calls.iter().rev().find_map(|call| match call {
            GeometryCall::Background(ticks) => Some(*ticks),
            _ => None,
        })
    }

    fn along(&self, axis: Axis, value: Px) -> Px {
        if axis == self.axis { value } else { Px::ZERO }
    }
}

impl GeometryAdapter for RecordingGeometry {
    fn track_width(&self, axis: Axis) -> Px {
        self.reads.set(self.reads.get() + 1);
        self.along(axis, self.width)
    }

    fn track_offset(&self, axis: Axis) -> Px {
        self.along(axis, self.offset)
    }

    fn thumb_extent(&self, handle: SliderHandle, _axis: Axis) -> ThumbExtent {
        match handle {
            SliderHandle::Lower => self.lower,
            SliderHandle::Upper => self.upper,
        }
    }

    fn focus_thumb(&mut self, handle: SliderHandle) {
        self.calls.push(GeometryCall::Focus(handle));
    }

    fn apply_thumb_position(&mut self, handle: SliderHandle, percent: f64) {
        let center = self.width.to_f64() * percent / 100.0;
        let extent = ThumbExtent::new(
            Px::saturating_from_f64(center) - Px(THUMB_SIZE / 2),
            Px(THUMB_SIZE),
        );
        match handle {
            SliderHandle::Lower => self.lower = extent,
            SliderHandle::Upper => self.upper = extent,
        }
        self.calls.push(GeometryCall::Thumb(handle, percent));
    }

    fn apply_track_highlight(&mut self, highlight: TrackHighlight) {
        self.calls.push(GeometryCall::Highlight(highlight));
    }

    fn set_track_background(&mut self, ticks: Option<TickPattern>) {
        self.calls.push(GeometryCall::Background(ticks));
    }
}
