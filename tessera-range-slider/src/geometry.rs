//! Boundary to the rendering layer that owns the track and thumb elements.
//!
//! The core never measures anything itself. At the start of every input
//! event it asks the [`GeometryAdapter`] for the current track extent and
//! thumb positions, and after every accepted update it hands the projected
//! positions back. Measurements are not cached between events; layout may
//! change between two drags.

use crate::{
    handle::SliderHandle,
    px::{Axis, Px},
    render::{TickPattern, TrackHighlight},
};

/// Position and size of a thumb along the slider axis, relative to the
/// track's leading edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ThumbExtent {
    /// Leading edge of the thumb.
    pub offset: Px,
    /// Size of the thumb along the axis.
    pub size: Px,
}

impl ThumbExtent {
    /// Creates an extent.
    pub const fn new(offset: Px, size: Px) -> Self {
        Self { offset, size }
    }

    /// Center of the thumb in track-relative pixels.
    pub fn center(self) -> f64 {
        self.offset.to_f64() + self.size.to_f64() / 2.0
    }
}

/// Geometry provider and presentation sink for one slider instance.
///
/// Readers take an [`Axis`] so the same adapter can serve horizontal and
/// vertical sliders. Writers receive percentages of the track.
pub trait GeometryAdapter {
    /// Length of the track along `axis`. Zero for a hidden or not yet laid
    /// out slider.
    fn track_width(&self, axis: Axis) -> Px;

    /// Absolute position of the track's leading edge along `axis`, in the
    /// same coordinate space as pointer events.
    fn track_offset(&self, axis: Axis) -> Px;

    /// Current extent of `handle` along `axis`.
    fn thumb_extent(&self, handle: SliderHandle, axis: Axis) -> ThumbExtent;

    /// Moves input focus to `handle`.
    fn focus_thumb(&mut self, handle: SliderHandle);

    /// Positions `handle` at `percent` of the track.
    fn apply_thumb_position(&mut self, handle: SliderHandle, percent: f64);

    /// Updates the highlighted part of the track.
    fn apply_track_highlight(&mut self, highlight: TrackHighlight);

    /// Draws tick marks, or clears them when `ticks` is `None`.
    fn set_track_background(&mut self, ticks: Option<TickPattern>);
}
