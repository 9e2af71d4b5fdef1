//! Headless core for single and dual-thumb range sliders.
//!
//! The crate owns everything a slider widget needs besides drawing: the
//! numeric model with its domain and bounds, mapping pointer positions onto
//! that model, picking which thumb a gesture moves, keyboard stepping, and
//! the thumb label that lingers after a drag. Host toolkits plug in through
//! [`GeometryAdapter`], which reports measured track and thumb geometry and
//! receives the resulting thumb positions and track highlight.
//!
//! # Example
//!
//! ```
//! use tessera_range_slider::{
//!     GeometryAdapter, KeyOutcome, RangeSlider, SliderArgs, SliderHandle, SliderKey,
//!     SliderValue, TickPattern, TrackHighlight,
//!     geometry::ThumbExtent,
//!     px::{Axis, Px},
//! };
//!
//! #[derive(Default)]
//! struct Track {
//!     thumb_percent: f64,
//! }
//!
//! impl GeometryAdapter for Track {
//!     fn track_width(&self, _: Axis) -> Px { Px(200) }
//!     fn track_offset(&self, _: Axis) -> Px { Px(0) }
//!     fn thumb_extent(&self, _: SliderHandle, _: Axis) -> ThumbExtent {
//!         ThumbExtent::new(Px::saturating_from_f64(self.thumb_percent * 2.0), Px(0))
//!     }
//!     fn focus_thumb(&mut self, _: SliderHandle) {}
//!     fn apply_thumb_position(&mut self, _: SliderHandle, percent: f64) {
//!         self.thumb_percent = percent;
//!     }
//!     fn apply_track_highlight(&mut self, _: TrackHighlight) {}
//!     fn set_track_background(&mut self, _: Option<TickPattern>) {}
//! }
//!
//! let mut slider = RangeSlider::new(
//!     SliderArgs::default().value(10.0).digits_after_decimal_points(1),
//!     Track::default(),
//! )
//! .expect("valid args");
//! assert_eq!(slider.geometry().thumb_percent, 10.0);
//!
//! slider.focus(SliderHandle::Upper);
//! assert!(matches!(slider.handle_key(SliderKey::Increment), KeyOutcome::Stepped(_)));
//! assert_eq!(slider.value(), SliderValue::Single(11.0));
//! assert_eq!(slider.upper_label(), "11.0");
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod args;
pub mod error;
pub mod format;
pub mod geometry;
pub mod handle;
pub mod label;
pub mod pointer;
pub mod prop;
pub mod px;
pub mod render;
pub mod slider;
pub mod state;
pub mod value;

#[cfg(test)]
mod testing;

pub use args::SliderArgs;
pub use error::SliderError;
pub use format::format_value;
pub use geometry::GeometryAdapter;
pub use handle::SliderHandle;
pub use label::ThumbLabel;
pub use pointer::{GestureEvent, GestureKind};
pub use prop::{Callback, CallbackWith};
pub use render::{RenderProjection, TickPattern, TrackHighlight};
pub use slider::{DragState, GestureOutcome, KeyOutcome, RangeSlider, SliderKey};
pub use state::State;
pub use value::{DualValue, RangeAdjustment, SliderMode, SliderValue, ValueModel, ValueUpdate};
