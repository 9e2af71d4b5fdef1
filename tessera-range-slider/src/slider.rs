//! The slider controller.
//!
//! ## Usage
//!
//! Build a [`RangeSlider`] from [`SliderArgs`] and a [`GeometryAdapter`],
//! then feed it pointer gestures ([`RangeSlider::handle_gesture`]) and key
//! presses ([`RangeSlider::handle_key`]). Every accepted change is projected
//! back onto the adapter and reported through `on_change`.
//!
//! ```
//! use std::time::Instant;
//!
//! use tessera_range_slider::{
//!     DualValue, GestureEvent, GestureKind, RangeSlider, SliderArgs, SliderMode, SliderValue,
//!     geometry::{GeometryAdapter, ThumbExtent},
//!     handle::SliderHandle,
//!     px::{Axis, Px},
//!     render::{TickPattern, TrackHighlight},
//! };
//!
//! struct Track;
//!
//! impl GeometryAdapter for Track {
//!     fn track_width(&self, _: Axis) -> Px { Px(100) }
//!     fn track_offset(&self, _: Axis) -> Px { Px(0) }
//!     fn thumb_extent(&self, handle: SliderHandle, _: Axis) -> ThumbExtent {
//!         match handle {
//!             SliderHandle::Lower => ThumbExtent::new(Px(15), Px(10)),
//!             SliderHandle::Upper => ThumbExtent::new(Px(75), Px(10)),
//!         }
//!     }
//!     fn focus_thumb(&mut self, _: SliderHandle) {}
//!     fn apply_thumb_position(&mut self, _: SliderHandle, _: f64) {}
//!     fn apply_track_highlight(&mut self, _: TrackHighlight) {}
//!     fn set_track_background(&mut self, _: Option<TickPattern>) {}
//! }
//!
//! let args = SliderArgs::default()
//!     .mode(SliderMode::DualHorizontal)
//!     .value(DualValue::new(20.0, 80.0));
//! let mut slider = RangeSlider::new(args, Track).expect("valid args");
//!
//! slider.handle_gesture(GestureEvent::at_x(GestureKind::Tap, 50), Instant::now());
//! assert_eq!(slider.value(), SliderValue::Dual(DualValue::new(20.0, 50.0)));
//! ```

use std::time::Instant;

use tracing::{debug, trace};

use crate::{
    args::SliderArgs,
    error::SliderError,
    format::format_value,
    geometry::GeometryAdapter,
    handle::SliderHandle,
    label::ThumbLabel,
    pointer::PointerSample,
    prop::{Callback, CallbackWith},
    render::{RenderProjection, TickPattern, project},
    value::{RangeAdjustment, SliderMode, SliderValue, ValueModel, ValueUpdate},
};

pub use drag::{DragState, GestureOutcome};
pub use keyboard::{KeyOutcome, SliderKey};

mod drag;
mod keyboard;

/// Interactive state of one slider: the value model plus the drag, focus
/// and label state driven by input events.
pub struct RangeSlider<G> {
    model: ValueModel,
    geometry: G,
    active_handle: SliderHandle,
    focused: Option<SliderHandle>,
    drag: DragState,
    label: ThumbLabel,
    step_range: f64,
    digits_after_decimal_points: usize,
    last_pointer: Option<PointerSample>,
    on_change: CallbackWith<SliderValue>,
    on_touched: Callback,
}

impl<G: GeometryAdapter> RangeSlider<G> {
    /// Builds a slider and draws its initial state.
    ///
    /// Collapsed domains or bounds are corrected; an initial value that does
    /// not fit the bounds is dropped in favour of the default position.
    pub fn new(args: SliderArgs, geometry: G) -> Result<Self, SliderError> {
        args.validate()?;

        let mut model = ValueModel::new(args.mode);
        model.set_domain(args.min_value, args.max_value);
        match (args.lower_bound, args.upper_bound) {
            (Some(lower), Some(upper)) => {
                model.set_bounds(lower, upper);
            }
            (Some(lower), None) => {
                model.set_lower_bound(lower);
            }
            (None, Some(upper)) => {
                model.set_upper_bound(upper);
            }
            (None, None) => {}
        }
        model.reset_to_bounds();
        if let Some(value) = args.value
            && model.set_value(value) != ValueUpdate::Accepted
        {
            debug!(?value, "initial slider value does not fit, using bounds");
            model.reset_to_bounds();
        }

        let mut slider = Self {
            model,
            geometry,
            active_handle: SliderHandle::Upper,
            focused: None,
            drag: DragState::Idle,
            label: ThumbLabel::new(args.thumb_label_visibility_duration),
            step_range: args.step_range,
            digits_after_decimal_points: args.digits_after_decimal_points,
            last_pointer: None,
            on_change: args.on_change,
            on_touched: args.on_touched,
        };
        slider.render();
        slider.draw_ticks();
        Ok(slider)
    }

    /// Current value.
    pub fn value(&self) -> SliderValue {
        self.model.value()
    }

    /// The value model.
    pub fn model(&self) -> &ValueModel {
        &self.model
    }

    /// The slider mode.
    pub fn mode(&self) -> SliderMode {
        self.model.mode()
    }

    /// The geometry adapter.
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Mutable access to the geometry adapter, e.g. after a layout pass.
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    /// The thumb the next drag or key press moves.
    pub fn active_handle(&self) -> SliderHandle {
        self.active_handle
    }

    /// The thumb holding keyboard focus.
    pub fn focused_handle(&self) -> Option<SliderHandle> {
        self.focused
    }

    /// Drag state machine.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Active { .. })
    }

    /// Whether the thumb label is shown.
    pub fn is_active_label(&self) -> bool {
        self.label.is_visible()
    }

    /// The thumb label state.
    pub fn label(&self) -> &ThumbLabel {
        &self.label
    }

    /// Measurements taken for the last pointer event.
    pub fn last_pointer(&self) -> Option<PointerSample> {
        self.last_pointer
    }

    /// Keyboard increment.
    pub fn step_range(&self) -> f64 {
        self.step_range
    }

    /// Label text of the lower thumb.
    pub fn lower_label(&self) -> String {
        format_value(self.model.lower_value(), self.digits_after_decimal_points)
    }

    /// Label text of the upper (or only) thumb.
    pub fn upper_label(&self) -> String {
        format_value(self.model.upper_value(), self.digits_after_decimal_points)
    }

    /// Projection of the current value onto the track.
    pub fn projection(&self) -> RenderProjection {
        project(&self.model)
    }

    /// Registers the value-change listener.
    pub fn set_on_change(&mut self, on_change: impl Into<CallbackWith<SliderValue>>) {
        self.on_change = on_change.into();
    }

    /// Registers the gesture-completed listener.
    pub fn set_on_touched(&mut self, on_touched: impl Into<Callback>) {
        self.on_touched = on_touched.into();
    }

    /// Proposes a value from the host, notifying `on_change` if it lands.
    pub fn set_value(&mut self, value: impl Into<SliderValue>) -> ValueUpdate {
        self.commit(value.into(), true)
    }

    /// Writes a value from a form binding. Same validation as
    /// [`RangeSlider::set_value`], but the change is not echoed back through
    /// `on_change`.
    pub fn write_value(&mut self, value: impl Into<SliderValue>) -> ValueUpdate {
        self.commit(value.into(), false)
    }

    /// Changes the domain.
    pub fn set_domain(&mut self, min: f64, max: f64) -> RangeAdjustment {
        self.reconfigure(|model| model.set_domain(min, max))
    }

    /// Changes the domain minimum; see [`ValueModel::set_min_value`].
    pub fn set_min_value(&mut self, min: f64) -> RangeAdjustment {
        self.reconfigure(|model| model.set_min_value(min))
    }

    /// Changes the domain maximum; see [`ValueModel::set_max_value`].
    pub fn set_max_value(&mut self, max: f64) -> RangeAdjustment {
        self.reconfigure(|model| model.set_max_value(max))
    }

    /// Changes both bounds.
    pub fn set_bounds(&mut self, lower: f64, upper: f64) -> RangeAdjustment {
        self.reconfigure(|model| model.set_bounds(lower, upper))
    }

    /// Changes the lower bound only.
    pub fn set_lower_bound(&mut self, lower: f64) -> RangeAdjustment {
        self.reconfigure(|model| model.set_lower_bound(lower))
    }

    /// Changes the upper bound only.
    pub fn set_upper_bound(&mut self, upper: f64) -> RangeAdjustment {
        self.reconfigure(|model| model.set_upper_bound(upper))
    }

    /// Changes the keyboard increment and redraws the tick marks.
    pub fn set_step_range(&mut self, step_range: f64) -> Result<(), SliderError> {
        if !step_range.is_finite() || step_range <= 0.0 {
            return Err(SliderError::InvalidStepRange(step_range));
        }
        self.step_range = step_range;
        self.draw_ticks();
        Ok(())
    }

    /// Changes how long the label lingers after a gesture.
    pub fn set_label_duration(&mut self, duration: std::time::Duration) {
        self.label.set_duration(duration);
    }

    /// Applies an elapsed label deadline. Returns whether the label is shown.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.label.poll(now)
    }

    fn reconfigure(
        &mut self,
        f: impl FnOnce(&mut ValueModel) -> RangeAdjustment,
    ) -> RangeAdjustment {
        let previous = self.model.value();
        let adjustment = f(&mut self.model);
        self.render();
        let current = self.model.value();
        if current != previous {
            self.on_change.call(current);
        }
        adjustment
    }

    /// Runs a candidate through the model, redraws, and reports a change.
    fn commit(&mut self, candidate: SliderValue, notify: bool) -> ValueUpdate {
        let previous = self.model.value();
        let update = self.model.set_value(candidate);
        self.finish_update(previous, update, notify)
    }

    fn commit_handle(&mut self, handle: SliderHandle, value: f64) -> ValueUpdate {
        let previous = self.model.value();
        let update = self.model.set_handle_value(handle, value);
        self.finish_update(previous, update, true)
    }

    fn finish_update(
        &mut self,
        previous: SliderValue,
        update: ValueUpdate,
        notify: bool,
    ) -> ValueUpdate {
        if !update.is_accepted() {
            return update;
        }
        self.render();
        let current = self.model.value();
        if notify && current != previous {
            trace!(?current, "slider value changed");
            self.on_change.call(current);
        }
        update
    }

    fn render(&mut self) {
        project(&self.model).apply(&mut self.geometry);
    }

    fn draw_ticks(&mut self) {
        self.geometry
            .set_track_background(TickPattern::from_step_range(self.step_range));
    }
}
