use tracing::{debug, trace};

use super::RangeSlider;
use crate::{geometry::GeometryAdapter, handle::SliderHandle, value::ValueUpdate};

/// Direction of a keyboard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderKey {
    /// Step down by `step_range`.
    Decrement,
    /// Step up by `step_range`.
    Increment,
}

impl SliderKey {
    /// Maps a key name such as `"ArrowLeft"` or `"Right"` to a step.
    ///
    /// Names are matched by suffix: `Left` and `Down` decrement, `Right` and
    /// `Up` increment. Anything else is not a slider key.
    pub fn from_key_name(name: &str) -> Option<Self> {
        if name.ends_with("Left") || name.ends_with("Down") {
            Some(SliderKey::Decrement)
        } else if name.ends_with("Right") || name.ends_with("Up") {
            Some(SliderKey::Increment)
        } else {
            None
        }
    }

    fn sign(self) -> f64 {
        match self {
            SliderKey::Decrement => -1.0,
            SliderKey::Increment => 1.0,
        }
    }
}

/// What a key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No thumb has focus.
    Ignored,
    /// The focused thumb was stepped (or the step was rejected at a bound).
    Stepped(ValueUpdate),
    /// The step would have met or crossed the other thumb; focus moved to
    /// it and the value is unchanged.
    FocusTransferred(SliderHandle),
}

impl<G: GeometryAdapter> RangeSlider<G> {
    /// Records that `handle` received input focus; it becomes the active
    /// handle. Single-thumb sliders have no lower thumb to focus.
    pub fn focus(&mut self, handle: SliderHandle) -> bool {
        if handle == SliderHandle::Lower && !self.model.is_dual() {
            debug!("single-thumb slider has no lower thumb to focus");
            return false;
        }
        self.focused = Some(handle);
        self.active_handle = handle;
        true
    }

    /// Records that the thumbs lost focus and hides the label.
    pub fn blur(&mut self) {
        self.focused = None;
        self.label.hide();
    }

    /// Hides the label when the stepping key is released.
    pub fn release_key(&mut self) {
        self.label.hide();
    }

    /// Steps the focused thumb by `step_range`.
    ///
    /// In dual mode a step that would meet or cross the other thumb is not
    /// applied; focus moves to that thumb instead, so the next press moves
    /// it. Steps past a bound are rejected silently. An accepted step shows
    /// the label without scheduling a fade.
    pub fn handle_key(&mut self, key: SliderKey) -> KeyOutcome {
        let Some(handle) = self.focused else {
            trace!(?key, "ignoring key press without a focused thumb");
            return KeyOutcome::Ignored;
        };
        let delta = key.sign() * self.step_range;

        if self.model.is_dual() {
            let lower = self.model.lower_value();
            let upper = self.model.upper_value();
            let blocked = match handle {
                SliderHandle::Lower => lower + delta >= upper,
                SliderHandle::Upper => upper + delta <= lower,
            };
            if blocked {
                let other = handle.opposite();
                debug!(?handle, ?other, "step blocked by neighbouring thumb, moving focus");
                self.geometry.focus_thumb(other);
                self.focus(other);
                return KeyOutcome::FocusTransferred(other);
            }
        }

        let target = self.model.handle_value(handle) + delta;
        let update = self.commit_handle(handle, target);
        if update.is_accepted() {
            self.label.show();
        }
        KeyOutcome::Stepped(update)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::{
        args::SliderArgs,
        pointer::{GestureEvent, GestureKind},
        testing::RecordingGeometry,
        value::{DualValue, SliderMode, SliderValue},
    };

    fn dual(lower: f64, upper: f64, step: f64) -> RangeSlider<RecordingGeometry> {
        let args = SliderArgs::default()
            .mode(SliderMode::DualHorizontal)
            .value(DualValue::new(lower, upper))
            .step_range(step);
        RangeSlider::new(args, RecordingGeometry::horizontal(0, 100)).expect("valid args")
    }

    fn single(value: f64) -> RangeSlider<RecordingGeometry> {
        let args = SliderArgs::default().value(value);
        RangeSlider::new(args, RecordingGeometry::horizontal(0, 100)).expect("valid args")
    }

    #[test]
    fn key_names_map_by_suffix() {
        assert_eq!(SliderKey::from_key_name("ArrowLeft"), Some(SliderKey::Decrement));
        assert_eq!(SliderKey::from_key_name("Left"), Some(SliderKey::Decrement));
        assert_eq!(SliderKey::from_key_name("ArrowDown"), Some(SliderKey::Decrement));
        assert_eq!(SliderKey::from_key_name("ArrowRight"), Some(SliderKey::Increment));
        assert_eq!(SliderKey::from_key_name("ArrowUp"), Some(SliderKey::Increment));
        assert_eq!(SliderKey::from_key_name("Enter"), None);
    }

    #[test]
    fn keys_need_a_focused_thumb() {
        let mut slider = single(10.0);
        assert_eq!(slider.handle_key(SliderKey::Decrement), KeyOutcome::Ignored);
        assert_eq!(slider.value(), SliderValue::Single(10.0));
    }

    #[test]
    fn single_steps_until_bound() {
        let mut slider = single(1.0);
        assert!(slider.focus(SliderHandle::Upper));
        assert!(!slider.focus(SliderHandle::Lower));

        assert_eq!(
            slider.handle_key(SliderKey::Decrement),
            KeyOutcome::Stepped(ValueUpdate::Accepted)
        );
        assert_eq!(slider.value(), SliderValue::Single(0.0));
        assert!(slider.is_active_label());

        slider.release_key();
        assert_eq!(
            slider.handle_key(SliderKey::Decrement),
            KeyOutcome::Stepped(ValueUpdate::Rejected)
        );
        assert_eq!(slider.value(), SliderValue::Single(0.0));
        assert!(!slider.is_active_label());
    }

    #[test]
    fn single_step_from_ten() {
        let mut slider = single(10.0);
        slider.focus(SliderHandle::Upper);
        slider.handle_key(SliderKey::Decrement);
        assert_eq!(slider.value(), SliderValue::Single(9.0));
    }

    #[test]
    fn lower_thumb_hands_focus_to_upper_when_blocked() {
        let mut slider = dual(40.0, 60.0, 5.0);
        slider.focus(SliderHandle::Lower);

        for expected in [45.0, 50.0, 55.0] {
            assert_eq!(
                slider.handle_key(SliderKey::Increment),
                KeyOutcome::Stepped(ValueUpdate::Accepted)
            );
            assert_eq!(slider.model().lower_value(), expected);
        }

        assert_eq!(
            slider.handle_key(SliderKey::Increment),
            KeyOutcome::FocusTransferred(SliderHandle::Upper)
        );
        assert_eq!(slider.value(), SliderValue::Dual(DualValue::new(55.0, 60.0)));
        assert_eq!(slider.focused_handle(), Some(SliderHandle::Upper));
        assert_eq!(slider.active_handle(), SliderHandle::Upper);
        assert_eq!(slider.geometry().focused(), vec![SliderHandle::Upper]);

        // The next press now moves the upper thumb.
        slider.handle_key(SliderKey::Increment);
        assert_eq!(slider.value(), SliderValue::Dual(DualValue::new(55.0, 65.0)));
    }

    #[test]
    fn upper_thumb_hands_focus_to_lower_when_blocked() {
        let mut slider = dual(40.0, 45.0, 5.0);
        slider.focus(SliderHandle::Upper);
        assert_eq!(
            slider.handle_key(SliderKey::Decrement),
            KeyOutcome::FocusTransferred(SliderHandle::Lower)
        );
        assert_eq!(slider.value(), SliderValue::Dual(DualValue::new(40.0, 45.0)));
        assert_eq!(slider.focused_handle(), Some(SliderHandle::Lower));
    }

    #[test]
    fn dual_step_past_bound_is_rejected_silently() {
        let mut slider = dual(2.0, 60.0, 5.0);
        slider.focus(SliderHandle::Lower);
        assert_eq!(
            slider.handle_key(SliderKey::Decrement),
            KeyOutcome::Stepped(ValueUpdate::Rejected)
        );
        assert_eq!(slider.value(), SliderValue::Dual(DualValue::new(2.0, 60.0)));
        assert!(slider.geometry().focused().is_empty());
    }

    #[test]
    fn keyboard_does_not_schedule_a_fade() {
        let mut slider = dual(40.0, 60.0, 1.0);
        let t0 = Instant::now();
        slider.handle_gesture(GestureEvent::at_x(GestureKind::Tap, 45), t0);
        slider.focus(SliderHandle::Lower);
        slider.handle_key(SliderKey::Decrement);
        assert!(slider.label().hide_deadline().is_none());
        assert!(slider.poll(t0 + Duration::from_secs(10)));

        slider.blur();
        assert!(!slider.is_active_label());
        assert_eq!(slider.focused_handle(), None);
    }
}
