//! Configuration accepted by [`RangeSlider::new`](crate::RangeSlider::new).

use std::time::Duration;

use derive_setters::Setters;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::SliderError,
    label::DEFAULT_LABEL_VISIBILITY,
    prop::{Callback, CallbackWith},
    value::{SliderMode, SliderValue, ValueModel},
};

/// Arguments for a [`RangeSlider`](crate::RangeSlider).
#[derive(Debug, PartialEq, Clone, Setters)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderArgs {
    /// Thumb count and orientation.
    pub mode: SliderMode,
    /// Start of the domain mapped onto the track.
    pub min_value: f64,
    /// End of the domain mapped onto the track.
    pub max_value: f64,
    /// Lowest value a thumb may take. Defaults to `min_value`.
    #[setters(strip_option)]
    pub lower_bound: Option<f64>,
    /// Highest value a thumb may take. Defaults to `max_value`.
    #[setters(strip_option)]
    pub upper_bound: Option<f64>,
    /// Initial value. Defaults to the lower bound (single) or the full
    /// bounds (dual).
    #[setters(strip_option, into)]
    pub value: Option<SliderValue>,
    /// Keyboard increment, also used to space the tick marks.
    pub step_range: f64,
    /// Fractional digits shown in the thumb labels.
    pub digits_after_decimal_points: usize,
    /// How long the thumb label stays visible after a gesture ends.
    pub thumb_label_visibility_duration: Duration,
    /// Called with the new value after every accepted change.
    #[setters(skip)]
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_change: CallbackWith<SliderValue>,
    /// Called once per completed gesture.
    #[setters(skip)]
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_touched: Callback,
}

impl SliderArgs {
    /// Sets the on_change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(SliderValue) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the on_change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<SliderValue>>) -> Self {
        self.on_change = on_change.into();
        self
    }

    /// Sets the on_touched handler.
    pub fn on_touched<F>(mut self, on_touched: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_touched = Callback::new(on_touched);
        self
    }

    /// Checks the numeric options.
    ///
    /// Collapsed ranges are not errors; they are corrected when the slider
    /// is built. Only values no correction can fix are reported.
    pub fn validate(&self) -> Result<(), SliderError> {
        let finite = |name: &'static str, value: f64| {
            if value.is_finite() {
                Ok(())
            } else {
                Err(SliderError::NonFiniteOption { name, value })
            }
        };

        finite("min_value", self.min_value)?;
        finite("max_value", self.max_value)?;
        if ValueModel::correct_domain(self.min_value, self.max_value).is_none() {
            return Err(SliderError::UnusableDomain {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if let Some(lower) = self.lower_bound {
            finite("lower_bound", lower)?;
        }
        if let Some(upper) = self.upper_bound {
            finite("upper_bound", upper)?;
        }
        match self.value {
            Some(SliderValue::Single(value)) => finite("value", value)?,
            Some(SliderValue::Dual(pair)) => {
                finite("value.lower", pair.lower)?;
                finite("value.upper", pair.upper)?;
            }
            None => {}
        }
        if !self.step_range.is_finite() || self.step_range <= 0.0 {
            return Err(SliderError::InvalidStepRange(self.step_range));
        }
        Ok(())
    }
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            mode: SliderMode::default(),
            min_value: ValueModel::DEFAULT_MIN,
            max_value: ValueModel::DEFAULT_MAX,
            lower_bound: None,
            upper_bound: None,
            value: None,
            step_range: 1.0,
            digits_after_decimal_points: 0,
            thumb_label_visibility_duration: DEFAULT_LABEL_VISIBILITY,
            on_change: CallbackWith::noop(),
            on_touched: Callback::noop(),
        }
    }
}
