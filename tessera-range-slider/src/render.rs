//! Projection of the value model onto track percentages.
//!
//! [`project`] is a pure function of a [`ValueModel`]: calling it twice on
//! the same state yields the same [`RenderProjection`]. Only
//! [`RenderProjection::apply`] touches the [`GeometryAdapter`].

use smallvec::SmallVec;

use crate::{
    geometry::GeometryAdapter,
    handle::SliderHandle,
    value::{ValueModel, round_to_fixed},
};

/// Highlighted part of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackHighlight {
    /// Single mode: the highlight grows from the track start, scaled by this
    /// factor in `[0, 1]`.
    Scale(f64),
    /// Dual mode: the highlight spans the two thumbs.
    Span {
        /// Start of the highlight, in percent of the track.
        left_percent: f64,
        /// Length of the highlight, in percent of the track.
        width_percent: f64,
    },
}

/// Evenly spaced tick marks drawn behind the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPattern {
    /// Distance between two ticks, in percent of the track.
    pub interval_percent: f64,
    /// Width of a single mark in pixels.
    pub mark_width: f64,
}

impl TickPattern {
    /// Width of a tick mark.
    pub const MARK_WIDTH: f64 = 1.5;

    /// Tick pattern for a keyboard step, spaced `100 / step_range` percent
    /// apart. Steps of 1 or less draw no ticks.
    pub fn from_step_range(step_range: f64) -> Option<Self> {
        (step_range.is_finite() && step_range > 1.0).then(|| Self {
            interval_percent: 100.0 / step_range,
            mark_width: Self::MARK_WIDTH,
        })
    }
}

/// Where one thumb goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbPlacement {
    /// The thumb.
    pub handle: SliderHandle,
    /// Position in percent of the track.
    pub percent: f64,
}

/// Everything the rendering layer needs to draw the current value.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderProjection {
    /// Thumb positions; one entry in single mode, lower then upper in dual
    /// mode.
    pub thumbs: SmallVec<[ThumbPlacement; 2]>,
    /// The highlighted part of the track.
    pub highlight: TrackHighlight,
}

impl RenderProjection {
    /// Position of `handle`, if it is drawn.
    pub fn percent_of(&self, handle: SliderHandle) -> Option<f64> {
        self.thumbs
            .iter()
            .find(|placement| placement.handle == handle)
            .map(|placement| placement.percent)
    }

    /// Hands the projection to the rendering layer.
    pub fn apply<G: GeometryAdapter + ?Sized>(&self, geometry: &mut G) {
        for placement in &self.thumbs {
            geometry.apply_thumb_position(placement.handle, placement.percent);
        }
        geometry.apply_track_highlight(self.highlight);
    }
}

/// Converts a track fraction to a percentage.
pub fn fraction_to_percent(fraction: f64) -> f64 {
    round_to_fixed(fraction * 100.0)
}

/// Projects the model's value(s) onto the track.
pub fn project(model: &ValueModel) -> RenderProjection {
    let upper_fraction = model.to_fraction(model.upper_value());
    let upper_percent = fraction_to_percent(upper_fraction);

    if !model.is_dual() {
        let mut thumbs = SmallVec::new();
        thumbs.push(ThumbPlacement {
            handle: SliderHandle::Upper,
            percent: upper_percent,
        });
        return RenderProjection {
            thumbs,
            highlight: TrackHighlight::Scale(upper_fraction),
        };
    }

    let lower_percent = fraction_to_percent(model.to_fraction(model.lower_value()));
    let thumbs = SmallVec::from_buf([
        ThumbPlacement {
            handle: SliderHandle::Lower,
            percent: lower_percent,
        },
        ThumbPlacement {
            handle: SliderHandle::Upper,
            percent: upper_percent,
        },
    ]);
    RenderProjection {
        thumbs,
        highlight: TrackHighlight::Span {
            left_percent: lower_percent,
            width_percent: upper_percent - lower_percent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{DualValue, SliderMode, SliderValue, ValueUpdate};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn single_mode_scales_track() {
        let mut model = ValueModel::new(SliderMode::SingleHorizontal);
        assert_eq!(model.set_value(SliderValue::Single(25.0)), ValueUpdate::Accepted);
        let projection = project(&model);
        assert_eq!(projection.thumbs.len(), 1);
        let upper = projection
            .percent_of(SliderHandle::Upper)
            .expect("upper thumb");
        assert!(approx(upper, 25.0));
        assert_eq!(projection.percent_of(SliderHandle::Lower), None);
        match projection.highlight {
            TrackHighlight::Scale(scale) => assert!(approx(scale, 0.25)),
            other => panic!("unexpected highlight {other:?}"),
        }
    }

    #[test]
    fn dual_mode_spans_thumbs() {
        let mut model = ValueModel::new(SliderMode::DualHorizontal);
        let _ = model.set_value(DualValue::new(20.0, 50.0).into());
        let projection = project(&model);
        let TrackHighlight::Span {
            left_percent,
            width_percent,
        } = projection.highlight
        else {
            panic!("dual slider must span");
        };
        assert!(approx(left_percent, 20.0));
        assert!(approx(width_percent, 30.0));
    }

    #[test]
    fn projection_is_idempotent() {
        let mut model = ValueModel::new(SliderMode::DualVertical);
        model.set_domain(-50.0, 50.0);
        let _ = model.set_value(DualValue::new(-12.5, 33.3).into());
        assert_eq!(project(&model), project(&model));
    }

    #[test]
    fn ticks_only_for_steps_above_one() {
        assert_eq!(TickPattern::from_step_range(1.0), None);
        assert_eq!(TickPattern::from_step_range(0.5), None);
        let ticks = TickPattern::from_step_range(4.0).expect("ticks");
        assert_eq!(ticks.interval_percent, 25.0);
        assert_eq!(ticks.mark_width, TickPattern::MARK_WIDTH);
    }
}
