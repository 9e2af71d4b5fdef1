//! Thumb identity and nearest-thumb selection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two thumbs of a slider.
///
/// A single-thumb slider only ever uses [`SliderHandle::Upper`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SliderHandle {
    /// The thumb holding the lower value.
    Lower,
    /// The thumb holding the upper value (or the only value).
    #[default]
    Upper,
}

impl SliderHandle {
    /// The other thumb.
    pub fn opposite(self) -> Self {
        match self {
            SliderHandle::Lower => SliderHandle::Upper,
            SliderHandle::Upper => SliderHandle::Lower,
        }
    }
}

/// Picks the thumb a new gesture should move.
///
/// `pointer`, `lower_center` and `upper_center` are pixel positions on the
/// slider's axis. The thumb whose center is closest wins; an exact tie keeps
/// `previous`, so a pointer landing between stacked thumbs does not flip the
/// selection. A non-finite center never wins.
pub fn closest_handle(
    pointer: f64,
    lower_center: f64,
    upper_center: f64,
    previous: SliderHandle,
) -> SliderHandle {
    let distance = |center: f64| {
        let d = (pointer - center).abs();
        if d.is_nan() { f64::INFINITY } else { d }
    };
    let to_lower = distance(lower_center);
    let to_upper = distance(upper_center);

    if to_lower < to_upper {
        SliderHandle::Lower
    } else if to_upper < to_lower {
        SliderHandle::Upper
    } else {
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_thumb_wins() {
        assert_eq!(
            closest_handle(30.0, 20.0, 80.0, SliderHandle::Upper),
            SliderHandle::Lower
        );
        assert_eq!(
            closest_handle(70.0, 20.0, 80.0, SliderHandle::Lower),
            SliderHandle::Upper
        );
    }

    #[test]
    fn ties_keep_previous_selection() {
        assert_eq!(
            closest_handle(50.0, 40.0, 60.0, SliderHandle::Lower),
            SliderHandle::Lower
        );
        assert_eq!(
            closest_handle(50.0, 40.0, 60.0, SliderHandle::Upper),
            SliderHandle::Upper
        );
        // Stacked thumbs.
        assert_eq!(
            closest_handle(10.0, 50.0, 50.0, SliderHandle::Lower),
            SliderHandle::Lower
        );
    }

    #[test]
    fn detached_thumb_never_wins() {
        assert_eq!(
            closest_handle(0.0, f64::NAN, 500.0, SliderHandle::Lower),
            SliderHandle::Upper
        );
    }

    #[test]
    fn opposite_flips() {
        assert_eq!(SliderHandle::Lower.opposite(), SliderHandle::Upper);
        assert_eq!(SliderHandle::default(), SliderHandle::Upper);
    }
}
