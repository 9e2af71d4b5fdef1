//! Errors raised while configuring a slider.
//!
//! Interaction never fails: corrections and rejections during a drag or a
//! key press are reported through outcome enums instead. The variants here
//! cover integration mistakes that must be caught when a slider is built.

use thiserror::Error;

/// Configuration errors detected by [`SliderArgs::validate`](crate::SliderArgs::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// A numeric option was NaN or infinite.
    #[error("slider option `{name}` must be finite, got {value}")]
    NonFiniteOption {
        /// Option name as it appears on `SliderArgs`.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The domain has no representable span, even after moving `max` to
    /// `min + 1`.
    #[error("slider domain {min}..{max} has no usable span")]
    UnusableDomain {
        /// Configured domain minimum.
        min: f64,
        /// Configured domain maximum.
        max: f64,
    },
    /// The keyboard step must be a positive, finite amount.
    #[error("step range must be positive, got {0}")]
    InvalidStepRange(f64),
}
