//! Physical pixel units used at the geometry boundary.
//!
//! The rendering layer reports track and thumb geometry in whole physical
//! pixels. Everything past the pointer tracker works in `f64` fractions, so
//! the types here stay deliberately small: a pixel scalar, a 2D position and
//! the [`Axis`] a slider reads its pointer coordinate from.
//!
//! # Example
//!
//! ```
//! use tessera_range_slider::px::{Axis, Px, PxPosition};
//!
//! let pointer = PxPosition::new(Px(120), Px(48));
//! assert_eq!(pointer.along(Axis::Horizontal), Px(120));
//! assert_eq!(pointer.along(Axis::Vertical), Px(48));
//! ```

use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A physical pixel coordinate value.
///
/// Negative values are allowed; a pointer may be reported left of (or above)
/// the track while a drag is in progress.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Px` from a raw value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts to `f64` for fraction math.
    pub fn to_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Converts from `f64`, saturating at the i32 range.
    ///
    /// Non-finite input maps to [`Px::ZERO`].
    pub fn saturating_from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Px::ZERO;
        }
        if value >= f64::from(i32::MAX) {
            Px(i32::MAX)
        } else if value <= f64::from(i32::MIN) {
            Px(i32::MIN)
        } else {
            Px(value as i32)
        }
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0.saturating_sub(rhs.0))
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PxPosition {
    /// Horizontal coordinate.
    pub x: Px,
    /// Vertical coordinate.
    pub y: Px,
}

impl PxPosition {
    /// The origin.
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
    };

    /// Creates a position from its coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate on `axis`.
    pub fn along(self, axis: Axis) -> Px {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// The pixel axis a slider tracks the pointer on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Read the x coordinate.
    #[default]
    Horizontal,
    /// Read the y coordinate.
    Vertical,
}
