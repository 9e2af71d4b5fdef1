//! The value model: domain, bounds and the selected value(s).
//!
//! [`ValueModel`] is the single source of truth for a slider. Every other
//! part of the crate reads it or proposes a mutation through one of the
//! validating update functions below, each of which reports what happened
//! instead of silently correcting.
//!
//! Three ranges are involved:
//!
//! - the *domain* `[min_value, max_value]`, which maps linearly onto the
//!   track fraction `[0, 1]`;
//! - the *bounds* `[lower_bound, upper_bound]`, a sub-range of the domain
//!   that values may not leave (defaults to the domain while unset);
//! - the fraction limits `[p_min, p_max]`, the bounds expressed as track
//!   fractions, which clamp every pointer-derived fraction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{handle::SliderHandle, px::Axis};

/// The four slider layouts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SliderMode {
    /// One thumb, horizontal track.
    #[default]
    SingleHorizontal,
    /// Two thumbs, horizontal track.
    DualHorizontal,
    /// One thumb, vertical track.
    SingleVertical,
    /// Two thumbs, vertical track.
    DualVertical,
}

impl SliderMode {
    /// Returns `true` for the two-thumb modes.
    pub fn is_dual(self) -> bool {
        matches!(self, SliderMode::DualHorizontal | SliderMode::DualVertical)
    }

    /// The pixel axis the pointer tracker reads in this mode.
    pub fn axis(self) -> Axis {
        match self {
            SliderMode::SingleHorizontal | SliderMode::DualHorizontal => Axis::Horizontal,
            SliderMode::SingleVertical | SliderMode::DualVertical => Axis::Vertical,
        }
    }
}

/// Lower/upper pair selected by a dual-thumb slider.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DualValue {
    /// Value of the lower thumb.
    pub lower: f64,
    /// Value of the upper thumb.
    pub upper: f64,
}

impl DualValue {
    /// Creates a pair.
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

/// A slider value, shaped by the slider's [`SliderMode`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SliderValue {
    /// Value of a single-thumb slider.
    Single(f64),
    /// Value of a dual-thumb slider.
    Dual(DualValue),
}

impl SliderValue {
    /// Returns the number held by a single-thumb value.
    pub fn as_single(self) -> Option<f64> {
        match self {
            SliderValue::Single(value) => Some(value),
            SliderValue::Dual(_) => None,
        }
    }

    /// Returns the pair held by a dual-thumb value.
    pub fn as_dual(self) -> Option<DualValue> {
        match self {
            SliderValue::Single(_) => None,
            SliderValue::Dual(pair) => Some(pair),
        }
    }
}

impl From<f64> for SliderValue {
    fn from(value: f64) -> Self {
        SliderValue::Single(value)
    }
}

impl From<DualValue> for SliderValue {
    fn from(value: DualValue) -> Self {
        SliderValue::Dual(value)
    }
}

/// Result of a domain or bounds update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeAdjustment {
    /// The requested range was stored as given.
    Applied,
    /// The request collapsed the range; an endpoint was moved to keep it valid.
    Corrected,
    /// The request contained a non-finite number and was dropped.
    Ignored,
}

/// Result of a value update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueUpdate {
    /// Every component of the candidate was stored.
    Accepted,
    /// Dual mode only: one thumb moved, the other component was rejected.
    Partial,
    /// Nothing was stored; the previous value is retained.
    Rejected,
}

impl ValueUpdate {
    /// Returns `true` when at least one component was stored.
    pub fn is_accepted(self) -> bool {
        !matches!(self, ValueUpdate::Rejected)
    }
}

/// Rounds to 20 decimal places, ties away from zero.
///
/// Sub-`1e-20` residue from repeated divisions is dropped here so it never
/// reaches the clamping step. Runs on every pointer event, so it stays off
/// the formatter.
pub fn round_to_fixed(num: f64) -> f64 {
    const SCALE: f64 = 1e20;
    // From 2^-14 up the spacing of f64 exceeds 1e-20; nothing to round.
    const EXACT_FROM: f64 = 1.0 / 16384.0;

    if !num.is_finite() || num.abs() >= EXACT_FROM {
        return num;
    }
    let scaled = num * SCALE;
    // `scaled + error` is the exact product.
    let error = num.mul_add(SCALE, -scaled);
    let mut units = scaled.round();
    let excess = (scaled - units) + error;
    if excess > 0.5 || (excess == 0.5 && num > 0.0) {
        units += 1.0;
    } else if excess < -0.5 || (excess == -0.5 && num < 0.0) {
        units -= 1.0;
    }
    units / SCALE
}

/// Domain, bounds and value state of one slider.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueModel {
    mode: SliderMode,
    min_value: f64,
    max_value: f64,
    lower_bound: Option<f64>,
    upper_bound: Option<f64>,
    lower_value: f64,
    upper_value: f64,
}

impl Default for ValueModel {
    fn default() -> Self {
        Self::new(SliderMode::default())
    }
}

impl ValueModel {
    /// Domain minimum used when none is configured.
    pub const DEFAULT_MIN: f64 = 0.0;
    /// Domain maximum used when none is configured.
    pub const DEFAULT_MAX: f64 = 100.0;

    /// Creates a model over the default `0..=100` domain with unset bounds.
    ///
    /// A single-thumb slider starts at the lower bound, a dual-thumb slider
    /// spans the whole bounds.
    pub fn new(mode: SliderMode) -> Self {
        Self {
            mode,
            min_value: Self::DEFAULT_MIN,
            max_value: Self::DEFAULT_MAX,
            lower_bound: None,
            upper_bound: None,
            lower_value: Self::DEFAULT_MIN,
            upper_value: if mode.is_dual() {
                Self::DEFAULT_MAX
            } else {
                Self::DEFAULT_MIN
            },
        }
    }

    /// The slider mode.
    pub fn mode(&self) -> SliderMode {
        self.mode
    }

    /// Returns `true` in the two-thumb modes.
    pub fn is_dual(&self) -> bool {
        self.mode.is_dual()
    }

    /// Domain minimum.
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Domain maximum.
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Lowest value a thumb may take; the domain minimum while unset.
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound.unwrap_or(self.min_value)
    }

    /// Highest value a thumb may take; the domain maximum while unset.
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound.unwrap_or(self.max_value)
    }

    /// Value of the lower thumb. Equals the lower bound in single mode.
    pub fn lower_value(&self) -> f64 {
        self.lower_value
    }

    /// Value of the upper thumb, which is the only thumb in single mode.
    pub fn upper_value(&self) -> f64 {
        self.upper_value
    }

    /// Value of `handle`.
    pub fn handle_value(&self, handle: SliderHandle) -> f64 {
        match handle {
            SliderHandle::Lower => self.lower_value,
            SliderHandle::Upper => self.upper_value,
        }
    }

    /// Current value shaped by the mode.
    pub fn value(&self) -> SliderValue {
        if self.is_dual() {
            SliderValue::Dual(DualValue::new(self.lower_value, self.upper_value))
        } else {
            SliderValue::Single(self.upper_value)
        }
    }

    /// Builds a candidate that moves `handle` to `value` and keeps the other
    /// thumb where it is.
    pub fn candidate_for(&self, handle: SliderHandle, value: f64) -> SliderValue {
        if !self.is_dual() {
            return SliderValue::Single(value);
        }
        match handle {
            SliderHandle::Lower => SliderValue::Dual(DualValue::new(value, self.upper_value)),
            SliderHandle::Upper => SliderValue::Dual(DualValue::new(self.lower_value, value)),
        }
    }

    /// Sets both domain endpoints.
    ///
    /// A collapsed domain (`min >= max`) keeps `min` and moves `max` to
    /// `min + 1`.
    ///
    /// A domain whose span cannot be represented (for example `1e17` to
    /// `1e17 + 1`, or an infinite `max - min`) is ignored.
    pub fn set_domain(&mut self, min: f64, max: f64) -> RangeAdjustment {
        let Some((min, max, adjustment)) = Self::correct_domain(min, max) else {
            warn!(min, max, "ignoring unusable slider domain");
            return RangeAdjustment::Ignored;
        };
        if adjustment == RangeAdjustment::Corrected {
            debug!(min, max, "slider domain collapsed, shifted max");
        }
        self.min_value = min;
        self.max_value = max;
        self.reconcile();
        adjustment
    }

    /// The domain `set_domain(min, max)` would store, or `None` if it would
    /// be ignored.
    pub(crate) fn correct_domain(min: f64, max: f64) -> Option<(f64, f64, RangeAdjustment)> {
        if !min.is_finite() || !max.is_finite() {
            return None;
        }
        let (max, adjustment) = if min >= max {
            (min + 1.0, RangeAdjustment::Corrected)
        } else {
            (max, RangeAdjustment::Applied)
        };
        Self::usable_span(min, max).then_some((min, max, adjustment))
    }

    fn usable_span(min: f64, max: f64) -> bool {
        max > min && (max - min).is_finite()
    }

    /// Sets the domain minimum. Passing the maximum pushes the maximum to
    /// `min + 1`.
    pub fn set_min_value(&mut self, min: f64) -> RangeAdjustment {
        let max = self.max_value;
        self.set_domain(min, max)
    }

    /// Sets the domain maximum. Passing the minimum pulls the minimum down to
    /// `max - 1`.
    pub fn set_max_value(&mut self, max: f64) -> RangeAdjustment {
        if !max.is_finite() {
            warn!(max, "ignoring non-finite slider maximum");
            return RangeAdjustment::Ignored;
        }
        if max <= self.min_value {
            let min = max - 1.0;
            if !Self::usable_span(min, max) {
                warn!(max, "ignoring slider maximum with no room below it");
                return RangeAdjustment::Ignored;
            }
            debug!(max, min = self.min_value, "slider domain collapsed, shifting min");
            self.min_value = min;
            self.max_value = max;
            self.reconcile();
            return RangeAdjustment::Corrected;
        }
        if !Self::usable_span(self.min_value, max) {
            warn!(max, min = self.min_value, "ignoring slider maximum with unusable span");
            return RangeAdjustment::Ignored;
        }
        self.max_value = max;
        self.reconcile();
        RangeAdjustment::Applied
    }

    /// Sets both bounds.
    ///
    /// Bounds are first clamped into the domain. If `lower >= upper` the
    /// lower bound snaps to the domain minimum; if the pair is still
    /// collapsed the upper bound snaps to the domain maximum.
    pub fn set_bounds(&mut self, lower: f64, upper: f64) -> RangeAdjustment {
        if !lower.is_finite() || !upper.is_finite() {
            warn!(lower, upper, "ignoring non-finite slider bounds");
            return RangeAdjustment::Ignored;
        }
        let mut corrected = false;
        let mut lower = self.clamp_to_domain(lower, &mut corrected);
        let mut upper = self.clamp_to_domain(upper, &mut corrected);
        if lower >= upper {
            lower = self.min_value;
            corrected = true;
        }
        if upper <= lower {
            upper = self.max_value;
            corrected = true;
        }
        if corrected {
            debug!(lower, upper, "slider bounds corrected");
        }
        self.lower_bound = Some(lower);
        self.upper_bound = Some(upper);
        self.reconcile();
        if corrected {
            RangeAdjustment::Corrected
        } else {
            RangeAdjustment::Applied
        }
    }

    /// Sets the lower bound, snapping it to the domain minimum when it would
    /// meet or pass the upper bound. An unset upper bound stays unset.
    pub fn set_lower_bound(&mut self, lower: f64) -> RangeAdjustment {
        if !lower.is_finite() {
            warn!(lower, "ignoring non-finite lower bound");
            return RangeAdjustment::Ignored;
        }
        let mut corrected = false;
        let mut lower = self.clamp_to_domain(lower, &mut corrected);
        if lower >= self.upper_bound() {
            debug!(
                lower,
                upper = self.upper_bound(),
                "lower bound crosses upper bound, snapping to min"
            );
            lower = self.min_value;
            corrected = true;
        }
        self.lower_bound = Some(lower);
        self.reconcile();
        if corrected {
            RangeAdjustment::Corrected
        } else {
            RangeAdjustment::Applied
        }
    }

    /// Sets the upper bound, snapping it to the domain maximum when it would
    /// meet or pass the lower bound. An unset lower bound stays unset.
    pub fn set_upper_bound(&mut self, upper: f64) -> RangeAdjustment {
        if !upper.is_finite() {
            warn!(upper, "ignoring non-finite upper bound");
            return RangeAdjustment::Ignored;
        }
        let mut corrected = false;
        let mut upper = self.clamp_to_domain(upper, &mut corrected);
        if upper <= self.lower_bound() {
            debug!(
                lower = self.lower_bound(),
                upper,
                "upper bound crosses lower bound, snapping to max"
            );
            upper = self.max_value;
            corrected = true;
        }
        self.upper_bound = Some(upper);
        self.reconcile();
        if corrected {
            RangeAdjustment::Corrected
        } else {
            RangeAdjustment::Applied
        }
    }

    /// Moves the value back to its initial position: the lower bound in
    /// single mode, the full bounds in dual mode.
    pub fn reset_to_bounds(&mut self) {
        self.lower_value = self.lower_bound();
        self.upper_value = if self.is_dual() {
            self.upper_bound()
        } else {
            self.lower_bound()
        };
    }

    /// Proposes a new value.
    ///
    /// Out-of-bounds components are rejected, not clamped. In dual mode the
    /// upper component is checked first against the current lower value,
    /// then the lower component against the (possibly new) upper value; a
    /// component that would cross the other thumb is dropped while the other
    /// component may still land.
    pub fn set_value(&mut self, candidate: SliderValue) -> ValueUpdate {
        match (self.is_dual(), candidate) {
            (false, SliderValue::Single(value)) => {
                if self.within_bounds(value) {
                    self.upper_value = value;
                    ValueUpdate::Accepted
                } else {
                    debug!(value, "rejected slider value outside bounds");
                    ValueUpdate::Rejected
                }
            }
            (true, SliderValue::Dual(pair)) => {
                let upper_ok = self.within_bounds(pair.upper) && pair.upper >= self.lower_value;
                if upper_ok {
                    self.upper_value = pair.upper;
                }
                let lower_ok = self.within_bounds(pair.lower) && pair.lower <= self.upper_value;
                if lower_ok {
                    self.lower_value = pair.lower;
                }
                match (lower_ok, upper_ok) {
                    (true, true) => ValueUpdate::Accepted,
                    (false, false) => {
                        debug!(?pair, "rejected dual slider value");
                        ValueUpdate::Rejected
                    }
                    _ => {
                        debug!(?pair, lower_ok, upper_ok, "partially applied dual slider value");
                        ValueUpdate::Partial
                    }
                }
            }
            (dual, candidate) => {
                warn!(dual, ?candidate, "slider value shape does not match mode");
                ValueUpdate::Rejected
            }
        }
    }

    /// Proposes a new value for `handle` only, leaving the other thumb in
    /// place. Accepted only if `handle` actually lands on `value`.
    pub fn set_handle_value(&mut self, handle: SliderHandle, value: f64) -> ValueUpdate {
        let candidate = self.candidate_for(handle, value);
        match self.set_value(candidate) {
            ValueUpdate::Rejected => ValueUpdate::Rejected,
            _ if self.handle_value(self.effective(handle)) == value => ValueUpdate::Accepted,
            _ => ValueUpdate::Rejected,
        }
    }

    /// Single mode only has the upper thumb.
    fn effective(&self, handle: SliderHandle) -> SliderHandle {
        if self.is_dual() {
            handle
        } else {
            SliderHandle::Upper
        }
    }

    /// Fraction limits `(p_min, p_max)` derived from the bounds.
    pub fn fraction_limits(&self) -> (f64, f64) {
        let p_min = self.raw_fraction(self.lower_bound()).clamp(0.0, 1.0);
        let p_max = self.raw_fraction(self.upper_bound()).clamp(0.0, 1.0);
        (p_min, p_max)
    }

    /// Clamps `fraction` into `[p_min, p_max]`. NaN becomes `p_min`.
    pub fn limit(&self, fraction: f64) -> f64 {
        let (p_min, p_max) = self.fraction_limits();
        if fraction.is_nan() {
            return p_min;
        }
        fraction.clamp(p_min, p_max)
    }

    /// Maps a domain value to a track fraction in `[p_min, p_max]`.
    pub fn to_fraction(&self, value: f64) -> f64 {
        self.limit(round_to_fixed(self.raw_fraction(value)))
    }

    /// Maps a track fraction back to a domain value. The fraction is clamped
    /// to `[p_min, p_max]` first, and the result to the bounds, since the
    /// linear map can overshoot a bound by a few ulps.
    pub fn to_value(&self, fraction: f64) -> f64 {
        let fraction = self.limit(round_to_fixed(fraction));
        let value = (self.max_value - self.min_value) * fraction + self.min_value;
        value.clamp(self.lower_bound(), self.upper_bound())
    }

    fn raw_fraction(&self, value: f64) -> f64 {
        (value - self.min_value) / (self.max_value - self.min_value)
    }

    fn within_bounds(&self, value: f64) -> bool {
        value.is_finite() && self.lower_bound() <= value && value <= self.upper_bound()
    }

    fn clamp_to_domain(&self, value: f64, corrected: &mut bool) -> f64 {
        let clamped = value.clamp(self.min_value, self.max_value);
        if clamped != value {
            *corrected = true;
        }
        clamped
    }

    /// Pulls explicit bounds back into the domain and values back into the
    /// bounds after a configuration change.
    fn reconcile(&mut self) {
        let (min, max) = (self.min_value, self.max_value);
        if let Some(lower) = self.lower_bound {
            self.lower_bound = Some(lower.clamp(min, max));
        }
        if let Some(upper) = self.upper_bound {
            self.upper_bound = Some(upper.clamp(min, max));
        }
        if self.lower_bound() >= self.upper_bound() {
            debug!("slider bounds collapsed by domain change, resetting to domain");
            self.lower_bound = Some(min);
            self.upper_bound = Some(max);
        }

        let (lower_bound, upper_bound) = (self.lower_bound(), self.upper_bound());
        let upper = self.upper_value.clamp(lower_bound, upper_bound);
        let lower = if self.is_dual() {
            self.lower_value.clamp(lower_bound, upper)
        } else {
            lower_bound
        };
        if upper != self.upper_value || lower != self.lower_value {
            debug!(lower, upper, "slider value re-clamped to bounds");
        }
        self.lower_value = lower;
        self.upper_value = upper;
    }
}
