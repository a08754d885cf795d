// ============================================================================
// Decimal Float
// Normalized mantissa/exponent currency values beyond native float range
// ============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Extended-range decimal floating-point number for currency amounts.
///
/// Stores `mantissa × 10^exponent` with the mantissa normalized into
/// `[1, 10)` (or exactly `0` for canonical zero), which keeps the value
/// range bounded only by the `i64` exponent rather than by `f64`.
///
/// # Invariants
/// - Canonical zero is `(0, 0)`; no other zero survives normalization.
/// - Any non-zero value has `1 <= |mantissa| < 10`.
/// - Non-finite inputs (NaN, ±∞) sanitize to canonical zero at
///   construction, so an invalid value cannot exist downstream.
///
/// The domain is currency: results that would be negative saturate to zero,
/// and comparison treats a negative magnitude as zero. Every operation
/// returns a new value; nothing is mutated in place, and no operation
/// panics, because this type runs inside a fixed-timestep frame loop
/// where a fault is worse than a zero.
///
/// # Example
/// ```
/// use idle_economy::numeric::DecimalFloat;
///
/// let balance = DecimalFloat::from_number(1500.0);
/// assert_eq!(balance.mantissa(), 1.5);
/// assert_eq!(balance.exponent(), 3);
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "CurrencyRecord", into = "CurrencyRecord")
)]
pub struct DecimalFloat {
    mantissa: f64,
    exponent: i64,
}

impl DecimalFloat {
    /// Canonical zero
    pub const ZERO: Self = Self {
        mantissa: 0.0,
        exponent: 0,
    };

    /// One (1.0)
    pub const ONE: Self = Self {
        mantissa: 1.0,
        exponent: 0,
    };

    /// Exponent gap beyond which the smaller operand of an addition or
    /// subtraction is dropped outright: twelve orders of magnitude below
    /// the larger term, a contribution is under display precision and
    /// economically meaningless. The cutoff is part of observed game
    /// balance; do not re-derive it.
    pub const PRECISION_EXPONENT_GAP: i64 = 12;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a plain number.
    ///
    /// Non-finite input sanitizes to canonical zero.
    #[inline]
    pub fn from_number(value: f64) -> Self {
        Self::normalized(value, 0)
    }

    /// Create from a raw mantissa/exponent pair, normalizing it.
    ///
    /// `value = mantissa × 10^exponent`; the pair does not need to be in
    /// canonical form.
    #[inline]
    pub fn from_parts(mantissa: f64, exponent: i64) -> Self {
        Self::normalized(mantissa, exponent)
    }

    /// Rewrite a candidate pair into canonical form.
    ///
    /// Extracts the sign, shifts the magnitude by `floor(log10)`, then runs
    /// a short fix-up loop: the shift division can leave the magnitude a few
    /// ulps outside `[1, 10)`.
    fn normalized(mantissa: f64, exponent: i64) -> Self {
        if !mantissa.is_finite() || mantissa == 0.0 {
            return Self::ZERO;
        }

        let sign = mantissa.signum();
        let mut magnitude = mantissa.abs();
        let shift = magnitude.log10().floor();
        let mut exp = exponent.saturating_add(shift as i64);
        magnitude /= 10f64.powf(shift);

        while magnitude >= 10.0 {
            magnitude /= 10.0;
            exp = exp.saturating_add(1);
        }
        while magnitude < 1.0 {
            magnitude *= 10.0;
            exp = exp.saturating_sub(1);
        }

        Self {
            mantissa: sign * magnitude,
            exponent: exp,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The significant-digits part, in `[1, 10)` for non-zero values.
    #[inline]
    pub const fn mantissa(self) -> f64 {
        self.mantissa
    }

    /// The power-of-ten scale factor.
    #[inline]
    pub const fn exponent(self) -> i64 {
        self.exponent
    }

    /// Check if value is canonical zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.mantissa == 0.0
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Three-way compare under currency semantics.
    ///
    /// A negative magnitude counts as zero. For two positive values the
    /// exponents decide first; mantissas only break exponent ties.
    pub fn compare(self, other: Self) -> Ordering {
        let self_positive = self.mantissa > 0.0;
        let other_positive = other.mantissa > 0.0;

        match (self_positive, other_positive) {
            (false, false) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => self
                .exponent
                .cmp(&other.exponent)
                .then_with(|| {
                    self.mantissa
                        .partial_cmp(&other.mantissa)
                        .unwrap_or(Ordering::Equal)
                }),
        }
    }

    /// Compare within a relative tolerance, evaluated in log-space so it
    /// holds at any magnitude.
    pub fn approx_eq(self, other: Self, relative_tolerance: f64) -> bool {
        let a = self.log10();
        let b = other.log10();
        if a == f64::NEG_INFINITY || b == f64::NEG_INFINITY {
            return a == b;
        }
        (a - b).abs() * std::f64::consts::LN_10 <= relative_tolerance
    }

    /// Returns the smaller of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.compare(other) == Ordering::Greater {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.compare(other) == Ordering::Less {
            other
        } else {
            self
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Addition.
    ///
    /// The operand with the larger exponent sets the reference frame; the
    /// smaller operand is rescaled into it, or dropped entirely when the
    /// exponents differ by more than [`Self::PRECISION_EXPONENT_GAP`].
    pub fn add(self, other: Self) -> Self {
        if self.is_zero() {
            return other;
        }
        if other.is_zero() {
            return self;
        }

        let (larger, smaller) = if self.exponent >= other.exponent {
            (self, other)
        } else {
            (other, self)
        };
        let gap = larger.exponent - smaller.exponent;
        if gap > Self::PRECISION_EXPONENT_GAP {
            return larger;
        }

        let mantissa = larger.mantissa + smaller.mantissa / 10f64.powi(gap as i32);
        Self::normalized(mantissa, larger.exponent)
    }

    /// Subtraction with the currency clamp: `a - b` is canonical zero
    /// whenever `a <= b`, never a negative amount.
    ///
    /// Uses the same [`Self::PRECISION_EXPONENT_GAP`] policy as addition:
    /// a negligible subtrahend leaves the minuend unchanged.
    pub fn saturating_sub(self, other: Self) -> Self {
        if self.compare(other) != Ordering::Greater {
            return Self::ZERO;
        }
        if other.mantissa <= 0.0 {
            return self;
        }

        let gap = self.exponent - other.exponent;
        if gap > Self::PRECISION_EXPONENT_GAP {
            return self;
        }

        let mantissa = self.mantissa - other.mantissa / 10f64.powi(gap as i32);
        Self::normalized(mantissa, self.exponent)
    }

    /// Multiplication: mantissas multiply, exponents add.
    pub fn mul(self, other: Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::ZERO;
        }
        Self::normalized(
            self.mantissa * other.mantissa,
            self.exponent.saturating_add(other.exponent),
        )
    }

    /// Division: mantissas divide, exponents subtract.
    ///
    /// A zero divisor yields canonical zero. This runs every animation
    /// frame; a zero result is recoverable, a fault is not.
    pub fn div(self, other: Self) -> Self {
        if other.is_zero() || self.is_zero() {
            return Self::ZERO;
        }
        Self::normalized(
            self.mantissa / other.mantissa,
            self.exponent.saturating_sub(other.exponent),
        )
    }

    /// Multiply by a plain scalar.
    ///
    /// A zero or non-finite scalar yields canonical zero.
    pub fn mul_scalar(self, scalar: f64) -> Self {
        if !scalar.is_finite() {
            return Self::ZERO;
        }
        Self::normalized(self.mantissa * scalar, self.exponent)
    }

    // ========================================================================
    // Log-Space Helpers
    // ========================================================================

    /// `10^exponent` for a fractional real exponent.
    ///
    /// Splits the exponent into integer and fractional parts; only
    /// `10^fractional` is computed in native floating math (safe, the
    /// fractional part is in `[0, 1)`), so no intermediate ever exceeds
    /// native float range. This is what lets the growth formulas work
    /// entirely in log-space.
    pub fn pow10(exponent: f64) -> Self {
        if !exponent.is_finite() {
            return Self::ZERO;
        }
        let integral = exponent.floor();
        let fractional = exponent - integral;
        Self::normalized(10f64.powf(fractional), integral as i64)
    }

    /// Base-10 logarithm as a plain float; `-inf` for zero.
    ///
    /// Inverse of [`Self::pow10`] and the basis of the affordability
    /// search.
    pub fn log10(self) -> f64 {
        if self.mantissa <= 0.0 {
            return f64::NEG_INFINITY;
        }
        self.mantissa.log10() + self.exponent as f64
    }

    // ========================================================================
    // Boundary Conversion
    // ========================================================================

    /// Convert to a native float, saturating at the float range.
    ///
    /// Intended for display, debugging, and handing counts to callers;
    /// values past `~1.8e308` come back as `f64::MAX`.
    pub fn to_f64(self) -> f64 {
        let value = self.mantissa * 10f64.powf(self.exponent as f64);
        if value.is_finite() {
            value
        } else {
            f64::MAX.copysign(self.mantissa)
        }
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Snapshot into the JSON-safe persisted form.
    #[inline]
    pub fn to_record(self) -> CurrencyRecord {
        CurrencyRecord {
            mantissa: self.mantissa,
            exponent: self.exponent,
        }
    }

    /// Restore from a persisted record.
    ///
    /// Whatever is in the record runs through the normalizer, so a
    /// malformed save degrades to canonical zero instead of failing the
    /// load. Round-trips exactly for any value this crate produced.
    #[inline]
    pub fn from_record(record: CurrencyRecord) -> Self {
        Self::normalized(record.mantissa, record.exponent)
    }
}

/// Currency amount alias used across the economy layer
pub type Currency = DecimalFloat;

// ============================================================================
// Persisted Record
// ============================================================================

/// JSON-safe persisted form of a [`DecimalFloat`]:
/// `{ "mantissa": <float>, "exponent": <int> }`.
///
/// Both fields default to zero, so a record with a missing field loads as
/// canonical zero rather than failing the whole save file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyRecord {
    #[cfg_attr(feature = "serde", serde(default))]
    pub mantissa: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exponent: i64,
}

impl From<CurrencyRecord> for DecimalFloat {
    fn from(record: CurrencyRecord) -> Self {
        Self::from_record(record)
    }
}

impl From<DecimalFloat> for CurrencyRecord {
    fn from(value: DecimalFloat) -> Self {
        value.to_record()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DecimalFloat {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for DecimalFloat {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.compare(*other) == Ordering::Equal
    }
}

impl Eq for DecimalFloat {}

impl PartialOrd for DecimalFloat {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(*other))
    }
}

impl Ord for DecimalFloat {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl Add for DecimalFloat {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        DecimalFloat::add(self, rhs)
    }
}

// Operator subtraction carries the currency clamp: it never goes negative.
impl Sub for DecimalFloat {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl Mul for DecimalFloat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        DecimalFloat::mul(self, rhs)
    }
}

impl Div for DecimalFloat {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        DecimalFloat::div(self, rhs)
    }
}

impl fmt::Debug for DecimalFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalFloat({}e{})", self.mantissa, self.exponent)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_canonical(value: DecimalFloat) {
        if !value.is_zero() {
            assert!(
                value.mantissa().abs() >= 1.0 && value.mantissa().abs() < 10.0,
                "mantissa out of range: {:?}",
                value
            );
        } else {
            assert_eq!(value.exponent(), 0, "non-canonical zero: {:?}", value);
        }
    }

    #[test]
    fn test_from_number() {
        let x = DecimalFloat::from_number(1500.0);
        assert_eq!(x.mantissa(), 1.5);
        assert_eq!(x.exponent(), 3);

        let y = DecimalFloat::from_number(0.25);
        assert_eq!(y.mantissa(), 2.5);
        assert_eq!(y.exponent(), -1);

        assert!(DecimalFloat::from_number(0.0).is_zero());
    }

    #[test]
    fn test_sanitize_non_finite() {
        assert!(DecimalFloat::from_number(f64::NAN).is_zero());
        assert!(DecimalFloat::from_number(f64::INFINITY).is_zero());
        assert!(DecimalFloat::from_number(f64::NEG_INFINITY).is_zero());
        assert!(DecimalFloat::from_parts(f64::NAN, 50).is_zero());
    }

    #[test]
    fn test_canonical_zero_is_unique() {
        let z = DecimalFloat::from_parts(0.0, 42);
        assert!(z.is_zero());
        assert_eq!(z.exponent(), 0);
    }

    #[test]
    fn test_normalize_fixup() {
        // A mantissa just outside [1, 10) must be nudged back in.
        let high = DecimalFloat::from_parts(10.0000000003, 5);
        assert_canonical(high);
        assert_eq!(high.exponent(), 6);

        let low = DecimalFloat::from_parts(0.99999999997, 5);
        assert_canonical(low);
        assert_eq!(low.exponent(), 4);
    }

    #[test]
    fn test_add_same_magnitude() {
        let five = DecimalFloat::from_number(5.0);
        let sum = five.add(five);
        assert_eq!(sum.mantissa(), 1.0);
        assert_eq!(sum.exponent(), 1);
    }

    #[test]
    fn test_add_identity() {
        let x = DecimalFloat::from_number(123.456);
        assert_eq!(x.add(DecimalFloat::ZERO), x);
        assert_eq!(DecimalFloat::ZERO.add(x), x);
    }

    #[test]
    fn test_add_across_magnitudes() {
        let big = DecimalFloat::from_number(1e6);
        let small = DecimalFloat::from_number(1.0);
        let sum = big.add(small);
        assert_eq!(sum.exponent(), 6);
        assert!((sum.mantissa() - 1.000001).abs() < 1e-12);
    }

    #[test]
    fn test_add_drops_negligible_operand() {
        let big = DecimalFloat::from_parts(1.0, 100);
        let tiny = DecimalFloat::from_parts(9.0, 87); // gap of 13 > 12
        assert_eq!(big.add(tiny), big);
        assert_eq!(tiny.add(big), big);

        // At exactly the gap the operand still contributes.
        let edge = DecimalFloat::from_parts(9.0, 88);
        assert_ne!(big.add(edge), big);
    }

    #[test]
    fn test_sub_clamps_at_zero() {
        let five = DecimalFloat::from_number(5.0);
        let eight = DecimalFloat::from_number(8.0);
        assert!(five.saturating_sub(eight).is_zero());
        assert!(five.saturating_sub(five).is_zero());
    }

    #[test]
    fn test_sub_basic() {
        let eight = DecimalFloat::from_number(8.0);
        let five = DecimalFloat::from_number(5.0);
        let diff = eight.saturating_sub(five);
        assert_eq!(diff.mantissa(), 3.0);
        assert_eq!(diff.exponent(), 0);
    }

    #[test]
    fn test_sub_drops_negligible_subtrahend() {
        let big = DecimalFloat::from_parts(1.0, 100);
        let tiny = DecimalFloat::from_parts(9.0, 87);
        assert_eq!(big.saturating_sub(tiny), big);
    }

    #[test]
    fn test_sub_catastrophic_cancellation_stays_canonical() {
        let a = DecimalFloat::from_number(1.0000001);
        let b = DecimalFloat::from_number(1.0);
        let diff = a.saturating_sub(b);
        assert_canonical(diff);
        assert!(diff.compare(DecimalFloat::ZERO) != Ordering::Less);
    }

    #[test]
    fn test_mul() {
        let a = DecimalFloat::from_number(2.5);
        let b = DecimalFloat::from_number(4.0);
        let product = a.mul(b);
        assert_eq!(product.mantissa(), 1.0);
        assert_eq!(product.exponent(), 1);

        assert!(a.mul(DecimalFloat::ZERO).is_zero());
    }

    #[test]
    fn test_mul_beyond_native_range() {
        let huge = DecimalFloat::from_parts(5.0, 300);
        let product = huge.mul(huge);
        assert_canonical(product);
        assert_eq!(product.exponent(), 601);
        assert!((product.mantissa() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_div() {
        let ten = DecimalFloat::from_number(10.0);
        let four = DecimalFloat::from_number(4.0);
        let quotient = ten.div(four);
        assert_eq!(quotient.mantissa(), 2.5);
        assert_eq!(quotient.exponent(), 0);
    }

    #[test]
    fn test_div_by_zero_is_zero() {
        let ten = DecimalFloat::from_number(10.0);
        assert!(ten.div(DecimalFloat::ZERO).is_zero());
    }

    #[test]
    fn test_mul_div_consistency() {
        let a = DecimalFloat::from_parts(3.7, 42);
        let b = DecimalFloat::from_parts(8.1, -17);
        let round_trip = a.mul(b).div(b);
        assert!(round_trip.approx_eq(a, 1e-9));
    }

    #[test]
    fn test_mul_scalar() {
        let x = DecimalFloat::from_number(4.0);
        let scaled = x.mul_scalar(2.5);
        assert_eq!(scaled.mantissa(), 1.0);
        assert_eq!(scaled.exponent(), 1);

        assert!(x.mul_scalar(0.0).is_zero());
        assert!(x.mul_scalar(f64::NAN).is_zero());
    }

    #[test]
    fn test_compare() {
        let small = DecimalFloat::from_number(5.0);
        let large = DecimalFloat::from_parts(1.0, 50);
        assert_eq!(small.compare(large), Ordering::Less);
        assert_eq!(large.compare(small), Ordering::Greater);
        assert_eq!(small.compare(small), Ordering::Equal);

        // Exponents decide before mantissas.
        let nine_hundred = DecimalFloat::from_number(900.0);
        let thousand = DecimalFloat::from_number(1000.0);
        assert_eq!(nine_hundred.compare(thousand), Ordering::Less);
    }

    #[test]
    fn test_compare_zero_and_negative() {
        let x = DecimalFloat::from_number(1.0);
        assert_eq!(DecimalFloat::ZERO.compare(DecimalFloat::ZERO), Ordering::Equal);
        assert_eq!(x.compare(DecimalFloat::ZERO), Ordering::Greater);

        // Negative magnitudes count as zero in the currency domain.
        let negative = DecimalFloat::from_number(-5.0);
        assert_eq!(negative.compare(DecimalFloat::ZERO), Ordering::Equal);
        assert_eq!(x.compare(negative), Ordering::Greater);
    }

    #[test]
    fn test_min_max() {
        let a = DecimalFloat::from_number(3.0);
        let b = DecimalFloat::from_number(7.0);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn test_pow10_integral() {
        let thousand = DecimalFloat::pow10(3.0);
        assert_eq!(thousand.mantissa(), 1.0);
        assert_eq!(thousand.exponent(), 3);
    }

    #[test]
    fn test_pow10_fractional() {
        let x = DecimalFloat::pow10(2.5);
        assert_eq!(x.exponent(), 2);
        assert!((x.mantissa() - 10f64.powf(0.5)).abs() < 1e-12);

        let y = DecimalFloat::pow10(-2.5);
        assert_eq!(y.exponent(), -3);
        assert!((y.mantissa() - 10f64.powf(0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_pow10_log10_inverse() {
        for exp in [-400.5, -3.25, 0.0, 0.75, 12.5, 350.125] {
            let value = DecimalFloat::pow10(exp);
            assert!((value.log10() - exp).abs() < 1e-9, "exp = {}", exp);
        }
    }

    #[test]
    fn test_log10_zero() {
        assert_eq!(DecimalFloat::ZERO.log10(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_to_f64() {
        let x = DecimalFloat::from_number(1234.5);
        assert!((x.to_f64() - 1234.5).abs() < 1e-9);

        let beyond = DecimalFloat::from_parts(2.0, 400);
        assert_eq!(beyond.to_f64(), f64::MAX);

        assert_eq!(DecimalFloat::ZERO.to_f64(), 0.0);
    }

    #[test]
    fn test_record_round_trip() {
        for value in [
            DecimalFloat::ZERO,
            DecimalFloat::ONE,
            DecimalFloat::from_number(1500.0),
            DecimalFloat::from_parts(9.999, -250),
            DecimalFloat::from_parts(3.14, 1_000_000),
        ] {
            let restored = DecimalFloat::from_record(value.to_record());
            assert_eq!(restored, value);
        }
    }

    #[test]
    fn test_record_sanitizes_garbage() {
        let record = CurrencyRecord {
            mantissa: f64::NAN,
            exponent: 12,
        };
        assert!(DecimalFloat::from_record(record).is_zero());

        // Missing fields deserialize as defaults, which load as zero.
        assert!(DecimalFloat::from_record(CurrencyRecord::default()).is_zero());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let value = DecimalFloat::from_parts(4.25, 9000);
        let json = serde_json::to_string(&value).unwrap();
        let restored: DecimalFloat = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, value);

        // A partial record is a degraded save, not a load failure.
        let partial: DecimalFloat = serde_json::from_str("{\"exponent\": 5}").unwrap();
        assert!(partial.is_zero());
    }

    #[test]
    fn test_operators() {
        let a = DecimalFloat::from_number(6.0);
        let b = DecimalFloat::from_number(2.0);
        assert_eq!(a + b, DecimalFloat::from_number(8.0));
        assert_eq!(a - b, DecimalFloat::from_number(4.0));
        assert_eq!(b - a, DecimalFloat::ZERO);
        assert_eq!(a * b, DecimalFloat::from_number(12.0));
        assert_eq!(a / b, DecimalFloat::from_number(3.0));
    }
}
