// ============================================================================
// Money Value
// Minor-unit monetary amount with locale-aware display
// ============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use super::errors::{MoneyError, MoneyResult};
use crate::format::{FormatOptions, FormatSpec};

/// Monetary amount stored in minor units (cents).
///
/// Internally stores `amount × 100` so that arithmetic combines integer
/// cent counts instead of repeatedly rounding a major-unit float. The scale
/// is fixed at 100 (two decimal places); currencies with other subdivision
/// granularities are out of scope.
///
/// Every value carries its own [`FormatSpec`] (locale preference list plus
/// rendering options), and every operation returns a new value with that
/// configuration carried forward. Values are immutable; reconfiguration
/// goes through the consuming `with_*` builders.
///
/// # Known limitation
/// The minor-unit amount is an `f64` and arithmetic is unguarded: overflow
/// saturates to infinity and dividing by zero yields ±infinity or NaN,
/// following native floating-point semantics. Entry points quantize to
/// whole minor units, so only `multiply`/`divide` can introduce fractional
/// cents.
///
/// # Example
/// ```
/// use fixed_money::Money;
///
/// let total = Money::from_major(9.99).add(1.01);
/// assert_eq!(total.to_number(), 11.0);
/// assert_eq!(total.to_string(), "11");
/// ```
#[derive(Clone)]
pub struct Money {
    /// Amount in minor units (authoritative representation)
    minor_units: f64,
    /// Display configuration carried through every operation
    format: FormatSpec,
}

impl Money {
    /// Minor units per major unit (cents per dollar). Fixed for all values.
    pub const SCALE: f64 = 100.0;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw minor-unit amount with default formatting.
    #[inline]
    pub fn from_minor_units(minor_units: f64) -> Self {
        Self::from_minor_units_with(minor_units, FormatSpec::default())
    }

    /// Create from a raw minor-unit amount with explicit formatting.
    #[inline]
    pub fn from_minor_units_with(minor_units: f64, format: FormatSpec) -> Self {
        Self {
            minor_units,
            format,
        }
    }

    /// Create from a major-unit amount (dollars) with default formatting.
    ///
    /// The amount is quantized to the nearest whole minor unit, so
    /// `from_major(9.99)` stores exactly 999 cents.
    #[inline]
    pub fn from_major(major: f64) -> Self {
        Self::from_major_with(major, FormatSpec::default())
    }

    /// Create from a major-unit amount with explicit formatting.
    #[inline]
    pub fn from_major_with(major: f64, format: FormatSpec) -> Self {
        Self::from_minor_units_with(to_minor(major), format)
    }

    /// Create from free text with default formatting.
    ///
    /// Every character that is not an ASCII digit or `.` is stripped
    /// (currency symbols, group separators, signs), and the longest leading
    /// decimal-number prefix of the remainder is taken as the major-unit
    /// amount. Text with no parseable prefix yields a zero amount rather
    /// than an error; use the [`FromStr`] impl to surface parse failures.
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with(text, FormatSpec::default())
    }

    /// Create from free text with explicit formatting.
    pub fn from_text_with(text: &str, format: FormatSpec) -> Self {
        let cleaned = strip_to_numeric(text);
        let major = match leading_number(&cleaned) {
            Some(value) => value,
            None => {
                tracing::debug!(input = text, "unparseable money text coerced to zero");
                0.0
            },
        };
        Self::from_major_with(major, format)
    }

    /// A zero amount with default formatting.
    #[inline]
    pub fn zero() -> Self {
        Self::from_minor_units(0.0)
    }

    /// Convert from a `rust_decimal::Decimal` major-unit amount.
    ///
    /// This is intended for API boundaries (typed user input). Amounts are
    /// quantized to whole minor units like every other entry point.
    pub fn from_decimal(major: Decimal) -> Self {
        Self::from_decimal_with(major, FormatSpec::default())
    }

    /// Convert from a `Decimal` with explicit formatting.
    pub fn from_decimal_with(major: Decimal, format: FormatSpec) -> Self {
        // Every Decimal magnitude fits in f64 range (precision may shrink
        // to the nearest cent below, which quantization does anyway).
        Self::from_major_with(major.to_f64().unwrap_or(0.0), format)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The raw minor-unit amount (cents).
    #[inline]
    pub fn minor_units(&self) -> f64 {
        self.minor_units
    }

    /// The major-unit amount (minor units divided by 100).
    #[inline]
    pub fn to_number(&self) -> f64 {
        self.minor_units / Self::SCALE
    }

    /// The formatting configuration this value renders with.
    #[inline]
    pub fn format_spec(&self) -> &FormatSpec {
        &self.format
    }

    /// Check if the amount is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.minor_units == 0.0
    }

    /// Check if the amount is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.minor_units > 0.0
    }

    /// Check if the amount is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.minor_units < 0.0
    }

    /// Check if the amount is finite (not infinity or NaN).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.minor_units.is_finite()
    }

    /// Absolute value, formatting carried forward.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.derive(self.minor_units.abs())
    }

    /// Convert to a `rust_decimal::Decimal` major-unit amount.
    ///
    /// # Errors
    /// Returns `NonFinite` when the amount is infinite or NaN.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        Decimal::from_f64(self.to_number()).ok_or(MoneyError::NonFinite)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================
    //
    // add/subtract take major-unit amounts and scale-match them to minor
    // units first; multiply/divide take dimensionless scalars applied to
    // the minor-unit value directly.

    /// Add a major-unit amount.
    #[must_use]
    pub fn add(&self, major: f64) -> Self {
        self.derive(self.minor_units + to_minor(major))
    }

    /// Subtract a major-unit amount.
    #[must_use]
    pub fn subtract(&self, major: f64) -> Self {
        self.derive(self.minor_units - to_minor(major))
    }

    /// Multiply by a dimensionless scalar.
    #[must_use]
    pub fn multiply(&self, factor: f64) -> Self {
        self.derive(self.minor_units * factor)
    }

    /// Divide by a dimensionless scalar.
    ///
    /// Not guarded: dividing by zero yields ±infinity (or NaN for a zero
    /// amount), per IEEE semantics.
    #[must_use]
    pub fn divide(&self, divisor: f64) -> Self {
        self.derive(self.minor_units / divisor)
    }

    /// Returns the smaller of two amounts (self on a tie or NaN).
    #[must_use]
    pub fn min(&self, other: &Self) -> Self {
        if other.minor_units < self.minor_units {
            other.clone()
        } else {
            self.clone()
        }
    }

    /// Returns the larger of two amounts (self on a tie or NaN).
    #[must_use]
    pub fn max(&self, other: &Self) -> Self {
        if other.minor_units > self.minor_units {
            other.clone()
        } else {
            self.clone()
        }
    }

    // ========================================================================
    // Reconfiguration (chaining)
    // ========================================================================

    /// Replace the locale preference list, keeping the amount.
    #[must_use]
    pub fn with_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.format = self.format.with_locales(locales);
        self
    }

    /// Replace the locale list with a single tag.
    #[must_use]
    pub fn with_locale(self, tag: impl Into<String>) -> Self {
        self.with_locales([tag.into()])
    }

    /// Replace the rendering options, keeping the amount and locales.
    #[must_use]
    pub fn with_format_options(mut self, options: FormatOptions) -> Self {
        self.format = self.format.with_options(options);
        self
    }

    /// New value with the same formatting and a different minor-unit amount.
    #[inline]
    fn derive(&self, minor_units: f64) -> Self {
        Self {
            minor_units,
            format: self.format.clone(),
        }
    }
}

/// Major-unit to minor-unit conversion, quantized to whole minor units.
#[inline]
fn to_minor(major: f64) -> f64 {
    (major * Money::SCALE).round()
}

/// Keep only ASCII digits and decimal points.
fn strip_to_numeric(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Parse the longest leading decimal-number prefix: digits with at most one
/// decimal point. `"1.2.3"` parses as 1.2; text with no leading number
/// (empty, or starting with a second dot before any digit) yields None.
fn leading_number(text: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for c in text.chars() {
        match c {
            '0'..='9' => end += 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            },
            _ => break,
        }
    }
    text[..end].parse().ok()
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Money {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

/// Equality compares amounts only; formatting configuration never
/// participates.
impl PartialEq for Money {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.minor_units == other.minor_units
    }
}

impl PartialOrd for Money {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.minor_units.partial_cmp(&other.minor_units)
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        let minor = -self.minor_units;
        self.derive(minor)
    }
}

// No Add/Sub operator impls: a trait `fn add(self, rhs: Money)` would win
// method resolution over the inherent `add(&self, major: f64)` at every
// owned-receiver call site, breaking `Money::from_major(9.99).add(1.01)`.
// Combining two values goes through `m.add(other.to_number())`.

impl FromStr for Money {
    type Err = MoneyError;

    /// Strict counterpart of [`Money::from_text`]: the same character
    /// stripping applies, but the whole remainder must parse as one number.
    ///
    /// # Errors
    /// Returns `InvalidInput` instead of coercing to zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = strip_to_numeric(s);
        if cleaned.is_empty() {
            return Err(MoneyError::InvalidInput);
        }
        cleaned
            .parse::<f64>()
            .map(Self::from_major)
            .map_err(|_| MoneyError::InvalidInput)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({}, minor={})", self, self.minor_units)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format.render(self.to_number()))
    }
}

// ============================================================================
// Serde (amounts serialize as the plain major-unit number)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Money {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_number())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Money {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <f64 as serde::Deserialize>::deserialize(deserializer).map(Self::from_major)
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Two-decimal amounts survive the major/minor round trip exactly.
        #[test]
        fn roundtrip_two_decimal_values(cents in -1_000_000_000i64..1_000_000_000i64) {
            let major = cents as f64 / 100.0;
            let m = Money::from_major(major);
            prop_assert_eq!(m.minor_units(), cents as f64);
            prop_assert_eq!(m.to_number(), major);
        }

        /// Adding then subtracting the same amount is exact on minor units.
        #[test]
        fn add_subtract_inverse(
            base in -1_000_000_000i64..1_000_000_000i64,
            delta in -1_000_000_000i64..1_000_000_000i64,
        ) {
            let m = Money::from_minor_units(base as f64);
            let back = m.add(delta as f64 / 100.0).subtract(delta as f64 / 100.0);
            prop_assert_eq!(back.minor_units(), base as f64);
        }

        /// Text rendering round-trips through lenient parsing for any
        /// default-formatted two-decimal amount (sign excluded: the
        /// stripper discards it).
        #[test]
        fn format_parse_roundtrip(cents in 0i64..1_000_000_000i64) {
            let m = Money::from_minor_units(cents as f64);
            let parsed = Money::from_text(&m.to_string());
            prop_assert_eq!(parsed.minor_units(), cents as f64);
        }
    }
}
