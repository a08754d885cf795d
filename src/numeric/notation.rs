// ============================================================================
// Notation
// Human-readable formatting and lenient amount parsing
// ============================================================================

use super::decimal_float::DecimalFloat;
use super::errors::{NumericError, NumericResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which notation to render amounts in.
///
/// Suffix notation is the default; scientific is the player-facing toggle
/// for the late game where suffixes stop being memorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notation {
    /// `1.50K`, `3.2M`, `714T`, ...
    #[default]
    Suffix,
    /// `1.50e3`, `3.20e6`, ...
    Scientific,
}

/// Ordered magnitude suffixes; tier 1 (`K`) starts at 10^3, each tier is
/// three orders of magnitude. Past the table, rendering falls back to
/// scientific notation instead of indexing out of range.
const SUFFIXES: [&str; 11] = [
    "K", "M", "B", "T", "Qa", "Qi", "Sx", "Sp", "Oc", "No", "Dc",
];

/// Exponent at which scientific notation switches from two to three
/// decimal places; past this a coarse mantissa is misleading.
const FINE_MANTISSA_EXPONENT: i64 = 100;

/// Trailing magnitude letters accepted by the parser, with the power of
/// ten each one applies.
const SUFFIX_LETTERS: [(char, i64); 5] = [('k', 3), ('m', 6), ('b', 9), ('t', 12), ('q', 15)];

// ============================================================================
// Formatting
// ============================================================================

/// Decimal places that keep the rendered string inside a small fixed
/// width: two under 10, one under 100, none past that.
fn decimal_places(displayed: f64) -> usize {
    if displayed < 10.0 {
        2
    } else if displayed < 100.0 {
        1
    } else {
        0
    }
}

/// Render in suffix notation.
///
/// Values below 10^3 render as a plain decimal. Above that the exponent is
/// bucketed into tiers of three and folded back into the displayed
/// mantissa, so `1500` renders as `1.50K`.
pub fn format_suffix(value: DecimalFloat) -> String {
    if value.mantissa() <= 0.0 {
        return "0".to_string();
    }

    let exponent = value.exponent();
    if exponent < 3 {
        let plain = value.to_f64();
        return format!("{:.*}", decimal_places(plain), plain);
    }

    let mut tier = exponent / 3;
    let mut displayed = value.mantissa() * 10f64.powi((exponent - tier * 3) as i32);

    // Rounding at the top of a tier must not print a four-digit mantissa:
    // 999,960 is "1.00M", never "1000K".
    if displayed.round() >= 1000.0 {
        displayed /= 1000.0;
        tier += 1;
    }

    match SUFFIXES.get(tier as usize - 1) {
        Some(suffix) => format!("{:.*}{}", decimal_places(displayed), displayed, suffix),
        None => format_scientific(value),
    }
}

/// Render in scientific notation: `mantissa.e±exponent`.
pub fn format_scientific(value: DecimalFloat) -> String {
    if value.mantissa() <= 0.0 {
        return "0".to_string();
    }

    let places = if value.exponent() >= FINE_MANTISSA_EXPONENT {
        3
    } else {
        2
    };
    format!("{:.*}e{}", places, value.mantissa(), value.exponent())
}

/// Render in the given notation.
pub fn format_amount(value: DecimalFloat, notation: Notation) -> String {
    match notation {
        Notation::Suffix => format_suffix(value),
        Notation::Scientific => format_scientific(value),
    }
}

impl DecimalFloat {
    /// Render in the given notation; `Display` uses [`Notation::Suffix`].
    pub fn format(self, notation: Notation) -> String {
        format_amount(self, notation)
    }
}

impl fmt::Display for DecimalFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_suffix(*self))
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse a user-typed amount.
///
/// Accepts plain decimals (thousands separators stripped), scientific
/// literals, and a single trailing case-insensitive magnitude letter:
/// `"12.5k"`, `"3.4e9"`, `"1,250"`. Anything else is an error, so the
/// caller can reject the input instead of silently reading it as zero.
///
/// # Example
/// ```
/// use idle_economy::numeric::{parse_amount, DecimalFloat};
///
/// let amount = parse_amount("12.5k").unwrap();
/// assert_eq!(amount, DecimalFloat::from_number(12_500.0));
/// assert!(parse_amount("twelve").is_err());
/// ```
pub fn parse_amount(input: &str) -> NumericResult<DecimalFloat> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NumericError::EmptyInput);
    }

    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(NumericError::EmptyInput);
    }

    let (number_part, shift) = match cleaned.chars().last() {
        Some(letter) if letter.is_ascii_alphabetic() => {
            let shift = SUFFIX_LETTERS
                .iter()
                .find(|(candidate, _)| *candidate == letter.to_ascii_lowercase())
                .map(|(_, shift)| *shift)
                .ok_or(NumericError::UnknownSuffix)?;
            (&cleaned[..cleaned.len() - letter.len_utf8()], shift)
        },
        _ => (cleaned.as_str(), 0),
    };

    if number_part.is_empty() {
        return Err(NumericError::InvalidNumber);
    }
    let number: f64 = number_part
        .parse()
        .map_err(|_| NumericError::InvalidNumber)?;
    // f64 parsing accepts "inf" and "NaN" spellings; those are not amounts.
    if !number.is_finite() {
        return Err(NumericError::InvalidNumber);
    }

    Ok(DecimalFloat::from_parts(number, shift))
}

impl FromStr for DecimalFloat {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_amount(s)
    }
}

// ============================================================================
// Tests
// ============================================================================
