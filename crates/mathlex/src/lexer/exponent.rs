//! Exponent suffixes.
//!
//! A decimal exponent (`e`/`E`) is applied by writing the mantissa as
//! decimal text, appending the exponent and handing the result to the
//! correctly-rounded `f64` parser. Multiplying by a power of ten would round
//! once per step: `1e-1` must come out as the double nearest to `0.1`.
//!
//! A binary exponent (`p`/`P`) is exact as a multiplication by a power of two.

use alloc::format;

use super::{Cursor, LexResult};
use crate::{DIGITS, ErrorCode};

/// The character that introduces an exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExponentMarker {
    /// `e` or `E`: scale by a power of ten.
    Decimal,
    /// `p` or `P`: scale by a power of two.
    Binary,
}

impl ExponentMarker {
    /// Returns `true` if `ch` is this marker, in either case.
    #[must_use]
    pub fn matches(self, ch: char) -> bool {
        match self {
            Self::Decimal => matches!(ch, 'e' | 'E'),
            Self::Binary => matches!(ch, 'p' | 'P'),
        }
    }
}

/// Lexes `marker`, an optional sign and a run of decimal digits.
///
/// A marker that is not followed by a sign or a digit is not an exponent
/// (`2e` can be two times `e`), so that case is a `Failure`. Once a sign has
/// been seen the digits are required and their absence is an
/// [`ErrorCode::ExponentExpected`] error.
///
/// Exponents too large for an `i32` saturate; the resulting value is then
/// zero or infinite anyway.
pub fn parse_exponent(cursor: &mut Cursor<'_>, marker: ExponentMarker) -> LexResult<i32> {
    let start = cursor.offset();
    if !cursor.at(start).is_some_and(|ch| marker.matches(ch)) {
        return cursor.failure();
    }

    let mut i = start + 1;
    let sign = match cursor.at(i) {
        Some(ch @ ('+' | '-')) => {
            i += 1;
            Some(ch)
        }
        _ => None,
    };

    let digits_start = i;
    let mut exponent: i32 = 0;
    while let Some(digit) = cursor.at(i).and_then(|ch| DIGITS.value(ch)) {
        exponent = exponent.saturating_mul(10).saturating_add(i32::from(digit));
        i += 1;
    }

    if i == digits_start {
        if sign.is_none() {
            return cursor.failure();
        }
        let result = cursor.error(i, 0, ErrorCode::ExponentExpected);
        cursor.skip_to(i);
        return result;
    }

    if sign == Some('-') {
        exponent = -exponent;
    }
    let result = cursor.success(i, exponent);
    cursor.skip_to(i);
    result
}

/// Applies an optional exponent to `mantissa`.
///
/// The cursor must sit right after the mantissa. The result spans only the
/// exponent text (empty if there is none) and is never a `Failure`: a missing
/// exponent leaves the mantissa unchanged. A malformed exponent is returned as
/// an error whose partial value is the mantissa.
pub fn apply_exponent(cursor: &mut Cursor<'_>, mantissa: f64) -> LexResult<f64> {
    apply_exponent_to_digits(cursor, mantissa, None)
}

/// Like [`apply_exponent`], recomposing from `digits` (the mantissa as it was
/// written, without separators) instead of from the formatted mantissa.
/// This keeps a decimal literal to a single rounding step.
pub(super) fn apply_exponent_to_digits(
    cursor: &mut Cursor<'_>,
    mantissa: f64,
    digits: Option<&str>,
) -> LexResult<f64> {
    let restore = cursor.offset();

    let probe = match parse_exponent(cursor, ExponentMarker::Decimal) {
        LexResult::Failure { .. } => {
            cursor.skip_to(restore);
            parse_exponent(cursor, ExponentMarker::Binary).map(|e| (ExponentMarker::Binary, e))
        }
        found => found.map(|e| (ExponentMarker::Decimal, e)),
    };

    cursor.skip_to(restore);
    match probe {
        LexResult::Success {
            end,
            value: (marker, exponent),
            ..
        } => {
            let value = match marker {
                ExponentMarker::Decimal => scale_by_power_of_ten(mantissa, digits, exponent),
                ExponentMarker::Binary => scale_by_power_of_two(mantissa, exponent),
            };
            let result = cursor.success(end, value);
            cursor.skip_to(end);
            result
        }
        LexResult::Failure { .. } => cursor.success(restore, mantissa),
        LexResult::Error { end, code, .. } => {
            let result = cursor.error(end, mantissa, code);
            cursor.skip_to(end);
            result
        }
    }
}

fn scale_by_power_of_ten(mantissa: f64, digits: Option<&str>, exponent: i32) -> f64 {
    // `Display` for f64 never switches to scientific notation, so appending
    // the exponent always yields a well-formed literal.
    let text = match digits {
        Some(digits) => format!("{digits}e{exponent}"),
        None if mantissa.is_finite() => format!("{mantissa}e{exponent}"),
        None => return mantissa,
    };
    text.parse().unwrap_or(mantissa)
}

fn scale_by_power_of_two(mantissa: f64, exponent: i32) -> f64 {
    // 2^±1000 is a normal double; larger exponents are applied in steps.
    let mut value = mantissa;
    let mut remaining = exponent;
    while remaining != 0 && value != 0.0 && value.is_finite() {
        let step = remaining.clamp(-1000, 1000);
        // `powi` needs std; 2^step is a normal double, so build it from its bits.
        value *= f64::from_bits(((i64::from(step) + 1023) as u64) << 52);
        remaining -= step;
    }
    value
}
