use alloc::string::String;

use super::{Cursor, LexResult, exponent::apply_exponent_to_digits};
use crate::{DIGITS, ErrorCode, LexerOptions};

/// Digits, an optional `.` fraction and an optional exponent.
///
/// The first code point must be a digit: `.5` and signs are not decimal
/// literals at this level. A `.` after the whole part always belongs to the
/// literal, so `2.` and `1.e5` are complete. The digits are collected without separators and
/// converted in one correctly-rounded step, so `0.3` is the double nearest
/// to 0.3 rather than `3 * 0.1`. A decimal exponent is recomposed with the
/// same digits.
pub(super) fn lex(cursor: &mut Cursor<'_>, options: &LexerOptions) -> LexResult<f64> {
    let start = cursor.offset();
    if !cursor.at(start).is_some_and(|ch| DIGITS.contains(ch)) {
        return cursor.failure();
    }

    let mut text = String::new();
    let mut i = start;
    while let Some(ch) = cursor.at(i) {
        if ch == '_' && options.allow_digit_separators {
            i += 1;
            continue;
        }
        if !DIGITS.contains(ch) {
            break;
        }
        text.push(ch);
        i += 1;
    }

    if cursor.at(i) == Some('.') {
        i += 1;
        let mut point = false;
        while let Some(ch) = cursor.at(i) {
            if ch == '_' {
                let result = cursor.error(i + 1, mantissa(&text), ErrorCode::DecimalNumberExpected);
                cursor.skip_to(i + 1);
                return result;
            }
            if !DIGITS.contains(ch) {
                break;
            }
            if !point {
                text.push('.');
                point = true;
            }
            text.push(ch);
            i += 1;
        }
    }

    cursor.skip_to(i);
    apply_exponent_to_digits(cursor, mantissa(&text), Some(&text)).with_start(start)
}

// `text` is one or more ASCII digits with at most one `.` between digits.
fn mantissa(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}
