use super::{Cursor, LexResult, exponent::apply_exponent};
use crate::{HEX_DIGITS, LexerOptions};

fn bit(ch: char) -> Option<f64> {
    HEX_DIGITS
        .value(ch)
        .filter(|&d| d < 2)
        .map(f64::from)
}

/// `0b` followed by bits, an optional `.` fraction and an optional exponent.
///
/// A lone `0`, or `0b` without any bit after it, is a `Failure` so that the
/// decimal lexer can take the `0`.
pub(super) fn lex(cursor: &mut Cursor<'_>, options: &LexerOptions) -> LexResult<f64> {
    let start = cursor.offset();
    if cursor.at(start) != Some('0') || cursor.at(start + 1) != Some('b') {
        return cursor.failure();
    }

    let mut i = start + 2;
    let mut mantissa = 0.0;
    let mut bits = 0usize;
    while let Some(ch) = cursor.at(i) {
        if ch == '_' && options.allow_digit_separators {
            i += 1;
            continue;
        }
        let Some(b) = bit(ch) else { break };
        mantissa = mantissa * 2.0 + b;
        bits += 1;
        i += 1;
    }
    if bits == 0 {
        return cursor.failure();
    }

    if cursor.at(i) == Some('.') {
        i += 1;
        let mut place = 0.5;
        while let Some(ch) = cursor.at(i) {
            if ch == '_' && options.allow_digit_separators {
                i += 1;
                continue;
            }
            let Some(b) = bit(ch) else { break };
            mantissa += b * place;
            place /= 2.0;
            i += 1;
        }
    }

    cursor.skip_to(i);
    apply_exponent(cursor, mantissa).with_start(start)
}
