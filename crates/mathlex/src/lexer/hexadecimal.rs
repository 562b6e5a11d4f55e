use super::{Cursor, LexResult, exponent::apply_exponent};
use crate::{ErrorCode, HEX_DIGITS, LexerOptions};

/// `0x` followed by hex digits, an optional `.` fraction and an optional
/// exponent.
///
/// Only `p`/`P` can act as an exponent here: `e` and `E` are digits. The
/// fraction digits may be empty, as in `0x1.p4`.
/// Separators are skipped in the whole part, but an `_` inside the fraction
/// is reported as [`ErrorCode::HexadecimalNumberExpected`].
pub(super) fn lex(cursor: &mut Cursor<'_>, options: &LexerOptions) -> LexResult<f64> {
    let start = cursor.offset();
    if cursor.at(start) != Some('0') || cursor.at(start + 1) != Some('x') {
        return cursor.failure();
    }

    let mut i = start + 2;
    let mut mantissa = 0.0;
    let mut digits = 0usize;
    while let Some(ch) = cursor.at(i) {
        if ch == '_' && options.allow_digit_separators {
            i += 1;
            continue;
        }
        let Some(d) = HEX_DIGITS.value(ch) else { break };
        mantissa = mantissa * 16.0 + f64::from(d);
        digits += 1;
        i += 1;
    }
    if digits == 0 {
        return cursor.failure();
    }

    if cursor.at(i) == Some('.') {
        i += 1;
        let mut place = 1.0 / 16.0;
        while let Some(ch) = cursor.at(i) {
            if ch == '_' {
                let result = cursor.error(i + 1, mantissa, ErrorCode::HexadecimalNumberExpected);
                cursor.skip_to(i + 1);
                return result;
            }
            let Some(d) = HEX_DIGITS.value(ch) else { break };
            mantissa += f64::from(d) * place;
            place /= 16.0;
            i += 1;
        }
    }

    cursor.skip_to(i);
    apply_exponent(cursor, mantissa).with_start(start)
}
