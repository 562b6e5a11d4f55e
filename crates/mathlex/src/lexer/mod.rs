//! Numeric-literal lexing.
//!
//! Overview
//! - Every function here takes a [`Cursor`] by `&mut` and returns a
//!   [`LexResult`]. Text is read through [`Cursor::at`] with a local index;
//!   the cursor only moves once the outcome is known.
//! - On `Success` and `Error` the cursor is left at `end`. On `Failure` it is
//!   left where it was, so alternatives can be tried without bookkeeping.
//! - An `Error` from an inner parser is forwarded as is. It is never turned
//!   into a `Failure`, because the caller would then try another reading of
//!   text that was already committed to.
//!
//! Dispatch order
//! - Binary and hexadecimal literals start with `0`, which is also a complete
//!   decimal literal. The prefixed forms therefore get the first look, and
//!   decimal only runs when neither `0b` nor `0x` (with at least one digit)
//!   is present.

mod binary;
mod cursor;
mod decimal;
mod exponent;
mod hexadecimal;
mod result;


pub use cursor::Cursor;
pub use exponent::{ExponentMarker, apply_exponent, parse_exponent};
pub use result::LexResult;
use tracing::{debug, trace};

use crate::{CodePoints, LexerOptions};

/// The base a literal was written in.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// `0b` prefix.
    Binary,
    /// `0x` prefix.
    Hexadecimal,
    /// No prefix.
    Decimal,
}

impl Radix {
    /// The numeric base: 2, 16 or 10.
    #[must_use]
    pub const fn base(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Hexadecimal => 16,
            Self::Decimal => 10,
        }
    }
}

/// A number lexer configured with [`LexerOptions`].
///
/// The free functions of this crate use [`LexerOptions::default`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberLexer {
    options: LexerOptions,
}

impl NumberLexer {
    /// Creates a lexer with the given options.
    #[must_use]
    pub fn new(options: LexerOptions) -> Self {
        Self { options }
    }

    /// The options this lexer was created with.
    #[must_use]
    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// Lexes a `0b` literal. See [`parse_binary_number`].
    pub fn parse_binary_number(&self, cursor: &mut Cursor<'_>) -> LexResult<f64> {
        binary::lex(cursor, &self.options)
    }

    /// Lexes a `0x` literal. See [`parse_hexadecimal_number`].
    pub fn parse_hexadecimal_number(&self, cursor: &mut Cursor<'_>) -> LexResult<f64> {
        hexadecimal::lex(cursor, &self.options)
    }

    /// Lexes an unprefixed literal. See [`parse_decimal_number`].
    pub fn parse_decimal_number(&self, cursor: &mut Cursor<'_>) -> LexResult<f64> {
        decimal::lex(cursor, &self.options)
    }

    /// Lexes an unsigned literal of any enabled radix.
    pub fn parse_number(&self, cursor: &mut Cursor<'_>) -> LexResult<f64> {
        self.parse_number_with_radix(cursor).map(|(_, value)| value)
    }

    /// Like [`NumberLexer::parse_number`], also reporting which radix
    /// recognized the literal.
    ///
    /// # Panics
    ///
    /// In test and fuzzing builds, panics on a malformed literal if
    /// `panic_on_error` is set.
    pub fn parse_number_with_radix(&self, cursor: &mut Cursor<'_>) -> LexResult<(Radix, f64)> {
        let result = self.dispatch(cursor);
        match &result {
            LexResult::Success {
                start,
                end,
                value: (radix, _),
            } => trace!(start, end, ?radix, "number literal"),
            LexResult::Failure { start } => trace!(start, "no number literal"),
            LexResult::Error {
                start, end, code, ..
            } => {
                #[cfg(any(test, feature = "fuzzing"))]
                assert!(
                    !self.options.panic_on_error,
                    "malformed number literal: {code} at {start}..{end}"
                );
                debug!(start, end, code = code.as_str(), "malformed number literal");
            }
        }
        result
    }

    fn dispatch(&self, cursor: &mut Cursor<'_>) -> LexResult<(Radix, f64)> {
        if self.options.allow_binary_literals {
            match binary::lex(cursor, &self.options) {
                LexResult::Failure { .. } => {}
                found => return found.map(|v| (Radix::Binary, v)),
            }
        }
        if self.options.allow_hexadecimal_literals {
            match hexadecimal::lex(cursor, &self.options) {
                LexResult::Failure { .. } => {}
                found => return found.map(|v| (Radix::Hexadecimal, v)),
            }
        }
        decimal::lex(cursor, &self.options).map(|v| (Radix::Decimal, v))
    }

    /// Lexes a literal with an optional leading `+` or `-`.
    ///
    /// The reported `start` is the position of the sign when there is one.
    /// If no literal follows the sign, the result is a `Failure` and the
    /// cursor is moved back before the sign.
    pub fn parse_signed_number(&self, cursor: &mut Cursor<'_>) -> LexResult<f64> {
        let start = cursor.offset();
        let negative = match cursor.at(start) {
            Some(sign @ ('+' | '-')) => {
                cursor.skip_to(start + 1);
                sign == '-'
            }
            _ => false,
        };

        match self.parse_number(cursor) {
            LexResult::Failure { .. } => {
                cursor.skip_to(start);
                LexResult::Failure { start }
            }
            found => found
                .map(|v| if negative { -v } else { v })
                .with_start(start),
        }
    }
}

/// Lexes `0b` followed by binary digits, e.g. `0b1_0.1p3`.
///
/// Returns `Failure`, without moving the cursor, when the text does not
/// start with `0b` and a bit.
pub fn parse_binary_number(cursor: &mut Cursor<'_>) -> LexResult<f64> {
    NumberLexer::default().parse_binary_number(cursor)
}

/// Lexes `0x` followed by hexadecimal digits, e.g. `0xFF.8p-1`.
pub fn parse_hexadecimal_number(cursor: &mut Cursor<'_>) -> LexResult<f64> {
    NumberLexer::default().parse_hexadecimal_number(cursor)
}

/// Lexes an unprefixed decimal literal, e.g. `1_000.25e-3`.
///
/// The value is the correctly-rounded `f64` for the digits as written, not
/// a digit-by-digit accumulation: `0.3` is exactly `0.3_f64`, not `3 * 0.1`.
pub fn parse_decimal_number(cursor: &mut Cursor<'_>) -> LexResult<f64> {
    NumberLexer::default().parse_decimal_number(cursor)
}

/// Lexes an unsigned binary, hexadecimal or decimal literal, in that order of
/// preference.
///
/// ```rust
/// use mathlex::{CodePoints, LexResult, parse_number};
///
/// let text = CodePoints::from("0b101");
/// let result = parse_number(&mut text.cursor());
/// assert_eq!(result, LexResult::Success { start: 0, end: 5, value: 5.0 });
/// ```
pub fn parse_number(cursor: &mut Cursor<'_>) -> LexResult<f64> {
    NumberLexer::default().parse_number(cursor)
}

/// Lexes a literal with an optional leading sign. See
/// [`NumberLexer::parse_signed_number`].
pub fn parse_signed_number(cursor: &mut Cursor<'_>) -> LexResult<f64> {
    NumberLexer::default().parse_signed_number(cursor)
}

/// Runs [`parse_number`] at the start of `text`.
///
/// Trailing text is not an error; compare the result's `end` with the
/// length of `text` in code points to require a complete literal.
#[must_use]
pub fn parse_number_str(text: &str) -> LexResult<f64> {
    let chars = CodePoints::from(text);
    parse_number(&mut chars.cursor())
}

/// Runs [`parse_signed_number`] at the start of `text`.
#[must_use]
pub fn parse_signed_number_str(text: &str) -> LexResult<f64> {
    let chars = CodePoints::from(text);
    parse_signed_number(&mut chars.cursor())
}
