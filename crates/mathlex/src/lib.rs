//! A backtracking lexer for numeric literals in mathematical notation.
//!
//! The lexer works over a sequence of code points through a [`Cursor`] and
//! recognizes binary (`0b101`), hexadecimal (`0x1A.8p3`) and decimal
//! (`1_000.25e-3`) literals. Every parse function returns a [`LexResult`]
//! with three outcomes:
//!
//! - [`LexResult::Success`]: the literal was recognized and the cursor sits
//!   right after it.
//! - [`LexResult::Failure`]: no literal starts here; the cursor is untouched
//!   and the caller is free to try something else.
//! - [`LexResult::Error`]: a literal was started but is malformed. The result
//!   carries the partial value, the exact span and an [`ErrorCode`].
//!
//! ```rust
//! use mathlex::{CodePoints, LexResult, parse_signed_number};
//!
//! let text = CodePoints::from("-0x1p4 + x");
//! let mut cursor = text.cursor();
//! let number = parse_signed_number(&mut cursor);
//! assert_eq!(number, LexResult::Success { start: 0, end: 6, value: -16.0 });
//! assert_eq!(cursor.offset(), 6);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod charset;
mod code_points;
mod error;
mod lexer;
mod options;

pub use charset::{DIGITS, DigitTable, HEX_DIGITS};
pub use code_points::CodePoints;
pub use error::{ErrorCode, LexError};
pub use lexer::{
    Cursor, ExponentMarker, LexResult, NumberLexer, Radix, apply_exponent, parse_binary_number,
    parse_decimal_number, parse_exponent, parse_hexadecimal_number, parse_number,
    parse_number_str, parse_signed_number, parse_signed_number_str,
};
pub use options::LexerOptions;
