#![allow(clippy::struct_excessive_bools)]

/// Configuration options for the number lexer.
///
/// The defaults accept every literal form: binary, hexadecimal and decimal,
/// with `_` digit-group separators.
///
/// # Examples
///
/// ```rust
/// use mathlex::{CodePoints, LexResult, LexerOptions, NumberLexer};
///
/// let lexer = NumberLexer::new(LexerOptions {
///     allow_hexadecimal_literals: false,
///     ..Default::default()
/// });
/// let text = CodePoints::from("0x10");
/// let mut cursor = text.cursor();
/// // Only the leading zero is a number now.
/// assert_eq!(
///     lexer.parse_number(&mut cursor),
///     LexResult::Success { start: 0, end: 1, value: 0.0 }
/// );
/// ```
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Whether `0b` introduces a binary literal.
    ///
    /// When `false`, `0b1` lexes as the decimal `0` followed by `b1`.
    ///
    /// # Default
    ///
    /// `true`
    pub allow_binary_literals: bool,

    /// Whether `0x` introduces a hexadecimal literal.
    ///
    /// # Default
    ///
    /// `true`
    pub allow_hexadecimal_literals: bool,

    /// Whether `_` may separate digit groups in the whole part of a literal.
    ///
    /// When `false`, an `_` ends the whole-number run. An `_` in a
    /// hexadecimal or decimal fraction is reported as an error either way.
    ///
    /// # Default
    ///
    /// `true`
    pub allow_digit_separators: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    #[cfg_attr(any(test, feature = "serde"), serde(default))]
    /// Panic on malformed literals instead of returning them.
    ///
    /// Enabled only in test and fuzzing builds to produce backtraces.
    pub panic_on_error: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            allow_binary_literals: true,
            allow_hexadecimal_literals: true,
            allow_digit_separators: true,
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: false,
        }
    }
}
