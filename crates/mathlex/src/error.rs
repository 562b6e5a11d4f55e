use thiserror::Error;

/// Why a literal that was started could not be completed.
///
/// The string forms returned by [`ErrorCode::as_str`] are stable identifiers
/// that callers can branch on or map into their own diagnostics.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// An exponent marker and sign were not followed by digits.
    #[error("exponent-expected")]
    ExponentExpected,
    /// A decimal fraction contained something other than digits.
    #[error("decimal-number-expected")]
    DecimalNumberExpected,
    /// A hexadecimal fraction contained something other than hex digits.
    #[error("hexadecimal-number-expected")]
    HexadecimalNumberExpected,
}

impl ErrorCode {
    /// The machine-readable identifier of this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExponentExpected => "exponent-expected",
            Self::DecimalNumberExpected => "decimal-number-expected",
            Self::HexadecimalNumberExpected => "hexadecimal-number-expected",
        }
    }
}

/// A malformed literal, detached from the cursor that produced it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{code} at {start}..{end}")]
pub struct LexError {
    /// What went wrong.
    pub code: ErrorCode,
    /// Code-point offset where the literal (including any sign) began.
    pub start: usize,
    /// Code-point offset just past the offending text.
    pub end: usize,
    /// Best-effort value of the text recognized before the error.
    pub partial: f64,
}
