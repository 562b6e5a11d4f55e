use crate::{ErrorCode, LexError};

/// The outcome of every parse function in this crate.
///
/// `Failure` means "nothing here, try another alternative" and is never an
/// error. `Error` means the construct was unambiguously started but could
/// not be completed; it carries the value recognized so far.
///
/// Offsets are code-point indices and `start <= end`.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LexResult<T> {
    /// The construct spans `start..end`.
    Success {
        /// First code point of the construct.
        start: usize,
        /// One past the last code point of the construct.
        end: usize,
        /// The recognized value.
        value: T,
    },
    /// No construct begins at `start`.
    Failure {
        /// Where the attempt was made.
        start: usize,
    },
    /// A malformed construct spans `start..end`.
    Error {
        /// First code point of the construct.
        start: usize,
        /// One past the offending code point.
        end: usize,
        /// Best-effort partial value.
        value: T,
        /// What went wrong.
        code: ErrorCode,
    },
}

impl<T> LexResult<T> {
    /// Returns `true` if the result is [`Success`].
    ///
    /// [`Success`]: LexResult::Success
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns `true` if the result is [`Failure`].
    ///
    /// [`Failure`]: LexResult::Failure
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Returns `true` if the result is [`Error`].
    ///
    /// [`Error`]: LexResult::Error
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Where the construct (or the attempt) began.
    #[must_use]
    pub fn start(&self) -> usize {
        match self {
            Self::Success { start, .. } | Self::Failure { start } | Self::Error { start, .. } => {
                *start
            }
        }
    }

    /// Where the construct ended, or `None` for a [`Failure`].
    ///
    /// [`Failure`]: LexResult::Failure
    #[must_use]
    pub fn end(&self) -> Option<usize> {
        match self {
            Self::Success { end, .. } | Self::Error { end, .. } => Some(*end),
            Self::Failure { .. } => None,
        }
    }

    /// The complete or partial value, or `None` for a [`Failure`].
    ///
    /// [`Failure`]: LexResult::Failure
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success { value, .. } | Self::Error { value, .. } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// The diagnostic code of an [`Error`].
    ///
    /// [`Error`]: LexResult::Error
    #[must_use]
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Error { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Transforms the value, keeping the variant, span and code.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> LexResult<U> {
        match self {
            Self::Success { start, end, value } => LexResult::Success {
                start,
                end,
                value: f(value),
            },
            Self::Failure { start } => LexResult::Failure { start },
            Self::Error {
                start,
                end,
                value,
                code,
            } => LexResult::Error {
                start,
                end,
                value: f(value),
                code,
            },
        }
    }

    /// Replaces the start offset, used when a wrapper owns the text before
    /// the inner construct (a prefix or a sign).
    #[must_use]
    pub fn with_start(self, start: usize) -> Self {
        match self {
            Self::Success { end, value, .. } => Self::Success { start, end, value },
            Self::Failure { .. } => Self::Failure { start },
            Self::Error {
                end, value, code, ..
            } => Self::Error {
                start,
                end,
                value,
                code,
            },
        }
    }
}

impl LexResult<f64> {
    /// Converts into a standard `Result`, discarding the span of a
    /// successful parse.
    ///
    /// `Failure` becomes `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the literal was malformed.
    pub fn into_result(self) -> Result<Option<f64>, LexError> {
        match self {
            Self::Success { value, .. } => Ok(Some(value)),
            Self::Failure { .. } => Ok(None),
            Self::Error {
                start,
                end,
                value,
                code,
            } => Err(LexError {
                code,
                start,
                end,
                partial: value,
            }),
        }
    }
}
