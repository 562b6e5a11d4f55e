use super::LexResult;
use crate::ErrorCode;

/// A position over a borrowed sequence of code points.
///
/// Backtracking is done by remembering an offset and calling
/// [`Cursor::skip_to`]; the cursor itself is never cloned to speculate.
///
/// Invariant: `offset <= len`.
#[derive(Debug)]
pub struct Cursor<'src> {
    chars: &'src [char],
    offset: usize,
}

impl<'src> Cursor<'src> {
    /// A cursor at offset zero.
    #[must_use]
    pub fn new(chars: &'src [char]) -> Self {
        Self { chars, offset: 0 }
    }

    /// The code point at index `i`, or `None` past the end.
    #[must_use]
    #[inline]
    pub fn at(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    /// The code point at the current offset.
    #[must_use]
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.at(self.offset)
    }

    /// Moves to `i`. Offsets past the end are clamped to the end.
    #[inline]
    pub fn skip_to(&mut self, i: usize) {
        self.offset = i.min(self.chars.len());
    }

    /// Current code-point offset.
    #[must_use]
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Total number of code points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the underlying sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns `true` if the offset is at the end of the sequence.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.offset == self.chars.len()
    }

    /// The unread code points.
    #[must_use]
    pub fn remaining(&self) -> &'src [char] {
        &self.chars[self.offset..]
    }

    /// A recognized construct spanning from the current offset to `end`.
    #[must_use]
    pub fn success<T>(&self, end: usize, value: T) -> LexResult<T> {
        LexResult::Success {
            start: self.offset,
            end,
            value,
        }
    }

    /// No construct at the current offset.
    #[must_use]
    pub fn failure<T>(&self) -> LexResult<T> {
        LexResult::Failure { start: self.offset }
    }

    /// A malformed construct spanning from the current offset to `end`.
    #[must_use]
    pub fn error<T>(&self, end: usize, value: T, code: ErrorCode) -> LexResult<T> {
        LexResult::Error {
            start: self.offset,
            end,
            value,
            code,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn at_returns_none_out_of_range() {
        let text = chars("12");
        let cursor = Cursor::new(&text);
        assert_eq!(cursor.at(0), Some('1'));
        assert_eq!(cursor.at(1), Some('2'));
        assert_eq!(cursor.at(2), None);
        assert_eq!(cursor.at(usize::MAX), None);
    }

    #[test]
    fn skip_to_backtracks_and_clamps() {
        let text = chars("0x1F");
        let mut cursor = Cursor::new(&text);
        cursor.skip_to(3);
        assert_eq!(cursor.peek(), Some('F'));
        assert_eq!(cursor.remaining(), &['F']);
        cursor.skip_to(0);
        assert_eq!(cursor.offset(), 0);
        cursor.skip_to(99);
        assert_eq!(cursor.offset(), 4);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn constructors_use_current_offset_as_start() {
        let text = chars("x+12");
        let mut cursor = Cursor::new(&text);
        cursor.skip_to(2);
        assert_eq!(
            cursor.success(4, 12.0),
            LexResult::Success {
                start: 2,
                end: 4,
                value: 12.0
            }
        );
        assert_eq!(cursor.failure::<f64>(), LexResult::Failure { start: 2 });
        assert_eq!(
            cursor.error(3, 1.0, ErrorCode::DecimalNumberExpected),
            LexResult::Error {
                start: 2,
                end: 3,
                value: 1.0,
                code: ErrorCode::DecimalNumberExpected
            }
        );
    }
}
