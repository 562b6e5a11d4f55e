use alloc::vec::Vec;

use bstr::ByteSlice;

use crate::lexer::Cursor;

/// An owned sequence of code points that cursors can borrow.
///
/// Offsets handed out by the lexer are code-point indices into this buffer,
/// never byte offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodePoints {
    chars: Vec<char>,
}

impl CodePoints {
    /// Decodes possibly invalid UTF-8. Each invalid sequence becomes a single
    /// U+FFFD replacement character.
    #[must_use]
    pub fn from_utf8_lossy(bytes: &[u8]) -> Self {
        Self {
            chars: bytes.chars().collect(),
        }
    }

    /// A cursor positioned at the first code point.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.chars)
    }

    /// A cursor positioned at `offset`, clamped to the length of the buffer.
    #[must_use]
    pub fn cursor_at(&self, offset: usize) -> Cursor<'_> {
        let mut cursor = Cursor::new(&self.chars);
        cursor.skip_to(offset);
        cursor
    }

    /// The decoded code points.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Number of code points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if there are no code points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for CodePoints {
    fn from(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }
}

impl From<Vec<char>> for CodePoints {
    fn from(chars: Vec<char>) -> Self {
        Self { chars }
    }
}

impl FromIterator<char> for CodePoints {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}
