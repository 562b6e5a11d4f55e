//! Digit classifiers.
//!
//! Both tables are plain `static` data indexed by ASCII code point; anything
//! outside the ASCII range is never a digit.

/// Marks a code point that is not a member of the table.
const NONE: u8 = 0xFF;

/// An immutable mapping from code point to digit magnitude.
#[derive(Debug)]
pub struct DigitTable {
    values: [u8; 128],
}

impl DigitTable {
    /// Returns `true` if `ch` is a digit of this alphabet.
    #[must_use]
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.value(ch).is_some()
    }

    /// Returns the magnitude of `ch`, or `None` if it is not a digit of this
    /// alphabet.
    #[must_use]
    #[inline]
    pub fn value(&self, ch: char) -> Option<u8> {
        let index = usize::try_from(u32::from(ch)).ok()?;
        match self.values.get(index) {
            Some(&NONE) | None => None,
            Some(&v) => Some(v),
        }
    }
}

const fn build(hex: bool) -> DigitTable {
    let mut values = [NONE; 128];
    let mut i = 0;
    while i < 10 {
        values[b'0' as usize + i] = i as u8;
        i += 1;
    }
    if hex {
        let mut i = 0;
        while i < 6 {
            values[b'a' as usize + i] = 10 + i as u8;
            values[b'A' as usize + i] = 10 + i as u8;
            i += 1;
        }
    }
    DigitTable { values }
}

/// Decimal digits `0-9`.
pub static DIGITS: DigitTable = build(false);

/// Hexadecimal digits `0-9`, `a-f` and `A-F`.
pub static HEX_DIGITS: DigitTable = build(true);
