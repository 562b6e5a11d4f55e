#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use mathlex::{CodePoints, LexResult, LexerOptions, NumberLexer, Radix};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

const HEADER: usize = 5; // 1 flag + 4-byte start offset

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Text that commonly sits next to numbers in mathematical notation.
static NOISE: &[&str] = &[
    " ", "+", "-", "x", "e", "p", "\\cdot", "{", "}", "^", ".", "_", "π", "\u{FFFD}",
];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed % 10 == 0 {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x07);
        data[1..5].copy_from_slice(&with_rng(|rng| (rng.next_u32() % 8).to_le_bytes()));

        let mut prefix = HEADER;
        while prefix < size.max(HEADER + 1) && prefix < max_size {
            let limit = max_size - prefix;
            prefix += append_noise(&mut data[prefix..], limit);
            prefix += append_literal(&mut data[prefix..], limit);
        }
        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fn append_noise(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        let piece = NOISE[rng.random_range(0..NOISE.len())].as_bytes();
        if piece.len() > limit {
            return 0;
        }
        buf[..piece.len()].copy_from_slice(piece);
        piece.len()
    })
}

fn append_literal(buf: &mut [u8], limit: usize) -> usize {
    let literal = loop {
        let bytes: Vec<u8> = with_rng(|rng| (0..64).map(|_| rng.random::<u8>()).collect());
        let mut u = arbitrary::Unstructured::new(&bytes);
        if let Ok(literal) = ArbitraryLiteral::arbitrary(&mut u) {
            break literal.0;
        }
    };
    let len = literal.len().min(limit);
    buf[..len].copy_from_slice(&literal.as_bytes()[..len]);
    len
}

/// A literal-shaped string: optional sign, prefix, digits with separators,
/// optional fraction and optional exponent, each of which may be malformed.
#[derive(Debug)]
struct ArbitraryLiteral(String);

impl<'a> Arbitrary<'a> for ArbitraryLiteral {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut s = String::new();
        match u.choose_index(3)? {
            0 => s.push('-'),
            1 => s.push('+'),
            _ => {}
        }
        let alphabet: &[u8] = match u.choose_index(3)? {
            0 => {
                s.push_str("0b");
                b"01_"
            }
            1 => {
                s.push_str("0x");
                b"0123456789abcdefABCDEF_"
            }
            _ => b"0123456789_",
        };
        let whole = u.int_in_range(0..=24)?;
        for _ in 0..whole {
            s.push(char::from(*u.choose(alphabet)?));
        }
        if u.arbitrary()? {
            s.push('.');
            for _ in 0..u.int_in_range(0..=12)? {
                s.push(char::from(*u.choose(alphabet)?));
            }
        }
        if u.arbitrary()? {
            s.push(*u.choose(&['e', 'E', 'p', 'P'][..])?);
            if u.arbitrary()? {
                s.push(*u.choose(&['+', '-'][..])?);
            }
            for _ in 0..u.int_in_range(0..=4)? {
                s.push(char::from(*u.choose(&b"0123456789"[..])?));
            }
        }
        Ok(ArbitraryLiteral(s))
    }
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn lexer(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let offset = u32::from_le_bytes(data[1..5].try_into().unwrap()) as usize;
    let text = CodePoints::from_utf8_lossy(&data[HEADER..]);
    let start = offset % (text.len() + 1);

    let lexer = NumberLexer::new(LexerOptions {
        allow_binary_literals: flags & 1 == 0,
        allow_hexadecimal_literals: flags & 2 == 0,
        allow_digit_separators: flags & 4 == 0,
        panic_on_error: false,
    });

    let mut cursor = text.cursor_at(start);
    let result = lexer.parse_number_with_radix(&mut cursor);
    match &result {
        LexResult::Failure { start: at } => {
            assert_eq!(*at, start);
            assert_eq!(cursor.offset(), start);
        }
        LexResult::Success {
            start: at,
            end,
            value: (radix, value),
        } => {
            assert_eq!(*at, start);
            assert!(start < *end && *end <= text.len());
            assert_eq!(cursor.offset(), *end);
            let literal: String = text.as_slice()[start..*end]
                .iter()
                .filter(|&&ch| ch != '_')
                .collect();
            if *radix == Radix::Decimal && !literal.contains(['p', 'P']) {
                // Whole-part separators aside, a decimal literal with a
                // decimal exponent is exactly what the standard library parses.
                let expected: f64 = literal.parse().expect("decimal literal");
                assert_eq!(value.to_bits(), expected.to_bits(), "{literal}");
            }
        }
        LexResult::Error { start: at, end, .. } => {
            assert_eq!(*at, start);
            assert!(start < *end && *end <= text.len());
            assert_eq!(cursor.offset(), *end);
        }
    }

    let mut cursor = text.cursor_at(start);
    let signed = lexer.parse_signed_number(&mut cursor);
    match signed.end() {
        None => assert_eq!(cursor.offset(), start),
        Some(end) => assert_eq!(cursor.offset(), end),
    }
    assert_eq!(signed.start(), start);
}

fuzz_target!(|data: &[u8]| lexer(data));
