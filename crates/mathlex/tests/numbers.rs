#![expect(missing_docs)]

use mathlex::{
    CodePoints, Cursor, ErrorCode, LexError, LexResult, LexerOptions, NumberLexer, Radix,
    parse_number, parse_number_str, parse_signed_number, parse_signed_number_str,
};
use quickcheck_macros::quickcheck;

/// Splits `text` into the numbers found at each position, skipping anything
/// that is not a number, the way an expression parser walks its input.
fn scan_numbers(text: &str) -> Vec<LexResult<f64>> {
    let chars = CodePoints::from(text);
    let mut cursor = chars.cursor();
    let mut found = Vec::new();
    while !cursor.is_at_end() {
        match parse_signed_number(&mut cursor) {
            LexResult::Failure { start } => cursor.skip_to(start + 1),
            other => found.push(other),
        }
    }
    found
}

#[test]
fn scans_an_expression() {
    let found = scan_numbers("2x^{0b10} + 0x1p-1 \\cdot -1_000.5e-3");
    let values: Vec<f64> = found.iter().filter_map(|r| r.value().copied()).collect();
    assert_eq!(values, [2.0, 2.0, 0.5, -1.0005]);
    assert!(found.iter().all(LexResult::is_success));
}

#[test]
fn scanning_reports_malformed_literals_in_place() {
    let found = scan_numbers("a = 3e+ ; b = 0x1.0_1");
    insta::assert_debug_snapshot!(found, @r"
    [
        Error {
            start: 4,
            end: 7,
            value: 3.0,
            code: ExponentExpected,
        },
        Error {
            start: 14,
            end: 20,
            value: 1.0,
            code: HexadecimalNumberExpected,
        },
        Success {
            start: 20,
            end: 21,
            value: 1.0,
        },
    ]
    ");
}

#[test]
fn offsets_are_code_points() {
    // `π` and `≈` are multi-byte in UTF-8 but count as one position each.
    let chars = CodePoints::from("π≈6.25");
    let mut cursor = chars.cursor_at(2);
    assert_eq!(
        parse_number(&mut cursor),
        LexResult::Success {
            start: 2,
            end: 6,
            value: 6.25
        }
    );
}

#[test]
fn lexes_from_raw_bytes() {
    let chars = CodePoints::from_utf8_lossy(b"\xFF0x10");
    let mut cursor = chars.cursor_at(1);
    assert_eq!(parse_number(&mut cursor).value(), Some(&16.0));
}

#[test]
fn documented_properties() {
    assert_eq!(parse_number_str("0").value(), Some(&0.0));
    assert_eq!(parse_number_str("0x1A").value(), Some(&26.0));
    assert_eq!(parse_number_str("0b101").value(), Some(&5.0));
    assert_eq!(parse_number_str("0x1p4").value(), Some(&16.0));
    assert_eq!(parse_signed_number_str("-0x10").value(), Some(&-16.0));
    assert_eq!(parse_signed_number_str("+5").value(), Some(&5.0));
    assert_eq!(
        parse_number_str("1e-1").value().map(|v| v.to_bits()),
        Some(0.1f64.to_bits())
    );
    assert_eq!(
        parse_number_str("1_000").value(),
        parse_number_str("1000").value()
    );
    assert_eq!(
        parse_number_str("0b1_000").value(),
        parse_number_str("0b1000").value()
    );
    assert!(parse_number_str("0x1_0.01").is_success());
    assert_eq!(
        parse_number_str("0x1.0_1").code(),
        Some(ErrorCode::HexadecimalNumberExpected)
    );
}

#[test]
fn malformed_exponent_as_error_value() {
    let err = parse_number_str("3e+").into_result().unwrap_err();
    assert_eq!(
        err,
        LexError {
            code: ErrorCode::ExponentExpected,
            start: 0,
            end: 3,
            partial: 3.0,
        }
    );
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "exponent-expected at 0..3");
}

#[test]
fn configured_lexer_reports_radix() {
    let lexer = NumberLexer::new(LexerOptions {
        allow_binary_literals: false,
        ..LexerOptions::default()
    });
    let chars = CodePoints::from("0b1 0x1");
    let mut cursor: Cursor<'_> = chars.cursor();
    assert_eq!(
        lexer.parse_number_with_radix(&mut cursor),
        LexResult::Success {
            start: 0,
            end: 1,
            value: (Radix::Decimal, 0.0)
        }
    );
    cursor.skip_to(4);
    assert_eq!(
        lexer.parse_number_with_radix(&mut cursor),
        LexResult::Success {
            start: 4,
            end: 7,
            value: (Radix::Hexadecimal, 1.0)
        }
    );
}

#[quickcheck]
fn hexadecimal_integers_match_native(n: u32) -> bool {
    let text = format!("0x{n:X}");
    parse_number_str(&text)
        == LexResult::Success {
            start: 0,
            end: text.len(),
            value: f64::from(n),
        }
}

#[quickcheck]
fn decimal_floats_match_native(x: f64) -> bool {
    if !x.is_finite() || x.is_sign_negative() {
        return true;
    }
    let text = format!("{x:e}");
    parse_number_str(&text).value().map(|v| v.to_bits()) == Some(x.to_bits())
}
