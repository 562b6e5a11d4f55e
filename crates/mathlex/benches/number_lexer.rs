//! Benchmark – `mathlex::parse_signed_number`
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mathlex::{CodePoints, LexResult, parse_signed_number};

/// Build a deterministic expression of `count` literals in the given style,
/// separated by ` + `.
fn make_expression(count: usize, literal: &str) -> CodePoints {
    let mut s = String::new();
    for i in 0..count {
        if i > 0 {
            s.push_str(" + ");
        }
        s.push_str(literal);
    }
    CodePoints::from(s.as_str())
}

/// Walk the expression the way an expression parser would, lexing a number
/// at every position that has one. Returns the sum so Criterion cannot drop
/// the work.
fn scan(text: &CodePoints) -> f64 {
    let mut cursor = text.cursor();
    let mut sum = 0.0;
    while !cursor.is_at_end() {
        match parse_signed_number(&mut cursor) {
            LexResult::Failure { start } => cursor.skip_to(start + 1),
            LexResult::Success { value, .. } | LexResult::Error { value, .. } => sum += value,
        }
    }
    sum
}

fn bench_number_lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_lexer");

    for (name, literal) in [
        ("integer", "1234567"),
        ("separated", "1_234_567"),
        ("decimal_exponent", "1234.567e-3"),
        ("binary", "0b1010_1010.01"),
        ("hex_float", "0x1F.8p-4"),
    ] {
        let text = make_expression(1_000, literal);
        group.bench_with_input(BenchmarkId::new("scan", name), &text, |b, text| {
            b.iter(|| black_box(scan(black_box(text))));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_number_lexer }
criterion_main!(benches);
