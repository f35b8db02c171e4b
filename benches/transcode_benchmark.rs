// ============================================================================
// Radix Transcoding Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Integer Encoding - Digit extraction across bases
// 2. Fraction Encoding - Shortest output vs fixed scale
// 3. Scientific Notation - Exponent search and recursive exponent encoding
// 4. Decoding - Tokenizing and correctly rounded float assembly
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_radix::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;

// ============================================================================
// Integer Encoding
// ============================================================================

fn benchmark_integer_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_integer");
    let spec = FormatSpec::default();

    for preset in [Preset::Bin, Preset::Dozenal, Preset::Hex, Preset::Base62] {
        let alphabet = preset.alphabet();
        group.bench_with_input(BenchmarkId::new("i64_max", preset), &alphabet, |b, alphabet| {
            b.iter(|| black_box(alphabet.encode(black_box(i64::MAX), &spec)));
        });
        group.bench_with_input(BenchmarkId::new("i128_min", preset), &alphabet, |b, alphabet| {
            b.iter(|| black_box(alphabet.encode(black_box(i128::MIN), &spec)));
        });
    }

    group.finish();
}

// ============================================================================
// Fraction Encoding
// ============================================================================

fn benchmark_fraction_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_fraction");
    let dozenal = RadixAlphabet::dozenal();

    // Shortest output for a value that never terminates in base 12
    group.bench_function("auto_tenth", |b| {
        b.iter(|| black_box(dozenal.encode(black_box(0.1), &FormatSpec::default())));
    });

    for scale in [2u32, 8, 32] {
        group.bench_with_input(BenchmarkId::new("fixed_pi", scale), &scale, |b, &scale| {
            let spec = FormatSpec::fixed(scale);
            b.iter(|| black_box(dozenal.encode(black_box(std::f64::consts::PI), &spec)));
        });
    }

    let third = Decimal::ONE / Decimal::from(3);
    group.bench_function("auto_decimal_third", |b| {
        b.iter(|| black_box(dozenal.encode(black_box(third), &FormatSpec::default())));
    });

    // Long exact expansion of the smallest subnormal
    let bin = RadixAlphabet::bin();
    group.bench_function("auto_min_subnormal_bin", |b| {
        b.iter(|| black_box(bin.encode(black_box(f64::from_bits(1)), &FormatSpec::default())));
    });

    group.finish();
}

// ============================================================================
// Scientific Notation
// ============================================================================

fn benchmark_scientific_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_scientific");
    let decimal = RadixAlphabet::by_base(10).unwrap();
    let spec = FormatSpec::default().scientific();

    for (name, value) in [
        ("avogadro", 6.02214076e23),
        ("elementary_charge", 1.602176634e-19),
        ("f64_max", f64::MAX),
    ] {
        group.bench_with_input(BenchmarkId::new("auto", name), &value, |b, &value| {
            b.iter(|| black_box(decimal.encode(black_box(value), &spec)));
        });
    }

    group.finish();
}

// ============================================================================
// Decoding
// ============================================================================

fn benchmark_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let hex = RadixAlphabet::hex();
    let dozenal = RadixAlphabet::dozenal();

    group.bench_function("hex_integer", |b| {
        b.iter(|| black_box(hex.decode(black_box("7FFFFFFFFFFFFFFF"))));
    });

    group.bench_function("hex_grouped_integer", |b| {
        b.iter(|| black_box(hex.decode(black_box("7,FFF,FFF,FFF,FFF,FFF"))));
    });

    group.bench_function("dozenal_fraction", |b| {
        b.iter(|| black_box(dozenal.decode(black_box("3;184809493E918664573X6211EE151551X05729290"))));
    });

    group.bench_function("dozenal_scientific", |b| {
        b.iter(|| black_box(dozenal.decode(black_box("1;2345e-1X"))));
    });

    group.bench_function("dozenal_decimal", |b| {
        b.iter(|| black_box(dozenal.decode_decimal(black_box("0;9"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_integer_encoding,
    benchmark_fraction_encoding,
    benchmark_scientific_encoding,
    benchmark_decoding,
);
criterion_main!(benches);
