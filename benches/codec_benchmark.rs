//! Throughput of encoding and decoding for both groupings.
//!
//! Values are drawn from a seeded RNG with a random number of high bits
//! cleared, so every encoded length from 1 to 10 bytes is represented.

use criterion::{Criterion, criterion_group, criterion_main};
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use vlq_rs::{OverflowSafeVlq, StandardVlq};

const VALUE_COUNT: usize = 4096;

fn sample_values(seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..VALUE_COUNT)
        .map(|_| rng.random_range(0..=u64::MAX) >> rng.random_range(0..64u32))
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let values = sample_values(42);
    let mut group = c.benchmark_group("encode");

    group.bench_function("standard", |b| {
        let mut buffer = [0u8; 10];
        b.iter(|| {
            for &value in &values {
                black_box(StandardVlq::new(value).encode_to(&mut buffer).unwrap());
            }
        });
    });
    group.bench_function("overflow_safe", |b| {
        let mut buffer = [0u8; 10];
        b.iter(|| {
            for &value in &values {
                black_box(OverflowSafeVlq::new(value).encode_to(&mut buffer).unwrap());
            }
        });
    });
    group.bench_function("standard_reversed", |b| {
        let mut buffer = [0u8; 16];
        b.iter(|| {
            for &value in &values {
                black_box(
                    StandardVlq::new(value)
                        .encode_reversed_to(&mut buffer)
                        .unwrap(),
                );
            }
        });
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let values = sample_values(7);
    let standard: Vec<u8> = values
        .iter()
        .flat_map(|&value| StandardVlq::new(value).to_bytes().to_vec())
        .collect();
    let overflow_safe: Vec<u8> = values
        .iter()
        .flat_map(|&value| OverflowSafeVlq::new(value).to_bytes().to_vec())
        .collect();
    let mut group = c.benchmark_group("decode");

    group.bench_function("standard", |b| {
        b.iter(|| {
            let mut rest = standard.as_slice();
            while !rest.is_empty() {
                let (vlq, progress) = StandardVlq::decode(rest);
                black_box(vlq);
                rest = &rest[progress.consumed..];
            }
        });
    });
    group.bench_function("overflow_safe", |b| {
        b.iter(|| {
            let mut rest = overflow_safe.as_slice();
            while !rest.is_empty() {
                let (vlq, progress) = OverflowSafeVlq::decode(rest);
                black_box(vlq);
                rest = &rest[progress.consumed..];
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
