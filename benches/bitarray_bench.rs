//! Performance benchmarks for BitArray operations.
//!
//! - set_bit / unset_bit / is_set on a single position (checked access)
//! - to_value and to_string scans over increasing lengths
//! - num_set population count

use bitblocks::BitArray;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};

const SIZE_STANDARD: usize = 1024;
const SEED: u64 = 42;

fn random_array(length: usize, pct: f64) -> BitArray {
    let mut rng = rand::rngs::StdRng::seed_from_u64(SEED);
    let mut ba = BitArray::new(length).unwrap();
    let num = (length as f64 * pct) as usize;
    for _ in 0..num {
        let _ = ba.set_bit(rng.gen_range(1..=length) as i64);
    }
    ba
}

// =============================================================================
// Single Bit Operations
// =============================================================================

fn bench_set_unset_bit(c: &mut Criterion) {
    let mut ba = BitArray::new(SIZE_STANDARD).unwrap();

    c.bench_function("set_unset_bit", |b| {
        let mut i = 0;
        b.iter(|| {
            let p = (i % SIZE_STANDARD) as i64 + 1;
            let _ = ba.set_bit(black_box(p));
            let _ = ba.unset_bit(black_box(p));
            i += 1;
        });
    });
}

fn bench_is_set(c: &mut Criterion) {
    let ba = random_array(SIZE_STANDARD, 0.5);

    c.bench_function("is_set", |b| {
        let mut i = 0;
        b.iter(|| {
            let _ = ba.is_set(black_box((i % SIZE_STANDARD) as i64 + 1));
            i += 1;
        });
    });
}

// =============================================================================
// Scans
// =============================================================================

fn bench_to_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_value");

    for size in [32, 128, 1024, 4096, 16384].iter() {
        let ba = random_array(*size, 0.2);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(ba.to_value()));
        });
    }

    group.finish();
}

fn bench_to_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_string");

    for size in [32, 1024, 16384].iter() {
        let ba = random_array(*size, 0.2);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(ba.to_string()));
        });
    }

    group.finish();
}

fn bench_num_set(c: &mut Criterion) {
    let ba = random_array(SIZE_STANDARD, 0.2);

    c.bench_function("num_set", |b| {
        b.iter(|| black_box(ba.num_set()));
    });
}

criterion_group!(
    benches,
    bench_set_unset_bit,
    bench_is_set,
    bench_to_value,
    bench_to_string,
    bench_num_set
);
criterion_main!(benches);
