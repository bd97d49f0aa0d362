//! Criterion benchmarks for single steps and bulk fills.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lanerand::{LANES_U32, LANES_U64, Mwc1616, Xorshift128Plus};

/// Bytes per bulk fill.
const FILL_BYTES: usize = 64 * 1024;

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    group.throughput(Throughput::Bytes((LANES_U32 * 4) as u64));
    group.bench_function(BenchmarkId::new("mwc1616", LANES_U32), |b| {
        let mut rng: Mwc1616 = Mwc1616::new().unwrap();

        b.iter(|| {
            rng.step();
            black_box(rng.result());
        });
    });

    group.throughput(Throughput::Bytes((LANES_U64 * 8) as u64));
    group.bench_function(BenchmarkId::new("xorshift128p", LANES_U64), |b| {
        let mut rng: Xorshift128Plus = Xorshift128Plus::new().unwrap();

        b.iter(|| {
            rng.step();
            black_box(rng.result());
        });
    });

    group.finish();
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_64k");
    group.throughput(Throughput::Bytes(FILL_BYTES as u64));

    group.bench_function("mwc1616", |b| {
        let mut rng: Mwc1616 = Mwc1616::new().unwrap();
        let mut buf = vec![0u32; FILL_BYTES / 4];

        b.iter(|| {
            rng.fill(black_box(&mut buf));
        });
    });

    group.bench_function("xorshift128p", |b| {
        let mut rng: Xorshift128Plus = Xorshift128Plus::new().unwrap();
        let mut buf = vec![0u64; FILL_BYTES / 8];

        b.iter(|| {
            rng.fill(black_box(&mut buf));
        });
    });

    group.finish();
}

/// Lane-count scaling on the same engine: width-4 chunks vs. wider state.
fn bench_lane_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("mwc1616_lanes");

    macro_rules! lanes {
        ($($n:literal),*) => {$(
            group.throughput(Throughput::Bytes(($n * 4) as u64));
            group.bench_with_input(BenchmarkId::from_parameter($n), &$n, |b, _| {
                let mut rng = Mwc1616::<$n>::new().unwrap();

                b.iter(|| {
                    rng.step();
                    black_box(rng.result());
                });
            });
        )*};
    }

    lanes!(4, 8, 16, 32);
    group.finish();
}

criterion_group!(benches, bench_step, bench_fill, bench_lane_scaling);
criterion_main!(benches);
