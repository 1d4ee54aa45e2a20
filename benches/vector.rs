//! Benchmarks for quantized vector operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use centivec::Vector2D;

/// Generates a deterministic scatter of vectors in [-100, 100).
fn generate_vectors(count: usize, seed: u64) -> Vec<Vector2D<f64>> {
    let mut state = seed;
    let mut step = move || {
        // Simple xorshift for deterministic "random" coordinates
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % 2000) as f64 / 10.0 - 100.0
    };

    (0..count).map(|_| Vector2D::new(step(), step())).collect()
}

fn bench_rotate(c: &mut Criterion) {
    let vectors = generate_vectors(1024, 0x5eed);

    let mut group = c.benchmark_group("rotate");
    group.throughput(Throughput::Elements(vectors.len() as u64));
    group.bench_function("by_37_degrees", |b| {
        b.iter(|| {
            for v in &vectors {
                black_box(v.rotate(black_box(37)));
            }
        })
    });
    group.finish();
}

fn bench_normalized(c: &mut Criterion) {
    let vectors = generate_vectors(1024, 0x5eed);

    let mut group = c.benchmark_group("normalized");
    group.throughput(Throughput::Elements(vectors.len() as u64));
    group.bench_function("scatter", |b| {
        b.iter(|| {
            for v in &vectors {
                black_box(v.normalized());
            }
        })
    });
    group.finish();
}

fn bench_angle_between(c: &mut Criterion) {
    let vectors = generate_vectors(1024, 0x5eed);
    let pairs: Vec<_> = vectors.windows(2).map(|w| (w[0], w[1])).collect();

    let mut group = c.benchmark_group("angle_between");
    group.throughput(Throughput::Elements(pairs.len() as u64));
    group.bench_function("scatter", |b| {
        b.iter(|| {
            for (a, v) in &pairs {
                black_box(a.angle_between(*v)).ok();
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_rotate, bench_normalized, bench_angle_between);
criterion_main!(benches);
