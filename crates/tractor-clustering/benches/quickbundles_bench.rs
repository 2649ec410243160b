use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tractor_clustering::QuickBundles;
use tractor_core::models::{Curve, SourceLabel};
use tractor_core::traits::ClusteringOracle;

fn synthetic_curves(count: usize) -> Vec<Curve> {
    (0..count)
        .map(|i| {
            let base = (i % 17) as f32 * 9.0;
            let jitter = (i % 5) as f32 * 0.7;
            let points = (0..40)
                .map(|k| [base + k as f32 * 1.5, base + jitter, (k as f32 * 0.3).sin() * 4.0])
                .collect();
            Curve::new(points, SourceLabel::Ic, i)
        })
        .collect()
}

fn bench_quickbundles(c: &mut Criterion) {
    let curves = synthetic_curves(5_000);
    let oracle = QuickBundles::new();
    c.bench_function("quickbundles_5k", |b| {
        b.iter(|| oracle.cluster(black_box(&curves), 20.0, 12).unwrap())
    });
}

criterion_group!(benches, bench_quickbundles);
criterion_main!(benches);
