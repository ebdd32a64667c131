use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use grafika_demos::core::{CurveSampler, DEFAULT_CURVE_SEGMENTS};
use grafika_demos::sample_curve;
use std::hint::black_box;

fn build_control_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count.max(1) as f32;
            Vec2::new(t * 2.0 - 1.0, (t * 7.0).sin() * 0.8)
        })
        .collect()
}

fn bench_curve_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sampling");

    for &count in &[4usize, 10, 20] {
        let points = build_control_points(count);

        group.bench_with_input(BenchmarkId::new("sample_curve", count), &points, |b, pts| {
            b.iter(|| black_box(sample_curve(black_box(pts), DEFAULT_CURVE_SEGMENTS)))
        });

        group.bench_with_input(
            BenchmarkId::new("sampler_reused", count),
            &points,
            |b, pts| {
                let mut sampler = CurveSampler::new();
                let mut out = Vec::new();
                b.iter(|| {
                    sampler.sample_into(black_box(pts), DEFAULT_CURVE_SEGMENTS, &mut out);
                    black_box(out.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_curve_sampling);
criterion_main!(benches);
