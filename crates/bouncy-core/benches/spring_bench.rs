//! Benchmark: spring settling over scalar and nested composite values.
//!
//! Run with: `cargo bench -p bouncy-core --bench spring_bench`
//!
//! A full unit jump is roughly fifty steps, so these numbers bound the
//! per-frame cost of driving one animated property.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bouncy_core::geometry::{Insets, Point, Rect};
use bouncy_core::{Spring, SpringAnimator};

fn bench_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("settle");

    group.bench_function("f64", |b| {
        b.iter(|| Spring::new(black_box(0.0_f64), black_box(1.0)).count());
    });

    group.bench_function("f32", |b| {
        b.iter(|| {
            Spring::new(black_box(0.0_f32), black_box(1.0))
                .with_tolerance(0.001)
                .count()
        });
    });

    group.bench_function("point", |b| {
        b.iter(|| Spring::new(black_box(Point::ZERO), black_box(Point::new(100.0, -50.0))).count());
    });

    group.bench_function("rect", |b| {
        let from = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let to = Rect::from_xywh(200.0, 100.0, 320.0, 240.0);
        b.iter(|| Spring::new(black_box(from), black_box(to)).count());
    });

    group.bench_function("insets", |b| {
        b.iter(|| Spring::new(black_box(Insets::all(0.0)), black_box(Insets::all(16.0))).count());
    });

    group.finish();
}

fn bench_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_step");

    group.bench_function("f64", |b| {
        let spring = Spring::new(0.0_f64, 1.0);
        b.iter(|| {
            let mut s = black_box(spring);
            s.step()
        });
    });

    group.bench_function("rect", |b| {
        let spring = Spring::new(Rect::default(), Rect::from_xywh(1.0, 2.0, 3.0, 4.0));
        b.iter(|| {
            let mut s = black_box(spring);
            s.step()
        });
    });

    group.finish();
}

fn bench_animator_retarget(c: &mut Criterion) {
    c.bench_function("animator_retarget_every_10_frames", |b| {
        b.iter(|| {
            let mut animator = SpringAnimator::new(Point::ZERO);
            for i in 0..100_i32 {
                if i % 10 == 0 {
                    let f = f64::from(i);
                    animator.animate_to(Point::new(f, -f));
                }
                black_box(animator.frame());
            }
            animator.value()
        });
    });
}

criterion_group!(benches, bench_settle, bench_single_step, bench_animator_retarget);
criterion_main!(benches);
