//! Benchmarks for gl2d-transform
//!
//! Measures resolve cost with a warm cache, a stale top frame and a fully
//! stale stack.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gl2d_transform::TransformStack;

fn build_stack(depth: usize) -> TransformStack {
    let mut stack = TransformStack::with_capacity(depth + 1);
    for i in 0..depth {
        stack
            .push()
            .translate(i as f64, -(i as f64), 0.0)
            .rotate(i as f64 * 3.0, 0.0, 0.0, 1.0);
    }
    stack
}

fn bench_resolve_cached(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_cached");

    for depth in [1usize, 8, 32].iter() {
        let mut stack = build_stack(*depth);
        stack.resolve();

        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, _| {
            b.iter(|| black_box(stack.resolve()));
        });
    }

    group.finish();
}

fn bench_resolve_stale_top(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_stale_top");

    for depth in [1usize, 8, 32].iter() {
        let mut stack = build_stack(*depth);
        stack.resolve();

        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, _| {
            b.iter(|| {
                // Only the top entry is recomputed
                stack.translate(1.0, 0.0, 0.0);
                black_box(stack.resolve())
            });
        });
    }

    group.finish();
}

fn bench_resolve_from_scratch(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_from_scratch");

    for depth in [1usize, 8, 32].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            b.iter(|| {
                let mut stack = build_stack(depth);
                black_box(stack.resolve())
            });
        });
    }

    group.finish();
}

fn bench_draw_call_pattern(c: &mut Criterion) {
    c.bench_function("push_translate_resolve_pop", |b| {
        let mut stack = build_stack(4);
        stack.resolve();

        b.iter(|| {
            stack.push().translate(10.0, -20.0, 0.0).scale(2.0, 2.0, 1.0);
            let m = stack.resolve();
            stack.pop();
            black_box(m)
        });
    });
}

criterion_group!(
    benches,
    bench_resolve_cached,
    bench_resolve_stale_top,
    bench_resolve_from_scratch,
    bench_draw_call_pattern
);
criterion_main!(benches);
