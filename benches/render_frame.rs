use criterion::{Criterion, criterion_group, criterion_main};
use mandelzoom::{Viewport, render_viewport};
use std::hint::black_box;

fn bench_render_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_viewport");

    let home = Viewport::new(-0.5, 0.0, 2.0, 800, 600).unwrap();
    group.bench_function("home_view_800x600", |b| {
        b.iter(|| render_viewport(black_box(&home)).unwrap());
    });

    // A deep-ish zoom near the seahorse valley; most pixels hit the full
    // iteration cap, the worst case for frame cost.
    let zoomed = Viewport::new(-0.745, 0.11, 0.005, 800, 600).unwrap();
    group.bench_function("seahorse_valley_800x600", |b| {
        b.iter(|| render_viewport(black_box(&zoomed)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_render_viewport);
criterion_main!(benches);
