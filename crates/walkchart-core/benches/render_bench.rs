use std::time::{Duration, Instant};

use walkchart_core::raster::render_to_png_bytes;
use walkchart_core::walk::{seeded_rng, RandomWalk};
use walkchart_core::{svg, ChartConfig, ChartState, RasterOptions};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn animated_chart(n: usize) -> (ChartState, Instant) {
    let mut ch = ChartState::initialize(ChartConfig::default()).expect("layout");
    let mut rng = seeded_rng(5);
    let walk = RandomWalk::new(n, 50);
    let t0 = Instant::now();
    ch.update(&walk.generate_with(&mut rng), t0);
    let t1 = t0 + Duration::from_millis(600);
    ch.update(&walk.generate_with(&mut rng), t1);
    // sample mid-transition so interpolation is on the measured path
    (ch, t1 + Duration::from_millis(150))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for &n in &[1_024usize, 10_000usize] {
        let (ch, at) = animated_chart(n);
        group.bench_function(format!("frame_{n}"), |b| b.iter(|| black_box(ch.frame(at))));
        group.bench_function(format!("svg_{n}"), |b| {
            let frame = ch.frame(at);
            b.iter(|| black_box(svg::render(&frame)));
        });
        group.bench_function(format!("png_{n}"), |b| {
            let frame = ch.frame(at);
            let opts = RasterOptions { draw_labels: false, ..RasterOptions::default() };
            b.iter(|| black_box(render_to_png_bytes(&frame, &opts).expect("render")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
