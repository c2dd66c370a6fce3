//! Per-frame cost of the colour wave and the particle network.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vizloop::{
    animation::{Clock, FrameAnimator},
    molecule::{wave_hue, ColorWave},
    network::{NetworkScene, RecordingSurface},
    options::{NetworkOptions, WaveOptions},
};

fn hue_benchmark(c: &mut Criterion) {
    let _ = c.bench_function("wave_hue", |b| {
        b.iter(|| black_box(wave_hue(black_box(0.5), black_box(2.0), 0.1, 0.5)));
    });
}

fn color_wave_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_wave_tick");

    for count in [100_usize, 1_000, 10_000] {
        let heights = (0..count).map(|i| i as f32 / count as f32).collect();
        let mut wave = ColorWave::new(heights, [0.5; 3], WaveOptions::default());
        let clock = Clock::at_secs(3.25);
        let _ = group.bench_function(format!("{count}_atoms"), |b| {
            b.iter(|| black_box(wave.tick(&clock)));
        });
    }

    group.finish();
}

fn network_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("network_frame");

    for count in [30_usize, 300] {
        let options = NetworkOptions {
            particle_count: count,
            ..NetworkOptions::default()
        };
        let mut scene = NetworkScene::new(1280.0, 720.0, &options, 1);
        let mut surface = RecordingSurface::new();
        let clock = Clock::new();
        let _ = group.bench_function(format!("{count}_particles"), |b| {
            b.iter(|| {
                let _ = scene.tick(&clock);
                scene.draw(&mut surface);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, hue_benchmark, color_wave_benchmark, network_benchmark);
criterion_main!(benches);
