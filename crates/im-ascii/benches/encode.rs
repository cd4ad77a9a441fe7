use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use im_ascii::convert;
use im_core::ramp::{Ramp, RAMP_EXTENDED};
use im_core::PixelGrid;
use im_source::to_grayscale;

fn bench_convert(c: &mut Criterion) {
    let mut pixels = PixelGrid::new(200, 120);
    for (i, b) in pixels.data.iter_mut().enumerate() {
        *b = (i % 256) as u8;
    }
    let gray = to_grayscale(&pixels);
    let ramp = Ramp::new(RAMP_EXTENDED);

    c.bench_function("convert_200x120_extended", |b| {
        b.iter(|| convert(black_box(&pixels), black_box(&gray), &ramp, (200, 396)));
    });
}

fn bench_grayscale(c: &mut Criterion) {
    let mut pixels = PixelGrid::new(1920, 1080);
    for (i, b) in pixels.data.iter_mut().enumerate() {
        *b = (i % 256) as u8;
    }

    c.bench_function("grayscale_1080p", |b| {
        b.iter(|| to_grayscale(black_box(&pixels)));
    });
}

criterion_group!(benches, bench_convert, bench_grayscale);
criterion_main!(benches);
