mod common;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, RgbImage};
use qr_clip::QrClipLocator;

/// Accepts every clip, so the benchmark measures the search alone
fn accept_all(_: &RgbImage) -> Option<String> {
    Some("ok".to_string())
}

fn reject_all(_: &RgbImage) -> Option<String> {
    None
}

fn bench_decode_plain_hit(c: &mut Criterion) {
    let image = DynamicImage::ImageRgb8(common::synthetic_scene(640, 480, 235, 20));
    let locator = QrClipLocator::new(accept_all);
    c.bench_function("decode_plain_hit_640x480", |b| {
        b.iter(|| locator.decode(black_box(&image)))
    });
}

fn bench_decode_enhanced_hit(c: &mut Criterion) {
    let image = DynamicImage::ImageRgb8(common::synthetic_scene(640, 480, 130, 90));
    let locator = QrClipLocator::new(accept_all);
    c.bench_function("decode_enhanced_hit_640x480", |b| {
        b.iter(|| locator.decode(black_box(&image)))
    });
}

fn bench_decode_miss(c: &mut Criterion) {
    let image = DynamicImage::ImageRgb8(common::synthetic_scene(1280, 720, 235, 20));
    let locator = QrClipLocator::new(reject_all);
    c.bench_function("decode_miss_1280x720", |b| {
        b.iter(|| locator.decode(black_box(&image)))
    });
}

fn bench_decode_batch(c: &mut Criterion) {
    let images: Vec<DynamicImage> = (0..8)
        .map(|_| DynamicImage::ImageRgb8(common::synthetic_scene(640, 480, 235, 20)))
        .collect();
    let locator = QrClipLocator::new(accept_all);
    c.bench_function("decode_batch_8x640x480", |b| {
        b.iter(|| locator.decode_batch(black_box(&images)))
    });
}

criterion_group!(
    benches,
    bench_decode_plain_hit,
    bench_decode_enhanced_hit,
    bench_decode_miss,
    bench_decode_batch
);
criterion_main!(benches);
