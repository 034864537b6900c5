use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use image_shrink::{
    compress_blocking, encode, fit_within, BoundingBox, CompressionOptions, InputFile,
    QualityLevel,
};
use std::io::Cursor;

fn create_test_surface(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
    }))
}

fn create_test_file(width: u32, height: u32) -> InputFile {
    let mut buffer = Cursor::new(Vec::new());
    create_test_surface(width, height)
        .write_to(&mut buffer, ImageFormat::Jpeg)
        .unwrap();
    InputFile::new("bench.jpg", "image/jpeg", buffer.into_inner())
}

fn bench_fit_within(c: &mut Criterion) {
    let bounds = BoundingBox::default();

    c.bench_function("fit_within", |b| {
        b.iter(|| fit_within(black_box(4032), black_box(3024), black_box(&bounds)))
    });
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    group.sample_size(10);

    let surface = create_test_surface(3840, 2160);
    let target = fit_within(3840, 2160, &BoundingBox::default());

    for mime_type in ["image/jpeg", "image/png"] {
        group.bench_with_input(BenchmarkId::new("uhd", mime_type), &mime_type, |b, mime_type| {
            b.iter(|| {
                encode(
                    black_box(&surface),
                    target,
                    mime_type,
                    QualityLevel::default(),
                    FilterType::Triangle,
                    Some(1),
                )
            })
        });
    }

    group.finish();
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    group.sample_size(10);

    for (width, height) in [(800, 600), (1920, 1080), (3840, 2160)] {
        let file = create_test_file(width, height);
        let options = CompressionOptions::default();

        group.bench_with_input(
            BenchmarkId::new("jpeg", format!("{}x{}", width, height)),
            &file,
            |b, file| b.iter(|| compress_blocking(black_box(file.clone()), options)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_fit_within, bench_encode, bench_compress);
criterion_main!(benches);
