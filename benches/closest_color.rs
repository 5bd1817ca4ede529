#![allow(unused)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pixeldither::{
    color_palette::Palette,
    dithering::quantize::{closest, closest_index},
};

pub(crate) mod bench_utils;
use bench_utils::*;

const PALETTE_SIZES: [usize; 5] = [2, 4, 16, 64, 256];

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_color");
    let observed = random_colors(4096);

    for size in PALETTE_SIZES {
        let colors = random_colors(size);
        let palette = Palette::custom("random", colors.clone()).unwrap();

        group.bench_with_input(BenchmarkId::new("closest", size), &palette, |b, palette| {
            b.iter(|| {
                for &color in &observed {
                    black_box(closest(color, palette));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("closest_index", size), &colors, |b, colors| {
            b.iter(|| {
                for &color in &observed {
                    black_box(closest_index(color, colors));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(closest_color, criterion_benchmark);
criterion_main!(closest_color);
