//! Performance benchmarks for the ingestion and color-mapping pipeline
//!
//! The renderers themselves are dominated by the plotting backend; what
//! this crate owns is parsing, geometry construction and scalar-to-color
//! binning, so that is what gets measured.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench pipeline_performance
//!
//! # Only the geometry benches
//! cargo bench --bench pipeline_performance geometry
//! ```

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tmap_rs::floorplan::parse_floorplan_reader;
use tmap_rs::grid::uniform_cells;
use tmap_rs::render::ColorScale;

/// Synthetic floorplan text with `blocks` 100µm square blocks.
fn floorplan_text(blocks: usize) -> String {
    let mut text = String::new();
    for i in 0..blocks {
        let x = (i % 100) * 100;
        let y = (i / 100) * 100;
        text.push_str(&format!(
            "Block{i}:\n   position {x}, {y}\n   dimension 100, 100\n   power values 0.5\n"
        ));
    }
    text
}

fn bench_floorplan_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("floorplan_parse");
    for blocks in [10, 100, 1000] {
        let text = floorplan_text(blocks);
        group.bench_with_input(BenchmarkId::from_parameter(blocks), &text, |b, text| {
            b.iter(|| parse_floorplan_reader(Cursor::new(text.as_bytes()), "<bench>").unwrap());
        });
    }
    group.finish();
}

fn bench_uniform_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry_uniform");
    for n in [32usize, 64, 128] {
        let axis: Vec<f64> = (0..n).map(|i| 50.0 + 100.0 * i as f64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n * n), &axis, |b, axis| {
            b.iter(|| uniform_cells(black_box(axis), black_box(axis)).unwrap());
        });
    }
    group.finish();
}

fn bench_color_binning(c: &mut Criterion) {
    let samples: Vec<f64> = (0..10_000)
        .map(|i| 300.0 + 60.0 * ((i as f64) * 0.37).sin().abs())
        .collect();
    let scale = ColorScale::new(300.0, 360.0, 100).unwrap();

    c.bench_function("color_binning_10k", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for &v in &samples {
                acc += scale.bin_index(black_box(v));
            }
            acc
        });
    });
}

criterion_group!(
    benches,
    bench_floorplan_parse,
    bench_uniform_geometry,
    bench_color_binning
);
criterion_main!(benches);
