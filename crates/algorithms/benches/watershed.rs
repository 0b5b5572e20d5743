//! Benchmarks for watershed flooding

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndmorph_algorithms::morphology::element::box_element;
use ndmorph_algorithms::watershed::cwatershed;
use ndmorph_core::NdImage;

/// Rolling cost surface with basins every 32 cells and one marker per basin
fn create_basin_image(size: usize) -> (NdImage<u8>, NdImage<u8>) {
    let mut cost = NdImage::new(&[size, size]);
    let mut markers = NdImage::new(&[size, size]);
    let mut label = 0u8;
    for r in 0..size {
        for c in 0..size {
            let v = (((r % 32) as i32 - 16).abs() + ((c % 32) as i32 - 16).abs()) as u8;
            cost.set(&[r, c], v).unwrap();
        }
    }
    for r in (16..size).step_by(32) {
        for c in (16..size).step_by(32) {
            label = label.wrapping_add(1).max(1);
            markers.set(&[r, c], label).unwrap();
        }
    }
    (cost, markers)
}

fn bench_flood(c: &mut Criterion) {
    let mut group = c.benchmark_group("watershed/flood");
    let se = box_element(2, 1);
    for size in [128, 256, 512] {
        let (cost, markers) = create_basin_image(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| cwatershed(black_box(&cost), &markers, &se, false).unwrap())
        });
    }
    group.finish();
}

fn bench_flood_with_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("watershed/flood_lines");
    let se = box_element(2, 1);
    for size in [128, 256] {
        let (cost, markers) = create_basin_image(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| cwatershed(black_box(&cost), &markers, &se, true).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flood, bench_flood_with_lines);
criterion_main!(benches);
