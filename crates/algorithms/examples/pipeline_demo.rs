//! Operator demo: synthetic image processing pipeline
//!
//! Generates a 64x64 synthetic "image" with:
//! - Uniform background (value 50)
//! - Large bright rectangle (value 200)
//! - Small bright spots (single-pixel, value 220) — "salt" noise
//! - Small dark spots (single-pixel, value 5) — "pepper" noise
//! - Two basins for watershed seeding
//!
//! Then walks the operator set and prints summary statistics for each stage.
//!
//! Run:
//!   cargo run -p ndmorph-algorithms --example pipeline_demo

use ndmorph_algorithms::morphology::element::{box_element, cross_element};
use ndmorph_algorithms::prelude::*;
use ndmorph_core::image::ImageStatistics;

const ROWS: usize = 64;
const COLS: usize = 64;

fn main() {
    // --- 1. Build synthetic image ---
    let input = build_synthetic_image();
    println!("Synthetic image: {}x{}", COLS, ROWS);
    print_stats("  input", &input.statistics());

    let se = box_element::<u8>(2, 1); // 3x3
    println!("\nStructuring element: box(1) — 3x3 mask");

    // --- 2. Erosion / dilation ---
    let mut eroded = input.like();
    erode(&input, &se, &mut eroded).expect("erode failed");
    print_stats("  eroded", &eroded.statistics());

    let mut dilated = input.like();
    dilate(&input, &se, &mut dilated).expect("dilate failed");
    print_stats("  dilated", &dilated.statistics());

    // --- 3. Opening (removes salt), closing (removes pepper) ---
    let opened = opening(&input, &se).expect("opening failed");
    print_stats("  opened", &opened.statistics());
    let closed = closing(&input, &se).expect("closing failed");
    print_stats("  closed", &closed.statistics());

    // --- 4. Gradient and top-hats ---
    let grad = gradient(&input, &se).expect("gradient failed");
    print_stats("  gradient", &grad.statistics());
    let th = top_hat(&input, &se).expect("top_hat failed");
    print_stats("  top-hat", &th.statistics());
    let bh = black_hat(&input, &se).expect("black_hat failed");
    print_stats("  black-hat", &bh.statistics());

    // --- 5. Regional minima of the cleaned image seed a watershed ---
    let cleaned = closing(&opened, &se).expect("closing(opened) failed");
    let mut minima = cleaned.like::<bool>();
    regional_minima(&cleaned, &cross_element(2), &mut minima)
        .expect("regional_minima failed");
    let seeds = minima.as_slice().iter().filter(|&&v| v).count();
    println!("\nRegional minima cells: {}", seeds);

    let markers = label_markers(&minima);
    let (labels, lines) =
        cwatershed(&cleaned, &markers, &box_element(2, 1), true).expect("cwatershed failed");
    let lines = lines.expect("lines requested");
    let ridge_cells = lines.as_slice().iter().filter(|&&v| v).count();
    let distinct = distinct_labels(&labels);
    println!("Watershed: {} regions, {} ridge cells", distinct, ridge_cells);

    // --- 6. Binary round trip: threshold, close holes, majority vote ---
    let binary = threshold(&cleaned, 100);
    let solid = close_holes(&binary, &cross_element(2)).expect("close_holes failed");
    let mut voted = solid.like();
    majority_filter(&solid, 3, &mut voted).expect("majority_filter failed");
    println!(
        "Binary: {} set -> {} after hole closing -> {} after majority vote",
        count(&binary),
        count(&solid),
        count(&voted)
    );

    // --- 7. Isolated-pixel detection via hit-or-miss ---
    let isolated = HitMiss::default()
        .execute_default(threshold_u8(&input, 210))
        .expect("hitmiss failed");
    println!(
        "Hit-or-miss: {} isolated salt pixels",
        isolated.as_slice().iter().filter(|&&v| v == 1).count()
    );
}

/// Build a synthetic image with geometric objects and impulse noise.
fn build_synthetic_image() -> NdImage<u8> {
    let mut img = NdImage::filled(&[ROWS, COLS], 50u8);

    // Large bright rectangle: rows 10..30, cols 10..40 -> value 200
    for r in 10..30 {
        for c in 10..40 {
            img.set(&[r, c], 200).unwrap();
        }
    }

    // Dark basin pair for the watershed stage
    for r in 40..60 {
        for c in 5..30 {
            let d1 = (r as i32 - 50).abs() + (c as i32 - 12).abs();
            let d2 = (r as i32 - 50).abs() + (c as i32 - 24).abs();
            let v = 20 + 4 * d1.min(d2) as u8;
            img.set(&[r, c], v.min(50)).unwrap();
        }
    }

    // Salt and pepper noise at deterministic positions using a simple LCG
    let mut seed: u64 = 42;
    for _ in 0..40 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        let r = ((seed >> 33) as usize) % ROWS;
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        let c = ((seed >> 33) as usize) % COLS;
        img.set(&[r, c], 220).unwrap();
    }
    seed = 137;
    for _ in 0..40 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        let r = ((seed >> 33) as usize) % ROWS;
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        let c = ((seed >> 33) as usize) % COLS;
        img.set(&[r, c], 5).unwrap();
    }

    img
}

fn print_stats(label: &str, s: &ImageStatistics<u8>) {
    println!(
        "{:<12} min={:>3}  max={:>3}  mean={:>6.1}  cells={:>5}",
        label,
        s.min.unwrap_or(0),
        s.max.unwrap_or(0),
        s.mean.unwrap_or(f64::NAN),
        s.count,
    );
}

/// Give every regional-minimum cell its own label
fn label_markers(minima: &NdImage<bool>) -> NdImage<u8> {
    let mut markers = minima.like::<u8>();
    let mut label = 0u8;
    for i in 0..minima.size() {
        if minima.at_flat(i) {
            label = label.wrapping_add(1).max(1);
            markers.set_flat(i, label);
        }
    }
    markers
}

fn distinct_labels(labels: &NdImage<u8>) -> usize {
    let mut seen = [false; 256];
    for &v in labels.as_slice() {
        seen[v as usize] = true;
    }
    seen.iter().skip(1).filter(|&&v| v).count()
}

fn threshold(img: &NdImage<u8>, cut: u8) -> NdImage<bool> {
    let mut out = img.like::<bool>();
    for i in 0..img.size() {
        out.set_flat(i, img.at_flat(i) >= cut);
    }
    out
}

fn threshold_u8(img: &NdImage<u8>, cut: u8) -> NdImage<u8> {
    let mut out = img.like::<u8>();
    for i in 0..img.size() {
        out.set_flat(i, (img.at_flat(i) >= cut) as u8);
    }
    out
}

fn count(img: &NdImage<bool>) -> usize {
    img.as_slice().iter().filter(|&&v| v).count()
}
