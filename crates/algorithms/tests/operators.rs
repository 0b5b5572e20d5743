//! End-to-end operator scenarios
//!
//! Cross-operator properties and worked examples exercised through the
//! public API, complementing the per-module unit tests.

use ndmorph_algorithms::prelude::*;
use ndmorph_algorithms::morphology::element::{box_element, cross_element};

fn flat3() -> NdImage<u8> {
    box_element(1, 1)
}

#[test]
fn erode_1d_worked_example() {
    let a = NdImage::from_vec(&[7], vec![5u8, 5, 5, 1, 5, 5, 5]).unwrap();
    let mut out = a.like();
    erode(&a, &flat3(), &mut out).unwrap();
    assert_eq!(out.as_slice(), &[5, 5, 1, 1, 1, 5, 5]);
}

#[test]
fn dilate_1d_worked_example() {
    let a = NdImage::from_vec(&[7], vec![0u8, 0, 0, 1, 0, 0, 0]).unwrap();
    let mut out = a.like();
    dilate(&a, &flat3(), &mut out).unwrap();
    assert_eq!(out.as_slice(), &[0, 0, 1, 1, 1, 0, 0]);
}

#[test]
fn erode_saturates_at_zero() {
    let a = NdImage::filled(&[9], 0u8);
    let bc = NdImage::from_vec(&[3], vec![1u8, 1, 1]).unwrap();
    let mut out = a.like();
    erode(&a, &bc, &mut out).unwrap();
    assert!(out.as_slice().iter().all(|&v| v == 0));
}

#[test]
fn close_holes_ring_worked_example() {
    // Hollow 3x3 ring centred in a 5x5 grid; 4-connectivity cross
    let mut ring: NdImage<bool> = NdImage::new(&[5, 5]);
    for r in 1..4 {
        for c in 1..4 {
            if r != 2 || c != 2 {
                ring.set(&[r, c], true).unwrap();
            }
        }
    }
    let out = close_holes(&ring, &cross_element(2)).unwrap();

    let mut expected = ring.clone();
    expected.set(&[2, 2], true).unwrap();
    assert_eq!(out.as_slice(), expected.as_slice());
}

#[test]
fn regional_minima_worked_example() {
    let a = NdImage::from_vec(
        &[4, 5],
        vec![
            5u8, 5, 5, 5, 5, //
            5, 1, 1, 2, 5, //
            5, 1, 1, 5, 5, //
            5, 5, 5, 5, 5,
        ],
    )
    .unwrap();
    let mut out = a.like();
    regional_minima(&a, &cross_element(2), &mut out).unwrap();

    let expected: Vec<bool> = (0..20)
        .map(|i| matches!(i, 6 | 7 | 11 | 12))
        .collect();
    assert_eq!(out.as_slice(), expected.as_slice());
}

#[test]
fn watershed_1d_worked_example() {
    let a = NdImage::from_vec(&[9], vec![1u8, 2, 3, 2, 1, 2, 3, 2, 1]).unwrap();
    let mut markers: NdImage<u8> = NdImage::new(&[9]);
    markers.set(&[0], 1).unwrap();
    markers.set(&[8], 2).unwrap();

    let (labels, lines) = cwatershed(&a, &markers, &flat3(), true).unwrap();
    assert_eq!(labels.as_slice(), &[1, 1, 1, 1, 1, 2, 2, 2, 2]);
    assert!(lines.unwrap().get(&[4]).unwrap());
}

#[test]
fn hitmiss_isolated_pixel_template() {
    // Centre 1, four side cells 0, corners don't-care
    let template = NdImage::from_vec(
        &[3, 3],
        vec![
            2u8, 0, 2, //
            0, 1, 0, //
            2, 0, 2,
        ],
    )
    .unwrap();

    let mut a: NdImage<u8> = NdImage::new(&[7, 7]);
    a.set(&[2, 2], 1).unwrap(); // isolated
    a.set(&[4, 4], 1).unwrap();
    a.set(&[4, 5], 1).unwrap(); // 4-connected pair

    let mut out = a.like();
    hitmiss(&a, &template, &mut out).unwrap();
    assert_eq!(out.get(&[2, 2]).unwrap(), 1);
    assert_eq!(out.get(&[4, 4]).unwrap(), 0);
    assert_eq!(out.get(&[4, 5]).unwrap(), 0);
}

#[test]
fn majority_filter_single_pixel() {
    let mut a: NdImage<bool> = NdImage::new(&[5, 5]);
    a.set(&[2, 2], true).unwrap();
    let mut out = a.like();
    majority_filter(&a, 3, &mut out).unwrap();
    assert!(out.as_slice().iter().all(|&v| !v));
}

#[test]
fn all_operators_preserve_shape() {
    let a = NdImage::filled(&[6, 7], 3u8);
    let bc = box_element(2, 1);

    let mut out = a.like();
    erode(&a, &bc, &mut out).unwrap();
    assert_eq!(out.shape(), a.shape());
    dilate(&a, &bc, &mut out).unwrap();
    assert_eq!(out.shape(), a.shape());

    let mut mask = a.like::<bool>();
    local_minima(&a, &bc, &mut mask).unwrap();
    assert_eq!(mask.shape(), a.shape());
    regional_maxima(&a, &bc, &mut mask).unwrap();
    assert_eq!(mask.shape(), a.shape());

    let binary = NdImage::filled(&[6, 7], false);
    let holes = close_holes(&binary, &box_element::<bool>(2, 1)).unwrap();
    assert_eq!(holes.shape(), a.shape());

    let (labels, lines) = cwatershed(&a, &a.like(), &bc, true).unwrap();
    assert_eq!(labels.shape(), a.shape());
    assert_eq!(lines.unwrap().shape(), a.shape());
}

#[test]
fn erode_dilate_monotone() {
    // a <= b pointwise implies erode(a) <= erode(b) and dilate(a) <= dilate(b)
    let a = NdImage::from_vec(&[3, 4], vec![3u8, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8]).unwrap();
    let b = NdImage::from_vec(
        &[3, 4],
        a.as_slice().iter().map(|&v| v.saturating_add(2)).collect(),
    )
    .unwrap();
    let bc = cross_element(2);

    let mut ea = a.like();
    let mut eb = a.like();
    erode(&a, &bc, &mut ea).unwrap();
    erode(&b, &bc, &mut eb).unwrap();
    for i in 0..a.size() {
        assert!(ea.at_flat(i) <= eb.at_flat(i), "erode monotone at {}", i);
    }

    let mut da = a.like();
    let mut db = a.like();
    dilate(&a, &bc, &mut da).unwrap();
    dilate(&b, &bc, &mut db).unwrap();
    for i in 0..a.size() {
        assert!(da.at_flat(i) <= db.at_flat(i), "dilate monotone at {}", i);
    }
}

#[test]
fn erode_dilate_duality_on_booleans() {
    let mut a: NdImage<bool> = NdImage::new(&[5, 5]);
    for (r, c) in [(1, 1), (1, 2), (2, 2), (3, 4), (4, 0)] {
        a.set(&[r, c], true).unwrap();
    }
    let bc = box_element::<bool>(2, 1);

    let complement = NdImage::from_vec(&[5, 5], a.as_slice().iter().map(|&v| !v).collect()).unwrap();
    let mut lhs = a.like();
    erode(&complement, &bc, &mut lhs).unwrap();
    let mut dilated = a.like();
    dilate(&a, &bc, &mut dilated).unwrap();

    for i in 0..a.size() {
        assert_eq!(lhs.at_flat(i), !dilated.at_flat(i), "duality at {}", i);
    }
}

#[test]
fn opening_closing_idempotent_on_booleans() {
    // The erode/dilate pair over clamped windows is an adjunction, so a
    // second opening or closing pass must reproduce the first exactly,
    // boundary cells included
    let mut a: NdImage<bool> = NdImage::new(&[12, 12]);
    for i in 0..a.size() {
        a.set_flat(i, (i * 7 + 3) % 4 == 0);
    }
    let bc = box_element::<bool>(2, 1);

    let opened = opening(&a, &bc).unwrap();
    let reopened = opening(&opened, &bc).unwrap();
    assert_eq!(
        opened.as_slice(),
        reopened.as_slice(),
        "opening is idempotent"
    );

    let closed = closing(&a, &bc).unwrap();
    let reclosed = closing(&closed, &bc).unwrap();
    assert_eq!(
        closed.as_slice(),
        reclosed.as_slice(),
        "closing is idempotent"
    );
}

#[test]
fn composites_compose_the_primitives() {
    let mut a = NdImage::filled(&[9, 9], 10u8);
    a.set(&[4, 4], 200).unwrap();
    a.set(&[6, 2], 1).unwrap();
    let bc = box_element(2, 1);

    let opened = opening(&a, &bc).unwrap();
    let mut eroded = a.like();
    erode(&a, &bc, &mut eroded).unwrap();
    let mut manual = a.like();
    dilate(&eroded, &bc, &mut manual).unwrap();
    assert_eq!(opened.as_slice(), manual.as_slice());

    let grad = gradient(&a, &bc).unwrap();
    let th = top_hat(&a, &bc).unwrap();
    let bh = black_hat(&a, &bc).unwrap();
    assert_eq!(th.get(&[4, 4]).unwrap(), 190);
    assert_eq!(bh.get(&[6, 2]).unwrap(), 9);
    assert!(grad.get(&[0, 0]).unwrap() == 0);
}

#[test]
fn algorithm_trait_end_to_end() {
    let mut a = NdImage::filled(&[6, 6], 50u8);
    a.set(&[1, 1], 1).unwrap();
    a.set(&[4, 4], 2).unwrap();
    let mut markers: NdImage<u8> = NdImage::new(&[6, 6]);
    markers.set(&[1, 1], 1).unwrap();
    markers.set(&[4, 4], 2).unwrap();

    let (labels, lines) = Watershed::default()
        .execute(
            (a, markers),
            WatershedParams {
                element: StructuringElement::Box(1),
                return_lines: false,
            },
        )
        .unwrap();
    assert!(lines.is_none());
    assert!(labels.as_slice().iter().all(|&v| v == 1 || v == 2));
}
