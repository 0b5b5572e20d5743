//! Morphological erosion (minimum filter)
//!
//! Replaces each cell with the minimum value over its structuring element
//! neighborhood. Shrinks bright regions and enlarges dark regions.

use std::marker::PhantomData;

use ndmorph_core::image::advance_position;
use ndmorph_core::{Algorithm, Error, MorphElement, NdImage, Result};

use super::element::{neighbours, StructuringElement};

/// Parameters for morphological erosion
#[derive(Debug, Clone)]
pub struct ErodeParams<T: MorphElement> {
    /// Structuring element shape
    pub element: StructuringElement<T>,
}

impl<T: MorphElement> Default for ErodeParams<T> {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
        }
    }
}

/// Erosion algorithm
#[derive(Debug, Clone, Default)]
pub struct Erode<T: MorphElement>(PhantomData<T>);

impl<T: MorphElement> Algorithm for Erode<T> {
    type Input = NdImage<T>;
    type Output = NdImage<T>;
    type Params = ErodeParams<T>;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Erode"
    }

    fn description(&self) -> &'static str {
        "Morphological erosion (minimum filter over structuring element)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let mask = params.element.to_mask(input.rank())?;
        let mut out = input.like();
        erode(&input, &mask, &mut out)?;
        Ok(out)
    }
}

/// Perform morphological erosion on an image
///
/// Each output cell is the minimum value over the nonzero cells of `bc`
/// viewed at that position. Neighbors falling outside the image are read
/// through nearest-neighbour extension, so the output covers the full image.
/// Boolean images reduce to binary erosion (logical AND over the
/// neighborhood).
///
/// # Arguments
/// * `a` - Input image
/// * `bc` - Structuring element mask, same rank and cell type as `a`
/// * `out` - Pre-allocated output, same shape as `a`
pub fn erode<T: MorphElement>(a: &NdImage<T>, bc: &NdImage<T>, out: &mut NdImage<T>) -> Result<()> {
    validate(a, bc, out)?;

    let offsets = neighbours(bc, true);
    let shape = a.shape().to_vec();
    let mut pos = vec![0usize; a.rank()];

    for i in 0..a.size() {
        let mut value = T::max_value();
        for delta in &offsets {
            let npos = a.clamped(&pos, delta);
            let v = a.at(&npos);
            if v < value {
                value = v;
            }
        }
        out.set_flat(i, value);
        advance_position(&mut pos, &shape);
    }

    Ok(())
}

fn validate<T: MorphElement>(a: &NdImage<T>, bc: &NdImage<T>, out: &NdImage<T>) -> Result<()> {
    if bc.rank() != a.rank() {
        return Err(Error::RankMismatch {
            image: a.rank(),
            element: bc.rank(),
        });
    }
    if !a.same_shape(out) {
        return Err(Error::ShapeMismatch {
            expected: a.shape().to_vec(),
            actual: out.shape().to_vec(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::element::box_element;

    #[test]
    fn test_erode_1d_line() {
        let a = NdImage::from_vec(&[7], vec![5u8, 5, 5, 1, 5, 5, 5]).unwrap();
        let bc = box_element(1, 1);
        let mut out = a.like();
        erode(&a, &bc, &mut out).unwrap();
        assert_eq!(
            out.as_slice(),
            &[5, 5, 1, 1, 1, 5, 5],
            "boundary cells take the nearest-extended minimum"
        );
    }

    #[test]
    fn test_erode_uniform() {
        let a = NdImage::filled(&[7, 7], 5u8);
        let bc = box_element(2, 1);
        let mut out = a.like();
        erode(&a, &bc, &mut out).unwrap();
        assert!(
            out.as_slice().iter().all(|&v| v == 5),
            "uniform erosion should preserve value"
        );
    }

    #[test]
    fn test_erode_picks_minimum() {
        let mut a = NdImage::filled(&[7, 7], 10u8);
        a.set(&[3, 4], 2).unwrap();
        let bc = box_element(2, 1);
        let mut out = a.like();
        erode(&a, &bc, &mut out).unwrap();
        assert_eq!(out.get(&[3, 3]).unwrap(), 2, "erosion picks minimum neighbor");
        assert_eq!(out.get(&[3, 5]).unwrap(), 2);
        assert_eq!(out.get(&[3, 6]).unwrap(), 10, "out of element reach");
    }

    #[test]
    fn test_erode_cross_skips_diagonal() {
        let mut a = NdImage::filled(&[7, 7], 10u8);
        a.set(&[2, 2], 1).unwrap();
        let bc = crate::morphology::element::cross_element(2);
        let mut out = a.like();
        erode(&a, &bc, &mut out).unwrap();
        assert_eq!(
            out.get(&[3, 3]).unwrap(),
            10,
            "cross does not include diagonal"
        );
    }

    #[test]
    fn test_erode_no_underflow() {
        let a = NdImage::filled(&[5], 0u8);
        let bc = NdImage::from_vec(&[3], vec![1u8, 1, 1]).unwrap();
        let mut out = a.like();
        erode(&a, &bc, &mut out).unwrap();
        assert!(out.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_erode_boolean() {
        let a = NdImage::from_vec(&[5], vec![true, true, true, false, true]).unwrap();
        let bc = box_element::<bool>(1, 1);
        let mut out = a.like();
        erode(&a, &bc, &mut out).unwrap();
        assert_eq!(out.as_slice(), &[true, true, false, false, false]);
    }

    #[test]
    fn test_erode_3d() {
        let mut a = NdImage::filled(&[3, 3, 3], 9u8);
        a.set(&[1, 1, 1], 1).unwrap();
        let bc = crate::morphology::element::cross_element(3);
        let mut out = a.like();
        erode(&a, &bc, &mut out).unwrap();
        assert_eq!(out.get(&[1, 1, 0]).unwrap(), 1);
        assert_eq!(out.get(&[0, 0, 0]).unwrap(), 9);
    }

    #[test]
    fn test_erode_shape_mismatch() {
        let a: NdImage<u8> = NdImage::new(&[4, 4]);
        let bc = box_element(2, 1);
        let mut out: NdImage<u8> = NdImage::new(&[4, 5]);
        assert!(erode(&a, &bc, &mut out).is_err());
    }

    #[test]
    fn test_erode_rank_mismatch() {
        let a: NdImage<u8> = NdImage::new(&[4, 4]);
        let bc = box_element(1, 1);
        let mut out = a.like();
        assert!(erode(&a, &bc, &mut out).is_err());
    }

    #[test]
    fn test_erode_algorithm_trait() {
        let a = NdImage::filled(&[5, 5], 7u8);
        let out = Erode::default().execute_default(a).unwrap();
        assert_eq!(out.shape(), &[5, 5]);
        assert!(out.as_slice().iter().all(|&v| v == 7));
    }
}
