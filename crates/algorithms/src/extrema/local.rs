//! Local extrema detection

use std::marker::PhantomData;

use ndmorph_core::image::advance_position;
use ndmorph_core::{Algorithm, Error, MorphElement, NdImage, Result};

use super::ExtremumKind;
use crate::morphology::element::{neighbours, StructuringElement};

/// Parameters for local extrema detection
#[derive(Debug, Clone)]
pub struct LocalExtremaParams<T: MorphElement> {
    /// Structuring element defining the neighborhood
    pub element: StructuringElement<T>,
    /// Which extremum to detect
    pub kind: ExtremumKind,
}

impl<T: MorphElement> Default for LocalExtremaParams<T> {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
            kind: ExtremumKind::default(),
        }
    }
}

/// Local extrema algorithm
#[derive(Debug, Clone, Default)]
pub struct LocalExtrema<T: MorphElement>(PhantomData<T>);

impl<T: MorphElement> Algorithm for LocalExtrema<T> {
    type Input = NdImage<T>;
    type Output = NdImage<bool>;
    type Params = LocalExtremaParams<T>;
    type Error = Error;

    fn name(&self) -> &'static str {
        "LocalExtrema"
    }

    fn description(&self) -> &'static str {
        "Mark cells no worse than every structuring-element neighbor"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let mask = params.element.to_mask(input.rank())?;
        let mut out = input.like();
        local_extrema(&input, &mask, &mut out, params.kind)?;
        Ok(out)
    }
}

/// Mark the local extrema of an image
///
/// A cell is a local minimum iff no neighbor under `bc` holds a strictly
/// smaller value (strictly larger for maxima). Neighbors outside the image
/// are read through nearest extension, so boundary cells compare against
/// themselves there.
///
/// # Arguments
/// * `a` - Input image
/// * `bc` - Structuring element mask, same rank and cell type as `a`
/// * `out` - Pre-allocated boolean output, same shape as `a`
/// * `kind` - Whether to detect minima or maxima
pub fn local_extrema<T: MorphElement>(
    a: &NdImage<T>,
    bc: &NdImage<T>,
    out: &mut NdImage<bool>,
    kind: ExtremumKind,
) -> Result<()> {
    validate(a, bc, out)?;

    let offsets = neighbours(bc, true);
    let shape = a.shape().to_vec();
    let mut pos = vec![0usize; a.rank()];

    out.fill(false);

    for i in 0..a.size() {
        let cur = a.at_flat(i);
        let mut is_extremum = true;
        for delta in &offsets {
            let v = a.at(&a.clamped(&pos, delta));
            let beaten = match kind {
                ExtremumKind::Minimum => v < cur,
                ExtremumKind::Maximum => v > cur,
            };
            if beaten {
                is_extremum = false;
                break;
            }
        }
        out.set_flat(i, is_extremum);
        advance_position(&mut pos, &shape);
    }

    Ok(())
}

/// Mark the local minima of an image (see [`local_extrema`])
pub fn local_minima<T: MorphElement>(
    a: &NdImage<T>,
    bc: &NdImage<T>,
    out: &mut NdImage<bool>,
) -> Result<()> {
    local_extrema(a, bc, out, ExtremumKind::Minimum)
}

/// Mark the local maxima of an image (see [`local_extrema`])
pub fn local_maxima<T: MorphElement>(
    a: &NdImage<T>,
    bc: &NdImage<T>,
    out: &mut NdImage<bool>,
) -> Result<()> {
    local_extrema(a, bc, out, ExtremumKind::Maximum)
}

fn validate<T: MorphElement>(a: &NdImage<T>, bc: &NdImage<T>, out: &NdImage<bool>) -> Result<()> {
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
    use crate::morphology::element::cross_element;

    #[test]
    fn test_single_minimum() {
        let mut a = NdImage::filled(&[5, 5], 9u8);
        a.set(&[2, 2], 1).unwrap();
        let bc = cross_element(2);
        let mut out = a.like();
        local_minima(&a, &bc, &mut out).unwrap();
        assert!(out.get(&[2, 2]).unwrap());
        assert!(!out.get(&[2, 1]).unwrap(), "neighbor of the pit is not a minimum");
        assert!(out.get(&[0, 0]).unwrap(), "flat corner ties with its neighbors");
    }

    #[test]
    fn test_plateau_is_marked() {
        // Every cell of an equal-valued plateau is a local minimum
        let mut a = NdImage::filled(&[4, 4], 7u8);
        a.set(&[1, 1], 3).unwrap();
        a.set(&[1, 2], 3).unwrap();
        let bc = cross_element(2);
        let mut out = a.like();
        local_minima(&a, &bc, &mut out).unwrap();
        assert!(out.get(&[1, 1]).unwrap());
        assert!(out.get(&[1, 2]).unwrap());
        assert!(!out.get(&[1, 3]).unwrap());
    }

    #[test]
    fn test_maxima_mirror_minima() {
        let mut a = NdImage::filled(&[5, 5], 10u8);
        a.set(&[1, 3], 200).unwrap();
        let bc = cross_element(2);
        let mut out = a.like();
        local_maxima(&a, &bc, &mut out).unwrap();
        assert!(out.get(&[1, 3]).unwrap());
        assert!(!out.get(&[1, 2]).unwrap());
    }

    #[test]
    fn test_monotone_ramp_1d() {
        let a = NdImage::from_vec(&[5], vec![1u8, 2, 3, 4, 5]).unwrap();
        let bc = crate::morphology::element::box_element(1, 1);
        let mut out = a.like();
        local_minima(&a, &bc, &mut out).unwrap();
        assert_eq!(
            out.as_slice(),
            &[true, false, false, false, false],
            "only the ramp's low end is a minimum"
        );
        local_maxima(&a, &bc, &mut out).unwrap();
        assert_eq!(out.as_slice(), &[false, false, false, false, true]);
    }

    #[test]
    fn test_pure_function_is_repeatable() {
        let a = NdImage::from_vec(&[3, 3], vec![5u8, 3, 5, 3, 1, 3, 5, 3, 5]).unwrap();
        let bc = cross_element(2);
        let mut out1 = a.like();
        let mut out2 = a.like();
        local_minima(&a, &bc, &mut out1).unwrap();
        local_minima(&a, &bc, &mut out2).unwrap();
        assert_eq!(out1.as_slice(), out2.as_slice());
    }
}
