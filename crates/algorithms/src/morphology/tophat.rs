//! Top-hat transforms
//!
//! White top-hat (input minus opening) extracts bright features smaller
//! than the structuring element; black top-hat (closing minus input)
//! extracts small dark features.

use std::marker::PhantomData;

use ndmorph_core::{Algorithm, Error, MorphElement, NdImage, Result};

use super::closing::closing;
use super::element::StructuringElement;
use super::opening::opening;

/// Parameters for the white top-hat
#[derive(Debug, Clone)]
pub struct TopHatParams<T: MorphElement> {
    /// Structuring element shape
    pub element: StructuringElement<T>,
}

impl<T: MorphElement> Default for TopHatParams<T> {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
        }
    }
}

/// White top-hat algorithm
#[derive(Debug, Clone, Default)]
pub struct TopHat<T: MorphElement>(PhantomData<T>);

impl<T: MorphElement> Algorithm for TopHat<T> {
    type Input = NdImage<T>;
    type Output = NdImage<T>;
    type Params = TopHatParams<T>;
    type Error = Error;

    fn name(&self) -> &'static str {
        "TopHat"
    }

    fn description(&self) -> &'static str {
        "White top-hat (input minus opening) for bright feature extraction"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let mask = params.element.to_mask(input.rank())?;
        top_hat(&input, &mask)
    }
}

/// Parameters for the black top-hat
#[derive(Debug, Clone)]
pub struct BlackHatParams<T: MorphElement> {
    /// Structuring element shape
    pub element: StructuringElement<T>,
}

impl<T: MorphElement> Default for BlackHatParams<T> {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
        }
    }
}

/// Black top-hat algorithm
#[derive(Debug, Clone, Default)]
pub struct BlackHat<T: MorphElement>(PhantomData<T>);

impl<T: MorphElement> Algorithm for BlackHat<T> {
    type Input = NdImage<T>;
    type Output = NdImage<T>;
    type Params = BlackHatParams<T>;
    type Error = Error;

    fn name(&self) -> &'static str {
        "BlackHat"
    }

    fn description(&self) -> &'static str {
        "Black top-hat (closing minus input) for dark feature extraction"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let mask = params.element.to_mask(input.rank())?;
        black_hat(&input, &mask)
    }
}

/// White top-hat: input minus its opening (saturating)
pub fn top_hat<T: MorphElement>(a: &NdImage<T>, bc: &NdImage<T>) -> Result<NdImage<T>> {
    let opened = opening(a, bc)?;
    let mut out = a.clone();
    for (v, &o) in out.as_mut_slice().iter_mut().zip(opened.as_slice()) {
        *v = v.sub_saturating(o);
    }
    Ok(out)
}

/// Black top-hat: closing minus the input (saturating)
pub fn black_hat<T: MorphElement>(a: &NdImage<T>, bc: &NdImage<T>) -> Result<NdImage<T>> {
    let closed = closing(a, bc)?;
    let mut out = closed;
    for (v, &orig) in out.as_mut_slice().iter_mut().zip(a.as_slice()) {
        *v = v.sub_saturating(orig);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::element::box_element;

    #[test]
    fn test_top_hat_extracts_bright_spot() {
        let mut a = NdImage::filled(&[9, 9], 10u8);
        a.set(&[4, 4], 200).unwrap();
        let out = top_hat(&a, &box_element(2, 1)).unwrap();
        assert_eq!(out.get(&[4, 4]).unwrap(), 190, "spot height above background");
        assert_eq!(out.get(&[0, 0]).unwrap(), 0);
    }

    #[test]
    fn test_black_hat_extracts_dark_spot() {
        let mut a = NdImage::filled(&[9, 9], 100u8);
        a.set(&[4, 4], 10).unwrap();
        let out = black_hat(&a, &box_element(2, 1)).unwrap();
        assert_eq!(out.get(&[4, 4]).unwrap(), 90, "spot depth below background");
        assert_eq!(out.get(&[0, 0]).unwrap(), 0);
    }

    #[test]
    fn test_top_hat_constant_is_zero() {
        let a = NdImage::filled(&[6, 6], 17u8);
        let out = top_hat(&a, &box_element(2, 1)).unwrap();
        assert!(out.as_slice().iter().all(|&v| v == 0));
        let out = black_hat(&a, &box_element(2, 1)).unwrap();
        assert!(out.as_slice().iter().all(|&v| v == 0));
    }
}
