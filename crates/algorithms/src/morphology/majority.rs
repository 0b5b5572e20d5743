//! 2-D boolean majority filter
//!
//! Slides an N x N window over a two-dimensional binary image and sets the
//! window's centre in the output when at least half of the window is set.

use ndmorph_core::{Algorithm, Error, NdImage, Result};

/// Parameters for the majority filter
#[derive(Debug, Clone)]
pub struct MajorityFilterParams {
    /// Window side length; must be odd
    pub window: usize,
}

impl Default for MajorityFilterParams {
    fn default() -> Self {
        Self { window: 3 }
    }
}

/// Majority filter algorithm
#[derive(Debug, Clone, Default)]
pub struct MajorityFilter;

impl Algorithm for MajorityFilter {
    type Input = NdImage<bool>;
    type Output = NdImage<bool>;
    type Params = MajorityFilterParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "MajorityFilter"
    }

    fn description(&self) -> &'static str {
        "Set cells whose N x N window holds a majority of set cells"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let mut out = input.like();
        majority_filter(&input, params.window, &mut out)?;
        Ok(out)
    }
}

/// Apply an N x N majority filter to a 2-D binary image
///
/// For every full window position the set cells are counted; when the count
/// reaches `N*N/2` the window's centre is set in the output. Cells whose
/// window would cross the boundary stay unset, and an image smaller than the
/// window comes out all-unset.
///
/// # Arguments
/// * `a` - Input binary image, rank 2
/// * `window` - Window side length N, odd
/// * `out` - Pre-allocated output, same shape as `a`
pub fn majority_filter(a: &NdImage<bool>, window: usize, out: &mut NdImage<bool>) -> Result<()> {
    if a.rank() != 2 {
        return Err(Error::InvalidParameter {
            name: "image",
            value: format!("rank {}", a.rank()),
            reason: "majority filter is 2-D only".to_string(),
        });
    }
    if window == 0 || window % 2 == 0 {
        return Err(Error::InvalidParameter {
            name: "window",
            value: window.to_string(),
            reason: "window side must be odd".to_string(),
        });
    }
    if !a.same_shape(out) {
        return Err(Error::ShapeMismatch {
            expected: a.shape().to_vec(),
            actual: out.shape().to_vec(),
        });
    }

    out.fill(false);

    let rows = a.dim(0);
    let cols = a.dim(1);
    if rows < window || cols < window {
        return Ok(());
    }

    let threshold = window * window / 2;
    let half = window / 2;
    let input = a.as_slice();

    for y in 0..=(rows - window) {
        for x in 0..=(cols - window) {
            let mut count = 0usize;
            for dy in 0..window {
                let row = &input[(y + dy) * cols + x..(y + dy) * cols + x + window];
                count += row.iter().filter(|&&v| v).count();
            }
            if count >= threshold {
                out.set_at(&[y + half, x + half], true);
            }
        }
    }

    Ok(())
}
