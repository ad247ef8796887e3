//! Rebinning of spectrum matrices.
//!
//! ## Purpose
//!
//! Detector response tables store one spectrum per row (or per column), all
//! sharing the same energy calibration. This module rebins every such lane
//! onto a new calibration and reassembles the matrix.
//!
//! ## Design notes
//!
//! * **Delegation**: Each lane goes through a configured `Rebinner`, so the
//!   lane results match single-spectrum rebinning exactly.
//! * **Parallelism**: Lanes are distributed across cores with `rayon` when
//!   enabled; each lane itself runs with the pass configured on the rebinner.
//! * **Layout**: Lanes are copied out of the input view, so strided and
//!   transposed matrices are accepted.
//!
//! ## Invariants
//!
//! * The output keeps the lane axis; only the length along `axis` changes.
//! * Lane `i` of the output is the rebinned lane `i` of the input.
//!
//! ## Non-goals
//!
//! * This module does not support arrays with more than two dimensions.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use ndarray::{Array2, ArrayBase, Axis, Data, Ix2};
use num_traits::Float;

// Export dependencies from spectrum crate
use spectrum::internals::api::Rebinner;
use spectrum::internals::primitives::errors::SpectrumError;

/// Rebin every lane of `matrix` along `axis` from `grid_in` onto `grid_out`.
pub fn rebin_lanes<T, S>(
    rebinner: &Rebinner<T>,
    matrix: &ArrayBase<S, Ix2>,
    grid_in: &[T],
    grid_out: &[T],
    axis: Axis,
    parallel: bool,
) -> Result<Array2<T>, SpectrumError>
where
    T: Float + Send + Sync,
    S: Data<Elem = T>,
{
    if axis.index() > 1 {
        return Err(SpectrumError::InvalidInput(format!(
            "axis {} is out of bounds for a 2-D matrix",
            axis.index()
        )));
    }

    let lanes: Vec<Vec<T>> = matrix.lanes(axis).into_iter().map(|l| l.to_vec()).collect();
    if lanes.is_empty() {
        return Err(SpectrumError::EmptyInput);
    }

    tracing::debug!(
        lanes = lanes.len(),
        lane_len = matrix.len_of(axis),
        axis = axis.index(),
        parallel,
        "rebinning spectrum matrix"
    );

    let rebin_one =
        |lane: &Vec<T>| -> Result<Vec<T>, SpectrumError> {
            Ok(rebinner.rebin(lane, grid_in, grid_out)?.counts)
        };

    let rebinned: Vec<Vec<T>> = if parallel {
        #[cfg(feature = "cpu")]
        {
            lanes.par_iter().map(rebin_one).collect::<Result<_, _>>()?
        }
        #[cfg(not(feature = "cpu"))]
        {
            lanes.iter().map(rebin_one).collect::<Result<_, _>>()?
        }
    } else {
        lanes.iter().map(rebin_one).collect::<Result<_, _>>()?
    };

    let bins_out = rebinned[0].len();
    let stacked = Array2::from_shape_vec((rebinned.len(), bins_out), rebinned.concat())
        .map_err(|e| SpectrumError::InvalidInput(e.to_string()))?;

    // Lanes were stacked as rows; put them back along the requested axis.
    if axis == Axis(0) {
        Ok(stacked.reversed_axes())
    } else {
        Ok(stacked)
    }
}
