//! High-level API for spectrum kernels with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points of
//! `fastSpectrum`. It extends the `spectrum` API with parallel builders,
//! `ndarray` inputs and matrix rebinning.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `spectrum` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution.
//! * **Feature-Gated**: Parallelism is configurable via crate features.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Rebin::new()` or `GaussSmoothing::new()`.
//! 2. Chain configuration methods, optionally `.parallel(false)`.
//! 3. Call `.build()` and run the processor.

// External dependencies
use ndarray::{Array2, ArrayBase, Axis, Data, Ix2};
use num_traits::Float;

// Internal dependencies
use spectrum::internals::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::rebin::{ParallelRebinBuilder, ParallelRebinner};
pub use crate::adapters::smoothing::{ParallelGaussSmoother, ParallelSmoothingBuilder};
pub use crate::input::SpectrumInput;
pub use spectrum::internals::api::{
    calc_overlap, compton_edge, compton_electron_energy, BinConvention, FwhmConversion,
    KernelSupport, Normalization, RebinResult, SmoothingResult, SpectrumError, TruncationPolicy,
};

/// Rebin `counts_in` from `grid_in` onto `grid_out` in parallel, with default settings.
pub fn rebin<T, I1, I2, I3>(
    counts_in: &I1,
    grid_in: &I2,
    grid_out: &I3,
) -> Result<Vec<T>, SpectrumError>
where
    T: Float + Send + Sync,
    I1: SpectrumInput<T> + ?Sized,
    I2: SpectrumInput<T> + ?Sized,
    I3: SpectrumInput<T> + ?Sized,
{
    let result = ParallelRebinBuilder::new()
        .build()?
        .rebin(counts_in, grid_in, grid_out)?;
    Ok(result.counts)
}

/// Broaden `counts_in` with a Gaussian of the given FWHM in parallel, with default settings.
pub fn gauss_smoothing<T, I1, I2>(
    counts_in: &I1,
    energies: &I2,
    fwhm: T,
) -> Result<Vec<T>, SpectrumError>
where
    T: Float + Send + Sync,
    I1: SpectrumInput<T> + ?Sized,
    I2: SpectrumInput<T> + ?Sized,
{
    let counts_in = counts_in.as_spectrum_slice()?;
    let energies = energies.as_spectrum_slice()?;
    Validator::validate_lengths(counts_in, energies)?;

    let result = ParallelSmoothingBuilder::new()
        .fwhm(fwhm)
        .build()?
        .smooth(counts_in, energies)?;
    Ok(result.counts)
}

/// Rebin every lane of `matrix` along `axis` with default settings.
pub fn rebin_matrix<T, S, I1, I2>(
    matrix: &ArrayBase<S, Ix2>,
    grid_in: &I1,
    grid_out: &I2,
    axis: Axis,
) -> Result<Array2<T>, SpectrumError>
where
    T: Float + Send + Sync,
    S: Data<Elem = T>,
    I1: SpectrumInput<T> + ?Sized,
    I2: SpectrumInput<T> + ?Sized,
{
    ParallelRebinBuilder::new()
        .build()?
        .rebin_matrix(matrix, grid_in, grid_out, axis)
}
