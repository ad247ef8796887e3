//! Parallel execution engine for the spectrum kernels.
//!
//! ## Purpose
//!
//! This module provides the parallel rebinning and smoothing passes that are
//! injected into the `spectrum` crate's executor. Each output bin is an
//! independent reduction, so both kernels spread their output slots across
//! CPU cores with `rayon`.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacements for the sequential passes,
//!   matching the `RebinPassFn` and `SmoothPassFn` signatures.
//! * **Gather form**: Every output slot is written by exactly one task, which
//!   sums its sources in ascending order. No locks or atomics are needed.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Determinism**: Rebinning reuses the sequential per-bin routine and is
//!   bit-identical to the sequential pass. Smoothing sums in the same order as
//!   the sequential scatter pass.
//!
//! ## Invariants
//!
//! * All output slots are overwritten.
//! * Grids and energies are validated before a pass is reached.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not decide between sequential and parallel execution.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Export dependencies from spectrum crate
use spectrum::internals::algorithms::rebin::rebin_bin;
use spectrum::internals::algorithms::smoothing::smooth_bin;
use spectrum::internals::math::gaussian::KernelSupport;
use spectrum::internals::primitives::calibration::BinnedGrid;

// ============================================================================
// Parallel Rebinning
// ============================================================================

/// Rebin every output bin in parallel.
#[cfg(feature = "cpu")]
pub fn rebin_pass_parallel<T>(
    counts_in: &[T],
    input: &BinnedGrid<T>,
    output: &BinnedGrid<T>,
    counts_out: &mut [T],
) where
    T: Float + Send + Sync,
{
    counts_out
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, slot)| {
            *slot = rebin_bin(i, counts_in, input, output);
        });
}

// ============================================================================
// Parallel Smoothing
// ============================================================================

/// Smooth every output bin in parallel.
#[cfg(feature = "cpu")]
pub fn smooth_pass_parallel<T>(
    counts_in: &[T],
    energies: &[T],
    sigma: T,
    support: KernelSupport,
    scale: T,
    counts_out: &mut [T],
) where
    T: Float + Send + Sync,
{
    counts_out
        .par_iter_mut()
        .enumerate()
        .for_each(|(k, slot)| {
            *slot = smooth_bin(k, counts_in, energies, sigma, support, scale);
        });
}
