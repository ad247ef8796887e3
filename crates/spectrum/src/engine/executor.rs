//! Execution engine for the spectrum kernels.
//!
//! ## Purpose
//!
//! This module runs a rebinning or smoothing pass over validated inputs. It
//! allocates the output buffer and dispatches either to the sequential pass
//! from the algorithms layer or to a pass injected by an extension crate.
//!
//! ## Design notes
//!
//! * **Injection**: Extension crates supply plain function pointers
//!   (`RebinPassFn`, `SmoothPassFn`), e.g. a `rayon` parallel pass.
//! * **Stateless**: Every run allocates a fresh output; inputs are never mutated.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Injected passes must fill every output slot.
//! * Grids and parameters are validated before the executor is reached.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).
//! * This module does not decide what to do with dropped counts (handled by the API).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::rebin::{rebin_pass, uncovered_counts};
use crate::algorithms::smoothing::smooth_pass;
use crate::math::gaussian::{KernelSupport, Normalization};
use crate::primitives::calibration::BinnedGrid;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom rebin pass function
#[doc(hidden)]
pub type RebinPassFn<T> = fn(
    &[T],           // counts_in
    &BinnedGrid<T>, // input grid
    &BinnedGrid<T>, // output grid
    &mut [T],       // counts_out
);

/// Signature for custom smooth pass function
#[doc(hidden)]
pub type SmoothPassFn<T> = fn(
    &[T],          // counts_in
    &[T],          // energies
    T,             // sigma
    KernelSupport, // kernel support
    T,             // normalization scale
    &mut [T],      // counts_out
);

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a single rebinning run.
#[derive(Debug, Clone)]
pub struct RebinConfig<T> {
    /// Normalized input grid.
    pub input: BinnedGrid<T>,

    /// Normalized output grid.
    pub output: BinnedGrid<T>,

    /// Slack on the output range edges when measuring uncovered counts.
    pub edge_tolerance: T,

    /// Custom rebin pass function.
    #[doc(hidden)]
    pub custom_rebin_pass: Option<RebinPassFn<T>>,
}

/// Configuration for a single smoothing run.
#[derive(Debug, Clone)]
pub struct SmoothingConfig<T> {
    /// Standard deviation of the kernel.
    pub sigma: T,

    /// Evaluated part of the kernel.
    pub support: KernelSupport,

    /// Normalization the scale was derived from.
    pub normalization: Normalization,

    /// Scale applied to each density sample.
    pub scale: T,

    /// Custom smooth pass function.
    #[doc(hidden)]
    pub custom_smooth_pass: Option<SmoothPassFn<T>>,
}

/// Output from a rebinning run.
#[derive(Debug, Clone)]
pub struct RebinOutput<T> {
    /// Rebinned counts.
    pub counts: Vec<T>,

    /// Counts of the input lying outside the output range.
    pub uncovered: T,
}

// ============================================================================
// Executor
// ============================================================================

/// Dispatches kernel passes.
pub struct SpectrumExecutor;

impl SpectrumExecutor {
    /// Rebin `counts_in` from `config.input` onto `config.output`.
    pub fn run_rebin<T: Float>(counts_in: &[T], config: &RebinConfig<T>) -> RebinOutput<T> {
        tracing::debug!(
            bins_in = config.input.bins,
            bins_out = config.output.bins,
            a0_in = config.input.calibration.a0.to_f64().unwrap_or(f64::NAN),
            a1_in = config.input.calibration.a1.to_f64().unwrap_or(f64::NAN),
            a0_out = config.output.calibration.a0.to_f64().unwrap_or(f64::NAN),
            a1_out = config.output.calibration.a1.to_f64().unwrap_or(f64::NAN),
            parallel = config.custom_rebin_pass.is_some(),
            "rebinning spectrum"
        );

        let mut counts = vec![T::zero(); config.output.bins];
        let pass = config.custom_rebin_pass.unwrap_or(rebin_pass::<T>);
        pass(counts_in, &config.input, &config.output, &mut counts);

        let uncovered = uncovered_counts(
            counts_in,
            &config.input,
            &config.output,
            config.edge_tolerance,
        );

        RebinOutput { counts, uncovered }
    }

    /// Smooth `counts_in` sampled at `energies`.
    pub fn run_smoothing<T: Float>(
        counts_in: &[T],
        energies: &[T],
        config: &SmoothingConfig<T>,
    ) -> Vec<T> {
        tracing::debug!(
            bins = counts_in.len(),
            sigma = config.sigma.to_f64().unwrap_or(f64::NAN),
            support = config.support.name(),
            normalization = config.normalization.name(),
            parallel = config.custom_smooth_pass.is_some(),
            "smoothing spectrum"
        );

        let mut counts = vec![T::zero(); counts_in.len()];
        let pass = config.custom_smooth_pass.unwrap_or(smooth_pass::<T>);
        pass(
            counts_in,
            energies,
            config.sigma,
            config.support,
            config.scale,
            &mut counts,
        );
        counts
    }
}
