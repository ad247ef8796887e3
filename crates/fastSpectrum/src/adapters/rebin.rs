//! Rebinning adapter with parallel execution.
//!
//! ## Purpose
//!
//! This module wraps the `spectrum` rebinning builder so that the parallel
//! pass is injected automatically, and extends the processor with `ndarray`
//! inputs and matrix rebinning.
//!
//! ## Design notes
//!
//! * **Delegation**: Validation and result packaging stay in the base crate.
//! * **Parallelism**: Adds parallel execution via `rayon` (fastSpectrum extension).
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Parallel and sequential runs produce identical counts.
//!
//! ## Non-goals
//!
//! * This adapter does not change the rebinning semantics of the base crate.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::rebin_pass_parallel;

// External dependencies
use ndarray::{Array2, ArrayBase, Axis, Data, Ix2};
use num_traits::Float;
use std::result::Result;

// Export dependencies from spectrum crate
use spectrum::internals::api::{BinConvention, RebinBuilder, Rebinner, TruncationPolicy};
use spectrum::internals::engine::output::RebinResult;
use spectrum::internals::primitives::errors::SpectrumError;

// Internal dependencies
use crate::engine::matrix::rebin_lanes;
use crate::input::SpectrumInput;

// ============================================================================
// Extended Rebin Builder
// ============================================================================

/// Builder for a rebinning processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelRebinBuilder<T: Float> {
    /// Base builder from the spectrum crate
    pub base: RebinBuilder<T>,

    /// Parallel execution mode
    pub parallel: Option<bool>,
}

impl<T: Float> Default for ParallelRebinBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelRebinBuilder<T> {
    /// Create a new rebinning builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from spectrum RebinBuilder
    /// * parallel: true (fastSpectrum extension)
    pub fn new() -> Self {
        Self {
            base: RebinBuilder::new(),
            parallel: None,
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.base.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set how grid entries relate to bins.
    pub fn bin_convention(mut self, convention: BinConvention) -> Self {
        self.base = self.base.bin_convention(convention);
        self
    }

    /// Set the relative tolerance on grid step uniformity.
    pub fn grid_tolerance(mut self, tolerance: T) -> Self {
        self.base = self.base.grid_tolerance(tolerance);
        self
    }

    /// Set the handling of counts outside the output range.
    pub fn truncation_policy(mut self, policy: TruncationPolicy) -> Self {
        self.base = self.base.truncation_policy(policy);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the rebinning processor.
    pub fn build(self) -> Result<ParallelRebinner<T>, SpectrumError>
    where
        T: Send + Sync,
    {
        let parallel = self.parallel.unwrap_or(true) && cfg!(feature = "cpu");
        let mut base = self.base;

        #[cfg(feature = "cpu")]
        {
            if parallel {
                base = base.custom_rebin_pass(rebin_pass_parallel);
            } else {
                base.custom_rebin_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            base.custom_rebin_pass = None;
        }

        Ok(ParallelRebinner {
            inner: base.build()?,
            parallel,
        })
    }
}

// ============================================================================
// Extended Rebinner
// ============================================================================

/// Rebinning processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelRebinner<T: Float> {
    inner: Rebinner<T>,
    parallel: bool,
}

impl<T: Float + Send + Sync> ParallelRebinner<T> {
    /// Whether output bins are computed in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Redistribute `counts_in`, binned on `grid_in`, onto `grid_out`.
    pub fn rebin<I1, I2, I3>(
        &self,
        counts_in: &I1,
        grid_in: &I2,
        grid_out: &I3,
    ) -> Result<RebinResult<T>, SpectrumError>
    where
        I1: SpectrumInput<T> + ?Sized,
        I2: SpectrumInput<T> + ?Sized,
        I3: SpectrumInput<T> + ?Sized,
    {
        self.inner.rebin(
            counts_in.as_spectrum_slice()?,
            grid_in.as_spectrum_slice()?,
            grid_out.as_spectrum_slice()?,
        )
    }

    /// Rebin every lane of `matrix` along `axis`.
    ///
    /// With `Axis(1)` each row is one spectrum; with `Axis(0)` each column is.
    pub fn rebin_matrix<S, I1, I2>(
        &self,
        matrix: &ArrayBase<S, Ix2>,
        grid_in: &I1,
        grid_out: &I2,
        axis: Axis,
    ) -> Result<Array2<T>, SpectrumError>
    where
        S: Data<Elem = T>,
        I1: SpectrumInput<T> + ?Sized,
        I2: SpectrumInput<T> + ?Sized,
    {
        rebin_lanes(
            &self.inner,
            matrix,
            grid_in.as_spectrum_slice()?,
            grid_out.as_spectrum_slice()?,
            axis,
            self.parallel,
        )
    }
}
