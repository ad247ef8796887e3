//! Gaussian smoothing adapter with parallel execution.
//!
//! ## Purpose
//!
//! This module wraps the `spectrum` smoothing builder so that the parallel
//! pass is injected automatically and `ndarray` inputs are accepted.
//!
//! ## Design notes
//!
//! * **Delegation**: Validation and result packaging stay in the base crate.
//! * **Parallelism**: Adds parallel execution via `rayon` (fastSpectrum extension).
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Parallel and sequential runs agree up to rounding.
//!
//! ## Non-goals
//!
//! * This adapter does not change the smoothing semantics of the base crate.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::smooth_pass_parallel;

// External dependencies
use num_traits::Float;
use std::result::Result;

// Export dependencies from spectrum crate
use spectrum::internals::api::{
    FwhmConversion, GaussSmoother, KernelSupport, Normalization, SmoothingBuilder,
};
use spectrum::internals::engine::output::SmoothingResult;
use spectrum::internals::primitives::errors::SpectrumError;

// Internal dependencies
use crate::input::SpectrumInput;

// ============================================================================
// Extended Smoothing Builder
// ============================================================================

/// Builder for a Gaussian smoothing processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelSmoothingBuilder<T: Float> {
    /// Base builder from the spectrum crate
    pub base: SmoothingBuilder<T>,

    /// Parallel execution mode
    pub parallel: Option<bool>,
}

impl<T: Float> Default for ParallelSmoothingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelSmoothingBuilder<T> {
    /// Create a new smoothing builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from spectrum SmoothingBuilder
    /// * parallel: true (fastSpectrum extension)
    pub fn new() -> Self {
        Self {
            base: SmoothingBuilder::new(),
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

    /// Set the full width at half maximum of the resolution kernel.
    pub fn fwhm(mut self, fwhm: T) -> Self {
        self.base = self.base.fwhm(fwhm);
        self
    }

    /// Set the FWHM-to-sigma conversion.
    pub fn fwhm_conversion(mut self, conversion: FwhmConversion) -> Self {
        self.base = self.base.fwhm_conversion(conversion);
        self
    }

    /// Set how much of the kernel is evaluated.
    pub fn kernel_support(mut self, support: KernelSupport) -> Self {
        self.base = self.base.kernel_support(support);
        self
    }

    /// Set the scale applied to density samples.
    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.base = self.base.normalization(normalization);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the smoothing processor.
    pub fn build(self) -> Result<ParallelGaussSmoother<T>, SpectrumError>
    where
        T: Send + Sync,
    {
        // Without the `cpu` feature every pass is sequential.
        let parallel = self.parallel.unwrap_or(true) && cfg!(feature = "cpu");
        let mut base = self.base;

        #[cfg(feature = "cpu")]
        {
            if parallel {
                base = base.custom_smooth_pass(smooth_pass_parallel);
            } else {
                base.custom_smooth_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            base.custom_smooth_pass = None;
        }

        Ok(ParallelGaussSmoother {
            inner: base.build()?,
            parallel,
        })
    }
}

// ============================================================================
// Extended Gaussian Smoother
// ============================================================================

/// Gaussian smoothing processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelGaussSmoother<T: Float> {
    inner: GaussSmoother<T>,
    parallel: bool,
}

impl<T: Float + Send + Sync> ParallelGaussSmoother<T> {
    /// Whether output bins are computed in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Standard deviation of the kernel.
    pub fn sigma(&self) -> T {
        self.inner.sigma()
    }

    /// Broaden `counts_in`, sampled at bin-centre `energies`.
    pub fn smooth<I1, I2>(
        &self,
        counts_in: &I1,
        energies: &I2,
    ) -> Result<SmoothingResult<T>, SpectrumError>
    where
        I1: SpectrumInput<T> + ?Sized,
        I2: SpectrumInput<T> + ?Sized,
    {
        self.inner
            .smooth(counts_in.as_spectrum_slice()?, energies.as_spectrum_slice()?)
    }
}
