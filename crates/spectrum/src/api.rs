//! High-level API for spectrum rebinning and smoothing.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points. Each kernel has a
//! fluent builder for its configuration and a processor that validates the
//! inputs, runs the kernel and packages the result. Two free functions,
//! [`rebin`] and [`gauss_smoothing`], run the kernels with default settings.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all optional parameters.
//! * **Validated**: Parameters are validated by `.build()`, data by the processor.
//! * **Reusable**: Processors borrow their inputs and can be applied many times.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Rebin::new()` or `GaussSmoothing::new()`.
//! 2. Chain configuration methods (`.grid_tolerance()`, `.fwhm()`, etc.).
//! 3. Call `.build()` to obtain a processor, then `.rebin(..)` or `.smooth(..)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{
    RebinConfig, RebinPassFn, SmoothPassFn, SmoothingConfig, SpectrumExecutor,
};
use crate::algorithms::smoothing::sigma_from_fwhm;
use crate::engine::validator::Validator;
use crate::primitives::calibration::Calibration;

// Publicly re-exported types
pub use crate::engine::output::{RebinResult, SmoothingResult};
pub use crate::math::compton::{compton_edge, compton_electron_energy};
pub use crate::math::gaussian::{FwhmConversion, KernelSupport, Normalization};
pub use crate::math::overlap::calc_overlap;
pub use crate::primitives::calibration::BinConvention;
pub use crate::primitives::errors::SpectrumError;

/// Default relative tolerance on grid step uniformity.
const DEFAULT_GRID_TOLERANCE: f64 = 1e-6;

// ============================================================================
// Truncation Policy
// ============================================================================

/// What to do when the output grid does not cover the whole input grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
    /// Drop the uncovered counts without notice.
    Silent,

    /// Drop the uncovered counts and emit a warning.
    #[default]
    Warn,

    /// Refuse to rebin.
    Error,
}

// ============================================================================
// Rebin Builder
// ============================================================================

/// Fluent builder for configuring a rebinning processor.
#[derive(Debug, Clone)]
pub struct RebinBuilder<T> {
    /// Grid convention; inferred from the input lengths when unset.
    pub convention: Option<BinConvention>,

    /// Relative tolerance on grid step uniformity.
    pub grid_tolerance: Option<T>,

    /// Handling of counts outside the output range.
    pub truncation_policy: Option<TruncationPolicy>,

    // ======================================
    // DEV
    // ======================================
    /// Custom rebin pass function.
    #[doc(hidden)]
    pub custom_rebin_pass: Option<RebinPassFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for RebinBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RebinBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            convention: None,
            grid_tolerance: None,
            truncation_policy: None,
            custom_rebin_pass: None,
            duplicate_param: None,
        }
    }

    /// Set how grid entries relate to bins.
    pub fn bin_convention(mut self, convention: BinConvention) -> Self {
        if self.convention.is_some() {
            self.duplicate_param = Some("bin_convention");
        }
        self.convention = Some(convention);
        self
    }

    /// Set the relative tolerance on grid step uniformity.
    pub fn grid_tolerance(mut self, tolerance: T) -> Self {
        if self.grid_tolerance.is_some() {
            self.duplicate_param = Some("grid_tolerance");
        }
        self.grid_tolerance = Some(tolerance);
        self
    }

    /// Set the handling of counts outside the output range.
    pub fn truncation_policy(mut self, policy: TruncationPolicy) -> Self {
        if self.truncation_policy.is_some() {
            self.duplicate_param = Some("truncation_policy");
        }
        self.truncation_policy = Some(policy);
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set a custom rebin pass function.
    #[doc(hidden)]
    pub fn custom_rebin_pass(mut self, pass: RebinPassFn<T>) -> Self {
        self.custom_rebin_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the rebinning processor.
    pub fn build(self) -> Result<Rebinner<T>, SpectrumError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let grid_tolerance = match self.grid_tolerance {
            Some(tol) => tol,
            None => T::from(DEFAULT_GRID_TOLERANCE).unwrap_or_else(T::epsilon),
        };
        Validator::validate_tolerance(grid_tolerance)?;

        Ok(Rebinner {
            convention: self.convention,
            grid_tolerance,
            truncation_policy: self.truncation_policy.unwrap_or_default(),
            custom_rebin_pass: self.custom_rebin_pass,
        })
    }
}

// ============================================================================
// Rebinner
// ============================================================================

/// Validated rebinning processor.
#[derive(Debug, Clone)]
pub struct Rebinner<T> {
    convention: Option<BinConvention>,
    grid_tolerance: T,
    truncation_policy: TruncationPolicy,
    custom_rebin_pass: Option<RebinPassFn<T>>,
}

impl<T: Float> Rebinner<T> {
    /// Redistribute `counts_in`, binned on `grid_in`, onto `grid_out`.
    pub fn rebin(
        &self,
        counts_in: &[T],
        grid_in: &[T],
        grid_out: &[T],
    ) -> Result<RebinResult<T>, SpectrumError> {
        Validator::validate_counts(counts_in)?;

        let convention = match self.convention {
            Some(convention) => {
                let expected = convention.grid_len(counts_in.len());
                if grid_in.len() != expected {
                    return Err(SpectrumError::LengthMismatch {
                        counts_len: counts_in.len(),
                        grid_len: grid_in.len(),
                    });
                }
                convention
            }
            None => BinConvention::infer(counts_in.len(), grid_in.len())?,
        };

        Validator::validate_grid(grid_in, self.grid_tolerance, "grid_in")?;
        Validator::validate_grid(grid_out, self.grid_tolerance, "grid_out")?;

        let input = convention.binned_grid(grid_in)?;
        let config = RebinConfig {
            input,
            output: convention.binned_grid(grid_out)?,
            edge_tolerance: self.grid_tolerance * input.calibration.a1.abs(),
            custom_rebin_pass: self.custom_rebin_pass,
        };
        let output = SpectrumExecutor::run_rebin(counts_in, &config);

        if output.uncovered > T::zero() {
            let lost = output.uncovered.to_f64().unwrap_or(f64::NAN);
            match self.truncation_policy {
                TruncationPolicy::Silent => {}
                TruncationPolicy::Warn => {
                    tracing::warn!(
                        lost,
                        lower = config.output.lower().to_f64().unwrap_or(f64::NAN),
                        upper = config.output.upper().to_f64().unwrap_or(f64::NAN),
                        "output grid does not cover the input grid; counts dropped"
                    );
                }
                TruncationPolicy::Error => {
                    return Err(SpectrumError::CountsTruncated { lost });
                }
            }
        }

        let total_in = sum(counts_in);
        let total_out = sum(&output.counts);

        Ok(RebinResult {
            energies: grid_out[..config.output.bins].to_vec(),
            counts: output.counts,
            total_in,
            total_out,
            uncovered_counts: output.uncovered,
            convention,
        })
    }
}

// ============================================================================
// Smoothing Builder
// ============================================================================

/// Fluent builder for configuring a Gaussian smoothing processor.
#[derive(Debug, Clone)]
pub struct SmoothingBuilder<T> {
    /// Full width at half maximum, in the energy units of the grid.
    pub fwhm: Option<T>,

    /// FWHM-to-sigma conversion factor.
    pub fwhm_conversion: Option<FwhmConversion>,

    /// Evaluated part of the kernel.
    pub kernel_support: Option<KernelSupport>,

    /// Scale applied to density samples.
    pub normalization: Option<Normalization>,

    // ======================================
    // DEV
    // ======================================
    /// Custom smooth pass function.
    #[doc(hidden)]
    pub custom_smooth_pass: Option<SmoothPassFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SmoothingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SmoothingBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fwhm: None,
            fwhm_conversion: None,
            kernel_support: None,
            normalization: None,
            custom_smooth_pass: None,
            duplicate_param: None,
        }
    }

    /// Set the full width at half maximum of the resolution kernel.
    pub fn fwhm(mut self, fwhm: T) -> Self {
        if self.fwhm.is_some() {
            self.duplicate_param = Some("fwhm");
        }
        self.fwhm = Some(fwhm);
        self
    }

    /// Set the FWHM-to-sigma conversion.
    pub fn fwhm_conversion(mut self, conversion: FwhmConversion) -> Self {
        if self.fwhm_conversion.is_some() {
            self.duplicate_param = Some("fwhm_conversion");
        }
        self.fwhm_conversion = Some(conversion);
        self
    }

    /// Set how much of the kernel is evaluated.
    pub fn kernel_support(mut self, support: KernelSupport) -> Self {
        if self.kernel_support.is_some() {
            self.duplicate_param = Some("kernel_support");
        }
        self.kernel_support = Some(support);
        self
    }

    /// Set the scale applied to density samples.
    pub fn normalization(mut self, normalization: Normalization) -> Self {
        if self.normalization.is_some() {
            self.duplicate_param = Some("normalization");
        }
        self.normalization = Some(normalization);
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set a custom smooth pass function.
    #[doc(hidden)]
    pub fn custom_smooth_pass(mut self, pass: SmoothPassFn<T>) -> Self {
        self.custom_smooth_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the smoothing processor.
    pub fn build(self) -> Result<GaussSmoother<T>, SpectrumError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let fwhm = self
            .fwhm
            .ok_or(SpectrumError::MissingParameter { parameter: "fwhm" })?;
        Validator::validate_fwhm(fwhm)?;

        let support = self.kernel_support.unwrap_or_default();
        if let KernelSupport::Truncated(n_sigma) = support {
            Validator::validate_cutoff(n_sigma)?;
        }

        let conversion = self.fwhm_conversion.unwrap_or_default();

        Ok(GaussSmoother {
            fwhm,
            sigma: sigma_from_fwhm(fwhm, conversion),
            support,
            normalization: self.normalization.unwrap_or_default(),
            custom_smooth_pass: self.custom_smooth_pass,
        })
    }
}

// ============================================================================
// Gaussian Smoother
// ============================================================================

/// Validated Gaussian smoothing processor.
#[derive(Debug, Clone)]
pub struct GaussSmoother<T> {
    fwhm: T,
    sigma: T,
    support: KernelSupport,
    normalization: Normalization,
    custom_smooth_pass: Option<SmoothPassFn<T>>,
}

impl<T: Float> GaussSmoother<T> {
    /// Standard deviation of the kernel.
    pub fn sigma(&self) -> T {
        self.sigma
    }

    /// Broaden `counts_in`, sampled at bin-centre `energies`.
    pub fn smooth(
        &self,
        counts_in: &[T],
        energies: &[T],
    ) -> Result<SmoothingResult<T>, SpectrumError> {
        Validator::validate_lengths(counts_in, energies)?;
        Validator::validate_counts(counts_in)?;
        Validator::validate_energies(energies, "energies")?;

        if let KernelSupport::Truncated(_) = self.support {
            Validator::validate_increasing(energies, "energies")?;
        }

        let scale = match self.normalization {
            Normalization::Density => T::one(),
            Normalization::BinWidth => {
                Validator::validate_increasing(energies, "energies")?;
                self.normalization
                    .scale(Calibration::from_grid(energies)?.a1)
            }
        };

        let config = SmoothingConfig {
            sigma: self.sigma,
            support: self.support,
            normalization: self.normalization,
            scale,
            custom_smooth_pass: self.custom_smooth_pass,
        };
        let counts = SpectrumExecutor::run_smoothing(counts_in, energies, &config);

        let total_in = sum(counts_in);
        let total_out = sum(&counts);

        Ok(SmoothingResult {
            energies: energies.to_vec(),
            counts,
            fwhm: self.fwhm,
            sigma: self.sigma,
            total_in,
            total_out,
        })
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Rebin `counts_in` from `grid_in` onto `grid_out` with default settings.
///
/// Grids list lower bin edges when they have as many entries as `counts_in`,
/// and every edge when `grid_in` has one more entry.
pub fn rebin<T: Float>(
    counts_in: &[T],
    grid_in: &[T],
    grid_out: &[T],
) -> Result<Vec<T>, SpectrumError> {
    let result = RebinBuilder::new()
        .build()?
        .rebin(counts_in, grid_in, grid_out)?;
    Ok(result.counts)
}

/// Broaden `counts_in` with a Gaussian of the given FWHM, with default settings.
pub fn gauss_smoothing<T: Float>(
    counts_in: &[T],
    energies: &[T],
    fwhm: T,
) -> Result<Vec<T>, SpectrumError> {
    Validator::validate_lengths(counts_in, energies)?;
    let result = SmoothingBuilder::new()
        .fwhm(fwhm)
        .build()?
        .smooth(counts_in, energies)?;
    Ok(result.counts)
}

#[inline]
fn sum<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}
