//! Gaussian resolution kernel.
//!
//! ## Purpose
//!
//! This module provides the normalized Gaussian density used to broaden a
//! spectrum by a detector's energy resolution, together with the options that
//! control how the density is derived from a FWHM and how much of it is evaluated.
//!
//! ## Design notes
//!
//! * **Pointwise**: The density is sampled at each energy, not integrated per bin.
//! * **FWHM conversion**: The rounded factor 2.355 is the default; the exact
//!   factor `2*sqrt(2 ln 2)` is available.
//! * **Support**: The full kernel touches every bin. A truncated kernel skips
//!   bins more than a chosen number of standard deviations from the centroid.
//!
//! ## Key concepts
//!
//! * **FWHM**: Full width at half maximum, `sigma * 2*sqrt(2 ln 2)`.
//! * **Density vs. bin width normalization**: The density integrates to one
//!   over energy; multiplying by the bin width makes it sum to one over bins.
//!
//! ## Invariants
//!
//! * Densities are non-negative and symmetric about the centroid.
//! * A truncated window always contains the bins closest to the centroid.
//!
//! ## Non-goals
//!
//! * This module does not validate `sigma` (see the validator).

// External dependencies
use core::ops::Range;
use num_traits::Float;

// ============================================================================
// Mathematical Constants
// ============================================================================

/// 1 / sqrt(2*pi), the Gaussian normalization constant.
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Rounded FWHM-to-sigma factor.
pub const FWHM_PER_SIGMA_ROUNDED: f64 = 2.355;

/// Exact FWHM-to-sigma factor, 2*sqrt(2 ln 2).
pub const FWHM_PER_SIGMA_EXACT: f64 = 2.354_820_045_030_949_3;

// ============================================================================
// FWHM Conversion
// ============================================================================

/// Factor used to convert a FWHM into a standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FwhmConversion {
    /// `sigma = fwhm / 2.355`.
    #[default]
    Rounded,

    /// `sigma = fwhm / (2 * sqrt(2 ln 2))`.
    Exact,
}

impl FwhmConversion {
    /// Get the name of the conversion.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            FwhmConversion::Rounded => "Rounded",
            FwhmConversion::Exact => "Exact",
        }
    }

    /// FWHM per unit of standard deviation.
    #[inline]
    pub const fn factor(&self) -> f64 {
        match self {
            FwhmConversion::Rounded => FWHM_PER_SIGMA_ROUNDED,
            FwhmConversion::Exact => FWHM_PER_SIGMA_EXACT,
        }
    }

    /// Convert a FWHM into a standard deviation.
    #[inline]
    pub fn sigma<T: Float>(&self, fwhm: T) -> T {
        fwhm / T::from(self.factor()).unwrap_or_else(T::one)
    }
}

// ============================================================================
// Kernel Support
// ============================================================================

/// How much of the Gaussian is evaluated for each source bin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum KernelSupport {
    /// Evaluate the density at every energy.
    #[default]
    Full,

    /// Evaluate only energies within this many standard deviations of the centroid.
    Truncated(f64),
}

impl KernelSupport {
    /// Get the name of the support mode.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            KernelSupport::Full => "Full",
            KernelSupport::Truncated(_) => "Truncated",
        }
    }

    /// Indices of `energies` at which the kernel centred at `centroid` is evaluated.
    ///
    /// The truncated window assumes `energies` is increasing.
    pub fn window<T: Float>(&self, energies: &[T], centroid: T, sigma: T) -> Range<usize> {
        match self {
            KernelSupport::Full => 0..energies.len(),
            KernelSupport::Truncated(n_sigma) => {
                let half_width = sigma * T::from(*n_sigma).unwrap_or_else(T::infinity);
                let lower = centroid - half_width;
                let upper = centroid + half_width;
                let start = energies.partition_point(|&e| e < lower);
                let end = energies.partition_point(|&e| e <= upper);
                start..end.max(start)
            }
        }
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Scale applied to the sampled density before accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Accumulate the raw density, `counts_out += c_i * g`.
    #[default]
    Density,

    /// Multiply by the bin width, so the kernel sums to one over bins.
    BinWidth,
}

impl Normalization {
    /// Get the name of the normalization.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Normalization::Density => "Density",
            Normalization::BinWidth => "BinWidth",
        }
    }

    /// Scale factor for a grid with the given bin width.
    #[inline]
    pub fn scale<T: Float>(&self, bin_width: T) -> T {
        match self {
            Normalization::Density => T::one(),
            Normalization::BinWidth => bin_width,
        }
    }
}

// ============================================================================
// Gaussian Kernel
// ============================================================================

/// Normalized Gaussian density with a given centroid and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel<T> {
    /// Mean of the distribution.
    pub centroid: T,

    /// Standard deviation.
    pub sigma: T,
}

impl<T: Float> GaussianKernel<T> {
    /// Create a kernel from its centroid and standard deviation.
    #[inline]
    pub fn new(centroid: T, sigma: T) -> Self {
        Self { centroid, sigma }
    }

    /// Create a kernel from a FWHM.
    #[inline]
    pub fn with_fwhm(centroid: T, fwhm: T, conversion: FwhmConversion) -> Self {
        Self::new(centroid, conversion.sigma(fwhm))
    }

    /// Peak value, `1 / (sigma * sqrt(2*pi))`.
    #[inline]
    pub fn amplitude(&self) -> T {
        T::from(FRAC_1_SQRT_2PI).unwrap_or_else(T::zero) / self.sigma
    }

    /// Density at `energy`.
    #[inline]
    pub fn density(&self, energy: T) -> T {
        let two = T::one() + T::one();
        let d = energy - self.centroid;
        self.amplitude() * (-(d * d) / (two * self.sigma * self.sigma)).exp()
    }

    /// Sample the density at every energy into `out`.
    pub fn fill_density(&self, energies: &[T], out: &mut [T]) {
        for (slot, &e) in out.iter_mut().zip(energies.iter()) {
            *slot = self.density(e);
        }
    }
}
