//! Input validation for spectrum data and kernel configuration.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before any kernel
//! executes: counts arrays, calibration grids, and scalar parameters such as
//! the FWHM and tolerances.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Linear grids**: A grid is valid when it has at least two entries, is
//!   strictly increasing, and every step matches the first within a relative
//!   tolerance.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or repair input data.
//! * This module does not perform rebinning or smoothing itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SpectrumError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for spectrum inputs and kernel parameters.
///
/// Provides static methods that return `Result<(), SpectrumError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a counts array: non-empty and finite.
    pub fn validate_counts<T: Float>(counts: &[T]) -> Result<(), SpectrumError> {
        if counts.is_empty() {
            return Err(SpectrumError::EmptyInput);
        }

        for (i, &c) in counts.iter().enumerate() {
            if !c.is_finite() {
                return Err(SpectrumError::InvalidNumericValue(format!(
                    "counts[{}]={}",
                    i,
                    c.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that a counts array and its calibration have the same length.
    pub fn validate_lengths<T: Float>(counts: &[T], grid: &[T]) -> Result<(), SpectrumError> {
        if counts.len() != grid.len() {
            return Err(SpectrumError::LengthMismatch {
                counts_len: counts.len(),
                grid_len: grid.len(),
            });
        }
        Ok(())
    }

    /// Validate that every entry of an energy array is finite.
    pub fn validate_energies<T: Float>(energies: &[T], name: &str) -> Result<(), SpectrumError> {
        for (i, &e) in energies.iter().enumerate() {
            if !e.is_finite() {
                return Err(SpectrumError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    e.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate that an energy array is strictly increasing.
    pub fn validate_increasing<T: Float>(energies: &[T], name: &str) -> Result<(), SpectrumError> {
        for (i, pair) in energies.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(SpectrumError::InvalidGrid(format!(
                    "{} is not strictly increasing at index {}",
                    name,
                    i + 1
                )));
            }
        }
        Ok(())
    }

    /// Validate a linear calibration grid.
    ///
    /// # Notes
    ///
    /// * Every step must match the first step within `tolerance * step`.
    /// * A tolerance of zero demands exact uniformity.
    pub fn validate_grid<T: Float>(
        grid: &[T],
        tolerance: T,
        name: &str,
    ) -> Result<(), SpectrumError> {
        // Check 1: Enough points for (a0, a1)
        if grid.len() < 2 {
            return Err(SpectrumError::TooFewPoints {
                got: grid.len(),
                min: 2,
            });
        }

        // Check 2: Finite values
        Self::validate_energies(grid, name)?;

        // Check 3: Strictly increasing
        Self::validate_increasing(grid, name)?;

        // Check 4: Uniform step
        let step = grid[1] - grid[0];
        let allowed = tolerance * step;
        for (i, pair) in grid.windows(2).enumerate().skip(1) {
            let deviation = (pair[1] - pair[0] - step).abs();
            if deviation > allowed {
                return Err(SpectrumError::InvalidGrid(format!(
                    "{} is not linearly spaced: step {} at index {} differs from {}",
                    name,
                    (pair[1] - pair[0]).to_f64().unwrap_or(f64::NAN),
                    i + 1,
                    step.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the full-width-half-maximum of the resolution kernel.
    pub fn validate_fwhm<T: Float>(fwhm: T) -> Result<(), SpectrumError> {
        if !fwhm.is_finite() || fwhm <= T::zero() {
            return Err(SpectrumError::InvalidFwhm(fwhm.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate a relative tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), SpectrumError> {
        if !tol.is_finite() || tol < T::zero() {
            return Err(SpectrumError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a kernel truncation distance in standard deviations.
    pub fn validate_cutoff(n_sigma: f64) -> Result<(), SpectrumError> {
        if !n_sigma.is_finite() || n_sigma <= 0.0 {
            return Err(SpectrumError::InvalidCutoff(n_sigma));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SpectrumError> {
        if let Some(param) = duplicate_param {
            return Err(SpectrumError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
