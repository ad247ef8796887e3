//! Error types for spectrum operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while rebinning or
//! smoothing a spectrum, covering input validation, calibration constraints
//! and builder configuration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Builder misuse is recorded and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, non-finite values.
//! 2. **Calibration validation**: Too few grid points, non-increasing or non-uniform grids.
//! 3. **Parameter validation**: Invalid FWHM, tolerances or kernel cutoffs.
//! 4. **Count loss**: Output grids that do not cover the input, when configured as fatal.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors are reported as `f64` regardless of the working precision.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery; kernels are pure computations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for spectrum operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SpectrumError {
    /// Input arrays are empty.
    EmptyInput,

    /// Input data has an unsupported layout or shape.
    InvalidInput(String),

    /// The counts array and its calibration array disagree in length.
    LengthMismatch {
        /// Number of entries in the counts array.
        counts_len: usize,
        /// Number of entries in the calibration array.
        grid_len: usize,
    },

    /// A calibration array is too short to derive its coefficients.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// The calibration array is not strictly increasing or not linearly spaced.
    InvalidGrid(String),

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// The full-width-half-maximum must be positive and finite.
    InvalidFwhm(f64),

    /// Tolerances must be non-negative and finite.
    InvalidTolerance(f64),

    /// Kernel truncation must be a positive, finite number of standard deviations.
    InvalidCutoff(f64),

    /// The output grid does not cover the input grid and counts would be dropped.
    CountsTruncated {
        /// Counts falling outside the output range.
        lost: f64,
    },

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SpectrumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::LengthMismatch {
                counts_len,
                grid_len,
            } => {
                write!(
                    f,
                    "Length mismatch: counts has {counts_len} bins, calibration has {grid_len} entries"
                )
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidGrid(msg) => write!(f, "Invalid grid: {msg}"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidFwhm(fwhm) => {
                write!(f, "Invalid fwhm: {fwhm} (must be > 0 and finite)")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be >= 0 and finite)")
            }
            Self::InvalidCutoff(cutoff) => {
                write!(f, "Invalid kernel cutoff: {cutoff} sigma (must be > 0 and finite)")
            }
            Self::CountsTruncated { lost } => {
                write!(
                    f,
                    "Output grid does not cover the input grid: {lost} counts would be dropped"
                )
            }
            Self::MissingParameter { parameter } => {
                write!(f, "Missing required parameter '{parameter}'")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SpectrumError {}
