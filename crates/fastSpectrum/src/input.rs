//! Input abstractions for spectrum kernels.
//!
//! ## Purpose
//!
//! This module lets the processors accept counts and calibration arrays as
//! slices, vectors or one-dimensional `ndarray` arrays through one trait.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Every implementation hands out a borrowed slice of the
//!   underlying buffer.
//! * **Fail-fast validation**: Non-contiguous `ndarray` views are rejected
//!   before any kernel runs.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the input container.
//!
//! ## Non-goals
//!
//! * This module does not copy strided views into temporary buffers.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from spectrum crate
use spectrum::internals::primitives::errors::SpectrumError;

/// Trait for types that can be used as spectrum input.
pub trait SpectrumInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_spectrum_slice(&self) -> Result<&[T], SpectrumError>;
}

impl<T: Float> SpectrumInput<T> for [T] {
    fn as_spectrum_slice(&self) -> Result<&[T], SpectrumError> {
        Ok(self)
    }
}

impl<T: Float> SpectrumInput<T> for Vec<T> {
    fn as_spectrum_slice(&self) -> Result<&[T], SpectrumError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> SpectrumInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_spectrum_slice(&self) -> Result<&[T], SpectrumError> {
        self.as_slice().ok_or_else(|| {
            SpectrumError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
