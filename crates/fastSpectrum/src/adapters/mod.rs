//! Layer 6: Adapters
//!
//! This layer wraps the `spectrum` builders and processors with parallel
//! execution and `ndarray` input support.

// Parallel rebinning adapter
pub mod rebin;

// Parallel Gaussian smoothing adapter
pub mod smoothing;
