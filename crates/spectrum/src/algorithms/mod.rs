//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the two spectrum kernels on validated, normalized
//! inputs:
//! - Overlap-weighted rebinning between linear energy grids
//! - Gaussian resolution smoothing
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Histogram rebinning.
pub mod rebin;

/// Gaussian smoothing.
pub mod smoothing;
