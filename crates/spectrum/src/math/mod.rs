//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks of the kernels:
//! - Interval overlap used as the rebinning weight
//! - The normalized Gaussian density used for resolution smoothing
//! - Compton recoil energies used to place response continua
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Interval overlap arithmetic.
pub mod overlap;

/// Gaussian resolution kernel.
pub mod gaussian;

/// Compton scattering kinematics.
pub mod compton;
