//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions shared by every kernel:
//! error types and linear energy calibrations. It has zero internal
//! dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Linear calibrations and bin conventions.
pub mod calibration;
