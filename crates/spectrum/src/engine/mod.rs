//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates inputs, dispatches kernel passes and packages their
//! outputs.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for the kernels.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for kernel runs.
pub mod output;
