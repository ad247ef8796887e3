//! Layer 5: Engine
//!
//! This layer provides the parallel passes injected into the `spectrum`
//! executor and the lane-by-lane driver for spectrum matrices.

// Parallel rebinning and smoothing passes using CPU threads
pub mod executor;

// Rebinning of every row or column of a 2-D array
pub mod matrix;
