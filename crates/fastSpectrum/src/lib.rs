//! # fastSpectrum: Parallel Rebinning and Resolution Smoothing
//!
//! Parallel, `ndarray`-aware extensions for the `spectrum` crate. The kernels
//! and their semantics are those of `spectrum`; this crate distributes the
//! output bins across CPU cores with `rayon`, accepts `ndarray` arrays as
//! input, and rebins whole response matrices one spectrum at a time.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastSpectrum::prelude::*;
//! use ndarray::Array1;
//!
//! let grid_in = Array1::from_vec((0..100).map(|k| 0.5 * k as f64).collect());
//! let grid_out = Array1::from_vec((0..60).map(|k| -2.0 + 1.0 * k as f64).collect());
//! let counts = Array1::from_elem(100, 3.0);
//!
//! // Parallel by default
//! let rebinner = Rebin::new().build()?;
//! let result = rebinner.rebin(&counts, &grid_in, &grid_out)?;
//!
//! assert!((result.total_out - 300.0).abs() < 1e-9);
//! # Result::<(), SpectrumError>::Ok(())
//! ```
//!
//! ### Resolution Smoothing
//!
//! ```rust
//! use fastSpectrum::prelude::*;
//!
//! let energies: Vec<f64> = (0..200).map(|k| k as f64).collect();
//! let mut counts = vec![0.0; 200];
//! counts[100] = 1000.0;
//!
//! let smoother = GaussSmoothing::new()
//!     .fwhm(8.0)
//!     .kernel_support(Truncated(8.0))
//!     .parallel(true)
//!     .build()?;
//!
//! let result = smoother.smooth(&counts, &energies)?;
//! println!("{}", result);
//! # Result::<(), SpectrumError>::Ok(())
//! ```
//!
//! ### Response Matrices
//!
//! ```rust
//! use fastSpectrum::prelude::*;
//! use ndarray::{Array2, Axis};
//!
//! // Three spectra of 4 bins each, one per row
//! let response = Array2::from_elem((3, 4), 2.0);
//! let grid_in = vec![0.0, 1.0, 2.0, 3.0];
//! let grid_out = vec![0.0, 2.0];
//!
//! let rebinned = rebin_matrix(&response, &grid_in, &grid_out, Axis(1))?;
//! assert_eq!(rebinned.dim(), (3, 2));
//! # Result::<(), SpectrumError>::Ok(())
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![allow(non_snake_case)]

// Layer 5: Engine - parallel passes and matrix driver.
mod engine;

// Layer 6: Adapters - parallel builders and processors.
mod adapters;

// High-level fluent API.
mod api;

// Input data handling.
mod input;

pub use crate::api::{gauss_smoothing, rebin, rebin_matrix};

// Standard fastSpectrum prelude.
pub mod prelude {
    pub use crate::api::{
        calc_overlap, compton_edge, compton_electron_energy, gauss_smoothing, rebin, rebin_matrix,
        BinConvention::{Centre, Edges, LowerEdge},
        FwhmConversion::{Exact, Rounded},
        KernelSupport,
        KernelSupport::{Full, Truncated},
        Normalization::{BinWidth, Density},
        ParallelGaussSmoother, ParallelRebinBuilder as Rebin, ParallelRebinner,
        ParallelSmoothingBuilder as GaussSmoothing, RebinResult, SmoothingResult, SpectrumError,
        SpectrumInput, TruncationPolicy,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
