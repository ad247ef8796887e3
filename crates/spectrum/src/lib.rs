//! # spectrum: Rebinning and Resolution Smoothing for Energy Spectra
//!
//! Numerical kernels for spectrum analysis in nuclear physics: count-conserving
//! histogram rebinning between linear energy grids, and Gaussian smoothing that
//! models the energy resolution of a detector.
//!
//! ## What do the kernels do?
//!
//! **Rebinning** redistributes the counts of a spectrum calibrated as
//! `E(k) = a0 + a1*k` onto a different linear calibration. Each input bin
//! shares its counts with the output bins it overlaps, in proportion to the
//! overlap length, so the total number of counts is preserved whenever the
//! output grid covers the input grid.
//!
//! **Gaussian smoothing** spreads every bin over the whole spectrum with a
//! normalized Gaussian of a given full width at half maximum (FWHM).
//!
//! ## Quick Start
//!
//! ### Contract Functions
//!
//! ```rust
//! use spectrum::prelude::*;
//!
//! // One bin of width 10 split into two bins of width 5 (edge grids).
//! let counts = rebin(&[10.0], &[0.0, 10.0], &[0.0, 5.0, 10.0])?;
//! assert_eq!(counts, vec![5.0, 5.0]);
//!
//! let energies: Vec<f64> = (0..50).map(|k| k as f64).collect();
//! let mut spike = vec![0.0; 50];
//! spike[25] = 100.0;
//! let smoothed = gauss_smoothing(&spike, &energies, 4.0)?;
//! assert_eq!(smoothed.len(), 50);
//! # Result::<(), SpectrumError>::Ok(())
//! ```
//!
//! ### Configured Processors
//!
//! ```rust
//! use spectrum::prelude::*;
//!
//! let grid_in: Vec<f64> = (0..8).map(|k| 100.0 + 20.0 * k as f64).collect();
//! let grid_out: Vec<f64> = (0..20).map(|k| 90.0 + 10.0 * k as f64).collect();
//! let counts = vec![4.0, 8.0, 15.0, 16.0, 23.0, 42.0, 8.0, 1.0];
//!
//! let rebinner = Rebin::new()
//!     .bin_convention(LowerEdge)
//!     .truncation_policy(TruncationPolicy::Error)
//!     .build()?;
//!
//! let result = rebinner.rebin(&counts, &grid_in, &grid_out)?;
//! assert!(result.is_fully_covered());
//! println!("{}", result);
//! # Result::<(), SpectrumError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every entry point returns `Result<_, SpectrumError>`. Inputs are validated
//! before any computation: counts and calibration lengths must agree, and
//! rebinning grids must be strictly increasing and linearly spaced.
//!
//! ```rust
//! use spectrum::prelude::*;
//!
//! let err = gauss_smoothing(&[1.0, 2.0, 3.0], &[1.0, 2.0], 1.0).unwrap_err();
//! assert_eq!(err, SpectrumError::LengthMismatch { counts_len: 3, grid_len: 2 });
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! spectrum = { version = "0.3", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors and calibrations.
mod primitives;

// Layer 2: Math - overlap, Gaussian density and Compton kinematics.
mod math;

// Layer 3: Algorithms - rebinning and smoothing passes.
mod algorithms;

// Layer 4: Engine - validation, execution and outputs.
mod engine;

// High-level fluent API.
mod api;

pub use crate::api::{gauss_smoothing, rebin};

// Standard spectrum prelude.
pub mod prelude {
    pub use crate::api::{
        calc_overlap, compton_edge, compton_electron_energy, gauss_smoothing, rebin,
        BinConvention::{Centre, Edges, LowerEdge},
        FwhmConversion::{Exact, Rounded},
        GaussSmoother, KernelSupport,
        KernelSupport::{Full, Truncated},
        Normalization::{BinWidth, Density},
        RebinBuilder as Rebin, RebinResult, Rebinner, SmoothingBuilder as GaussSmoothing,
        SmoothingResult, SpectrumError, TruncationPolicy,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
