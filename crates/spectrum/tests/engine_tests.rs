#![cfg(feature = "dev")]
//! Tests for the engine layer.
//!
//! These tests verify validation and pass dispatch independently of the
//! high-level API:
//! - Grid, counts and parameter validation
//! - Executor runs with built-in and injected passes
//! - Agreement between the gather and scatter smoothing forms
//!
//! ## Test Organization
//!
//! 1. **Validator** - Inputs and parameters
//! 2. **Executor** - Rebinning and smoothing dispatch

use approx::assert_relative_eq;

use spectrum::internals::algorithms::smoothing::{sigma_from_fwhm, smooth_bin, smooth_pass};
use spectrum::internals::api::SmoothingBuilder;
use spectrum::internals::engine::executor::{
    RebinConfig, SmoothingConfig, SpectrumExecutor,
};
use spectrum::internals::engine::validator::Validator;
use spectrum::internals::math::gaussian::{FwhmConversion, KernelSupport, Normalization};
use spectrum::internals::primitives::calibration::{BinConvention, BinnedGrid};
use spectrum::internals::primitives::errors::SpectrumError;

// ============================================================================
// Validator Tests
// ============================================================================

/// Counts must be non-empty and finite.
#[test]
fn test_validate_counts() {
    assert!(Validator::validate_counts(&[0.0, 1.0, 2.0]).is_ok());
    assert_eq!(
        Validator::validate_counts::<f64>(&[]),
        Err(SpectrumError::EmptyInput)
    );
    assert!(matches!(
        Validator::validate_counts(&[1.0, f64::NAN]),
        Err(SpectrumError::InvalidNumericValue(_))
    ));
}

/// A linear grid passes; gaps, reversals and short grids fail.
#[test]
fn test_validate_grid() {
    let grid: Vec<f64> = (0..10).map(|k| 3.0 + 0.1 * k as f64).collect();
    assert!(Validator::validate_grid(&grid, 1e-6, "grid_in").is_ok());

    let gapped = [0.0, 1.0, 2.0, 3.5, 4.5];
    assert!(matches!(
        Validator::validate_grid(&gapped, 1e-6, "grid_in"),
        Err(SpectrumError::InvalidGrid(_))
    ));

    let reversed = [4.0, 3.0, 2.0];
    assert!(matches!(
        Validator::validate_grid(&reversed, 1e-6, "grid_out"),
        Err(SpectrumError::InvalidGrid(_))
    ));

    assert_eq!(
        Validator::validate_grid(&[1.0], 1e-6, "grid_out"),
        Err(SpectrumError::TooFewPoints { got: 1, min: 2 })
    );
}

/// The tolerance scales with the step.
#[test]
fn test_validate_grid_tolerance() {
    let grid = [0.0, 1.0, 2.001, 3.0];
    assert!(Validator::validate_grid(&grid, 1e-6, "grid").is_err());
    assert!(Validator::validate_grid(&grid, 1e-2, "grid").is_ok());
}

/// The grid name appears in the error message.
#[test]
fn test_validate_grid_names_array() {
    let err = Validator::validate_grid(&[0.0, 1.0, 1.0], 1e-6, "grid_out").unwrap_err();
    assert!(err.to_string().contains("grid_out"));
}

/// Scalar parameter checks.
#[test]
fn test_validate_parameters() {
    assert!(Validator::validate_fwhm(0.5).is_ok());
    assert_eq!(Validator::validate_fwhm(0.0), Err(SpectrumError::InvalidFwhm(0.0)));
    assert!(Validator::validate_fwhm(f64::INFINITY).is_err());

    assert!(Validator::validate_tolerance(0.0).is_ok());
    assert_eq!(
        Validator::validate_tolerance(-1.0),
        Err(SpectrumError::InvalidTolerance(-1.0))
    );

    assert!(Validator::validate_cutoff(4.0).is_ok());
    assert!(Validator::validate_cutoff(f64::NAN).is_err());

    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("bin_convention")),
        Err(SpectrumError::DuplicateParameter {
            parameter: "bin_convention"
        })
    );
}

// ============================================================================
// Executor Tests
// ============================================================================

fn fill_ones(_: &[f64], _: &BinnedGrid<f64>, _: &BinnedGrid<f64>, out: &mut [f64]) {
    out.fill(1.0);
}

fn fill_twos(_: &[f64], _: &[f64], _: f64, _: KernelSupport, _: f64, out: &mut [f64]) {
    out.fill(2.0);
}

/// The built-in pass rebins and reports uncovered counts.
#[test]
fn test_executor_rebin() {
    let input = BinConvention::Edges.binned_grid(&[0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
    let output = BinConvention::Edges.binned_grid(&[1.0, 3.0]).unwrap();
    let config = RebinConfig {
        input,
        output,
        edge_tolerance: 0.0,
        custom_rebin_pass: None,
    };

    let result = SpectrumExecutor::run_rebin(&[1.0, 2.0, 3.0, 4.0], &config);
    assert_eq!(result.counts, vec![5.0]);
    assert_eq!(result.uncovered, 5.0);
}

/// An injected pass replaces the built-in one.
#[test]
fn test_executor_custom_rebin_pass() {
    let grid = BinConvention::LowerEdge.binned_grid(&[0.0, 1.0, 2.0]).unwrap();
    let config = RebinConfig {
        input: grid,
        output: grid,
        edge_tolerance: 0.0,
        custom_rebin_pass: Some(fill_ones),
    };

    let result = SpectrumExecutor::run_rebin(&[7.0, 7.0, 7.0], &config);
    assert_eq!(result.counts, vec![1.0, 1.0, 1.0]);
    assert_eq!(result.uncovered, 0.0);
}

/// An injected smoothing pass replaces the built-in one.
#[test]
fn test_executor_custom_smooth_pass() {
    let config = SmoothingConfig {
        sigma: 1.0,
        support: KernelSupport::Full,
        normalization: Normalization::Density,
        scale: 1.0,
        custom_smooth_pass: Some(fill_twos),
    };

    let counts = SpectrumExecutor::run_smoothing(&[1.0, 0.0], &[0.0, 1.0], &config);
    assert_eq!(counts, vec![2.0, 2.0]);
}

/// Gather and scatter forms agree on every bin.
#[test]
fn test_smooth_bin_matches_pass() {
    let energies: Vec<f64> = (0..80).map(|k| 20.0 + 0.75 * k as f64).collect();
    let counts: Vec<f64> = (0..80).map(|k| ((k * 7) % 5) as f64).collect();
    let sigma = 2.0;

    for support in [KernelSupport::Full, KernelSupport::Truncated(4.0)] {
        let mut scattered = vec![0.0; 80];
        smooth_pass(&counts, &energies, sigma, support, 1.0, &mut scattered);

        for (k, &s) in scattered.iter().enumerate() {
            let gathered = smooth_bin(k, &counts, &energies, sigma, support, 1.0);
            assert_relative_eq!(gathered, s, max_relative = 1e-12, epsilon = 1e-300);
        }
    }
}

/// The built-in smoothing pass runs through the executor.
#[test]
fn test_executor_smoothing() {
    let config = SmoothingConfig {
        sigma: 1.0,
        support: KernelSupport::Full,
        normalization: Normalization::Density,
        scale: 1.0,
        custom_smooth_pass: None,
    };
    let energies: Vec<f64> = (0..21).map(|k| k as f64).collect();
    let mut counts = vec![0.0; 21];
    counts[10] = 1.0;

    let smoothed = SpectrumExecutor::run_smoothing(&counts, &energies, &config);
    assert_relative_eq!(smoothed[10], 0.398_942_280_401_432_7, max_relative = 1e-12);
    assert_eq!(smoothed.len(), 21);
}

/// Rounding differences between range edges are not reported as uncovered.
#[test]
fn test_executor_rebin_edge_tolerance() {
    let grid_in: Vec<f64> = (0..6).map(|k| 0.1 * k as f64).collect();
    let grid_out = [0.0, 0.3];
    let config = RebinConfig {
        input: BinConvention::LowerEdge.binned_grid(&grid_in).unwrap(),
        output: BinConvention::LowerEdge.binned_grid(&grid_out).unwrap(),
        edge_tolerance: 1e-7,
        custom_rebin_pass: None,
    };

    let result = SpectrumExecutor::run_rebin(&[1.0; 6], &config);
    assert_eq!(result.uncovered, 0.0);
    assert_relative_eq!(result.counts.iter().sum::<f64>(), 6.0, max_relative = 1e-12);
}

/// The smoother derives sigma from the FWHM with the configured conversion.
#[test]
fn test_smoother_sigma_from_fwhm() {
    for conversion in [FwhmConversion::Rounded, FwhmConversion::Exact] {
        let smoother = SmoothingBuilder::new()
            .fwhm(4.0)
            .fwhm_conversion(conversion)
            .build()
            .unwrap();
        assert_eq!(smoother.sigma(), sigma_from_fwhm(4.0, conversion));
    }
    assert_relative_eq!(sigma_from_fwhm(2.355, FwhmConversion::Rounded), 1.0, max_relative = 1e-15);
}
