//! Tests for the rebinning API.
//!
//! These tests verify count-conserving rebinning through the public API:
//! - Worked upsampling and downsampling examples
//! - Conservation and identity properties
//! - Grid conventions (lower edges, all edges, centres)
//! - Handling of counts outside the output range
//! - Input and builder validation
//!
//! ## Test Organization
//!
//! 1. **Worked Examples** - Small cases with exact answers
//! 2. **Properties** - Conservation and identity
//! 3. **Conventions** - Explicit and inferred grid layouts
//! 4. **Truncation** - Partial output coverage
//! 5. **Validation** - Error reporting

use approx::assert_relative_eq;
use spectrum::prelude::*;

fn linear_grid(a0: f64, a1: f64, n: usize) -> Vec<f64> {
    (0..n).map(|k| a0 + a1 * k as f64).collect()
}

// ============================================================================
// Worked Examples
// ============================================================================

/// One bin of width 10 split into two bins of width 5.
#[test]
fn test_rebin_upsampling_example() {
    let counts = rebin(&[10.0], &[0.0, 10.0], &[0.0, 5.0, 10.0]).unwrap();
    assert_eq!(counts, vec![5.0, 5.0]);
}

/// Two bins of width 5 merged into one bin of width 10.
#[test]
fn test_rebin_downsampling_example() {
    let counts = rebin(&[5.0, 5.0], &[0.0, 5.0, 10.0], &[0.0, 10.0]).unwrap();
    assert_eq!(counts, vec![10.0]);
}

/// Upsampling in single precision.
#[test]
fn test_rebin_f32() {
    let counts = rebin(&[10.0f32], &[0.0, 10.0], &[0.0, 5.0, 10.0]).unwrap();
    assert_eq!(counts, vec![5.0f32, 5.0]);
}

/// Half-bin shift splits each input bin between two output bins.
#[test]
fn test_rebin_half_bin_shift() {
    let grid_in = linear_grid(0.0, 1.0, 4);
    let grid_out = linear_grid(-0.5, 1.0, 5);
    let counts_in = vec![2.0, 4.0, 6.0, 8.0];

    let counts_out = rebin(&counts_in, &grid_in, &grid_out).unwrap();

    let expected = [1.0, 3.0, 5.0, 7.0, 4.0];
    for (got, want) in counts_out.iter().zip(expected.iter()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-12);
    }
}

// ============================================================================
// Properties
// ============================================================================

/// Total counts are conserved when the output grid covers the input grid.
#[test]
fn test_rebin_conserves_counts() {
    let grid_in = linear_grid(3.0, 2.5, 40);
    let grid_out = linear_grid(0.0, 7.3, 16);
    let counts_in: Vec<f64> = (0..40).map(|k| ((k * 13) % 17) as f64 + 0.5).collect();

    let counts_out = rebin(&counts_in, &grid_in, &grid_out).unwrap();

    let total_in: f64 = counts_in.iter().sum();
    let total_out: f64 = counts_out.iter().sum();
    assert_relative_eq!(total_out, total_in, max_relative = 1e-9);
}

/// Conservation also holds when upsampling onto a finer, offset grid.
#[test]
fn test_rebin_conserves_counts_upsampling() {
    let grid_in = linear_grid(10.0, 8.0, 25);
    let grid_out = linear_grid(9.0, 0.7, 300);
    let counts_in: Vec<f64> = (0..25).map(|k| (k as f64 * 0.4).sin().abs() * 100.0).collect();

    let result = Rebin::new()
        .build()
        .unwrap()
        .rebin(&counts_in, &grid_in, &grid_out)
        .unwrap();

    assert!(result.is_fully_covered());
    assert_relative_eq!(result.total_out, result.total_in, max_relative = 1e-9);
}

/// Rebinning onto the same grid returns the input.
#[test]
fn test_rebin_identity() {
    let grid = linear_grid(12.5, 0.75, 30);
    let counts_in: Vec<f64> = (0..30).map(|k| ((k * 7) % 11) as f64).collect();

    let counts_out = rebin(&counts_in, &grid, &grid).unwrap();

    assert_eq!(counts_out.len(), counts_in.len());
    for (got, want) in counts_out.iter().zip(counts_in.iter()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-12);
    }
}

/// Output is non-negative for non-negative input.
#[test]
fn test_rebin_non_negative() {
    let grid_in = linear_grid(0.0, 1.3, 50);
    let grid_out = linear_grid(-5.0, 3.1, 30);
    let counts_in: Vec<f64> = (0..50).map(|k| (k % 5) as f64).collect();

    let counts_out = rebin(&counts_in, &grid_in, &grid_out).unwrap();
    assert!(counts_out.iter().all(|&c| c >= 0.0));
}

// ============================================================================
// Conventions
// ============================================================================

/// Centre grids are shifted by half a bin before rebinning.
#[test]
fn test_rebin_centre_convention() {
    let result = Rebin::new()
        .bin_convention(Centre)
        .build()
        .unwrap()
        .rebin(&[4.0, 6.0], &[5.0, 15.0], &[2.5, 7.5, 12.5, 17.5])
        .unwrap();

    assert_eq!(result.convention, Centre);
    assert_eq!(result.counts, vec![2.0, 2.0, 3.0, 3.0]);
    assert_eq!(result.energies, vec![2.5, 7.5, 12.5, 17.5]);
}

/// Explicit lower-edge convention with an equal-length grid.
#[test]
fn test_rebin_explicit_lower_edge() {
    let result = Rebin::new()
        .bin_convention(LowerEdge)
        .build()
        .unwrap()
        .rebin(&[5.0, 5.0], &[0.0, 5.0], &[0.0, 10.0])
        .unwrap();

    // [0, 10) and [10, 20); the input covers [0, 10) only.
    assert_eq!(result.counts, vec![10.0, 0.0]);
    assert_eq!(result.energies, vec![0.0, 10.0]);
}

/// Edge grids are inferred when the grid has one more entry than the counts.
#[test]
fn test_rebin_infers_edges() {
    let result = Rebin::new()
        .build()
        .unwrap()
        .rebin(&[10.0], &[0.0, 10.0], &[0.0, 5.0, 10.0])
        .unwrap();

    assert_eq!(result.convention, Edges);
    assert_eq!(result.energies, vec![0.0, 5.0]);
}

/// An explicit convention must match the grid length.
#[test]
fn test_rebin_convention_length_mismatch() {
    let err = Rebin::new()
        .bin_convention(Edges)
        .build()
        .unwrap()
        .rebin(&[1.0, 2.0], &[0.0, 1.0], &[0.0, 1.0, 2.0])
        .unwrap_err();

    assert_eq!(
        err,
        SpectrumError::LengthMismatch {
            counts_len: 2,
            grid_len: 2
        }
    );
}

// ============================================================================
// Truncation
// ============================================================================

fn partial_case() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let grid_in = linear_grid(0.0, 1.0, 10);
    let grid_out = vec![0.0, 2.0, 4.0];
    (vec![1.0; 10], grid_in, grid_out)
}

/// Counts beyond the output range are dropped and reported.
#[test]
fn test_rebin_partial_coverage_warn() {
    let (counts_in, grid_in, grid_out) = partial_case();

    let result = Rebin::new()
        .build()
        .unwrap()
        .rebin(&counts_in, &grid_in, &grid_out)
        .unwrap();

    assert_eq!(result.counts, vec![2.0, 2.0, 2.0]);
    assert!(!result.is_fully_covered());
    assert_relative_eq!(result.uncovered_counts, 4.0, epsilon = 1e-12);
    assert_relative_eq!(result.lost_fraction(), 0.4, epsilon = 1e-12);
    assert_relative_eq!(
        result.total_out + result.uncovered_counts,
        result.total_in,
        epsilon = 1e-12
    );
}

/// The silent policy matches the warning policy's output.
#[test]
fn test_rebin_partial_coverage_silent() {
    let (counts_in, grid_in, grid_out) = partial_case();

    let result = Rebin::new()
        .truncation_policy(TruncationPolicy::Silent)
        .build()
        .unwrap()
        .rebin(&counts_in, &grid_in, &grid_out)
        .unwrap();

    assert_eq!(result.counts, vec![2.0, 2.0, 2.0]);
}

/// The error policy refuses to drop counts.
#[test]
fn test_rebin_partial_coverage_error() {
    let (counts_in, grid_in, grid_out) = partial_case();

    let err = Rebin::new()
        .truncation_policy(TruncationPolicy::Error)
        .build()
        .unwrap()
        .rebin(&counts_in, &grid_in, &grid_out)
        .unwrap_err();

    match err {
        SpectrumError::CountsTruncated { lost } => assert_relative_eq!(lost, 4.0, epsilon = 1e-12),
        other => panic!("unexpected error: {other}"),
    }
}

/// Grids whose ranges agree up to rounding count as fully covering.
#[test]
fn test_rebin_rounded_range_is_covered() {
    // The input upper edge 0.1 * 6 exceeds the output upper edge 0.3 * 2 by one ulp.
    let grid_in = linear_grid(0.0, 0.1, 6);
    let grid_out = linear_grid(0.0, 0.3, 2);
    let counts_in = vec![1.0; 6];

    let result = Rebin::new()
        .truncation_policy(TruncationPolicy::Error)
        .build()
        .unwrap()
        .rebin(&counts_in, &grid_in, &grid_out)
        .unwrap();

    assert!(result.is_fully_covered());
    assert_eq!(result.uncovered_counts, 0.0);
    assert_eq!(result.lost_fraction(), 0.0);
    assert_relative_eq!(result.total_out, 6.0, max_relative = 1e-12);
}

/// Output grids entirely outside the input produce zeros.
#[test]
fn test_rebin_disjoint_output() {
    let grid_in = linear_grid(0.0, 1.0, 5);
    let grid_out = linear_grid(100.0, 1.0, 5);

    let result = Rebin::new()
        .truncation_policy(TruncationPolicy::Silent)
        .build()
        .unwrap()
        .rebin(&[1.0, 2.0, 3.0, 4.0, 5.0], &grid_in, &grid_out)
        .unwrap();

    assert!(result.counts.iter().all(|&c| c == 0.0));
    assert_relative_eq!(result.uncovered_counts, 15.0, epsilon = 1e-12);
}

// ============================================================================
// Validation
// ============================================================================

/// Counts and grid lengths must agree.
#[test]
fn test_rebin_length_mismatch() {
    let err = rebin(&[1.0, 2.0, 3.0], &[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 1.0]).unwrap_err();
    assert_eq!(
        err,
        SpectrumError::LengthMismatch {
            counts_len: 3,
            grid_len: 5
        }
    );
}

/// Empty counts are rejected.
#[test]
fn test_rebin_empty_input() {
    let err = rebin::<f64>(&[], &[], &[0.0, 1.0]).unwrap_err();
    assert_eq!(err, SpectrumError::EmptyInput);
}

/// Grids need two entries to define a calibration.
#[test]
fn test_rebin_too_few_grid_points() {
    let err = Rebin::new()
        .bin_convention(LowerEdge)
        .build()
        .unwrap()
        .rebin(&[10.0], &[0.0], &[0.0, 5.0])
        .unwrap_err();

    assert_eq!(err, SpectrumError::TooFewPoints { got: 1, min: 2 });

    let err = rebin(&[1.0, 1.0], &[0.0, 1.0], &[0.0]).unwrap_err();
    assert_eq!(err, SpectrumError::TooFewPoints { got: 1, min: 2 });
}

/// Non-uniform and non-increasing grids are rejected.
#[test]
fn test_rebin_invalid_grids() {
    let counts = [1.0, 1.0, 1.0, 1.0];

    let err = rebin(&counts, &[0.0, 1.0, 2.0, 3.5], &[0.0, 1.0]).unwrap_err();
    assert!(matches!(err, SpectrumError::InvalidGrid(_)));

    let err = rebin(&counts, &[0.0, 1.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err();
    assert!(matches!(err, SpectrumError::InvalidGrid(_)));

    let err = rebin(&counts, &[0.0, 1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap_err();
    assert!(matches!(err, SpectrumError::InvalidGrid(_)));
}

/// A loose tolerance accepts slightly irregular grids.
#[test]
fn test_rebin_grid_tolerance() {
    let counts = [1.0, 1.0, 1.0];
    let grid = [0.0, 1.0, 2.001];

    assert!(rebin(&counts, &grid, &[0.0, 1.5]).is_err());

    let result = Rebin::new()
        .grid_tolerance(1e-2)
        .build()
        .unwrap()
        .rebin(&counts, &grid, &[0.0, 1.5]);
    assert!(result.is_ok());
}

/// Non-finite values are rejected.
#[test]
fn test_rebin_non_finite() {
    let err = rebin(&[1.0, f64::NAN], &[0.0, 1.0], &[0.0, 1.0]).unwrap_err();
    assert!(matches!(err, SpectrumError::InvalidNumericValue(_)));

    let err = rebin(&[1.0, 1.0], &[0.0, f64::INFINITY], &[0.0, 1.0]).unwrap_err();
    assert!(matches!(err, SpectrumError::InvalidNumericValue(_)));
}

/// Builder parameter validation.
#[test]
fn test_rebin_builder_validation() {
    let err = Rebin::<f64>::new()
        .grid_tolerance(1e-3)
        .grid_tolerance(1e-4)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        SpectrumError::DuplicateParameter {
            parameter: "grid_tolerance"
        }
    );

    let err = Rebin::new().grid_tolerance(-1.0).build().unwrap_err();
    assert_eq!(err, SpectrumError::InvalidTolerance(-1.0));
}

/// The result renders a summary and a table.
#[test]
fn test_rebin_result_display() {
    let result = Rebin::new()
        .build()
        .unwrap()
        .rebin(&[1.0, 2.0, 3.0], &[0.0, 1.0, 2.0], &[0.0, 0.5, 1.0, 1.5, 2.0, 2.5])
        .unwrap();

    let text = format!("{}", result);
    assert!(text.contains("Summary:"));
    assert!(text.contains("Rebinned Data:"));
    assert!(text.contains("LowerEdge"));
}
