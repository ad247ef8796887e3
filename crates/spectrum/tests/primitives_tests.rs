#![cfg(feature = "dev")]
//! Tests for calibrations, bin conventions and errors.
//!
//! ## Test Organization
//!
//! 1. **Calibration** - Coefficients, edges and centres
//! 2. **Bin Conventions** - Inference and normalization
//! 3. **Errors** - Display formatting

use approx::assert_relative_eq;

use spectrum::internals::primitives::calibration::{BinConvention, Calibration};
use spectrum::internals::primitives::errors::SpectrumError;

// ============================================================================
// Calibration Tests
// ============================================================================

/// Coefficients come from the first two grid entries.
#[test]
fn test_calibration_from_grid() {
    let cal = Calibration::from_grid(&[100.0, 102.5, 105.0, 107.5]).unwrap();
    assert_eq!(cal.a0, 100.0);
    assert_eq!(cal.a1, 2.5);
}

/// A single entry does not define a bin width.
#[test]
fn test_calibration_too_few_points() {
    let err = Calibration::<f64>::from_grid(&[1.0]).unwrap_err();
    assert_eq!(err, SpectrumError::TooFewPoints { got: 1, min: 2 });

    let err = Calibration::<f64>::from_grid(&[]).unwrap_err();
    assert_eq!(err, SpectrumError::TooFewPoints { got: 0, min: 2 });
}

/// Edges, centres and fractional positions.
#[test]
fn test_calibration_geometry() {
    let cal = Calibration::from_coefficients(10.0, 2.0);

    assert_eq!(cal.lower_edge(3), 16.0);
    assert_eq!(cal.upper_edge(3), 18.0);
    assert_eq!(cal.bin_bounds(0), (10.0, 12.0));
    assert_eq!(cal.centre(1), 13.0);
    assert_relative_eq!(cal.bin_position(15.0), 2.5);
    assert_eq!(cal.energies(4), vec![10.0, 12.0, 14.0, 16.0]);
}

// ============================================================================
// Bin Convention Tests
// ============================================================================

/// The convention follows from the relative lengths.
#[test]
fn test_convention_infer() {
    assert_eq!(BinConvention::infer(5, 5), Ok(BinConvention::LowerEdge));
    assert_eq!(BinConvention::infer(5, 6), Ok(BinConvention::Edges));
    assert_eq!(
        BinConvention::infer(5, 7),
        Err(SpectrumError::LengthMismatch {
            counts_len: 5,
            grid_len: 7
        })
    );
    assert!(BinConvention::infer(5, 4).is_err());
}

/// Bin and grid lengths per convention.
#[test]
fn test_convention_lengths() {
    assert_eq!(BinConvention::Edges.bins(6), 5);
    assert_eq!(BinConvention::Edges.grid_len(5), 6);
    assert_eq!(BinConvention::LowerEdge.bins(6), 6);
    assert_eq!(BinConvention::Centre.grid_len(6), 6);
    assert_eq!(BinConvention::default(), BinConvention::LowerEdge);
    assert_eq!(BinConvention::Centre.name(), "Centre");
}

/// Every convention normalizes to lower edges.
#[test]
fn test_convention_binned_grid() {
    let grid = [1.0, 2.0, 3.0, 4.0];

    let lower = BinConvention::LowerEdge.binned_grid(&grid).unwrap();
    assert_eq!(lower.lower(), 1.0);
    assert_eq!(lower.upper(), 5.0);
    assert_eq!(lower.bins, 4);

    let edges = BinConvention::Edges.binned_grid(&grid).unwrap();
    assert_eq!(edges.lower(), 1.0);
    assert_eq!(edges.upper(), 4.0);
    assert_eq!(edges.bins, 3);

    let centre = BinConvention::Centre.binned_grid(&grid).unwrap();
    assert_eq!(centre.lower(), 0.5);
    assert_eq!(centre.upper(), 4.5);
    assert_eq!(centre.bins, 4);
}

// ============================================================================
// Error Tests
// ============================================================================

/// Errors render readable messages.
#[test]
fn test_error_display() {
    let err = SpectrumError::LengthMismatch {
        counts_len: 3,
        grid_len: 2,
    };
    let text = err.to_string();
    assert!(text.contains('3') && text.contains('2'));

    let text = SpectrumError::DuplicateParameter { parameter: "fwhm" }.to_string();
    assert!(text.contains("fwhm"));

    let text = SpectrumError::MissingParameter { parameter: "fwhm" }.to_string();
    assert!(text.contains("fwhm"));
}

/// Errors work with `?` in `Box<dyn Error>` contexts.
#[test]
fn test_error_is_std_error() {
    fn fails() -> Result<(), Box<dyn std::error::Error>> {
        Err(SpectrumError::EmptyInput)?;
        Ok(())
    }
    assert!(fails().is_err());
}
