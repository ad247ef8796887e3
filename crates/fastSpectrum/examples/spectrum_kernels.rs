//! fastSpectrum Kernel Examples
//!
//! This example demonstrates features specific to `fastSpectrum`:
//! - Parallel rebinning and smoothing using `rayon`
//! - Sequential fallback
//! - `ndarray` integration
//! - Rebinning a response matrix row by row

use fastSpectrum::prelude::*;
use ndarray::{Array1, Array2, Axis};
use std::time::Instant;

fn main() -> Result<(), SpectrumError> {
    println!("{}", "=".repeat(80));
    println!("fastSpectrum Kernel Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_parallel_rebinning()?;
    example_2_sequential_fallback()?;
    example_3_ndarray_smoothing()?;
    example_4_response_matrix()?;

    Ok(())
}

/// Synthetic gamma spectrum: two photopeaks on an exponential continuum.
fn synthetic_spectrum(energies: &[f64]) -> Vec<f64> {
    energies
        .iter()
        .map(|&e| {
            let continuum = 200.0 * (-e / 400.0).exp();
            let peak_1 = 5000.0 * (-0.5 * ((e - 662.0) / 1.5).powi(2)).exp();
            let peak_2 = 1200.0 * (-0.5 * ((e - 1173.0) / 2.0).powi(2)).exp();
            continuum + peak_1 + peak_2
        })
        .collect()
}

/// Example 1: Parallel Rebinning
/// Compresses a fine 0.5 keV calibration onto 2 keV bins
fn example_1_parallel_rebinning() -> Result<(), SpectrumError> {
    println!("Example 1: Parallel Rebinning");
    println!("{}", "-".repeat(80));

    let grid_in: Vec<f64> = (0..4096).map(|k| 0.5 * k as f64).collect();
    let grid_out: Vec<f64> = (0..1100).map(|k| 2.0 * k as f64).collect();
    let counts = synthetic_spectrum(&grid_in);

    let start = Instant::now();
    let result = Rebin::new().parallel(true).build()?.rebin(&counts, &grid_in, &grid_out)?;
    let duration = start.elapsed();

    println!("Rebinned {} bins onto {} bins in {:?}", counts.len(), result.counts.len(), duration);
    println!("Result summary:\n{}", result);

    println!();
    Ok(())
}

/// Example 2: Sequential Fallback
/// The same run without worker threads; counts are identical
fn example_2_sequential_fallback() -> Result<(), SpectrumError> {
    println!("Example 2: Sequential Fallback");
    println!("{}", "-".repeat(80));

    let grid_in: Vec<f64> = (0..4096).map(|k| 0.5 * k as f64).collect();
    let grid_out: Vec<f64> = (0..1100).map(|k| 2.0 * k as f64).collect();
    let counts = synthetic_spectrum(&grid_in);

    let sequential = Rebin::new().parallel(false).build()?.rebin(&counts, &grid_in, &grid_out)?;
    let parallel = Rebin::new().parallel(true).build()?.rebin(&counts, &grid_in, &grid_out)?;

    println!("Identical counts: {}", sequential.counts == parallel.counts);
    println!("Uncovered counts: {}", sequential.uncovered_counts);

    println!();
    Ok(())
}

/// Example 3: ndarray Smoothing
/// Broadens the synthetic spectrum to a 3 keV detector resolution
fn example_3_ndarray_smoothing() -> Result<(), SpectrumError> {
    println!("Example 3: ndarray Smoothing");
    println!("{}", "-".repeat(80));

    let energies = Array1::from_vec((0..2048).map(|k| k as f64).collect());
    let counts = Array1::from_vec(synthetic_spectrum(energies.as_slice().unwrap_or(&[])));

    let start = Instant::now();
    let result = GaussSmoothing::new()
        .fwhm(3.0)
        .kernel_support(Truncated(8.0))
        .build()?
        .smooth(&counts, &energies)?;
    let duration = start.elapsed();

    println!("Smoothed {} bins in {:?}", counts.len(), duration);
    println!("Sigma: {:.4}", result.sigma);
    println!("Conservation ratio: {:.6}", result.conservation_ratio());

    println!();
    Ok(())
}

/// Example 4: Response Matrix
/// Rebins one spectrum per row onto a coarser calibration
fn example_4_response_matrix() -> Result<(), SpectrumError> {
    println!("Example 4: Response Matrix");
    println!("{}", "-".repeat(80));

    let grid_in: Vec<f64> = (0..512).map(|k| 1.0 * k as f64).collect();
    let grid_out: Vec<f64> = (0..130).map(|k| 4.0 * k as f64).collect();

    // Row r holds the Compton continuum of a line at 100 + 40 r keV
    let response = Array2::from_shape_fn((10, 512), |(r, k)| {
        let edge = 100.0 + 40.0 * r as f64;
        if (k as f64) < edge {
            1.0 + k as f64 / edge
        } else {
            0.0
        }
    });

    let rebinned = rebin_matrix(&response, &grid_in, &grid_out, Axis(1))?;

    println!("Input shape:  {:?}", response.dim());
    println!("Output shape: {:?}", rebinned.dim());
    println!("Row totals preserved: {}", {
        let before = response.sum_axis(Axis(1));
        let after = rebinned.sum_axis(Axis(1));
        before
            .iter()
            .zip(after.iter())
            .all(|(a, b)| (a - b).abs() < 1e-9 * a.abs().max(1.0))
    });

    println!();
    Ok(())
}
