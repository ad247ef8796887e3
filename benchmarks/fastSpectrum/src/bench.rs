//! Spectrum kernel benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Rebinning scalability (1K to 64K bins)
//! - Rebinning width ratios (upsampling and downsampling)
//! - Smoothing with the full and the truncated kernel
//! - Response matrix rebinning
//!
//! For serial execution, use `FASTSPECTRUM_BACKEND=serial cargo bench`.
//! For parallel execution, use `FASTSPECTRUM_BACKEND=parallel cargo bench`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastSpectrum::prelude::*;
use ndarray::Array2;
use rand::prelude::*;
use rand_distr::{Normal, Poisson};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTSPECTRUM_BACKEND").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

fn linear_grid(a0: f64, a1: f64, n: usize) -> Vec<f64> {
    (0..n).map(|k| a0 + a1 * k as f64).collect()
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a gamma spectrum: exponential continuum plus photopeaks, with
/// Poisson counting noise.
fn generate_gamma_spectrum(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let energies = linear_grid(0.0, 3000.0 / size as f64, size);

    let peak_pos = Normal::new(0.5, 0.25).unwrap();
    let peaks: Vec<f64> = (0..6)
        .map(|_| 3000.0 * peak_pos.sample(&mut rng).clamp(0.05, 0.95))
        .collect();

    let counts = energies
        .iter()
        .map(|&e| {
            let continuum = 500.0 * (-e / 600.0).exp();
            let lines: f64 = peaks
                .iter()
                .map(|&p| 2000.0 * (-0.5 * ((e - p) / 2.0).powi(2)).exp())
                .sum();
            let mean = continuum + lines + 1.0;
            Poisson::new(mean).unwrap().sample(&mut rng)
        })
        .collect();

    (energies, counts)
}

/// Generate a response matrix: one Compton continuum per row.
fn generate_response_matrix(rows: usize, bins: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.05).unwrap();

    Array2::from_shape_fn((rows, bins), |(r, k)| {
        let edge = bins as f64 * (r + 1) as f64 / (rows + 1) as f64;
        let base = if (k as f64) < edge {
            1.0 + (k as f64 / edge).powi(2)
        } else {
            0.0
        };
        (base + noise.sample(&mut rng)).max(0.0)
    })
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_rebin_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("rebin_scalability_{}", mode_name));
    group.sample_size(50);

    for size in [1_024, 8_192, 65_536] {
        group.throughput(Throughput::Elements(size as u64));

        let (grid_in, counts) = generate_gamma_spectrum(size, 42);
        let grid_out = linear_grid(-5.0, 3010.0 / (size / 2) as f64, size / 2);

        group.bench_with_input(BenchmarkId::new("rebin", size), &size, |b, _| {
            b.iter(|| {
                Rebin::new()
                    .parallel(use_parallel)
                    .truncation_policy(TruncationPolicy::Silent)
                    .build()
                    .unwrap()
                    .rebin(black_box(&counts), black_box(&grid_in), black_box(&grid_out))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_rebin_width_ratio(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("rebin_width_ratio_{}", mode_name));
    group.sample_size(50);

    let size = 16_384;
    let (grid_in, counts) = generate_gamma_spectrum(size, 7);
    let a1_in = grid_in[1] - grid_in[0];

    for ratio in [0.25, 1.0, 4.0, 32.0] {
        let bins_out = (size as f64 / ratio).ceil() as usize + 1;
        let grid_out = linear_grid(0.0, a1_in * ratio, bins_out);

        group.bench_with_input(BenchmarkId::new("ratio", ratio), &ratio, |b, _| {
            b.iter(|| {
                Rebin::new()
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .rebin(black_box(&counts), black_box(&grid_in), black_box(&grid_out))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_smoothing(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("smoothing_{}", mode_name));
    group.sample_size(20);

    for size in [1_024, 4_096] {
        group.throughput(Throughput::Elements(size as u64));
        let (energies, counts) = generate_gamma_spectrum(size, 42);

        group.bench_with_input(BenchmarkId::new("full", size), &size, |b, _| {
            b.iter(|| {
                GaussSmoothing::new()
                    .fwhm(6.0)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .smooth(black_box(&counts), black_box(&energies))
                    .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("truncated", size), &size, |b, _| {
            b.iter(|| {
                GaussSmoothing::new()
                    .fwhm(6.0)
                    .kernel_support(Truncated(8.0))
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .smooth(black_box(&counts), black_box(&energies))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_sequential_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_baseline");
    group.sample_size(20);

    let size = 4_096;
    let (grid_in, counts) = generate_gamma_spectrum(size, 42);
    let grid_out = linear_grid(-5.0, 3010.0 / 1_000.0, 1_000);

    group.bench_function("spectrum_rebin", |b| {
        b.iter(|| {
            spectrum::rebin(black_box(&counts), black_box(&grid_in), black_box(&grid_out))
                .unwrap()
        })
    });

    group.bench_function("spectrum_gauss_smoothing", |b| {
        b.iter(|| {
            spectrum::gauss_smoothing(black_box(&counts), black_box(&grid_in), black_box(6.0))
                .unwrap()
        })
    });

    group.finish();
}

fn bench_response_matrix(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("response_matrix_{}", mode_name));
    group.sample_size(20);

    let bins = 2_048;
    let grid_in = linear_grid(0.0, 1.0, bins);
    let grid_out = linear_grid(0.0, 4.0, bins / 4);

    for rows in [16, 128] {
        let response = generate_response_matrix(rows, bins, 42);
        group.throughput(Throughput::Elements((rows * bins) as u64));

        group.bench_with_input(BenchmarkId::new("rows", rows), &rows, |b, _| {
            b.iter(|| {
                Rebin::new()
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .rebin_matrix(
                        black_box(&response),
                        black_box(&grid_in),
                        black_box(&grid_out),
                        ndarray::Axis(1),
                    )
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_rebin_scalability,
    bench_rebin_width_ratio,
    bench_smoothing,
    bench_sequential_baseline,
    bench_response_matrix,
);

criterion_main!(benches);
