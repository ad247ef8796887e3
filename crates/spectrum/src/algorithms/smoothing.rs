//! Gaussian resolution smoothing.
//!
//! ## Purpose
//!
//! This module broadens a spectrum with a Gaussian of fixed width to model the
//! energy resolution of a detector. Every source bin spreads its counts over
//! the grid according to a normalized density centred on its energy.
//!
//! ## Design notes
//!
//! * **Scatter pass**: The sequential pass regenerates the kernel for each
//!   source bin and accumulates it into the output, as a dense `O(N^2)` loop.
//! * **Gather form**: `smooth_bin` computes one output bin from all sources in
//!   ascending source order, so the parallel pass sums in the same order.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Edge loss**: Sources near the ends of the grid lose the part of their
//!   kernel that falls outside it, so totals are only approximately conserved.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Non-negative input produces non-negative output.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).
//! * This module does not integrate the density over bins.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(feature = "std")]
use std::vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::gaussian::{FwhmConversion, GaussianKernel, KernelSupport};

/// Standard deviation of a Gaussian with the given FWHM.
#[inline]
pub fn sigma_from_fwhm<T: Float>(fwhm: T, conversion: FwhmConversion) -> T {
    conversion.sigma(fwhm)
}

/// Smoothed counts of output bin `k`.
pub fn smooth_bin<T: Float>(
    k: usize,
    counts_in: &[T],
    energies: &[T],
    sigma: T,
    support: KernelSupport,
    scale: T,
) -> T {
    let e_k = energies[k];
    let mut acc = T::zero();
    for i in support.window(energies, e_k, sigma) {
        let c = counts_in[i];
        if c == T::zero() {
            continue;
        }
        let kernel = GaussianKernel::new(energies[i], sigma);
        acc = acc + c * kernel.density(e_k) * scale;
    }
    acc
}

/// Smooth the whole spectrum sequentially, one source bin at a time.
pub fn smooth_pass<T: Float>(
    counts_in: &[T],
    energies: &[T],
    sigma: T,
    support: KernelSupport,
    scale: T,
    counts_out: &mut [T],
) {
    counts_out.fill(T::zero());
    let mut g = vec![T::zero(); energies.len()];

    for (i, &c) in counts_in.iter().enumerate() {
        if c == T::zero() {
            continue;
        }
        let kernel = GaussianKernel::new(energies[i], sigma);
        let window = support.window(energies, energies[i], sigma);
        kernel.fill_density(&energies[window.clone()], &mut g[window.clone()]);
        for k in window {
            counts_out[k] = counts_out[k] + c * g[k] * scale;
        }
    }
}
