//! Linear energy calibrations and bin conventions.
//!
//! ## Purpose
//!
//! This module describes how a calibration array maps bin indices to energy
//! intervals. A linear grid is fully described by two coefficients: the
//! offset `a0` and the bin width `a1`, so bin `k` spans `[a0 + a1*k, a0 + a1*(k+1))`.
//!
//! ## Design notes
//!
//! * **Derived, not stored**: Coefficients are read from the first two grid
//!   entries and assumed to hold for the whole array.
//! * **Conventions**: A grid may list lower edges, all edges, or bin centres.
//!   Every convention is normalized to the lower-edge form before use.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * A normalized grid always has `a1 > 0` once validated.
//! * `BinnedGrid::bins` is the number of counts the grid describes.
//!
//! ## Non-goals
//!
//! * This module does not validate uniformity (see the validator).
//! * This module does not support non-linear calibrations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SpectrumError;

// ============================================================================
// Calibration
// ============================================================================

/// Linear energy calibration `E(k) = a0 + a1 * k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration<T> {
    /// Energy of the lower edge of bin 0.
    pub a0: T,

    /// Bin width.
    pub a1: T,
}

impl<T: Float> Calibration<T> {
    /// Create a calibration from its coefficients.
    #[inline]
    pub fn from_coefficients(a0: T, a1: T) -> Self {
        Self { a0, a1 }
    }

    /// Derive the calibration from the first two entries of a grid.
    pub fn from_grid(grid: &[T]) -> Result<Self, SpectrumError> {
        if grid.len() < 2 {
            return Err(SpectrumError::TooFewPoints {
                got: grid.len(),
                min: 2,
            });
        }
        Ok(Self {
            a0: grid[0],
            a1: grid[1] - grid[0],
        })
    }

    /// Lower edge of bin `k`.
    #[inline]
    pub fn lower_edge(&self, k: usize) -> T {
        self.a0 + self.a1 * T::from(k).unwrap_or_else(T::zero)
    }

    /// Upper edge of bin `k`.
    #[inline]
    pub fn upper_edge(&self, k: usize) -> T {
        self.lower_edge(k + 1)
    }

    /// Half-open interval `[lower, upper)` covered by bin `k`.
    #[inline]
    pub fn bin_bounds(&self, k: usize) -> (T, T) {
        (self.lower_edge(k), self.upper_edge(k))
    }

    /// Centre of bin `k`.
    #[inline]
    pub fn centre(&self, k: usize) -> T {
        let half = T::from(0.5).unwrap_or_else(T::zero);
        self.a0 + self.a1 * (T::from(k).unwrap_or_else(T::zero) + half)
    }

    /// Fractional bin coordinate of an energy, `(e - a0) / a1`.
    #[inline]
    pub fn bin_position(&self, energy: T) -> T {
        (energy - self.a0) / self.a1
    }

    /// Lower edges of the first `n` bins.
    pub fn energies(&self, n: usize) -> Vec<T> {
        (0..n).map(|k| self.lower_edge(k)).collect()
    }
}

// ============================================================================
// Bin Convention
// ============================================================================

/// How the entries of a calibration array relate to the bins it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinConvention {
    /// One entry per bin, giving its lower edge.
    #[default]
    LowerEdge,

    /// One entry per edge; `N` bins are described by `N + 1` entries.
    Edges,

    /// One entry per bin, giving its centre.
    Centre,
}

impl BinConvention {
    /// Get the name of the convention.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            BinConvention::LowerEdge => "LowerEdge",
            BinConvention::Edges => "Edges",
            BinConvention::Centre => "Centre",
        }
    }

    /// Pick the convention implied by the lengths of a counts array and its grid.
    ///
    /// Equal lengths mean lower edges; a grid one entry longer than the counts
    /// lists every edge.
    pub fn infer(counts_len: usize, grid_len: usize) -> Result<Self, SpectrumError> {
        if grid_len == counts_len {
            Ok(BinConvention::LowerEdge)
        } else if grid_len == counts_len + 1 {
            Ok(BinConvention::Edges)
        } else {
            Err(SpectrumError::LengthMismatch {
                counts_len,
                grid_len,
            })
        }
    }

    /// Number of bins described by a grid of `grid_len` entries.
    #[inline]
    pub fn bins(&self, grid_len: usize) -> usize {
        match self {
            BinConvention::Edges => grid_len.saturating_sub(1),
            BinConvention::LowerEdge | BinConvention::Centre => grid_len,
        }
    }

    /// Number of grid entries needed to describe `bins` bins.
    #[inline]
    pub fn grid_len(&self, bins: usize) -> usize {
        match self {
            BinConvention::Edges => bins + 1,
            BinConvention::LowerEdge | BinConvention::Centre => bins,
        }
    }

    /// Normalize a grid to its lower-edge calibration.
    pub fn binned_grid<T: Float>(&self, grid: &[T]) -> Result<BinnedGrid<T>, SpectrumError> {
        let mut calibration = Calibration::from_grid(grid)?;
        if *self == BinConvention::Centre {
            let half = T::from(0.5).unwrap_or_else(T::zero);
            calibration.a0 = calibration.a0 - calibration.a1 * half;
        }
        Ok(BinnedGrid {
            calibration,
            bins: self.bins(grid.len()),
        })
    }
}

// ============================================================================
// Binned Grid
// ============================================================================

/// A grid normalized to lower-edge form, together with its bin count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinnedGrid<T> {
    /// Lower-edge calibration of the grid.
    pub calibration: Calibration<T>,

    /// Number of bins.
    pub bins: usize,
}

impl<T: Float> BinnedGrid<T> {
    /// Lower edge of the first bin.
    #[inline]
    pub fn lower(&self) -> T {
        self.calibration.a0
    }

    /// Upper edge of the last bin.
    #[inline]
    pub fn upper(&self) -> T {
        self.calibration.lower_edge(self.bins)
    }
}
