//! Output types for rebinning and smoothing runs.
//!
//! ## Purpose
//!
//! This module defines `RebinResult` and `SmoothingResult`, which carry the
//! transformed counts together with the bookkeeping needed to check count
//! conservation.
//!
//! ## Design notes
//!
//! * **Self-describing**: Each result stores the energies its counts refer to.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `energies` and `counts` always have the same length.
//! * `total_out + uncovered_counts` equals `total_in` up to rounding for rebinning.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond simple summaries.
//! * This module does not provide serialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::calibration::BinConvention;

// ============================================================================
// Result Structures
// ============================================================================

/// Output of a rebinning run.
#[derive(Debug, Clone, PartialEq)]
pub struct RebinResult<T> {
    /// Output grid entry of each bin, in the convention of the grid.
    pub energies: Vec<T>,

    /// Rebinned counts, one per output bin.
    pub counts: Vec<T>,

    /// Sum of the input counts.
    pub total_in: T,

    /// Sum of the output counts.
    pub total_out: T,

    /// Input counts lying outside the output range, dropped by the rebinning.
    pub uncovered_counts: T,

    /// Convention the grids were interpreted with.
    pub convention: BinConvention,
}

impl<T: Float> RebinResult<T> {
    /// Check whether the output range covered every input bin.
    pub fn is_fully_covered(&self) -> bool {
        self.uncovered_counts == T::zero()
    }

    /// Fraction of the input counts that was dropped.
    pub fn lost_fraction(&self) -> T {
        if self.total_in == T::zero() {
            T::zero()
        } else {
            self.uncovered_counts / self.total_in
        }
    }
}

/// Output of a smoothing run.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingResult<T> {
    /// Energies the counts are sampled at.
    pub energies: Vec<T>,

    /// Smoothed counts.
    pub counts: Vec<T>,

    /// FWHM of the kernel.
    pub fwhm: T,

    /// Standard deviation of the kernel.
    pub sigma: T,

    /// Sum of the input counts.
    pub total_in: T,

    /// Sum of the output counts.
    pub total_out: T,
}

impl<T: Float> SmoothingResult<T> {
    /// Ratio of output to input totals; below one when tails leave the grid.
    pub fn conservation_ratio(&self) -> T {
        if self.total_in == T::zero() {
            T::one()
        } else {
            self.total_out / self.total_in
        }
    }

    /// Index of the largest smoothed count.
    pub fn peak_index(&self) -> Option<usize> {
        self.counts
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, T)>, (i, &c)| match best {
                Some((_, b)) if b >= c => best,
                _ => Some((i, c)),
            })
            .map(|(i, _)| i)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

fn write_rows<T: Display>(f: &mut Formatter<'_>, energies: &[T], counts: &[T]) -> Result {
    writeln!(f, "{:>12} {:>14}", "Energy", "Counts")?;
    writeln!(f, "{:-<width$}", "", width = 27)?;

    // Show first 10 and last 10 rows if more than 20 bins
    let n = counts.len();
    let rows_to_show: Vec<usize> = if n <= 20 {
        (0..n).collect()
    } else {
        (0..10).chain(n - 10..n).collect()
    };

    let mut prev_idx = 0;
    for (i, &idx) in rows_to_show.iter().enumerate() {
        if i > 0 && idx != prev_idx + 1 {
            writeln!(f, "{:>12}", "...")?;
        }
        prev_idx = idx;
        writeln!(f, "{:>12.3} {:>14.6}", energies[idx], counts[idx])?;
    }

    Ok(())
}

impl<T: Float + Display + Debug> Display for RebinResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Output bins:  {}", self.counts.len())?;
        writeln!(f, "  Convention:   {}", self.convention.name())?;
        writeln!(f, "  Counts in:    {}", self.total_in)?;
        writeln!(f, "  Counts out:   {}", self.total_out)?;
        if !self.is_fully_covered() {
            writeln!(f, "  Uncovered:    {}", self.uncovered_counts)?;
        }
        writeln!(f)?;

        writeln!(f, "Rebinned Data:")?;
        write_rows(f, &self.energies, &self.counts)
    }
}

impl<T: Float + Display + Debug> Display for SmoothingResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Bins:         {}", self.counts.len())?;
        writeln!(f, "  FWHM:         {}", self.fwhm)?;
        writeln!(f, "  Sigma:        {}", self.sigma)?;
        writeln!(f, "  Counts in:    {}", self.total_in)?;
        writeln!(f, "  Counts out:   {}", self.total_out)?;
        writeln!(f)?;

        writeln!(f, "Smoothed Data:")?;
        write_rows(f, &self.energies, &self.counts)
    }
}
