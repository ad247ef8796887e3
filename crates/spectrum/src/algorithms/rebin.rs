//! Count-conserving histogram rebinning.
//!
//! ## Purpose
//!
//! This module redistributes the counts of a spectrum from one linear energy
//! binning to another. Each input bin shares its counts among the output bins
//! it overlaps, in proportion to the overlap length.
//!
//! ## Design notes
//!
//! * **Bracketing**: For output bin `i`, only input bins whose index lies in a
//!   bracket widened by one output-bin width on each side are visited. Total
//!   work is proportional to `Nout` times the number of candidates per bin,
//!   not `Nout * Nin`.
//! * **Lower-edge form**: Both grids are normalized to lower-edge calibrations
//!   before this layer is reached.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Overlap weight**: `counts_out[i] += counts_in[j] * overlap / a1_in`.
//! * **Coverage**: Counts of input bins lying outside the output range are
//!   dropped; `uncovered_counts` reports exactly how many. Range edges closer
//!   than the edge tolerance are treated as equal.
//!
//! ## Invariants
//!
//! * If the output range covers the input range, the output sums to the input
//!   total up to rounding.
//! * Candidate ranges never index past the input.
//!
//! ## Non-goals
//!
//! * This module does not validate grids (handled by `validator`).
//! * This module does not support non-linear binnings.

// External dependencies
use core::ops::Range;
use num_traits::Float;

// Internal dependencies
use crate::math::overlap::calc_overlap;
use crate::primitives::calibration::BinnedGrid;

// ============================================================================
// Bracketing
// ============================================================================

/// Input bins that may overlap output bin `i`.
///
/// The bracket spans `[a0_out + a1_out*(i-1), a0_out + a1_out*(i+1)]`, which is
/// wider than the output bin itself; the extra candidates have zero overlap.
pub fn candidate_range<T: Float>(
    i: usize,
    input: &BinnedGrid<T>,
    output: &BinnedGrid<T>,
) -> Range<usize> {
    let n_in = input.bins;
    if n_in == 0 {
        return 0..0;
    }

    let cal_in = &input.calibration;
    let cal_out = &output.calibration;
    let i_f = T::from(i).unwrap_or_else(T::zero);

    let lo = cal_out.a0 + cal_out.a1 * (i_f - T::one());
    let hi = cal_out.a0 + cal_out.a1 * (i_f + T::one());
    let j_min = cal_in.bin_position(lo).floor();
    let j_max = cal_in.bin_position(hi).floor();

    let last = T::from(n_in - 1).unwrap_or_else(T::zero);
    if j_max < T::zero() || j_min > last {
        return 0..0;
    }

    let start = j_min.max(T::zero()).to_usize().unwrap_or(0);
    let end = j_max.min(last).to_usize().unwrap_or(n_in - 1) + 1;
    start..end.max(start)
}

// ============================================================================
// Rebinning
// ============================================================================

/// Rebinned counts of output bin `i`.
pub fn rebin_bin<T: Float>(
    i: usize,
    counts_in: &[T],
    input: &BinnedGrid<T>,
    output: &BinnedGrid<T>,
) -> T {
    let (lo_out, hi_out) = output.calibration.bin_bounds(i);
    let a1_in = input.calibration.a1;

    let mut acc = T::zero();
    for j in candidate_range(i, input, output) {
        let (lo_in, hi_in) = input.calibration.bin_bounds(j);
        let overlap = calc_overlap(lo_out, hi_out, lo_in, hi_in);
        acc = acc + counts_in[j] * overlap / a1_in;
    }
    acc
}

/// Rebin every output bin sequentially.
pub fn rebin_pass<T: Float>(
    counts_in: &[T],
    input: &BinnedGrid<T>,
    output: &BinnedGrid<T>,
    counts_out: &mut [T],
) {
    for (i, slot) in counts_out.iter_mut().enumerate() {
        *slot = rebin_bin(i, counts_in, input, output);
    }
}

/// Counts of the input that fall outside the output range.
///
/// The output range is widened by `edge_tolerance` on each side, so range
/// edges that differ only by rounding count as covering.
pub fn uncovered_counts<T: Float>(
    counts_in: &[T],
    input: &BinnedGrid<T>,
    output: &BinnedGrid<T>,
    edge_tolerance: T,
) -> T {
    let out_lo = output.lower() - edge_tolerance;
    let out_hi = output.upper() + edge_tolerance;
    let a1_in = input.calibration.a1;

    let mut lost = T::zero();
    for (j, &c) in counts_in.iter().enumerate().take(input.bins) {
        let (lo_in, hi_in) = input.calibration.bin_bounds(j);
        let below = calc_overlap(lo_in, hi_in, T::neg_infinity(), out_lo);
        let above = calc_overlap(lo_in, hi_in, out_hi, T::infinity());
        if below > T::zero() || above > T::zero() {
            lost = lost + c * (below + above) / a1_in;
        }
    }
    lost
}
