//! Interval overlap arithmetic.
//!
//! ## Purpose
//!
//! This module computes the length of the intersection of two half-open
//! energy intervals. The overlap of an input bin with an output bin is the
//! weight used to redistribute counts during rebinning.
//!
//! ## Invariants
//!
//! * The overlap is never negative; disjoint intervals yield exactly zero.
//! * The overlap is symmetric in its two intervals.

// External dependencies
use num_traits::Float;

/// Length of the intersection of `[lo_a, hi_a)` and `[lo_b, hi_b)`.
#[inline]
pub fn calc_overlap<T: Float>(lo_a: T, hi_a: T, lo_b: T, hi_b: T) -> T {
    let overlap = hi_a.min(hi_b) - lo_a.max(lo_b);
    if overlap > T::zero() {
        overlap
    } else {
        T::zero()
    }
}
