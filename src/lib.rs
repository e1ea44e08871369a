//! Pairwise summation kernels for strided double-precision arrays.
//!
//! `pwsum` provides numerically stable reductions over strided views:
//!
//! - **NaN-aware**: [`nansum`], [`nansum_ndarray`] — sum with NaN skipping
//!   and a count of the values actually summed
//! - **Plain**: [`sum`], [`sum_ndarray`] — NaN-propagating pairwise sum
//! - **Cumulative**: `cusum`, `cusum_ndarray` (feature `cumsum`)
//!
//! # Strided Views
//!
//! All kernels operate on a logical sequence of `n` elements drawn from a
//! backing slice via `(stride, offset)` addressing: the i-th logical element
//! is `x[offset + i * stride]`. Strides are signed, so a view can walk a
//! buffer backwards; a zero stride is the degenerate view that repeats one
//! slot `n` times. Callers own the buffers and must keep every implied index
//! in bounds — the kernels never allocate, never resize, and never write to
//! the input.
//!
//! # Why Pairwise?
//!
//! Sequential summation accumulates worst-case rounding error proportional
//! to `n`; pairwise summation splits the input in half, sums each half, and
//! adds the partials, bounding the error by the depth of the splits instead:
//!
//! | Strategy | Worst-case error bound |
//! |----------|------------------------|
//! | Sequential | O(n·ε) |
//! | Pairwise | O(log₂(n)·ε) |
//! | Compensated (Kahan) | O(ε) |
//!
//! Pure pairwise splitting all the way down to single elements wastes the
//! machine on call overhead, so blocks of up to [`BLOCKSIZE`] elements are
//! summed directly with eight-way unrolling (eight independent accumulators,
//! combined pairwise). The effective leaf size of 16 trades a little of the
//! error bound back for throughput.
//!
//! # Example
//!
//! ```rust
//! use pwsum::{nansum, sum};
//!
//! let x = [1.0, f64::NAN, 3.0, f64::NAN, 5.0];
//!
//! // NaN-aware: out holds [sum, count]
//! let mut out = [0.0, 0.0];
//! nansum(x.len(), &x, 1, &mut out, 1);
//! assert_eq!(out, [9.0, 3.0]);
//!
//! // Plain pairwise sum propagates NaN
//! assert!(sum(x.len(), &x, 1).is_nan());
//! ```
//!
//! # References
//!
//! - Higham, N.J. (1993). "The accuracy of floating point summation".
//!   *SIAM Journal on Scientific Computing*, 14(4).
//! - Higham, N.J. (2002). *Accuracy and Stability of Numerical Algorithms*,
//!   2nd ed., §4.2–4.3.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod nansum;
mod sum;

#[cfg(feature = "cumsum")]
mod cumsum;

// Re-export core operations
pub use nansum::{nansum, nansum_ndarray};
pub use sum::{sum, sum_ndarray};

#[cfg(feature = "cumsum")]
pub use cumsum::{cusum, cusum_ndarray};

/// Maximum number of elements summed directly (unrolled) before the kernels
/// fall back to recursive halving.
///
/// 128 keeps a whole block's working set inside L1 while bounding the
/// sequential error contribution of any one block.
pub const BLOCKSIZE: usize = 128;

/// Advance a buffer index by a signed stride.
///
/// The caller contract guarantees the resulting index is in bounds whenever
/// it is used for an access, so wrapping arithmetic suffices; a violated
/// contract surfaces as a slice-index panic at the access site.
#[inline(always)]
pub(crate) fn advance(index: usize, stride: isize) -> usize {
    index.wrapping_add_signed(stride)
}
