//! Plain (NaN-propagating) pairwise summation.
//!
//! The same blocking strategy as the NaN-aware kernel — direct accumulation
//! with eight-way unrolling up to [`BLOCKSIZE`](crate::BLOCKSIZE) elements,
//! recursive halving above — without the per-element NaN guard. NaN and
//! infinity flow through ordinary IEEE-754 addition, so a single NaN input
//! poisons the result, as in a naive sum.
//!
//! On NaN-free input the sum produced here is bit-identical to the sum slot
//! of [`nansum`](crate::nansum): both kernels read the elements in the same
//! order, use the same lane assignment, and combine partials with the same
//! tree of additions.

use crate::{advance, BLOCKSIZE};

/// Pairwise sum of a strided view with an explicit starting offset.
///
/// The i-th logical element is `x[offset_x + i * stride_x]`. Returns `0.0`
/// when `n == 0`. A zero `stride_x` yields `n * x[offset_x]`, the sum of
/// the one-slot view repeated `n` times.
///
/// # Panics
///
/// Panics if any implied index is out of bounds.
///
/// # Example
///
/// ```rust
/// use pwsum::sum_ndarray;
///
/// let x = [9.0, 1.0, 2.0, 3.0];
/// assert_eq!(sum_ndarray(3, &x, 1, 1), 6.0);
/// ```
#[must_use]
pub fn sum_ndarray(n: usize, x: &[f64], stride_x: isize, offset_x: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let mut ix = offset_x;

    if stride_x == 0 {
        return x[ix] * n as f64;
    }
    if n == 1 {
        return x[ix];
    }
    if n < 8 {
        let mut s = 0.0;
        for _ in 0..n {
            s += x[ix];
            ix = advance(ix, stride_x);
        }
        return s;
    }
    if n <= BLOCKSIZE {
        let m = n - (n % 8);
        let mut s0 = 0.0;
        let mut s1 = 0.0;
        let mut s2 = 0.0;
        let mut s3 = 0.0;
        let mut s4 = 0.0;
        let mut s5 = 0.0;
        let mut s6 = 0.0;
        let mut s7 = 0.0;

        let mut i = 0;
        while i < m {
            s0 += x[ix];
            s1 += x[advance(ix, stride_x)];
            s2 += x[advance(ix, 2 * stride_x)];
            s3 += x[advance(ix, 3 * stride_x)];
            s4 += x[advance(ix, 4 * stride_x)];
            s5 += x[advance(ix, 5 * stride_x)];
            s6 += x[advance(ix, 6 * stride_x)];
            s7 += x[advance(ix, 7 * stride_x)];
            ix = advance(ix, 8 * stride_x);
            i += 8;
        }
        let mut s = ((s0 + s1) + (s2 + s3)) + ((s4 + s5) + (s6 + s7));

        while i < n {
            s += x[ix];
            ix = advance(ix, stride_x);
            i += 1;
        }
        return s;
    }

    // Split rounded down to a multiple of 8 so the left half runs full
    // unrolled blocks.
    let mut half = n / 2;
    half -= half % 8;
    let left = sum_ndarray(half, x, stride_x, ix);
    let right = sum_ndarray(n - half, x, stride_x, advance(ix, half as isize * stride_x));
    left + right
}

/// Pairwise sum of a strided view.
///
/// Resolves a negative `stride_x` to its starting offset (`(1 - n) *
/// stride_x`, BLAS vector-argument convention) and delegates to
/// [`sum_ndarray`].
///
/// # Panics
///
/// Panics if any implied index is out of bounds.
///
/// # Example
///
/// ```rust
/// use pwsum::sum;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(sum(x.len(), &x, 1), 10.0);
/// assert_eq!(sum(2, &x, 2), 4.0); // x[0] + x[2]
/// assert_eq!(sum(x.len(), &x, -1), 10.0);
/// ```
#[must_use]
pub fn sum(n: usize, x: &[f64], stride_x: isize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let ix = if stride_x < 0 {
        ((1 - n as isize) * stride_x) as usize
    } else {
        0
    };
    sum_ndarray(n, x, stride_x, ix)
}
