//! Cumulative (prefix) pairwise summation.
//!
//! Writes the running total of a strided input view into a strided output
//! view: `y[j] = initial + x[0] + ... + x[j]` for each logical position
//! `j`. Within a block of up to [`BLOCKSIZE`](crate::BLOCKSIZE) elements
//! the running total is kept as `incoming + local`, where `local` restarts
//! at zero per block; larger inputs split in half and the second half seeds
//! from the last value the first half wrote. The partial each output slot
//! sees is therefore a pairwise combination of block sums rather than one
//! long sequential chain, which is what bounds the error growth.
//!
//! There is no NaN skipping here: a NaN input poisons every subsequent
//! output, and infinities behave as IEEE-754 addition dictates.
//!
//! The input and output borrows are disjoint, as the signatures require;
//! cumulating "in place" means copying the input first (see the tests).

use crate::{advance, BLOCKSIZE};

/// Cumulative pairwise sum of a strided view, with explicit starting
/// offsets.
///
/// The i-th logical input element is `x[offset_x + i * stride_x]`; the i-th
/// running total lands at `y[offset_y + i * stride_y]`. `initial` seeds the
/// total (use `0.0` for a plain prefix sum). `n == 0` writes nothing.
///
/// # Panics
///
/// Panics if any implied index is out of bounds.
///
/// # Example
///
/// ```rust
/// use pwsum::cusum_ndarray;
///
/// let x = [1.0, 2.0, 3.0];
/// let mut y = [0.0; 6];
/// // running totals into every other slot of y, starting from 10
/// cusum_ndarray(3, 10.0, &x, 1, 0, &mut y, 2, 0);
/// assert_eq!(y, [11.0, 0.0, 13.0, 0.0, 16.0, 0.0]);
/// ```
pub fn cusum_ndarray(
    n: usize,
    initial: f64,
    x: &[f64],
    stride_x: isize,
    offset_x: usize,
    y: &mut [f64],
    stride_y: isize,
    offset_y: usize,
) {
    if n == 0 {
        return;
    }
    if n <= BLOCKSIZE {
        let mut ix = offset_x;
        let mut iy = offset_y;
        // Local partial restarts at zero so the additions within a block
        // never chain onto the (potentially large) incoming total.
        let mut s = 0.0;
        for _ in 0..n {
            s += x[ix];
            y[iy] = initial + s;
            ix = advance(ix, stride_x);
            iy = advance(iy, stride_y);
        }
        return;
    }
    let half = n / 2;
    cusum_ndarray(half, initial, x, stride_x, offset_x, y, stride_y, offset_y);
    let iy_last = advance(offset_y, (half - 1) as isize * stride_y);
    let carried = y[iy_last];
    cusum_ndarray(
        n - half,
        carried,
        x,
        stride_x,
        advance(offset_x, half as isize * stride_x),
        y,
        stride_y,
        advance(iy_last, stride_y),
    );
}

/// Cumulative pairwise sum of a strided view.
///
/// Resolves negative strides to their starting offsets (`(1 - n) * stride`,
/// BLAS vector-argument convention, independently for input and output) and
/// delegates to [`cusum_ndarray`]. With a negative `stride_y` the running
/// totals are written back-to-front: `y` ends up holding the cumulative
/// sequence in reverse.
///
/// # Panics
///
/// Panics if any implied index is out of bounds.
///
/// # Example
///
/// ```rust
/// use pwsum::cusum;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let mut y = [0.0; 4];
/// cusum(x.len(), 0.0, &x, 1, &mut y, 1);
/// assert_eq!(y, [1.0, 3.0, 6.0, 10.0]);
/// ```
pub fn cusum(n: usize, initial: f64, x: &[f64], stride_x: isize, y: &mut [f64], stride_y: isize) {
    if n == 0 {
        return;
    }
    let ix = if stride_x < 0 {
        ((1 - n as isize) * stride_x) as usize
    } else {
        0
    };
    let iy = if stride_y < 0 {
        ((1 - n as isize) * stride_y) as usize
    } else {
        0
    };
    cusum_ndarray(n, initial, x, stride_x, ix, y, stride_y, iy);
}
