//! NaN-aware pairwise summation with element counting.
//!
//! The kernel here is the reduction behind NaN-skipping statistics over
//! strided arrays: it computes the sum of the non-NaN elements of a view
//! together with how many such elements it saw, so that callers can derive
//! means and other moments without a second pass.
//!
//! # Additive Output Contract
//!
//! [`nansum_ndarray`] **accumulates into** its output pair rather than
//! overwriting it. This is load-bearing: the recursive halves of the
//! pairwise algorithm both target the same two slots, and their
//! contributions combine by plain addition with no intermediate merge step.
//! It also lets callers fold many views into one running (sum, count) pair.
//! Zero-initialization is deliberately the caller's job; [`nansum`] is the
//! entry point that performs it.
//!
//! # NaN Semantics
//!
//! NaN elements are skipped, not propagated: they contribute to neither the
//! sum nor the count. An all-NaN view therefore adds `0.0` to both slots.
//! Infinities are ordinary values — they are summed and counted, and
//! `+inf + -inf` produces NaN through IEEE-754 addition as usual.

use crate::{advance, BLOCKSIZE};

/// NaN-skipping pairwise sum over a strided view, accumulated into an
/// existing `[sum, count]` output pair.
///
/// The i-th logical input element is `x[offset_x + i * stride_x]`. The sum
/// of the non-NaN elements is **added** to `out[offset_out]` and the number
/// of non-NaN elements is **added** to `out[offset_out + stride_out]`. The
/// count is stored as `f64` so both results live in one buffer, but it is
/// always integral.
///
/// `n == 0` leaves `out` untouched. A zero `stride_x` is the view that
/// repeats `x[offset_x]` `n` times: it contributes `n * v` and `n` when `v`
/// is non-NaN, and nothing otherwise.
///
/// Callers wanting a fresh result must zero the two output slots first —
/// or use [`nansum`], which does exactly that.
///
/// # Panics
///
/// Panics if any index implied by `(n, stride_x, offset_x)` or the output
/// pair addressing is out of bounds.
///
/// # Example
///
/// ```rust
/// use pwsum::nansum_ndarray;
///
/// // Sum every other element, accumulating on top of prior totals.
/// let x = [1.0, -9.0, f64::NAN, -9.0, 3.0];
/// let mut out = [10.0, 5.0];
/// nansum_ndarray(3, &x, 2, 0, &mut out, 1, 0);
/// assert_eq!(out, [14.0, 7.0]); // 10 + (1 + 3), 5 + 2
/// ```
pub fn nansum_ndarray(
    n: usize,
    x: &[f64],
    stride_x: isize,
    offset_x: usize,
    out: &mut [f64],
    stride_out: isize,
    offset_out: usize,
) {
    if n == 0 {
        return;
    }
    let io = offset_out;
    let ic = advance(offset_out, stride_out);

    let mut ix = offset_x;

    // Degenerate views: one slot repeated, or a single element. These must
    // be handled before the blocked paths, which assume at least 8 distinct
    // reads are worthwhile.
    if stride_x == 0 {
        let v = x[ix];
        if !v.is_nan() {
            out[io] += v * n as f64;
            out[ic] += n as f64;
        }
        return;
    }
    if n == 1 {
        let v = x[ix];
        if !v.is_nan() {
            out[io] += v;
            out[ic] += 1.0;
        }
        return;
    }

    // Short views: plain left-to-right accumulation. Too few elements to
    // populate the unrolled lanes.
    if n < 8 {
        let mut s = 0.0;
        let mut c = 0.0;
        for _ in 0..n {
            let v = x[ix];
            if !v.is_nan() {
                s += v;
                c += 1.0;
            }
            ix = advance(ix, stride_x);
        }
        out[io] += s;
        out[ic] += c;
        return;
    }

    if n <= BLOCKSIZE {
        // Eight-way unrolled block: eight independent accumulators, each
        // owning every 8th element, so the NaN branch per lane does not
        // serialize the additions. Combining the lanes pairwise preserves
        // the pairwise error bound (effective leaf size 16).
        let m = n - (n % 8);
        let mut s0 = 0.0;
        let mut s1 = 0.0;
        let mut s2 = 0.0;
        let mut s3 = 0.0;
        let mut s4 = 0.0;
        let mut s5 = 0.0;
        let mut s6 = 0.0;
        let mut s7 = 0.0;
        let mut c = 0.0;

        let mut i = 0;
        while i < m {
            let v0 = x[ix];
            let v1 = x[advance(ix, stride_x)];
            let v2 = x[advance(ix, 2 * stride_x)];
            let v3 = x[advance(ix, 3 * stride_x)];
            let v4 = x[advance(ix, 4 * stride_x)];
            let v5 = x[advance(ix, 5 * stride_x)];
            let v6 = x[advance(ix, 6 * stride_x)];
            let v7 = x[advance(ix, 7 * stride_x)];
            if !v0.is_nan() {
                s0 += v0;
                c += 1.0;
            }
            if !v1.is_nan() {
                s1 += v1;
                c += 1.0;
            }
            if !v2.is_nan() {
                s2 += v2;
                c += 1.0;
            }
            if !v3.is_nan() {
                s3 += v3;
                c += 1.0;
            }
            if !v4.is_nan() {
                s4 += v4;
                c += 1.0;
            }
            if !v5.is_nan() {
                s5 += v5;
                c += 1.0;
            }
            if !v6.is_nan() {
                s6 += v6;
                c += 1.0;
            }
            if !v7.is_nan() {
                s7 += v7;
                c += 1.0;
            }
            ix = advance(ix, 8 * stride_x);
            i += 8;
        }
        let mut s = ((s0 + s1) + (s2 + s3)) + ((s4 + s5) + (s6 + s7));

        // n % 8 remainder
        while i < n {
            let v = x[ix];
            if !v.is_nan() {
                s += v;
                c += 1.0;
            }
            ix = advance(ix, stride_x);
            i += 1;
        }
        out[io] += s;
        out[ic] += c;
        return;
    }

    // Recursive halving. The split is rounded down to a multiple of 8 so
    // the left half always exercises full unrolled blocks. Both halves
    // accumulate into the same output slots; additivity is the merge.
    let mut half = n / 2;
    half -= half % 8;
    nansum_ndarray(half, x, stride_x, ix, out, stride_out, offset_out);
    let ix2 = advance(ix, half as isize * stride_x);
    nansum_ndarray(n - half, x, stride_x, ix2, out, stride_out, offset_out);
}

/// NaN-skipping pairwise sum over a strided view, written to a freshly
/// zeroed `[sum, count]` output pair.
///
/// Resolves negative strides to their starting offsets — a negative
/// `stride_x` walks `x` from index `(1 - n) * stride_x` downwards, matching
/// BLAS vector-argument conventions — zero-initializes both output slots,
/// and delegates to [`nansum_ndarray`]. The output slots are zeroed even
/// when `n == 0`.
///
/// # Panics
///
/// Panics if any implied index is out of bounds.
///
/// # Example
///
/// ```rust
/// use pwsum::nansum;
///
/// let x = [1.0, f64::NAN, 3.0];
/// let mut out = [0.0, 0.0];
/// nansum(x.len(), &x, 1, &mut out, 1);
/// assert_eq!(out, [4.0, 2.0]);
///
/// // Reverse traversal of the same view
/// nansum(x.len(), &x, -1, &mut out, 1);
/// assert_eq!(out, [4.0, 2.0]);
/// ```
pub fn nansum(n: usize, x: &[f64], stride_x: isize, out: &mut [f64], stride_out: isize) {
    let io = if stride_out < 0 {
        // (1 - 2) * stride_out for the two-slot output view
        (-stride_out) as usize
    } else {
        0
    };
    out[io] = 0.0;
    out[advance(io, stride_out)] = 0.0;
    if n == 0 {
        return;
    }
    let ix = if stride_x < 0 {
        ((1 - n as isize) * stride_x) as usize
    } else {
        0
    };
    nansum_ndarray(n, x, stride_x, ix, out, stride_out, io);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(x: &[f64]) -> (f64, f64) {
        let mut out = [0.0, 0.0];
        nansum(x.len(), x, 1, &mut out, 1);
        (out[0], out[1])
    }

    #[test]
    fn test_all_finite() {
        assert_eq!(run(&[1.0, 2.0, 3.0]), (6.0, 3.0));
    }

    #[test]
    fn test_skips_nan() {
        assert_eq!(run(&[1.0, f64::NAN, 3.0]), (4.0, 2.0));
    }

    #[test]
    fn test_all_nan() {
        assert_eq!(run(&[f64::NAN, f64::NAN]), (0.0, 0.0));
    }

    #[test]
    fn test_empty_zeroes_out() {
        let mut out = [7.0, 7.0];
        nansum(0, &[], 1, &mut out, 1);
        assert_eq!(out, [0.0, 0.0]);
    }

    #[test]
    fn test_ndarray_empty_is_noop() {
        let mut out = [7.0, 3.0];
        nansum_ndarray(0, &[1.0], 1, 0, &mut out, 1, 0);
        assert_eq!(out, [7.0, 3.0]);
    }

    #[test]
    fn test_ndarray_accumulates() {
        let mut out = [100.0, 10.0];
        nansum_ndarray(2, &[1.0, 2.0], 1, 0, &mut out, 1, 0);
        assert_eq!(out, [103.0, 12.0]);
    }

    #[test]
    fn test_zero_stride_repeats() {
        let mut out = [0.0, 0.0];
        nansum_ndarray(5, &[2.0, 9.0], 0, 0, &mut out, 1, 0);
        assert_eq!(out, [10.0, 5.0]);
    }

    #[test]
    fn test_zero_stride_nan() {
        let mut out = [1.0, 1.0];
        nansum_ndarray(5, &[f64::NAN], 0, 0, &mut out, 1, 0);
        assert_eq!(out, [1.0, 1.0]);
    }

    #[test]
    fn test_negative_output_stride() {
        let x = [1.0, 2.0, 3.0];
        let mut out = [0.0, 0.0];
        nansum(x.len(), &x, 1, &mut out, -1);
        // count lands below sum
        assert_eq!(out, [3.0, 6.0]);
    }

    #[test]
    fn test_unrolled_block() {
        // 8 <= n <= BLOCKSIZE path, with NaN in an unrolled lane and in
        // the remainder
        let mut x: Vec<f64> = (1..=20).map(f64::from).collect();
        x[3] = f64::NAN;
        x[18] = f64::NAN;
        assert_eq!(run(&x), (210.0 - 4.0 - 19.0, 18.0));
    }

    #[test]
    fn test_recursive_path() {
        let x = vec![1.0; 1000];
        assert_eq!(run(&x), (1000.0, 1000.0));
    }

    #[test]
    fn test_infinities_counted() {
        let (s, c) = run(&[f64::INFINITY, 1.0]);
        assert_eq!(s, f64::INFINITY);
        assert_eq!(c, 2.0);

        let (s, c) = run(&[f64::INFINITY, f64::NEG_INFINITY]);
        assert!(s.is_nan());
        assert_eq!(c, 2.0);
    }
}
