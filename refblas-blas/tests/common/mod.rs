#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use refblas_core::Strided;

pub const INCREMENTS: [isize; 5] = [1, 2, 3, -1, -2];

/// Fill value for strided gaps; must never change.
pub const GAP: f64 = -777.0;

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn random_vec(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

pub fn pick_inc(rng: &mut StdRng) -> isize {
    INCREMENTS[rng.gen_range(0..INCREMENTS.len())]
}

/// Lay out a logical vector at increment `inc`, gaps filled with [`GAP`].
pub fn embed(logical: &[f64], inc: isize) -> Vec<f64> {
    let n = logical.len();
    let mut buf = vec![GAP; refblas_core::stride::required_len(n, inc)];
    let s = Strided::new(n, inc);
    for (i, &v) in logical.iter().enumerate() {
        buf[s.index(i)] = v;
    }
    buf
}

/// Read a logical vector back out of a strided buffer, checking the gaps.
pub fn extract(buf: &[f64], n: usize, inc: isize) -> Vec<f64> {
    let s = Strided::new(n, inc);
    let touched: Vec<usize> = (0..n).map(|i| s.index(i)).collect();
    for (p, &v) in buf.iter().enumerate() {
        if !touched.contains(&p) {
            assert_eq!(v, GAP, "gap at {p} was written");
        }
    }
    touched.into_iter().map(|p| buf[p]).collect()
}

/// Random lower or upper triangle with a diagonal in `[1, 2]` and small
/// off-diagonal entries, zero elsewhere. Row-major, `lda = n`.
pub fn well_conditioned_triangle(rng: &mut StdRng, n: usize, upper: bool) -> Vec<f64> {
    let mut a = vec![0.0; n * n];
    let off = 0.5 / n as f64;
    for i in 0..n {
        for j in 0..n {
            if i == j {
                a[i * n + j] = rng.gen_range(1.0..2.0);
            } else if (j > i) == upper {
                a[i * n + j] = rng.gen_range(-off..off);
            }
        }
    }
    a
}

/// y := alpha * op(A) * x + beta * y, written out the long way.
pub fn naive_gemv(
    trans: bool,
    m: usize,
    n: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    x: &[f64],
    beta: f64,
    y: &[f64],
) -> Vec<f64> {
    let (rows, cols) = if trans { (n, m) } else { (m, n) };
    (0..rows)
        .map(|r| {
            let sum: f64 = (0..cols)
                .map(|c| {
                    let aij = if trans { a[c * lda + r] } else { a[r * lda + c] };
                    aij * x[c]
                })
                .sum();
            beta * y[r] + alpha * sum
        })
        .collect()
}
