//! Triangular multiply and solve on packed storage.
//!
//! Same flag flip as the dense kernels: a row-major packed triangle is, read
//! column by column, the column-major packed transpose. Column `j` of that
//! view is a contiguous run of the packed buffer, so each step is one axpy
//! or one dot against a window of `x`, with `kk` tracking where the run
//! starts.

use refblas_core::scalar::skippable;
use refblas_core::storage;
use refblas_core::{validate, Diag, Param, Result, Scalar, Strided, Transpose, Uplo};

use super::{guard, quick_return};
use crate::level1;

fn check<T: Scalar>(op: &'static str, n: usize, ap: &[T], x: &[T], incx: isize) -> Result<bool> {
    guard(op, || {
        validate::dimension(Param::N, n)?;
        validate::increment(Param::IncX, incx)
    })?;
    if n == 0 {
        quick_return(op)?;
        return Ok(false);
    }
    guard(op, || {
        validate::buffer(Param::Ap, ap.len(), storage::packed_len(n))?;
        validate::vector(Param::X, x.len(), n, incx)
    })?;
    Ok(true)
}

// ============================================================================
// TPMV: Packed triangular multiply  x := op(A) * x
// ============================================================================

/// TPMV: x := op(A) * x, with the `uplo` triangle of the `n x n` matrix `A`
/// packed row by row into `ap`.
pub fn tpmv<T: Scalar>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[T],
    x: &mut [T],
    incx: isize,
) -> Result<()> {
    if !check("tpmv", n, ap, x, incx)? {
        return Ok(());
    }

    let nonunit = !diag.is_unit();
    let sx = Strided::new(n, incx);
    match (trans.flip().is_trans(), uplo.flip()) {
        (false, Uplo::Upper) => {
            // Column j holds B(0..=j, j).
            let mut kk = 0;
            for j in 0..n {
                let jx = sx.index(j);
                let temp = x[jx];
                if !skippable(temp) {
                    if j > 0 {
                        let base = sx.window(0, j);
                        level1::axpy(j, temp, &ap[kk..kk + j], 1, &mut x[base..], incx);
                    }
                    if nonunit {
                        x[jx] *= ap[kk + j];
                    }
                }
                kk += j + 1;
            }
        }
        (false, Uplo::Lower) => {
            // Column j holds B(j..n, j).
            let mut kk = storage::packed_len(n);
            for j in (0..n).rev() {
                kk -= n - j;
                let jx = sx.index(j);
                let temp = x[jx];
                if !skippable(temp) {
                    let len = n - j - 1;
                    if len > 0 {
                        let base = sx.window(j + 1, len);
                        level1::axpy(len, temp, &ap[kk + 1..kk + 1 + len], 1, &mut x[base..], incx);
                    }
                    if nonunit {
                        x[jx] *= ap[kk];
                    }
                }
            }
        }
        (true, Uplo::Upper) => {
            let mut kk = storage::packed_len(n);
            for j in (0..n).rev() {
                kk -= j + 1;
                let jx = sx.index(j);
                let mut temp = x[jx];
                if nonunit {
                    temp *= ap[kk + j];
                }
                if j > 0 {
                    temp += level1::dot(j, &ap[kk..kk + j], 1, &x[sx.window(0, j)..], incx);
                }
                x[jx] = temp;
            }
        }
        (true, Uplo::Lower) => {
            let mut kk = 0;
            for j in 0..n {
                let jx = sx.index(j);
                let mut temp = x[jx];
                if nonunit {
                    temp *= ap[kk];
                }
                let len = n - j - 1;
                if len > 0 {
                    let base = sx.window(j + 1, len);
                    temp += level1::dot(len, &ap[kk + 1..kk + 1 + len], 1, &x[base..], incx);
                }
                x[jx] = temp;
                kk += n - j;
            }
        }
    }
    Ok(())
}

// ============================================================================
// TPSV: Packed triangular solve  x := op(A)^{-1} * x
// ============================================================================

/// TPSV: solves op(A) * x = b in place, with `A` packed as in [`tpmv`] and `b`
/// passed in `x`.
///
/// No test for singularity or near-singularity is made.
pub fn tpsv<T: Scalar>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[T],
    x: &mut [T],
    incx: isize,
) -> Result<()> {
    if !check("tpsv", n, ap, x, incx)? {
        return Ok(());
    }

    let nonunit = !diag.is_unit();
    let sx = Strided::new(n, incx);
    match (trans.flip().is_trans(), uplo.flip()) {
        (false, Uplo::Upper) => {
            let mut kk = storage::packed_len(n);
            for j in (0..n).rev() {
                kk -= j + 1;
                let jx = sx.index(j);
                if skippable(x[jx]) {
                    continue;
                }
                if nonunit {
                    x[jx] /= ap[kk + j];
                }
                let temp = x[jx];
                if j > 0 {
                    let base = sx.window(0, j);
                    level1::axpy(j, -temp, &ap[kk..kk + j], 1, &mut x[base..], incx);
                }
            }
        }
        (false, Uplo::Lower) => {
            let mut kk = 0;
            for j in 0..n {
                let jx = sx.index(j);
                let len = n - j - 1;
                if !skippable(x[jx]) {
                    if nonunit {
                        x[jx] /= ap[kk];
                    }
                    let temp = x[jx];
                    if len > 0 {
                        let base = sx.window(j + 1, len);
                        level1::axpy(len, -temp, &ap[kk + 1..kk + 1 + len], 1, &mut x[base..], incx);
                    }
                }
                kk += n - j;
            }
        }
        (true, Uplo::Upper) => {
            let mut kk = 0;
            for j in 0..n {
                let jx = sx.index(j);
                let mut temp = x[jx];
                if j > 0 {
                    temp -= level1::dot(j, &ap[kk..kk + j], 1, &x[sx.window(0, j)..], incx);
                }
                if nonunit {
                    temp /= ap[kk + j];
                }
                x[jx] = temp;
                kk += j + 1;
            }
        }
        (true, Uplo::Lower) => {
            let mut kk = storage::packed_len(n);
            for j in (0..n).rev() {
                kk -= n - j;
                let jx = sx.index(j);
                let mut temp = x[jx];
                let len = n - j - 1;
                if len > 0 {
                    let base = sx.window(j + 1, len);
                    temp -= level1::dot(len, &ap[kk + 1..kk + 1 + len], 1, &x[base..], incx);
                }
                if nonunit {
                    temp /= ap[kk];
                }
                x[jx] = temp;
            }
        }
    }
    Ok(())
}
