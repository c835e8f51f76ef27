//! Triangular multiply and solve on dense and banded storage.
//!
//! A row-major buffer read as column-major is the transpose of the matrix:
//! an upper triangle becomes a lower one and `op(A)` becomes `op(A^T)^T`.
//! Every kernel here therefore flips both the triangle and the transpose
//! flag at entry and then runs the column-major reference algorithm over the
//! column-major view `B`, where `B(i, j) == A(j, i)`.
//!
//! A dense triangle is a band with `k = n - 1`, so dense and banded kernels
//! share the same traversal and differ only in how `B(i, j)` is located.

use refblas_core::scalar::skippable;
use refblas_core::storage::{self, TriBand};
use refblas_core::{validate, Diag, Param, Result, Scalar, Strided, Transpose, Uplo};

use super::{guard, quick_return};

/// Rows of column `j` of an `n x n` column-major band with `k` off-diagonals
/// that lie strictly above the diagonal.
#[inline(always)]
fn above(j: usize, k: usize) -> std::ops::Range<usize> {
    j.saturating_sub(k)..j
}

/// Rows of column `j` that lie strictly below the diagonal.
#[inline(always)]
fn below(j: usize, k: usize, n: usize) -> std::ops::Range<usize> {
    j + 1..n.min(j + k + 1)
}

/// x := op(B) * x for the column-major triangular band `B` given by `b`.
///
/// `uplo` and `trans` describe `B`, i.e. they are already flipped.
fn multiply<T, F>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    b: F,
    x: &mut [T],
    sx: Strided,
)
where
    T: Scalar,
    F: Fn(usize, usize) -> T,
{
    let nonunit = !diag.is_unit();
    match (trans.is_trans(), uplo) {
        (false, Uplo::Upper) => {
            for j in 0..n {
                let jx = sx.index(j);
                let temp = x[jx];
                if skippable(temp) {
                    continue;
                }
                for i in above(j, k) {
                    x[sx.index(i)] += temp * b(i, j);
                }
                if nonunit {
                    x[jx] *= b(j, j);
                }
            }
        }
        (false, Uplo::Lower) => {
            for j in (0..n).rev() {
                let jx = sx.index(j);
                let temp = x[jx];
                if skippable(temp) {
                    continue;
                }
                for i in below(j, k, n).rev() {
                    x[sx.index(i)] += temp * b(i, j);
                }
                if nonunit {
                    x[jx] *= b(j, j);
                }
            }
        }
        (true, Uplo::Upper) => {
            for j in (0..n).rev() {
                let jx = sx.index(j);
                let mut temp = x[jx];
                if nonunit {
                    temp *= b(j, j);
                }
                for i in above(j, k).rev() {
                    temp += b(i, j) * x[sx.index(i)];
                }
                x[jx] = temp;
            }
        }
        (true, Uplo::Lower) => {
            for j in 0..n {
                let jx = sx.index(j);
                let mut temp = x[jx];
                if nonunit {
                    temp *= b(j, j);
                }
                for i in below(j, k, n) {
                    temp += b(i, j) * x[sx.index(i)];
                }
                x[jx] = temp;
            }
        }
    }
}

/// x := op(B)^{-1} * x for the column-major triangular band `B` given by `b`.
///
/// Forward substitution for lower/no-transpose and upper/transpose, back
/// substitution otherwise. No singularity test is made.
fn solve<T, F>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    b: F,
    x: &mut [T],
    sx: Strided,
)
where
    T: Scalar,
    F: Fn(usize, usize) -> T,
{
    let nonunit = !diag.is_unit();
    match (trans.is_trans(), uplo) {
        (false, Uplo::Upper) => {
            for j in (0..n).rev() {
                let jx = sx.index(j);
                if skippable(x[jx]) {
                    continue;
                }
                if nonunit {
                    x[jx] /= b(j, j);
                }
                let temp = x[jx];
                for i in above(j, k).rev() {
                    x[sx.index(i)] -= temp * b(i, j);
                }
            }
        }
        (false, Uplo::Lower) => {
            for j in 0..n {
                let jx = sx.index(j);
                if skippable(x[jx]) {
                    continue;
                }
                if nonunit {
                    x[jx] /= b(j, j);
                }
                let temp = x[jx];
                for i in below(j, k, n) {
                    x[sx.index(i)] -= temp * b(i, j);
                }
            }
        }
        (true, Uplo::Upper) => {
            for j in 0..n {
                let jx = sx.index(j);
                let mut temp = x[jx];
                for i in above(j, k) {
                    temp -= b(i, j) * x[sx.index(i)];
                }
                if nonunit {
                    temp /= b(j, j);
                }
                x[jx] = temp;
            }
        }
        (true, Uplo::Lower) => {
            for j in (0..n).rev() {
                let jx = sx.index(j);
                let mut temp = x[jx];
                for i in below(j, k, n).rev() {
                    temp -= b(i, j) * x[sx.index(i)];
                }
                if nonunit {
                    temp /= b(j, j);
                }
                x[jx] = temp;
            }
        }
    }
}

fn check_dense<T: Scalar>(
    op: &'static str,
    n: usize,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
) -> Result<bool> {
    guard(op, || {
        validate::dimension(Param::N, n)?;
        validate::lda(lda, n.max(1))?;
        validate::increment(Param::IncX, incx)
    })?;
    if n == 0 {
        quick_return(op)?;
        return Ok(false);
    }
    guard(op, || {
        validate::buffer(Param::A, a.len(), storage::dense_len(n, n, lda))?;
        validate::vector(Param::X, x.len(), n, incx)
    })?;
    Ok(true)
}

fn check_band<T: Scalar>(
    op: &'static str,
    band: TriBand,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
) -> Result<bool> {
    guard(op, || {
        validate::dimension(Param::N, band.n)?;
        validate::dimension(Param::K, band.k)?;
        validate::lda(lda, band.k + 1)?;
        validate::increment(Param::IncX, incx)
    })?;
    if band.n == 0 {
        quick_return(op)?;
        return Ok(false);
    }
    guard(op, || {
        validate::buffer(Param::A, a.len(), band.required_len(lda))?;
        validate::vector(Param::X, x.len(), band.n, incx)
    })?;
    Ok(true)
}

/// Element `B(i, j)` of the column-major view of a row-major band buffer.
///
/// `uplo` describes `B`: an upper `B` is a lower row-major band (diagonal in
/// physical column `k`), a lower `B` an upper row-major band (diagonal in
/// column 0).
#[inline(always)]
fn band_view<T: Scalar>(
    a: &[T],
    lda: usize,
    k: usize,
    uplo: Uplo,
) -> impl Fn(usize, usize) -> T + '_ {
    move |i, j| match uplo {
        Uplo::Upper => a[j * lda + k + i - j],
        Uplo::Lower => a[j * lda + i - j],
    }
}

// ============================================================================
// TRMV: Triangular matrix-vector multiply  x := op(A) * x
// ============================================================================

/// TRMV: x := op(A) * x, with `A` an `n x n` triangular matrix in dense
/// row-major storage. Only the `uplo` triangle is read; with `Diag::Unit`
/// the diagonal is not read either.
pub fn trmv<T: Scalar>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) -> Result<()> {
    if !check_dense("trmv", n, a, lda, x, incx)? {
        return Ok(());
    }
    let sx = Strided::new(n, incx);
    let b = |i: usize, j: usize| a[j * lda + i];
    multiply(uplo.flip(), trans.flip(), diag, n, n - 1, b, x, sx);
    Ok(())
}

// ============================================================================
// TRSV: Triangular solve  x := op(A)^{-1} * x
// ============================================================================

/// TRSV: solves op(A) * x = b in place, with `A` an `n x n` triangular matrix
/// in dense row-major storage and `b` passed in `x`.
///
/// No test for singularity or near-singularity is made.
pub fn trsv<T: Scalar>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) -> Result<()> {
    if !check_dense("trsv", n, a, lda, x, incx)? {
        return Ok(());
    }
    let sx = Strided::new(n, incx);
    let b = |i: usize, j: usize| a[j * lda + i];
    solve(uplo.flip(), trans.flip(), diag, n, n - 1, b, x, sx);
    Ok(())
}

// ============================================================================
// TBMV: Triangular band multiply  x := op(A) * x
// ============================================================================

/// TBMV: x := op(A) * x, with `A` an `n x n` triangular band matrix with `k`
/// off-diagonals.
///
/// Upper rows hold `A(i, i..=i+k)` with the diagonal in physical column 0;
/// lower rows hold `A(i, i-k..=i)` with the diagonal in physical column `k`.
pub fn tbmv<T: Scalar>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) -> Result<()> {
    if !check_band("tbmv", TriBand::new(uplo, n, k), a, lda, x, incx)? {
        return Ok(());
    }
    let sx = Strided::new(n, incx);
    let uplo = uplo.flip();
    multiply(uplo, trans.flip(), diag, n, k, band_view(a, lda, k, uplo), x, sx);
    Ok(())
}

// ============================================================================
// TBSV: Triangular band solve  x := op(A)^{-1} * x
// ============================================================================

/// TBSV: solves op(A) * x = b in place for a triangular band matrix stored as
/// in [`tbmv`].
///
/// No test for singularity or near-singularity is made.
pub fn tbsv<T: Scalar>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) -> Result<()> {
    if !check_band("tbsv", TriBand::new(uplo, n, k), a, lda, x, incx)? {
        return Ok(());
    }
    let sx = Strided::new(n, incx);
    let uplo = uplo.flip();
    solve(uplo, trans.flip(), diag, n, k, band_view(a, lda, k, uplo), x, sx);
    Ok(())
}
