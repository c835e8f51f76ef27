//! General (non-symmetric) matrix-vector kernels.

use refblas_core::scalar::skippable;
use refblas_core::storage::{self, Band};
use refblas_core::{validate, Param, Result, Scalar, Strided, Transpose};

use super::{guard, quick_return};
use crate::level1;

// ============================================================================
// GEMV: General matrix-vector multiply
// y := alpha * op(A) * x + beta * y
// ============================================================================

/// GEMV: y := alpha * op(A) * x + beta * y, with `A` an `m x n` row-major matrix.
///
/// Without transpose each row of `A` is reduced against `x` (a dot product per
/// output element). With transpose the stored rows are columns of `A^T`, so
/// each `x[i]` is broadcast across row `i` into `y` (an axpy per row).
pub fn gemv<T: Scalar>(
    trans: Transpose,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    guard("gemv", || {
        validate::dimension(Param::M, m)?;
        validate::dimension(Param::N, n)?;
        validate::lda(lda, n.max(1))?;
        validate::increment(Param::IncX, incx)?;
        validate::increment(Param::IncY, incy)
    })?;
    if m == 0 || n == 0 {
        return quick_return("gemv");
    }

    let (len_x, len_y) = if trans.is_trans() { (m, n) } else { (n, m) };
    guard("gemv", || {
        validate::buffer(Param::A, a.len(), storage::dense_len(m, n, lda))?;
        validate::vector(Param::X, x.len(), len_x, incx)?;
        validate::vector(Param::Y, y.len(), len_y, incy)
    })?;
    if alpha == T::zero() && beta == T::one() {
        return quick_return("gemv");
    }

    level1::scal(len_y, beta, y, incy);
    if alpha == T::zero() {
        return Ok(());
    }

    if trans.is_trans() {
        // y += (alpha * x[i]) * A_row_i
        let sx = Strided::new(len_x, incx);
        for i in 0..m {
            let row = &a[i * lda..i * lda + n];
            level1::axpy(n, alpha * x[sx.index(i)], row, 1, y, incy);
        }
    } else {
        // y[i] += alpha * dot(A_row_i, x)
        let sy = Strided::new(len_y, incy);
        for i in 0..m {
            let row = &a[i * lda..i * lda + n];
            y[sy.index(i)] += alpha * level1::dot(n, row, 1, x, incx);
        }
    }
    Ok(())
}

// ============================================================================
// GBMV: General band matrix-vector multiply
// y := alpha * op(A) * x + beta * y
// ============================================================================

/// GBMV: y := alpha * op(A) * x + beta * y, with `A` an `m x n` band matrix
/// holding `kl` sub-diagonals and `ku` super-diagonals in compact row storage.
///
/// `m` and `n` are the dimensions of the full logical matrix, not of the
/// compacted buffer. Each row touches only its stored window, clipped at both
/// matrix edges (see [`Band::row`]).
pub fn gbmv<T: Scalar>(
    trans: Transpose,
    m: usize,
    n: usize,
    kl: usize,
    ku: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    let band = Band::new(m, n, kl, ku);
    guard("gbmv", || {
        validate::dimension(Param::M, m)?;
        validate::dimension(Param::N, n)?;
        validate::dimension(Param::Kl, kl)?;
        validate::dimension(Param::Ku, ku)?;
        validate::lda(lda, band.width())?;
        validate::increment(Param::IncX, incx)?;
        validate::increment(Param::IncY, incy)
    })?;
    if m == 0 || n == 0 {
        return quick_return("gbmv");
    }

    let (len_x, len_y) = if trans.is_trans() { (m, n) } else { (n, m) };
    guard("gbmv", || {
        validate::buffer(Param::A, a.len(), band.required_len(lda))?;
        validate::vector(Param::X, x.len(), len_x, incx)?;
        validate::vector(Param::Y, y.len(), len_y, incy)
    })?;
    if alpha == T::zero() && beta == T::one() {
        return quick_return("gbmv");
    }

    level1::scal(len_y, beta, y, incy);
    if alpha == T::zero() {
        return Ok(());
    }

    let sx = Strided::new(len_x, incx);
    let sy = Strided::new(len_y, incy);
    for i in 0..m {
        let row = band.row(i);
        let len = row.stored.len();
        if len == 0 {
            continue;
        }
        let a_row = &a[i * lda + row.stored.start..i * lda + row.stored.end];
        if trans.is_trans() {
            let base = sy.window(row.first_col, len);
            level1::axpy(len, alpha * x[sx.index(i)], a_row, 1, &mut y[base..], incy);
        } else {
            let base = sx.window(row.first_col, len);
            y[sy.index(i)] += alpha * level1::dot(len, a_row, 1, &x[base..], incx);
        }
    }
    Ok(())
}

// ============================================================================
// GER: rank-1 update  A := alpha * x * y^T + A
// ============================================================================

/// GER: A := alpha * x * y^T + A, with `x` of length `m` and `y` of length `n`.
///
/// Each row update is an axpy of `y` into the stored row. Rows whose `x[i]`
/// is zero are skipped when the `zero-skip` feature is on.
pub fn ger<T: Scalar>(
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<()> {
    guard("ger", || {
        validate::dimension(Param::M, m)?;
        validate::dimension(Param::N, n)?;
        validate::lda(lda, n.max(1))?;
        validate::increment(Param::IncX, incx)?;
        validate::increment(Param::IncY, incy)
    })?;
    if m == 0 || n == 0 {
        return quick_return("ger");
    }
    guard("ger", || {
        validate::vector(Param::X, x.len(), m, incx)?;
        validate::vector(Param::Y, y.len(), n, incy)?;
        validate::buffer(Param::A, a.len(), storage::dense_len(m, n, lda))
    })?;
    if alpha == T::zero() {
        return quick_return("ger");
    }

    let sx = Strided::new(m, incx);
    for i in 0..m {
        let xi = x[sx.index(i)];
        if skippable(xi) {
            continue;
        }
        let row = &mut a[i * lda..i * lda + n];
        level1::axpy(n, alpha * xi, y, incy, row, 1);
    }
    Ok(())
}
