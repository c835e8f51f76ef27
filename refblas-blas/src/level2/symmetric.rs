//! Symmetric kernels: only one triangle of `A` is stored, the other is
//! implied by symmetry.
//!
//! Multiplies walk the stored triangle once. Each off-diagonal entry
//! `A(i, j)` contributes `A(i, j) * x[j]` to `y[i]` (a dot product over the
//! stored part of row `i`) and `A(i, j) * x[i]` to `y[j]` (an axpy of that row
//! into `y`). Rank updates write only the stored triangle.

use refblas_core::scalar::skippable;
use refblas_core::storage::{self, TriBand};
use refblas_core::{validate, Param, Result, Scalar, Strided, Uplo};

use super::{guard, quick_return};
use crate::level1;

/// Accumulate one stored row of a symmetric matrix into `y`.
///
/// `diag` is `A(i, i)`; `off` holds the stored off-diagonal entries of row `i`,
/// which are logical columns `first..first + off.len()`.
#[inline]
fn symmetric_row<T: Scalar>(
    i: usize,
    diag: T,
    off: &[T],
    first: usize,
    alpha: T,
    x: &[T],
    sx: Strided,
    y: &mut [T],
    sy: Strided,
) {
    let t1 = alpha * x[sx.index(i)];
    let len = off.len();
    let mut t2 = T::zero();
    if len > 0 {
        t2 = level1::dot(len, off, 1, &x[sx.window(first, len)..], sx.inc());
        level1::axpy(len, t1, off, 1, &mut y[sy.window(first, len)..], sy.inc());
    }
    y[sy.index(i)] += t1 * diag + alpha * t2;
}

// ============================================================================
// SYMV: y := alpha * A * x + beta * y  (A symmetric, dense storage)
// ============================================================================

/// SYMV: y := alpha * A * x + beta * y, with `A` an `n x n` symmetric matrix
/// of which only the `uplo` triangle is read.
pub fn symv<T: Scalar>(
    uplo: Uplo,
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
    guard("symv", || {
        validate::dimension(Param::N, n)?;
        validate::lda(lda, n.max(1))?;
        validate::increment(Param::IncX, incx)?;
        validate::increment(Param::IncY, incy)
    })?;
    if n == 0 {
        return quick_return("symv");
    }
    guard("symv", || {
        validate::buffer(Param::A, a.len(), storage::dense_len(n, n, lda))?;
        validate::vector(Param::X, x.len(), n, incx)?;
        validate::vector(Param::Y, y.len(), n, incy)
    })?;
    if alpha == T::zero() && beta == T::one() {
        return quick_return("symv");
    }

    level1::scal(n, beta, y, incy);
    if alpha == T::zero() {
        return Ok(());
    }

    let sx = Strided::new(n, incx);
    let sy = Strided::new(n, incy);
    for i in 0..n {
        let row = &a[i * lda..i * lda + n];
        match uplo {
            Uplo::Upper => symmetric_row(i, row[i], &row[i + 1..], i + 1, alpha, x, sx, y, sy),
            Uplo::Lower => symmetric_row(i, row[i], &row[..i], 0, alpha, x, sx, y, sy),
        }
    }
    Ok(())
}

// ============================================================================
// SBMV: y := alpha * A * x + beta * y  (A symmetric band)
// ============================================================================

/// SBMV: y := alpha * A * x + beta * y, with `A` an `n x n` symmetric band
/// matrix with `k` off-diagonals, stored in triangular-band layout.
///
/// Upper rows hold `A(i, i..=i+k)` with the diagonal in physical column 0;
/// lower rows hold `A(i, i-k..=i)` with the diagonal in physical column `k`.
pub fn sbmv<T: Scalar>(
    uplo: Uplo,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    let band = TriBand::new(uplo, n, k);
    guard("sbmv", || {
        validate::dimension(Param::N, n)?;
        validate::dimension(Param::K, k)?;
        validate::lda(lda, k + 1)?;
        validate::increment(Param::IncX, incx)?;
        validate::increment(Param::IncY, incy)
    })?;
    if n == 0 {
        return quick_return("sbmv");
    }
    guard("sbmv", || {
        validate::buffer(Param::A, a.len(), band.required_len(lda))?;
        validate::vector(Param::X, x.len(), n, incx)?;
        validate::vector(Param::Y, y.len(), n, incy)
    })?;
    if alpha == T::zero() && beta == T::one() {
        return quick_return("sbmv");
    }

    level1::scal(n, beta, y, incy);
    if alpha == T::zero() {
        return Ok(());
    }

    let sx = Strided::new(n, incx);
    let sy = Strided::new(n, incy);
    for i in 0..n {
        let base = i * lda;
        match uplo {
            Uplo::Upper => {
                let len = k.min(n - 1 - i);
                let off = &a[base + 1..base + 1 + len];
                symmetric_row(i, a[base], off, i + 1, alpha, x, sx, y, sy);
            }
            Uplo::Lower => {
                let len = k.min(i);
                let off = &a[base + k - len..base + k];
                symmetric_row(i, a[base + k], off, i - len, alpha, x, sx, y, sy);
            }
        }
    }
    Ok(())
}

// ============================================================================
// SPMV: y := alpha * A * x + beta * y  (A symmetric, packed storage)
// ============================================================================

/// SPMV: y := alpha * A * x + beta * y, with the `uplo` triangle of `A`
/// packed row by row into `ap`.
pub fn spmv<T: Scalar>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    ap: &[T],
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    guard("spmv", || {
        validate::dimension(Param::N, n)?;
        validate::increment(Param::IncX, incx)?;
        validate::increment(Param::IncY, incy)
    })?;
    if n == 0 {
        return quick_return("spmv");
    }
    guard("spmv", || {
        validate::buffer(Param::Ap, ap.len(), storage::packed_len(n))?;
        validate::vector(Param::X, x.len(), n, incx)?;
        validate::vector(Param::Y, y.len(), n, incy)
    })?;
    if alpha == T::zero() && beta == T::one() {
        return quick_return("spmv");
    }

    level1::scal(n, beta, y, incy);
    if alpha == T::zero() {
        return Ok(());
    }

    let sx = Strided::new(n, incx);
    let sy = Strided::new(n, incy);
    let mut kk = 0;
    for i in 0..n {
        match uplo {
            Uplo::Upper => {
                let row = &ap[kk..kk + n - i];
                symmetric_row(i, row[0], &row[1..], i + 1, alpha, x, sx, y, sy);
                kk += n - i;
            }
            Uplo::Lower => {
                let row = &ap[kk..kk + i + 1];
                symmetric_row(i, row[i], &row[..i], 0, alpha, x, sx, y, sy);
                kk += i + 1;
            }
        }
    }
    Ok(())
}

/// Columns of row `i` that belong to the `uplo` triangle.
#[inline(always)]
fn stored_cols(uplo: Uplo, n: usize, i: usize) -> (usize, usize) {
    match uplo {
        Uplo::Upper => (i, n - i),
        Uplo::Lower => (0, i + 1),
    }
}

// ============================================================================
// SYR / SPR: A := alpha * x * x^T + A
// ============================================================================

/// SYR: A := alpha * x * x^T + A, updating only the `uplo` triangle of the
/// dense `n x n` matrix `A`.
pub fn syr<T: Scalar>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    a: &mut [T],
    lda: usize,
) -> Result<()> {
    guard("syr", || {
        validate::dimension(Param::N, n)?;
        validate::lda(lda, n.max(1))?;
        validate::increment(Param::IncX, incx)
    })?;
    if n == 0 {
        return quick_return("syr");
    }
    guard("syr", || {
        validate::vector(Param::X, x.len(), n, incx)?;
        validate::buffer(Param::A, a.len(), storage::dense_len(n, n, lda))
    })?;
    if alpha == T::zero() {
        return quick_return("syr");
    }

    let sx = Strided::new(n, incx);
    for i in 0..n {
        let xi = x[sx.index(i)];
        if skippable(xi) {
            continue;
        }
        let (first, len) = stored_cols(uplo, n, i);
        let row = &mut a[i * lda + first..i * lda + first + len];
        level1::axpy(len, alpha * xi, &x[sx.window(first, len)..], incx, row, 1);
    }
    Ok(())
}

/// SPR: A := alpha * x * x^T + A, with the `uplo` triangle of `A` packed in `ap`.
pub fn spr<T: Scalar>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    ap: &mut [T],
) -> Result<()> {
    guard("spr", || {
        validate::dimension(Param::N, n)?;
        validate::increment(Param::IncX, incx)
    })?;
    if n == 0 {
        return quick_return("spr");
    }
    guard("spr", || {
        validate::vector(Param::X, x.len(), n, incx)?;
        validate::buffer(Param::Ap, ap.len(), storage::packed_len(n))
    })?;
    if alpha == T::zero() {
        return quick_return("spr");
    }

    let sx = Strided::new(n, incx);
    let mut kk = 0;
    for i in 0..n {
        let (first, len) = stored_cols(uplo, n, i);
        let xi = x[sx.index(i)];
        if !skippable(xi) {
            let row = &mut ap[kk..kk + len];
            level1::axpy(len, alpha * xi, &x[sx.window(first, len)..], incx, row, 1);
        }
        kk += len;
    }
    Ok(())
}

// ============================================================================
// SYR2 / SPR2: A := alpha * x * y^T + alpha * y * x^T + A
// ============================================================================

/// SYR2: A := alpha * x * y^T + alpha * y * x^T + A, updating only the
/// `uplo` triangle of the dense `n x n` matrix `A`.
pub fn syr2<T: Scalar>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<()> {
    guard("syr2", || {
        validate::dimension(Param::N, n)?;
        validate::lda(lda, n.max(1))?;
        validate::increment(Param::IncX, incx)?;
        validate::increment(Param::IncY, incy)
    })?;
    if n == 0 {
        return quick_return("syr2");
    }
    guard("syr2", || {
        validate::vector(Param::X, x.len(), n, incx)?;
        validate::vector(Param::Y, y.len(), n, incy)?;
        validate::buffer(Param::A, a.len(), storage::dense_len(n, n, lda))
    })?;
    if alpha == T::zero() {
        return quick_return("syr2");
    }

    let sx = Strided::new(n, incx);
    let sy = Strided::new(n, incy);
    for i in 0..n {
        let (xi, yi) = (x[sx.index(i)], y[sy.index(i)]);
        if skippable(xi) && skippable(yi) {
            continue;
        }
        let (first, len) = stored_cols(uplo, n, i);
        let row = &mut a[i * lda + first..i * lda + first + len];
        level1::axpy(len, alpha * xi, &y[sy.window(first, len)..], incy, row, 1);
        level1::axpy(len, alpha * yi, &x[sx.window(first, len)..], incx, row, 1);
    }
    Ok(())
}

/// SPR2: A := alpha * x * y^T + alpha * y * x^T + A, with the `uplo` triangle
/// of `A` packed in `ap`.
pub fn spr2<T: Scalar>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    ap: &mut [T],
) -> Result<()> {
    guard("spr2", || {
        validate::dimension(Param::N, n)?;
        validate::increment(Param::IncX, incx)?;
        validate::increment(Param::IncY, incy)
    })?;
    if n == 0 {
        return quick_return("spr2");
    }
    guard("spr2", || {
        validate::vector(Param::X, x.len(), n, incx)?;
        validate::vector(Param::Y, y.len(), n, incy)?;
        validate::buffer(Param::Ap, ap.len(), storage::packed_len(n))
    })?;
    if alpha == T::zero() {
        return quick_return("spr2");
    }

    let sx = Strided::new(n, incx);
    let sy = Strided::new(n, incy);
    let mut kk = 0;
    for i in 0..n {
        let (first, len) = stored_cols(uplo, n, i);
        let (xi, yi) = (x[sx.index(i)], y[sy.index(i)]);
        if !(skippable(xi) && skippable(yi)) {
            let row = &mut ap[kk..kk + len];
            level1::axpy(len, alpha * xi, &y[sy.window(first, len)..], incy, row, 1);
            level1::axpy(len, alpha * yi, &x[sx.window(first, len)..], incx, row, 1);
        }
        kk += len;
    }
    Ok(())
}
