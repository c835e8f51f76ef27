//! BLAS Level 1 building blocks used by the Level 2 kernels.
//!
//! Increments are signed and follow the [`Strided`] rule: a negative
//! increment walks the vector from the physical end of its window. These
//! routines do not validate; callers check lengths and increments first.

use refblas_core::scalar::skippable;
use refblas_core::{Scalar, Strided};

// ============================================================================
// SCAL: x = alpha * x
// ============================================================================

/// x := alpha * x
///
/// `alpha == 0` stores exact zeros, so NaN and Inf in `x` do not survive.
#[inline]
pub fn scal<T: Scalar>(n: usize, alpha: T, x: &mut [T], incx: isize) {
    if n == 0 || alpha == T::one() {
        return;
    }
    if incx == 1 {
        let x = &mut x[..n];
        if alpha == T::zero() {
            x.fill(T::zero());
        } else {
            x.iter_mut().for_each(|v| *v *= alpha);
        }
        return;
    }
    let sx = Strided::new(n, incx);
    for i in 0..n {
        let ix = sx.index(i);
        x[ix] = if alpha == T::zero() {
            T::zero()
        } else {
            x[ix] * alpha
        };
    }
}

// ============================================================================
// DOT: inner product
// ============================================================================

/// result = x^T * y
#[inline]
pub fn dot<T: Scalar>(n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> T {
    if n == 0 {
        return T::zero();
    }
    if incx == 1 && incy == 1 {
        return x[..n]
            .iter()
            .zip(&y[..n])
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b);
    }
    let sx = Strided::new(n, incx);
    let sy = Strided::new(n, incy);
    let mut sum = T::zero();
    for i in 0..n {
        sum += x[sx.index(i)] * y[sy.index(i)];
    }
    sum
}

// ============================================================================
// AXPY: y = alpha * x + y
// ============================================================================

/// y := alpha * x + y
///
/// A zero `alpha` is a no-op under the `zero-skip` feature. Without it the
/// products are formed, so NaN and Inf in `x` reach `y`.
#[inline]
pub fn axpy<T: Scalar>(n: usize, alpha: T, x: &[T], incx: isize, y: &mut [T], incy: isize) {
    if n == 0 || skippable(alpha) {
        return;
    }
    if incx == 1 && incy == 1 {
        for (yi, &xi) in y[..n].iter_mut().zip(&x[..n]) {
            *yi += alpha * xi;
        }
        return;
    }
    let sx = Strided::new(n, incx);
    let sy = Strided::new(n, incy);
    for i in 0..n {
        y[sy.index(i)] += alpha * x[sx.index(i)];
    }
}
