// Kernels keep the CBLAS argument lists; index loops mirror the storage formulas.
#![allow(clippy::too_many_arguments, clippy::needless_range_loop)]

//! # refblas
//!
//! Reference Level 2 BLAS for row-major matrices, generic over `f32` and
//! `f64`. Every kernel validates its arguments up front and returns a
//! [`BlasError`] instead of panicking.
//!
//! ## Kernels
//!
//! - **General**: `gemv`, `gbmv`, `ger`
//! - **Symmetric**: `symv`, `sbmv`, `spmv`, `syr`, `syr2`, `spr`, `spr2`
//! - **Triangular**: `trmv`, `trsv`, `tbmv`, `tbsv`, `tpmv`, `tpsv`
//!
//! ## Storage
//!
//! Dense matrices are addressed `a[i * lda + j]`. Band matrices store each
//! row's band contiguously, and packed triangles store the triangle row by
//! row. See [`refblas_core::storage`].
//!
//! ## Example
//!
//! ```
//! use refblas_blas::{gemv, trsv, Diag, Transpose, Uplo};
//!
//! // y := A * x for A = [[1, 2], [3, 4]]
//! let a = [1.0f64, 2.0, 3.0, 4.0];
//! let x = [1.0, 1.0];
//! let mut y = [0.0; 2];
//! gemv(Transpose::NoTrans, 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1).unwrap();
//! assert_eq!(y, [3.0, 7.0]);
//!
//! // Solve L * x = b for L = [[2, 0], [1, 3]]
//! let l = [2.0f64, 0.0, 1.0, 3.0];
//! let mut b = [4.0, 11.0];
//! trsv(Uplo::Lower, Transpose::NoTrans, Diag::NonUnit, 2, &l, 2, &mut b, 1).unwrap();
//! assert_eq!(b, [2.0, 3.0]);
//! ```

pub mod level1;
pub mod level2;
pub mod ops;

pub use refblas_core::{BlasError, Diag, ErrorKind, Param, Result, Scalar, Transpose, Uplo};

pub use level2::{
    gbmv, gemv, ger, sbmv, spmv, spr, spr2, symv, syr, syr2, tbmv, tbsv, tpmv, tpsv, trmv, trsv,
};
pub use ops::{Family, Level2Op};
