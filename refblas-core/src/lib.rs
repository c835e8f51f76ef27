//! # Refblas Core
//!
//! Shared vocabulary for the refblas kernels:
//! - **Flags**: `Transpose`, `Uplo`, `Diag` with CBLAS codes and parsing.
//! - **Strides**: the signed-increment addressing rule used by every vector.
//! - **Storage**: index formulas for dense, banded and packed row-major matrices.
//! - **Validation**: the precondition checks and the `BlasError` taxonomy.

pub mod error;
pub mod layout;
pub mod scalar;
pub mod storage;
pub mod stride;
pub mod validate;

pub use error::{BlasError, ErrorKind, Param, RawFlag, Result};
pub use layout::{Diag, Transpose, Uplo};
pub use scalar::{Scalar, SKIP_ZEROS};
pub use storage::{Band, BandRow, TriBand};
pub use stride::Strided;
