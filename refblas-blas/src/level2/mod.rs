//! BLAS Level 2: Matrix-vector operations on row-major storage.
//!
//! Every kernel validates its arguments before reading any buffer, returns
//! early on degenerate input, then runs the textbook traversal. Vectors use
//! signed increments ([`refblas_core::Strided`]).
//!
//! - [`general`]: `gemv`, `gbmv`, `ger`
//! - [`symmetric`]: `symv`, `sbmv`, `spmv`, `syr`, `syr2`, `spr`, `spr2`
//! - [`triangular`]: `trmv`, `trsv`, `tbmv`, `tbsv`
//! - [`packed`]: `tpmv`, `tpsv`

use log::{debug, trace};
use refblas_core::Result;

pub mod general;
pub mod packed;
pub mod symmetric;
pub mod triangular;

pub use general::{gbmv, gemv, ger};
pub use packed::{tpmv, tpsv};
pub use symmetric::{sbmv, spmv, spr, spr2, symv, syr, syr2};
pub use triangular::{tbmv, tbsv, trmv, trsv};

/// Run a group of argument checks, logging the rejection if one fails.
#[inline]
pub(crate) fn guard<F>(op: &'static str, checks: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    checks().map_err(|err| {
        debug!("{op}: rejected call: {err}");
        err
    })
}

/// Successful no-op on degenerate input.
#[inline]
pub(crate) fn quick_return(op: &'static str) -> Result<()> {
    trace!("{op}: quick return");
    Ok(())
}
