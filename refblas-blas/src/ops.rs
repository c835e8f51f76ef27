//! Level 2 operation names.
//!
//! Maps the textual BLAS routine names, with or without a precision prefix
//! (`gemv`, `sgemv`, `dgemv`), to the kernels this crate provides. Routines
//! that only exist for complex data, and names that are not Level 2 routines
//! at all, are reported as [`BlasError::Unimplemented`].

use std::fmt;
use std::str::FromStr;

use log::debug;
use refblas_core::{BlasError, Result};

/// How an operation stores its matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Full `m x n` or `n x n` matrix with a row stride.
    Dense,
    /// Band rows of `kl + ku + 1` (or `k + 1`) stored entries.
    Banded,
    /// Triangle packed row by row with no stride.
    Packed,
}

/// A real Level 2 kernel provided by [`crate::level2`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level2Op {
    Gemv,
    Gbmv,
    Ger,
    Symv,
    Sbmv,
    Spmv,
    Syr,
    Syr2,
    Spr,
    Spr2,
    Trmv,
    Trsv,
    Tbmv,
    Tbsv,
    Tpmv,
    Tpsv,
}

/// Level 2 routines defined only for complex Hermitian matrices.
const HERMITIAN: [&str; 7] = ["hemv", "hbmv", "hpmv", "her", "her2", "hpr", "hpr2"];

impl Level2Op {
    pub const ALL: [Level2Op; 16] = [
        Level2Op::Gemv,
        Level2Op::Gbmv,
        Level2Op::Ger,
        Level2Op::Symv,
        Level2Op::Sbmv,
        Level2Op::Spmv,
        Level2Op::Syr,
        Level2Op::Syr2,
        Level2Op::Spr,
        Level2Op::Spr2,
        Level2Op::Trmv,
        Level2Op::Trsv,
        Level2Op::Tbmv,
        Level2Op::Tbsv,
        Level2Op::Tpmv,
        Level2Op::Tpsv,
    ];

    /// Routine name without a precision prefix.
    pub fn name(self) -> &'static str {
        match self {
            Level2Op::Gemv => "gemv",
            Level2Op::Gbmv => "gbmv",
            Level2Op::Ger => "ger",
            Level2Op::Symv => "symv",
            Level2Op::Sbmv => "sbmv",
            Level2Op::Spmv => "spmv",
            Level2Op::Syr => "syr",
            Level2Op::Syr2 => "syr2",
            Level2Op::Spr => "spr",
            Level2Op::Spr2 => "spr2",
            Level2Op::Trmv => "trmv",
            Level2Op::Trsv => "trsv",
            Level2Op::Tbmv => "tbmv",
            Level2Op::Tbsv => "tbsv",
            Level2Op::Tpmv => "tpmv",
            Level2Op::Tpsv => "tpsv",
        }
    }

    /// Parse a routine name. Accepts an optional `s`/`d` prefix and any case.
    pub fn from_name(name: &str) -> Result<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let found = Self::lookup(&lower).or_else(|| {
            lower
                .strip_prefix(['s', 'd'])
                .and_then(Self::lookup)
        });
        found.ok_or_else(|| {
            let stem = lower.strip_prefix(['c', 'z']).unwrap_or(&lower);
            if HERMITIAN.contains(&stem) {
                debug!("{name}: complex-only routine");
            }
            BlasError::Unimplemented {
                op: name.to_string(),
            }
        })
    }

    fn lookup(stem: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == stem)
    }

    pub fn family(self) -> Family {
        match self {
            Level2Op::Gemv
            | Level2Op::Ger
            | Level2Op::Symv
            | Level2Op::Syr
            | Level2Op::Syr2
            | Level2Op::Trmv
            | Level2Op::Trsv => Family::Dense,
            Level2Op::Gbmv | Level2Op::Sbmv | Level2Op::Tbmv | Level2Op::Tbsv => Family::Banded,
            Level2Op::Spmv
            | Level2Op::Spr
            | Level2Op::Spr2
            | Level2Op::Tpmv
            | Level2Op::Tpsv => Family::Packed,
        }
    }

    /// Whether the operation solves a triangular system.
    pub fn is_solve(self) -> bool {
        matches!(self, Level2Op::Trsv | Level2Op::Tbsv | Level2Op::Tpsv)
    }

    /// Whether the operation updates the matrix rather than a vector.
    pub fn is_update(self) -> bool {
        matches!(
            self,
            Level2Op::Ger | Level2Op::Syr | Level2Op::Syr2 | Level2Op::Spr | Level2Op::Spr2
        )
    }
}

impl fmt::Display for Level2Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level2Op {
    type Err = BlasError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
