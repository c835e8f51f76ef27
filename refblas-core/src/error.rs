//! Failure taxonomy shared by every kernel.

use std::fmt;

/// Kernel parameter named in a failure payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    M,
    N,
    K,
    Kl,
    Ku,
    Lda,
    IncX,
    IncY,
    A,
    Ap,
    X,
    Y,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Param::M => "m",
            Param::N => "n",
            Param::K => "k",
            Param::Kl => "kl",
            Param::Ku => "ku",
            Param::Lda => "lda",
            Param::IncX => "incx",
            Param::IncY => "incy",
            Param::A => "a",
            Param::Ap => "ap",
            Param::X => "x",
            Param::Y => "y",
        };
        f.write_str(name)
    }
}

/// A flag value as it arrived from outside the type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawFlag {
    /// CBLAS enum code.
    Code(u32),
    /// Fortran-style character.
    Char(char),
}

impl fmt::Display for RawFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawFlag::Code(c) => write!(f, "code {c}"),
            RawFlag::Char(c) => write!(f, "'{c}'"),
        }
    }
}

/// Errors raised by argument validation, before any buffer is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlasError {
    #[error("illegal transpose flag: {0}")]
    InvalidTranspose(RawFlag),

    #[error("illegal triangle flag: {0}")]
    InvalidUplo(RawFlag),

    #[error("illegal diagonal flag: {0}")]
    InvalidDiag(RawFlag),

    /// Dimension too large for signed stride arithmetic.
    #[error("{param} = {value} exceeds the maximum dimension {max}")]
    InvalidDimension {
        param: Param,
        value: usize,
        max: usize,
    },

    /// Row stride smaller than the layout requires.
    #[error("{param} = {value} must be at least {min}")]
    InvalidStride {
        param: Param,
        value: usize,
        min: usize,
    },

    #[error("{param} must be non-zero")]
    InvalidIncrement { param: Param },

    #[error("buffer {param} has length {len}, needs at least {required}")]
    BufferTooShort {
        param: Param,
        len: usize,
        required: usize,
    },

    #[error("operation {op} is not implemented")]
    Unimplemented { op: String },
}

/// Fieldless failure category, for callers that only branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidTranspose,
    InvalidUplo,
    InvalidDiag,
    InvalidDimension,
    InvalidStride,
    InvalidIncrement,
    BufferTooShort,
    Unimplemented,
}

impl BlasError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlasError::InvalidTranspose(_) => ErrorKind::InvalidTranspose,
            BlasError::InvalidUplo(_) => ErrorKind::InvalidUplo,
            BlasError::InvalidDiag(_) => ErrorKind::InvalidDiag,
            BlasError::InvalidDimension { .. } => ErrorKind::InvalidDimension,
            BlasError::InvalidStride { .. } => ErrorKind::InvalidStride,
            BlasError::InvalidIncrement { .. } => ErrorKind::InvalidIncrement,
            BlasError::BufferTooShort { .. } => ErrorKind::BufferTooShort,
            BlasError::Unimplemented { .. } => ErrorKind::Unimplemented,
        }
    }

    /// The parameter a failure refers to, when there is one.
    pub fn param(&self) -> Option<Param> {
        match self {
            BlasError::InvalidDimension { param, .. }
            | BlasError::InvalidStride { param, .. }
            | BlasError::InvalidIncrement { param }
            | BlasError::BufferTooShort { param, .. } => Some(*param),
            _ => None,
        }
    }
}

/// Result type for kernel calls.
pub type Result<T> = std::result::Result<T, BlasError>;
