//! CBLAS-style transpose, triangle and diagonal flags.
//!
//! Matrices are always row-major in refblas. The discriminants are the CBLAS
//! integer codes so flags can cross an FFI or serialization boundary as
//! plain integers; `TryFrom<u32>` and `TryFrom<char>` are where invalid flag
//! values get rejected.

use crate::error::{BlasError, RawFlag};

/// Transpose operation for matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Transpose {
    /// No transpose.
    #[default]
    NoTrans = 111,
    /// Transpose.
    Trans = 112,
    /// Conjugate transpose. Identical to `Trans` for real data.
    ConjTrans = 113,
}

impl Transpose {
    /// True for `Trans` and `ConjTrans`.
    #[inline(always)]
    pub fn is_trans(self) -> bool {
        !matches!(self, Transpose::NoTrans)
    }

    /// The transpose request seen when a row-major buffer is read as
    /// column-major.
    #[inline(always)]
    pub fn flip(self) -> Transpose {
        if self.is_trans() {
            Transpose::NoTrans
        } else {
            Transpose::Trans
        }
    }

    /// Fortran BLAS character for this flag.
    pub fn to_char(self) -> char {
        match self {
            Transpose::NoTrans => 'N',
            Transpose::Trans => 'T',
            Transpose::ConjTrans => 'C',
        }
    }
}

impl TryFrom<u32> for Transpose {
    type Error = BlasError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            111 => Ok(Transpose::NoTrans),
            112 => Ok(Transpose::Trans),
            113 => Ok(Transpose::ConjTrans),
            _ => Err(BlasError::InvalidTranspose(RawFlag::Code(code))),
        }
    }
}

impl TryFrom<char> for Transpose {
    type Error = BlasError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Transpose::NoTrans),
            'T' => Ok(Transpose::Trans),
            'C' => Ok(Transpose::ConjTrans),
            _ => Err(BlasError::InvalidTranspose(RawFlag::Char(c))),
        }
    }
}

/// BLAS triangle specifier (upper/lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Uplo {
    #[default]
    Upper = 121,
    Lower = 122,
}

impl Uplo {
    /// The other triangle. A row-major upper triangle read column-major is
    /// a lower triangle, and vice versa.
    #[inline(always)]
    pub fn flip(self) -> Uplo {
        match self {
            Uplo::Upper => Uplo::Lower,
            Uplo::Lower => Uplo::Upper,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Uplo::Upper => 'U',
            Uplo::Lower => 'L',
        }
    }
}

impl TryFrom<u32> for Uplo {
    type Error = BlasError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            121 => Ok(Uplo::Upper),
            122 => Ok(Uplo::Lower),
            _ => Err(BlasError::InvalidUplo(RawFlag::Code(code))),
        }
    }
}

impl TryFrom<char> for Uplo {
    type Error = BlasError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'U' => Ok(Uplo::Upper),
            'L' => Ok(Uplo::Lower),
            _ => Err(BlasError::InvalidUplo(RawFlag::Char(c))),
        }
    }
}

/// BLAS diagonal specifier (unit/non-unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Diag {
    #[default]
    NonUnit = 131,
    /// Diagonal entries are taken as 1 and never read.
    Unit = 132,
}

impl Diag {
    #[inline(always)]
    pub fn is_unit(self) -> bool {
        self == Diag::Unit
    }

    pub fn to_char(self) -> char {
        match self {
            Diag::NonUnit => 'N',
            Diag::Unit => 'U',
        }
    }
}

impl TryFrom<u32> for Diag {
    type Error = BlasError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            131 => Ok(Diag::NonUnit),
            132 => Ok(Diag::Unit),
            _ => Err(BlasError::InvalidDiag(RawFlag::Code(code))),
        }
    }
}

impl TryFrom<char> for Diag {
    type Error = BlasError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Diag::NonUnit),
            'U' => Ok(Diag::Unit),
            _ => Err(BlasError::InvalidDiag(RawFlag::Char(c))),
        }
    }
}
