//! Precondition checks shared by the kernels.
//!
//! Each check returns the first violated rule as a [`BlasError`]. Kernels run
//! them in a fixed order so a bad call fails before any buffer is read.

use crate::error::{BlasError, Param, Result};
use crate::stride;

/// Largest dimension whose index arithmetic fits signed offsets.
pub const MAX_DIM: usize = isize::MAX as usize;

#[inline]
pub fn dimension(param: Param, value: usize) -> Result<()> {
    if value > MAX_DIM {
        return Err(BlasError::InvalidDimension {
            param,
            value,
            max: MAX_DIM,
        });
    }
    Ok(())
}

/// Row stride must be at least `min`.
#[inline]
pub fn lda(value: usize, min: usize) -> Result<()> {
    if value < min {
        return Err(BlasError::InvalidStride {
            param: Param::Lda,
            value,
            min,
        });
    }
    Ok(())
}

#[inline]
pub fn increment(param: Param, inc: isize) -> Result<()> {
    if inc == 0 {
        return Err(BlasError::InvalidIncrement { param });
    }
    Ok(())
}

/// Buffer must hold at least `required` elements.
#[inline]
pub fn buffer(param: Param, len: usize, required: usize) -> Result<()> {
    if len < required {
        return Err(BlasError::BufferTooShort {
            param,
            len,
            required,
        });
    }
    Ok(())
}

/// Buffer must hold a strided vector of `n` elements.
#[inline]
pub fn vector(param: Param, len: usize, n: usize, inc: isize) -> Result<()> {
    buffer(param, len, stride::required_len(n, inc))
}
