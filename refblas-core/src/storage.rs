//! Physical layouts for row-major matrices.
//!
//! Dense: element `(i, j)` lives at `i * lda + j`.
//!
//! General band (`kl` sub-diagonals, `ku` super-diagonals): each row is
//! compacted to its `kl + ku + 1` diagonals, so physical column `c` of row `i`
//! holds logical column `i - kl + c`. For a 6x6 matrix with `kl = 1, ku = 2`:
//!
//! ```text
//!   1  2  3  0  0  0          *  1  2  3
//!   4  5  6  7  0  0          4  5  6  7
//!   0  8  9 10 11  0   --->   8  9 10 11
//!   0  0 12 13 14 15         12 13 14 15
//!   0  0  0 16 17 18         16 17 18  *
//!   0  0  0  0 19 20         19 20  *  *
//! ```
//!
//! Entries marked `*` are never read or written.
//!
//! Triangular band with `k` off-diagonals: upper rows hold `A(i, i..=i+k)` with
//! the diagonal in physical column 0; lower rows hold `A(i, i-k..=i)` with the
//! diagonal in physical column `k`.
//!
//! Packed triangular: rows of the triangle back to back, no padding. Upper
//! row `i` holds `A(i, i..n)`; lower row `i` holds `A(i, 0..=i)`.

use std::ops::Range;

use crate::layout::Uplo;

#[inline(always)]
pub fn dense_index(i: usize, j: usize, lda: usize) -> usize {
    i * lda + j
}

/// Minimum buffer length of a `rows x cols` dense matrix with row stride `lda`.
///
/// Saturates at `usize::MAX` when the length does not fit, so no buffer can
/// satisfy it.
#[inline]
pub fn dense_len(rows: usize, cols: usize, lda: usize) -> usize {
    if rows == 0 || cols == 0 {
        0
    } else {
        row_offset(rows - 1, lda, cols)
    }
}

/// `row * lda + col`, saturating at `usize::MAX`.
#[inline]
fn row_offset(row: usize, lda: usize, col: usize) -> usize {
    row.checked_mul(lda)
        .and_then(|v| v.checked_add(col))
        .unwrap_or(usize::MAX)
}

/// Shape of an `m x n` general band matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub m: usize,
    pub n: usize,
    pub kl: usize,
    pub ku: usize,
}

/// The stored part of one band row, clipped at the matrix edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandRow {
    /// Physical columns of the row that hold logical entries.
    pub stored: Range<usize>,
    /// Logical column of the first stored entry.
    pub first_col: usize,
}

impl Band {
    pub fn new(m: usize, n: usize, kl: usize, ku: usize) -> Self {
        Self { m, n, kl, ku }
    }

    /// Stored diagonals per row; the minimum `lda`.
    #[inline(always)]
    pub fn width(&self) -> usize {
        self.kl + self.ku + 1
    }

    /// Window of row `i`: physical columns `max(0, kl - i) .. min(kl + ku + 1, n + kl - i)`.
    ///
    /// The upper bound uses `n`, not `min(m, n)`: rows of a wide matrix reach
    /// past column `m`.
    #[inline]
    pub fn row(&self, i: usize) -> BandRow {
        let lo = self.kl.saturating_sub(i);
        let hi = (self.n + self.kl).saturating_sub(i).min(self.width());
        BandRow {
            stored: lo..hi.max(lo),
            first_col: i.saturating_sub(self.kl),
        }
    }

    /// Physical offset of logical `(i, j)`, or `None` outside the band.
    pub fn index(&self, i: usize, j: usize, lda: usize) -> Option<usize> {
        if i >= self.m || j >= self.n || j + self.kl < i || j > i + self.ku {
            return None;
        }
        Some(i * lda + j + self.kl - i)
    }

    /// Minimum buffer length with row stride `lda`.
    pub fn required_len(&self, lda: usize) -> usize {
        let rows = self.m.min(self.n + self.kl);
        if rows == 0 || self.n == 0 {
            return 0;
        }
        let last = rows - 1;
        row_offset(last, lda, self.row(last).stored.end)
    }
}

/// Shape of an `n x n` triangular (or symmetric) band matrix with `k`
/// off-diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriBand {
    pub uplo: Uplo,
    pub n: usize,
    pub k: usize,
}

impl TriBand {
    pub fn new(uplo: Uplo, n: usize, k: usize) -> Self {
        Self { uplo, n, k }
    }

    /// Physical column of the diagonal in every row.
    #[inline(always)]
    pub fn diag_col(&self) -> usize {
        match self.uplo {
            Uplo::Upper => 0,
            Uplo::Lower => self.k,
        }
    }

    /// Physical offset of logical `(i, j)`, or `None` outside the stored band.
    pub fn index(&self, i: usize, j: usize, lda: usize) -> Option<usize> {
        if i >= self.n || j >= self.n {
            return None;
        }
        match self.uplo {
            Uplo::Upper if j >= i && j - i <= self.k => Some(i * lda + j - i),
            Uplo::Lower if j <= i && i - j <= self.k => Some(i * lda + self.k + j - i),
            _ => None,
        }
    }

    /// Minimum buffer length with row stride `lda`.
    pub fn required_len(&self, lda: usize) -> usize {
        if self.n == 0 {
            0
        } else {
            row_offset(self.n - 1, lda, self.diag_col() + 1)
        }
    }
}

/// Number of stored entries of an `n x n` packed triangle, saturating at
/// `usize::MAX`.
#[inline]
pub fn packed_len(n: usize) -> usize {
    n.checked_mul(n.saturating_add(1))
        .map_or(usize::MAX, |v| v / 2)
}

/// Offset of the first stored entry of row `i` in a packed triangle.
#[inline]
pub fn packed_row_start(uplo: Uplo, n: usize, i: usize) -> usize {
    match uplo {
        Uplo::Upper => i * (2 * n - i + 1) / 2,
        Uplo::Lower => i * (i + 1) / 2,
    }
}

/// Physical offset of logical `(i, j)` in a packed triangle, or `None` in the
/// unstored triangle.
pub fn packed_index(uplo: Uplo, n: usize, i: usize, j: usize) -> Option<usize> {
    if i >= n || j >= n {
        return None;
    }
    let start = packed_row_start(uplo, n, i);
    match uplo {
        Uplo::Upper if j >= i => Some(start + j - i),
        Uplo::Lower if j <= i => Some(start + j),
        _ => None,
    }
}
