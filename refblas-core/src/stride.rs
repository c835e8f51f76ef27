//! Strided vector addressing.
//!
//! A logical vector of length `len` with increment `inc` maps element `i` to
//! `start + i * inc`. For `inc > 0` the start is 0. For `inc < 0` the start is
//! `(len - 1) * |inc|`, so logical element 0 sits at the physical end of the
//! window and the traversal walks backwards through memory.

/// Start offset and increment of a strided vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strided {
    start: usize,
    inc: isize,
}

impl Strided {
    /// Addressing for a vector of `len` logical elements.
    ///
    /// `inc` must be non-zero; validation rejects zero increments first.
    /// Kernels build one only after the buffer check has passed, so the start
    /// offset lies inside the buffer.
    #[inline]
    pub fn new(len: usize, inc: isize) -> Self {
        let start = if inc < 0 && len > 0 {
            (len - 1).saturating_mul(inc.unsigned_abs())
        } else {
            0
        };
        Self { start, inc }
    }

    /// Physical offset of logical element 0.
    #[inline(always)]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline(always)]
    pub fn inc(&self) -> isize {
        self.inc
    }

    /// Physical offset of logical element `i`.
    #[inline(always)]
    pub fn index(&self, i: usize) -> usize {
        if self.inc >= 0 {
            self.start + i * self.inc as usize
        } else {
            self.start - i * self.inc.unsigned_abs()
        }
    }

    /// Lowest physical offset touched by logical elements `first..first + len`.
    ///
    /// Slicing the buffer at this offset and applying [`Strided::new`] with the
    /// same increment to the sub-slice addresses exactly those elements, in
    /// the same logical order. `len` must be non-zero.
    #[inline]
    pub fn window(&self, first: usize, len: usize) -> usize {
        debug_assert!(len > 0);
        if self.inc > 0 {
            self.index(first)
        } else {
            self.index(first + len - 1)
        }
    }
}

/// Minimum buffer length for `len` elements at increment `inc`, saturating at
/// `usize::MAX`.
#[inline]
pub fn required_len(len: usize, inc: isize) -> usize {
    if len == 0 {
        0
    } else {
        (len - 1)
            .checked_mul(inc.unsigned_abs())
            .and_then(|span| span.checked_add(1))
            .unwrap_or(usize::MAX)
    }
}
