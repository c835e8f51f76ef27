//! Element types the kernels operate on.

use std::fmt::Debug;

use num_traits::{Float, NumAssign};

/// Real floating-point element: `f32` or `f64`.
pub trait Scalar: Float + NumAssign + Debug + Send + Sync + 'static {}

impl Scalar for f32 {}
impl Scalar for f64 {}

/// Whether kernels skip work for zero vector entries (the `zero-skip` feature).
pub const SKIP_ZEROS: bool = cfg!(feature = "zero-skip");

/// True when `v` may be skipped as a zero multiplier.
#[inline(always)]
pub fn skippable<T: Scalar>(v: T) -> bool {
    SKIP_ZEROS && v == T::zero()
}
