use std::fmt;

use num::{traits::FloatConst, Float, FromPrimitive};

/// The scalar types that can be used as polynomial coefficients.
///
/// This is a bundle of the `num` capabilities the solver relies on:
/// float arithmetic, float constants and conversions from primitives.
/// It is blanket-implemented, so `f32` and `f64` (and any third-party
/// float that implements the `num` traits) work out of the box.
pub trait RealScalar:
    Float + FloatConst + FromPrimitive + fmt::Debug + fmt::Display + 'static
{
}

impl<T> RealScalar for T where
    T: Float + FloatConst + FromPrimitive + fmt::Debug + fmt::Display + 'static
{
}
