use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

use crate::algebra::dense::BlasFloatT;

/// Core bounds for internal floating point values.
///
/// This trait defines a subset of bounds for `FloatT`, which is preferred
/// throughout for use in matrix and vector operations.  `FloatT` further
/// restricts to the f32/f64 types supported by BLAS/LAPACK.
pub trait CoreFloatT:
    'static
    + Send
    + Float
    + FloatConst
    + NumAssign
    + Default
    + FromPrimitive
    + Display
    + LowerExp
    + Debug
    + Sized
{
}

impl<T> CoreFloatT for T where
    T: 'static
        + Send
        + Float
        + FloatConst
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}

/// Main trait for floating point types used throughout the crate.
///
/// All numeric values are represented internally on values implementing
/// `FloatT`, with implementations provided only for the f32 and f64 native
/// types since those are the precisions the wrapped BLAS/LAPACK routines
/// support.  No dispatch exists for any other scalar type.
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its
/// constituent trait bounds.
pub trait FloatT: CoreFloatT + BlasFloatT {}

impl<T> FloatT for T where T: CoreFloatT + BlasFloatT {}
