// All elementwise math goes through this core trait, which is implemented
// generically on slices of floats of type FloatT.  The arithmetic dispatch
// layer in `ops` stages its working buffers as plain vectors and drives
// them through these kernels.

/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)

pub trait VectorMath {
    type T;

    /// Apply an elementwise operation on a vector.
    fn scalarop(&mut self, op: impl Fn(Self::T) -> Self::T) -> &mut Self;

    /// Elementwise scaling.
    fn scale(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise scaling by another vector. Produces `self[i] = self[i] * y[i]`
    fn hadamard(&mut self, y: &Self) -> &mut Self;

    /// BLAS-like shifted assignment.  Produces `self = a*x + b*self`
    fn axpby(&mut self, a: Self::T, x: &Self, b: Self::T) -> &mut Self;

    /// Dot product
    fn dot(&self, y: &Self) -> Self::T;

    /// Sum of elements.
    fn sum(&self) -> Self::T;

    /// max absolute difference (used for unit testing)
    fn norm_inf_diff(&self, b: &Self) -> Self::T;
}
