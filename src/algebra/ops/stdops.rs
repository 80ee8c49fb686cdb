use crate::algebra::ops;
use crate::algebra::{CowMatrix, FloatT, Matrix};
use std::ops::{Add, Div, Mul, Neg, Sub};

// Operator sugar over the fallible functions in `ops`, implemented
// identically for both storage variants.  Shape violations panic with the
// underlying error message; the free functions are the primary API when
// the caller wants to handle them.

macro_rules! impl_matrix_stdops {
    ($MAT:ident) => {
        impl<T: FloatT> Add for &$MAT<T> {
            type Output = $MAT<T>;
            fn add(self, rhs: Self) -> $MAT<T> {
                ops::add(self, rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl<T: FloatT> Sub for &$MAT<T> {
            type Output = $MAT<T>;
            fn sub(self, rhs: Self) -> $MAT<T> {
                ops::sub(self, rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl<T: FloatT> Mul for &$MAT<T> {
            type Output = $MAT<T>;
            fn mul(self, rhs: Self) -> $MAT<T> {
                ops::matmul(self, rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl<T: FloatT> Div for &$MAT<T> {
            type Output = $MAT<T>;
            fn div(self, rhs: Self) -> $MAT<T> {
                ops::matdiv(self, rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl<T: FloatT> Mul<T> for &$MAT<T> {
            type Output = $MAT<T>;
            fn mul(self, c: T) -> $MAT<T> {
                ops::scalar_mul(self, c)
            }
        }

        impl<T: FloatT> Div<T> for &$MAT<T> {
            type Output = $MAT<T>;
            fn div(self, c: T) -> $MAT<T> {
                ops::scalar_div(self, c)
            }
        }

        impl<T: FloatT> Neg for &$MAT<T> {
            type Output = $MAT<T>;
            fn neg(self) -> $MAT<T> {
                ops::scalar_mul(self, -T::one())
            }
        }

        impl<T: FloatT> Add for $MAT<T> {
            type Output = $MAT<T>;
            fn add(self, rhs: Self) -> $MAT<T> {
                &self + &rhs
            }
        }

        impl<T: FloatT> Sub for $MAT<T> {
            type Output = $MAT<T>;
            fn sub(self, rhs: Self) -> $MAT<T> {
                &self - &rhs
            }
        }

        impl<T: FloatT> Mul for $MAT<T> {
            type Output = $MAT<T>;
            fn mul(self, rhs: Self) -> $MAT<T> {
                &self * &rhs
            }
        }

        impl<T: FloatT> Div for $MAT<T> {
            type Output = $MAT<T>;
            fn div(self, rhs: Self) -> $MAT<T> {
                &self / &rhs
            }
        }

        impl<T: FloatT> Neg for $MAT<T> {
            type Output = $MAT<T>;
            fn neg(self) -> $MAT<T> {
                -&self
            }
        }
    };
}

impl_matrix_stdops!(Matrix);
impl_matrix_stdops!(CowMatrix);
