#![allow(non_snake_case)]

use crate::algebra::*;

/// Elementwise sum `A + B` of two equal shaped matrices.
pub fn add<T, M>(A: &M, B: &M) -> Result<M, MatrixError>
where
    T: FloatT,
    M: MatrixStorage<T>,
{
    if A.size() != B.size() {
        return Err(MatrixError::IncompatibleDimension);
    }
    let mut out = A.data().to_vec();
    out.axpby(T::one(), B.data(), T::one());
    Ok(M::new(A.size(), out))
}

/// Elementwise difference `A - B` of two equal shaped matrices.
pub fn sub<T, M>(A: &M, B: &M) -> Result<M, MatrixError>
where
    T: FloatT,
    M: MatrixStorage<T>,
{
    if A.size() != B.size() {
        return Err(MatrixError::IncompatibleDimension);
    }
    let mut out = A.data().to_vec();
    out.axpby(-T::one(), B.data(), T::one());
    Ok(M::new(A.size(), out))
}

/// Elementwise (Hadamard) product of two equal shaped matrices.
pub fn hadamard<T, M>(A: &M, B: &M) -> Result<M, MatrixError>
where
    T: FloatT,
    M: MatrixStorage<T>,
{
    if A.size() != B.size() {
        return Err(MatrixError::IncompatibleDimension);
    }
    let mut out = A.data().to_vec();
    out.hadamard(B.data());
    Ok(M::new(A.size(), out))
}

/// Scale every element by `c`.
pub fn scalar_mul<T, M>(A: &M, c: T) -> M
where
    T: FloatT,
    M: MatrixStorage<T>,
{
    let mut out = A.data().to_vec();
    out.scale(c);
    M::new(A.size(), out)
}

/// Divide every element by `c`.
pub fn scalar_div<T, M>(A: &M, c: T) -> M
where
    T: FloatT,
    M: MatrixStorage<T>,
{
    let mut out = A.data().to_vec();
    out.scalarop(|x| x / c);
    M::new(A.size(), out)
}

/// Raise every element to the power `e`.
pub fn pow<T, M>(A: &M, e: T) -> M
where
    T: FloatT,
    M: MatrixStorage<T>,
{
    let mut out = A.data().to_vec();
    out.scalarop(|x| x.powf(e));
    M::new(A.size(), out)
}

/// Elementwise natural exponential.
pub fn exp<T, M>(A: &M) -> M
where
    T: FloatT,
    M: MatrixStorage<T>,
{
    let mut out = A.data().to_vec();
    out.scalarop(T::exp);
    M::new(A.size(), out)
}
