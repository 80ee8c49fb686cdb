#![allow(non_snake_case)]

use crate::algebra::ops::matmul;
use crate::algebra::*;
use num_traits::ToPrimitive;

pub(crate) struct LuFactor<T> {
    // LAPACK workspace (allocated vecs only)
    ipiv: Vec<i32>,
    work: Vec<T>,
}

impl<T> LuFactor<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        // work must hold at least 1 element because the required work
        // size is written into the first element on a sizing query
        let ipiv = vec![];
        let work = vec![T::one()];
        Self { ipiv, work }
    }

    // In-place LU factorization of a square row-major buffer via ?getrf.
    // The buffer reads as the transpose under LAPACK's column-major
    // convention; determinant and inverse are transpose invariant, so
    // callers never need to reorder.
    pub fn factor(&mut self, a: &mut [T], n: usize) -> Result<(), MatrixError> {
        debug_assert!(a.len() == n * n && n > 0);
        let ni: i32 = n.try_into().unwrap();
        self.ipiv.resize(n, 0);
        let info = &mut 0_i32;

        T::xgetrf(ni, ni, a, ni, &mut self.ipiv, info);

        if *info != 0 {
            return Err(MatrixError::Singular(*info));
        }
        Ok(())
    }

    // Inverse from the factored buffer, in place, via ?getri with a
    // workspace sizing query first.
    pub fn invert(&mut self, a: &mut [T], n: usize) -> Result<(), MatrixError> {
        let ni: i32 = n.try_into().unwrap();
        let info = &mut 0_i32;

        T::xgetri(ni, a, ni, &self.ipiv, &mut self.work, -1, info);
        if *info != 0 {
            return Err(MatrixError::Singular(*info));
        }
        let lwork = self.work[0].to_i32().unwrap();
        self.work.resize(lwork as usize, T::zero());

        T::xgetri(ni, a, ni, &self.ipiv, &mut self.work, lwork, info);

        if *info != 0 {
            return Err(MatrixError::Singular(*info));
        }
        Ok(())
    }

    // Determinant from the factored buffer: the product of the diagonal,
    // with the sign flipped once per pivot away from its identity
    // position.  LAPACK pivot indices are one-based.
    pub fn det(&self, a: &[T], n: usize) -> T {
        let mut det = T::one();
        for i in 0..n {
            det *= a[i * n + i];
            if self.ipiv[i] != (i + 1) as i32 {
                det = -det;
            }
        }
        det
    }
}

/// Inverse of a square matrix via native LU factorization.
///
/// The operand buffer is copied and factored in place (`?getrf`), then
/// inverted from the factors (`?getri`).  A singular operand is a
/// recoverable [`MatrixError::Singular`] error.
pub fn inverse<T, M>(A: &M) -> Result<M, MatrixError>
where
    T: FloatT,
    M: MatrixStorage<T>,
{
    if !A.is_square() {
        return Err(MatrixError::NotSquare);
    }
    let n = A.nrows();
    let mut buf = A.data().to_vec();
    if n > 0 {
        let mut lu = LuFactor::new();
        lu.factor(&mut buf, n)?;
        lu.invert(&mut buf, n)?;
    }
    Ok(M::new((n, n), buf))
}

/// Determinant of a square matrix via native LU factorization.
///
/// Computed as the product of the diagonal of the factored matrix with
/// pivot-permutation sign tracking.  A singular operand is the same
/// recoverable [`MatrixError::Singular`] error as for
/// [`inverse`](crate::algebra::ops::inverse).
pub fn det<T, M>(A: &M) -> Result<T, MatrixError>
where
    T: FloatT,
    M: DenseStorage<T>,
{
    if !A.is_square() {
        return Err(MatrixError::NotSquare);
    }
    let n = A.nrows();
    if n == 0 {
        // empty product convention
        return Ok(T::one());
    }
    let mut buf = A.data().to_vec();
    let mut lu = LuFactor::new();
    lu.factor(&mut buf, n)?;
    Ok(lu.det(&buf, n))
}

/// Matrix division `A / B`, computed as `A * B⁻¹`.
pub fn matdiv<T, M>(A: &M, B: &M) -> Result<M, MatrixError>
where
    T: FloatT,
    M: MatrixStorage<T>,
{
    if !B.is_square() {
        return Err(MatrixError::NotSquare);
    }
    if A.ncols() != B.nrows() {
        return Err(MatrixError::IncompatibleDimension);
    }
    let Binv = inverse(B)?;
    matmul(A, &Binv)
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! generate_test_inverse {
        ($fxx:ty, $MAT:ident, $test_name:ident, $tol:expr) => {
            #[test]
            fn $test_name() {
                let A = $MAT::<$fxx>::from(&[
                    [1., 2.], //
                    [3., 4.], //
                ]);

                let Ainv = inverse(&A).unwrap();
                let X = $MAT::<$fxx>::from(&[
                    [-2., 1.],    //
                    [1.5, -0.5], //
                ]);
                assert!(Ainv.data().norm_inf_diff(X.data()) < $tol);

                // A * A⁻¹ recovers the identity within tolerance
                let I = matmul(&A, &Ainv).unwrap();
                assert!(I.data().norm_inf_diff($MAT::identity(2).data()) < $tol);
            }
        };
    }

    generate_test_inverse!(f32, Matrix, test_inverse_f32, 1e-4);
    generate_test_inverse!(f64, Matrix, test_inverse_f64, 1e-12);
    generate_test_inverse!(f64, CowMatrix, test_inverse_cow, 1e-12);

    macro_rules! generate_test_det {
        ($fxx:ty, $test_name:ident, $tol:expr) => {
            #[test]
            fn $test_name() {
                let A = Matrix::<$fxx>::from(&[
                    [1., 2.], //
                    [3., 4.], //
                ]);
                assert!((det(&A).unwrap() - (-2.)).abs() < $tol);

                let B = Matrix::<$fxx>::from(&[
                    [3., 2., 4.], //
                    [2., 0., 2.], //
                    [4., 2., 3.], //
                ]);
                assert!((det(&B).unwrap() - 8.).abs() < $tol);
            }
        };
    }

    generate_test_det!(f32, test_det_f32, 1e-4);
    generate_test_det!(f64, test_det_f64, 1e-12);

    #[test]
    fn test_identity_inverse() {
        for n in 1..=3 {
            let I = Matrix::<f64>::identity(n);
            assert_eq!(inverse(&I).unwrap(), I);
            assert_eq!(det(&I).unwrap(), 1.);
        }
    }

    #[test]
    fn test_singular() {
        // zero row makes the matrix exactly singular
        let A = Matrix::<f64>::from(&[
            [1., 2.], //
            [0., 0.], //
        ]);
        assert!(matches!(inverse(&A), Err(MatrixError::Singular(_))));
        assert!(matches!(det(&A), Err(MatrixError::Singular(_))));
    }

    #[test]
    fn test_not_square() {
        let A = Matrix::<f64>::zeros((2, 3));
        assert_eq!(inverse(&A), Err(MatrixError::NotSquare));
        assert_eq!(det(&A), Err(MatrixError::NotSquare));
    }

    #[test]
    fn test_matdiv() {
        let A = Matrix::<f64>::from(&[
            [19., 22.], //
            [43., 50.], //
        ]);
        let B = Matrix::<f64>::from(&[
            [5., 6.], //
            [7., 8.], //
        ]);

        // A = X * B, so A / B recovers X
        let X = matdiv(&A, &B).unwrap();
        let expected = Matrix::from(&[[1., 2.], [3., 4.]]);
        assert!(X.data().norm_inf_diff(expected.data()) < 1e-10);

        let C = Matrix::<f64>::zeros((2, 3));
        assert_eq!(matdiv(&A, &C), Err(MatrixError::NotSquare));

        let D = Matrix::<f64>::zeros((3, 3));
        assert_eq!(matdiv(&A, &D), Err(MatrixError::IncompatibleDimension));
    }

    #[test]
    fn test_empty_inverse_and_det() {
        let A = Matrix::<f64>::zeros((0, 0));
        assert_eq!(inverse(&A).unwrap().size(), (0, 0));
        assert_eq!(det(&A).unwrap(), 1.);
    }
}
