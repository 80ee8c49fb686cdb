#![allow(non_snake_case)]

use crate::algebra::*;

/// Matrix product `A * B` via a single native `?gemm` call.
///
/// Requires `A.ncols() == B.nrows()`; the result has shape
/// `(A.nrows(), B.ncols())`.
pub fn matmul<T, M>(A: &M, B: &M) -> Result<M, MatrixError>
where
    T: FloatT,
    M: MatrixStorage<T>,
{
    if A.ncols() != B.nrows() {
        return Err(MatrixError::IncompatibleDimension);
    }

    let (m, k) = A.size();
    let p = B.ncols();
    let mut out = vec![T::zero(); m * p];

    if m > 0 && p > 0 && k > 0 {
        // BLAS is column major, and a row-major buffer read as column
        // major is the transpose.  Computing Cᵀ = Bᵀ Aᵀ therefore lands
        // the product row-major in `out` with no copies.
        let mi: i32 = m.try_into().unwrap();
        let ki: i32 = k.try_into().unwrap();
        let pi: i32 = p.try_into().unwrap();

        #[rustfmt::skip]
        T::xgemm(b'N', b'N', pi, mi, ki, T::one(), B.data(), pi, A.data(), ki, T::zero(), &mut out, pi);
    }

    Ok(M::new((m, p), out))
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! generate_test_gemm {
        ($fxx:ty, $MAT:ident, $test_name:ident) => {
            #[test]
            fn $test_name() {
                let A = $MAT::<$fxx>::from(&[
                    [1., 2.], //
                    [3., 4.], //
                ]);
                let B = $MAT::<$fxx>::from(&[
                    [5., 6.], //
                    [7., 8.], //
                ]);

                let C = matmul(&A, &B).unwrap();
                assert_eq!(C, $MAT::from(&[[19., 22.], [43., 50.]]));
            }
        };
    }

    generate_test_gemm!(f32, Matrix, test_gemm_f32);
    generate_test_gemm!(f64, Matrix, test_gemm_f64);
    generate_test_gemm!(f64, CowMatrix, test_gemm_cow);

    #[test]
    fn test_gemm_nonsquare() {
        // (2x3) * (3x4) = (2x4)
        let A = Matrix::<f64>::from(&[
            [1., 2., 3.], //
            [4., 5., 6.], //
        ]);
        let B = Matrix::<f64>::from(&[
            [1., 2., 3., 4.],    //
            [5., 6., 7., 8.],    //
            [9., 10., 11., 12.], //
        ]);

        let C = matmul(&A, &B).unwrap();
        assert_eq!(C.size(), (2, 4));
        assert_eq!(
            C,
            Matrix::from(&[
                [38., 44., 50., 56.],   //
                [83., 98., 113., 128.], //
            ])
        );
    }

    #[test]
    fn test_gemm_dimension_mismatch() {
        let A = Matrix::<f64>::zeros((2, 3));
        let B = Matrix::<f64>::zeros((2, 3));
        assert_eq!(matmul(&A, &B), Err(MatrixError::IncompatibleDimension));
    }

    #[test]
    fn test_gemm_empty() {
        let A = Matrix::<f64>::zeros((0, 3));
        let B = Matrix::<f64>::zeros((3, 2));
        let C = matmul(&A, &B).unwrap();
        assert_eq!(C.size(), (0, 2));
    }
}
