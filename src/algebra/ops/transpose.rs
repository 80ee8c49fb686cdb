#![allow(non_snake_case)]

use crate::algebra::*;
use itertools::iproduct;

/// Transpose into a new matrix with swapped dimensions.
///
/// There is no standard out-of-place transpose in BLAS/LAPACK, so this is
/// a plain data permutation over the flat buffer.
pub fn transpose<T, M>(A: &M) -> M
where
    T: FloatT,
    M: MatrixStorage<T>,
{
    let (m, n) = A.size();
    let data = A.data();
    let mut out = vec![T::zero(); m * n];
    for (r, c) in iproduct!(0..m, 0..n) {
        out[c * m + r] = data[r * n + c];
    }
    M::new((n, m), out)
}
