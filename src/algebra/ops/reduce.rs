#![allow(non_snake_case)]

use crate::algebra::*;

/// Axis selector for reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// reduce across each row, giving one value per row
    Rows,
    /// reduce down each column, giving one value per column
    Cols,
}

/// Sum along an axis.
///
/// `Axis::Rows` gives per-row sums (length `nrows`); `Axis::Cols` gives
/// per-column sums (length `ncols`).  Each sum is pairwise accumulated.
pub fn sum_axis<T, M>(A: &M, axis: Axis) -> Vec<T>
where
    T: FloatT,
    M: DenseStorage<T>,
{
    let n = A.ncols();
    match axis {
        Axis::Rows => {
            if n == 0 {
                return vec![T::zero(); A.nrows()];
            }
            A.data().chunks_exact(n).map(|row| row.sum()).collect()
        }
        Axis::Cols => {
            let mut out = vec![T::zero(); n];
            if n > 0 {
                for row in A.data().chunks_exact(n) {
                    out.axpby(T::one(), row, T::one());
                }
            }
            out
        }
    }
}
