use crate::algebra::{
    DenseStorage, DenseStorageMut, FloatT, ShapedMatrix, StorageConstruct,
};
use std::ops::{Index, IndexMut};

/// Owned dense matrix with a contiguous row-major buffer.
///
/// The buffer length always equals `rows * cols` and the dimensions are
/// fixed at construction.  Element (r, c) is stored at linear offset
/// `r * cols + c`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    m: usize,
    n: usize,
    data: Vec<T>,
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub(crate) fn from_raw_parts(m: usize, n: usize, data: Vec<T>) -> Self {
        assert!(m * n == data.len());
        Self { m, n, data }
    }
}

impl<T> ShapedMatrix for Matrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

impl<T> DenseStorage<T> for Matrix<T>
where
    T: FloatT,
{
    fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T> DenseStorageMut<T> for Matrix<T>
where
    T: FloatT,
{
    fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> StorageConstruct<T> for Matrix<T>
where
    T: FloatT,
{
    fn new(size: (usize, usize), data: Vec<T>) -> Self {
        let (m, n) = size;
        Self::from_raw_parts(m, n, data)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

// matrix literals for tests and small fixtures, e.g.
// Matrix::from(&[[1.0, 2.0], [3.0, 4.0]])
impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; C]; R]) -> Self {
        let data = rows.iter().flatten().copied().collect();
        Self::from_raw_parts(R, C, data)
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

// Rows are tab separated between bracket glyphs, with distinct glyphs for
// the single-row, first, last and middle rows of a multi-row matrix.
pub(crate) fn display_matrix<T, M>(mat: &M, f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    T: FloatT,
    M: DenseStorage<T>,
{
    let m = mat.nrows();
    for i in 0..m {
        let (open, close) = if m == 1 {
            ("[", "]")
        } else if i == 0 {
            ("⎡", "⎤")
        } else if i == m - 1 {
            ("⎣", "⎦")
        } else {
            ("⎢", "⎥")
        };
        write!(f, "{}", open)?;
        for j in 0..mat.ncols() {
            if j > 0 {
                write!(f, "\t")?;
            }
            write!(f, "{}", mat[(i, j)])?;
        }
        writeln!(f, "{}", close)?;
    }
    Ok(())
}
