use crate::algebra::{FloatT, MatrixError};
use std::ops::Index;

/// Matrix dimension reporting, implemented by every matrix representation.
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

/// Read access to a row-major dense storage payload.
///
/// Element (r, c) lives at linear offset `r * ncols + c` in the flat
/// buffer.  Rows are therefore contiguous and borrowable as slices, while
/// columns are strided and must be copied out.
pub trait DenseStorage<T>: ShapedMatrix + Index<(usize, usize), Output = T>
where
    T: FloatT,
{
    /// The full flat buffer in row-major order.
    fn data(&self) -> &[T];

    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 * self.ncols() + idx.1
    }

    /// Read a single element, failing on an out of range index.
    fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        if row >= self.nrows() {
            return Err(MatrixError::RowOutOfBounds(row));
        }
        if col >= self.ncols() {
            return Err(MatrixError::ColOutOfBounds(col));
        }
        Ok(self.data()[self.index_linear((row, col))])
    }

    /// Borrow a single row as a contiguous slice.
    fn row(&self, row: usize) -> Result<&[T], MatrixError> {
        if row >= self.nrows() {
            return Err(MatrixError::RowOutOfBounds(row));
        }
        let n = self.ncols();
        Ok(&self.data()[(row * n)..(row + 1) * n])
    }

    /// Copy a single column into a fresh vector.
    fn col(&self, col: usize) -> Result<Vec<T>, MatrixError> {
        if col >= self.ncols() {
            return Err(MatrixError::ColOutOfBounds(col));
        }
        if self.nrows() == 0 {
            return Ok(vec![]);
        }
        let n = self.ncols();
        Ok(self.data()[col..].iter().step_by(n).copied().collect())
    }
}

/// Write access to a row-major dense storage payload.
///
/// For the copy-on-write variant every method here funnels through the
/// ensure-unique step, so a shared payload is cloned before the first
/// write lands.
pub trait DenseStorageMut<T>: DenseStorage<T>
where
    T: FloatT,
{
    /// The full flat buffer in row-major order, mutably.
    fn data_mut(&mut self) -> &mut [T];

    /// Write a single element, failing on an out of range index.
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        if row >= self.nrows() {
            return Err(MatrixError::RowOutOfBounds(row));
        }
        if col >= self.ncols() {
            return Err(MatrixError::ColOutOfBounds(col));
        }
        let lidx = self.index_linear((row, col));
        self.data_mut()[lidx] = value;
        Ok(())
    }

    /// Borrow a single row as a contiguous mutable slice.
    fn row_mut(&mut self, row: usize) -> Result<&mut [T], MatrixError> {
        if row >= self.nrows() {
            return Err(MatrixError::RowOutOfBounds(row));
        }
        let n = self.ncols();
        Ok(&mut self.data_mut()[(row * n)..(row + 1) * n])
    }

    /// Overwrite a single column from a slice of length `nrows`.
    fn set_col(&mut self, col: usize, values: &[T]) -> Result<(), MatrixError> {
        if col >= self.ncols() {
            return Err(MatrixError::ColOutOfBounds(col));
        }
        if values.len() != self.nrows() {
            return Err(MatrixError::IncompatibleDimension);
        }
        let n = self.ncols();
        let data = self.data_mut();
        for (i, &v) in values.iter().enumerate() {
            data[i * n + col] = v;
        }
        Ok(())
    }
}

/// Constructors shared by both storage variants.
///
/// The arithmetic dispatch layer builds its results through this trait, so
/// an operation on a given variant hands back the same variant.
pub trait StorageConstruct<T>: DenseStorageMut<T> + Sized
where
    T: FloatT,
{
    /// New matrix from a row-major buffer whose length is already known
    /// to equal `rows * cols`.  Panics otherwise; use
    /// [`from_vec`](StorageConstruct::from_vec) for caller-supplied data.
    fn new(size: (usize, usize), data: Vec<T>) -> Self;

    fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        Self::new(size, vec![T::zero(); m * n])
    }

    fn filled(size: (usize, usize), value: T) -> Self {
        let (m, n) = size;
        Self::new(size, vec![value; m * n])
    }

    fn identity(n: usize) -> Self {
        let mut mat = Self::zeros((n, n));
        for i in 0..n {
            mat.data_mut()[i * n + i] = T::one();
        }
        mat
    }

    /// New matrix from a caller-supplied row-major buffer.
    fn from_vec(size: (usize, usize), data: Vec<T>) -> Result<Self, MatrixError> {
        let (m, n) = size;
        if data.len() != m * n {
            return Err(MatrixError::IncompatibleDimension);
        }
        Ok(Self::new(size, data))
    }

    /// New matrix from nested rows, which must all have equal length.
    fn from_rows(rows: &[Vec<T>]) -> Result<Self, MatrixError> {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != n) {
            return Err(MatrixError::RaggedData);
        }
        let data = rows.iter().flatten().copied().collect();
        Ok(Self::new((m, n), data))
    }
}

/// Capability bundle required by the arithmetic dispatch layer, satisfied
/// by both [`Matrix`](crate::algebra::Matrix) and
/// [`CowMatrix`](crate::algebra::CowMatrix).
pub trait MatrixStorage<T>: StorageConstruct<T>
where
    T: FloatT,
{
}

impl<T, M> MatrixStorage<T> for M
where
    T: FloatT,
    M: StorageConstruct<T>,
{
}
