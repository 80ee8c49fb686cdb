use crate::algebra::dense::display_matrix;
use crate::algebra::{
    DenseStorage, DenseStorageMut, FloatT, Matrix, ShapedMatrix, StorageConstruct,
};
use std::ops::{Index, IndexMut};
use std::sync::Arc;

/// Copy-on-write dense matrix.
///
/// A `CowMatrix` is a shared handle over an owned [`Matrix`] payload.
/// Cloning the handle is a reference count bump; the payload itself is
/// deep-cloned only when a write lands on a handle that still shares it,
/// so mutating one value never disturbs an earlier copy.
///
/// All mutating access funnels through the single
/// [`make_mut`](CowMatrix::make_mut) primitive.  The atomic reference
/// count together with `&mut` exclusivity makes the check-and-clone step
/// race free across threads without any further locking.
#[derive(Debug, Clone)]
pub struct CowMatrix<T = f64> {
    inner: Arc<Matrix<T>>,
}

impl<T> CowMatrix<T>
where
    T: FloatT,
{
    /// Ensure this handle is the sole owner of the payload, cloning it
    /// if another handle still aliases it, then borrow it mutably.
    pub(crate) fn make_mut(&mut self) -> &mut Matrix<T> {
        Arc::make_mut(&mut self.inner)
    }

    /// True when no other handle shares the payload.
    pub fn is_unique(&self) -> bool {
        Arc::strong_count(&self.inner) == 1
    }

    /// Extract an owned [`Matrix`], cloning the payload only if shared.
    pub fn into_owned(self) -> Matrix<T> {
        Arc::try_unwrap(self.inner).unwrap_or_else(|rc| (*rc).clone())
    }
}

impl<T> From<Matrix<T>> for CowMatrix<T>
where
    T: FloatT,
{
    fn from(mat: Matrix<T>) -> Self {
        Self {
            inner: Arc::new(mat),
        }
    }
}

impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for CowMatrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; C]; R]) -> Self {
        Matrix::from(rows).into()
    }
}

// equality is by value, not by handle identity
impl<T> PartialEq for CowMatrix<T>
where
    T: FloatT,
{
    fn eq(&self, other: &Self) -> bool {
        *self.inner == *other.inner
    }
}

impl<T> ShapedMatrix for CowMatrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.inner.nrows()
    }
    fn ncols(&self) -> usize {
        self.inner.ncols()
    }
}

impl<T> DenseStorage<T> for CowMatrix<T>
where
    T: FloatT,
{
    fn data(&self) -> &[T] {
        self.inner.data()
    }
}

impl<T> DenseStorageMut<T> for CowMatrix<T>
where
    T: FloatT,
{
    fn data_mut(&mut self) -> &mut [T] {
        self.make_mut().data_mut()
    }
}

impl<T> StorageConstruct<T> for CowMatrix<T>
where
    T: FloatT,
{
    fn new(size: (usize, usize), data: Vec<T>) -> Self {
        Matrix::new(size, data).into()
    }
}

impl<T> Index<(usize, usize)> for CowMatrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.inner[idx]
    }
}

impl<T> IndexMut<(usize, usize)> for CowMatrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        &mut self.make_mut()[idx]
    }
}

impl<T> std::fmt::Display for CowMatrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}
