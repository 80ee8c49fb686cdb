use thiserror::Error;

/// Error type returned by matrix construction, access and arithmetic
/// operations.
///
/// Shape and index violations are detected eagerly, before any native
/// BLAS/LAPACK call is made.  [`Singular`](MatrixError::Singular) is the
/// one error reported by the native library itself and carries the LAPACK
/// info code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand dimensions are incompatible with the requested operation
    #[error("Operand dimensions are incompatible")]
    IncompatibleDimension,
    /// Row index exceeds the matrix row dimension
    #[error("Row index {0} is out of bounds")]
    RowOutOfBounds(usize),
    /// Column index exceeds the matrix column dimension
    #[error("Column index {0} is out of bounds")]
    ColOutOfBounds(usize),
    /// Nested row constructor given rows of unequal length
    #[error("Nested rows have unequal lengths")]
    RaggedData,
    /// Inverse or determinant requested for a non-square matrix
    #[error("Matrix is not square")]
    NotSquare,
    /// LU factorization failed.  Errors return the internal LAPACK info code.
    #[error("Matrix is singular (LAPACK info = {0})")]
    Singular(i32),
}
