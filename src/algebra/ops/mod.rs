//! Arithmetic dispatch layer.
//!
//! Free functions generic over [`MatrixStorage`](crate::algebra::MatrixStorage),
//! so both storage variants flow through identical code and every result
//! comes back in the caller's variant.  Shape preconditions are validated
//! eagerly; each numerically significant operation then makes exactly one
//! native BLAS/LAPACK call.

mod elementwise;
pub use elementwise::*;

mod reduce;
pub use reduce::*;

mod gemm;
pub use gemm::*;

mod transpose;
pub use transpose::*;

mod lu;
pub use lu::*;

mod stdops;
