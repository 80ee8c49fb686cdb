//! __rowmat__ is a row-major dense matrix library backed by native
//! BLAS/LAPACK routines.  It provides two interchangeable storage variants:
//!
//! * [`Matrix`](crate::algebra::Matrix): an owned, contiguous row-major
//!   buffer with explicit dimensions.
//! * [`CowMatrix`](crate::algebra::CowMatrix): a copy-on-write handle over
//!   the same payload, giving cheap value-semantics copies that clone the
//!   buffer only on first mutation while shared.
//!
//! Arithmetic lives in [`algebra::ops`](crate::algebra::ops) as free
//! functions generic over the storage traits, so either variant flows
//! through identical code and results come back in the caller's variant.
//! Every numerically significant operation (matrix multiply, inverse,
//! determinant) delegates to a single BLAS/LAPACK call; the crate never
//! reimplements the underlying kernels.
//!
//! Shape and index violations are reported eagerly through
//! [`MatrixError`](crate::algebra::MatrixError) before any native call is
//! made.  Factorization failures (singular inputs) are recoverable errors
//! for both `inverse` and `det`.
//!
//! A BLAS/LAPACK source must be selected through cargo features
//! (`openblas` is the default; `accelerate`, `netlib`, `mkl` and `r` are
//! also available).  Only `f32` and `f64` scalars are supported, matching
//! the routines the native libraries provide.

pub mod algebra;

pub use crate::algebra::{Axis, CowMatrix, Matrix, MatrixError};
