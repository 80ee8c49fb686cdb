#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(clippy::too_many_arguments)]

extern crate blas_src;
extern crate lapack_src;
use lapack::*;
use blas::*;

pub trait BlasFloatT:
    private::BlasFloatSealed
    + XgemmScalar
    + XgetrfScalar
    + XgetriScalar
{}

cfg_if::cfg_if! {
  if #[cfg(not(feature="r"))] {
	// R blas/lapack only provides double precision routines
	impl BlasFloatT for f32 {}
  }
}
impl BlasFloatT for f64 {}

mod private {
  pub trait BlasFloatSealed {}
  cfg_if::cfg_if! {
	if #[cfg(not(feature="r"))] {
	    // R blas/lapack only provides double precision routines
	    impl BlasFloatSealed for f32 {}
	}
  }
  impl BlasFloatSealed for f64 {}
}


// --------------------------------------
// ?gemm : General matrix-matrix multiply
// --------------------------------------

pub trait XgemmScalar: Sized {
    fn xgemm(
        transa: u8, transb: u8, m: i32, n: i32, k: i32, alpha: Self, a: &[Self],
        lda: i32, b: &[Self], ldb: i32, beta: Self, c: &mut [Self], ldc: i32
    );
}

macro_rules! impl_blas_gemm {
    ($T:ty, $XGEMM:path) => {
        impl XgemmScalar for $T {
            fn xgemm(
                transa: u8, transb: u8, m: i32, n: i32, k: i32, alpha: Self, a: &[Self],
                lda: i32, b: &[Self], ldb: i32, beta: Self, c: &mut [Self], ldc: i32
            ) {
                unsafe{
                    $XGEMM(
                        transa, transb, m, n, k, alpha, a,
                        lda, b, ldb, beta, c, ldc
                    );
                }
            }
        }
    };
}

cfg_if::cfg_if! {
  if #[cfg(not(feature="r"))] {
      // R blas/lapack only provides double precision routines
      impl_blas_gemm!(f32, sgemm);
  }
}
impl_blas_gemm!(f64, dgemm);

// --------------------------------------
// ?getrf : LU factorization with partial pivoting
// --------------------------------------

pub trait XgetrfScalar: Sized {
    fn xgetrf(
        m: i32, n: i32, a: &mut [Self], lda: i32, ipiv: &mut [i32], info: &mut i32
    );
}

macro_rules! impl_blas_xgetrf {
    ($T:ty, $XGETRF:path) => {
        impl XgetrfScalar for $T {
            fn xgetrf(
                m: i32, n: i32, a: &mut [Self], lda: i32, ipiv: &mut [i32], info: &mut i32
            ) {
                unsafe{
                    $XGETRF(
                        m, n, a, lda, ipiv, info
                    );
                }
            }
        }
    };
}

cfg_if::cfg_if! {
  if #[cfg(not(feature="r"))] {
      // R blas/lapack only provides double precision routines
      impl_blas_xgetrf!(f32, sgetrf);
  }
}
impl_blas_xgetrf!(f64, dgetrf);

// --------------------------------------
// ?getri : Matrix inverse from LU factors
// --------------------------------------

pub trait XgetriScalar: Sized {
    fn xgetri(
        n: i32, a: &mut [Self], lda: i32, ipiv: &[i32],
        work: &mut [Self], lwork: i32, info: &mut i32
    );
}

macro_rules! impl_blas_xgetri {
    ($T:ty, $XGETRI:path) => {
        impl XgetriScalar for $T {
            fn xgetri(
                n: i32, a: &mut [Self], lda: i32, ipiv: &[i32],
                work: &mut [Self], lwork: i32, info: &mut i32
            ) {
                unsafe{
                    $XGETRI(
                        n, a, lda, ipiv, work, lwork, info
                    );
                }
            }
        }
    };
}

cfg_if::cfg_if! {
  if #[cfg(not(feature="r"))] {
      // R blas/lapack only provides double precision routines
      impl_blas_xgetri!(f32, sgetri);
  }
}
impl_blas_xgetri!(f64, dgetri);
