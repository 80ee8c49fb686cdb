//! Matrix storage types, capability traits and arithmetic operations.

mod error_types;
pub use error_types::*;

mod floats;
pub use floats::*;

mod math_traits;
pub use math_traits::*;
mod vecmath;

mod matrix_traits;
pub use matrix_traits::*;

pub(crate) mod dense;
pub use dense::{CowMatrix, Matrix};

pub mod ops;
pub use ops::Axis;

#[cfg(test)]
mod tests;
