mod blas;
pub(crate) use self::blas::*;

mod core;
pub use self::core::Matrix;
pub(crate) use self::core::display_matrix;

mod cow;
pub use self::cow::CowMatrix;
