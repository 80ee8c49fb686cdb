#![allow(non_snake_case)]
use crate::algebra::*;

#[test]
fn test_construction() {
    let A = Matrix::<f64>::from_rows(&[vec![1., 2.], vec![3., 4.]]).unwrap();
    assert_eq!(A, Matrix::from(&[[1., 2.], [3., 4.]]));

    let B = Matrix::<f64>::from_vec((2, 2), vec![1., 2., 3., 4.]).unwrap();
    assert_eq!(A, B);

    assert_eq!(Matrix::<f64>::zeros((2, 2)).data(), &[0.; 4]);
    assert_eq!(Matrix::<f64>::filled((2, 2), 7.).data(), &[7.; 4]);
    assert_eq!(
        Matrix::<f64>::identity(2),
        Matrix::from(&[[1., 0.], [0., 1.]])
    );
}

#[test]
fn test_construction_failures() {
    // ragged nested rows
    let res = Matrix::<f64>::from_rows(&[vec![1., 2.], vec![3.]]);
    assert_eq!(res.unwrap_err(), MatrixError::RaggedData);

    // buffer length disagrees with dimensions
    let res = Matrix::<f64>::from_vec((2, 2), vec![1., 2., 3.]);
    assert_eq!(res.unwrap_err(), MatrixError::IncompatibleDimension);
}

#[test]
fn test_indexing() {
    // row-major: (r, c) lives at r * ncols + c
    let A = Matrix::<f64>::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);

    assert_eq!(A.index_linear((0, 0)), 0);
    assert_eq!(A.index_linear((0, 2)), 2);
    assert_eq!(A.index_linear((1, 0)), 3);
    assert_eq!(A.index_linear((1, 2)), 5);

    assert_eq!(A[(0, 1)], 2.);
    assert_eq!(A[(1, 2)], 6.);

    let mut B = A.clone();
    B[(1, 1)] = 50.;
    assert_eq!(B[(1, 1)], 50.);
}

#[test]
fn test_element_access() {
    let mut A = Matrix::<f64>::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);

    assert_eq!(A.get(1, 2), Ok(6.));
    assert_eq!(A.get(2, 0), Err(MatrixError::RowOutOfBounds(2)));
    assert_eq!(A.get(0, 3), Err(MatrixError::ColOutOfBounds(3)));

    A.set(0, 0, 10.).unwrap();
    assert_eq!(A[(0, 0)], 10.);
    assert_eq!(A.set(5, 0, 0.), Err(MatrixError::RowOutOfBounds(5)));
    assert_eq!(A.set(0, 5, 0.), Err(MatrixError::ColOutOfBounds(5)));
}

#[test]
fn test_row_col_access() {
    let mut A = Matrix::<f64>::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);

    // rows are contiguous and borrowed; columns are strided and copied
    assert_eq!(A.row(0).unwrap(), &[1., 2., 3.]);
    assert_eq!(A.row(1).unwrap(), &[4., 5., 6.]);
    assert_eq!(A.row(2).unwrap_err(), MatrixError::RowOutOfBounds(2));

    assert_eq!(A.col(0).unwrap(), vec![1., 4.]);
    assert_eq!(A.col(2).unwrap(), vec![3., 6.]);
    assert_eq!(A.col(3).unwrap_err(), MatrixError::ColOutOfBounds(3));

    A.row_mut(0).unwrap().copy_from_slice(&[7., 8., 9.]);
    assert_eq!(A.row(0).unwrap(), &[7., 8., 9.]);

    A.set_col(1, &[20., 30.]).unwrap();
    assert_eq!(A.col(1).unwrap(), vec![20., 30.]);
    assert_eq!(A.set_col(1, &[1.]), Err(MatrixError::IncompatibleDimension));
    assert_eq!(A.set_col(9, &[1., 2.]), Err(MatrixError::ColOutOfBounds(9)));
}

#[test]
fn test_display() {
    let single = Matrix::<f64>::from(&[[1., 2.]]);
    assert_eq!(format!("{}", single), "[1\t2]\n");

    let multi = Matrix::<f64>::from(&[
        [1., 2.], //
        [3., 4.], //
        [5., 6.], //
    ]);
    assert_eq!(format!("{}", multi), "⎡1\t2⎤\n⎢3\t4⎥\n⎣5\t6⎦\n");
}

#[test]
fn test_empty_matrix() {
    let A = Matrix::<f64>::zeros((0, 0));
    assert_eq!(A.size(), (0, 0));
    assert!(A.is_square());
    assert!(A.data().is_empty());

    let B = Matrix::<f64>::zeros((0, 3));
    assert_eq!(B.col(1).unwrap(), Vec::<f64>::new());
    assert_eq!(B.row(0).unwrap_err(), MatrixError::RowOutOfBounds(0));
}
