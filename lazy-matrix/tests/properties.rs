use lazy_matrix::{Expr, Matrix, MatrixError, Parallelism, Result, Vector};
use proptest::prelude::*;

fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<i64>> {
    prop::collection::vec(-1000_i64..1000, rows * cols)
        .prop_map(move |data| Matrix::new(data, rows, cols).expect("valid extents"))
}

fn shape() -> impl Strategy<Value = (usize, usize)> {
    (1_usize..8, 1_usize..8)
}

fn same_shape_pair() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
    shape().prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c)))
}

fn same_shape_triple() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>, Matrix<i64>)> {
    shape().prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c), matrix(r, c)))
}

fn product_pair() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
    (1_usize..7, 1_usize..7, 1_usize..7).prop_flat_map(|(r, c, k)| (matrix(r, c), matrix(c, k)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sum_is_element_wise((a, b) in same_shape_pair()) {
        let sum = (&a + &b).eval().unwrap();
        for i in 0..a.rows() {
            for j in 0..a.cols() {
                prop_assert_eq!(sum[(i, j)], a[(i, j)] + b[(i, j)]);
            }
        }
        prop_assert_eq!(((&a + &b) - &b).eval().unwrap(), a);
    }

    #[test]
    fn sum_is_associative((a, b, c) in same_shape_triple()) {
        prop_assert_eq!(
            (&a + &b + &c).eval().unwrap(),
            (&a + (&b + &c)).eval().unwrap()
        );
    }

    #[test]
    fn double_transpose_is_identity(a in shape().prop_flat_map(|(r, c)| matrix(r, c))) {
        let t = a.t().eval().unwrap();
        prop_assert_eq!(t.shape(), (a.cols(), a.rows()));
        for i in 0..a.rows() {
            for j in 0..a.cols() {
                prop_assert_eq!(t[(j, i)], a[(i, j)]);
            }
        }
        prop_assert_eq!(a.t().t().eval().unwrap(), a.clone());
        prop_assert_eq!(a.transpose(), t);
    }

    #[test]
    fn product_is_row_column_dot((a, b) in product_pair()) {
        let product = (&a * &b).eval().unwrap();
        prop_assert_eq!(product.shape(), (a.rows(), b.cols()));
        for i in 0..a.rows() {
            for j in 0..b.cols() {
                let dot: i64 = (0..a.cols()).map(|k| a[(i, k)] * b[(k, j)]).sum();
                prop_assert_eq!(product[(i, j)], dot);
            }
        }
    }

    #[test]
    fn scalar_operators_commute(a in shape().prop_flat_map(|(r, c)| matrix(r, c)), s in -50_i64..50) {
        prop_assert_eq!(
            Matrix::<i64>::from_expr(s * &a).unwrap(),
            Matrix::<i64>::from_expr(&a * s).unwrap()
        );
        prop_assert_eq!(
            Matrix::<i64>::from_expr(s + &a).unwrap(),
            Matrix::<i64>::from_expr(&a + s).unwrap()
        );
    }

    #[test]
    fn hadamard_is_not_matrix_product((a, b) in same_shape_pair()) {
        let product = (&a & &b).eval().unwrap();
        prop_assert_eq!(product.shape(), a.shape());
        for i in 0..a.rows() {
            for j in 0..a.cols() {
                prop_assert_eq!(product[(i, j)], a[(i, j)] * b[(i, j)]);
            }
        }
    }

    #[test]
    fn reshape_keeps_linear_layout(
        (mut m, r, c) in (1_usize..6, 1_usize..6).prop_flat_map(|(r, c)| (matrix(r, c), Just(c), Just(r)))
    ) {
        let original = m.clone();
        m.reshape(r, c).unwrap();
        for i in 0..r {
            for j in 0..c {
                prop_assert_eq!(m[(i, j)], original.as_slice()[i * c + j]);
            }
        }
        prop_assert!(matches!(m.reshape(r + 1, c), Err(MatrixError::ShapeMismatch(_))));
    }

    #[test]
    fn parallel_fill_matches_sequential((a, b) in product_pair(), threads in 1_usize..5) {
        let sequential = Matrix::from_expr_with(&a * &b - 7, &Parallelism::sequential()).unwrap();
        let parallel = Matrix::from_expr_with(
            &a * &b - 7,
            &Parallelism::default().with_threshold(0).with_threads(threads),
        )
        .unwrap();
        prop_assert_eq!(sequential, parallel);
    }
}

#[test]
fn square_matrix_scenario() -> Result<()> {
    let a = Matrix::try_from(vec![[1., 2.], [3., 4.]])?;
    let b = Matrix::try_from(vec![[1., 2.], [3., 4.]])?;

    assert_eq!((&a + &b).eval()?, Matrix::try_from(vec![[2., 4.], [6., 8.]])?);
    assert_eq!((&a & &b).eval()?, Matrix::try_from(vec![[1., 4.], [9., 16.]])?);
    assert_eq!((&a * &b).eval()?, Matrix::try_from(vec![[7., 10.], [15., 22.]])?);
    assert_eq!(a.transpose(), Matrix::try_from(vec![[1., 3.], [2., 4.]])?);

    Ok(())
}

#[test]
fn row_vector_scenario() -> Result<()> {
    let v1 = Vector::try_from(vec![1., 2.])?;
    let v2 = Vector::try_from(vec![3., 4.])?;

    assert_eq!(Vector::from_expr(&v1 + &v2)?.as_slice(), &[4., 6.]);
    assert_eq!(Vector::from_expr(&v1 & &v2)?.as_slice(), &[3., 8.]);

    let dot = (&v1 * v2.t()).eval()?;
    assert_eq!(dot.shape(), (1, 1));
    assert_eq!(dot.as_slice(), &[11.]);

    Ok(())
}

#[test]
fn mixed_type_assignment_scenario() -> Result<()> {
    let floats = Vector::try_from(vec![1.0, 2.0])?;
    let mut ints = Vector::<i32>::zeros(2)?;

    ints.assign(&floats);
    assert_eq!(ints.as_slice(), &[1, 2]);

    Ok(())
}

#[test]
fn demo_style_output() -> Result<()> {
    let mut m1 = Matrix::<f64>::zeros(2, 2)?;
    m1.assign_values(&[1, 2, 3, 4])?;

    let m6 = Matrix::<f64>::from_expr(2.0 * &m1)?;
    assert_eq!(format!("m6 = 2.0 * m1:\n{m6}"), "m6 = 2.0 * m1:\n2 4\n6 8\n\n");

    Ok(())
}
