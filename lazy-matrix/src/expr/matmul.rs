use super::*;
use crate::MatrixError;
use log::trace;

/// Matrix product `lhs * rhs`, built by `a * b` on two expressions.
///
/// The right operand is transposed into an owned row-major buffer once, when the node is built,
/// so that every `(i, j)` is a dot product of two contiguous rows instead of striding down the
/// columns of `rhs`. The left operand stays lazy.
///
/// A right operand which fails validation is remembered and reported by [`Expr::validate`].
#[derive(Clone, Debug)]
pub struct MatrixProduct<L, T> {
    lhs: L,
    rhs_t: Result<Matrix<T>>,
    rhs_rows: usize,
    rhs_cols: usize,
}

impl<L, T> MatrixProduct<L, T>
where
    L: Expr<Elem = T>,
    T: Element,
{
    /// Creates the node after checking that `lhs.cols() == rhs.rows()` and that both operands
    /// are valid.
    pub fn new<R>(lhs: L, rhs: R) -> Result<Self>
    where
        R: Expr<Elem = T>,
    {
        let node = Self::lazy(lhs, rhs);
        node.validate()?;
        Ok(node)
    }

    pub(crate) fn lazy<R>(lhs: L, rhs: R) -> Self
    where
        R: Expr<Elem = T>,
    {
        let (rhs_rows, rhs_cols) = (rhs.rows(), rhs.cols());
        trace!("pre-transposing right operand of matrix product: {rhs_rows}x{rhs_cols}");

        Self {
            lhs,
            rhs_t: rhs.t().eval(),
            rhs_rows,
            rhs_cols,
        }
    }

    fn check_shapes(&self) -> Result<()> {
        if self.lhs.cols() != self.rhs_rows {
            return Err(MatrixError::ShapeMismatch(format!(
                "Matrix dimensions incompatible for multiplication: {}x{} * {}x{}",
                self.lhs.rows(),
                self.lhs.cols(),
                self.rhs_rows,
                self.rhs_cols
            )));
        }
        Ok(())
    }
}

impl<L, T> Expr for MatrixProduct<L, T>
where
    L: Expr<Elem = T>,
    T: Element,
{
    type Elem = T;

    fn at(&self, i: usize, j: usize) -> T {
        let rhs_t = match &self.rhs_t {
            Ok(rhs_t) => rhs_t,
            Err(err) => panic!("matrix product evaluated with an invalid operand: {err}"),
        };

        rhs_t
            .row_unchecked(j)
            .iter()
            .enumerate()
            .fold(T::zero(), |sum, (k, &value)| sum + self.lhs.at(i, k) * value)
    }

    fn rows(&self) -> usize {
        self.lhs.rows()
    }

    fn cols(&self) -> usize {
        self.rhs_cols
    }

    fn validate(&self) -> Result<()> {
        self.lhs.validate()?;
        if let Err(err) = &self.rhs_t {
            return Err(err.clone());
        }
        self.check_shapes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matmul() -> Result<()> {
        let a = Matrix::new((0..12).collect::<Vec<i32>>(), 3, 4)?;
        let b = Matrix::new((0..12).collect::<Vec<i32>>(), 4, 3)?;

        let result = (&a * &b).eval()?;
        assert_eq!(result.shape(), (3, 3));
        assert_eq!(*result.get(0, 0)?, 42);
        assert_eq!(*result.get(0, 1)?, 48);
        assert_eq!(*result.get(0, 2)?, 54);

        Ok(())
    }

    #[test]
    fn test_matmul_2d() -> Result<()> {
        let a = Matrix::new((1..=12).collect::<Vec<i32>>(), 3, 4)?;
        let b = Matrix::new((1..=12).collect::<Vec<i32>>(), 4, 3)?;
        let expected = Matrix::try_from(vec![[70, 80, 90], [158, 184, 210], [246, 288, 330]])?;

        assert_eq!((&a * &b).eval()?, expected);
        assert_eq!(MatrixProduct::new(&a, &b)?.eval()?, expected);

        Ok(())
    }

    #[test]
    fn matmul_matches_naive_dot_products() -> Result<()> {
        let a = Matrix::new((0..35).map(|v| v as f64 * 0.5).collect(), 5, 7)?;
        let b = Matrix::new((0..21).map(|v| 10.0 - v as f64).collect(), 7, 3)?;

        let result = (&a * &b).eval()?;
        assert_eq!(result.shape(), (5, 3));
        for i in 0..5 {
            for j in 0..3 {
                let expected: f64 = (0..7).map(|k| a[(i, k)] * b[(k, j)]).sum();
                assert_eq!(result[(i, j)], expected);
            }
        }

        Ok(())
    }

    #[test]
    fn vector_outer_and_inner_products() -> Result<()> {
        let v1 = Vector::try_from(vec![1, 2])?;
        let v2 = Vector::try_from(vec![3, 4])?;

        let inner = (&v1 * v2.t()).eval()?;
        assert_eq!(inner.shape(), (1, 1));
        assert_eq!(inner.as_slice(), &[11]);

        let outer = (v1.t() * &v2).eval()?;
        assert_eq!(outer, Matrix::try_from(vec![[3, 4], [6, 8]])?);

        Ok(())
    }

    #[test]
    fn products_of_expressions() -> Result<()> {
        let a = Matrix::try_from(vec![[1, 2], [3, 4]])?;
        let identity = Matrix::try_from(vec![[1, 0], [0, 1]])?;

        let result = ((&a + &identity) * (&a - &identity)).eval()?;
        assert_eq!(result, Matrix::try_from(vec![[6, 10], [15, 21]])?);

        Ok(())
    }

    #[test]
    fn invalid_right_operand_is_reported() -> Result<()> {
        let a = Matrix::<i32>::zeros(2, 2)?;
        let b = Matrix::<i32>::zeros(3, 2)?;

        assert!(matches!(
            (&a * (&a + &b)).eval(),
            Err(MatrixError::ShapeMismatch(_))
        ));
        assert!(matches!(
            MatrixProduct::new(&a, &b),
            Err(MatrixError::ShapeMismatch(_))
        ));

        Ok(())
    }
}
