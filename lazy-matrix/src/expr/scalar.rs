use super::*;

macro_rules! scalar_node {
    ($(#[$meta:meta])* $name:ident, $op:tt) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name<E, S> {
            inner: E,
            scalar: S,
        }

        impl<E, S> $name<E, S>
        where
            E: Expr<Elem = S>,
        {
            pub fn new(inner: E, scalar: S) -> Self {
                Self { inner, scalar }
            }
        }

        impl<E, S> Expr for $name<E, S>
        where
            E: Expr<Elem = S>,
            S: Element,
        {
            type Elem = S;

            #[inline]
            fn at(&self, i: usize, j: usize) -> Self::Elem {
                self.inner.at(i, j) $op self.scalar
            }

            fn rows(&self) -> usize {
                self.inner.rows()
            }

            fn cols(&self) -> usize {
                self.inner.cols()
            }

            fn validate(&self) -> Result<()> {
                self.inner.validate()
            }
        }
    };
}

scalar_node!(
    /// Multiplies every element by a scalar, built by `a * s` or `s * a`.
    Scale, *
);

scalar_node!(
    /// Adds a scalar to every element, built by `a + s` or `s + a`.
    Shift, +
);

scalar_node!(
    /// Subtracts a scalar from every element, built by `a - s`.
    Deduct, -
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_and_shift_compose() -> Result<()> {
        let m = Matrix::try_from(vec![[1_i64, 2], [3, 4]])?;

        let expr = (&m * 3_i64 + 1_i64) - 2_i64;
        assert_eq!(expr.eval()?.as_slice(), &[2, 5, 8, 11]);

        Ok(())
    }

    #[test]
    fn scalar_nodes_keep_operand_shape() -> Result<()> {
        let m = Matrix::<f32>::zeros(3, 5)?;

        let expr = 0.5_f32 * (&m + 2.0_f32);
        assert_eq!((expr.rows(), expr.cols()), (3, 5));
        assert_eq!(expr.eval()?.as_slice(), &[1.0; 15]);

        Ok(())
    }

    #[test]
    fn deduct_can_be_built_directly() -> Result<()> {
        let m = Matrix::try_from(vec![5_u8, 200])?;

        let result = (Deduct::new(&m, 5) + 1).eval()?;
        assert_eq!(result.as_slice(), &[1, 196]);

        Ok(())
    }
}
