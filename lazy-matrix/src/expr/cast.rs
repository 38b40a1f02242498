use super::*;
use std::marker::PhantomData;

/// Lazy numeric conversion of every element, built by [`Expr::cast`].
///
/// Conversion follows `as` semantics: narrowing is silent, so `2.7_f64` becomes `2_i32` and
/// `300_i32` becomes `44_u8`. Operands of different element types are combined by casting one
/// of them, e.g. `ints.cast::<f64>() + &floats`.
#[derive(Debug)]
pub struct Cast<E, U> {
    inner: E,
    _target: PhantomData<fn() -> U>,
}

impl<E: Clone, U> Clone for Cast<E, U> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _target: PhantomData,
        }
    }
}

impl<E, U> Cast<E, U>
where
    E: Expr,
    E::Elem: AsPrimitive<U>,
    U: Element,
{
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _target: PhantomData,
        }
    }
}

impl<E, U> Expr for Cast<E, U>
where
    E: Expr,
    E::Elem: AsPrimitive<U>,
    U: Element,
{
    type Elem = U;

    #[inline]
    fn at(&self, i: usize, j: usize) -> U {
        self.inner.at(i, j).as_()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_combines_mixed_element_types() -> Result<()> {
        let ints = Matrix::try_from(vec![[1_i32, 2], [3, 4]])?;
        let floats = Matrix::try_from(vec![[0.5_f64, 0.25], [0.125, 0.0]])?;

        let result = (ints.cast::<f64>() + &floats).eval()?;
        assert_eq!(result.as_slice(), &[1.5, 2.25, 3.125, 4.0]);

        Ok(())
    }

    #[test]
    fn cast_narrows_silently() -> Result<()> {
        let floats = Matrix::try_from(vec![1.0_f64, 2.0, 2.7, -3.9])?;

        let ints = Matrix::<i32>::from_expr(floats.cast())?;
        assert_eq!(ints.as_slice(), &[1, 2, 2, -3]);

        Ok(())
    }
}
