use super::*;

/// Lazy transpose of an expression, built by [`Expr::t`]: `t(i, j) == inner(j, i)`.
#[derive(Clone, Debug)]
pub struct Transposed<E> {
    inner: E,
}

impl<E: Expr> Transposed<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E: Expr> Expr for Transposed<E> {
    type Elem = E::Elem;

    #[inline]
    fn at(&self, i: usize, j: usize) -> Self::Elem {
        self.inner.at(j, i)
    }

    fn rows(&self) -> usize {
        self.inner.cols()
    }

    fn cols(&self) -> usize {
        self.inner.rows()
    }

    fn validate(&self) -> Result<()> {
        self.inner.validate()
    }
}
