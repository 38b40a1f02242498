use super::*;
use std::ops::{Deref, Index, IndexMut};

/// A row vector: a [`Matrix`] with exactly one row.
///
/// Derefs to [`Matrix`] for read access (`rows()`, `cols()`, `get(0, j)`, display, ...), while
/// mutation goes through the vector's own methods so the single-row shape is preserved.
/// Borrowed vectors are expression leaves like borrowed matrices.
#[derive(Clone, PartialEq)]
pub struct Vector<T> {
    inner: Matrix<T>,
}

impl<T: Element> Vector<T> {
    /// Creates a zero-filled vector of `len` elements.
    pub fn zeros(len: usize) -> Result<Self> {
        Matrix::zeros(1, len).map(Self::wrap)
    }

    /// Creates a vector of `len` copies of `value`, converted with `as` semantics.
    pub fn full<U>(len: usize, value: U) -> Result<Self>
    where
        U: AsPrimitive<T>,
    {
        Matrix::full(1, len, value).map(Self::wrap)
    }

    /// Creates a vector by converting every value of the slice with `as` semantics.
    pub fn from_slice<U>(values: &[U]) -> Result<Self>
    where
        U: AsPrimitive<T>,
    {
        Matrix::from_row(values).map(Self::wrap)
    }

    /// Evaluates a single-row expression into a new vector.
    pub fn from_expr<E>(expr: E) -> Result<Self>
    where
        E: Expr<Elem = T>,
    {
        Matrix::from_expr(expr).and_then(Self::try_from)
    }

    /// Replaces this vector with the evaluated single-row expression. The vector is left
    /// untouched when the expression is invalid or has more than one row.
    pub fn assign_expr<E>(&mut self, expr: E) -> Result<()>
    where
        E: Expr<Elem = T>,
    {
        *self = Self::from_expr(expr)?;
        Ok(())
    }

    /// Replaces the content and length of this vector with those of `other`, converting with
    /// `as` semantics.
    pub fn assign<U>(&mut self, other: &Vector<U>)
    where
        U: AsPrimitive<T>,
    {
        self.inner.assign(&other.inner);
    }

    /// Rewrites the content without changing the length.
    pub fn assign_values<U>(&mut self, values: &[U]) -> Result<()>
    where
        U: AsPrimitive<T>,
    {
        self.inner.assign_values(values)
    }
}

impl<T> Vector<T> {
    fn wrap(inner: Matrix<T>) -> Self {
        Self { inner }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.inner.cols()
    }

    /// A vector is never empty, provided for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns a reference to the element at `i`.
    pub fn get(&self, i: usize) -> Result<&T> {
        self.inner.get(0, i)
    }

    /// Returns a mutable reference to the element at `i`.
    pub fn get_mut(&mut self, i: usize) -> Result<&mut T> {
        self.inner.get_mut(0, i)
    }

    /// Vectors keep their shape: `reshape(1, len())` succeeds without doing anything, every
    /// other shape is rejected.
    pub fn reshape(&mut self, rows: usize, cols: usize) -> Result<()> {
        if (rows, cols) == self.inner.shape() {
            return Ok(());
        }

        Err(MatrixError::UnsupportedOperation(format!(
            "Cannot reshape vector of length {} to {rows}x{cols}",
            self.len()
        )))
    }

    /// Converts the vector into a single-row matrix.
    pub fn into_matrix(self) -> Matrix<T> {
        self.inner
    }
}

impl<T> Deref for Vector<T> {
    type Target = Matrix<T>;

    fn deref(&self) -> &Matrix<T> {
        &self.inner
    }
}

impl<T> TryFrom<Matrix<T>> for Vector<T> {
    type Error = MatrixError;

    /// Accepts single-row matrices only.
    fn try_from(matrix: Matrix<T>) -> Result<Self> {
        if matrix.rows() != 1 {
            return Err(MatrixError::ShapeMismatch(format!(
                "Vector requires a single row, got {}x{}",
                matrix.rows(),
                matrix.cols()
            )));
        }
        Ok(Self::wrap(matrix))
    }
}

impl<T: Element> TryFrom<Vec<T>> for Vector<T> {
    type Error = MatrixError;

    fn try_from(data: Vec<T>) -> Result<Self> {
        Matrix::try_from(data).map(Self::wrap)
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    /// # Panics
    /// Panics when `i` is out of bounds, use [`Vector::get`] for a checked access.
    fn index(&self, i: usize) -> &T {
        match self.get(i) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match self.get_mut(i) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector").field(&self.inner.as_slice()).finish()
    }
}
