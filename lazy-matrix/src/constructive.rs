use super::*;

impl<T: Element> Matrix<T> {
    /// Creates a matrix from a row-major buffer.
    /// Returns an error if the extents are degenerate or do not match the buffer length.
    pub fn new(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        let size = Self::checked_size(rows, cols)?;
        if data.len() != size {
            return Err(MatrixError::ShapeMismatch(format!(
                "Data length {} does not match matrix of {rows}x{cols}",
                data.len()
            )));
        }

        Ok(Self { data, rows, cols })
    }

    /// Creates a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let size = Self::checked_size(rows, cols)?;
        Ok(Self {
            data: vec![T::zero(); size],
            rows,
            cols,
        })
    }

    /// Creates a matrix with every element set to `value`, converted with `as` semantics.
    pub fn full<U>(rows: usize, cols: usize, value: U) -> Result<Self>
    where
        U: AsPrimitive<T>,
    {
        let size = Self::checked_size(rows, cols)?;
        Ok(Self {
            data: vec![value.as_(); size],
            rows,
            cols,
        })
    }

    /// Creates a matrix by copying the first `rows * cols` values of an external buffer,
    /// converting each of them with `as` semantics.
    /// Returns an error if the buffer holds fewer values than the matrix needs.
    pub fn from_slice<U>(rows: usize, cols: usize, values: &[U]) -> Result<Self>
    where
        U: AsPrimitive<T>,
    {
        let size = Self::checked_size(rows, cols)?;
        if values.len() < size {
            return Err(MatrixError::ShapeMismatch(format!(
                "Buffer of {} values is too short for matrix of {rows}x{cols}",
                values.len()
            )));
        }

        Ok(Self {
            data: values[..size].iter().map(|v| v.as_()).collect(),
            rows,
            cols,
        })
    }

    /// Creates a single-row matrix holding the given values.
    pub fn from_row<U>(values: &[U]) -> Result<Self>
    where
        U: AsPrimitive<T>,
    {
        Self::from_slice(1, values.len(), values)
    }
}

impl<T: Element> TryFrom<Vec<T>> for Matrix<T> {
    type Error = MatrixError;

    /// Creates a single-row matrix which takes ownership of the values.
    fn try_from(data: Vec<T>) -> Result<Self> {
        let cols = data.len();
        Self::new(data, 1, cols)
    }
}

impl<T: Element, const C: usize> TryFrom<Vec<[T; C]>> for Matrix<T> {
    type Error = MatrixError;

    /// Creates a matrix with one row per array.
    fn try_from(rows: Vec<[T; C]>) -> Result<Self> {
        let row_count = rows.len();
        let data = rows.into_iter().flatten().collect();
        Self::new(data, row_count, C)
    }
}
