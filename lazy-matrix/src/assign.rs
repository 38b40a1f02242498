use super::*;

impl<T: Element> Matrix<T> {
    /// Replaces the content and shape of this matrix with those of `other`.
    ///
    /// Elements are converted with `as` semantics: narrowing is silent, floats are truncated
    /// toward zero (saturating at the bounds of an integer target) and integers wrap.
    pub fn assign<U>(&mut self, other: &Matrix<U>)
    where
        U: AsPrimitive<T>,
    {
        self.data.clear();
        self.data.extend(other.data.iter().map(|v| v.as_()));
        self.rows = other.rows;
        self.cols = other.cols;
    }

    /// Rewrites the content of the matrix in row-major order without changing its shape.
    /// Returns an error if the number of values differs from the number of elements.
    pub fn assign_values<U>(&mut self, values: &[U]) -> Result<()>
    where
        U: AsPrimitive<T>,
    {
        if values.len() != self.size() {
            return Err(MatrixError::ShapeMismatch(format!(
                "Cannot assign {} values to matrix of {}x{}",
                values.len(),
                self.rows,
                self.cols
            )));
        }

        self.data
            .iter_mut()
            .zip(values)
            .for_each(|(dst, src)| *dst = src.as_());
        Ok(())
    }
}
