use super::*;
use num_traits::NumCast;

impl<T: Element> Matrix<T> {
    /// Returns a new matrix with rows and columns swapped: `result(i, j) == self(j, i)`.
    /// Unlike [`Expr::t`] this copies the elements right away.
    pub fn transpose(&self) -> Matrix<T> {
        let (rows, cols) = (self.cols, self.rows);
        let mut data = Vec::with_capacity(self.size());

        for i in 0..rows {
            data.extend((0..cols).map(|j| self.data[j * self.cols + i]));
        }

        Matrix { data, rows, cols }
    }

    /// Converts every element to `U`, failing on the first value which `U` cannot represent.
    pub fn try_convert<U>(&self) -> Result<Matrix<U>>
    where
        T: NumCast,
        U: Element + NumCast,
    {
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                <U as NumCast>::from(value).ok_or_else(|| {
                    MatrixError::CastError(format!(
                        "Value {value} at ({}, {}) is not representable as {}",
                        index / self.cols,
                        index % self.cols,
                        std::any::type_name::<U>()
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}
