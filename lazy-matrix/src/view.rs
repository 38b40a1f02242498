use super::*;
use std::ops::{Index, IndexMut};

impl<T> Matrix<T> {
    // Reshape operation - no data copying
    pub fn reshape(&mut self, rows: usize, cols: usize) -> Result<()> {
        if rows.checked_mul(cols) != Some(self.size()) {
            return Err(MatrixError::ShapeMismatch(format!(
                "Cannot reshape matrix of size {} to {rows}x{cols}",
                self.size()
            )));
        }

        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    // Get linear index of (i, j)
    fn get_index(&self, i: usize, j: usize) -> Result<usize> {
        if i >= self.rows || j >= self.cols {
            return Err(MatrixError::IndexOutOfBounds(format!(
                "Index ({i}, {j}) out of bounds for matrix of {}x{}",
                self.rows, self.cols
            )));
        }
        Ok(i * self.cols + j)
    }

    /// Returns a reference to the element at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Result<&T> {
        let index = self.get_index(i, j)?;
        Ok(&self.data[index])
    }

    /// Returns a mutable reference to the element at `(i, j)`.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        let index = self.get_index(i, j)?;
        Ok(&mut self.data[index])
    }

    /// Returns the contiguous elements of row `i`.
    pub fn row(&self, i: usize) -> Result<&[T]> {
        if i >= self.rows {
            return Err(MatrixError::IndexOutOfBounds(format!(
                "Row {i} out of bounds for matrix with {} rows",
                self.rows
            )));
        }
        Ok(self.row_unchecked(i))
    }

    pub(crate) fn row_unchecked(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Returns an iterator over all elements in row-major order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    /// Panics when `(i, j)` is outside of the matrix, use [`Matrix::get`] for a checked access.
    fn index(&self, (i, j): (usize, usize)) -> &T {
        match self.get(i, j) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        match self.get_index(i, j) {
            Ok(index) => &mut self.data[index],
            Err(err) => panic!("{err}"),
        }
    }
}
