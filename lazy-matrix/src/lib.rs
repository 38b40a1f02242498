//! Library crate for lazy_matrix
//!
//! Dense matrices and row vectors whose arithmetic operators build lazily evaluated expression
//! graphs. An expression such as `(&a + &b) - 2.0 * &c` allocates nothing until it is
//! materialized with [`Matrix::from_expr`] or [`Expr::eval`], which walks the graph once and
//! writes every element into a single freshly allocated buffer.
//!
//! ```
//! use lazy_matrix::{Expr, Matrix};
//!
//! let a = Matrix::new(vec![1., 2., 3., 4.], 2, 2)?;
//! let b = Matrix::new(vec![1., 2., 3., 4.], 2, 2)?;
//!
//! let product = (&a * &b).eval()?;
//! assert_eq!(product.as_slice(), &[7., 10., 15., 22.]);
//!
//! let mixed = Matrix::<f64>::from_expr(&a + &b - a.t())?;
//! assert_eq!(mixed.as_slice(), &[1., 1., 4., 4.]);
//! # Ok::<(), lazy_matrix::MatrixError>(())
//! ```

use num_traits::{AsPrimitive, Num};
use std::fmt;

mod assign;
mod constructive;
mod display;
mod error;
mod expr;
mod materialize;
mod math;
mod misc;
mod vector;
mod view;

pub use crate::error::MatrixError;
pub use crate::expr::{
    Cast, Deduct, Difference, Expr, Hadamard, MatrixProduct, Scale, Shift, Sum, Transposed,
};
pub use crate::materialize::Parallelism;
pub use crate::vector::Vector;

pub type Result<T> = std::result::Result<T, error::MatrixError>;

/// Numeric element types a matrix can hold.
///
/// Implemented for every type with the usual arithmetic operators which can be shared across
/// threads, which in practice means the primitive integer and floating point types.
pub trait Element: Num + Copy + Send + Sync + fmt::Debug + fmt::Display + 'static {}

impl<T> Element for T where T: Num + Copy + Send + Sync + fmt::Debug + fmt::Display + 'static {}

/// Represents a dense two-dimensional matrix with generic element type T.
///
/// Elements are stored in a single contiguous row-major buffer: the element at `(i, j)` lives at
/// `i * cols + j`. The buffer length always equals `rows * cols` and both extents are positive.
///
/// Borrowing a matrix (`&m`) turns it into an [`Expr`] leaf, so matrices take part in
/// arithmetic only through lazy expressions. Mutating a matrix while an expression still
/// borrows it is rejected by the borrow checker.
#[derive(Clone)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Checks that `rows x cols` describes a non-empty buffer which can be allocated and whose
    /// row-major offsets cannot overflow. Returns the element count.
    fn checked_size(rows: usize, cols: usize) -> Result<usize> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions(format!(
                "Matrix extents must be positive, got {rows}x{cols}"
            )));
        }

        let max_elements = isize::MAX as usize / std::mem::size_of::<T>().max(1);
        rows.checked_mul(cols)
            .filter(|&size| size <= max_elements)
            .ok_or_else(|| {
                MatrixError::InvalidDimensions(format!(
                    "Matrix of {rows}x{cols} elements exceeds the maximum supported size"
                ))
            })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total number of elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the underlying row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Element> Matrix<T> {
    /// Converts every element with `as` semantics, see [`Matrix::assign`] for the rules.
    pub fn convert<U>(&self) -> Matrix<U>
    where
        T: AsPrimitive<U>,
        U: Element,
    {
        Matrix {
            data: self.data.iter().map(|v| v.as_()).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}
