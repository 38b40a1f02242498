//! Lazily evaluated matrix expressions.
//!
//! Every operator applied to a borrowed [`Matrix`]/[`Vector`] or to another expression returns
//! a node which only records its operands. Nodes are plain generic structs, so an expression
//! like `&a + &b - &c` has the type `Difference<Sum<&Matrix<T>, &Matrix<T>>, &Matrix<T>>` and
//! every element access is statically dispatched.
//!
//! Operators never fail: the dimensional contracts of a graph are checked by [`Expr::validate`],
//! which the materializer runs before it allocates the result. Use the checked constructors
//! (e.g. [`Sum::new`]) to detect a mismatch at the point where a node is built.

use crate::{Element, Matrix, Result, Vector};
use num_traits::AsPrimitive;
use std::ops::{Add, BitAnd, Mul, Sub};

mod cast;
mod elementwise;
mod matmul;
mod scalar;
mod transpose;

pub use self::cast::Cast;
pub use self::elementwise::{Difference, Hadamard, Sum};
pub use self::matmul::MatrixProduct;
pub use self::scalar::{Deduct, Scale, Shift};
pub use self::transpose::Transposed;

/// A two-dimensional expression whose elements are computed on demand.
///
/// Elements are combined with the element type's own operators. For primitive integers an
/// overflow therefore panics in debug builds and wraps in release builds; use
/// [`std::num::Wrapping`] elements for modular arithmetic in every profile.
pub trait Expr: Sync {
    type Elem: Element;

    /// Computes the element at `(i, j)`.
    ///
    /// Callers must pass indices inside `rows() x cols()` of an expression which passed
    /// [`Expr::validate`]; nothing is checked here since this runs once per element.
    fn at(&self, i: usize, j: usize) -> Self::Elem;

    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Checks the dimensional contracts of this node and all of its operands.
    fn validate(&self) -> Result<()>;

    /// Lazily swaps rows and columns.
    fn t(self) -> Transposed<Self>
    where
        Self: Sized,
    {
        Transposed::new(self)
    }

    /// Lazily converts every element with `as` semantics.
    fn cast<U>(self) -> Cast<Self, U>
    where
        Self: Sized,
        Self::Elem: AsPrimitive<U>,
        U: Element,
    {
        Cast::new(self)
    }

    /// Materializes the expression into a new matrix.
    fn eval(self) -> Result<Matrix<Self::Elem>>
    where
        Self: Sized,
    {
        Matrix::from_expr(self)
    }
}

impl<T: Element> Expr for &Matrix<T> {
    type Elem = T;

    #[inline]
    fn at(&self, i: usize, j: usize) -> T {
        self.data[i * self.cols + j]
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl<T: Element> Expr for &Vector<T> {
    type Elem = T;

    #[inline]
    fn at(&self, _: usize, j: usize) -> T {
        self.as_slice()[j]
    }

    fn rows(&self) -> usize {
        1
    }

    fn cols(&self) -> usize {
        self.len()
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Implements the expression operators for an expression type:
/// `+`, `-`, `&` (element-wise product) and `*` (matrix product) against any other expression
/// with the same element type, plus the scalar forms for every primitive numeric type.
macro_rules! impl_expr_ops {
    ([$($g:tt)*] $ty:ty) => {
        impl<$($g)* Rhs> Add<Rhs> for $ty
        where
            $ty: Expr,
            Rhs: Expr<Elem = <$ty as Expr>::Elem>,
        {
            type Output = Sum<$ty, Rhs>;

            fn add(self, rhs: Rhs) -> Self::Output {
                Sum::lazy(self, rhs)
            }
        }

        impl<$($g)* Rhs> Sub<Rhs> for $ty
        where
            $ty: Expr,
            Rhs: Expr<Elem = <$ty as Expr>::Elem>,
        {
            type Output = Difference<$ty, Rhs>;

            fn sub(self, rhs: Rhs) -> Self::Output {
                Difference::lazy(self, rhs)
            }
        }

        impl<$($g)* Rhs> BitAnd<Rhs> for $ty
        where
            $ty: Expr,
            Rhs: Expr<Elem = <$ty as Expr>::Elem>,
        {
            type Output = Hadamard<$ty, Rhs>;

            fn bitand(self, rhs: Rhs) -> Self::Output {
                Hadamard::lazy(self, rhs)
            }
        }

        impl<$($g)* Rhs> Mul<Rhs> for $ty
        where
            $ty: Expr,
            Rhs: Expr<Elem = <$ty as Expr>::Elem>,
        {
            type Output = MatrixProduct<$ty, <$ty as Expr>::Elem>;

            fn mul(self, rhs: Rhs) -> Self::Output {
                MatrixProduct::lazy(self, rhs)
            }
        }

        impl_scalar_ops!([$($g)*] $ty; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
    };
}

/// Implements `expr * s`, `s * expr`, `expr + s`, `s + expr` and `expr - s` for each listed
/// scalar type whenever it is the element type of the expression.
macro_rules! impl_scalar_ops {
    ([$($g:tt)*] $ty:ty;) => {};
    ([$($g:tt)*] $ty:ty; $scalar:ty $(, $rest:ty)*) => {
        impl<$($g)*> Mul<$scalar> for $ty
        where
            $ty: Expr<Elem = $scalar>,
        {
            type Output = Scale<$ty, $scalar>;

            fn mul(self, scalar: $scalar) -> Self::Output {
                Scale::new(self, scalar)
            }
        }

        impl<$($g)*> Mul<$ty> for $scalar
        where
            $ty: Expr<Elem = $scalar>,
        {
            type Output = Scale<$ty, $scalar>;

            fn mul(self, expr: $ty) -> Self::Output {
                Scale::new(expr, self)
            }
        }

        impl<$($g)*> Add<$scalar> for $ty
        where
            $ty: Expr<Elem = $scalar>,
        {
            type Output = Shift<$ty, $scalar>;

            fn add(self, scalar: $scalar) -> Self::Output {
                Shift::new(self, scalar)
            }
        }

        impl<$($g)*> Add<$ty> for $scalar
        where
            $ty: Expr<Elem = $scalar>,
        {
            type Output = Shift<$ty, $scalar>;

            fn add(self, expr: $ty) -> Self::Output {
                Shift::new(expr, self)
            }
        }

        impl<$($g)*> Sub<$scalar> for $ty
        where
            $ty: Expr<Elem = $scalar>,
        {
            type Output = Deduct<$ty, $scalar>;

            fn sub(self, scalar: $scalar) -> Self::Output {
                Deduct::new(self, scalar)
            }
        }

        impl_scalar_ops!([$($g)*] $ty; $($rest),*);
    };
}

impl_expr_ops!(['a, T,] &'a Matrix<T>);
impl_expr_ops!(['a, T,] &'a Vector<T>);
impl_expr_ops!([L, R,] Sum<L, R>);
impl_expr_ops!([L, R,] Difference<L, R>);
impl_expr_ops!([L, R,] Hadamard<L, R>);
impl_expr_ops!([L, T,] MatrixProduct<L, T>);
impl_expr_ops!([E, S,] Scale<E, S>);
impl_expr_ops!([E, S,] Shift<E, S>);
impl_expr_ops!([E, S,] Deduct<E, S>);
impl_expr_ops!([E,] Transposed<E>);
impl_expr_ops!([E, U,] Cast<E, U>);

/// Builds the error reported when two operands of an element-wise node differ in shape.
fn shape_mismatch(op: &str, lhs: &impl Expr, rhs: &impl Expr) -> crate::MatrixError {
    crate::MatrixError::ShapeMismatch(format!(
        "Operands of {op} must have the same shape: {}x{} != {}x{}",
        lhs.rows(),
        lhs.cols(),
        rhs.rows(),
        rhs.cols()
    ))
}
