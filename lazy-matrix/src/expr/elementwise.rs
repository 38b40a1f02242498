use super::*;

macro_rules! elementwise_node {
    ($(#[$meta:meta])* $name:ident, $op:tt, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name<L, R> {
            lhs: L,
            rhs: R,
        }

        impl<L, R> $name<L, R>
        where
            L: Expr,
            R: Expr<Elem = L::Elem>,
        {
            /// Creates the node after checking that both operands have the same shape.
            pub fn new(lhs: L, rhs: R) -> Result<Self> {
                let node = Self::lazy(lhs, rhs);
                node.check_shapes()?;
                Ok(node)
            }

            pub(crate) fn lazy(lhs: L, rhs: R) -> Self {
                Self { lhs, rhs }
            }

            fn check_shapes(&self) -> Result<()> {
                if self.lhs.rows() != self.rhs.rows() || self.lhs.cols() != self.rhs.cols() {
                    return Err(shape_mismatch($label, &self.lhs, &self.rhs));
                }
                Ok(())
            }
        }

        impl<L, R> Expr for $name<L, R>
        where
            L: Expr,
            R: Expr<Elem = L::Elem>,
        {
            type Elem = L::Elem;

            #[inline]
            fn at(&self, i: usize, j: usize) -> Self::Elem {
                self.lhs.at(i, j) $op self.rhs.at(i, j)
            }

            fn rows(&self) -> usize {
                self.lhs.rows()
            }

            fn cols(&self) -> usize {
                self.lhs.cols()
            }

            fn validate(&self) -> Result<()> {
                self.lhs.validate()?;
                self.rhs.validate()?;
                self.check_shapes()
            }
        }
    };
}

elementwise_node!(
    /// Element-wise sum of two expressions of the same shape, built by `a + b`.
    Sum, +, "sum"
);

elementwise_node!(
    /// Element-wise difference of two expressions of the same shape, built by `a - b`.
    Difference, -, "difference"
);

elementwise_node!(
    /// Element-wise (Hadamard) product of two expressions of the same shape, built by `a & b`.
    /// `*` is reserved for the matrix product.
    Hadamard, *, "element-wise product"
);
