//! The operators of an [`ExpressionRange`] tree.
//!
//! Each arithmetic operator in [`std::ops`] that [`ExpressionRange`]
//! overloads has a marker type here of the same name, which implements
//! [`Binary`] or [`Unary`] by delegating to the `std::ops` trait. For
//! example, `ops::Rem` applies [`std::ops::Rem`]. The markers are empty
//! enums, so they only ever appear as type parameters, e.g. the `B` of a
//! [`BinaryNode<L, R, B>`].
//!
//! Elements are combined with the element type's own arithmetic: integer
//! division truncates toward zero, and division by zero or overflow does
//! whatever the element type does.
//!
//! [`ExpressionRange`]: super::ExpressionRange
//! [`BinaryNode<L, R, B>`]: super::BinaryNode

/// An operator that combines a left operand `L` with a right operand `R`.
pub trait Binary<L, R> {
    type Output;

    fn call(left: L, right: R) -> Self::Output;
}

/// An operator with one operand.
pub trait Unary<A> {
    type Output;

    fn call(operand: A) -> Self::Output;
}

macro_rules! binary_markers {
    ($($Op:ident $method:ident),*) => { $(
        #[derive(Debug, Copy, Clone)]
        pub enum $Op {}

        impl<L: std::ops::$Op<R>, R> Binary<L, R> for $Op {
            type Output = L::Output;
            #[inline(always)]
            fn call(left: L, right: R) -> Self::Output { std::ops::$Op::$method(left, right) }
        }
    )* };
}

binary_markers!(Add add, Sub sub, Mul mul, Div div, Rem rem);

#[derive(Debug, Copy, Clone)]
pub enum Neg {}

impl<A: std::ops::Neg> Unary<A> for Neg {
    type Output = A::Output;
    #[inline(always)]
    fn call(operand: A) -> Self::Output { -operand }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_semantics() {
        assert_eq!(<Div as Binary<i32, i32>>::call(-7, 2), -3);
        assert_eq!(<Rem as Binary<i32, i32>>::call(-7, 2), -1);
        assert_eq!(<Sub as Binary<f64, f64>>::call(1.5, 0.5), 1.0);
        assert_eq!(<Mul as Binary<u8, u8>>::call(16, 15), 240);
        assert_eq!(<Neg as Unary<i64>>::call(4), -4);
    }

    #[test]
    fn mixed_operand_types() {
        assert_eq!(<Add as Binary<i32, &i32>>::call(2, &3), 5);
        assert_eq!(<Div as Binary<f32, f32>>::call(1.0, 0.0), f32::INFINITY);
    }
}
