//! Lazy elementwise arithmetic on sequences.
//!
//! Wrap a sequence with [`range_algebra()`] or [`range_algebra_ref()`] to get
//! an [`ExpressionRange`], which overloads `+`, `-`, `*`, `/`, `%` and unary
//! `-`. The result of an operator is another `ExpressionRange` whose elements
//! are computed when they are read. Operands can be expression ranges (by
//! value or by reference), [`Scalar`]s or primitive numbers, and expressions
//! nest to any depth.
//!
//! An expression over [`Shared`] storage can be written back with
//! [`assign()`](ExpressionRange::assign):
//!
//! ```
//! use lockstep::{range_algebra_ref};
//! let mut a = vec![10, 20, 30, 40];
//! let ra = range_algebra_ref(&mut a);
//! ra.assign(ra * 2 + 5);
//! assert_eq!(a, [25, 45, 65, 85]);
//! ```

use std::marker::{PhantomData};

use super::{Cursor, ValueCursor, RandomAccessCursor, Sequence, ValueSequence, Iter};
use super::{Scalar, Shared, shared, LockstepIterator, TransformRange};
use super::ops::{self, Binary, Unary};
use super::tuple::{ValueSequences, Call};

/// Wraps a [`Sequence`] so that it can be combined using arithmetic
/// operators.
///
/// An `ExpressionRange` dereferences to whatever its sequence dereferences
/// to. The operators are implemented for `ExpressionRange<S>` and
/// `&ExpressionRange<S>`; the latter borrows the sequence into the
/// expression.
#[derive(Debug, Default, Copy, Clone)]
pub struct ExpressionRange<S>(S);

impl<S> ExpressionRange<S> {
    pub fn new(sequence: S) -> Self { ExpressionRange(sequence) }

    /// The wrapped sequence.
    pub fn inner(&self) -> &S { &self.0 }

    pub fn into_inner(self) -> S { self.0 }

    /// Borrow the storage of `self` for writing, e.g. so that an owned
    /// `ExpressionRange` can be the target of [`assign()`].
    ///
    /// ```
    /// use lockstep::{range_algebra, ValueSequence};
    /// let mut ra = range_algebra(vec![1, 2, 3]);
    /// let s = ra.shared();
    /// s.assign(-s);
    /// assert_eq!(ra.values().collect::<Vec<_>>(), [-1, -2, -3]);
    /// ```
    ///
    /// [`assign()`]: Self::assign()
    pub fn shared<T>(&mut self) -> ExpressionRange<Shared<'_, T>> where S: AsMut<[T]> {
        ExpressionRange(shared(self.0.as_mut()))
    }
}

impl<'s, T> ExpressionRange<Shared<'s, T>> {
    /// Evaluate `source` and write it into the storage of `self`, position
    /// by position, stopping at the end of the shorter.
    ///
    /// At each position the value is read before it is written, so `source`
    /// may read the same storage, e.g. `ra.assign(ra + 5)`.
    pub fn assign<E: ValueSequence<Value=T>>(&self, source: E) {
        let mut target = self.0.begin();
        let mut values = source.begin();
        let mut written: usize = 0;
        while !target.is_end() && !values.is_end() {
            let value = E::load(values.get());
            target.get().set(value);
            target.advance();
            values.advance();
            written += 1;
        }
        tracing::trace!(written, "assigned expression");
    }
}

impl<S: Sequence> Sequence for ExpressionRange<S> {
    type Cursor<'a> = S::Cursor<'a> where Self: 'a;
    #[inline(always)]
    fn begin(&self) -> Self::Cursor<'_> { self.0.begin() }
    #[inline(always)]
    fn len(&self) -> usize { self.0.len() }
}

impl<S: ValueSequence> ValueSequence for ExpressionRange<S> {
    type Value = S::Value;
    #[inline(always)]
    fn load<'a>(item: <S::Cursor<'a> as Cursor>::Item) -> S::Value where Self: 'a { S::load(item) }
}

impl<'a, S: Sequence> IntoIterator for &'a ExpressionRange<S> {
    type Item = <S::Cursor<'a> as Cursor>::Item;
    type IntoIter = Iter<S::Cursor<'a>>;
    fn into_iter(self) -> Self::IntoIter { Iter::new(self.begin()) }
}

/// Wrap `sequence`, which may be owned or borrowed, in an
/// [`ExpressionRange`].
pub fn range_algebra<S: Sequence>(sequence: S) -> ExpressionRange<S> {
    ExpressionRange(sequence)
}

/// Borrow `items` for writing and wrap them in an [`ExpressionRange`].
///
/// The result is `Copy`, so it can appear several times in one expression
/// and still be the target of [`assign()`](ExpressionRange::assign).
pub fn range_algebra_ref<T>(items: &mut [T]) -> ExpressionRange<Shared<'_, T>> {
    ExpressionRange(shared(items))
}

// ----------------------------------------------------------------------------

/// The result of a binary operator on two sequences.
///
/// Its elements are `B::call(l, r)` for the elements `l` and `r` at the
/// same position. It is as long as the shorter operand.
#[derive(Debug, Copy, Clone)]
pub struct BinaryNode<L, R, B>(L, R, PhantomData<B>);

impl<L, R, B> BinaryNode<L, R, B> {
    pub fn new(left: L, right: R) -> Self { BinaryNode(left, right, PhantomData) }
}

impl<L: ValueSequence, R: ValueSequence, B> Sequence for BinaryNode<L, R, B> where
    B: Binary<L::Value, R::Value>,
{
    type Cursor<'a> = BinaryCursor<'a, L, R, B> where Self: 'a;
    #[inline(always)]
    fn begin(&self) -> Self::Cursor<'_> {
        BinaryCursor(LockstepIterator::new((self.0.begin(), self.1.begin())), PhantomData)
    }
    #[inline(always)]
    fn len(&self) -> usize { std::cmp::min(self.0.len(), self.1.len()) }
}

impl<L: ValueSequence, R: ValueSequence, B> ValueSequence for BinaryNode<L, R, B> where
    B: Binary<L::Value, R::Value>,
{
    type Value = B::Output;
    #[inline(always)]
    fn load<'a>(item: B::Output) -> B::Output where Self: 'a { item }
}

/// The [`Cursor`] type of [`BinaryNode`].
pub struct BinaryCursor<'a, L: Sequence + 'a, R: Sequence + 'a, B>(
    LockstepIterator<(L::Cursor<'a>, R::Cursor<'a>)>,
    PhantomData<B>,
);

impl<'a, L: Sequence + 'a, R: Sequence + 'a, B> Clone for BinaryCursor<'a, L, R, B> where
    L::Cursor<'a>: Clone,
    R::Cursor<'a>: Clone,
{
    fn clone(&self) -> Self { BinaryCursor(self.0.clone(), PhantomData) }
}

impl<'a, L: Sequence + 'a, R: Sequence + 'a, B> std::fmt::Debug for BinaryCursor<'a, L, R, B> where
    L::Cursor<'a>: std::fmt::Debug,
    R::Cursor<'a>: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("BinaryCursor").field(&self.0).finish()
    }
}

impl<'a, L: ValueSequence + 'a, R: ValueSequence + 'a, B> Cursor for BinaryCursor<'a, L, R, B> where
    B: Binary<L::Value, R::Value>,
{
    type Item = B::Output;
    #[inline(always)]
    fn is_end(&self) -> bool { self.0.is_end() }
    #[inline(always)]
    fn advance(&mut self) { self.0.advance() }
    #[inline(always)]
    fn get(&self) -> Self::Item {
        let (l, r) = self.0.get();
        B::call(L::load(l), R::load(r))
    }
    #[inline(always)]
    fn advance_by(&mut self, n: usize) { self.0.advance_by(n) }
    #[inline(always)]
    fn remaining(&self) -> (usize, Option<usize>) { self.0.remaining() }
}

impl<'a, L: ValueSequence + 'a, R: ValueSequence + 'a, B> ValueCursor for BinaryCursor<'a, L, R, B> where
    B: Binary<L::Value, R::Value>,
{
    type Value = B::Output;
    #[inline(always)]
    fn value(&self) -> Self::Value { self.get() }
}

impl<'a, L: ValueSequence + 'a, R: ValueSequence + 'a, B> RandomAccessCursor for BinaryCursor<'a, L, R, B> where
    B: Binary<L::Value, R::Value>,
    L::Cursor<'a>: RandomAccessCursor,
    R::Cursor<'a>: RandomAccessCursor,
{
    #[inline(always)]
    fn position(&self) -> isize { self.0.position() }
    #[inline(always)]
    fn len(&self) -> usize { self.0.len() }
    #[inline(always)]
    fn jump(&mut self, offset: isize) { self.0.jump(offset) }
}

// ----------------------------------------------------------------------------

/// The result of a unary operator on a sequence.
#[derive(Debug, Copy, Clone)]
pub struct UnaryNode<S, U>(S, PhantomData<U>);

impl<S, U> UnaryNode<S, U> {
    pub fn new(sequence: S) -> Self { UnaryNode(sequence, PhantomData) }
}

impl<S: ValueSequence, U: Unary<S::Value>> Sequence for UnaryNode<S, U> {
    type Cursor<'a> = UnaryCursor<'a, S, U> where Self: 'a;
    #[inline(always)]
    fn begin(&self) -> Self::Cursor<'_> { UnaryCursor(self.0.begin(), PhantomData) }
    #[inline(always)]
    fn len(&self) -> usize { self.0.len() }
}

impl<S: ValueSequence, U: Unary<S::Value>> ValueSequence for UnaryNode<S, U> {
    type Value = U::Output;
    #[inline(always)]
    fn load<'a>(item: U::Output) -> U::Output where Self: 'a { item }
}

/// The [`Cursor`] type of [`UnaryNode`].
pub struct UnaryCursor<'a, S: Sequence + 'a, U>(S::Cursor<'a>, PhantomData<U>);

impl<'a, S: Sequence + 'a, U> Clone for UnaryCursor<'a, S, U> where S::Cursor<'a>: Clone {
    fn clone(&self) -> Self { UnaryCursor(self.0.clone(), PhantomData) }
}

impl<'a, S: Sequence + 'a, U> std::fmt::Debug for UnaryCursor<'a, S, U> where
    S::Cursor<'a>: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("UnaryCursor").field(&self.0).finish()
    }
}

impl<'a, S: ValueSequence + 'a, U: Unary<S::Value>> Cursor for UnaryCursor<'a, S, U> {
    type Item = U::Output;
    #[inline(always)]
    fn is_end(&self) -> bool { self.0.is_end() }
    #[inline(always)]
    fn advance(&mut self) { self.0.advance() }
    #[inline(always)]
    fn get(&self) -> Self::Item { U::call(S::load(self.0.get())) }
    #[inline(always)]
    fn advance_by(&mut self, n: usize) { self.0.advance_by(n) }
    #[inline(always)]
    fn remaining(&self) -> (usize, Option<usize>) { self.0.remaining() }
}

impl<'a, S: ValueSequence + 'a, U: Unary<S::Value>> ValueCursor for UnaryCursor<'a, S, U> {
    type Value = U::Output;
    #[inline(always)]
    fn value(&self) -> Self::Value { self.get() }
}

impl<'a, S: ValueSequence + 'a, U: Unary<S::Value>> RandomAccessCursor for UnaryCursor<'a, S, U> where
    S::Cursor<'a>: RandomAccessCursor,
{
    #[inline(always)]
    fn position(&self) -> isize { self.0.position() }
    #[inline(always)]
    fn len(&self) -> usize { self.0.len() }
    #[inline(always)]
    fn jump(&mut self, offset: isize) { self.0.jump(offset) }
}

// ----------------------------------------------------------------------------

/// Implemented by types that can be an operand of an [`ExpressionRange`]
/// operator or of [`expression_transform()`].
pub trait IntoOperand {
    type Operand: ValueSequence;

    fn into_operand(self) -> Self::Operand;
}

impl<S: ValueSequence> IntoOperand for ExpressionRange<S> {
    type Operand = S;
    fn into_operand(self) -> S { self.0 }
}

impl<'a, S: ValueSequence> IntoOperand for &'a ExpressionRange<S> {
    type Operand = &'a S;
    fn into_operand(self) -> &'a S { &self.0 }
}

impl<T: Clone> IntoOperand for Scalar<T> {
    type Operand = Self;
    fn into_operand(self) -> Self { self }
}

/// A tuple of [`IntoOperand`]s.
pub trait IntoOperands {
    type Operands: ValueSequences;

    fn into_operands(self) -> Self::Operands;
}

macro_rules! impl_into_operands {
    ($(($($X:ident $i:tt),+))*) => { $(
        impl<$($X: IntoOperand),+> IntoOperands for ($($X,)+) {
            type Operands = ($($X::Operand,)+);
            fn into_operands(self) -> Self::Operands { ($(self.$i.into_operand(),)+) }
        }
    )* };
}

impl_into_operands! {
    (X0 0)
    (X0 0, X1 1)
    (X0 0, X1 1, X2 2)
    (X0 0, X1 1, X2 2, X3 3)
    (X0 0, X1 1, X2 2, X3 3, X4 4)
    (X0 0, X1 1, X2 2, X3 3, X4 4, X5 5)
    (X0 0, X1 1, X2 2, X3 3, X4 4, X5 5, X6 6)
    (X0 0, X1 1, X2 2, X3 3, X4 4, X5 5, X6 6, X7 7)
}

/// Apply `f` elementwise to `operands`, which is a tuple of expression
/// ranges, references to them, and scalars.
///
/// This generalizes the arithmetic operators to any function.
///
/// ```
/// use lockstep::{ValueSequence, Scalar, range_algebra, expression_transform};
/// let ra = range_algebra(vec![10, 20, 30]);
/// let out = expression_transform(|x: i32, k: i32| x.max(k), (&ra, Scalar(15)));
/// assert_eq!(out.values().collect::<Vec<_>>(), [15, 20, 30]);
/// ```
pub fn expression_transform<F, O: IntoOperands, R>(f: F, operands: O)
-> ExpressionRange<TransformRange<F, O::Operands, R>> where
    F: Call<<O::Operands as ValueSequences>::Values, R>,
{
    ExpressionRange(TransformRange::new(f, operands.into_operands()))
}

// ----------------------------------------------------------------------------

macro_rules! impl_binary_ops {
    ($($Op:ident $method:ident),*) => { $(
        impl<S: ValueSequence, Rhs: IntoOperand> std::ops::$Op<Rhs> for ExpressionRange<S> {
            type Output = ExpressionRange<BinaryNode<S, Rhs::Operand, ops::$Op>>;
            fn $method(self, rhs: Rhs) -> Self::Output {
                ExpressionRange(BinaryNode::new(self.0, rhs.into_operand()))
            }
        }

        impl<'a, S: ValueSequence, Rhs: IntoOperand> std::ops::$Op<Rhs> for &'a ExpressionRange<S> {
            type Output = ExpressionRange<BinaryNode<&'a S, Rhs::Operand, ops::$Op>>;
            fn $method(self, rhs: Rhs) -> Self::Output {
                ExpressionRange(BinaryNode::new(&self.0, rhs.into_operand()))
            }
        }

        impl<T: Clone, S: ValueSequence> std::ops::$Op<ExpressionRange<S>> for Scalar<T> {
            type Output = ExpressionRange<BinaryNode<Scalar<T>, S, ops::$Op>>;
            fn $method(self, rhs: ExpressionRange<S>) -> Self::Output {
                ExpressionRange(BinaryNode::new(self, rhs.0))
            }
        }

        impl<'a, T: Clone, S: ValueSequence> std::ops::$Op<&'a ExpressionRange<S>> for Scalar<T> {
            type Output = ExpressionRange<BinaryNode<Scalar<T>, &'a S, ops::$Op>>;
            fn $method(self, rhs: &'a ExpressionRange<S>) -> Self::Output {
                ExpressionRange(BinaryNode::new(self, &rhs.0))
            }
        }
    )* };
}

impl_binary_ops!(Add add, Sub sub, Mul mul, Div div, Rem rem);

impl<S: ValueSequence> std::ops::Neg for ExpressionRange<S> {
    type Output = ExpressionRange<UnaryNode<S, ops::Neg>>;
    fn neg(self) -> Self::Output { ExpressionRange(UnaryNode::new(self.0)) }
}

impl<'a, S: ValueSequence> std::ops::Neg for &'a ExpressionRange<S> {
    type Output = ExpressionRange<UnaryNode<&'a S, ops::Neg>>;
    fn neg(self) -> Self::Output { ExpressionRange(UnaryNode::new(&self.0)) }
}

macro_rules! impl_scalar_operand {
    (@ops $T:ty, $($Op:ident $method:ident),*) => { $(
        impl<S: ValueSequence> std::ops::$Op<ExpressionRange<S>> for $T {
            type Output = ExpressionRange<BinaryNode<Scalar<$T>, S, ops::$Op>>;
            fn $method(self, rhs: ExpressionRange<S>) -> Self::Output {
                ExpressionRange(BinaryNode::new(Scalar(self), rhs.0))
            }
        }

        impl<'a, S: ValueSequence> std::ops::$Op<&'a ExpressionRange<S>> for $T {
            type Output = ExpressionRange<BinaryNode<Scalar<$T>, &'a S, ops::$Op>>;
            fn $method(self, rhs: &'a ExpressionRange<S>) -> Self::Output {
                ExpressionRange(BinaryNode::new(Scalar(self), &rhs.0))
            }
        }
    )* };

    ($($T:ty),*) => { $(
        impl IntoOperand for $T {
            type Operand = Scalar<$T>;
            fn into_operand(self) -> Scalar<$T> { Scalar(self) }
        }

        impl_scalar_operand!(@ops $T, Add add, Sub sub, Mul mul, Div div, Rem rem);
    )* };
}

impl_scalar_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{Uncopyable};

    #[test]
    fn by_reference() {
        let mut a = vec![10, 20, 30, 40];
        let ra = range_algebra_ref(&mut a);
        ra.assign(ra + 5);
        assert_eq!(ra.values().nth(2), Some(35));
        assert_eq!(a, [15, 25, 35, 45]);
    }

    #[test]
    fn read_only_reference() {
        let a = vec![10, 20, 30, 40];
        let ra = range_algebra(&a);
        let sum = ra + 5;
        assert_eq!(sum.values().nth(2), Some(35));
        assert_eq!(a[2], 30);
    }

    #[test]
    fn copy() {
        let a = vec![10, 20, 30, 40];
        let mut ra = range_algebra(a.clone());
        let s = ra.shared();
        s.assign(s + 5);
        assert_eq!(ra.values().nth(2), Some(35));
        assert_eq!(a[2], 30);
    }

    #[test]
    fn moved() {
        let a = Uncopyable::new([10, 20, 30, 40]);
        let mut ra = range_algebra(a);
        let s = ra.shared();
        s.assign(s + 5);
        let mut cursor = ra.begin();
        cursor.advance();
        assert_eq!(cursor.value(), 25);
    }

    #[test]
    fn operators() {
        let ra = range_algebra(Uncopyable::new([10, 20, 30, 40]));
        let rb = range_algebra(Uncopyable::new([1, 2, 3, 4]));
        let expression = -&ra + 5 * &rb - &ra * 3 / &rb + &ra % 7;
        assert_eq!(expression.values().nth(1), Some(-20 + 5 * 2 - 20 * 3 / 2 + 20 % 7));
        let expected: Vec<i32> = ra.values().zip(rb.values())
            .map(|(a, b)| -a + 5 * b - a * 3 / b + a % 7)
            .collect();
        assert_eq!(expression.values().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn assign_compound_expression() {
        let mut a = vec![10, 20, 30, 40];
        let b = vec![1, 2, 3, 4];
        let ra = range_algebra_ref(&mut a);
        let rb = range_algebra(&b);
        ra.assign(-ra + 5 * &rb - ra * 3 / &rb + ra % 7);
        assert_eq!(a[1], -34);
    }

    #[test]
    fn scalar_on_the_left() {
        let ra = range_algebra(vec![1, 2, 3]);
        assert_eq!((Scalar(10) - &ra).values().collect::<Vec<_>>(), [9, 8, 7]);
        assert_eq!((Scalar(2) * ra).values().collect::<Vec<_>>(), [2, 4, 6]);
        let rb = range_algebra(vec![2.0, 4.0]);
        assert_eq!((Scalar(1.0) / &rb).values().collect::<Vec<_>>(), [0.5, 0.25]);
    }

    #[test]
    fn assign_elements_that_are_not_copy() {
        let mut names = vec![String::new(), String::new(), String::from("kept")];
        let source = vec![String::from("p"), String::from("q")];
        range_algebra_ref(&mut names).assign(&source);
        assert_eq!(names, ["p", "q", "kept"]);
    }

    #[test]
    fn shortest_operand_wins() {
        let ra = range_algebra(vec![1, 2, 3, 4]);
        let rb = range_algebra(vec![10, 20]);
        let sum = &ra + &rb;
        assert_eq!(sum.len(), 2);
        assert_eq!(sum.values().collect::<Vec<_>>(), [11, 22]);
        assert_eq!((&ra - Scalar(1)).len(), 4);
    }

    #[test]
    fn nesting_and_random_access() {
        let ra = range_algebra(vec![1.0, 2.0, 3.0]);
        let rb = range_algebra(vec![4.0, 5.0, 6.0]);
        let e = (&ra + &rb) * (&rb - &ra) / 2.0;
        let mut cursor = e.begin();
        cursor.jump(2);
        assert_eq!(cursor.value(), (3.0 + 6.0) * (6.0 - 3.0) / 2.0);
        cursor.jump(-1);
        assert_eq!(cursor.value(), (2.0 + 5.0) * (5.0 - 2.0) / 2.0);
    }

    #[test]
    fn transform_all_ranges() {
        let ra = range_algebra(Uncopyable::new([10, 20, 30, 40]));
        let rb = range_algebra(Uncopyable::new([1, 2, 3, 4]));
        let out = expression_transform(|x: i32, y: i32| x + y, (&ra, &rb));
        assert_eq!(out.values().nth(1), Some(20 + 2));
    }

    #[test]
    fn transform_mixed() {
        let ra = range_algebra(Uncopyable::new([10, 20, 30, 40]));
        let rb = range_algebra(Uncopyable::new([1, 2, 3, 4]));
        let out = expression_transform(|x: i32, y: i32| x + y, (1i32, &rb));
        assert_eq!(out.values().nth(1), Some(1 + 2));
        let out = expression_transform(|x: i32, y: i32| x + y, (&ra, Scalar(3)));
        assert_eq!(out.values().nth(1), Some(20 + 3));
        assert_eq!((out * 2).values().nth(1), Some(46));
    }

    #[test]
    fn float_division_by_zero() {
        let ra = range_algebra(vec![1.0f64, -1.0]);
        let q = ra / 0.0;
        assert_eq!(q.values().collect::<Vec<_>>(), [f64::INFINITY, f64::NEG_INFINITY]);
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero() {
        let ra = range_algebra(vec![1, 2]);
        (ra / 0).each(|_| {});
    }
}
