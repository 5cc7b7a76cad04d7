//! Cursors and the sequences that hand them out.
//!
//! A [`Cursor`] is a position in a sequence that knows its own bound, so it
//! can be advanced and tested for the end without consulting anything else.
//! A [`Sequence`] is anything that can hand out a cursor at its first
//! element. Every combinator in this crate is itself a `Sequence`, which is
//! what lets them nest.
//!
//! Reading an element by value is a separate capability. [`ValueCursor`] and
//! [`ValueSequence`] are implemented only where the element can be
//! duplicated, so a `Vec<Mutex<T>>` can still be traversed in lockstep, and a
//! `Vec<String>` can still be written through.
//!
//! The ownership of the underlying storage is chosen by the type you pass:
//!
//! - `v` or `v.clone()` - the combinator owns the storage.
//! - `&v` - the combinator borrows the storage read-only.
//! - [`shared(&mut v)`] - the combinator borrows the storage and can write
//!   through it.
//!
//! [`shared(&mut v)`]: shared

use std::cell::{Cell};
use std::collections::{VecDeque};
use std::fmt::{Debug};

/// The length reported by sequences that never end, e.g. [`Scalar`].
pub const UNBOUNDED: usize = isize::MAX as usize;

#[inline(always)]
pub(crate) fn in_bounds(position: isize, len: usize) -> bool {
    position >= 0 && (position as usize) < len
}

/// The [`Cursor::remaining()`] of a random-access cursor.
#[inline(always)]
pub(crate) fn bounded_hint(position: isize, len: usize) -> (usize, Option<usize>) {
    let n = if in_bounds(position, len) { len - position as usize } else { 0 };
    (n, Some(n))
}

/// Combines the [`Cursor::remaining()`] of two cursors that move together.
pub(crate) fn shortest_hint(a: (usize, Option<usize>), b: (usize, Option<usize>))
-> (usize, Option<usize>) {
    let upper = match (a.1, b.1) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, None) => x,
        (None, y) => y,
    };
    (a.0.min(b.0), upper)
}

// ----------------------------------------------------------------------------

/// A position in a sequence.
///
/// Dereferencing a `Cursor` past its end is a logic error. Cursors over
/// memory panic; computed cursors return whatever their inputs return.
pub trait Cursor {
    /// The element as stored. For memory this is a reference or a
    /// write-through handle; for computed sequences it is the value itself.
    type Item;

    /// Returns `true` if there is no element at this position.
    fn is_end(&self) -> bool;

    /// Move to the next position.
    fn advance(&mut self);

    /// Dereference this position.
    fn get(&self) -> Self::Item;

    /// Move forwards `n` positions.
    ///
    /// Random-access cursors override this to jump in one step.
    fn advance_by(&mut self, n: usize) {
        for _ in 0..n { self.advance(); }
    }

    /// Bounds on the number of elements from here to the end, in the sense
    /// of [`Iterator::size_hint()`].
    fn remaining(&self) -> (usize, Option<usize>) { (0, None) }
}

/// A [`Cursor`] whose element can also be read by value.
pub trait ValueCursor: Cursor {
    /// The element by value.
    type Value;

    /// Dereference this position and return the element by value.
    fn value(&self) -> Self::Value;
}

/// A [`Cursor`] that can move by an arbitrary signed offset.
///
/// A random-access cursor is at its end whenever `position()` is outside
/// `0..len()`, so stepping backwards past the first element also ends a
/// traversal.
pub trait RandomAccessCursor: Cursor {
    /// The offset of this position from the first element.
    fn position(&self) -> isize;

    /// The number of elements in the underlying sequence.
    fn len(&self) -> usize;

    /// Move by `offset`, which may be negative.
    fn jump(&mut self, offset: isize);
}

/// Borrowing a `Cursor` makes a `Cursor` that advances the original.
impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;
    #[inline(always)]
    fn is_end(&self) -> bool { (**self).is_end() }
    #[inline(always)]
    fn advance(&mut self) { (**self).advance() }
    #[inline(always)]
    fn get(&self) -> Self::Item { (**self).get() }
    #[inline(always)]
    fn advance_by(&mut self, n: usize) { (**self).advance_by(n) }
    #[inline(always)]
    fn remaining(&self) -> (usize, Option<usize>) { (**self).remaining() }
}

impl<C: ValueCursor + ?Sized> ValueCursor for &mut C {
    type Value = C::Value;
    #[inline(always)]
    fn value(&self) -> Self::Value { (**self).value() }
}

impl<C: RandomAccessCursor + ?Sized> RandomAccessCursor for &mut C {
    #[inline(always)]
    fn position(&self) -> isize { (**self).position() }
    #[inline(always)]
    fn len(&self) -> usize { (**self).len() }
    #[inline(always)]
    fn jump(&mut self, offset: isize) { (**self).jump(offset) }
}

// ----------------------------------------------------------------------------

/// Implemented by types that can be traversed by a [`Cursor`].
///
/// If `S` implements `Sequence`, then so do `&S`, `&mut S` and `Box<S>`.
/// This means the combinators you build are agnostic about the ownership of
/// the data they access.
///
/// ```
/// use lockstep::{Sequence, Cursor, ValueCursor};
/// let v = vec![1, 2, 3];
/// let mut cursor = Sequence::begin(&v);
/// let mut total = 0;
/// while !cursor.is_end() {
///     total += cursor.value();
///     cursor.advance();
/// }
/// assert_eq!(total, 6);
/// ```
pub trait Sequence {
    /// The type of a position in `Self`.
    type Cursor<'a>: Cursor where Self: 'a;

    /// Returns a cursor at the first element.
    fn begin(&self) -> Self::Cursor<'_>;

    /// The number of elements in `Self`.
    ///
    /// The default implementation counts them.
    fn len(&self) -> usize {
        let mut cursor = self.begin();
        let mut count = 0;
        while !cursor.is_end() {
            count += 1;
            cursor.advance();
        }
        count
    }

    /// Returns `true` if `Self` has no elements.
    fn is_empty(&self) -> bool { self.begin().is_end() }

    /// Returns an [`Iterator`] over the elements as stored.
    fn iter(&self) -> Iter<Self::Cursor<'_>> { Iter(self.begin()) }
}

/// A [`Sequence`] whose elements can be read by value.
///
/// The combinators that compute their elements, such as
/// [`TransformRange`](super::TransformRange), read their operands through
/// [`load()`](Self::load).
pub trait ValueSequence: Sequence {
    /// The element type.
    type Value;

    /// Convert an element as stored into an element by value.
    fn load<'a>(item: <Self::Cursor<'a> as Cursor>::Item) -> Self::Value where Self: 'a;

    /// Returns an [`Iterator`] over the elements by value.
    ///
    /// ```
    /// use lockstep::{ValueSequence};
    /// let v = std::collections::VecDeque::from([3, 1, 2]);
    /// assert_eq!(ValueSequence::values(&v).collect::<Vec<_>>(), [3, 1, 2]);
    /// ```
    fn values(&self) -> Values<'_, Self> { Values(self.begin()) }

    /// Apply `f` to every element of this `Sequence` in turn.
    fn each(&self, mut f: impl FnMut(Self::Value)) {
        let mut cursor = self.begin();
        while !cursor.is_end() {
            f(Self::load(cursor.get()));
            cursor.advance();
        }
    }
}

impl<'s, S: Sequence + ?Sized> Sequence for &'s S {
    type Cursor<'a> = S::Cursor<'a> where Self: 'a;
    #[inline(always)]
    fn begin(&self) -> Self::Cursor<'_> { S::begin(self) }
    #[inline(always)]
    fn len(&self) -> usize { S::len(self) }
}

impl<'s, S: ValueSequence + ?Sized> ValueSequence for &'s S {
    type Value = S::Value;
    #[inline(always)]
    fn load<'a>(item: <S::Cursor<'a> as Cursor>::Item) -> S::Value where Self: 'a { S::load(item) }
}

impl<'s, S: Sequence + ?Sized> Sequence for &'s mut S {
    type Cursor<'a> = S::Cursor<'a> where Self: 'a;
    #[inline(always)]
    fn begin(&self) -> Self::Cursor<'_> { S::begin(self) }
    #[inline(always)]
    fn len(&self) -> usize { S::len(self) }
}

impl<'s, S: ValueSequence + ?Sized> ValueSequence for &'s mut S {
    type Value = S::Value;
    #[inline(always)]
    fn load<'a>(item: <S::Cursor<'a> as Cursor>::Item) -> S::Value where Self: 'a { S::load(item) }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Cursor<'a> = S::Cursor<'a> where Self: 'a;
    #[inline(always)]
    fn begin(&self) -> Self::Cursor<'_> { S::begin(self) }
    #[inline(always)]
    fn len(&self) -> usize { S::len(self) }
}

impl<S: ValueSequence + ?Sized> ValueSequence for Box<S> {
    type Value = S::Value;
    #[inline(always)]
    fn load<'a>(item: <S::Cursor<'a> as Cursor>::Item) -> S::Value where Self: 'a { S::load(item) }
}

// ----------------------------------------------------------------------------

/// The return type of [`Sequence::iter()`], and the `IntoIterator` type of
/// the combinators in this crate.
#[derive(Debug, Clone)]
pub struct Iter<C>(C);

impl<C: Cursor> Iter<C> {
    /// Iterate from `cursor` to the end.
    pub fn new(cursor: C) -> Self { Iter(cursor) }

    /// Returns the cursor at the next unvisited position.
    pub fn into_cursor(self) -> C { self.0 }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_end() { return None; }
        let item = self.0.get();
        self.0.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.remaining() }
}

/// The return type of [`ValueSequence::values()`].
pub struct Values<'s, S: ValueSequence + ?Sized + 's>(S::Cursor<'s>);

impl<'s, S: ValueSequence + ?Sized + 's> Clone for Values<'s, S> where S::Cursor<'s>: Clone {
    fn clone(&self) -> Self { Values(self.0.clone()) }
}

impl<'s, S: ValueSequence + ?Sized + 's> Debug for Values<'s, S> where S::Cursor<'s>: Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("Values").field(&self.0).finish()
    }
}

impl<'s, S: ValueSequence + ?Sized + 's> Iterator for Values<'s, S> {
    type Item = S::Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_end() { return None; }
        let item = self.0.get();
        self.0.advance();
        Some(S::load(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.remaining() }
}

// ----------------------------------------------------------------------------

/// A [`Cursor`] over a slice.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    position: isize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// A cursor at the first element of `items`.
    pub fn new(items: &'a [T]) -> Self { SliceCursor {items, position: 0} }
}

impl<'a, T> Clone for SliceCursor<'a, T> {
    fn clone(&self) -> Self { SliceCursor {items: self.items, position: self.position} }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;
    #[inline(always)]
    fn is_end(&self) -> bool { !in_bounds(self.position, self.items.len()) }
    #[inline(always)]
    fn advance(&mut self) { self.position += 1; }
    #[inline(always)]
    fn get(&self) -> &'a T { &self.items[self.position as usize] }
    #[inline(always)]
    fn advance_by(&mut self, n: usize) { self.position += n as isize; }
    #[inline(always)]
    fn remaining(&self) -> (usize, Option<usize>) { bounded_hint(self.position, self.items.len()) }
}

impl<'a, T: Clone> ValueCursor for SliceCursor<'a, T> {
    type Value = T;
    #[inline(always)]
    fn value(&self) -> T { self.get().clone() }
}

impl<'a, T> RandomAccessCursor for SliceCursor<'a, T> {
    #[inline(always)]
    fn position(&self) -> isize { self.position }
    #[inline(always)]
    fn len(&self) -> usize { self.items.len() }
    #[inline(always)]
    fn jump(&mut self, offset: isize) { self.position += offset; }
}

impl<T> Sequence for [T] {
    type Cursor<'a> = SliceCursor<'a, T> where Self: 'a;
    #[inline(always)]
    fn begin(&self) -> Self::Cursor<'_> { SliceCursor::new(self) }
    #[inline(always)]
    fn len(&self) -> usize { <[T]>::len(self) }
}

impl<T: Clone> ValueSequence for [T] {
    type Value = T;
    #[inline(always)]
    fn load<'a>(item: &'a T) -> T where Self: 'a { item.clone() }
}

impl<T> Sequence for Vec<T> {
    type Cursor<'a> = SliceCursor<'a, T> where Self: 'a;
    #[inline(always)]
    fn begin(&self) -> Self::Cursor<'_> { SliceCursor::new(self) }
    #[inline(always)]
    fn len(&self) -> usize { Vec::len(self) }
}

impl<T: Clone> ValueSequence for Vec<T> {
    type Value = T;
    #[inline(always)]
    fn load<'a>(item: &'a T) -> T where Self: 'a { item.clone() }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Cursor<'a> = SliceCursor<'a, T> where Self: 'a;
    #[inline(always)]
    fn begin(&self) -> Self::Cursor<'_> { SliceCursor::new(self) }
    #[inline(always)]
    fn len(&self) -> usize { N }
}

impl<T: Clone, const N: usize> ValueSequence for [T; N] {
    type Value = T;
    #[inline(always)]
    fn load<'a>(item: &'a T) -> T where Self: 'a { item.clone() }
}

// ----------------------------------------------------------------------------

/// A [`Cursor`] over a [`VecDeque`].
#[derive(Debug)]
pub struct DequeCursor<'a, T> {
    items: &'a VecDeque<T>,
    position: isize,
}

impl<'a, T> Clone for DequeCursor<'a, T> {
    fn clone(&self) -> Self { DequeCursor {items: self.items, position: self.position} }
}

impl<'a, T> Cursor for DequeCursor<'a, T> {
    type Item = &'a T;
    #[inline(always)]
    fn is_end(&self) -> bool { !in_bounds(self.position, self.items.len()) }
    #[inline(always)]
    fn advance(&mut self) { self.position += 1; }
    #[inline(always)]
    fn get(&self) -> &'a T { &self.items[self.position as usize] }
    #[inline(always)]
    fn advance_by(&mut self, n: usize) { self.position += n as isize; }
    #[inline(always)]
    fn remaining(&self) -> (usize, Option<usize>) { bounded_hint(self.position, self.items.len()) }
}

impl<'a, T: Clone> ValueCursor for DequeCursor<'a, T> {
    type Value = T;
    #[inline(always)]
    fn value(&self) -> T { self.get().clone() }
}

impl<'a, T> RandomAccessCursor for DequeCursor<'a, T> {
    #[inline(always)]
    fn position(&self) -> isize { self.position }
    #[inline(always)]
    fn len(&self) -> usize { self.items.len() }
    #[inline(always)]
    fn jump(&mut self, offset: isize) { self.position += offset; }
}

impl<T> Sequence for VecDeque<T> {
    type Cursor<'a> = DequeCursor<'a, T> where Self: 'a;
    #[inline(always)]
    fn begin(&self) -> Self::Cursor<'_> { DequeCursor {items: self, position: 0} }
    #[inline(always)]
    fn len(&self) -> usize { VecDeque::len(self) }
}

impl<T: Clone> ValueSequence for VecDeque<T> {
    type Value = T;
    #[inline(always)]
    fn load<'a>(item: &'a T) -> T where Self: 'a { item.clone() }
}

// ----------------------------------------------------------------------------

/// A write-through view of some memory. Construct using [`shared()`].
///
/// The elements of a `Shared` are `&Cell<T>`, so writing through a
/// combinator built on a `Shared` changes the original memory. `Shared` is
/// `Copy`, so it can appear more than once in the same expression.
///
/// Any `T` can be written with [`Cell::set()`], [`Cell::replace()`] or
/// [`Cell::take()`]. Reading by value, and hence using a `Shared` as an
/// operand, needs `T: Copy`.
pub struct Shared<'a, T>(&'a [Cell<T>]);

impl<'a, T> Clone for Shared<'a, T> {
    fn clone(&self) -> Self { *self }
}

impl<'a, T> Copy for Shared<'a, T> {}

impl<'a, T: Copy + Debug> Debug for Shared<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("Shared").field(&self.0).finish()
    }
}

impl<'a, T> Shared<'a, T> {
    /// The underlying cells.
    pub fn cells(&self) -> &'a [Cell<T>] { self.0 }
}

/// Borrow `items` such that combinators can write through to them.
///
/// ```
/// use lockstep::{Sequence, Cursor, ValueCursor, shared};
/// let mut v = vec![1, 2, 3];
/// let s = shared(&mut v);
/// let mut cursor = s.begin();
/// while !cursor.is_end() {
///     cursor.get().set(cursor.value() * 10);
///     cursor.advance();
/// }
/// assert_eq!(v, [10, 20, 30]);
/// ```
pub fn shared<T>(items: &mut [T]) -> Shared<'_, T> {
    Shared(Cell::from_mut(items).as_slice_of_cells())
}

/// The [`Cursor`] type of [`Shared`].
pub struct SharedCursor<'a, T> {
    cells: &'a [Cell<T>],
    position: isize,
}

impl<'a, T> Clone for SharedCursor<'a, T> {
    fn clone(&self) -> Self { SharedCursor {cells: self.cells, position: self.position} }
}

impl<'a, T> Debug for SharedCursor<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("SharedCursor")
            .field("position", &self.position)
            .field("len", &self.cells.len())
            .finish()
    }
}

impl<'a, T> Cursor for SharedCursor<'a, T> {
    type Item = &'a Cell<T>;
    #[inline(always)]
    fn is_end(&self) -> bool { !in_bounds(self.position, self.cells.len()) }
    #[inline(always)]
    fn advance(&mut self) { self.position += 1; }
    #[inline(always)]
    fn get(&self) -> &'a Cell<T> { &self.cells[self.position as usize] }
    #[inline(always)]
    fn advance_by(&mut self, n: usize) { self.position += n as isize; }
    #[inline(always)]
    fn remaining(&self) -> (usize, Option<usize>) { bounded_hint(self.position, self.cells.len()) }
}

impl<'a, T: Copy> ValueCursor for SharedCursor<'a, T> {
    type Value = T;
    #[inline(always)]
    fn value(&self) -> T { self.get().get() }
}

impl<'a, T> RandomAccessCursor for SharedCursor<'a, T> {
    #[inline(always)]
    fn position(&self) -> isize { self.position }
    #[inline(always)]
    fn len(&self) -> usize { self.cells.len() }
    #[inline(always)]
    fn jump(&mut self, offset: isize) { self.position += offset; }
}

impl<'s, T> Sequence for Shared<'s, T> {
    type Cursor<'a> = SharedCursor<'s, T> where Self: 'a;
    #[inline(always)]
    fn begin(&self) -> Self::Cursor<'_> { SharedCursor {cells: self.0, position: 0} }
    #[inline(always)]
    fn len(&self) -> usize { self.0.len() }
}

impl<'s, T: Copy> ValueSequence for Shared<'s, T> {
    type Value = T;
    #[inline(always)]
    fn load<'a>(item: &'s Cell<T>) -> T where Self: 'a { item.get() }
}

// ----------------------------------------------------------------------------

/// A [`Sequence`] that repeats one value forever.
///
/// Its length is [`UNBOUNDED`], so in lockstep with other sequences it never
/// limits the traversal.
#[derive(Default, Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct Scalar<T>(pub T);

/// The [`Cursor`] type of [`Scalar`].
#[derive(Debug)]
pub struct ScalarCursor<'a, T>(&'a T);

impl<'a, T> Clone for ScalarCursor<'a, T> {
    fn clone(&self) -> Self { ScalarCursor(self.0) }
}

impl<'a, T> Cursor for ScalarCursor<'a, T> {
    type Item = &'a T;
    #[inline(always)]
    fn is_end(&self) -> bool { false }
    #[inline(always)]
    fn advance(&mut self) {}
    #[inline(always)]
    fn get(&self) -> &'a T { self.0 }
    #[inline(always)]
    fn advance_by(&mut self, _: usize) {}
    #[inline(always)]
    fn remaining(&self) -> (usize, Option<usize>) { (usize::MAX, None) }
}

impl<'a, T: Clone> ValueCursor for ScalarCursor<'a, T> {
    type Value = T;
    #[inline(always)]
    fn value(&self) -> T { self.0.clone() }
}

impl<'a, T> RandomAccessCursor for ScalarCursor<'a, T> {
    #[inline(always)]
    fn position(&self) -> isize { 0 }
    #[inline(always)]
    fn len(&self) -> usize { UNBOUNDED }
    #[inline(always)]
    fn jump(&mut self, _: isize) {}
}

impl<T> Sequence for Scalar<T> {
    type Cursor<'a> = ScalarCursor<'a, T> where Self: 'a;
    #[inline(always)]
    fn begin(&self) -> Self::Cursor<'_> { ScalarCursor(&self.0) }
    #[inline(always)]
    fn len(&self) -> usize { UNBOUNDED }
    fn is_empty(&self) -> bool { false }
}

impl<T: Clone> ValueSequence for Scalar<T> {
    type Value = T;
    #[inline(always)]
    fn load<'a>(item: &'a T) -> T where Self: 'a { item.clone() }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::{Mutex};

    use super::*;
    use crate::test_util::{Chain};

    #[test]
    fn slice_cursor_walks_forward_and_back() {
        let v = vec![4, 5, 6];
        let mut cursor = v.begin();
        assert_eq!(*cursor.get(), 4);
        cursor.jump(2);
        assert_eq!(cursor.value(), 6);
        cursor.advance();
        assert!(cursor.is_end());
        cursor.jump(-3);
        assert_eq!(cursor.position(), 0);
        assert!(!cursor.is_end());
        cursor.jump(-1);
        assert!(cursor.is_end());
    }

    #[test]
    fn borrowed_cursor_advances_the_original() {
        fn skip<C: Cursor>(mut cursor: C, n: usize) {
            for _ in 0..n { cursor.advance(); }
        }
        let v = [1, 2, 3];
        let mut cursor = v.begin();
        skip(&mut cursor, 2);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn advance_by_matches_repeated_advance() {
        let v = vec![1, 2, 3, 4, 5];
        let mut cursor = v.begin();
        cursor.advance_by(3);
        assert_eq!(cursor.position(), 3);
        let chain: Chain<i32> = v.iter().copied().collect();
        let mut cursor = chain.begin();
        cursor.advance_by(3);
        assert_eq!(cursor.value(), 4);
        cursor.advance_by(2);
        assert!(cursor.is_end());
    }

    #[test]
    fn ownership_is_chosen_by_type() {
        let v = vec![1, 2, 3];
        let boxed: Box<[i32]> = v.clone().into_boxed_slice();
        assert_eq!(Sequence::len(&v), 3);
        assert_eq!(Sequence::len(&&v), 3);
        assert_eq!(Sequence::len(&boxed), 3);
        assert_eq!(ValueSequence::values(&boxed).sum::<i32>(), 6);
    }

    #[test]
    fn elements_need_not_be_cloneable() {
        let locks = vec![Mutex::new(1), Mutex::new(2)];
        assert_eq!(Sequence::len(&locks), 2);
        let mut total = 0;
        for lock in Sequence::iter(&locks) { total += *lock.lock().unwrap(); }
        assert_eq!(total, 3);
    }

    #[test]
    fn forward_only_sequence_counts_its_length() {
        let chain: Chain<i32> = [7, 8, 9].into_iter().collect();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.values().collect::<Vec<_>>(), [7, 8, 9]);
    }

    #[test]
    fn shared_writes_through() {
        let mut v = vec![1, 2, 3];
        {
            let s = shared(&mut v);
            for cell in s.iter() { cell.set(cell.get() + 1); }
        }
        assert_eq!(v, [2, 3, 4]);
    }

    #[test]
    fn shared_writes_elements_that_are_not_copy() {
        let mut names = vec![String::from("a"), String::from("b")];
        {
            let s = shared(&mut names);
            for cell in s.iter() {
                let mut name = cell.take();
                name.push('!');
                cell.set(name);
            }
            assert_eq!(format!("{:?}", s.begin()), "SharedCursor { position: 0, len: 2 }");
        }
        assert_eq!(names, ["a!", "b!"]);
    }

    #[test]
    fn shared_formats_its_cells() {
        let mut v = vec![1, 2];
        let s = shared(&mut v);
        assert_eq!(format!("{:?}", s), "Shared([Cell { value: 1 }, Cell { value: 2 }])");
    }

    #[test]
    fn scalar_never_ends() {
        let s = Scalar(3);
        let mut cursor = s.begin();
        for _ in 0..100 { cursor.advance(); }
        assert!(!cursor.is_end());
        assert_eq!(cursor.value(), 3);
        assert_eq!(s.len(), UNBOUNDED);
    }

    #[test]
    fn size_hints() {
        let v = vec![1, 2, 3];
        let mut values = v.values();
        assert_eq!(values.size_hint(), (3, Some(3)));
        values.next();
        assert_eq!(values.size_hint(), (2, Some(2)));
        assert_eq!(Sequence::iter(&v).size_hint(), (3, Some(3)));
        let chain: Chain<i32> = [1, 2].into_iter().collect();
        assert_eq!(Sequence::iter(&chain).size_hint(), (0, None));
        assert_eq!(Scalar(0).values().size_hint(), (usize::MAX, None));
        assert_eq!(shortest_hint((3, Some(3)), (0, None)), (0, Some(3)));
    }
}
