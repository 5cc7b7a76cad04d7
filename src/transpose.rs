use super::{Cursor, ValueCursor, RandomAccessCursor, Sequence, ValueSequence, Iter, Error};
use super::error::{LengthCheck};
use super::sequence::{in_bounds, bounded_hint};

/// A runtime-sized collection of [`Sequence`]s of the same type.
pub trait RangeCollection {
    type Range: Sequence;

    fn ranges(&self) -> &[Self::Range];
}

impl<S: Sequence> RangeCollection for [S] {
    type Range = S;
    fn ranges(&self) -> &[S] { self }
}

impl<S: Sequence> RangeCollection for Vec<S> {
    type Range = S;
    fn ranges(&self) -> &[S] { self }
}

impl<S: Sequence, const N: usize> RangeCollection for [S; N] {
    type Range = S;
    fn ranges(&self) -> &[S] { self }
}

impl<S: Sequence> RangeCollection for Box<[S]> {
    type Range = S;
    fn ranges(&self) -> &[S] { self }
}

impl<'a, C: RangeCollection + ?Sized> RangeCollection for &'a C {
    type Range = C::Range;
    fn ranges(&self) -> &[Self::Range] { C::ranges(self) }
}

// ----------------------------------------------------------------------------

/// Swaps the roles of a collection of sequences and the positions within
/// them.
///
/// Given a collection of `M` sequences, a `Transpose` is a sequence of
/// [`Column`]s. The column at position `p` is a sequence of length `M`
/// whose `i`th element is the element at `p` of the `i`th sequence.
///
/// The collection can be owned or borrowed. The number of columns is the
/// length of the shortest sequence, or 0 if the collection is empty. The
/// sequences need not be random access: reading column `p` of a forward-only
/// sequence advances a fresh cursor `p` times.
///
/// ```
/// use lockstep::{transpose};
/// let abc = vec![vec![1, 2, 3, 4], vec![2, 4, 8, 16], vec![3, 9, 27, 81]];
/// let mut product = 1;
/// for column in &transpose(&abc) {
///     let mut sum = 0;
///     for x in column { sum += x; }
///     product *= sum;
/// }
/// assert_eq!(product, (1 + 2 + 3) * (2 + 4 + 9) * (3 + 8 + 27) * (4 + 16 + 81));
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Transpose<C>(C);

impl<C: RangeCollection> Transpose<C> {
    pub fn new(collection: C) -> Self { Transpose(collection) }

    /// Like [`new()`], but fails if the sequences have different lengths.
    ///
    /// [`new()`]: Self::new()
    pub fn try_new(collection: C) -> Result<Self, Error> {
        let mut check = LengthCheck::default();
        for range in collection.ranges() { check.push(range.len()); }
        check.finish()?;
        Ok(Transpose(collection))
    }

    /// The number of columns.
    pub fn len(&self) -> usize {
        self.0.ranges().iter().map(|range| range.len()).min().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns a cursor at the first [`Column`].
    pub fn begin(&self) -> TransposeCursor<'_, C::Range> {
        TransposeCursor {ranges: self.0.ranges(), position: 0, len: self.len()}
    }

    /// Borrow `self`. The result is `Copy` and a [`Sequence`].
    pub fn view(&self) -> Transpose<&[C::Range]> { Transpose(self.0.ranges()) }

    pub fn into_inner(self) -> C { self.0 }
}

impl<'c, S: Sequence> Sequence for Transpose<&'c [S]> {
    type Cursor<'a> = TransposeCursor<'c, S> where Self: 'a;
    fn begin(&self) -> Self::Cursor<'_> {
        TransposeCursor {ranges: self.0, position: 0, len: Transpose::len(self)}
    }
    fn len(&self) -> usize { Transpose::len(self) }
}

impl<'c, S: Sequence> ValueSequence for Transpose<&'c [S]> {
    type Value = Column<'c, S>;
    #[inline(always)]
    fn load<'a>(item: Column<'c, S>) -> Column<'c, S> where Self: 'a { item }
}

impl<'a, C: RangeCollection> IntoIterator for &'a Transpose<C> {
    type Item = Column<'a, C::Range>;
    type IntoIter = Iter<TransposeCursor<'a, C::Range>>;
    fn into_iter(self) -> Self::IntoIter { Iter::new(self.begin()) }
}

/// Transpose `collection`. Equivalent to [`Transpose::new()`].
pub fn transpose<C: RangeCollection>(collection: C) -> Transpose<C> {
    Transpose::new(collection)
}

// ----------------------------------------------------------------------------

/// The [`Cursor`] type of [`Transpose`].
#[derive(Debug)]
pub struct TransposeCursor<'c, S> {
    ranges: &'c [S],
    position: isize,
    len: usize,
}

impl<'c, S> Clone for TransposeCursor<'c, S> {
    fn clone(&self) -> Self {
        TransposeCursor {ranges: self.ranges, position: self.position, len: self.len}
    }
}

impl<'c, S: Sequence> Cursor for TransposeCursor<'c, S> {
    type Item = Column<'c, S>;
    #[inline(always)]
    fn is_end(&self) -> bool { !in_bounds(self.position, self.len) }
    #[inline(always)]
    fn advance(&mut self) { self.position += 1; }
    #[inline(always)]
    fn get(&self) -> Column<'c, S> { Column {ranges: self.ranges, index: self.position} }
    #[inline(always)]
    fn advance_by(&mut self, n: usize) { self.position += n as isize; }
    #[inline(always)]
    fn remaining(&self) -> (usize, Option<usize>) { bounded_hint(self.position, self.len) }
}

impl<'c, S: Sequence> ValueCursor for TransposeCursor<'c, S> {
    type Value = Column<'c, S>;
    #[inline(always)]
    fn value(&self) -> Column<'c, S> { self.get() }
}

impl<'c, S: Sequence> RandomAccessCursor for TransposeCursor<'c, S> {
    #[inline(always)]
    fn position(&self) -> isize { self.position }
    #[inline(always)]
    fn len(&self) -> usize { self.len }
    #[inline(always)]
    fn jump(&mut self, offset: isize) { self.position += offset; }
}

// ----------------------------------------------------------------------------

/// One position of every sequence in a [`Transpose`].
#[derive(Debug)]
pub struct Column<'c, S> {
    ranges: &'c [S],
    index: isize,
}

impl<'c, S> Clone for Column<'c, S> {
    fn clone(&self) -> Self { *self }
}

impl<'c, S> Copy for Column<'c, S> {}

impl<'c, S> Column<'c, S> {
    /// The position of this column in the [`Transpose`].
    pub fn index(&self) -> isize { self.index }
}

impl<'c, S: ValueSequence> Column<'c, S> {
    /// The element of sequence `i` at this column's position.
    ///
    /// Panics if `i` is out of range.
    pub fn at(&self, i: usize) -> S::Value { S::load(inner_cursor(self.ranges, i, self.index).get()) }
}

/// A cursor into `ranges[i]` at `position`.
fn inner_cursor<'c, S: Sequence>(ranges: &'c [S], i: usize, position: isize) -> S::Cursor<'c> {
    assert!(position >= 0, "column {position} is before the first");
    let mut cursor = ranges[i].begin();
    cursor.advance_by(position as usize);
    cursor
}

impl<'c, S: Sequence> Sequence for Column<'c, S> {
    type Cursor<'a> = ColumnCursor<'c, S> where Self: 'a;
    fn begin(&self) -> Self::Cursor<'_> {
        ColumnCursor {ranges: self.ranges, outer: self.index, position: 0}
    }
    fn len(&self) -> usize { self.ranges.len() }
}

impl<'c, S: ValueSequence> ValueSequence for Column<'c, S> {
    type Value = S::Value;
    #[inline(always)]
    fn load<'a>(item: <S::Cursor<'c> as Cursor>::Item) -> S::Value where Self: 'a { S::load(item) }
}

impl<'c, S: Sequence> IntoIterator for Column<'c, S> {
    type Item = <S::Cursor<'c> as Cursor>::Item;
    type IntoIter = Iter<ColumnCursor<'c, S>>;
    fn into_iter(self) -> Self::IntoIter { Iter::new(self.begin()) }
}

/// The [`Cursor`] type of [`Column`].
#[derive(Debug)]
pub struct ColumnCursor<'c, S> {
    ranges: &'c [S],
    outer: isize,
    position: isize,
}

impl<'c, S> Clone for ColumnCursor<'c, S> {
    fn clone(&self) -> Self {
        ColumnCursor {ranges: self.ranges, outer: self.outer, position: self.position}
    }
}

impl<'c, S: Sequence> Cursor for ColumnCursor<'c, S> {
    type Item = <S::Cursor<'c> as Cursor>::Item;
    #[inline(always)]
    fn is_end(&self) -> bool { !in_bounds(self.position, self.ranges.len()) }
    #[inline(always)]
    fn advance(&mut self) { self.position += 1; }
    #[inline(always)]
    fn get(&self) -> Self::Item {
        inner_cursor(self.ranges, self.position as usize, self.outer).get()
    }
    #[inline(always)]
    fn advance_by(&mut self, n: usize) { self.position += n as isize; }
    #[inline(always)]
    fn remaining(&self) -> (usize, Option<usize>) { bounded_hint(self.position, self.ranges.len()) }
}

impl<'c, S: ValueSequence> ValueCursor for ColumnCursor<'c, S> {
    type Value = S::Value;
    #[inline(always)]
    fn value(&self) -> S::Value { S::load(self.get()) }
}

impl<'c, S: Sequence> RandomAccessCursor for ColumnCursor<'c, S> {
    #[inline(always)]
    fn position(&self) -> isize { self.position }
    #[inline(always)]
    fn len(&self) -> usize { self.ranges.len() }
    #[inline(always)]
    fn jump(&mut self, offset: isize) { self.position += offset; }
}

// ----------------------------------------------------------------------------
