use std::cmp::{Ordering};

use super::{Cursor, ValueCursor, RandomAccessCursor, Sequence, ValueSequence, Iter, Error};
use super::tuple::{Cursors, ValueCursors, RandomAccessCursors, Sequences, ValueSequences};

/// A tuple of [`Cursor`]s that advance together.
///
/// Each component can be owned, or borrowed as `&mut C`, in which case
/// advancing the `LockstepIterator` also advances the borrowed cursor.
///
/// A `LockstepIterator` is at its end as soon as any of its components is.
/// When all the components are [`RandomAccessCursor`]s, so is the
/// `LockstepIterator`, and it supports `+=`, `-=`, subtraction and
/// comparison. Comparison and subtraction only look at the first component;
/// the others are assumed to have moved the same way.
///
/// ```
/// use lockstep::{Sequence, Cursor, ValueCursor, LockstepIterator};
/// let a = vec![1, 2, 3, 4];
/// let b = vec![2, 4, 6, 8];
/// let mut i = a.begin();
/// let mut z = LockstepIterator::new((&mut i, b.begin()));
/// let mut total = 0;
/// while !z.is_end() {
///     let (x, y) = z.value();
///     total += x * (y - 1);
///     z.advance();
/// }
/// assert_eq!(total, 1 * 1 + 2 * 3 + 3 * 5 + 4 * 7);
/// assert!(i.is_end());
/// ```
#[derive(Debug, Clone)]
pub struct LockstepIterator<C>(C);

impl<C> LockstepIterator<C> {
    /// Advance `cursors` together.
    pub fn new(cursors: C) -> Self { LockstepIterator(cursors) }

    /// The component cursors.
    pub fn cursors(&self) -> &C { &self.0 }

    /// Unwraps the component cursors.
    pub fn into_cursors(self) -> C { self.0 }
}

impl<C: Cursors> Cursor for LockstepIterator<C> {
    type Item = C::Items;
    #[inline(always)]
    fn is_end(&self) -> bool { self.0.any_end() }
    #[inline(always)]
    fn advance(&mut self) { self.0.advance_all() }
    #[inline(always)]
    fn get(&self) -> Self::Item { self.0.items() }
    #[inline(always)]
    fn advance_by(&mut self, n: usize) { self.0.advance_all_by(n) }
    #[inline(always)]
    fn remaining(&self) -> (usize, Option<usize>) { self.0.shortest_remaining() }
}

impl<C: ValueCursors> ValueCursor for LockstepIterator<C> {
    type Value = C::Values;
    #[inline(always)]
    fn value(&self) -> Self::Value { self.0.values() }
}

impl<C: RandomAccessCursors> RandomAccessCursor for LockstepIterator<C> {
    #[inline(always)]
    fn position(&self) -> isize { self.0.first_position() }
    #[inline(always)]
    fn len(&self) -> usize { self.0.shortest_len() }
    #[inline(always)]
    fn jump(&mut self, offset: isize) { self.0.jump_all(offset) }
}

impl<C: RandomAccessCursors> LockstepIterator<C> {
    /// The number of steps from `other` to `self`.
    pub fn distance(&self, other: &Self) -> isize { self.position() - other.position() }
}

impl<C: Cursors> IntoIterator for LockstepIterator<C> {
    type Item = C::Items;
    type IntoIter = Iter<Self>;
    fn into_iter(self) -> Self::IntoIter { Iter::new(self) }
}

impl<C: RandomAccessCursors> std::ops::AddAssign<isize> for LockstepIterator<C> {
    fn add_assign(&mut self, offset: isize) { self.jump(offset); }
}

impl<C: RandomAccessCursors> std::ops::SubAssign<isize> for LockstepIterator<C> {
    fn sub_assign(&mut self, offset: isize) { self.jump(-offset); }
}

impl<C: RandomAccessCursors> std::ops::Add<isize> for LockstepIterator<C> {
    type Output = Self;
    fn add(mut self, offset: isize) -> Self { self.jump(offset); self }
}

impl<C: RandomAccessCursors> std::ops::Sub<isize> for LockstepIterator<C> {
    type Output = Self;
    fn sub(mut self, offset: isize) -> Self { self.jump(-offset); self }
}

impl<'a, C: RandomAccessCursors> std::ops::Sub for &'a LockstepIterator<C> {
    type Output = isize;
    fn sub(self, other: Self) -> isize { self.distance(other) }
}

impl<C: RandomAccessCursors> PartialEq for LockstepIterator<C> {
    fn eq(&self, other: &Self) -> bool { self.position() == other.position() }
}

impl<C: RandomAccessCursors> PartialOrd for LockstepIterator<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.position().cmp(&other.position()))
    }
}

// ----------------------------------------------------------------------------

/// A fixed-size tuple of [`Sequence`]s traversed in lockstep.
///
/// Each sequence can be owned (`v`), borrowed read-only (`&v`) or borrowed
/// for writing ([`shared(&mut v)`]). The traversal is as long as the
/// shortest sequence.
///
/// ```
/// use lockstep::{Sequence, lockstep, shared};
/// let mut a = vec![1, 2, 3, 4];
/// let b = vec![2, 4, 6, 8, 10];
/// for (x, y) in &lockstep((shared(&mut a), b)) {
///     x.set(x.get() * (y - 1));
/// }
/// assert_eq!(a, [1 * 1, 2 * 3, 3 * 5, 4 * 7]);
/// ```
///
/// [`shared(&mut v)`]: super::shared
#[derive(Debug, Default, Copy, Clone)]
pub struct LockstepRange<S>(S);

impl<S: Sequences> LockstepRange<S> {
    /// Traverse `sequences` in lockstep, stopping at the end of the shortest.
    pub fn new(sequences: S) -> Self { LockstepRange(sequences) }

    /// Like [`new()`], but fails if the sequences have different lengths.
    ///
    /// Sequences that never end, such as [`Scalar`], are not counted.
    ///
    /// [`new()`]: Self::new()
    /// [`Scalar`]: super::Scalar
    pub fn try_new(sequences: S) -> Result<Self, Error> {
        sequences.check_lengths()?;
        Ok(LockstepRange(sequences))
    }

    /// Returns a [`LockstepIterator`] just past the end of the shortest
    /// sequence.
    pub fn end<'a>(&'a self) -> LockstepIterator<S::Cursors<'a>> where
        S::Cursors<'a>: RandomAccessCursors,
    {
        let mut end = LockstepIterator(self.0.begin_all());
        let length = end.len() as isize;
        end.jump(length);
        end
    }

    /// The underlying sequences.
    pub fn sequences(&self) -> &S { &self.0 }

    /// Unwraps the underlying sequences.
    pub fn into_inner(self) -> S { self.0 }
}

impl<S: Sequences> Sequence for LockstepRange<S> {
    type Cursor<'a> = LockstepIterator<S::Cursors<'a>> where Self: 'a;
    #[inline(always)]
    fn begin(&self) -> Self::Cursor<'_> { LockstepIterator(self.0.begin_all()) }
    #[inline(always)]
    fn len(&self) -> usize { self.0.min_len() }
}

impl<S: ValueSequences> ValueSequence for LockstepRange<S> {
    type Value = S::Values;
    #[inline(always)]
    fn load<'a>(items: <S::Cursors<'a> as Cursors>::Items) -> S::Values where Self: 'a {
        S::load_all(items)
    }
}

impl<'a, S: Sequences> IntoIterator for &'a LockstepRange<S> {
    type Item = <S::Cursors<'a> as Cursors>::Items;
    type IntoIter = Iter<LockstepIterator<S::Cursors<'a>>>;
    fn into_iter(self) -> Self::IntoIter { Iter::new(self.begin()) }
}

/// Traverse `sequences` in lockstep. Equivalent to [`LockstepRange::new()`].
pub fn lockstep<S: Sequences>(sequences: S) -> LockstepRange<S> {
    LockstepRange::new(sequences)
}

// ----------------------------------------------------------------------------
