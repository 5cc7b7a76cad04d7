use std::marker::{PhantomData};

use super::{Cursor, ValueCursor, RandomAccessCursor, Sequence, ValueSequence, Iter, Error, LockstepIterator};
use super::tuple::{RandomAccessCursors, Sequences, ValueSequences, Call};

/// Applies a function to the elements of some [`Sequence`]s in lockstep.
///
/// The function receives one argument per sequence, by value, and is called
/// every time an element of the `TransformRange` is read. Nothing is cached.
///
/// ```
/// use lockstep::{ValueSequence, transform};
/// let a = vec![1, 2, 3, 4];
/// let b = [10, 20, 30, 40];
/// let t = transform(|x: i32, y: i32| 5 * x + y, (&a, &b));
/// assert_eq!(t.values().collect::<Vec<_>>(), [15, 30, 45, 60]);
/// ```
pub struct TransformRange<F, S, R> {
    f: F,
    sequences: S,
    marker: PhantomData<fn() -> R>,
}

impl<F, S: ValueSequences, R> TransformRange<F, S, R> where F: Call<S::Values, R> {
    /// Apply `f` to `sequences`, stopping at the end of the shortest.
    pub fn new(f: F, sequences: S) -> Self {
        TransformRange {f, sequences, marker: PhantomData}
    }

    /// Like [`new()`], but fails if the sequences have different lengths.
    ///
    /// [`new()`]: Self::new()
    pub fn try_new(f: F, sequences: S) -> Result<Self, Error> {
        sequences.check_lengths()?;
        Ok(Self::new(f, sequences))
    }
}

impl<F, S, R> TransformRange<F, S, R> {
    /// The function.
    pub fn function(&self) -> &F { &self.f }

    /// The underlying sequences.
    pub fn sequences(&self) -> &S { &self.sequences }

    /// Unwraps the function and the underlying sequences.
    pub fn into_inner(self) -> (F, S) { (self.f, self.sequences) }
}

impl<F: Clone, S: Clone, R> Clone for TransformRange<F, S, R> {
    fn clone(&self) -> Self {
        TransformRange {f: self.f.clone(), sequences: self.sequences.clone(), marker: PhantomData}
    }
}

impl<F, S: std::fmt::Debug, R> std::fmt::Debug for TransformRange<F, S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("TransformRange").field("sequences", &self.sequences).finish_non_exhaustive()
    }
}

impl<F, S: ValueSequences, R> Sequence for TransformRange<F, S, R> where F: Call<S::Values, R> {
    type Cursor<'a> = TransformCursor<'a, F, S, R> where Self: 'a;

    #[inline(always)]
    fn begin(&self) -> Self::Cursor<'_> {
        TransformCursor {
            f: &self.f,
            inner: LockstepIterator::new(self.sequences.begin_all()),
            marker: PhantomData,
        }
    }

    #[inline(always)]
    fn len(&self) -> usize { self.sequences.min_len() }
}

impl<F, S: ValueSequences, R> ValueSequence for TransformRange<F, S, R> where F: Call<S::Values, R> {
    type Value = R;
    #[inline(always)]
    fn load<'a>(item: R) -> R where Self: 'a { item }
}

impl<'a, F, S: ValueSequences, R> IntoIterator for &'a TransformRange<F, S, R> where
    F: Call<S::Values, R>,
{
    type Item = R;
    type IntoIter = Iter<TransformCursor<'a, F, S, R>>;
    fn into_iter(self) -> Self::IntoIter { Iter::new(self.begin()) }
}

/// Apply `f` to `sequences` in lockstep. Equivalent to
/// [`TransformRange::new()`].
pub fn transform<F, S: ValueSequences, R>(f: F, sequences: S) -> TransformRange<F, S, R> where
    F: Call<S::Values, R>,
{
    TransformRange::new(f, sequences)
}

// ----------------------------------------------------------------------------

/// The [`Cursor`] type of [`TransformRange`].
pub struct TransformCursor<'a, F, S: Sequences + 'a, R> {
    f: &'a F,
    inner: LockstepIterator<S::Cursors<'a>>,
    marker: PhantomData<fn() -> R>,
}

impl<'a, F, S: Sequences + 'a, R> Clone for TransformCursor<'a, F, S, R> where S::Cursors<'a>: Clone {
    fn clone(&self) -> Self {
        TransformCursor {f: self.f, inner: self.inner.clone(), marker: PhantomData}
    }
}

impl<'a, F, S: Sequences + 'a, R> std::fmt::Debug for TransformCursor<'a, F, S, R> where
    S::Cursors<'a>: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("TransformCursor").field("inner", &self.inner).finish_non_exhaustive()
    }
}

impl<'a, F, S: ValueSequences + 'a, R> Cursor for TransformCursor<'a, F, S, R> where
    F: Call<S::Values, R>,
{
    type Item = R;
    #[inline(always)]
    fn is_end(&self) -> bool { self.inner.is_end() }
    #[inline(always)]
    fn advance(&mut self) { self.inner.advance() }
    #[inline(always)]
    fn get(&self) -> R { <F as Call<S::Values, R>>::call(self.f, S::load_all(self.inner.get())) }
    #[inline(always)]
    fn advance_by(&mut self, n: usize) { self.inner.advance_by(n) }
    #[inline(always)]
    fn remaining(&self) -> (usize, Option<usize>) { self.inner.remaining() }
}

impl<'a, F, S: ValueSequences + 'a, R> ValueCursor for TransformCursor<'a, F, S, R> where
    F: Call<S::Values, R>,
{
    type Value = R;
    #[inline(always)]
    fn value(&self) -> R { self.get() }
}

impl<'a, F, S: ValueSequences + 'a, R> RandomAccessCursor for TransformCursor<'a, F, S, R> where
    F: Call<S::Values, R>,
    S::Cursors<'a>: RandomAccessCursors,
{
    #[inline(always)]
    fn position(&self) -> isize { self.inner.position() }
    #[inline(always)]
    fn len(&self) -> usize { self.inner.len() }
    #[inline(always)]
    fn jump(&mut self, offset: isize) { self.inner.jump(offset) }
}

// ----------------------------------------------------------------------------
