//! Fixed-arity tuples of sequences, cursors and function arguments.
//!
//! A tuple `(A, B, C)` of [`Sequence`]s implements [`Sequences`], a tuple of
//! [`Cursor`]s implements [`Cursors`], and any `Fn(A, B, C) -> R` implements
//! [`Call<(A, B, C), R>`]. These are implemented for tuples of length 1 to 8.
//! You probably shouldn't write any more implementations of these traits.

use super::{Cursor, ValueCursor, RandomAccessCursor, Sequence, ValueSequence, Error};
use super::error::{LengthCheck};
use super::sequence::{shortest_hint};

/// A tuple of [`Cursor`]s that move together.
pub trait Cursors {
    /// A tuple of the [`Cursor::Item`]s.
    type Items;

    /// Returns `true` if any of the cursors is at its end.
    fn any_end(&self) -> bool;

    /// Advance every cursor.
    fn advance_all(&mut self);

    /// Advance every cursor `n` times.
    fn advance_all_by(&mut self, n: usize);

    /// Dereference every cursor.
    fn items(&self) -> Self::Items;

    /// The tightest of the cursors' [`Cursor::remaining()`].
    fn shortest_remaining(&self) -> (usize, Option<usize>);
}

/// A tuple of [`ValueCursor`]s.
pub trait ValueCursors: Cursors {
    /// A tuple of the [`ValueCursor::Value`]s.
    type Values;

    /// Dereference every cursor, by value.
    fn values(&self) -> Self::Values;
}

/// A tuple of [`RandomAccessCursor`]s.
pub trait RandomAccessCursors: Cursors {
    /// The position of the first cursor.
    ///
    /// The others are assumed to be in the same position.
    fn first_position(&self) -> isize;

    /// The length of the shortest underlying sequence.
    fn shortest_len(&self) -> usize;

    /// Move every cursor by `offset`.
    fn jump_all(&mut self, offset: isize);
}

/// A tuple of [`Sequence`]s.
pub trait Sequences {
    /// A tuple of the [`Sequence::Cursor`]s.
    type Cursors<'a>: Cursors where Self: 'a;

    /// Returns a cursor at the first element of every sequence.
    fn begin_all(&self) -> Self::Cursors<'_>;

    /// Calls `f` with the length of each sequence in turn.
    fn each_len(&self, f: impl FnMut(usize));

    /// The length of the shortest sequence.
    fn min_len(&self) -> usize {
        let mut shortest = usize::MAX;
        self.each_len(|length| { shortest = shortest.min(length); });
        shortest
    }

    /// Returns the common length of the sequences, or an error naming the
    /// first that differs.
    fn check_lengths(&self) -> Result<usize, Error> {
        let mut check = LengthCheck::default();
        self.each_len(|length| check.push(length));
        check.finish()
    }
}

/// A tuple of [`ValueSequence`]s.
pub trait ValueSequences: Sequences {
    /// A tuple of the [`ValueSequence::Value`]s.
    type Values;

    /// Apply [`ValueSequence::load()`] to each of `items`.
    fn load_all<'a>(items: <Self::Cursors<'a> as Cursors>::Items) -> Self::Values where Self: 'a;
}

/// A function that can be applied to the tuple `Args`, giving an `R`.
///
/// This is implemented for every `Fn` of matching arity, so plain
/// functions, closures and function items all qualify.
pub trait Call<Args, R> {
    fn call(&self, args: Args) -> R;
}

// ----------------------------------------------------------------------------

macro_rules! impl_tuples {
    ($(($($X:ident $i:tt),+))*) => { $(
        impl<$($X: Cursor),+> Cursors for ($($X,)+) {
            type Items = ($($X::Item,)+);

            #[inline(always)]
            fn any_end(&self) -> bool { false $(|| self.$i.is_end())+ }

            #[inline(always)]
            fn advance_all(&mut self) { $(self.$i.advance();)+ }

            #[inline(always)]
            fn advance_all_by(&mut self, n: usize) { $(self.$i.advance_by(n);)+ }

            #[inline(always)]
            fn items(&self) -> Self::Items { ($(self.$i.get(),)+) }

            fn shortest_remaining(&self) -> (usize, Option<usize>) {
                let hint = (usize::MAX, None);
                $(let hint = shortest_hint(hint, self.$i.remaining());)+
                hint
            }
        }

        impl<$($X: ValueCursor),+> ValueCursors for ($($X,)+) {
            type Values = ($($X::Value,)+);

            #[inline(always)]
            fn values(&self) -> Self::Values { ($(self.$i.value(),)+) }
        }

        impl<$($X: RandomAccessCursor),+> RandomAccessCursors for ($($X,)+) {
            #[inline(always)]
            fn first_position(&self) -> isize { self.0.position() }

            #[inline(always)]
            fn shortest_len(&self) -> usize { usize::MAX $(.min(self.$i.len()))+ }

            #[inline(always)]
            fn jump_all(&mut self, offset: isize) { $(self.$i.jump(offset);)+ }
        }

        impl<$($X: Sequence),+> Sequences for ($($X,)+) {
            type Cursors<'a> = ($($X::Cursor<'a>,)+) where Self: 'a;

            #[inline(always)]
            fn begin_all(&self) -> Self::Cursors<'_> { ($(self.$i.begin(),)+) }

            fn each_len(&self, mut f: impl FnMut(usize)) { $(f(self.$i.len());)+ }
        }

        impl<$($X: ValueSequence),+> ValueSequences for ($($X,)+) {
            type Values = ($($X::Value,)+);

            #[inline(always)]
            fn load_all<'a>(items: ($(<$X::Cursor<'a> as Cursor>::Item,)+)) -> Self::Values where
                Self: 'a,
            {
                ($($X::load(items.$i),)+)
            }
        }

        impl<Func, R, $($X),+> Call<($($X,)+), R> for Func where Func: Fn($($X),+) -> R {
            #[inline(always)]
            fn call(&self, args: ($($X,)+)) -> R { (self)($(args.$i),+) }
        }
    )* };
}

impl_tuples! {
    (X0 0)
    (X0 0, X1 1)
    (X0 0, X1 1, X2 2)
    (X0 0, X1 1, X2 2, X3 3)
    (X0 0, X1 1, X2 2, X3 3, X4 4)
    (X0 0, X1 1, X2 2, X3 3, X4 4, X5 5)
    (X0 0, X1 1, X2 2, X3 3, X4 4, X5 5, X6 6)
    (X0 0, X1 1, X2 2, X3 3, X4 4, X5 5, X6 6, X7 7)
}

// ----------------------------------------------------------------------------
