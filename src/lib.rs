//! A pure-Rust library for traversing several sequences in lockstep, and
//! for lazy elementwise computation over them.
//!
//! Trait [`Sequence`] is implemented by anything that can hand out a
//! [`Cursor`]: slices, `Vec`s, arrays, `VecDeque`s, and every combinator in
//! this crate. A `Cursor` is a position that knows its own bound, so it can
//! be advanced and tested for the end on its own. Cursors that can also move
//! by an arbitrary signed offset implement [`RandomAccessCursor`].
//!
//! Traversal never copies an element. Where an element can be read by value,
//! the cursor also implements [`ValueCursor`] and the sequence
//! [`ValueSequence`]; the combinators that compute their elements need this
//! of their operands, while [`LockstepRange`] and [`Transpose`] do not.
//!
//! The combinators are:
//!
//! - [`LockstepRange`] (from [`lockstep()`]) walks a tuple of sequences
//!   together, yielding tuples of their elements, and stops at the end of the
//!   shortest. [`LockstepIterator`] does the same for a tuple of cursors.
//! - [`TransformRange`] (from [`transform()`]) applies a function to the
//!   elements of a tuple of sequences, every time an element is read.
//! - [`ExpressionRange`] (from [`range_algebra()`]) overloads the arithmetic
//!   operators to build lazy elementwise expressions, and can write the
//!   result back into storage.
//! - [`Transpose`] (from [`transpose()`]) turns a runtime-sized collection of
//!   sequences into a sequence of [`Column`]s.
//!
//! The ownership of each sequence is chosen by the type you pass: a value is
//! moved or cloned into the combinator, `&v` is borrowed read-only, and
//! [`shared(&mut v)`](shared) is borrowed so that writes go through to `v`.
//!
//! ```
//! use lockstep::{lockstep, shared};
//! let mut a = vec![1, 2, 3, 4];
//! let b = vec![2, 4, 6, 8];
//! for (x, y) in &lockstep((shared(&mut a), &b)) {
//!     x.set(x.get() * (y - 1));
//! }
//! assert_eq!(a, [1, 6, 15, 28]);
//! ```
//!
//! Traversals are truncated to the shortest sequence. [`LockstepRange`],
//! [`TransformRange`] and [`Transpose`] also have a `try_new()` constructor
//! which instead returns an [`Error`] if the lengths differ.

mod sequence;
pub use sequence::{Cursor, ValueCursor, RandomAccessCursor, Sequence, ValueSequence, Iter, Values, UNBOUNDED};
pub use sequence::{SliceCursor, DequeCursor, Shared, SharedCursor, shared, Scalar, ScalarCursor};

mod error;
pub use error::{Error};

pub mod tuple;
pub use tuple::{Cursors, ValueCursors, RandomAccessCursors, Sequences, ValueSequences, Call};

pub mod ops;

mod lockstep;
pub use lockstep::{LockstepIterator, LockstepRange, lockstep};

mod transform;
pub use transform::{TransformRange, TransformCursor, transform};

mod expr;
pub use expr::{ExpressionRange, BinaryNode, BinaryCursor, UnaryNode, UnaryCursor};
pub use expr::{IntoOperand, IntoOperands, range_algebra, range_algebra_ref, expression_transform};

mod transpose;
pub use transpose::{RangeCollection, Transpose, TransposeCursor, Column, ColumnCursor, transpose};

#[cfg(test)]
mod test_util;
