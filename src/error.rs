use super::sequence::{UNBOUNDED};

/// The type of error returned by the checked constructors, e.g.
/// [`LockstepRange::try_new()`].
///
/// The unchecked constructors never fail: they truncate every traversal to
/// the shortest sequence.
///
/// [`LockstepRange::try_new()`]: super::LockstepRange::try_new()
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("sequence {index} has length {found}, expected {expected}")]
    LengthMismatch { index: usize, expected: usize, found: usize },
}

// ----------------------------------------------------------------------------

/// Accumulates the lengths of some sequences and checks they are equal.
///
/// Sequences of length [`UNBOUNDED`] are skipped.
#[derive(Debug, Default)]
pub(crate) struct LengthCheck {
    index: usize,
    expected: Option<usize>,
    mismatch: Option<Error>,
}

impl LengthCheck {
    pub(crate) fn push(&mut self, found: usize) {
        let index = self.index;
        self.index += 1;
        if found == UNBOUNDED || self.mismatch.is_some() { return; }
        match self.expected {
            None => { self.expected = Some(found); },
            Some(expected) if expected != found => {
                self.mismatch = Some(Error::LengthMismatch {index, expected, found});
            },
            Some(_) => {},
        }
    }

    /// Returns the common length.
    pub(crate) fn finish(self) -> Result<usize, Error> {
        if let Some(error) = self.mismatch {
            tracing::debug!(%error, "rejecting sequences of unequal length");
            return Err(error);
        }
        Ok(self.expected.unwrap_or(UNBOUNDED))
    }
}

// ----------------------------------------------------------------------------
