//! Cursor spans over indexed sequences.
//!
//! A `Span` is a half-open pair of positions `[first, last)` where `last` is
//! one past the last element in range. Termination is detected by comparing
//! the two positions, never by reading at `last`.

// Internal dependencies
use crate::primitives::errors::SequenceError;

/// Half-open cursor pair `[first, last)` into a sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Span {
    first: usize,
    last: usize,
}

impl Span {
    /// Build a span and check it against a sequence of length `len`.
    pub fn new(first: usize, last: usize, len: usize) -> Result<Self, SequenceError> {
        let span = Self { first, last };
        span.check(len)?;
        Ok(span)
    }

    /// Span covering a whole sequence of length `len`.
    #[inline]
    pub fn full(len: usize) -> Self {
        Self {
            first: 0,
            last: len,
        }
    }

    /// Position of the front cursor.
    #[inline]
    pub fn first(&self) -> usize {
        self.first
    }

    /// One-past-the-last position.
    #[inline]
    pub fn last(&self) -> usize {
        self.last
    }

    /// Number of positions between the two cursors.
    #[inline]
    pub fn len(&self) -> usize {
        self.last - self.first
    }

    /// True once the cursors have met.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first == self.last
    }

    /// Verify that the span delimits a valid range of a sequence of length `len`.
    pub fn check(&self, len: usize) -> Result<(), SequenceError> {
        if self.last > len {
            return Err(SequenceError::SpanOutOfBounds {
                last: self.last,
                len,
            });
        }

        if self.first > self.last {
            return Err(SequenceError::InvertedSpan {
                first: self.first,
                last: self.last,
            });
        }

        Ok(())
    }

    // Advance the front cursor by one position.
    #[inline]
    pub fn step_front(&mut self) {
        debug_assert!(!self.is_empty(), "step_front: span is already empty");
        self.first += 1;
    }

    // Step the end marker back by one position, so that it points at the last element.
    #[inline]
    pub fn step_back(&mut self) {
        debug_assert!(!self.is_empty(), "step_back: span is already empty");
        self.last -= 1;
    }

    /// Borrow the part of `data` this span delimits.
    pub fn slice<'a, T>(&self, data: &'a [T]) -> Result<&'a [T], SequenceError> {
        self.check(data.len())?;
        Ok(&data[self.first..self.last])
    }
}
