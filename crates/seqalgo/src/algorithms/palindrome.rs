//! Palindrome check over double-ended sequences.
//!
//! ## Purpose
//!
//! This module decides whether a finite sequence reads the same forward and
//! backward. Any iterator that can be consumed from both ends qualifies, so
//! slices, `VecDeque`, `LinkedList`, ranges and `str::chars` all work.
//!
//! ## Design notes
//!
//! * **Two cursors**: A front and a back cursor walk toward each other; the
//!   scan stops at the first mismatching pair.
//! * **No allocation**: O(n) comparisons and O(1) extra memory.
//! * **Generics**: Traversal capability is a trait bound (`DoubleEndedIterator`),
//!   so a forward-only sequence is rejected at compile time.
//!
//! ## Key concepts
//!
//! * **Meeting**: On an odd-length sequence the cursors meet on the middle
//!   element, which is compared with itself. On an even-length sequence they meet
//!   when the front cursor advances onto the position the back cursor just left.
//! * **Empty policy**: An empty sequence is *not* a palindrome and yields `false`.
//!   This is a separate rule, not a degenerate case of the pairwise comparison.
//!
//! ## Invariants
//!
//! * `is_palindrome(s) == is_palindrome(reverse(s))` for types with symmetric equality.
//! * A single element yields `true` whenever its equality is reflexive.
//!
//! ## Non-goals
//!
//! * This module does not normalise its input (case folding, whitespace removal).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SequenceError;
use crate::primitives::span::Span;

// ============================================================================
// Iterator Forms
// ============================================================================

/// Returns `true` if `sequence` reads the same forward and backward.
///
/// An empty sequence returns `false`.
///
/// ```
/// use seqalgo::is_palindrome;
///
/// assert!(is_palindrome(&[1, 2, 3, 2, 1]));
/// assert!(!is_palindrome(&[1, 2]));
/// assert!(!is_palindrome(Vec::<i32>::new()));
/// ```
#[inline]
pub fn is_palindrome<I>(sequence: I) -> bool
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    I::Item: PartialEq,
{
    is_palindrome_by(sequence, |front, back| front == back)
}

/// Palindrome check with a caller-supplied equality predicate.
///
/// `eq` receives the front element first and the back element second.
pub fn is_palindrome_by<I, F>(sequence: I, mut eq: F) -> bool
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    let mut cursor = sequence.into_iter();

    let Some(mut front) = cursor.next() else {
        return false;
    };

    let mut pair = 0usize;
    loop {
        match cursor.next_back() {
            // Cursors met on the middle element
            None => return eq(&front, &front),
            Some(back) => {
                if !eq(&front, &back) {
                    trace!("palindrome: mismatch at pair {}", pair);
                    return false;
                }
            }
        }

        match cursor.next() {
            Some(next) => front = next,
            None => return true,
        }
        pair += 1;
    }
}

/// Palindrome check for floats that treats values within `epsilon` as equal.
///
/// Exactly equal values always match, so same-signed infinities pair up.
/// NaN never compares equal, so any NaN yields `false`.
pub fn is_palindrome_approx<T: Float>(data: &[T], epsilon: T) -> bool {
    is_palindrome_by(data, |front, back| {
        *front == *back || (**front - **back).abs() <= epsilon
    })
}

// ============================================================================
// Span Form
// ============================================================================

/// Palindrome check over the half-open range `span` of `data`.
///
/// Walks the two cursors of the span directly: the end marker is stepped back
/// before each comparison and the front cursor is advanced after it.
pub fn is_palindrome_span<T: PartialEq>(data: &[T], span: Span) -> Result<bool, SequenceError> {
    span.check(data.len())?;

    let mut cursor = span;
    if cursor.is_empty() {
        return Ok(false);
    }

    loop {
        cursor.step_back();

        if data[cursor.first()] != data[cursor.last()] {
            trace!(
                "palindrome: mismatch between positions {} and {}",
                cursor.first(),
                cursor.last()
            );
            return Ok(false);
        }

        if cursor.first() == cursor.last() {
            return Ok(true);
        }

        cursor.step_front();
        if cursor.is_empty() {
            return Ok(true);
        }
    }
}
