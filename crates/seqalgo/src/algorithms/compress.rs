//! Consecutive-duplicate compression.
//!
//! ## Purpose
//!
//! This module collapses every maximal run of equal consecutive elements to a
//! single occurrence, keeping the first value of each run and the original
//! order. The input is read in one forward pass; the output is appended to a
//! caller-owned sink.
//!
//! ## Design notes
//!
//! * **Forward-only**: Any `IntoIterator` is accepted; nothing is read twice.
//! * **Eager emits**: Each element is pushed into the sink as soon as its run
//!   boundary is crossed, one element per `Extend::extend` call.
//! * **Clone on emit**: Only emitted elements are cloned; the scan keeps the
//!   previous input element by value.
//!
//! ## Key concepts
//!
//! The scan is a three-state machine:
//!
//! ```text
//!   input empty ──▶ EmptyDone
//!   first element ──▶ Started ──(next differs: emit)──▶ Started
//!                        │    ──(next equal: skip) ───▶ Started
//!                        └──(no more input)──────────▶ Exhausted
//! ```
//!
//! Each decision compares the current element with the immediately preceding
//! *input* element, not with the last emitted one.
//!
//! ## Invariants
//!
//! * Output length never exceeds input length.
//! * No two adjacent output elements compare equal (for `Eq` types).
//! * `compress(compress(s)) == compress(s)`.
//!
//! ## Non-goals
//!
//! * This module does not count run lengths or support decoding.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::iter::once;

// Internal dependencies
use crate::primitives::errors::SequenceError;
use crate::primitives::span::Span;

// ============================================================================
// Scan State
// ============================================================================

/// State of a compress scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressState {
    /// The input had no elements. Terminal.
    EmptyDone,

    /// The first element has been emitted and the scan is in progress.
    Started,

    /// Every input element has been examined. Terminal.
    Exhausted,
}

impl CompressState {
    /// Returns `true` for the two terminal states.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Started)
    }
}

// ============================================================================
// Compress Functions
// ============================================================================

/// Append `sequence` to `sink` with consecutive duplicates collapsed.
///
/// Returns the terminal state the scan reached. Elements already in `sink`
/// are left alone.
///
/// ```
/// use seqalgo::{compress_into, CompressState};
///
/// let mut out = vec![0];
/// let state = compress_into(vec![1, 1, 2, 2, 1, 1], &mut out);
///
/// assert_eq!(out, [0, 1, 2, 1]);
/// assert_eq!(state, CompressState::Exhausted);
/// ```
#[inline]
pub fn compress_into<I, E>(sequence: I, sink: &mut E) -> CompressState
where
    I: IntoIterator,
    I::Item: PartialEq + Clone,
    E: Extend<I::Item>,
{
    compress_by(sequence, sink, |previous, current| previous == current)
}

/// Compress with a caller-supplied equality predicate.
///
/// `eq` receives the previous input element first and the current one second.
pub fn compress_by<I, E, F>(sequence: I, sink: &mut E, mut eq: F) -> CompressState
where
    I: IntoIterator,
    I::Item: Clone,
    E: Extend<I::Item>,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    let mut input = sequence.into_iter();

    let Some(mut previous) = input.next() else {
        return CompressState::EmptyDone;
    };
    sink.extend(once(previous.clone()));

    let mut state = CompressState::Started;
    let (mut read, mut emitted) = (1usize, 1usize);

    while state == CompressState::Started {
        match input.next() {
            None => state = CompressState::Exhausted,
            Some(current) => {
                read += 1;
                if !eq(&previous, &current) {
                    sink.extend(once(current.clone()));
                    emitted += 1;
                }
                previous = current;
            }
        }
    }

    trace!("compress: read {} elements, emitted {}", read, emitted);
    state
}

/// Collect `sequence` into a new `Vec` with consecutive duplicates collapsed.
///
/// ```
/// use seqalgo::compress;
///
/// assert_eq!(compress(vec![1, 1, 2, 2, 1, 1]), [1, 2, 1]);
/// assert!(compress(Vec::<u8>::new()).is_empty());
/// ```
pub fn compress<I>(sequence: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: PartialEq + Clone,
{
    let mut out: Vec<I::Item> = Vec::new();
    compress_into(sequence, &mut out);
    out
}

/// Compress borrowed elements into owned clones.
///
/// Only the elements that survive are cloned.
pub fn compress_slice<T: PartialEq + Clone>(data: &[T]) -> Vec<T> {
    compress_cloned(data)
}

/// Compress the half-open range `span` of `data` into `sink`.
pub fn compress_span<'a, T, E>(
    data: &'a [T],
    span: Span,
    sink: &mut E,
) -> Result<CompressState, SequenceError>
where
    T: PartialEq,
    E: Extend<&'a T>,
{
    Ok(compress_into(span.slice(data)?, sink))
}

// ============================================================================
// Cloning Sink
// ============================================================================

// Compress any sequence of references, cloning each emitted element.
pub(crate) fn compress_cloned<'a, T, I>(sequence: I) -> Vec<T>
where
    T: PartialEq + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out: Vec<T> = Vec::new();
    compress_into(sequence, &mut ClonedSink(&mut out));
    out
}

// Adapts a `Vec<T>` to receive `&T` by cloning.
struct ClonedSink<'s, T>(&'s mut Vec<T>);

impl<'a, 's, T: Clone + 'a> Extend<&'a T> for ClonedSink<'s, T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().cloned());
    }
}
