//! Error types for cursor-span operations.
//!
//! ## Purpose
//!
//! The core sequence algorithms are total functions and never fail. The only
//! fallible entry points are the span forms, which accept an explicit
//! `[first, last)` position pair that may not describe a valid range of the
//! sequence it is applied to. This module defines the errors they report.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending positions and the sequence length.
//! * **No-std**: `Display` is always available; `std::error::Error` only with `std`.
//!
//! ## Invariants
//!
//! * A span that passes validation satisfies `first <= last <= len`.
//!
//! ## Non-goals
//!
//! * This module does not repair or clamp invalid spans.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for operations that take an explicit cursor span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The end marker lies past the one-past-the-last position of the sequence.
    SpanOutOfBounds {
        /// The end marker provided.
        last: usize,
        /// Length of the sequence the span was applied to.
        len: usize,
    },

    /// The start marker lies after the end marker.
    InvertedSpan {
        /// The start marker provided.
        first: usize,
        /// The end marker provided.
        last: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SequenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::SpanOutOfBounds { last, len } => {
                write!(
                    f,
                    "Span out of bounds: end marker {last} exceeds sequence length {len}"
                )
            }
            Self::InvertedSpan { first, last } => {
                write!(
                    f,
                    "Inverted span: start marker {first} is after end marker {last}"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SequenceError {}
