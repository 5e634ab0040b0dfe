//! # seqalgo — Generic sequence scans for Rust
//!
//! Two small, allocation-free-where-possible algorithms over any Rust sequence:
//!
//! - **Palindrome check**: does a sequence read the same forward and backward?
//!   Works on anything that can be iterated from both ends.
//! - **Compress**: collapse every run of equal consecutive elements to a single
//!   occurrence. Works on anything that can be iterated forward once.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqalgo::prelude::*;
//!
//! assert!([1, 2, 3, 4, 4, 3, 2, 1].is_palindrome());
//! assert!(!vec![1, 2, 3, 4, 5].is_palindrome());
//!
//! assert_eq!([1, 1, 2, 2, 1, 1].compress(), [1, 2, 1]);
//! ```
//!
//! ### Empty sequences
//!
//! An empty sequence is **not** a palindrome:
//!
//! ```rust
//! use seqalgo::is_palindrome;
//!
//! assert!(!is_palindrome(Vec::<i32>::new()));
//! assert!(is_palindrome([42]));
//! ```
//!
//! Compressing an empty sequence yields an empty sequence.
//!
//! ### Writing into your own collection
//!
//! `compress_into` appends to any `Extend` sink and reports how the scan ended:
//!
//! ```rust
//! use std::collections::VecDeque;
//! use seqalgo::{compress_into, CompressState};
//!
//! let mut out = VecDeque::new();
//! let state = compress_into("aaabccdd".chars(), &mut out);
//!
//! assert_eq!(out, ['a', 'b', 'c', 'd']);
//! assert_eq!(state, CompressState::Exhausted);
//! ```
//!
//! ### Cursor spans
//!
//! The span forms take an explicit half-open `[first, last)` position pair and
//! are the only fallible entry points:
//!
//! ```rust
//! use seqalgo::prelude::*;
//!
//! let data = [9, 1, 2, 1, 9, 9];
//! let span = Span::new(1, 4, data.len())?;
//! assert!(is_palindrome_span(&data, span)?);
//!
//! let bad = Span::new(2, 7, data.len());
//! assert_eq!(bad, Err(SequenceError::SpanOutOfBounds { last: 7, len: 6 }));
//! # Result::<(), SequenceError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! seqalgo = { version = "0.1", default-features = false }
//! ```
//!
//! ## Features
//!
//! - `std` (default): implements `std::error::Error` for [`prelude::SequenceError`].
//! - `log`: emits `trace` events through the `log` facade under the `seqalgo`
//!   target. `cargo test --features log` runs the tests that capture them.
//! - `dev`: exposes the internal layers under `internals`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[macro_use]
mod macros;

// Layer 1: Primitives - cursor spans and error types.
mod primitives;

// Layer 2: Algorithms - palindrome and compress scans.
mod algorithms;

// Method-style API over standard collections.
mod api;

pub use algorithms::compress::{
    compress, compress_by, compress_into, compress_slice, compress_span, CompressState,
};
pub use algorithms::palindrome::{
    is_palindrome, is_palindrome_approx, is_palindrome_by, is_palindrome_span,
};
pub use api::{Compress, Palindrome};
pub use primitives::errors::SequenceError;
pub use primitives::span::Span;

// Standard seqalgo prelude.
pub mod prelude {
    pub use crate::algorithms::compress::{
        compress, compress_by, compress_into, compress_slice, compress_span, CompressState,
    };
    pub use crate::algorithms::palindrome::{
        is_palindrome, is_palindrome_approx, is_palindrome_by, is_palindrome_span,
    };
    pub use crate::api::{Compress, Palindrome};
    pub use crate::primitives::errors::SequenceError;
    pub use crate::primitives::span::Span;
}

// Internal modules for development and testing.
//
// Only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
