//! Method-style API over standard collections.
//!
//! ## Purpose
//!
//! This module exposes the algorithms as extension traits, so that a caller
//! can write `data.is_palindrome()` or `data.compress()` on common collection
//! types without picking an iterator form.
//!
//! ## Design notes
//!
//! * **Thin**: Every method forwards to the free function in the algorithms layer.
//! * **Deref-friendly**: Implementing for `[T]` covers `Vec<T>`, arrays and boxed slices.
//!
//! ## Non-goals
//!
//! * This module does not add behaviour beyond the free functions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::{LinkedList, VecDeque};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::{LinkedList, VecDeque};

// Internal dependencies
use crate::algorithms::compress::{compress_cloned, compress_slice};
use crate::algorithms::palindrome;

// ============================================================================
// Palindrome
// ============================================================================

/// Sequences that can be checked for palindromes.
pub trait Palindrome {
    /// Returns `true` if the sequence reads the same forward and backward.
    ///
    /// Empty sequences are not palindromes.
    fn is_palindrome(&self) -> bool;
}

impl<T: PartialEq> Palindrome for [T] {
    #[inline]
    fn is_palindrome(&self) -> bool {
        palindrome::is_palindrome(self)
    }
}

impl<T: PartialEq> Palindrome for VecDeque<T> {
    #[inline]
    fn is_palindrome(&self) -> bool {
        palindrome::is_palindrome(self)
    }
}

impl<T: PartialEq> Palindrome for LinkedList<T> {
    #[inline]
    fn is_palindrome(&self) -> bool {
        palindrome::is_palindrome(self)
    }
}

/// Compared `char` by `char`, with no case folding.
impl Palindrome for str {
    #[inline]
    fn is_palindrome(&self) -> bool {
        palindrome::is_palindrome(self.chars())
    }
}

// ============================================================================
// Compress
// ============================================================================

/// Sequences that can be compressed into owned runs.
pub trait Compress {
    /// Element type of the compressed output.
    type Item;

    /// Returns a copy of the sequence with consecutive duplicates collapsed.
    fn compress(&self) -> Vec<Self::Item>;
}

impl<T: PartialEq + Clone> Compress for [T] {
    type Item = T;

    #[inline]
    fn compress(&self) -> Vec<T> {
        compress_slice(self)
    }
}

impl<T: PartialEq + Clone> Compress for VecDeque<T> {
    type Item = T;

    #[inline]
    fn compress(&self) -> Vec<T> {
        compress_cloned(self)
    }
}

impl<T: PartialEq + Clone> Compress for LinkedList<T> {
    type Item = T;

    #[inline]
    fn compress(&self) -> Vec<T> {
        compress_cloned(self)
    }
}
