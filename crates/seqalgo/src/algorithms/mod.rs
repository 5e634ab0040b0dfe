//! Layer 2: Algorithms
//!
//! This layer implements the two sequence scans. Neither depends on the other;
//! both build only on the primitives layer.

// Two-cursor palindrome check.
pub mod palindrome;

// Consecutive-duplicate compression.
pub mod compress;
