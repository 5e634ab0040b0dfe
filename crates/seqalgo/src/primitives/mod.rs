//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the cursor abstraction and error types used by the
//! algorithms. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Half-open cursor spans.
pub mod span;

/// Shared error types.
pub mod errors;
