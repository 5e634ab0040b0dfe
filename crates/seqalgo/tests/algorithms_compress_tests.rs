//! Tests for consecutive-duplicate compression.
//!
//! These tests verify the compress scan for:
//! - Empty input and inputs without duplicates
//! - Run collapsing with first-occurrence values
//! - Appending to caller-owned sinks
//! - Scan state reporting and custom equality
//!
//! ## Test Organization
//!
//! 1. **Concrete Cases** - Empty, identity and run-collapsing cases
//! 2. **Sinks** - Appending to existing collections of different types
//! 3. **Scan State** - Terminal states reported by `compress_into`
//! 4. **Custom Equality** - `compress_by` with keys and tolerances

use std::collections::{LinkedList, VecDeque};
use std::rc::Rc;

use approx::{assert_relative_eq, relative_eq};
use seqalgo::{compress, compress_by, compress_into, compress_slice, CompressState};

// ============================================================================
// Helper Types
// ============================================================================

// Sink that records how many times it was extended.
#[derive(Default)]
struct Recorder {
    items: Vec<i32>,
    extends: usize,
}

impl Extend<i32> for Recorder {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        self.extends += 1;
        self.items.extend(iter);
    }
}

// ============================================================================
// Concrete Cases
// ============================================================================

/// Test compressing an empty list.
///
/// Verifies that empty input gives empty output.
#[test]
fn test_compress_empty() {
    let source: LinkedList<i32> = LinkedList::new();
    let mut result: LinkedList<i32> = LinkedList::new();

    compress_into(source.iter().copied(), &mut result);

    assert!(result.is_empty());
}

/// Test compressing a list without consecutive duplicates.
///
/// Verifies that the output equals the input.
#[test]
fn test_compress_no_duplicates() {
    let source: LinkedList<i32> = [1, 2, 3, 1, 2, 3].into_iter().collect();
    let mut result: LinkedList<i32> = LinkedList::new();

    compress_into(source.iter().copied(), &mut result);

    assert_eq!(result, source);
}

/// Test compressing a list with consecutive duplicates.
///
/// Verifies that each run collapses to one element.
#[test]
fn test_compress_collapses_runs() {
    let source: LinkedList<i32> = [1, 1, 2, 2, 1, 1].into_iter().collect();
    let expected: LinkedList<i32> = [1, 2, 1].into_iter().collect();
    let mut result: LinkedList<i32> = LinkedList::new();

    compress_into(source.iter().copied(), &mut result);

    assert_eq!(result, expected);
}

/// Test single elements and uniform runs.
#[test]
fn test_compress_single_run() {
    assert_eq!(compress([7]), [7]);
    assert_eq!(compress([7, 7, 7, 7]), [7]);
}

/// Test that compression keeps the first value of each run.
///
/// Verifies using values that compare equal but are distinguishable.
#[test]
fn test_compress_keeps_first_of_run() {
    let words = ["apple", "Avocado", "banana", "Blueberry", "apricot"];

    let mut out: Vec<&str> = Vec::new();
    compress_by(words, &mut out, |a, b| {
        a.chars().next().map(|c| c.to_ascii_lowercase())
            == b.chars().next().map(|c| c.to_ascii_lowercase())
    });

    assert_eq!(out, ["apple", "banana", "apricot"]);
}

/// Test compressing strings and borrowed slices.
#[test]
fn test_compress_owned_and_borrowed() {
    let letters = String::from("Mississippi");
    let squeezed: String = compress(letters.chars()).into_iter().collect();
    assert_eq!(squeezed, "Misisipi");

    let owned = vec![String::from("x"), String::from("x"), String::from("y")];
    assert_eq!(compress_slice(&owned), ["x", "y"]);

    let borrowed = compress(&owned);
    assert_eq!(borrowed, [&owned[0], &owned[2]]);
}

// ============================================================================
// Sinks
// ============================================================================

/// Test appending to a non-empty sink.
///
/// Verifies that existing sink contents are preserved.
#[test]
fn test_compress_appends_to_sink() {
    let mut sink = vec![0, 0];

    compress_into([1, 1, 0, 0], &mut sink);

    assert_eq!(sink, [0, 0, 1, 0], "Sink contents are never compared or rewritten");
}

/// Test compressing into a VecDeque.
#[test]
fn test_compress_into_vecdeque() {
    let mut sink = VecDeque::new();

    compress_into("aabbbc".chars(), &mut sink);

    assert_eq!(sink, ['a', 'b', 'c']);
}

/// Test compressing into a String.
///
/// Verifies that `String` works as a `char` sink.
#[test]
fn test_compress_into_string() {
    let mut sink = String::from(">");

    compress_into("  hello   world  ".chars(), &mut sink);

    assert_eq!(sink, "> helo world ");
}

/// Test that each surviving element reaches the sink in its own call.
///
/// Verifies that emits are not batched.
#[test]
fn test_compress_emits_one_element_per_extend() {
    let mut sink = Recorder::default();

    compress_into(vec![5, 5, 6, 7, 7, 7, 5], &mut sink);

    assert_eq!(sink.items, [5, 6, 7, 5]);
    assert_eq!(sink.extends, 4);
}

/// Test that only surviving elements are cloned.
#[test]
fn test_compress_slice_clones_survivors_only() {
    let shared = Rc::new(1);
    let data = [Rc::clone(&shared), Rc::clone(&shared), Rc::clone(&shared)];

    let out = compress_slice(&data);

    assert_eq!(out.len(), 1);
    // Three in `data`, one in `out`, plus `shared` itself
    assert_eq!(Rc::strong_count(&shared), 5);
}

// ============================================================================
// Scan State Tests
// ============================================================================

/// Test terminal states.
///
/// Verifies `EmptyDone` for empty input and `Exhausted` otherwise.
#[test]
fn test_compress_terminal_state() {
    let mut sink: Vec<u8> = Vec::new();

    assert_eq!(compress_into(Vec::<u8>::new(), &mut sink), CompressState::EmptyDone);
    assert_eq!(compress_into([1u8], &mut sink), CompressState::Exhausted);
    assert_eq!(compress_into([2u8, 2, 3], &mut sink), CompressState::Exhausted);
    assert_eq!(sink, [1, 2, 3]);

    assert!(CompressState::EmptyDone.is_terminal());
    assert!(CompressState::Exhausted.is_terminal());
    assert!(!CompressState::Started.is_terminal());
}

// ============================================================================
// Custom Equality
// ============================================================================

/// Test that each element is compared with the preceding input element.
///
/// Neighbours one apart count as equal. Checking 3 against the last emitted
/// element (1) instead would emit it.
#[test]
fn test_compress_by_compares_previous_input() {
    let mut out: Vec<i32> = Vec::new();

    compress_by(vec![1, 2, 3], &mut out, |prev, cur| cur - prev == 1);

    assert_eq!(out, [1]);
}

/// Test compressing floats with a relative tolerance.
///
/// Verifies that nearly-equal neighbours collapse to the first value.
#[test]
fn test_compress_by_tolerance() {
    let samples = [0.1 + 0.2, 0.3, 0.3, 1.0, 1.0 + 1e-15, 2.0];

    let mut out: Vec<f64> = Vec::new();
    compress_by(samples, &mut out, |a: &f64, b: &f64| {
        relative_eq!(*a, *b, epsilon = 1e-12)
    });

    assert_eq!(out.len(), 3);
    assert_relative_eq!(out[0], 0.3, epsilon = 1e-12);
    assert_relative_eq!(out[1], 1.0);
    assert_relative_eq!(out[2], 2.0);
    assert_eq!(out[0], 0.1 + 0.2, "First value of the run is kept");
}

/// Test that NaN never collapses.
///
/// Verifies that elements whose equality is not reflexive are all kept.
#[test]
fn test_compress_nan() {
    let out = compress([f64::NAN, f64::NAN, 1.0, 1.0]);

    assert_eq!(out.len(), 3);
    assert!(out[0].is_nan() && out[1].is_nan());
    assert_eq!(out[2], 1.0);
}
