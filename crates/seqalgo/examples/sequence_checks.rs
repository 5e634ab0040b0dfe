//! seqalgo walkthrough
//!
//! This example runs both scans over the sequences used throughout the test
//! suite and prints the results:
//! - Palindrome checks on linked lists, strings and sub-ranges
//! - Compression into fresh and pre-filled sinks

use std::collections::LinkedList;

use seqalgo::prelude::*;

fn main() -> Result<(), SequenceError> {
    println!("{}", "=".repeat(60));
    println!("seqalgo walkthrough");
    println!("{}", "=".repeat(60));
    println!();

    palindromes()?;
    compression()?;

    Ok(())
}

fn palindromes() -> Result<(), SequenceError> {
    println!("Palindrome checks");
    println!("{}", "-".repeat(60));

    let cases: [&[i32]; 7] = [
        &[],
        &[1],
        &[1, 2, 3, 4, 4, 3, 2, 1],
        &[1, 2, 3, 4, 5],
        &[1, 2],
        &[1, 2, 3, 4, 3, 2, 1],
        &[1, 2, 3, 4, 5, 6, 7],
    ];

    for case in cases {
        let list: LinkedList<i32> = case.iter().copied().collect();
        println!("  {:<28} {}", format!("{:?}", list), list.is_palindrome());
    }

    for word in ["racecar", "Racecar", "abba", ""] {
        println!("  {:<28} {}", format!("{:?}", word), word.is_palindrome());
    }

    let data = [9, 1, 2, 1, 7];
    let span = Span::new(1, 4, data.len())?;
    println!(
        "  {:<28} {}",
        format!("{:?}[1..4]", data),
        is_palindrome_span(&data, span)?
    );
    println!();

    Ok(())
}

fn compression() -> Result<(), SequenceError> {
    println!("Compression");
    println!("{}", "-".repeat(60));

    for case in [vec![], vec![1, 2, 3, 1, 2, 3], vec![1, 1, 2, 2, 1, 1]] {
        println!("  {:<28} {:?}", format!("{:?}", case), case.compress());
    }

    let mut sink = String::from("squeezed: ");
    let state = compress_into("bookkeeper".chars(), &mut sink);
    println!("  {:<28} {} ({:?})", "\"bookkeeper\"", sink, state);

    let data = [5, 5, 1, 1, 2, 5];
    let mut tail: Vec<&i32> = Vec::new();
    compress_span(&data, Span::new(2, data.len(), data.len())?, &mut tail)?;
    println!("  {:<28} {:?}", format!("{:?}[2..]", data), tail);

    Ok(())
}
