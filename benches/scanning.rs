//! Benchmarks for the delimiter scanners
//!
//! Run with: cargo bench scanning

use bracken::pairs::{find_closing, find_enclosing, find_opening, Family, Gap};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn nested_buffer(depth: usize) -> String {
    let mut text = String::new();
    for _ in 0..depth {
        text.push_str("fn call(a, [b, {c");
    }
    text.push_str("x = y");
    for _ in 0..depth {
        text.push_str("}], d)");
    }
    text
}

// ============================================================================
// Backward scan
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn find_opening_nested(depth: usize) {
    let buffer = nested_buffer(depth);
    let caret = buffer.chars().count() / 2;
    let before: String = buffer.chars().take(caret).collect();
    divan::black_box(find_opening(&before, Family::Bracket));
}

#[divan::bench]
fn find_opening_unbalanced_10k_chars() {
    let before = "no delimiters here ".repeat(500);
    divan::black_box(find_opening(&before, Family::Bracket));
}

// ============================================================================
// Forward scan
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn find_closing_nested(depth: usize) {
    let buffer = nested_buffer(depth);
    let caret = buffer.chars().count() / 2;
    let before: String = buffer.chars().take(caret).collect();
    let after: String = buffer.chars().skip(caret).collect();
    let opening = find_opening(&before, Family::Bracket).unwrap();
    divan::black_box(find_closing(&after, &opening, caret));
}

// ============================================================================
// End to end
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn find_enclosing_nested(depth: usize) {
    let buffer = nested_buffer(depth);
    let caret = buffer.chars().count() / 2;
    divan::black_box(find_enclosing(&buffer, Gap::caret(caret), Family::Bracket));
}

#[divan::bench]
fn find_enclosing_quotes_10k_chars() {
    let buffer = format!("prefix \"{}\" suffix", "long string content ".repeat(500));
    divan::black_box(find_enclosing(&buffer, Gap::caret(20), Family::Quote));
}
