//! Unit tests for the composition toolkit.
//!
//! Tests for identity, flip, compose_binary and the compose!, pipe! and
//! curry2! macros.

#![cfg(feature = "compose")]

use lambda_lessons::compose::{compose_binary, flip, identity};
use lambda_lessons::{compose, curry2, pipe};
use rstest::rstest;

fn add_two(x: i64) -> i64 {
    x + 2
}

fn triple(x: i64) -> i64 {
    x * 3
}

fn subtract(minuend: i64, subtrahend: i64) -> i64 {
    minuend - subtrahend
}

// =============================================================================
// compose! tests
// =============================================================================

#[rstest]
#[case(0, 6)]
#[case(1, 9)]
#[case(-2, 0)]
fn compose_applies_rightmost_first(#[case] input: i64, #[case] expected: i64) {
    // triple(add_two(x))
    let composed = compose!(triple, add_two);
    assert_eq!(composed(input), expected);
}

#[rstest]
fn compose_many_functions() {
    // add_two(triple(add_two(triple(1)))) = add_two(triple(5)) = 17
    let composed = compose!(add_two, triple, add_two, triple);
    assert_eq!(composed(1), 17);
}

#[rstest]
fn compose_accepts_trailing_comma() {
    let composed = compose!(add_two, triple,);
    assert_eq!(composed(1), 5);
}

#[rstest]
fn compose_changes_types_between_steps() {
    let count_words = |text: String| text.split_whitespace().count();
    let join = |words: Vec<&str>| words.join(" ");
    let composed = compose!(count_words, join);
    assert_eq!(composed(vec!["point", "free", "style"]), 3);
}

// =============================================================================
// pipe! tests
// =============================================================================

#[rstest]
fn pipe_applies_leftmost_first() {
    // triple(add_two(1)) = 9
    assert_eq!(pipe!(1, add_two, triple), 9);
}

#[rstest]
fn pipe_and_compose_agree() {
    assert_eq!(pipe!(4, triple, add_two), compose!(add_two, triple)(4));
}

// =============================================================================
// curry2! tests
// =============================================================================

#[rstest]
fn curry2_fixes_the_first_argument() {
    let from_ten = curry2!(subtract)(10);
    assert_eq!(from_ten(3), 7);
    assert_eq!(from_ten(10), 0);
}

#[rstest]
fn curried_partial_application_feeds_compose() {
    let add_five = curry2!(|first: i64, second: i64| first + second)(5);
    let composed = compose!(triple, add_five);
    assert_eq!(composed(1), 18);
}

// =============================================================================
// Helper function tests
// =============================================================================

#[rstest]
fn identity_is_a_unit_of_compose() {
    assert_eq!(compose!(identity, triple)(7), triple(7));
    assert_eq!(compose!(triple, identity)(7), triple(7));
}

#[rstest]
fn flip_swaps_arguments() {
    assert_eq!(flip(subtract)(1, 10), 9);
}

#[rstest]
#[case(4, 5, true)]
#[case(4, 4, false)]
#[case(-1, 0, true)]
fn compose_binary_runs_outer_on_binary_result(
    #[case] first: i64,
    #[case] second: i64,
    #[case] expected: bool,
) {
    let odd_sum = compose_binary(|n: i64| n % 2 != 0, |a: i64, b: i64| a + b);
    assert_eq!(odd_sum(first, second), expected);
}
