//! Tests for the closure factories.

use std::cell::RefCell;

use lambda_lessons::closures::{make_adder, make_logger_with, run};
use rstest::rstest;

// =============================================================================
// make_adder
// =============================================================================

#[rstest]
#[case(2, 3, 5)]
#[case(5, 5, 10)]
#[case(0, -4, -4)]
fn make_adder_adds_captured_value(#[case] add: i64, #[case] x: i64, #[case] expected: i64) {
    assert_eq!(make_adder(add)(x), expected);
}

#[rstest]
fn adder_outlives_its_factory_argument() {
    let adders: Vec<_> = (1..=3).map(make_adder).collect();
    let results: Vec<i64> = adders.iter().map(|adder| adder(10)).collect();
    assert_eq!(results, vec![11, 12, 13]);
}

// =============================================================================
// make_logger / run
// =============================================================================

#[rstest]
fn run_delivers_hello_exactly_once() {
    let lines = RefCell::new(Vec::<String>::new());
    let hello = make_logger_with("hello", |line| lines.borrow_mut().push(line.to_owned()));

    run(&hello);

    assert_eq!(*lines.borrow(), vec!["hello"]);
}

#[rstest]
fn each_logger_keeps_its_own_message() {
    let lines = RefCell::new(Vec::<String>::new());
    let sink = |line: &str| lines.borrow_mut().push(line.to_owned());
    let first = make_logger_with("first", sink);
    let second = make_logger_with(String::from("second"), sink);

    run(&second);
    run(&first);

    assert_eq!(*lines.borrow(), vec!["second", "first"]);
}

#[rstest]
fn run_passes_through_return_value() {
    let answer = run(|| make_adder(40)(2));
    assert_eq!(answer, 42);
}
