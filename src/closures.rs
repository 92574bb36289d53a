//! Closure factories: functions that build and return functions.
//!
//! ```
//! use lambda_lessons::closures::make_adder;
//!
//! let add_two = make_adder(2);
//! let add_five = make_adder(5);
//!
//! assert_eq!(add_two(3), 5);
//! assert_eq!(add_five(5), 10);
//! ```

use std::ops::Add;

/// Returns a function that adds `add` to its argument.
///
/// The returned closure owns a copy of `add`, so it can outlive the call
/// that created it and be invoked any number of times.
pub fn make_adder<T>(add: T) -> impl Fn(T) -> T
where
    T: Add<Output = T> + Copy,
{
    move |x| add + x
}

/// Returns a zero-argument function that prints `message` to stdout.
///
/// Each invocation prints the message once, followed by a newline.
///
/// ```no_run
/// use lambda_lessons::closures::{make_logger, run};
///
/// let hello = make_logger("hello");
/// run(hello); // prints "hello"
/// ```
pub fn make_logger(message: impl Into<String>) -> impl Fn() {
    make_logger_with(message, |line| println!("{line}"))
}

/// Like [`make_logger`], but hands the message to `sink` instead of stdout.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use lambda_lessons::closures::{make_logger_with, run};
///
/// let lines = RefCell::new(Vec::new());
/// let hello = make_logger_with("hello", |line| lines.borrow_mut().push(line.to_owned()));
///
/// run(&hello);
/// assert_eq!(*lines.borrow(), vec!["hello"]);
/// ```
pub fn make_logger_with<S>(message: impl Into<String>, sink: S) -> impl Fn()
where
    S: Fn(&str),
{
    let message = message.into();
    move || sink(&message)
}

/// Calls `function` once and returns whatever it returns.
#[inline]
pub fn run<F, R>(function: F) -> R
where
    F: FnOnce() -> R,
{
    function()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn adders_are_independent() {
        let add_two = make_adder(2);
        let add_five = make_adder(5);
        assert_eq!(add_two(3), 5);
        assert_eq!(add_five(5), 10);
        assert_eq!(add_two(-2), 0);
    }

    #[test]
    fn adder_works_for_floats() {
        let add_half = make_adder(0.5_f64);
        assert!((add_half(1.25) - 1.75).abs() < f64::EPSILON);
    }

    #[test]
    fn logger_is_lazy_until_run() {
        let lines = RefCell::new(Vec::<String>::new());
        let logger = make_logger_with("later", |line| lines.borrow_mut().push(line.to_owned()));
        assert!(lines.borrow().is_empty());

        run(&logger);
        run(&logger);
        assert_eq!(*lines.borrow(), vec!["later", "later"]);
    }

    #[test]
    fn run_returns_the_result() {
        assert_eq!(run(|| 42), 42);
    }
}
