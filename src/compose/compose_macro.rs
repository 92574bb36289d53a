//! The `compose!` macro.
//!
//! Right-to-left composition: the last function listed runs first. This is
//! the shape behind every point-free lesson in the crate, e.g.
//! `compose!(sum, pluck(Coder::age))`.

/// Composes unary functions from right to left.
///
/// `compose!(f, g, h)(x)` evaluates `f(g(h(x)))`.
///
/// # Syntax
///
/// - `compose!(f)` - `f` itself
/// - `compose!(f, g)` - `move |x| f(g(x))`
/// - `compose!(f, g, h, ...)` - `compose!(f, compose!(g, h, ...))`
///
/// Every function must implement [`Fn`], and each output type must be the
/// input type of the function written to its left.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
///
/// # Examples
///
/// Deriving "even" from "odd":
///
/// ```
/// use lambda_lessons::compose;
///
/// fn not(value: bool) -> bool { !value }
/// fn odd(number: i64) -> bool { number % 2 != 0 }
///
/// let even = compose!(not, odd);
/// assert!(even(4));
/// assert!(!even(7));
/// ```
///
/// Types may change at every step:
///
/// ```
/// use lambda_lessons::compose;
///
/// fn describe(total: u64) -> String { format!("total: {total}") }
/// fn total(values: Vec<u64>) -> u64 { values.into_iter().sum() }
///
/// let report = compose!(describe, total);
/// assert_eq!(report(vec![30, 40]), "total: 70");
/// ```
///
/// Immediate application:
///
/// ```
/// use lambda_lessons::compose;
///
/// let add_two = |x: i64| x + 2;
/// let triple = |x: i64| x * 3;
///
/// assert_eq!(compose!(add_two, triple, add_two)(1), 11);
/// ```
#[macro_export]
macro_rules! compose {
    ($last:expr $(,)?) => {
        $last
    };

    // The tail is composed first, so it always runs before `$first`.
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let apply_last = $first;
        let apply_rest = $crate::compose!($($rest),+);
        move |value| apply_last(apply_rest(value))
    }};
}
