//! The `pipe!` macro for left-to-right application.

/// Threads a value through functions from left to right.
///
/// `pipe!(x, f, g, h)` evaluates `h(g(f(x)))`, which is `compose!(h, g, f)(x)`.
/// Unlike [`compose!`](crate::compose!), the value is supplied up front and
/// each function is called once, so [`FnOnce`] is enough.
///
/// # Examples
///
/// The `.then(getAges).then(addAges)` chain of the age challenge, written
/// as a synchronous pipeline:
///
/// ```
/// use lambda_lessons::pipe;
///
/// fn get_ages(records: Vec<(&str, u64)>) -> Vec<u64> {
///     records.into_iter().map(|(_, age)| age).collect()
/// }
/// fn add_ages(ages: Vec<u64>) -> u64 { ages.into_iter().sum() }
///
/// let total = pipe!(vec![("ada", 36), ("alan", 41)], get_ages, add_ages);
/// assert_eq!(total, 77);
/// ```
///
/// ```
/// use lambda_lessons::{compose, pipe};
///
/// let increment = |x: i64| x + 1;
/// let double = |x: i64| x * 2;
///
/// assert_eq!(pipe!(10, increment, double), compose!(double, increment)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $next:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!($next($value) $(, $rest)*)
    };
}
