//! Boolean composition: deriving new predicates from existing ones.
//!
//! ```
//! use lambda_lessons::predicates::{even_numbers, odd_sum};
//!
//! assert_eq!(even_numbers(&[1, 2, 3, 4, 5, 6]), vec![2, 4, 6]);
//!
//! let odd_sum = odd_sum();
//! assert!(odd_sum(4, 5));
//! assert!(!odd_sum(4, 4));
//! ```

use crate::compose;
use crate::compose::compose_binary;

/// Whether `number` is odd. Negative odd numbers count as odd.
#[inline]
pub const fn odd(number: i64) -> bool {
    number % 2 != 0
}

/// Boolean negation as a function value.
#[inline]
pub const fn not(value: bool) -> bool {
    !value
}

/// "Even", obtained by composing [`not`] after [`odd`].
pub fn even() -> impl Fn(i64) -> bool {
    compose!(not, odd)
}

/// Keeps the even numbers of `numbers`, in order.
pub fn even_numbers(numbers: &[i64]) -> Vec<i64> {
    let even = even();
    numbers.iter().copied().filter(|&number| even(number)).collect()
}

/// Whether the sum of two numbers is odd: [`odd`] composed after an add.
///
/// The operands are `i32` and are added as `i64`, so the sum always fits.
pub fn odd_sum() -> impl Fn(i32, i32) -> bool {
    compose_binary(odd, widening_add)
}

#[inline]
fn widening_add(first: i32, second: i32) -> i64 {
    i64::from(first) + i64::from(second)
}
