//! Point-free numeric pipeline: add a constant to every element, then sum.

use crate::curried::{add, map, reduce};
use crate::{compose, curry2};

/// `compose!(reduce(add, 0), map(curry2!(add)(increment)))`.
///
/// Inputs are `i32` and every element is widened to `i64` before the
/// increment is added, so the sum cannot wrap for any input that fits in
/// memory.
///
/// # Examples
///
/// ```
/// use lambda_lessons::numeric::sum_of_plus;
///
/// let sum_of_plus10 = sum_of_plus(10);
/// assert_eq!(sum_of_plus10(vec![1, 2]), 23);
/// ```
pub fn sum_of_plus(increment: i32) -> impl Fn(Vec<i32>) -> i64 {
    let plus = curry2!(add::<i64>)(i64::from(increment));
    compose!(reduce(add, 0), map(compose!(plus, widen)))
}

#[inline]
fn widen(value: i32) -> i64 {
    i64::from(value)
}

/// Adds 2 to every element and sums the results.
///
/// ```
/// use lambda_lessons::numeric::sum_of_plus2;
///
/// // 3 + 4 + 5 + 6 + 7
/// assert_eq!(sum_of_plus2()(vec![1, 2, 3, 4, 5]), 25);
/// ```
pub fn sum_of_plus2() -> impl Fn(Vec<i32>) -> i64 {
    sum_of_plus(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_sums_to_zero() {
        assert_eq!(sum_of_plus2()(Vec::new()), 0);
    }

    #[test]
    fn increment_is_applied_per_element() {
        let values = vec![-1, 0, 1];
        let plain: i64 = values.iter().copied().map(i64::from).sum();
        assert_eq!(sum_of_plus(3)(values), plain + 9);
    }

    #[test]
    fn extreme_values_do_not_wrap() {
        assert_eq!(sum_of_plus2()(vec![i32::MAX, i32::MAX]), 4_294_967_298);
        assert_eq!(sum_of_plus(i32::MIN)(vec![i32::MIN]), -4_294_967_296);
    }
}
