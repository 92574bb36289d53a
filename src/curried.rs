//! Curried, data-last list helpers.
//!
//! Each helper takes its configuration first and returns a closure that
//! waits for the list, so helpers slot directly into [`compose!`](crate::compose!):
//!
//! ```
//! use lambda_lessons::compose;
//! use lambda_lessons::curried::{add, map, reduce};
//!
//! let total_doubled = compose!(reduce(add, 0), map(|x: i64| x * 2));
//! assert_eq!(total_doubled(vec![1, 2, 3]), 12);
//! ```
//!
//! Lists are taken by value (`Vec<A>`), the same way a JSON array arrives
//! from a fetch and flows through `.then` stages.

use std::iter::Sum;
use std::ops::Add;

/// Adds two values.
///
/// Usable as a binary reducer (`reduce(add, 0)`) and, through
/// [`curry2!`](crate::curry2!), as a unary adder (`curry2!(add)(2)`).
///
/// # Examples
///
/// ```
/// use lambda_lessons::curried::add;
///
/// assert_eq!(add(4, 5), 9);
/// assert_eq!(add(0.5, 0.25), 0.75);
/// ```
#[inline]
pub fn add<T: Add<Output = T>>(first: T, second: T) -> T {
    first + second
}

/// Lifts an element function to a list function.
///
/// # Examples
///
/// ```
/// use lambda_lessons::curried::map;
///
/// let lengths = map(|word: &str| word.len());
/// assert_eq!(lengths(vec!["map", "reduce"]), vec![3, 6]);
/// ```
pub fn map<A, B, F>(function: F) -> impl Fn(Vec<A>) -> Vec<B>
where
    F: Fn(A) -> B,
{
    move |values| values.into_iter().map(&function).collect()
}

/// Keeps the elements satisfying a predicate, preserving order.
///
/// # Examples
///
/// ```
/// use lambda_lessons::curried::filter;
///
/// let adults = filter(|age: &u64| *age >= 18);
/// assert_eq!(adults(vec![12, 30, 17, 45]), vec![30, 45]);
/// ```
pub fn filter<A, P>(predicate: P) -> impl Fn(Vec<A>) -> Vec<A>
where
    P: Fn(&A) -> bool,
{
    move |values| values.into_iter().filter(|value| predicate(value)).collect()
}

/// Left fold with a seed. An empty list yields the seed.
///
/// # Examples
///
/// ```
/// use lambda_lessons::curried::{add, reduce};
///
/// let total = reduce(add, 0);
/// assert_eq!(total(vec![3, 4, 5]), 12);
/// assert_eq!(total(Vec::new()), 0);
/// ```
pub fn reduce<A, B, F>(function: F, seed: B) -> impl Fn(Vec<A>) -> B
where
    B: Clone,
    F: Fn(B, A) -> B,
{
    move |values| {
        values
            .into_iter()
            .fold(seed.clone(), |accumulator, value| function(accumulator, value))
    }
}

/// Turns a field accessor into an owned-record accessor.
///
/// Accessors are written against `&R`, as method getters are; `prop` adapts
/// them for use with [`map`], which hands over records by value.
///
/// # Examples
///
/// ```
/// use lambda_lessons::curried::{map, prop};
///
/// let firsts = map(prop(|pair: &(u8, char)| pair.0));
/// assert_eq!(firsts(vec![(1, 'a'), (2, 'b')]), vec![1, 2]);
/// ```
pub fn prop<R, T, G>(getter: G) -> impl Fn(R) -> T
where
    G: Fn(&R) -> T,
{
    move |record| getter(&record)
}

/// Extracts one field from every record.
///
/// `pluck(getter)` is `map(prop(getter))`.
///
/// # Examples
///
/// ```
/// use lambda_lessons::curried::pluck;
///
/// let names = pluck(|pair: &(&str, u64)| pair.0);
/// assert_eq!(names(vec![("ada", 36), ("grace", 45)]), vec!["ada", "grace"]);
/// ```
pub fn pluck<R, T, G>(getter: G) -> impl Fn(Vec<R>) -> Vec<T>
where
    G: Fn(&R) -> T,
{
    move |records| records.iter().map(&getter).collect()
}

/// Sums a list. An empty list sums to zero.
///
/// # Examples
///
/// ```
/// use lambda_lessons::curried::sum;
///
/// assert_eq!(sum(vec![3_u64, 4, 5, 6, 7]), 25);
/// assert_eq!(sum(Vec::<u64>::new()), 0);
/// ```
#[inline]
pub fn sum<T: Sum<T>>(values: Vec<T>) -> T {
    values.into_iter().sum()
}
