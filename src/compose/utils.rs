//! Combinators used alongside the composition macros.
//!
//! - [`identity`]: the unit of composition
//! - [`flip`]: swaps the arguments of a binary function
//! - [`compose_binary`]: composes a unary function after a binary one

/// Returns its argument unchanged.
///
/// `compose!(identity, f)` and `compose!(f, identity)` both behave as `f`.
///
/// # Examples
///
/// ```
/// use lambda_lessons::compose::identity;
///
/// assert_eq!(identity(25), 25);
/// assert_eq!(identity(vec![2, 4, 6]), vec![2, 4, 6]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(a, b) == f(b, a)` and `flip(flip(f)) == f`.
///
/// # Examples
///
/// A reducer written `(total, age)` can be reused where the element comes first:
///
/// ```
/// use lambda_lessons::compose::flip;
///
/// fn add_to_total(total: u64, age: u64) -> u64 { total + age }
///
/// let add_age_to = flip(add_to_total);
/// assert_eq!(add_age_to(5, 40), 45);
/// ```
///
/// ```
/// use lambda_lessons::compose::flip;
///
/// fn subtract(minuend: i64, subtrahend: i64) -> i64 { minuend - subtrahend }
///
/// assert_eq!(flip(subtract)(3, 10), 7);
/// assert_eq!(flip(flip(subtract))(3, 10), subtract(3, 10));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Composes a unary function after a binary one.
///
/// `compose_binary(f, g)(a, b) == f(g(a, b))`. This is the shape of
/// `oddSum = compose(odd, add)`, where only the rightmost function takes
/// more than one argument. Further unary steps go into the outer function:
/// `compose_binary(compose!(h, f), g)`.
///
/// # Examples
///
/// ```
/// use lambda_lessons::compose::compose_binary;
///
/// fn add(first: i64, second: i64) -> i64 { first + second }
/// fn odd(number: i64) -> bool { number % 2 != 0 }
///
/// let odd_sum = compose_binary(odd, add);
/// assert!(odd_sum(4, 5));
/// assert!(!odd_sum(4, 4));
/// ```
#[inline]
pub fn compose_binary<A, B, C, D, F, G>(outer: F, inner: G) -> impl Fn(A, B) -> D
where
    F: Fn(C) -> D,
    G: Fn(A, B) -> C,
{
    move |first_argument, second_argument| outer(inner(first_argument, second_argument))
}
