//! Currying for binary functions.
//!
//! The macro shares the function and the first argument through `std::rc::Rc`
//! so that a partial application such as `curry2!(add)(2)` implements [`Fn`]
//! and can be fed to `map` or `compose!` and called any number of times.

/// Converts a 2-argument function into curried form.
///
/// `curry2!(f)(a)(b) == f(a, b)`. The first argument must implement
/// [`Clone`]; it is cloned for every call of the partial application.
///
/// # Examples
///
/// ```
/// use lambda_lessons::curry2;
///
/// fn add(first: i64, second: i64) -> i64 { first + second }
///
/// let add_two = curry2!(add)(2);
/// let plus_two: Vec<i64> = vec![1, 2, 3].into_iter().map(&add_two).collect();
/// assert_eq!(plus_two, vec![3, 4, 5]);
/// ```
///
/// Partial applications are independent of each other:
///
/// ```
/// use lambda_lessons::curry2;
///
/// let greet = curry2!(|greeting: String, name: &str| format!("{greeting}, {name}"));
/// let hello = greet(String::from("hello"));
/// let hi = greet(String::from("hi"));
///
/// assert_eq!(hello("ada"), "hello, ada");
/// assert_eq!(hi("grace"), "hi, grace");
/// assert_eq!(hello("linus"), "hello, linus");
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                    second,
                )
            }
        }
    }};
}
