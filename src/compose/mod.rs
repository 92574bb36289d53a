//! Function composition utilities.
//!
//! The lessons in this crate are written against a small composition
//! toolkit rather than an external library:
//!
//! - [`compose!`]: right-to-left composition, `compose!(f, g)(x) == f(g(x))`
//! - [`pipe!`]: left-to-right application, `pipe!(x, f, g) == g(f(x))`
//! - [`curry2!`]: `curry2!(f)(a)(b) == f(a, b)`
//! - [`identity`], [`flip`], [`compose_binary`]
//!
//! # Examples
//!
//! ```
//! use lambda_lessons::{compose, curry2, pipe};
//!
//! fn add(first: i64, second: i64) -> i64 { first + second }
//! fn double(x: i64) -> i64 { x * 2 }
//!
//! let add_two = curry2!(add)(2);
//! let composed = compose!(double, add_two);
//!
//! assert_eq!(composed(3), 10);
//! assert_eq!(pipe!(3, curry2!(add)(2), double), 10);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Pipe/compose duality**: `pipe!(x, f, g) == compose!(g, f)(x)`
//! - **Double flip**: `flip(flip(f)) == f`

mod compose_macro;
mod curry_macro;
mod pipe_macro;
mod utils;

pub use utils::{compose_binary, flip, identity};

// Macros are exported at the crate root by #[macro_export].
pub use crate::compose;
pub use crate::curry2;
pub use crate::pipe;
