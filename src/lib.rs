//! # lambda-lessons
//!
//! Functional programming lessons written in Rust.
//!
//! ## Overview
//!
//! Each module is a short, self-contained lesson:
//!
//! - **Closure factories**: functions returning functions ([`closures`])
//! - **Function composition**: `compose!`, `pipe!`, `curry2!` and friends ([`compose`])
//! - **Point-free helpers**: curried `map`, `filter`, `reduce`, `pluck`, `sum` ([`curried`])
//! - **Boolean composition**: `even` as `compose!(not, odd)` ([`predicates`])
//! - **Numeric pipelines**: `compose!(reduce(add, 0), map(curry2!(add)(2)))` ([`numeric`])
//! - **The age challenge**: one summation written eleven ways, from an index
//!   loop to `compose!(sum, pluck(age))` ([`coders`], [`challenge`])
//! - **JSON sources**: the asynchronous fetch the challenge runs behind ([`fetch`])
//!
//! ## Feature Flags
//!
//! - `compose`: composition macros, helpers and the synchronous lessons
//! - `async`: JSON sources and the asynchronous challenge pipelines
//! - `cli`: the `lambda-lessons` binary
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambda_lessons::prelude::*;
//!
//! let add_two = make_adder(2);
//! assert_eq!(add_two(3), 5);
//!
//! let sum_of_plus2 = compose!(reduce(add, 0), map(curry2!(add::<i64>)(2)));
//! assert_eq!(sum_of_plus2(vec![1, 2, 3, 4, 5]), 25);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use lambda_lessons::prelude::*;
/// ```
pub mod prelude {
    pub use crate::closures::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "compose")]
    pub use crate::curried::*;

    #[cfg(feature = "compose")]
    pub use crate::coders::{Coder, Variant};

    #[cfg(feature = "async")]
    pub use crate::fetch::{DirectorySource, FetchError, JsonSource, MemorySource};
}

pub mod closures;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "compose")]
pub mod curried;

#[cfg(feature = "compose")]
pub mod predicates;

#[cfg(feature = "compose")]
pub mod numeric;

#[cfg(feature = "compose")]
pub mod coders;

#[cfg(feature = "async")]
pub mod fetch;

#[cfg(feature = "async")]
pub mod challenge;
