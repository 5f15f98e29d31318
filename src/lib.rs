/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Tagged unions for values that may be absent or computations that may fail.
//!
//! - [`Maybe<A>`]: either [`Maybe::Just`] a value or [`Maybe::Nothing`]
//! - [`Outcome<E, V>`]: either an [`Outcome::Success`] with a value or an [`Outcome::Failure`] with an error
//! - [`pipe`]: left-to-right composition of unary functions, re-exported from [`pipe_fn`]
//!
//! Both types are consumed with an exhaustive [`match_with`](`Maybe::match_with`) or transformed with
//! short-circuiting combinators: [`map`](`Maybe::map`), [`map2`](`maybe::map2`), [`map3`](`maybe::map3`)
//! and [`and_then`](`Maybe::and_then`). Absence and failure propagate through all of them
//! and the functions passed to them are never called once that happens.
//!
//! Methods take the value first. Every module also provides curried forms of `and_then` and `match_with`
//! that return plain functions, for building pipelines without naming the intermediate values.
//!
//! # Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`Maybe`] and [`Outcome`]
//!
//! # Example
//!
//! ```
//! use maybe_outcome::{Maybe, Outcome, maybe, outcome, pipe};
//!
//! fn parse(s: &str) -> Outcome<String, i32> {
//! 	s.parse::<i32>().map_err(|e| format!("{s:?}: {e}")).into()
//! }
//!
//! fn positive(n: i32) -> Outcome<String, i32> {
//! 	if n > 0 { Outcome::ok(n) } else { Outcome::err("non-positive".to_owned()) }
//! }
//!
//! let parse_positive = pipe((parse, outcome::and_then(positive)));
//!
//! assert_eq!(parse_positive("5"), Outcome::ok(5));
//! assert_eq!(parse_positive("-1"), Outcome::err("non-positive".to_owned()));
//! assert!(parse_positive("five").is_err());
//!
//! assert_eq!(maybe::map2(|a, b| a + b, Maybe::Just(2), Maybe::Just(3)), Maybe::Just(5));
//! assert_eq!(parse_positive("0").into_maybe(), Maybe::Nothing);
//! ```

pub mod error;
pub mod interop;
pub mod maybe;
pub mod outcome;

pub use pipe_fn::{Pipeline, compose, pipe};

pub use self::{
	error::NothingError,
	maybe::{Maybe, MaybeArms},
	outcome::{Outcome, OutcomeArms},
};
