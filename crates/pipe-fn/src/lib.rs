/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Left-to-right composition of unary functions.
//!
//! A [`Pipeline`] is a tuple of functions where the output type of each stage is the input type of the next one.
//! The empty tuple is the identity pipeline.
//!
//! # Example
//!
//! ```
//! use pipe_fn::{pipe, Pipeline};
//!
//! let trim_and_count = pipe((str::trim, str::len, |len: usize| len * 2));
//! assert_eq!(trim_and_count("  four  "), 8);
//!
//! // the same thing without an intermediate closure
//! assert_eq!((str::trim, str::len).run(" ab "), 2);
//!
//! // or with the macro, which also accepts any number of stages
//! let add_then_square = pipe_fn::pipe!(|x: i32| x + 1, |x: i32| x * x);
//! assert_eq!(add_then_square(2), 9);
//! ```

/// A chain of unary functions that can be run on an input of type `T`.
///
/// Implemented for `()`, which returns the input unchanged, and for tuples of up to 12 functions
/// where each function accepts the output of the previous one.
pub trait Pipeline<T> {
	/// The type the last stage returns
	type Output;

	/// Runs every stage in order, feeding the output of each one into the next one
	fn run(&self, input: T) -> Self::Output;
}

impl<T> Pipeline<T> for () {
	type Output = T;

	fn run(&self, input: T) -> Self::Output {
		input
	}
}

macro_rules! impl_pipeline_for_tuples {
	($first_input:ident => $($stage:ident: $input:ident -> $output:ident),+; $last_output:ident) => {
		impl<$first_input, $($stage, $output),+> Pipeline<$first_input> for ($($stage,)+)
		where
			$($stage: Fn($input) -> $output),+
		{
			type Output = $last_output;

			fn run(&self, input: $first_input) -> Self::Output {
				// following code expands into something like this
				// let value = input;
				// let value = (self.0)(value);
				// let value = (self.1)(value);
				// value

				#[expect(non_snake_case, reason = "it's fine to re-use the names to make calling the macro easier")]
				let ($($stage,)+) = self;
				let value = input;
				$(let value = $stage(value);)+

				value
			}
		}
	};
}

impl_pipeline_for_tuples!(T => F1: T -> O1; O1);
impl_pipeline_for_tuples!(T => F1: T -> O1, F2: O1 -> O2; O2);
impl_pipeline_for_tuples!(T => F1: T -> O1, F2: O1 -> O2, F3: O2 -> O3; O3);
impl_pipeline_for_tuples!(T => F1: T -> O1, F2: O1 -> O2, F3: O2 -> O3, F4: O3 -> O4; O4);
impl_pipeline_for_tuples!(T => F1: T -> O1, F2: O1 -> O2, F3: O2 -> O3, F4: O3 -> O4, F5: O4 -> O5; O5);
impl_pipeline_for_tuples!(T => F1: T -> O1, F2: O1 -> O2, F3: O2 -> O3, F4: O3 -> O4, F5: O4 -> O5, F6: O5 -> O6; O6);
impl_pipeline_for_tuples!(T => F1: T -> O1, F2: O1 -> O2, F3: O2 -> O3, F4: O3 -> O4, F5: O4 -> O5, F6: O5 -> O6, F7: O6 -> O7; O7);
impl_pipeline_for_tuples!(T => F1: T -> O1, F2: O1 -> O2, F3: O2 -> O3, F4: O3 -> O4, F5: O4 -> O5, F6: O5 -> O6, F7: O6 -> O7, F8: O7 -> O8; O8);
impl_pipeline_for_tuples!(T => F1: T -> O1, F2: O1 -> O2, F3: O2 -> O3, F4: O3 -> O4, F5: O4 -> O5, F6: O5 -> O6, F7: O6 -> O7, F8: O7 -> O8, F9: O8 -> O9; O9);
impl_pipeline_for_tuples!(T => F1: T -> O1, F2: O1 -> O2, F3: O2 -> O3, F4: O3 -> O4, F5: O4 -> O5, F6: O5 -> O6, F7: O6 -> O7, F8: O7 -> O8, F9: O8 -> O9, F10: O9 -> O10; O10);
impl_pipeline_for_tuples!(T => F1: T -> O1, F2: O1 -> O2, F3: O2 -> O3, F4: O3 -> O4, F5: O4 -> O5, F6: O5 -> O6, F7: O6 -> O7, F8: O7 -> O8, F9: O8 -> O9, F10: O9 -> O10, F11: O10 -> O11; O11);
impl_pipeline_for_tuples!(T => F1: T -> O1, F2: O1 -> O2, F3: O2 -> O3, F4: O3 -> O4, F5: O4 -> O5, F6: O5 -> O6, F7: O6 -> O7, F8: O7 -> O8, F9: O8 -> O9, F10: O9 -> O10, F11: O10 -> O11, F12: O11 -> O12; O12);

/// Turns a [`Pipeline`] into a plain function.
///
/// Nothing is called until the returned function is. Every call then runs each stage once, in order.
pub fn pipe<T, P>(stages: P) -> impl Fn(T) -> P::Output
where
	P: Pipeline<T>,
{
	move |input| stages.run(input)
}

/// Composes two functions into one that applies `f` and then `g`
pub fn compose<T, U, V, F, G>(f: F, g: G) -> impl Fn(T) -> V
where
	F: Fn(T) -> U,
	G: Fn(U) -> V,
{
	move |input| g(f(input))
}

/// Composes any number of functions left to right.
///
/// - `pipe!()` is the identity function
/// - `pipe!(f)` is `f` itself, without any wrapping
/// - `pipe!(f, g, h)` is a closure that computes `h(g(f(x)))`
///
/// ```
/// let shout = pipe_fn::pipe!(str::trim, str::to_uppercase, |s: String| s + "!");
/// assert_eq!(shout(" hey "), "HEY!");
///
/// let same = pipe_fn::pipe!();
/// assert_eq!(same(42), 42);
/// ```
#[macro_export]
macro_rules! pipe {
	() => {
		|input| input
	};
	($stage:expr $(,)?) => {
		$stage
	};
	($first:expr, $($rest:expr),+ $(,)?) => {{
		let first = $first;
		let rest = $crate::pipe!($($rest),+);
		move |input| rest(first(input))
	}};
}
