/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`Maybe`], a value that may be absent, and the functions that combine [`Maybe`]'s:
//! - [`map2`] and [`map3`] to apply a function only if every argument is present
//! - [`and_then`] and [`matcher`], the curried forms of [`Maybe::and_then`] and [`Maybe::match_with`]

use tap::TapOptional;

use crate::{error::NothingError, outcome::Outcome};

/// A value of type `A` that may be absent
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub enum Maybe<A> {
	/// The value is present
	Just(A),

	/// There's no value
	#[default]
	Nothing,
}

/// The handlers for both [`Maybe`] variants, see [`Maybe::match_with`]
#[derive(Clone, Copy, Debug)]
pub struct MaybeArms<J, N> {
	/// Called with the contained value if it's present
	pub just: J,

	/// Called without arguments if there's no value
	pub nothing: N,
}

impl<A> Maybe<A> {
	/// Creates a [`Maybe::Just`] containing `value`
	#[must_use]
	pub const fn just(value: A) -> Self {
		Self::Just(value)
	}

	/// Creates a [`Maybe::Nothing`]
	#[must_use]
	pub const fn nothing() -> Self {
		Self::Nothing
	}

	/// Calls exactly one of the `arms` depending on the variant and returns whatever it returns.
	///
	/// ```
	/// use maybe_outcome::{Maybe, MaybeArms};
	///
	/// let describe = |m: Maybe<u32>| {
	/// 	m.match_with(MaybeArms {
	/// 		just: |n| format!("got {n}"),
	/// 		nothing: || "got nothing".to_owned(),
	/// 	})
	/// };
	///
	/// assert_eq!(describe(Maybe::Just(3)), "got 3");
	/// assert_eq!(describe(Maybe::Nothing), "got nothing");
	/// ```
	pub fn match_with<R, J, N>(self, arms: MaybeArms<J, N>) -> R
	where
		J: FnOnce(A) -> R,
		N: FnOnce() -> R,
	{
		let MaybeArms { just, nothing } = arms;

		match self {
			Maybe::Just(value) => just(value),
			Maybe::Nothing => nothing(),
		}
	}

	/// Returns `true` if the value is present
	#[must_use]
	pub const fn is_just(&self) -> bool {
		matches!(self, Maybe::Just(_))
	}

	/// Returns `true` if there's no value
	#[must_use]
	pub const fn is_nothing(&self) -> bool {
		!self.is_just()
	}

	/// Converts from `&Maybe<A>` to `Maybe<&A>`
	#[must_use]
	pub const fn as_ref(&self) -> Maybe<&A> {
		match self {
			Maybe::Just(value) => Maybe::Just(value),
			Maybe::Nothing => Maybe::Nothing,
		}
	}

	/// Returns the contained value or `default` if there's none
	pub fn with_default(self, default: A) -> A {
		self.match_with(MaybeArms {
			just: |value| value,
			nothing: || default,
		})
	}

	/// Returns the contained value or computes one with `f` if there's none
	pub fn with_default_else<F>(self, f: F) -> A
	where
		F: FnOnce() -> A,
	{
		match self {
			Maybe::Just(value) => value,
			Maybe::Nothing => f(),
		}
	}

	/// Applies `f` to the contained value, if there's one.
	///
	/// `f` is never called on [`Maybe::Nothing`]
	pub fn map<B, F>(self, f: F) -> Maybe<B>
	where
		F: FnOnce(A) -> B,
	{
		match self {
			Maybe::Just(value) => Maybe::Just(f(value)),
			Maybe::Nothing => Maybe::Nothing,
		}
	}

	/// Chains a computation that may itself produce nothing.
	///
	/// If the value is present, returns whatever `f` returns for it. Otherwise propagates [`Maybe::Nothing`] without calling `f`
	pub fn and_then<B, F>(self, f: F) -> Maybe<B>
	where
		F: FnOnce(A) -> Maybe<B>,
	{
		match self {
			Maybe::Just(value) => f(value),
			Maybe::Nothing => Maybe::Nothing,
		}
	}

	/// Converts into an [`Outcome`], using `default_error` as the failure if there's no value.
	///
	/// Same as [`Outcome::from_maybe`]
	pub fn into_outcome<E>(self, default_error: E) -> Outcome<E, A> {
		Outcome::from_maybe(default_error, self)
	}

	/// Converts into an [`Outcome`] that fails with [`NothingError`] if there's no value
	pub fn ok_or_nothing(self) -> Outcome<NothingError, A> {
		Option::<A>::from(self)
			.tap_none(|| tracing::trace!("Found nothing where a value was expected"))
			.ok_or(NothingError)
			.into()
	}
}

/// Applies `f` to the values of `a` and `b` if both are present.
///
/// The arguments are checked left to right and the first [`Maybe::Nothing`] is returned without calling `f`
pub fn map2<A, B, V, F>(f: F, a: Maybe<A>, b: Maybe<B>) -> Maybe<V>
where
	F: FnOnce(A, B) -> V,
{
	a.and_then(|a| b.map(|b| f(a, b)))
}

/// Applies `f` to the values of `a`, `b`, and `c` if all of them are present.
///
/// See [`map2`]
pub fn map3<A, B, C, V, F>(f: F, a: Maybe<A>, b: Maybe<B>, c: Maybe<C>) -> Maybe<V>
where
	F: FnOnce(A, B, C) -> V,
{
	a.and_then(|a| b.and_then(|b| c.map(|c| f(a, b, c))))
}

/// Curried [`Maybe::and_then`].
///
/// Returns a function that can be used in a [`pipe`](`crate::pipe`) to chain several computations that may produce nothing
pub fn and_then<A, B, F>(f: F) -> impl Fn(Maybe<A>) -> Maybe<B>
where
	F: Fn(A) -> Maybe<B>,
{
	move |maybe| maybe.and_then(&f)
}

/// Curried [`Maybe::match_with`].
///
/// The arms are defined once and the returned function may be called on any number of [`Maybe`]'s
pub fn matcher<A, R, J, N>(arms: MaybeArms<J, N>) -> impl Fn(Maybe<A>) -> R
where
	J: Fn(A) -> R,
	N: Fn() -> R,
{
	move |maybe| match maybe {
		Maybe::Just(value) => (arms.just)(value),
		Maybe::Nothing => (arms.nothing)(),
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use assert_matches::assert_matches;

	use super::*;

	fn positive(n: i32) -> Maybe<i32> {
		if n > 0 { Maybe::Just(n) } else { Maybe::Nothing }
	}

	#[test]
	fn constructors() {
		assert_eq!(Maybe::just(1), Maybe::Just(1));
		assert_eq!(Maybe::<i32>::nothing(), Maybe::Nothing);
		assert_eq!(Maybe::<i32>::default(), Maybe::Nothing);
	}

	fn counting_arms<'a>(
		just_calls: &'a Cell<u32>,
		nothing_calls: &'a Cell<u32>,
	) -> MaybeArms<impl FnOnce(i32) -> i32 + 'a, impl FnOnce() -> i32 + 'a> {
		MaybeArms {
			just: move |n| {
				just_calls.set(just_calls.get() + 1);
				n
			},
			nothing: move || {
				nothing_calls.set(nothing_calls.get() + 1);
				-1
			},
		}
	}

	#[test]
	fn match_with_calls_only_one_arm() {
		let just_calls = Cell::new(0);
		let nothing_calls = Cell::new(0);

		assert_eq!(Maybe::Just(5).match_with(counting_arms(&just_calls, &nothing_calls)), 5);
		assert_eq!((just_calls.get(), nothing_calls.get()), (1, 0));

		assert_eq!(Maybe::Nothing.match_with(counting_arms(&just_calls, &nothing_calls)), -1);
		assert_eq!((just_calls.get(), nothing_calls.get()), (1, 1));
	}

	#[test]
	fn matcher_is_reusable() {
		let describe = matcher(MaybeArms {
			just: |n: i32| n.to_string(),
			nothing: || "none".to_owned(),
		});

		assert_eq!(describe(Maybe::Just(1)), "1");
		assert_eq!(describe(Maybe::Nothing), "none");
		assert_eq!(describe(Maybe::Just(2)), "2");
	}

	#[test]
	fn with_default() {
		assert_eq!(Maybe::Just(1).with_default(0), 1);
		assert_eq!(Maybe::Nothing.with_default(0), 0);
		assert_eq!(Maybe::Nothing.with_default_else(|| 7), 7);
	}

	#[test]
	fn map_skips_nothing() {
		let called = Cell::new(false);
		let mapped = Maybe::<i32>::Nothing.map(|n| {
			called.set(true);
			n + 1
		});

		assert_eq!(mapped, Maybe::Nothing);
		assert!(!called.get());
		assert_eq!(Maybe::Just(1).map(|n| n + 1), Maybe::Just(2));
	}

	#[test]
	fn map2_adds_present_values() {
		assert_eq!(map2(|a, b| a + b, Maybe::Just(2), Maybe::Just(3)), Maybe::Just(5));
		assert_eq!(map2(|a: i32, b: i32| a + b, Maybe::Just(2), Maybe::Nothing), Maybe::Nothing);
	}

	#[test]
	fn map2_and_map3_never_call_f_on_nothing() {
		let called = Cell::new(false);
		let add = |a: i32, b: i32| {
			called.set(true);
			a + b
		};

		assert_eq!(map2(add, Maybe::Nothing, Maybe::Just(5)), Maybe::Nothing);
		assert_eq!(map2(add, Maybe::Just(5), Maybe::Nothing), Maybe::Nothing);
		assert_eq!(
			map3(|a: i32, b: i32, c: i32| add(a, b) + c, Maybe::Just(1), Maybe::Just(2), Maybe::Nothing),
			Maybe::Nothing
		);
		assert!(!called.get());

		assert_eq!(
			map3(|a, b: &str, c: bool| format!("{a}{b}{c}"), Maybe::Just(1), Maybe::Just("x"), Maybe::Just(true)),
			Maybe::Just("1xtrue".to_owned())
		);
	}

	#[test]
	fn and_then_flattens() {
		assert_eq!(Maybe::Just(3).and_then(positive), Maybe::Just(3));
		assert_eq!(Maybe::Just(-3).and_then(positive), Maybe::Nothing);
		assert_eq!(Maybe::Nothing.and_then(positive), Maybe::Nothing);

		let curried = and_then(positive);
		assert_eq!(curried(Maybe::Just(4)), Maybe::Just(4));
		assert_eq!(curried(Maybe::Just(0)), Maybe::Nothing);
	}

	#[test]
	fn ordering_follows_declaration() {
		assert!(Maybe::Just(1) < Maybe::Just(2));
		assert!(Maybe::Just(i32::MAX) < Maybe::Nothing);
		assert_eq!(Maybe::<i32>::Nothing.cmp(&Maybe::Nothing), std::cmp::Ordering::Equal);

		let mut sorted = [Maybe::Nothing, Maybe::Just(3), Maybe::Just(-1)];
		sorted.sort();
		assert_eq!(sorted, [Maybe::Just(-1), Maybe::Just(3), Maybe::Nothing]);
	}

	#[test]
	fn predicates_and_as_ref() {
		let just = Maybe::Just(String::from("a"));

		assert!(just.is_just());
		assert!(Maybe::<()>::Nothing.is_nothing());
		assert_eq!(just.as_ref().map(String::len), Maybe::Just(1));
		// still usable, as_ref only borrowed it
		assert_eq!(just, Maybe::Just("a".to_owned()));
	}

	#[test]
	fn into_outcome() {
		assert_matches!(Maybe::Just(1).into_outcome("missing"), Outcome::Success(1));
		assert_matches!(Maybe::<i32>::Nothing.into_outcome("missing"), Outcome::Failure("missing"));
		assert_matches!(Maybe::<i32>::Nothing.ok_or_nothing(), Outcome::Failure(NothingError));
		assert_matches!(Maybe::Just(1).ok_or_nothing(), Outcome::Success(1));
	}
}
