/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`Outcome`], the result of a computation that may fail, and the functions that combine [`Outcome`]'s.
//!
//! Every combinator propagates the first [`Outcome::Failure`] it sees and skips everything that comes after it

use tap::{TapFallible, TapOptional};

use crate::maybe::Maybe;

/// Either a successful value of type `V` or an error of type `E`.
///
/// The error type goes first to match how the type is usually spelled out when talking about it: "an outcome that fails with `E` or succeeds with `V`"
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Outcome<E, V> {
	/// The computation succeeded
	Success(V),

	/// The computation failed
	Failure(E),
}

/// The handlers for both [`Outcome`] variants, see [`Outcome::match_with`]
#[derive(Clone, Copy, Debug)]
pub struct OutcomeArms<O, X> {
	/// Called with the value of a [`Outcome::Success`]
	pub ok: O,

	/// Called with the error of a [`Outcome::Failure`]
	pub err: X,
}

impl<E, V> Outcome<E, V> {
	/// Creates an [`Outcome::Success`]
	#[must_use]
	pub const fn ok(value: V) -> Self {
		Self::Success(value)
	}

	/// Creates an [`Outcome::Failure`]
	#[must_use]
	pub const fn err(error: E) -> Self {
		Self::Failure(error)
	}

	/// Calls exactly one of the `arms` depending on the variant and returns whatever it returns
	pub fn match_with<R, O, X>(self, arms: OutcomeArms<O, X>) -> R
	where
		O: FnOnce(V) -> R,
		X: FnOnce(E) -> R,
	{
		let OutcomeArms { ok, err } = arms;
		self.either(ok, err)
	}

	/// Folds the outcome into a single value with `on_ok` or `on_err`.
	///
	/// Same as [`Outcome::match_with`] but without naming the arms
	pub fn either<R, O, X>(self, on_ok: O, on_err: X) -> R
	where
		O: FnOnce(V) -> R,
		X: FnOnce(E) -> R,
	{
		match self {
			Outcome::Success(value) => on_ok(value),
			Outcome::Failure(error) => on_err(error),
		}
	}

	/// Returns `true` if this is an [`Outcome::Success`]
	#[must_use]
	pub const fn is_ok(&self) -> bool {
		matches!(self, Outcome::Success(_))
	}

	/// Returns `true` if this is an [`Outcome::Failure`]
	#[must_use]
	pub const fn is_err(&self) -> bool {
		!self.is_ok()
	}

	/// Converts from `&Outcome<E, V>` to `Outcome<&E, &V>`
	#[must_use]
	pub const fn as_ref(&self) -> Outcome<&E, &V> {
		match self {
			Outcome::Success(value) => Outcome::Success(value),
			Outcome::Failure(error) => Outcome::Failure(error),
		}
	}

	/// Returns the value or `default` if this is a failure. The error is dropped
	pub fn with_default(self, default: V) -> V {
		self.either(|value| value, |_| default)
	}

	/// Returns the value or computes one from the error with `f`
	pub fn with_default_else<F>(self, f: F) -> V
	where
		F: FnOnce(E) -> V,
	{
		self.either(|value| value, f)
	}

	/// Applies `f` to the value if this is a success.
	///
	/// A failure is returned as is and `f` isn't called
	pub fn map<U, F>(self, f: F) -> Outcome<E, U>
	where
		F: FnOnce(V) -> U,
	{
		match self {
			Outcome::Success(value) => Outcome::Success(f(value)),
			Outcome::Failure(error) => Outcome::Failure(error),
		}
	}

	/// Applies `f` to the error if this is a failure. Useful for converting between error types
	pub fn map_err<X, F>(self, f: F) -> Outcome<X, V>
	where
		F: FnOnce(E) -> X,
	{
		match self {
			Outcome::Success(value) => Outcome::Success(value),
			Outcome::Failure(error) => Outcome::Failure(f(error)),
		}
	}

	/// Transforms both the error and the value types at once.
	///
	/// Only one of the functions is ever called, depending on the variant
	pub fn map_both<X, U, FE, FV>(self, map_err: FE, map_ok: FV) -> Outcome<X, U>
	where
		FE: FnOnce(E) -> X,
		FV: FnOnce(V) -> U,
	{
		self.either(|value| Outcome::Success(map_ok(value)), |error| Outcome::Failure(map_err(error)))
	}

	/// Chains a computation that may fail.
	///
	/// On success returns whatever `f` returns for the value, on failure propagates the original error without calling `f`
	pub fn and_then<U, F>(self, f: F) -> Outcome<E, U>
	where
		F: FnOnce(V) -> Outcome<E, U>,
	{
		match self {
			Outcome::Success(value) => f(value),
			Outcome::Failure(error) => Outcome::Failure(error),
		}
	}

	/// Converts into a [`Maybe`], dropping the error.
	///
	/// Useful when the reason of the failure isn't needed or when interacting with code that uses [`Maybe`]'s
	pub fn into_maybe(self) -> Maybe<V> {
		self.into_result()
			.tap_err(|_| tracing::trace!("Dropping the error of a failed outcome while converting it into a Maybe"))
			.ok()
			.into()
	}

	/// Returns the error if this is a failure
	pub fn failure(self) -> Maybe<E> {
		self.either(|_| Maybe::Nothing, Maybe::Just)
	}

	/// Converts a [`Maybe`] into an [`Outcome`].
	///
	/// A [`Maybe`] doesn't carry an error, so `default_error` is used if it's [`Maybe::Nothing`]
	pub fn from_maybe(default_error: E, maybe: Maybe<V>) -> Self {
		Option::<V>::from(maybe)
			.tap_none(|| tracing::trace!("Using the default error for a Maybe without a value"))
			.ok_or(default_error)
			.into()
	}
}

/// Applies `f` to the values of `a` and `b` if both succeeded.
///
/// The arguments are checked left to right and the first failure is returned without calling `f`
pub fn map2<E, A, B, V, F>(f: F, a: Outcome<E, A>, b: Outcome<E, B>) -> Outcome<E, V>
where
	F: FnOnce(A, B) -> V,
{
	a.and_then(|a| b.map(|b| f(a, b)))
}

/// Applies `f` to the values of `a`, `b`, and `c` if all of them succeeded.
///
/// See [`map2`]
pub fn map3<E, A, B, C, V, F>(f: F, a: Outcome<E, A>, b: Outcome<E, B>, c: Outcome<E, C>) -> Outcome<E, V>
where
	F: FnOnce(A, B, C) -> V,
{
	a.and_then(|a| b.and_then(|b| c.map(|c| f(a, b, c))))
}

/// Curried [`Outcome::and_then`], for chaining computations that may fail inside of a [`pipe`](`crate::pipe`)
pub fn and_then<E, V, U, F>(f: F) -> impl Fn(Outcome<E, V>) -> Outcome<E, U>
where
	F: Fn(V) -> Outcome<E, U>,
{
	move |outcome| outcome.and_then(&f)
}

/// Curried [`Outcome::match_with`].
///
/// Separates the behavior from the data: the arms are defined once and can be applied to any number of outcomes
///
/// ```
/// use maybe_outcome::{Outcome, OutcomeArms, outcome};
///
/// let report = outcome::matcher(OutcomeArms {
/// 	ok: |n: u8| format!("ok: {n}"),
/// 	err: |e: &str| format!("failed: {e}"),
/// });
///
/// assert_eq!(report(Outcome::ok(1)), "ok: 1");
/// assert_eq!(report(Outcome::err("timeout")), "failed: timeout");
/// ```
pub fn matcher<E, V, R, O, X>(arms: OutcomeArms<O, X>) -> impl Fn(Outcome<E, V>) -> R
where
	O: Fn(V) -> R,
	X: Fn(E) -> R,
{
	move |outcome| outcome.either(&arms.ok, &arms.err)
}
