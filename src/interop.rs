/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Conversions between [`Maybe`], [`Outcome`] and the std and [`either`] types the rest of a program uses

use either::Either;

use crate::{maybe::Maybe, outcome::Outcome};

impl<A> From<Option<A>> for Maybe<A> {
	fn from(value: Option<A>) -> Self {
		match value {
			Some(value) => Maybe::Just(value),
			None => Maybe::Nothing,
		}
	}
}

impl<A> From<Maybe<A>> for Option<A> {
	fn from(value: Maybe<A>) -> Self {
		match value {
			Maybe::Just(value) => Some(value),
			Maybe::Nothing => None,
		}
	}
}

impl<A> IntoIterator for Maybe<A> {
	type Item = A;
	type IntoIter = std::option::IntoIter<A>;

	fn into_iter(self) -> Self::IntoIter {
		Option::from(self).into_iter()
	}
}

impl<E, V> From<Result<V, E>> for Outcome<E, V> {
	fn from(value: Result<V, E>) -> Self {
		match value {
			Ok(value) => Outcome::Success(value),
			Err(error) => Outcome::Failure(error),
		}
	}
}

impl<E, V> From<Outcome<E, V>> for Result<V, E> {
	fn from(value: Outcome<E, V>) -> Self {
		value.into_result()
	}
}

// Left is the error, the same way `Either<L, R>: From<Result<R, L>>` does it
impl<E, V> From<Either<E, V>> for Outcome<E, V> {
	fn from(value: Either<E, V>) -> Self {
		match value {
			Either::Left(error) => Outcome::Failure(error),
			Either::Right(value) => Outcome::Success(value),
		}
	}
}

impl<E, V> Outcome<E, V> {
	/// Converts into a std [`Result`] to be able to use `?` on it
	#[expect(clippy::missing_errors_doc, reason = "it's just a conversion")]
	pub fn into_result(self) -> Result<V, E> {
		self.either(Ok, Err)
	}

	/// Converts into an [`Either`] with the error on the left and the value on the right
	pub fn into_either(self) -> Either<E, V> {
		self.either(Either::Right, Either::Left)
	}
}
