/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`NothingError`], the error used when a [`Maybe`](`crate::Maybe`) has to become an [`Outcome`](`crate::Outcome`)
//! and the caller didn't provide an error of their own

/// A value was expected but [`Maybe::Nothing`](`crate::Maybe::Nothing`) was found
#[derive(thiserror::Error, Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[error("expected a value but found nothing")]
pub struct NothingError;
