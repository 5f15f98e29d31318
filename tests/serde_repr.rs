/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Serialized representation of [`Maybe`] and [`Outcome`] with the `serde` feature enabled

use maybe_outcome::{Maybe, Outcome};
use serde_json::json;

#[test]
fn maybe_is_externally_tagged() -> Result<(), serde_json::Error> {
	assert_eq!(serde_json::to_value(Maybe::Just(1))?, json!({ "Just": 1 }));
	assert_eq!(serde_json::to_value(Maybe::<i32>::Nothing)?, json!("Nothing"));

	let parsed: Maybe<String> = serde_json::from_str(r#"{"Just":"hi"}"#)?;
	assert_eq!(parsed, Maybe::Just("hi".to_owned()));

	let parsed: Maybe<String> = serde_json::from_str(r#""Nothing""#)?;
	assert_eq!(parsed, Maybe::Nothing);

	Ok(())
}

#[test]
fn outcome_is_externally_tagged() -> Result<(), serde_json::Error> {
	assert_eq!(serde_json::to_value(Outcome::<String, u8>::ok(3))?, json!({ "Success": 3 }));
	assert_eq!(serde_json::to_value(Outcome::<&str, u8>::err("bad"))?, json!({ "Failure": "bad" }));

	let parsed: Outcome<String, Vec<u8>> = serde_json::from_str(r#"{"Success":[1,2]}"#)?;
	assert_eq!(parsed, Outcome::ok(vec![1, 2]));

	let parsed: Outcome<String, Vec<u8>> = serde_json::from_str(r#"{"Failure":"timed out"}"#)?;
	assert_eq!(parsed, Outcome::err("timed out".to_owned()));

	Ok(())
}

#[test]
fn failure_survives_round_trip() -> Result<(), serde_json::Error> {
	let original = Outcome::<Vec<String>, u32>::err(vec!["first".to_owned(), "second".to_owned()]);

	let json = serde_json::to_string(&original)?;
	let parsed: Outcome<Vec<String>, u32> = serde_json::from_str(&json)?;
	assert_eq!(parsed, original);

	Ok(())
}

#[test]
fn unknown_variant_is_rejected() {
	assert!(serde_json::from_str::<Maybe<i32>>(r#"{"Some":1}"#).is_err());
	assert!(serde_json::from_str::<Outcome<String, i32>>(r#"{"Ok":1}"#).is_err());
}
