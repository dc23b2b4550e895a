// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// The only status code the signup endpoint uses to report a created account
pub const SIGNUP_SUCCESS_STATUS: u16 = 200;

/// Request data from the client when creating an account
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SignupRequest {
	pub username: String,
	pub password: String,
}

/// Body sent by the server when the account was created
#[derive(Debug, Deserialize, Serialize)]
pub struct SignupSuccessData {
	pub token: String,
}

/// Body sent by the server when the account could not be created
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SignupFailureData {
	#[serde(default)]
	pub message: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SignupPayload {
	Token(String),
	Failure(Option<String>),
}

/// The decoded outcome of a signup call that reached the server
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignupResult {
	pub status: u16,
	pub payload: SignupPayload,
}

impl SignupResult {
	/// Decodes a response body according to its status code.
	///
	/// A success status requires a token in the body. Any other status is a failure; its message is taken from the
	/// body when the body has one, and a body that isn't the expected JSON just means there's no message.
	///
	/// # Errors
	///
	/// Fails only when a success response doesn't carry a token.
	pub fn from_response_body(status: u16, body: &str) -> Result<Self, serde_json::Error> {
		let payload = if status == SIGNUP_SUCCESS_STATUS {
			let data: SignupSuccessData = serde_json::from_str(body)?;
			SignupPayload::Token(data.token)
		} else {
			let data: SignupFailureData = serde_json::from_str(body).unwrap_or_default();
			SignupPayload::Failure(data.message)
		};
		Ok(Self { status, payload })
	}

	/// Gets the token if this result represents a created account
	pub fn token(&self) -> Option<&str> {
		match &self.payload {
			SignupPayload::Token(token) if self.status == SIGNUP_SUCCESS_STATUS => Some(token),
			_ => None,
		}
	}
}
