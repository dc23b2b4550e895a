// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Errors that can occur when making the signup call
#[derive(Debug)]
pub enum SignupCallError {
	Request(gloo_net::Error),
	InvalidResponse(serde_json::Error),
}

impl From<gloo_net::Error> for SignupCallError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Request(error)
	}
}

impl From<serde_json::Error> for SignupCallError {
	fn from(error: serde_json::Error) -> Self {
		Self::InvalidResponse(error)
	}
}

impl fmt::Display for SignupCallError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Request(error) => write!(f, "Failed to send signup request: {}", error),
			Self::InvalidResponse(error) => write!(f, "An invalid signup response was received: {}", error),
		}
	}
}

/// Errors that can occur when accessing the persisted token
#[derive(Debug)]
pub enum TokenStoreError {
	Unavailable,
	Access(String),
	Write(String),
}

impl fmt::Display for TokenStoreError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unavailable => write!(f, "Local storage is not available in this browser context"),
			Self::Access(error) => write!(f, "Failed to access local storage: {}", error),
			Self::Write(error) => write!(f, "Failed to write to local storage: {}", error),
		}
	}
}
