// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interfaces to the browser-side collaborators the signup flow depends on, and their browser implementations.

use crate::error::{SignupCallError, TokenStoreError};
use signup_shared::messages::signup::{SignupRequest, SignupResult};

pub mod http;
pub mod routing;
pub mod storage;

/// Exchanges credentials for an authentication token
#[allow(async_fn_in_trait)]
pub trait SignupApi {
	async fn sign_up(&self, request: &SignupRequest) -> Result<SignupResult, SignupCallError>;
}

/// Persists the authentication token between page loads
pub trait TokenStore {
	fn store_token(&self, token: &str) -> Result<(), TokenStoreError>;
	fn load_token(&self) -> Result<Option<String>, TokenStoreError>;
}

/// Shows transient messages to the user
pub trait Notifier {
	fn success(&self, message: &str);
	fn error(&self, message: &str);
}

pub trait Navigator {
	fn navigate(&self, path: &str);
}
