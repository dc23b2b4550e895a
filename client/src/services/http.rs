// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::SignupApi;
use crate::error::SignupCallError;
use gloo_net::http::Request;
use signup_shared::messages::signup::{SignupRequest, SignupResult};

/// Makes the signup call as a JSON POST to the server
pub struct HttpSignupApi {
	endpoint: String,
}

impl HttpSignupApi {
	pub fn new(endpoint: String) -> Self {
		Self { endpoint }
	}
}

impl SignupApi for HttpSignupApi {
	async fn sign_up(&self, request: &SignupRequest) -> Result<SignupResult, SignupCallError> {
		log::debug!("Sending signup request to {}", self.endpoint);
		let response = Request::post(&self.endpoint).json(request)?.send().await?;
		let status = response.status();
		let body = response.text().await?;
		log::debug!("Received signup response with status {}", status);
		Ok(SignupResult::from_response_body(status, &body)?)
	}
}
