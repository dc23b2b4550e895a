// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::TokenStore;
use crate::error::TokenStoreError;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Keeps the token in the browser's local storage under a fixed key
pub struct LocalTokenStore {
	key: String,
}

impl LocalTokenStore {
	pub fn new(key: String) -> Self {
		Self { key }
	}
}

impl TokenStore for LocalTokenStore {
	fn store_token(&self, token: &str) -> Result<(), TokenStoreError> {
		local_storage()?
			.set_item(&self.key, token)
			.map_err(|error| TokenStoreError::Write(js_error_text(&error)))
	}

	fn load_token(&self) -> Result<Option<String>, TokenStoreError> {
		local_storage()?
			.get_item(&self.key)
			.map_err(|error| TokenStoreError::Access(js_error_text(&error)))
	}
}

fn local_storage() -> Result<Storage, TokenStoreError> {
	let window = web_sys::window().ok_or(TokenStoreError::Unavailable)?;
	match window.local_storage() {
		Ok(Some(storage)) => Ok(storage),
		Ok(None) => Err(TokenStoreError::Unavailable),
		Err(error) => Err(TokenStoreError::Access(js_error_text(&error))),
	}
}

fn js_error_text(error: &JsValue) -> String {
	error.as_string().unwrap_or_else(|| format!("{:?}", error))
}
