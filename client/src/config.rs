// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use web_sys::Url;

const SIGNUP_API_PATH: &str = "api/signup";

/// Settings shared by the views, provided through the root context
#[derive(Clone, Debug)]
pub struct ClientConfig {
	pub signup_endpoint: String,
	pub token_storage_key: String,
	pub signup_route: String,
	pub home_route: String,
	pub login_route: String,
	pub toast_lifetime_ms: u32,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			signup_endpoint: format!("/{}", SIGNUP_API_PATH),
			token_storage_key: String::from("token"),
			signup_route: String::from("/signup"),
			home_route: String::from("/home"),
			login_route: String::from("/login"),
			toast_lifetime_ms: 5000,
		}
	}
}

impl ClientConfig {
	/// Builds the configuration for the page the application is loaded on. The signup endpoint is placed relative to
	/// the application's base path so the client works at any URL structure at which it could be hosted.
	pub fn for_current_location() -> Self {
		let mut config = Self::default();
		match signup_endpoint() {
			Some(endpoint) => config.signup_endpoint = endpoint,
			None => log::warn!(
				"Unable to read the page location; using {} as the signup endpoint",
				config.signup_endpoint
			),
		}
		config
	}
}

fn signup_endpoint() -> Option<String> {
	let location = web_sys::window()?.location();
	let href = location.href().ok()?;
	let url = Url::new(&href).ok()?;
	url.set_search(""); // Query string and fragment don't belong on the API call
	url.set_hash("");
	url.set_pathname(&api_path(&base_path(&url.pathname())));
	Some(url.to_string().into())
}

/// Gets the path the application is mounted at from a path of one of its routes
fn base_path(page_path: &str) -> String {
	let trimmed = page_path.trim_end_matches('/');
	for route in ["/signup", "/login", "/home"] {
		if let Some(base) = trimmed.strip_suffix(route) {
			return base.to_string();
		}
	}
	trimmed.to_string()
}

fn api_path(base_path: &str) -> String {
	format!("{}/{}", base_path.trim_end_matches('/'), SIGNUP_API_PATH)
}
