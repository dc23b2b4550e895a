// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ClientConfig;
use crate::services::storage::LocalTokenStore;
use crate::services::TokenStore;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;

#[component]
pub fn StartRedirectView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating start page redirect view");

	spawn_local_scoped(ctx, async move {
		let config: &ClientConfig = use_context(ctx);
		let token_store = LocalTokenStore::new(config.token_storage_key.clone());

		match token_store.load_token() {
			Ok(Some(_)) => {
				log::debug!("Redirecting to home");
				navigate(&config.home_route);
			}
			Ok(None) => {
				log::debug!("Redirecting to signup");
				navigate(&config.signup_route);
			}
			Err(error) => {
				log::error!("Failed to read authentication token: {}", error);
				navigate(&config.signup_route);
			}
		}
	});

	view! { ctx, }
}
