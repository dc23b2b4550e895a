// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ClientConfig;
use crate::dom::set_page_title;
use crate::services::storage::LocalTokenStore;
use crate::services::TokenStore;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;

#[component]
pub fn HomeView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating home view");
	set_page_title("Home");

	let config: &ClientConfig = use_context(ctx);
	let token_store = LocalTokenStore::new(config.token_storage_key.clone());
	let signed_in = match token_store.load_token() {
		Ok(token) => token.is_some(),
		Err(error) => {
			log::error!("Failed to read authentication token: {}", error);
			false
		}
	};

	if !signed_in {
		spawn_local_scoped(ctx, async move {
			log::debug!("No authentication token; redirecting to login");
			navigate(&config.login_route);
		});
		return view! { ctx, };
	}

	view! {
		ctx,
		div(id="home") {
			h1 { "Welcome!" }
			p { "Your account has been created and you're signed in." }
		}
	}
}
