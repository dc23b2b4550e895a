// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ClientConfig;
use crate::dom::set_page_title;
use sycamore::prelude::*;

/// Stands in for the login page, which is served by its own component
#[component]
pub fn LoginView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating login view");
	set_page_title("Log In");

	let config: &ClientConfig = use_context(ctx);
	let signup_route = config.signup_route.clone();

	view! {
		ctx,
		div(id="login") {
			h1 { "Log In" }
			p { "Logging in isn't available from this page yet." }
			p {
				a(href=signup_route) { "Need an account? Sign up" }
			}
		}
	}
}
