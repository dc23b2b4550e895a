// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::signup_field::SignupField;
use crate::components::toasts::Toasts;
use crate::config::ClientConfig;
use crate::dom::set_page_title;
use crate::services::http::HttpSignupApi;
use crate::services::routing::RouterNavigator;
use crate::services::storage::LocalTokenStore;
use crate::services::Navigator;
use crate::signup::{SignupFlow, SignupForm, SubmitOutcome};
use signup_shared::validation::Field;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn SignupView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating signup view");
	set_page_title("Sign Up");

	let config: &ClientConfig = use_context(ctx);
	let toasts: &Toasts = use_context(ctx);

	let flow = create_ref(
		ctx,
		SignupFlow::new(
			HttpSignupApi::new(config.signup_endpoint.clone()),
			LocalTokenStore::new(config.token_storage_key.clone()),
			toasts.clone(),
			RouterNavigator,
			config.home_route.clone(),
		),
	);
	let form_signal = create_signal(ctx, SignupForm::default());
	let pending_signal = create_signal(ctx, false);

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let submission = match flow.begin(&mut form_signal.modify()) {
			Ok(submission) => submission,
			Err(_) => return,
		};
		pending_signal.set(true);

		spawn_local_scoped(ctx, async move {
			let outcome = flow.complete(submission).await;
			// On success, navigation has already replaced this view.
			if outcome != SubmitOutcome::SignedUp {
				pending_signal.set(flow.is_pending());
			}
		});
	};

	let login_click_handler = move |event: WebEvent| {
		event.prevent_default();
		RouterNavigator.navigate(&config.login_route);
	};

	view! {
		ctx,
		main(id="signup") {
			div(class="signup_panel") {
				h2 { "Sign Up" }
				form(id="signup_form", on:submit=form_submission_handler) {
					SignupField(form=form_signal, field=Field::Email, input_type="email", placeholder="Email")
					SignupField(form=form_signal, field=Field::Password, input_type="password", placeholder="Password")
					SignupField(form=form_signal, field=Field::ConfirmPassword, input_type="password", placeholder="Confirm Password")
					button(type="submit", disabled=*pending_signal.get()) {
						(if *pending_signal.get() { "Creating Account..." } else { "Create Account" })
					}
					h3(class="signup_login_prompt") {
						"Already have an account? "
						a(class="click", href=config.login_route.clone(), on:click=login_click_handler) { "Login" }
					}
				}
			}
		}
	}
}
