// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::toasts::{ToastDisplay, Toasts};
use crate::config::ClientConfig;
use crate::pages::home::HomeView;
use crate::pages::login::LoginView;
use crate::pages::not_found::NotFoundView;
use crate::pages::signup::SignupView;
use crate::pages::start_redirect::StartRedirectView;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

#[derive(Route)]
pub enum AppRoutes {
	#[to("/")]
	Index,
	#[to("/signup")]
	Signup,
	#[to("/login")]
	Login,
	#[to("/home")]
	Home,
	#[not_found]
	NotFound,
}

#[component]
pub fn App<G: Html>(ctx: Scope<'_>) -> View<G> {
	let config = ClientConfig::for_current_location();
	let toasts = Toasts::new(config.toast_lifetime_ms);
	provide_context(ctx, config);
	provide_context(ctx, toasts);

	view! {
		ctx,
		ToastDisplay {}
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoutes>| {
				view! {
					ctx,
					(match route.get().as_ref() {
						AppRoutes::Index => view! { ctx, StartRedirectView {} },
						AppRoutes::Signup => view! { ctx, SignupView {} },
						AppRoutes::Login => view! { ctx, LoginView {} },
						AppRoutes::Home => view! { ctx, HomeView {} },
						AppRoutes::NotFound => view! { ctx, NotFoundView {} },
					})
				}
			}
		)
	}
}
