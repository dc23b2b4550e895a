// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::Navigator;

/// Navigates through the application router
#[derive(Clone, Copy, Default)]
pub struct RouterNavigator;

impl Navigator for RouterNavigator {
	fn navigate(&self, path: &str) {
		log::debug!("Navigating to {}", path);
		sycamore_router::navigate(path);
	}
}
