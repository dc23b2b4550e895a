// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::services::Notifier;
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use sycamore::futures::spawn_local;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToastKind {
	Success,
	Error,
}

impl ToastKind {
	fn class(&self) -> &'static str {
		match self {
			Self::Success => "toast toast_success",
			Self::Error => "toast toast_error",
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toast {
	pub id: u64,
	pub kind: ToastKind,
	pub message: String,
}

/// The list of notifications currently on screen.
///
/// Cloning gives another handle to the same list, so a handle can be given to anything that needs to notify the user.
#[derive(Clone)]
pub struct Toasts {
	entries: RcSignal<Vec<Toast>>,
	next_id: Rc<Cell<u64>>,
	lifetime_ms: u32,
}

impl Toasts {
	pub fn new(lifetime_ms: u32) -> Self {
		Self {
			entries: create_rc_signal(Vec::new()),
			next_id: Rc::new(Cell::new(0)),
			lifetime_ms,
		}
	}

	pub fn entries(&self) -> &RcSignal<Vec<Toast>> {
		&self.entries
	}

	/// Adds a toast to the end of the list and returns its ID
	pub fn push(&self, kind: ToastKind, message: &str) -> u64 {
		let id = self.next_id.get();
		self.next_id.set(id + 1);
		self.entries.modify().push(Toast {
			id,
			kind,
			message: message.to_string(),
		});
		id
	}

	pub fn dismiss(&self, id: u64) {
		let mut entries = self.entries.modify();
		if let Some(index) = entries.iter().position(|toast| toast.id == id) {
			entries.remove(index);
		}
	}

	fn show(&self, kind: ToastKind, message: &str) {
		let id = self.push(kind, message);
		let toasts = self.clone();
		spawn_local(async move {
			TimeoutFuture::new(toasts.lifetime_ms).await;
			toasts.dismiss(id);
		});
	}
}

impl Notifier for Toasts {
	fn success(&self, message: &str) {
		log::info!("{}", message);
		self.show(ToastKind::Success, message);
	}

	fn error(&self, message: &str) {
		log::warn!("{}", message);
		self.show(ToastKind::Error, message);
	}
}

#[component]
pub fn ToastDisplay<G: Html>(ctx: Scope<'_>) -> View<G> {
	let toasts: &Toasts = use_context(ctx);
	let entries = create_memo(ctx, || (*toasts.entries().get()).clone());

	view! {
		ctx,
		ul(id="toasts") {
			Keyed(
				iterable=entries,
				view=|ctx, toast| {
					let dismiss_handler = move |_event: WebEvent| {
						let toasts: &Toasts = use_context(ctx);
						toasts.dismiss(toast.id);
					};
					view! {
						ctx,
						li(class=toast.kind.class(), on:click=dismiss_handler) {
							(toast.message)
						}
					}
				},
				key=|toast| toast.id
			)
		}
	}
}
