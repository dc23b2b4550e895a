// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::input_event_value;
use crate::signup::SignupForm;
use signup_shared::validation::Field;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct SignupFieldProps<'a> {
	form: &'a Signal<SignupForm>,
	field: Field,
	input_type: &'static str,
	placeholder: &'static str,
}

/// One input of the signup form with its inline error message
#[component]
pub fn SignupField<'a, G: Html>(ctx: Scope<'a>, props: SignupFieldProps<'a>) -> View<G> {
	let form = props.form;
	let field = props.field;

	let value_signal = create_memo(ctx, move || form.get().value(field).to_string());
	let error_signal = create_memo(ctx, move || form.get().error(field).map(|error| error.to_string()));
	let input_class_signal = create_memo(ctx, || {
		if error_signal.get().is_some() {
			"signup_input input_error"
		} else {
			"signup_input"
		}
	});

	let input_handler = move |event: WebEvent| {
		if let Some(value) = input_event_value(&event) {
			form.modify().update(field, value);
		}
	};

	view! {
		ctx,
		div(class="input_with_message") {
			input(
				type=props.input_type,
				placeholder=props.placeholder,
				class=*input_class_signal.get(),
				prop:value=(*value_signal.get()).clone(),
				on:input=input_handler
			)
			(
				if let Some(error) = (*error_signal.get()).clone() {
					view! {
						ctx,
						span(class="input_error_message") { (error) }
					}
				} else {
					view! { ctx, }
				}
			)
		}
	}
}
