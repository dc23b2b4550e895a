// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use signup_shared::messages::signup::SignupRequest;
use signup_shared::validation::{validate_signup, Field, FieldError, FieldErrors};

/// Field values and errors of the signup form as the user edits it
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SignupForm {
	email: String,
	password: String,
	confirm_password: String,
	errors: FieldErrors,
}

impl SignupForm {
	pub fn value(&self, field: Field) -> &str {
		match field {
			Field::Email => &self.email,
			Field::Password => &self.password,
			Field::ConfirmPassword => &self.confirm_password,
		}
	}

	pub fn error(&self, field: Field) -> Option<FieldError> {
		self.errors.get(field)
	}

	/// Sets a field's value. Filling a field in clears its error; other fields' errors stay until those fields are
	/// edited.
	pub fn update(&mut self, field: Field, value: String) {
		if !value.is_empty() {
			self.errors.clear(field);
		}
		match field {
			Field::Email => self.email = value,
			Field::Password => self.password = value,
			Field::ConfirmPassword => self.confirm_password = value,
		}
	}

	/// Runs a full validation pass, replacing all field errors with its results.
	///
	/// # Errors
	///
	/// Returns the errors found when any field is invalid.
	pub fn validate(&mut self) -> Result<SignupRequest, FieldErrors> {
		self.errors = validate_signup(&self.email, &self.password, &self.confirm_password);
		if !self.errors.is_empty() {
			return Err(self.errors.clone());
		}
		Ok(SignupRequest {
			username: self.email.clone(),
			password: self.password.clone(),
		})
	}
}
