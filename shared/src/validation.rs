// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// The input fields of the signup form, in display order
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
	Email,
	Password,
	ConfirmPassword,
}

impl Field {
	pub const ALL: [Field; 3] = [Field::Email, Field::Password, Field::ConfirmPassword];
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldError {
	Empty,
	PasswordMismatch,
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty => write!(f, "Can't be empty"),
			Self::PasswordMismatch => write!(f, "Passwords do not match"),
		}
	}
}

/// Holds at most one error for each field
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldErrors {
	email: Option<FieldError>,
	password: Option<FieldError>,
	confirm_password: Option<FieldError>,
}

impl FieldErrors {
	pub fn get(&self, field: Field) -> Option<FieldError> {
		match field {
			Field::Email => self.email,
			Field::Password => self.password,
			Field::ConfirmPassword => self.confirm_password,
		}
	}

	pub fn set(&mut self, field: Field, error: FieldError) {
		*self.slot(field) = Some(error);
	}

	pub fn clear(&mut self, field: Field) {
		*self.slot(field) = None;
	}

	pub fn is_empty(&self) -> bool {
		Field::ALL.iter().all(|field| self.get(*field).is_none())
	}

	/// Iterates over the present errors in field display order
	pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
		Field::ALL
			.into_iter()
			.filter_map(move |field| self.get(field).map(|error| (field, error)))
	}

	fn slot(&mut self, field: Field) -> &mut Option<FieldError> {
		match field {
			Field::Email => &mut self.email,
			Field::Password => &mut self.password,
			Field::ConfirmPassword => &mut self.confirm_password,
		}
	}
}

/// Checks the signup fields, returning every error found.
///
/// Each field must be non-empty. The password confirmation is compared with the password only when both are filled
/// in, so a confirmation never carries both kinds of error.
pub fn validate_signup(email: &str, password: &str, confirm_password: &str) -> FieldErrors {
	let mut errors = FieldErrors::default();

	if email.is_empty() {
		errors.set(Field::Email, FieldError::Empty);
	}
	if password.is_empty() {
		errors.set(Field::Password, FieldError::Empty);
	}
	if confirm_password.is_empty() {
		errors.set(Field::ConfirmPassword, FieldError::Empty);
	}

	if !password.is_empty() && !confirm_password.is_empty() && password != confirm_password {
		errors.set(Field::ConfirmPassword, FieldError::PasswordMismatch);
	}

	errors
}
