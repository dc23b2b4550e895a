// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::form::SignupForm;
use crate::services::{Navigator, Notifier, SignupApi, TokenStore};
use signup_shared::messages::signup::{SignupPayload, SignupRequest};
use std::cell::Cell;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Signup successful!";
pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed!";
pub const SIGNUP_ERROR_MESSAGE: &str = "An error occurred during signup. Please try again.";

/// How a single press of the submit button ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
	/// Validation failed; nothing was sent
	Invalid,
	/// A previous submission hasn't finished; nothing was sent
	AlreadyPending,
	SignedUp,
	/// The server refused to create the account
	Rejected,
	/// The call or the token write failed
	Failed,
}

/// Runs signup submissions against the injected collaborators.
///
/// Only one submission can be in flight at a time. [`SignupFlow::begin`] validates the form and hands out a
/// [`PendingSubmission`] that holds the pending slot until it's dropped, and [`SignupFlow::complete`] consumes it to
/// make the call.
pub struct SignupFlow<A, S, N, R> {
	api: A,
	token_store: S,
	notifier: N,
	navigator: R,
	home_route: String,
	pending: Cell<bool>,
}

impl<A, S, N, R> SignupFlow<A, S, N, R>
where
	A: SignupApi,
	S: TokenStore,
	N: Notifier,
	R: Navigator,
{
	pub fn new(api: A, token_store: S, notifier: N, navigator: R, home_route: String) -> Self {
		Self {
			api,
			token_store,
			notifier,
			navigator,
			home_route,
			pending: Cell::new(false),
		}
	}

	pub fn is_pending(&self) -> bool {
		self.pending.get()
	}

	/// Validates the form for submission.
	///
	/// On failure, each field error is shown as its own notification in field order.
	///
	/// # Errors
	///
	/// Returns [`SubmitOutcome::AlreadyPending`] while another submission is running and [`SubmitOutcome::Invalid`]
	/// when validation fails.
	pub fn begin(&self, form: &mut SignupForm) -> Result<PendingSubmission<'_>, SubmitOutcome> {
		if self.pending.get() {
			log::debug!("Ignoring signup submission while another is pending");
			return Err(SubmitOutcome::AlreadyPending);
		}

		match form.validate() {
			Ok(request) => {
				self.pending.set(true);
				Ok(PendingSubmission {
					request,
					guard: PendingGuard(&self.pending),
				})
			}
			Err(errors) => {
				for (_, error) in errors.iter() {
					self.notifier.error(&error.to_string());
				}
				Err(SubmitOutcome::Invalid)
			}
		}
	}

	/// Sends a submission produced by [`SignupFlow::begin`] and reacts to the result
	pub async fn complete(&self, submission: PendingSubmission<'_>) -> SubmitOutcome {
		let PendingSubmission { request, guard } = submission;
		let reply = self.api.sign_up(&request).await;
		// Released before acting on the reply. Navigating away disposes the view that owns this flow.
		drop(guard);

		let result = match reply {
			Ok(result) => result,
			Err(error) => {
				log::error!("Signup call failed: {}", error);
				self.notifier.error(SIGNUP_ERROR_MESSAGE);
				return SubmitOutcome::Failed;
			}
		};

		if let Some(token) = result.token() {
			if let Err(error) = self.token_store.store_token(token) {
				log::error!("Failed to store authentication token: {}", error);
				self.notifier.error(SIGNUP_ERROR_MESSAGE);
				return SubmitOutcome::Failed;
			}
			self.notifier.success(SIGNUP_SUCCESS_MESSAGE);
			let home_route = self.home_route.clone();
			self.navigator.navigate(&home_route);
			return SubmitOutcome::SignedUp;
		}

		log::debug!("Signup rejected with status {}", result.status);
		let message = match &result.payload {
			SignupPayload::Failure(Some(message)) if !message.is_empty() => message.as_str(),
			_ => SIGNUP_FAILED_MESSAGE,
		};
		self.notifier.error(message);
		SubmitOutcome::Rejected
	}

	pub async fn submit(&self, form: &mut SignupForm) -> SubmitOutcome {
		match self.begin(form) {
			Ok(submission) => self.complete(submission).await,
			Err(outcome) => outcome,
		}
	}
}

/// A validated request that holds the flow's pending slot
pub struct PendingSubmission<'a> {
	request: SignupRequest,
	guard: PendingGuard<'a>,
}

struct PendingGuard<'a>(&'a Cell<bool>);

impl Drop for PendingGuard<'_> {
	fn drop(&mut self) {
		self.0.set(false);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::{SignupCallError, TokenStoreError};
	use futures::executor::block_on;
	use signup_shared::messages::signup::SignupResult;
	use signup_shared::validation::Field;
	use std::cell::RefCell;
	use std::rc::{Rc, Weak};

	#[derive(Clone, Debug, Eq, PartialEq)]
	enum Notice {
		Success(String),
		Error(String),
	}

	enum Reply {
		Result(SignupResult),
		TransportError,
	}

	#[derive(Clone)]
	struct FakeApi {
		reply: Rc<Reply>,
		requests: Rc<RefCell<Vec<SignupRequest>>>,
	}

	impl FakeApi {
		fn replying(reply: Reply) -> Self {
			Self {
				reply: Rc::new(reply),
				requests: Rc::default(),
			}
		}

		fn call_count(&self) -> usize {
			self.requests.borrow().len()
		}
	}

	impl SignupApi for FakeApi {
		async fn sign_up(&self, request: &SignupRequest) -> Result<SignupResult, SignupCallError> {
			self.requests.borrow_mut().push(request.clone());
			match &*self.reply {
				Reply::Result(result) => Ok(result.clone()),
				Reply::TransportError => Err(SignupCallError::Request(gloo_net::Error::GlooError(String::from(
					"connection refused",
				)))),
			}
		}
	}

	#[derive(Clone, Default)]
	struct FakeStore {
		entries: Rc<RefCell<Vec<String>>>,
		broken: bool,
	}

	impl TokenStore for FakeStore {
		fn store_token(&self, token: &str) -> Result<(), TokenStoreError> {
			if self.broken {
				return Err(TokenStoreError::Write(String::from("QuotaExceededError")));
			}
			self.entries.borrow_mut().push(token.to_string());
			Ok(())
		}

		fn load_token(&self) -> Result<Option<String>, TokenStoreError> {
			Ok(self.entries.borrow().last().cloned())
		}
	}

	#[derive(Clone, Default)]
	struct FakeNotifier(Rc<RefCell<Vec<Notice>>>);

	impl Notifier for FakeNotifier {
		fn success(&self, message: &str) {
			self.0.borrow_mut().push(Notice::Success(message.to_string()));
		}

		fn error(&self, message: &str) {
			self.0.borrow_mut().push(Notice::Error(message.to_string()));
		}
	}

	#[derive(Clone, Default)]
	struct FakeNavigator(Rc<RefCell<Vec<String>>>);

	impl Navigator for FakeNavigator {
		fn navigate(&self, path: &str) {
			self.0.borrow_mut().push(path.to_string());
		}
	}

	type WatchedFlow = SignupFlow<FakeApi, FakeStore, FakeNotifier, PendingWatchingNavigator>;

	/// Records whether the flow still claims a submission at the moment it navigates
	#[derive(Clone, Default)]
	struct PendingWatchingNavigator {
		flow: Rc<RefCell<Weak<WatchedFlow>>>,
		seen_pending: Rc<RefCell<Vec<bool>>>,
	}

	impl Navigator for PendingWatchingNavigator {
		fn navigate(&self, _path: &str) {
			if let Some(flow) = self.flow.borrow().upgrade() {
				self.seen_pending.borrow_mut().push(flow.is_pending());
			}
		}
	}

	struct Harness {
		api: FakeApi,
		store: FakeStore,
		notifier: FakeNotifier,
		navigator: FakeNavigator,
		flow: SignupFlow<FakeApi, FakeStore, FakeNotifier, FakeNavigator>,
	}

	impl Harness {
		fn new(reply: Reply) -> Self {
			Self::with_store(reply, FakeStore::default())
		}

		fn with_store(reply: Reply, store: FakeStore) -> Self {
			let api = FakeApi::replying(reply);
			let notifier = FakeNotifier::default();
			let navigator = FakeNavigator::default();
			let flow = SignupFlow::new(
				api.clone(),
				store.clone(),
				notifier.clone(),
				navigator.clone(),
				String::from("/home"),
			);
			Self {
				api,
				store,
				notifier,
				navigator,
				flow,
			}
		}

		fn notices(&self) -> Vec<Notice> {
			self.notifier.0.borrow().clone()
		}

		fn stored_tokens(&self) -> Vec<String> {
			self.store.entries.borrow().clone()
		}

		fn navigations(&self) -> Vec<String> {
			self.navigator.0.borrow().clone()
		}
	}

	fn success(token: &str) -> Reply {
		Reply::Result(SignupResult {
			status: 200,
			payload: SignupPayload::Token(token.to_string()),
		})
	}

	fn rejection(status: u16, message: Option<&str>) -> Reply {
		Reply::Result(SignupResult {
			status,
			payload: SignupPayload::Failure(message.map(String::from)),
		})
	}

	fn form(email: &str, password: &str, confirm_password: &str) -> SignupForm {
		let mut form = SignupForm::default();
		form.update(Field::Email, email.to_string());
		form.update(Field::Password, password.to_string());
		form.update(Field::ConfirmPassword, confirm_password.to_string());
		form
	}

	#[test]
	fn empty_fields_block_the_call() {
		let inputs = ["", "x"];
		for email in inputs {
			for password in inputs {
				for confirm_password in inputs {
					if !email.is_empty() && !password.is_empty() && !confirm_password.is_empty() {
						continue;
					}
					let harness = Harness::new(success("T"));
					let mut form = form(email, password, confirm_password);
					let outcome = block_on(harness.flow.submit(&mut form));

					let empty_count = [email, password, confirm_password]
						.iter()
						.filter(|value| value.is_empty())
						.count();
					assert_eq!(outcome, SubmitOutcome::Invalid);
					assert_eq!(harness.api.call_count(), 0);
					assert_eq!(harness.notices().len(), empty_count);
					assert!(harness
						.notices()
						.iter()
						.all(|notice| *notice == Notice::Error(String::from("Can't be empty"))));
					assert!(!harness.flow.is_pending());
				}
			}
		}
	}

	#[test]
	fn mismatched_passwords_block_the_call() {
		let harness = Harness::new(success("T"));
		let mut form = form("ada@example.com", "hunter2", "hunter3");
		let outcome = block_on(harness.flow.submit(&mut form));

		assert_eq!(outcome, SubmitOutcome::Invalid);
		assert_eq!(harness.api.call_count(), 0);
		assert_eq!(harness.notices(), vec![Notice::Error(String::from("Passwords do not match"))]);
		assert_eq!(form.error(Field::Email), None);
		assert_eq!(form.error(Field::Password), None);
	}

	#[test]
	fn invalid_notifications_follow_field_order() {
		let harness = Harness::new(success("T"));
		let mut form = form("", "hunter2", "hunter3");
		block_on(harness.flow.submit(&mut form));

		assert_eq!(
			harness.notices(),
			vec![
				Notice::Error(String::from("Can't be empty")),
				Notice::Error(String::from("Passwords do not match")),
			]
		);
	}

	#[test]
	fn success_stores_token_and_navigates_home() {
		let harness = Harness::new(success("T"));
		let mut form = form("ada@example.com", "hunter2", "hunter2");
		let outcome = block_on(harness.flow.submit(&mut form));

		assert_eq!(outcome, SubmitOutcome::SignedUp);
		assert_eq!(
			*harness.api.requests.borrow(),
			vec![SignupRequest {
				username: String::from("ada@example.com"),
				password: String::from("hunter2"),
			}]
		);
		assert_eq!(harness.stored_tokens(), vec![String::from("T")]);
		assert_eq!(harness.notices(), vec![Notice::Success(String::from(SIGNUP_SUCCESS_MESSAGE))]);
		assert_eq!(harness.navigations(), vec![String::from("/home")]);
		assert!(!harness.flow.is_pending());
	}

	#[test]
	fn pending_is_released_before_navigating_home() {
		let navigator = PendingWatchingNavigator::default();
		let flow = Rc::new(SignupFlow::new(
			FakeApi::replying(success("T")),
			FakeStore::default(),
			FakeNotifier::default(),
			navigator.clone(),
			String::from("/home"),
		));
		*navigator.flow.borrow_mut() = Rc::downgrade(&flow);

		let outcome = block_on(flow.submit(&mut form("ada@example.com", "hunter2", "hunter2")));

		assert_eq!(outcome, SubmitOutcome::SignedUp);
		assert_eq!(*navigator.seen_pending.borrow(), vec![false]);
	}

	#[test]
	fn rejection_shows_server_message() {
		let harness = Harness::new(rejection(401, Some("Bad creds")));
		let outcome = block_on(harness.flow.submit(&mut form("ada@example.com", "hunter2", "hunter2")));

		assert_eq!(outcome, SubmitOutcome::Rejected);
		assert_eq!(harness.notices(), vec![Notice::Error(String::from("Bad creds"))]);
		assert!(harness.stored_tokens().is_empty());
		assert!(harness.navigations().is_empty());
	}

	#[test]
	fn rejection_without_message_uses_fallback() {
		let harness = Harness::new(rejection(500, None));
		block_on(harness.flow.submit(&mut form("ada@example.com", "hunter2", "hunter2")));

		assert_eq!(harness.notices(), vec![Notice::Error(String::from(SIGNUP_FAILED_MESSAGE))]);
	}

	#[test]
	fn token_with_unexpected_status_is_a_rejection() {
		let harness = Harness::new(Reply::Result(SignupResult {
			status: 201,
			payload: SignupPayload::Token(String::from("T")),
		}));
		let outcome = block_on(harness.flow.submit(&mut form("ada@example.com", "hunter2", "hunter2")));

		assert_eq!(outcome, SubmitOutcome::Rejected);
		assert!(harness.stored_tokens().is_empty());
		assert!(harness.navigations().is_empty());
	}

	#[test]
	fn transport_failure_shows_generic_error() {
		let harness = Harness::new(Reply::TransportError);
		let outcome = block_on(harness.flow.submit(&mut form("ada@example.com", "hunter2", "hunter2")));

		assert_eq!(outcome, SubmitOutcome::Failed);
		assert_eq!(harness.api.call_count(), 1);
		assert_eq!(harness.notices(), vec![Notice::Error(String::from(SIGNUP_ERROR_MESSAGE))]);
		assert!(harness.stored_tokens().is_empty());
		assert!(harness.navigations().is_empty());
		assert!(!harness.flow.is_pending());
	}

	#[test]
	fn failed_token_write_does_not_navigate() {
		let store = FakeStore {
			broken: true,
			..FakeStore::default()
		};
		let harness = Harness::with_store(success("T"), store);
		let outcome = block_on(harness.flow.submit(&mut form("ada@example.com", "hunter2", "hunter2")));

		assert_eq!(outcome, SubmitOutcome::Failed);
		assert_eq!(harness.notices(), vec![Notice::Error(String::from(SIGNUP_ERROR_MESSAGE))]);
		assert!(harness.navigations().is_empty());
	}

	#[test]
	fn duplicate_submit_is_ignored_while_pending() {
		let harness = Harness::new(rejection(409, Some("Email taken")));
		let mut form = form("ada@example.com", "hunter2", "hunter2");

		let submission = harness.flow.begin(&mut form).unwrap();
		assert!(harness.flow.is_pending());
		assert_eq!(harness.flow.begin(&mut form).err(), Some(SubmitOutcome::AlreadyPending));

		block_on(harness.flow.complete(submission));
		assert_eq!(harness.api.call_count(), 1);
		assert!(!harness.flow.is_pending());

		assert_eq!(block_on(harness.flow.submit(&mut form)), SubmitOutcome::Rejected);
		assert_eq!(harness.api.call_count(), 2);
	}

	#[test]
	fn dropped_submission_releases_pending() {
		let harness = Harness::new(success("T"));
		let mut form = form("ada@example.com", "hunter2", "hunter2");

		let submission = harness.flow.begin(&mut form).unwrap();
		let in_flight = harness.flow.complete(submission);
		assert!(harness.flow.is_pending());
		drop(in_flight);

		assert!(!harness.flow.is_pending());
		assert_eq!(harness.api.call_count(), 0);
		assert_eq!(block_on(harness.flow.submit(&mut form)), SubmitOutcome::SignedUp);
	}
}
