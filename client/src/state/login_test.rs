use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::api::{TRANSPORT_FALLBACK_MESSAGE, check_login_response};
use crate::state::session::SessionState;

// =========================================================================
// FakeAuthApi
// =========================================================================

struct FakeAuthApi {
    outcome: Result<(), LoginError>,
    calls: RefCell<Vec<Credentials>>,
}

impl FakeAuthApi {
    fn new(outcome: Result<(), LoginError>) -> Self {
        Self { outcome, calls: RefCell::new(Vec::new()) }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for FakeAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<(), LoginError> {
        self.calls.borrow_mut().push(credentials.clone());
        self.outcome.clone()
    }
}

fn filled_form() -> LoginForm {
    LoginForm {
        email: "user@example.com".to_owned(),
        password: "hunter2".to_owned(),
        ..LoginForm::default()
    }
}

/// Drive one submit the way `LoginPage` does and return whether a request went out.
fn run_submit(api: &FakeAuthApi, form: &mut LoginForm, session: &mut SessionState) -> bool {
    let Some(credentials) = form.begin_submit() else {
        return false;
    };
    let outcome = block_on(submit_credentials(api, credentials));
    if form.finish(outcome) {
        session.set_authenticated(true);
    }
    true
}

// =========================================================================
// defaults
// =========================================================================

#[test]
fn login_form_default_is_idle_and_empty() {
    let form = LoginForm::default();
    assert_eq!(form.phase, LoginPhase::Idle);
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
    assert_eq!(form.error, None);
    assert!(!form.is_submitting());
}

#[test]
fn login_form_debug_redacts_password() {
    let rendered = format!("{:?}", filled_form());
    assert!(rendered.contains("user@example.com"));
    assert!(!rendered.contains("hunter2"));
}

// =========================================================================
// begin_submit
// =========================================================================

#[test]
fn begin_submit_returns_current_fields() {
    let mut form = filled_form();
    let creds = form.begin_submit().unwrap();
    assert_eq!(creds, Credentials::new("user@example.com", "hunter2"));
    assert!(form.is_submitting());
}

#[test]
fn begin_submit_is_refused_while_submitting() {
    let mut form = filled_form();
    assert!(form.begin_submit().is_some());
    assert!(form.begin_submit().is_none());
    assert_eq!(form.phase, LoginPhase::Submitting);
}

#[test]
fn begin_submit_clears_previous_error() {
    let mut form = LoginForm {
        error: Some("bad password".to_owned()),
        phase: LoginPhase::Error,
        ..filled_form()
    };
    assert!(form.begin_submit().is_some());
    assert_eq!(form.error, None);
    assert_eq!(form.phase, LoginPhase::Submitting);
}

#[test]
fn begin_submit_is_refused_after_success() {
    let mut form = LoginForm { phase: LoginPhase::Succeeded, ..filled_form() };
    assert!(form.begin_submit().is_none());
}

// =========================================================================
// finish
// =========================================================================

#[test]
fn finish_outside_submitting_is_ignored() {
    let mut form = filled_form();
    assert!(!form.finish(Ok(())));
    assert_eq!(form.phase, LoginPhase::Idle);
    assert!(!form.finish(Err(LoginError::Transport("late".to_owned()))));
    assert_eq!(form.error, None);
}

#[test]
fn finish_success_clears_password() {
    let mut form = filled_form();
    form.begin_submit();
    assert!(form.finish(Ok(())));
    assert_eq!(form.phase, LoginPhase::Succeeded);
    assert!(form.password.is_empty());
    assert_eq!(form.error, None);
}

// =========================================================================
// full submission flow
// =========================================================================

#[test]
fn accepted_credentials_authenticate_once() {
    let api = FakeAuthApi::new(Ok(()));
    let mut form = filled_form();
    let mut session = SessionState::default();

    assert!(run_submit(&api, &mut form, &mut session));
    assert!(session.authenticated);
    assert_eq!(api.call_count(), 1);
    assert_eq!(api.calls.borrow()[0], Credentials::new("user@example.com", "hunter2"));

    // A second submit after success sends nothing.
    assert!(!run_submit(&api, &mut form, &mut session));
    assert_eq!(api.call_count(), 1);
}

#[test]
fn rejected_credentials_show_server_detail() {
    let api = FakeAuthApi::new(check_login_response(401, r#"{"detail":"bad password"}"#));
    let mut form = filled_form();
    let mut session = SessionState::default();

    run_submit(&api, &mut form, &mut session);
    assert!(!session.authenticated);
    assert_eq!(form.error.as_deref(), Some("bad password"));
    assert_eq!(form.phase, LoginPhase::Error);
    assert_eq!(form.password, "hunter2");
}

#[test]
fn unreachable_endpoint_shows_transport_fallback() {
    let api = FakeAuthApi::new(Err(LoginError::Transport("connection refused".to_owned())));
    let mut form = filled_form();
    let mut session = SessionState::default();

    run_submit(&api, &mut form, &mut session);
    assert!(!session.authenticated);
    assert_eq!(form.error.as_deref(), Some(TRANSPORT_FALLBACK_MESSAGE));
    assert_ne!(form.error.as_deref(), Some("connection refused"));
}

#[test]
fn resubmit_after_error_can_succeed() {
    let rejecting = FakeAuthApi::new(check_login_response(401, r#"{"detail":"bad password"}"#));
    let accepting = FakeAuthApi::new(Ok(()));
    let mut form = filled_form();
    let mut session = SessionState::default();

    run_submit(&rejecting, &mut form, &mut session);
    assert_eq!(form.phase, LoginPhase::Error);

    form.password = "correct horse".to_owned();
    run_submit(&accepting, &mut form, &mut session);
    assert!(session.authenticated);
    assert_eq!(form.error, None);
    assert_eq!(accepting.calls.borrow()[0].password, "correct horse");
}

#[test]
fn double_submit_while_in_flight_sends_one_request() {
    let api = FakeAuthApi::new(Ok(()));
    let mut form = filled_form();

    let first = form.begin_submit();
    let second = form.begin_submit();
    assert!(first.is_some());
    assert!(second.is_none());

    let outcome = block_on(submit_credentials(&api, first.unwrap()));
    assert!(form.finish(outcome));
    assert_eq!(api.call_count(), 1);
}

// =========================================================================
// login_without_auth
// =========================================================================

#[test]
fn bypass_authenticates_without_request() {
    let api = FakeAuthApi::new(Err(LoginError::Transport("should not be called".to_owned())));
    let mut session = SessionState::default();

    login_without_auth(|value| session.set_authenticated(value));
    assert!(session.authenticated);
    assert_eq!(api.call_count(), 0);
}

#[test]
fn bypass_keeps_theme() {
    let mut session = SessionState { authenticated: false, dark_mode: false };
    login_without_auth(|value| session.set_authenticated(value));
    assert!(!session.dark_mode);
}
