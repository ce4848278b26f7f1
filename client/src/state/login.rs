//! Login form state and its submission state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginPage` keeps one `RwSignal<LoginForm>`. A submit event calls
//! [`LoginForm::begin_submit`]; the spawned request then reports back through
//! [`LoginForm::finish`], whose return value tells the page whether to mark
//! the session authenticated.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──ok──▶ Succeeded
//!                      │  ▲
//!                     err │ submit
//!                      ▼  │
//!                     Error
//! ```

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::api::{AuthApi, LoginError};
use crate::net::types::Credentials;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Error,
    /// Terminal; control has passed to the session.
    Succeeded,
}

/// Field values and status of the login form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub phase: LoginPhase,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("error", &self.error)
            .field("phase", &self.phase)
            .finish()
    }
}

impl LoginForm {
    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    /// Start a submission and return the payload to send.
    ///
    /// Returns `None` while a request is already in flight or after success,
    /// so repeated clicks never issue a second request.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        match self.phase {
            LoginPhase::Submitting | LoginPhase::Succeeded => None,
            LoginPhase::Idle | LoginPhase::Error => {
                self.error = None;
                self.phase = LoginPhase::Submitting;
                Some(Credentials::new(self.email.clone(), self.password.clone()))
            }
        }
    }

    /// Apply the outcome of the in-flight request.
    ///
    /// Returns `true` exactly when the session should become authenticated.
    /// Outcomes arriving outside `Submitting` are dropped.
    pub fn finish(&mut self, outcome: Result<(), LoginError>) -> bool {
        if self.phase != LoginPhase::Submitting {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.error = None;
                self.password.clear();
                self.phase = LoginPhase::Succeeded;
                true
            }
            Err(e) => {
                log::warn!("login failed: kind={} error={e}", e.kind());
                self.error = Some(e.user_message());
                self.phase = LoginPhase::Error;
                false
            }
        }
    }
}

/// Send one login request through `api`.
///
/// # Errors
///
/// Propagates the [`LoginError`] reported by `api`.
pub async fn submit_credentials<A>(api: &A, credentials: Credentials) -> Result<(), LoginError>
where
    A: AuthApi + ?Sized,
{
    log::debug!("submitting login request");
    api.login(&credentials).await
}

/// Demo escape hatch: authenticate without contacting the endpoint.
pub fn login_without_auth<F>(set_authenticated: F)
where
    F: FnOnce(bool),
{
    log::info!("login bypass used");
    set_authenticated(true);
}
