//! Login call against the external authentication endpoint.
//!
//! Client-side (hydrate): a real `POST` via `gloo-net` with cookies included.
//! Server-side (SSR): a stub that reports a transport failure, since the
//! endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is a `Result<(), LoginError>`. The form turns the error into
//! display text with [`LoginError::user_message`]; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Credentials, ErrorBody};

/// Endpoint used when the build does not set `TERREA_LOGIN_URL`.
pub const DEFAULT_LOGIN_URL: &str = "http://127.0.0.1:8000/profile/login";

/// Shown when the endpoint rejects the login without a usable `detail`.
pub const SERVER_FALLBACK_MESSAGE: &str = "Ошибка при входе";

/// Shown when no response arrived at all.
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Неизвестная ошибка";

/// Login URL baked in at compile time.
pub fn login_url() -> &'static str {
    option_env!("TERREA_LOGIN_URL").unwrap_or(DEFAULT_LOGIN_URL)
}

/// Why a login attempt did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The endpoint answered with a non-2xx status.
    #[error("login rejected with status {status}")]
    ServerRejected { status: u16, detail: Option<String> },
    /// The request never produced a response.
    #[error("login request failed: {0}")]
    Transport(String),
}

impl LoginError {
    /// Text for the form's error line.
    pub fn user_message(&self) -> String {
        match self {
            Self::ServerRejected { detail: Some(detail), .. } => detail.clone(),
            Self::ServerRejected { detail: None, .. } => SERVER_FALLBACK_MESSAGE.to_owned(),
            Self::Transport(_) => TRANSPORT_FALLBACK_MESSAGE.to_owned(),
        }
    }

    /// Short tag for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ServerRejected { .. } => "server_rejected",
            Self::Transport(_) => "transport",
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Classify a received response by status and raw body text.
///
/// # Errors
///
/// Returns [`LoginError::ServerRejected`] for any non-2xx status, carrying
/// the body's string `detail` when one is present.
pub fn check_login_response(status: u16, body: &str) -> Result<(), LoginError> {
    if is_success(status) {
        return Ok(());
    }
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message().map(str::to_owned));
    Err(LoginError::ServerRejected { status, detail })
}

/// Anything that can check credentials. Lets the form run against a fake
/// endpoint in tests.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Submit one login request.
    ///
    /// # Errors
    ///
    /// Returns a [`LoginError`] when the endpoint rejects the credentials or
    /// cannot be reached.
    async fn login(&self, credentials: &Credentials) -> Result<(), LoginError>;
}

/// [`AuthApi`] backed by the browser's `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    url: String,
}

impl HttpAuthApi {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpAuthApi {
    fn default() -> Self {
        Self::new(login_url())
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<(), LoginError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url)
                .credentials(web_sys::RequestCredentials::Include)
                .json(credentials)
                .map_err(|e| LoginError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| LoginError::Transport(e.to_string()))?;
            if resp.ok() {
                return Ok(());
            }
            // An unreadable body still counts as a rejection, just without detail.
            let body = resp.text().await.unwrap_or_default();
            check_login_response(resp.status(), &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(LoginError::Transport("not available on server".to_owned()))
        }
    }
}
