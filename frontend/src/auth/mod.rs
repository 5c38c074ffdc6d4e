//! Authentication seams used by the login entry and the role pages.
//!
//! The traits describe the collaborators the pages talk to; `BrowserAuth` is
//! the real implementation over the auth API and browser local storage.

mod error;
mod storage;

pub use error::AuthError;

use chrono::Utc;
use gloo_net::http::Request;
use shared::{ApiError, LoginRequest, LoginResponse, SessionUser, StoredCredentials};

use crate::config::AppConfig;

pub trait SessionSource {
    fn is_logged_in(&self) -> bool;
    fn current_user(&self) -> Option<SessionUser>;
}

pub trait Authenticator {
    async fn login(
        &self,
        identifier: &str,
        password: &str,
        company: &str,
    ) -> Result<LoginResponse, AuthError>;
}

pub trait CredentialStore {
    fn stored_credentials(&self) -> Option<StoredCredentials>;
    /// Persists the pair when `remember` is set, otherwise forgets any saved pair.
    fn store_credentials(&self, identifier: &str, password: &str, remember: bool);
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrowserAuth {
    config: AppConfig,
}

impl BrowserAuth {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn from_build_env() -> Self {
        Self::new(AppConfig::from_build_env())
    }

    pub fn sign_out(&self) {
        log::info!("signing out");
        storage::clear_session(self.config.session_key);
    }

    fn active_session_user(&self) -> Option<SessionUser> {
        let stored = storage::load_session(self.config.session_key);
        let had_session = stored.is_some();
        match storage::live_session(stored, Utc::now(), self.config.session_lifetime) {
            Some(session) => Some(session.user),
            None => {
                if had_session {
                    log::info!("stored session expired");
                    storage::clear_session(self.config.session_key);
                }
                None
            }
        }
    }
}

impl SessionSource for BrowserAuth {
    fn is_logged_in(&self) -> bool {
        self.active_session_user().is_some()
    }

    fn current_user(&self) -> Option<SessionUser> {
        self.active_session_user()
    }
}

impl Authenticator for BrowserAuth {
    async fn login(
        &self,
        identifier: &str,
        password: &str,
        company: &str,
    ) -> Result<LoginResponse, AuthError> {
        let payload = LoginRequest {
            identifier: identifier.to_string(),
            password: password.to_string(),
            company: company.to_string(),
        };

        let resp = Request::post(&self.config.endpoint("auth/login"))
            .json(&payload)?
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        let response = interpret_login_body(resp.ok(), status, &body)?;

        if let Some(user) = response.authenticated_user() {
            if let Err(e) = storage::save_session(self.config.session_key, user.clone()) {
                log::warn!("could not persist session: {}", e);
            }
        }

        Ok(response)
    }
}

impl CredentialStore for BrowserAuth {
    fn stored_credentials(&self) -> Option<StoredCredentials> {
        storage::load_credentials(self.config.credentials_key)
    }

    fn store_credentials(&self, identifier: &str, password: &str, remember: bool) {
        let Some(credentials) = credentials_to_keep(identifier, password, remember) else {
            storage::clear_credentials(self.config.credentials_key);
            return;
        };
        if let Err(e) = storage::save_credentials(self.config.credentials_key, &credentials) {
            log::warn!("could not remember credentials: {}", e);
        }
    }
}

/// The pair to remember, or `None` when any saved pair should be forgotten.
fn credentials_to_keep(
    identifier: &str,
    password: &str,
    remember: bool,
) -> Option<StoredCredentials> {
    remember.then(|| StoredCredentials {
        email: identifier.to_string(),
        password: password.to_string(),
    })
}

/// Maps a raw auth API reply onto a `LoginResponse`.
///
/// Rejections arrive either as a 2xx `LoginResponse` with `success: false` or
/// as an error status whose body is a `LoginResponse` or an `ApiError`.
fn interpret_login_body(ok: bool, status: u16, body: &str) -> Result<LoginResponse, AuthError> {
    if ok {
        return serde_json::from_str(body).map_err(|e| AuthError::Decode(e.to_string()));
    }

    if let Ok(resp) = serde_json::from_str::<LoginResponse>(body) {
        return Ok(LoginResponse::rejected(resp.error));
    }
    if let Ok(api_error) = serde_json::from_str::<ApiError>(body) {
        return Ok(LoginResponse::rejected(Some(api_error.error.message)));
    }

    match status {
        400 | 401 | 403 => Ok(LoginResponse::rejected(None)),
        _ => Err(AuthError::Status(status)),
    }
}
