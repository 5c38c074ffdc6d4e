//! What the login entry does, independent of the DOM: the mount-time
//! redirect, pre-filling from remembered credentials, and turning a submit
//! into a toast plus an optional navigation.

use shared::LoginResponse;

use crate::auth::{AuthError, Authenticator, CredentialStore, SessionSource};
use crate::components::Toast;
use crate::Route;

pub const LOGIN_SUCCESS_TITLE: &str = "Login Successful";
pub const LOGIN_FAILED_TITLE: &str = "Login Failed";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const LOGIN_ERROR: &str = "An error occurred during login";
pub const SUBMIT_LABEL: &str = "OK";

/// Staff category picked on the form. Display only; never sent to auth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginCategory {
    Technician,
    Admin,
    Mgmt,
}

impl LoginCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginCategory::Technician => "technician",
            LoginCategory::Admin => "admin",
            LoginCategory::Mgmt => "mgmt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoginCategory::Technician => "Technician",
            LoginCategory::Admin => "Admin",
            LoginCategory::Mgmt => "Mgmt.",
        }
    }

    pub fn all() -> &'static [LoginCategory] {
        &[
            LoginCategory::Technician,
            LoginCategory::Admin,
            LoginCategory::Mgmt,
        ]
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub company: String,
    pub identifier: String,
    pub password: String,
    pub category: Option<LoginCategory>,
    pub remember_me: bool,
}

impl LoginForm {
    /// Empty form, or one seeded from remembered credentials with remember-me on.
    pub fn prefilled(store: &impl CredentialStore) -> Self {
        match store.stored_credentials() {
            Some(credentials) => Self {
                identifier: credentials.email,
                password: credentials.password,
                remember_me: true,
                ..Self::default()
            },
            None => Self::default(),
        }
    }
}

/// Where an already signed-in visitor should be sent instead of seeing the form.
pub fn mount_redirect(session: &impl SessionSource) -> Option<Route> {
    if !session.is_logged_in() {
        return None;
    }
    session.current_user().map(|user| Route::for_role(user.role))
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub toast: Toast,
    pub redirect: Option<Route>,
}

impl SubmitOutcome {
    fn failed(description: impl Into<String>) -> Self {
        Self {
            toast: Toast::destructive(LOGIN_FAILED_TITLE, description),
            redirect: None,
        }
    }
}

pub async fn submit<A, C>(form: &LoginForm, auth: &A, store: &C) -> SubmitOutcome
where
    A: Authenticator,
    C: CredentialStore,
{
    log::debug!("{}", attempt_summary(form));

    let result = auth
        .login(&form.identifier, &form.password, &form.company)
        .await;
    settle(form, store, result)
}

/// Log line for a submit; carries neither the identifier nor the password.
fn attempt_summary(form: &LoginForm) -> String {
    format!(
        "login attempt (company {:?}, category {})",
        form.company,
        form.category.map(|c| c.as_str()).unwrap_or("none")
    )
}

fn settle<C: CredentialStore>(
    form: &LoginForm,
    store: &C,
    result: Result<LoginResponse, AuthError>,
) -> SubmitOutcome {
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            log::error!("login request failed: {}", e);
            return SubmitOutcome::failed(LOGIN_ERROR);
        }
    };

    match response.authenticated_user() {
        Some(user) => {
            store.store_credentials(&form.identifier, &form.password, form.remember_me);
            log::info!("login accepted as {}", user.role.as_str());
            SubmitOutcome {
                toast: Toast::new(
                    LOGIN_SUCCESS_TITLE,
                    format!("Welcome {}", user.role.display_name()),
                ),
                redirect: Some(Route::for_role(user.role)),
            }
        }
        None => {
            log::warn!("login rejected: {:?}", response.error);
            SubmitOutcome::failed(
                response
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| INVALID_CREDENTIALS.to_string()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;
    use shared::{Role, SessionUser, StoredCredentials};

    use super::*;
    use crate::components::toast::ToastVariant;

    fn user(role: Role) -> SessionUser {
        SessionUser {
            email: "ops@sunfield.io".to_string(),
            name: Some("Ops".to_string()),
            role,
            company: Some("Sunfield".to_string()),
        }
    }

    #[derive(Default)]
    struct FakeAuth {
        logged_in: bool,
        user: Option<SessionUser>,
        reply: Option<Result<LoginResponse, AuthError>>,
        calls: RefCell<Vec<(String, String, String)>>,
    }

    impl SessionSource for FakeAuth {
        fn is_logged_in(&self) -> bool {
            self.logged_in
        }

        fn current_user(&self) -> Option<SessionUser> {
            self.user.clone()
        }
    }

    impl Authenticator for FakeAuth {
        async fn login(
            &self,
            identifier: &str,
            password: &str,
            company: &str,
        ) -> Result<LoginResponse, AuthError> {
            self.calls.borrow_mut().push((
                identifier.to_string(),
                password.to_string(),
                company.to_string(),
            ));
            self.reply
                .clone()
                .unwrap_or_else(|| Ok(LoginResponse::rejected(None)))
        }
    }

    #[derive(Default)]
    struct FakeStore {
        saved: RefCell<Option<StoredCredentials>>,
        writes: Cell<u32>,
    }

    impl FakeStore {
        fn with(email: &str, password: &str) -> Self {
            let store = Self::default();
            *store.saved.borrow_mut() = Some(StoredCredentials {
                email: email.to_string(),
                password: password.to_string(),
            });
            store
        }
    }

    impl CredentialStore for FakeStore {
        fn stored_credentials(&self) -> Option<StoredCredentials> {
            self.saved.borrow().clone()
        }

        fn store_credentials(&self, identifier: &str, password: &str, remember: bool) {
            self.writes.set(self.writes.get() + 1);
            *self.saved.borrow_mut() = remember.then(|| StoredCredentials {
                email: identifier.to_string(),
                password: password.to_string(),
            });
        }
    }

    fn form(remember_me: bool) -> LoginForm {
        LoginForm {
            company: "Sunfield".to_string(),
            identifier: "ops@sunfield.io".to_string(),
            password: "hunter2".to_string(),
            category: Some(LoginCategory::Admin),
            remember_me,
        }
    }

    fn replying(reply: Result<LoginResponse, AuthError>) -> FakeAuth {
        FakeAuth {
            reply: Some(reply),
            ..FakeAuth::default()
        }
    }

    #[test]
    fn mount_redirects_signed_in_user_by_role() {
        for (role, route) in [
            (Role::SuperAdmin, Route::SuperAdminDashboard),
            (Role::PlantAdmin, Route::PlantAdminDashboard),
            (Role::User, Route::UserWelcome),
        ] {
            let auth = FakeAuth {
                logged_in: true,
                user: Some(user(role)),
                ..FakeAuth::default()
            };
            assert_eq!(mount_redirect(&auth), Some(route));
        }
    }

    #[test]
    fn mount_shows_form_when_signed_out_or_user_missing() {
        assert_eq!(mount_redirect(&FakeAuth::default()), None);

        let no_user = FakeAuth {
            logged_in: true,
            ..FakeAuth::default()
        };
        assert_eq!(mount_redirect(&no_user), None);
    }

    #[test]
    fn prefill_uses_remembered_credentials() {
        let store = FakeStore::with("ops@sunfield.io", "hunter2");
        let form = LoginForm::prefilled(&store);
        assert_eq!(form.identifier, "ops@sunfield.io");
        assert_eq!(form.password, "hunter2");
        assert!(form.remember_me);
        assert!(form.company.is_empty());
        assert_eq!(form.category, None);
    }

    #[test]
    fn prefill_without_credentials_is_empty() {
        assert_eq!(LoginForm::prefilled(&FakeStore::default()), LoginForm::default());
    }

    #[test]
    fn plant_admin_login_navigates_and_welcomes_by_role() {
        let auth = replying(Ok(LoginResponse::accepted(user(Role::PlantAdmin))));
        let store = FakeStore::default();

        let outcome = block_on(submit(&form(false), &auth, &store));

        assert_eq!(outcome.redirect, Some(Route::PlantAdminDashboard));
        assert_eq!(outcome.toast.title, LOGIN_SUCCESS_TITLE);
        assert_eq!(outcome.toast.description, "Welcome plant admin");
        assert_eq!(outcome.toast.variant, ToastVariant::Default);
        assert_eq!(
            auth.calls.borrow().as_slice(),
            &[(
                "ops@sunfield.io".to_string(),
                "hunter2".to_string(),
                "Sunfield".to_string()
            )]
        );
    }

    #[test]
    fn rejected_login_shows_server_error() {
        let auth = replying(Ok(LoginResponse::rejected(Some("Account locked".to_string()))));
        let store = FakeStore::default();

        let outcome = block_on(submit(&form(true), &auth, &store));

        assert_eq!(outcome.redirect, None);
        assert_eq!(outcome.toast, Toast::destructive(LOGIN_FAILED_TITLE, "Account locked"));
        assert_eq!(store.writes.get(), 0);
    }

    #[test]
    fn rejected_login_without_message_falls_back() {
        let auth = replying(Ok(LoginResponse::rejected(None)));
        let outcome = block_on(submit(&form(false), &auth, &FakeStore::default()));
        assert_eq!(outcome.toast.description, INVALID_CREDENTIALS);

        let auth = replying(Ok(LoginResponse::rejected(Some(String::new()))));
        let outcome = block_on(submit(&form(false), &auth, &FakeStore::default()));
        assert_eq!(outcome.toast.description, INVALID_CREDENTIALS);
    }

    #[test]
    fn success_without_user_is_treated_as_rejection() {
        let reply = LoginResponse {
            success: true,
            user: None,
            error: None,
        };
        let outcome = block_on(submit(&form(true), &replying(Ok(reply)), &FakeStore::default()));
        assert_eq!(outcome.redirect, None);
        assert_eq!(outcome.toast.title, LOGIN_FAILED_TITLE);
    }

    #[test]
    fn remember_me_persists_credentials() {
        let auth = replying(Ok(LoginResponse::accepted(user(Role::User))));
        let store = FakeStore::default();

        block_on(submit(&form(true), &auth, &store));

        assert_eq!(
            store.stored_credentials(),
            Some(StoredCredentials {
                email: "ops@sunfield.io".to_string(),
                password: "hunter2".to_string(),
            })
        );
    }

    #[test]
    fn unchecked_remember_me_does_not_persist() {
        let auth = replying(Ok(LoginResponse::accepted(user(Role::User))));
        let store = FakeStore::with("old@sunfield.io", "old");

        block_on(submit(&form(false), &auth, &store));

        assert_eq!(store.stored_credentials(), None);
    }

    #[test]
    fn login_error_shows_generic_failure_without_navigation() {
        let auth = replying(Err(AuthError::Network("connection refused".to_string())));
        let store = FakeStore::default();

        let outcome = block_on(submit(&form(true), &auth, &store));

        assert_eq!(outcome.redirect, None);
        assert_eq!(outcome.toast, Toast::destructive(LOGIN_FAILED_TITLE, LOGIN_ERROR));
        assert_eq!(store.writes.get(), 0);
    }

    #[test]
    fn attempt_summary_omits_identifier_and_password() {
        let summary = attempt_summary(&form(true));
        assert!(summary.contains("Sunfield"));
        assert!(summary.contains("admin"));
        assert!(!summary.contains("ops@sunfield.io"));
        assert!(!summary.contains("hunter2"));
    }

    #[test]
    fn submit_button_reads_ok() {
        assert_eq!(SUBMIT_LABEL, "OK");
    }

    #[test]
    fn category_values_parse_back() {
        for category in LoginCategory::all() {
            assert_eq!(LoginCategory::from_value(category.as_str()), Some(*category));
        }
        assert_eq!(LoginCategory::from_value(""), None);
        assert_eq!(LoginCategory::Mgmt.label(), "Mgmt.");
    }
}
