//! Build-time settings for the login front-end.
//!
//! Values come from `option_env!` so a `trunk build` can override them with
//! environment variables; anything missing or unparsable keeps its default.

use chrono::Duration;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_SESSION_HOURS: i64 = 12;
pub const DEFAULT_TOAST_DISMISS_MS: u32 = 5_000;
const MAX_SESSION_HOURS: i64 = 24 * 366;

pub const SESSION_STORAGE_KEY: &str = "spa_session";
pub const CREDENTIALS_STORAGE_KEY: &str = "spa_credentials";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub session_lifetime: Duration,
    pub toast_dismiss_ms: u32,
    pub session_key: &'static str,
    pub credentials_key: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            session_lifetime: Duration::hours(DEFAULT_SESSION_HOURS),
            toast_dismiss_ms: DEFAULT_TOAST_DISMISS_MS,
            session_key: SESSION_STORAGE_KEY,
            credentials_key: CREDENTIALS_STORAGE_KEY,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SPA_API_BASE"),
            option_env!("SPA_SESSION_HOURS"),
            option_env!("SPA_TOAST_DISMISS_MS"),
        )
    }

    fn from_values(
        api_base: Option<&str>,
        session_hours: Option<&str>,
        toast_dismiss_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        let api_base = api_base
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.api_base);

        let session_lifetime = session_hours
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|h| (1..=MAX_SESSION_HOURS).contains(h))
            .map(Duration::hours)
            .unwrap_or(defaults.session_lifetime);

        let toast_dismiss_ms = toast_dismiss_ms
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.toast_dismiss_ms);

        Self {
            api_base,
            session_lifetime,
            toast_dismiss_ms,
            ..defaults
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}
