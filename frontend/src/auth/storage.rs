//! Local-storage persistence for the signed-in session and remembered
//! credentials.

use chrono::{DateTime, Duration, Utc};
use gloo_storage::{LocalStorage, Storage};
use shared::{SessionUser, StoredCredentials, StoredSession};

use super::AuthError;

pub fn load_session(key: &str) -> Option<StoredSession> {
    LocalStorage::get(key).ok()
}

pub fn save_session(key: &str, user: SessionUser) -> Result<(), AuthError> {
    LocalStorage::set(key, StoredSession::new(user))?;
    Ok(())
}

pub fn clear_session(key: &str) {
    LocalStorage::delete(key);
}

pub fn load_credentials(key: &str) -> Option<StoredCredentials> {
    LocalStorage::get(key).ok()
}

pub fn save_credentials(key: &str, credentials: &StoredCredentials) -> Result<(), AuthError> {
    LocalStorage::set(key, credentials)?;
    Ok(())
}

pub fn clear_credentials(key: &str) {
    LocalStorage::delete(key);
}

/// Keeps `session` only while it is younger than `lifetime`.
pub fn live_session(
    session: Option<StoredSession>,
    now: DateTime<Utc>,
    lifetime: Duration,
) -> Option<StoredSession> {
    session.filter(|s| !s.is_expired(now, lifetime))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Role;

    fn session_at(signed_in_at: DateTime<Utc>) -> StoredSession {
        StoredSession {
            user: SessionUser {
                email: "tech@plant.io".to_string(),
                name: None,
                role: Role::User,
                company: Some("Sunfield".to_string()),
            },
            signed_in_at,
        }
    }

    #[test]
    fn live_session_keeps_fresh_sessions() {
        let now = Utc::now();
        let session = session_at(now - Duration::minutes(5));
        assert_eq!(
            live_session(Some(session.clone()), now, Duration::hours(1)),
            Some(session)
        );
    }

    #[test]
    fn live_session_drops_expired_sessions() {
        let now = Utc::now();
        let session = session_at(now - Duration::hours(2));
        assert_eq!(live_session(Some(session), now, Duration::hours(1)), None);
        assert_eq!(live_session(None, now, Duration::hours(1)), None);
    }
}
