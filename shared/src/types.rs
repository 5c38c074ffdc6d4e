use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    PlantAdmin,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::PlantAdmin => "plant_admin",
            Role::User => "user",
        }
    }

    /// Human label used in greetings: the wire name with `_` shown as a space.
    pub fn display_name(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn all() -> &'static [Role] {
        &[Role::SuperAdmin, Role::PlantAdmin, Role::User]
    }

    /// Lenient parse; anything unrecognised lands on the default `User` role.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "super_admin" => Role::SuperAdmin,
            "plant_admin" => Role::PlantAdmin,
            _ => Role::User,
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::from_wire(&raw))
    }
}

// ============================================================================
// Domain Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub company: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: SessionUser,
    pub signed_in_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(user: SessionUser) -> Self {
        Self {
            user,
            signed_in_at: Utc::now(),
        }
    }

    /// Expired once `lifetime` has passed, or when stamped later than `now`.
    pub fn is_expired(&self, now: DateTime<Utc>, lifetime: Duration) -> bool {
        let age = now - self.signed_in_at;
        age < Duration::zero() || age >= lifetime
    }
}

/// Remembered sign-in fields. `email` holds whatever identifier was typed,
/// email or username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub email: String,
    pub password: String,
}

// ============================================================================
// API Request Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
    pub company: String,
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoginResponse {
    pub fn accepted(user: SessionUser) -> Self {
        Self {
            success: true,
            user: Some(user),
            error: None,
        }
    }

    pub fn rejected(error: Option<String>) -> Self {
        Self {
            success: false,
            user: None,
            error,
        }
    }

    /// The signed-in user, only when the server both reported success and sent one.
    pub fn authenticated_user(&self) -> Option<&SessionUser> {
        if self.success {
            self.user.as_ref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }
}
