use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const USERNAME_MAX_CHARS: usize = 50;
pub const PASSWORD_MIN_CHARS: usize = 8;
pub const PASSWORD_MAX_CHARS: usize = 128;

/// Public view of an admin; the password hash never leaves the store adapter.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Admin {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,
    #[schema(example = "admin")]
    pub username: String,
}

/// Admin row including its stored PHC hash, used only for login.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<AdminCredentials> for Admin {
    fn from(c: AdminCredentials) -> Self {
        Self {
            id: c.id,
            username: c.username,
        }
    }
}

/// Plaintext entry of the static fallback admin list.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedAdmin {
    pub username: String,
    pub password: String,
}
