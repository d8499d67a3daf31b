use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Admin accounts are seeded out-of-band and only ever read at login.
/// The password is stored in plaintext: login is an acknowledged insecure
/// stub, not a designed auth subsystem.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Admin {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    pub fn new(username: String, email: String, password: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            email,
            password,
            created_at: Utc::now(),
        }
    }
}
