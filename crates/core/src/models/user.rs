//! User and session models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    /// False until the email address has been confirmed
    pub confirmed: bool,
}

impl User {
    pub fn new(email: String, display_name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            display_name,
            password_hash,
            created_at: Utc::now(),
            last_login: None,
            confirmed: true,
        }
    }

    pub fn unconfirmed(mut self) -> Self {
        self.confirmed = false;
        self
    }
}

/// Active session for a signed-in user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Lifetimes past the representable range expire at the far end of it
    pub fn new(user_id: Uuid, duration_hours: i64) -> Self {
        let now = Utc::now();
        let expires_at = chrono::Duration::try_hours(duration_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .unwrap_or(if duration_hours < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            });
        Self {
            id: Uuid::new_v4(),
            user_id,
            created_at: now,
            expires_at,
        }
    }

    pub fn is_valid(&self) -> bool {
        Utc::now() < self.expires_at
    }
}

/// What session-change listeners see: the session plus who owns it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub session_id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub display_name: String,
}

impl AuthSession {
    pub fn new(session: &Session, user: &User) -> Self {
        Self {
            session_id: session.id,
            user_id: user.id,
            email: user.email.clone(),
            display_name: user.display_name.clone(),
        }
    }
}
