use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::sanitize::{normalize_email, normalize_line};

/// An account record. The password hash is loaded from the store but never
/// serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UserInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String, // only the bcrypt hash is persisted
}

impl UserInput {
    pub fn normalized(self) -> Self {
        Self {
            name: normalize_line(&self.name),
            email: normalize_email(&self.email),
            ..self
        }
    }
}
