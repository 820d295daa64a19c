use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::sanitize::{normalize_line, normalize_text};

/// A named container grouping related tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /projects`.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_date_range", skip_on_field_errors = false))]
pub struct ProjectInput {
    /// Must be between 1 and 255 characters.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    /// Must not precede `start_date` when both are given.
    pub end_date: Option<NaiveDate>,
}

impl ProjectInput {
    pub fn normalized(self) -> Self {
        Self {
            name: normalize_line(&self.name),
            description: normalize_text(self.description),
            ..self
        }
    }
}

fn validate_date_range(input: &ProjectInput) -> Result<(), ValidationError> {
    match (input.start_date, input.end_date) {
        (Some(start), Some(end)) if end < start => {
            let mut err = ValidationError::new("date_range");
            err.message = Some("end_date must not be earlier than start_date".into());
            Err(err)
        }
        _ => Ok(()),
    }
}
