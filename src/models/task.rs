use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::sanitize::{normalize_line, normalize_text};

/// Represents the status of a task.
/// Stored as snake_case text in the `tasks.status` column.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is yet to be started.
    #[default]
    Pending,
    /// Task is currently being worked on.
    InProgress,
    /// Task is completed.
    Done,
}

/// Represents the priority of a task.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// Input structure for creating a task.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// The title of the task.
    /// Must be between 1 and 255 characters.
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// An optional description for the task.
    pub description: Option<String>,

    /// Defaults to `pending` when omitted.
    #[serde(default)]
    pub status: TaskStatus,

    /// Defaults to `medium` when omitted.
    #[serde(default)]
    pub priority: TaskPriority,

    /// Optional due date (`YYYY-MM-DD`).
    pub due_date: Option<NaiveDate>,

    /// The project this task belongs to, if any.
    pub project_id: Option<i64>,

    /// The user responsible for this task, if any.
    pub assignee_id: Option<i64>,
}

impl TaskInput {
    pub fn normalized(self) -> Self {
        Self {
            title: normalize_line(&self.title),
            description: normalize_text(self.description),
            ..self
        }
    }
}

/// Partial update for a task.
///
/// A field left out of the payload keeps its current value. For nullable fields,
/// an explicit `null` clears the value, which is why they are `Option<Option<_>>`.
/// `title`, `status` and `priority` always hold a value, so `null` is rejected.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct TaskPatch {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "non_null")]
    pub status: Option<TaskStatus>,

    #[serde(default, deserialize_with = "non_null")]
    pub priority: Option<TaskPriority>,

    #[serde(default, deserialize_with = "nullable")]
    pub due_date: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "nullable")]
    pub project_id: Option<Option<i64>>,

    #[serde(default, deserialize_with = "nullable")]
    pub assignee_id: Option<Option<i64>>,
}

impl TaskPatch {
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.map(|title| normalize_line(&title)),
            description: self.description.map(normalize_text),
            ..self
        }
    }
}

/// Distinguishes a field that is present but `null` from one that is absent.
/// Paired with `#[serde(default)]`, which covers the absent case.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Accepts a present value only. Absence is handled by `#[serde(default)]`.
fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)?
        .map(Some)
        .ok_or_else(|| D::Error::custom("field cannot be null"))
}

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
    pub project_id: Option<i64>,
    pub assignee_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Returns a copy of this task with `patch` applied and `updated_at` bumped.
    pub fn patched(&self, patch: TaskPatch) -> Self {
        Self {
            id: self.id,
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            description: patch
                .description
                .unwrap_or_else(|| self.description.clone()),
            status: patch.status.unwrap_or(self.status),
            priority: patch.priority.unwrap_or(self.priority),
            due_date: patch.due_date.unwrap_or(self.due_date),
            project_id: patch.project_id.unwrap_or(self.project_id),
            assignee_id: patch.assignee_id.unwrap_or(self.assignee_id),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_task() -> Task {
        let now = Utc::now();
        Task {
            id: 7,
            title: "Draft roadmap".to_string(),
            description: Some("First pass".to_string()),
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            due_date: NaiveDate::from_ymd_opt(2025, 4, 1),
            project_id: Some(1),
            assignee_id: Some(2),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_task_input_defaults() {
        let input: TaskInput = serde_json::from_value(json!({ "title": "Draft roadmap" })).unwrap();

        assert_eq!(input.status, TaskStatus::Pending);
        assert_eq!(input.priority, TaskPriority::Medium);
        assert!(input.project_id.is_none());
        assert!(input.assignee_id.is_none());
    }

    #[test]
    fn test_task_input_validation() {
        let input = TaskInput {
            title: "   ".to_string(),
            description: None,
            status: TaskStatus::Pending,
            priority: TaskPriority::High,
            due_date: None,
            project_id: None,
            assignee_id: None,
        }
        .normalized();
        assert!(input.validate().is_err(), "Blank title should be rejected");

        let input: TaskInput =
            serde_json::from_value(json!({ "title": "a".repeat(256) })).unwrap();
        assert!(input.validate().is_err(), "Overly long title should be rejected");

        let input: TaskInput = serde_json::from_value(json!({
            "title": "  Review   pull request ",
            "status": "in_progress",
            "priority": "high",
            "due_date": "2025-03-30"
        }))
        .unwrap();
        let input = input.normalized();
        assert!(input.validate().is_ok());
        assert_eq!(input.title, "Review pull request");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<TaskInput, _> =
            serde_json::from_value(json!({ "title": "x", "status": "archived" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_distinguishes_null_from_absent() {
        let patch: TaskPatch = serde_json::from_value(json!({
            "status": "done",
            "description": null
        }))
        .unwrap();

        assert_eq!(patch.status, Some(TaskStatus::Done));
        assert_eq!(patch.description, Some(None));
        assert_eq!(patch.project_id, None);
        assert_eq!(patch.title, None);
    }

    #[test]
    fn test_patch_rejects_null_on_required_fields() {
        for field in ["title", "status", "priority"] {
            let mut payload = serde_json::Map::new();
            payload.insert(field.to_string(), serde_json::Value::Null);
            let result: Result<TaskPatch, _> =
                serde_json::from_value(serde_json::Value::Object(payload));
            let err = result.expect_err(field);
            assert!(err.to_string().contains("cannot be null"), "{}: {}", field, err);
        }
    }

    #[test]
    fn test_patched_keeps_untouched_fields() {
        let task = sample_task();
        let patch: TaskPatch = serde_json::from_value(json!({
            "status": "done",
            "assignee_id": null
        }))
        .unwrap();

        let updated = task.patched(patch);
        assert_eq!(updated.id, task.id);
        assert_eq!(updated.title, "Draft roadmap");
        assert_eq!(updated.description.as_deref(), Some("First pass"));
        assert_eq!(updated.status, TaskStatus::Done);
        assert_eq!(updated.project_id, Some(1));
        assert_eq!(updated.assignee_id, None);
        assert_eq!(updated.created_at, task.created_at);
        assert!(updated.updated_at >= task.updated_at);
    }

    #[test]
    fn test_patch_validation() {
        let patch = TaskPatch {
            title: Some(" ".to_string()),
            ..Default::default()
        }
        .normalized();
        assert!(patch.validate().is_err());

        assert!(TaskPatch::default().validate().is_ok());
    }
}
