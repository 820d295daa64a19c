use chrono::Utc;
use sqlx::{Executor, Sqlite};

use crate::models::{Task, TaskInput};

const TASK_COLUMNS: &str = "id, title, description, status, priority, due_date, project_id, \
                            assignee_id, created_at, updated_at";

pub async fn list_tasks<'e, E>(executor: E) -> sqlx::Result<Vec<Task>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Task>(&format!("SELECT {} FROM tasks ORDER BY id", TASK_COLUMNS))
        .fetch_all(executor)
        .await
}

pub async fn find_task<'e, E>(executor: E, id: i64) -> sqlx::Result<Option<Task>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Task>(&format!("SELECT {} FROM tasks WHERE id = ?", TASK_COLUMNS))
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn insert_task<'e, E>(executor: E, input: &TaskInput) -> sqlx::Result<Task>
where
    E: Executor<'e, Database = Sqlite>,
{
    let now = Utc::now();
    sqlx::query_as::<_, Task>(&format!(
        "INSERT INTO tasks (title, description, status, priority, due_date, project_id, assignee_id, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING {}",
        TASK_COLUMNS
    ))
    .bind(&input.title)
    .bind(&input.description)
    .bind(input.status)
    .bind(input.priority)
    .bind(input.due_date)
    .bind(input.project_id)
    .bind(input.assignee_id)
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await
}

/// Overwrites every mutable column of the task with `task.id`.
/// Returns `None` if no such task exists.
pub async fn update_task<'e, E>(executor: E, task: &Task) -> sqlx::Result<Option<Task>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Task>(&format!(
        "UPDATE tasks
         SET title = ?, description = ?, status = ?, priority = ?, due_date = ?,
             project_id = ?, assignee_id = ?, updated_at = ?
         WHERE id = ?
         RETURNING {}",
        TASK_COLUMNS
    ))
    .bind(&task.title)
    .bind(&task.description)
    .bind(task.status)
    .bind(task.priority)
    .bind(task.due_date)
    .bind(task.project_id)
    .bind(task.assignee_id)
    .bind(task.updated_at)
    .bind(task.id)
    .fetch_optional(executor)
    .await
}

/// Returns `false` if there was nothing to delete.
pub async fn delete_task<'e, E>(executor: E, id: i64) -> sqlx::Result<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
