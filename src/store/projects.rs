use chrono::Utc;
use sqlx::{Executor, Sqlite};

use crate::models::{Project, ProjectInput};

const PROJECT_COLUMNS: &str =
    "id, name, description, start_date, end_date, created_at, updated_at";

pub async fn list_projects<'e, E>(executor: E) -> sqlx::Result<Vec<Project>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Project>(&format!(
        "SELECT {} FROM projects ORDER BY id",
        PROJECT_COLUMNS
    ))
    .fetch_all(executor)
    .await
}

pub async fn insert_project<'e, E>(executor: E, input: &ProjectInput) -> sqlx::Result<Project>
where
    E: Executor<'e, Database = Sqlite>,
{
    let now = Utc::now();
    sqlx::query_as::<_, Project>(&format!(
        "INSERT INTO projects (name, description, start_date, end_date, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?)
         RETURNING {}",
        PROJECT_COLUMNS
    ))
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.start_date)
    .bind(input.end_date)
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await
}

pub async fn project_exists<'e, E>(executor: E, id: i64) -> sqlx::Result<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, (i64,)>("SELECT id FROM projects WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}
