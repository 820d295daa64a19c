use crate::{
    error::AppError,
    models::{TaskInput, TaskPatch},
    store::{projects, tasks, users},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use log::info;
use sqlx::{SqliteConnection, SqlitePool};
use validator::Validate;

/// Retrieves every task, ordered by id.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Task` objects (empty if there are none).
/// - `500 Internal Server Error`: For database errors.
#[get("")]
pub async fn get_tasks(pool: web::Data<SqlitePool>) -> Result<impl Responder, AppError> {
    let tasks = tasks::list_tasks(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task.
///
/// ## Request Body:
/// A JSON object matching `TaskInput`:
/// - `title`: required, 1 to 255 characters.
/// - `description` (optional)
/// - `status` (optional): `pending` (default), `in_progress` or `done`.
/// - `priority` (optional): `low`, `medium` (default) or `high`.
/// - `due_date` (optional, `YYYY-MM-DD`)
/// - `project_id`, `assignee_id` (optional): must reference an existing project / user.
///
/// ## Responses:
/// - `201 Created`: Returns the newly created `Task` object as JSON.
/// - `400 Bad Request`: Malformed JSON, failed validation, or a dangling reference.
/// - `500 Internal Server Error`: For database errors.
#[post("")]
pub async fn create_task(
    pool: web::Data<SqlitePool>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    let input = task_data.into_inner().normalized();
    input.validate()?;

    let mut tx = pool.begin().await?;
    check_references(&mut tx, input.project_id, input.assignee_id).await?;
    let task = tasks::insert_task(&mut *tx, &input).await?;
    tx.commit().await?;

    info!("Created task {} ({})", task.id, task.title);
    Ok(HttpResponse::Created().json(task))
}

/// Updates an existing task.
///
/// Only the fields present in the body change. `description`, `due_date`,
/// `project_id` and `assignee_id` can be cleared with an explicit `null`.
///
/// ## Path Parameters:
/// - `id`: The id of the task to update.
///
/// ## Responses:
/// - `200 OK`: Returns the updated `Task` object as JSON.
/// - `400 Bad Request`: Malformed JSON, failed validation, or a dangling reference.
/// - `404 Not Found`: If the task with the given id does not exist.
/// - `500 Internal Server Error`: For database errors.
#[put("/{id}")]
pub async fn update_task(
    pool: web::Data<SqlitePool>,
    task_id: web::Path<i64>,
    task_data: web::Json<TaskPatch>,
) -> Result<impl Responder, AppError> {
    let patch = task_data.into_inner().normalized();
    patch.validate()?;
    let task_id = task_id.into_inner();

    // Read, check and write in one transaction so the row cannot change underneath us.
    let mut tx = pool.begin().await?;

    let current = tasks::find_task(&mut *tx, task_id)
        .await?
        .ok_or_else(|| task_not_found(task_id))?;
    let changed = current.patched(patch);

    check_references(&mut tx, changed.project_id, changed.assignee_id).await?;

    let task = tasks::update_task(&mut *tx, &changed)
        .await?
        .ok_or_else(|| task_not_found(task_id))?;
    tx.commit().await?;

    info!("Updated task {}", task.id);
    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task by its id.
///
/// ## Path Parameters:
/// - `id`: The id of the task to delete.
///
/// ## Responses:
/// - `204 No Content`: On successful deletion.
/// - `404 Not Found`: If the task with the given id does not exist.
/// - `500 Internal Server Error`: For database errors.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<SqlitePool>,
    task_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let task_id = task_id.into_inner();

    if !tasks::delete_task(pool.get_ref(), task_id).await? {
        return Err(task_not_found(task_id));
    }

    info!("Deleted task {}", task_id);
    Ok(HttpResponse::NoContent().finish())
}

fn task_not_found(task_id: i64) -> AppError {
    AppError::NotFound(format!("Task {} not found", task_id))
}

async fn check_references(
    conn: &mut SqliteConnection,
    project_id: Option<i64>,
    assignee_id: Option<i64>,
) -> Result<(), AppError> {
    if let Some(project_id) = project_id {
        if !projects::project_exists(&mut *conn, project_id).await? {
            return Err(AppError::BadRequest(format!(
                "Project {} does not exist",
                project_id
            )));
        }
    }
    if let Some(assignee_id) = assignee_id {
        if !users::user_exists(&mut *conn, assignee_id).await? {
            return Err(AppError::BadRequest(format!(
                "User {} does not exist",
                assignee_id
            )));
        }
    }
    Ok(())
}
