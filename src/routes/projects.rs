use crate::{
    error::AppError,
    models::ProjectInput,
    store::projects as store,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use log::info;
use sqlx::SqlitePool;
use validator::Validate;

/// Lists every project.
///
/// ## Responses:
/// - `200 OK`: JSON array of `Project` objects ordered by id (empty if there are none).
/// - `500 Internal Server Error`: For database errors.
#[get("")]
pub async fn list_projects(pool: web::Data<SqlitePool>) -> Result<impl Responder, AppError> {
    let projects = store::list_projects(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(projects))
}

/// Creates a new project.
///
/// ## Request Body:
/// - `name`: required, 1 to 255 characters.
/// - `description` (optional)
/// - `start_date`, `end_date` (optional, `YYYY-MM-DD`): `end_date` may not precede `start_date`.
///
/// ## Responses:
/// - `201 Created`: The created `Project`.
/// - `400 Bad Request`: Malformed JSON or failed validation.
#[post("")]
pub async fn create_project(
    pool: web::Data<SqlitePool>,
    project_data: web::Json<ProjectInput>,
) -> Result<impl Responder, AppError> {
    let input = project_data.into_inner().normalized();
    input.validate()?;

    let project = store::insert_project(pool.get_ref(), &input).await?;
    info!("Created project {} ({})", project.id, project.name);

    Ok(HttpResponse::Created().json(project))
}
