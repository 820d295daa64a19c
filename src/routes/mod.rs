pub mod health;
pub mod projects;
pub mod tasks;
pub mod users;

use crate::error::AppError;
use actix_web::{web, HttpRequest, HttpResponse};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(health::health)
        .service(
            web::scope("/projects")
                .service(projects::list_projects)
                .service(projects::create_project),
        )
        .service(
            web::scope("/tasks")
                .service(tasks::get_tasks)
                .service(tasks::create_task)
                .service(tasks::update_task)
                .service(tasks::delete_task),
        )
        .service(
            web::scope("/users")
                .service(users::list_users)
                .service(users::create_user),
        );
}

/// Fallback for anything `config` does not route.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}

/// Body parse failures become JSON 400s instead of actix's plain-text default.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// A path id that does not parse cannot name an existing record.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        AppError::NotFound(format!("No resource at {}: {}", req.path(), err)).into()
    })
}
