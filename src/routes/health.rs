use crate::{db, error::AppError};
use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;

/// Health check endpoint
///
/// Pings the database and returns the current status of the API and timestamp.
#[get("/health")]
pub async fn health(pool: web::Data<SqlitePool>) -> Result<impl Responder, AppError> {
    db::ping(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now()
    })))
}
