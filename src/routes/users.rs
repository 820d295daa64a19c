use crate::{error::AppError, models::UserInput, password::PasswordHasher, store::users};
use actix_web::{get, post, web, HttpResponse, Responder};
use log::info;
use sqlx::SqlitePool;
use validator::Validate;

/// Lists every user. Password hashes are never part of the response.
#[get("")]
pub async fn list_users(pool: web::Data<SqlitePool>) -> Result<impl Responder, AppError> {
    let users = users::list_users(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Register a new user
///
/// The email is lowercased before the uniqueness check, and the password is stored
/// as a bcrypt hash.
#[post("")]
pub async fn create_user(
    pool: web::Data<SqlitePool>,
    hasher: web::Data<PasswordHasher>,
    user_data: web::Json<UserInput>,
) -> Result<impl Responder, AppError> {
    let input = user_data.into_inner().normalized();
    input.validate()?;

    if users::email_taken(pool.get_ref(), &input.email).await? {
        return Err(AppError::BadRequest("Email already registered".into()));
    }

    // bcrypt is deliberately slow, keep it off the worker thread
    let hasher = *hasher.get_ref();
    let password = input.password;
    let password_hash = web::block(move || hasher.hash(&password))
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))??;

    let user = users::insert_user(pool.get_ref(), &input.name, &input.email, &password_hash).await?;
    info!("Created user {}", user.id);

    Ok(HttpResponse::Created().json(user))
}
