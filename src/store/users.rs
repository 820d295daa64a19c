use chrono::Utc;
use sqlx::{Executor, Sqlite};

use crate::models::User;

const USER_COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at";

pub async fn list_users<'e, E>(executor: E) -> sqlx::Result<Vec<User>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, User>(&format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS))
        .fetch_all(executor)
        .await
}

/// `email` must already be normalized; the column is compared as-is.
pub async fn insert_user<'e, E>(
    executor: E,
    name: &str,
    email: &str,
    password_hash: &str,
) -> sqlx::Result<User>
where
    E: Executor<'e, Database = Sqlite>,
{
    let now = Utc::now();
    sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (name, email, password_hash, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)
         RETURNING {}",
        USER_COLUMNS
    ))
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await
}

pub async fn email_taken<'e, E>(executor: E, email: &str) -> sqlx::Result<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, (i64,)>("SELECT id FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}

pub async fn user_exists<'e, E>(executor: E, id: i64) -> sqlx::Result<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, (i64,)>("SELECT id FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, ResponseError};
    use crate::error::AppError;
    use crate::store::test_support::memory_pool;

    #[actix_rt::test]
    async fn test_insert_and_list_users() {
        let pool = memory_pool().await;
        assert!(list_users(&pool).await.unwrap().is_empty());

        let user = insert_user(&pool, "Alice", "alice@example.com", "hash")
            .await
            .unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.password_hash, "hash");

        assert_eq!(list_users(&pool).await.unwrap(), vec![user.clone()]);
        assert!(email_taken(&pool, "alice@example.com").await.unwrap());
        assert!(!email_taken(&pool, "bob@example.com").await.unwrap());
        assert!(user_exists(&pool, user.id).await.unwrap());
        assert!(!user_exists(&pool, user.id + 1).await.unwrap());
    }

    #[actix_rt::test]
    async fn test_duplicate_email_is_a_unique_violation() {
        let pool = memory_pool().await;
        insert_user(&pool, "Alice", "alice@example.com", "hash")
            .await
            .unwrap();

        let err = insert_user(&pool, "Alice Again", "alice@example.com", "hash")
            .await
            .unwrap_err();
        match &err {
            sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
            other => panic!("Unexpected error: {:?}", other),
        }

        let err = AppError::from(err);
        assert!(matches!(err, AppError::BadRequest(_)), "{:?}", err);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
