#![allow(dead_code)]

use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use taskhub::db;

/// bcrypt's minimum cost, so user creation stays fast in tests.
pub const TEST_BCRYPT_COST: u32 = 4;

/// A fresh, migrated in-memory database. Each call gets its own database.
pub async fn test_pool() -> SqlitePool {
    let pool = db::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory database");
    db::migrate(&pool)
        .await
        .expect("Failed to apply migrations");
    pool
}

/// Sends `req` and returns the status and the body parsed as JSON
/// (`Value::Null` for an empty body).
pub async fn send<S, B>(app: &S, req: actix_http::Request) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;

    if body.is_empty() {
        return (status, Value::Null);
    }
    let json = serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "Response body is not JSON ({}). Status: {}. Body: {}",
            e,
            status,
            String::from_utf8_lossy(&body)
        )
    });
    (status, json)
}

pub async fn create_user<S, B>(app: &S, name: &str, email: &str) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({
            "name": name,
            "email": email,
            "password": "senha123"
        }))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "Failed to create user: {}", body);
    body
}

pub async fn create_project<S, B>(app: &S, name: &str) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/projects")
        .set_json(json!({ "name": name }))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "Failed to create project: {}", body);
    body
}

pub async fn create_task<S, B>(app: &S, payload: Value) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/tasks")
        .set_json(payload)
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "Failed to create task: {}", body);
    body
}

pub async fn list<S, B>(app: &S, uri: &str) -> Vec<Value>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::get().uri(uri).to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::OK, "Failed to list {}: {}", uri, body);
    match body {
        Value::Array(items) => items,
        other => panic!("Expected a JSON array from {}, got {}", uri, other),
    }
}
