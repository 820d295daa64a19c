//! The `taskhub` library crate.
//!
//! A small REST API over SQLite for projects, tasks and users. Requests flow
//! from the router (`routes::config`) to the handlers in `routes`, which call the
//! query functions in `store`. The main binary only reads configuration, opens
//! the pool and serves `build_app`.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod password;
pub mod routes;
pub mod sanitize;
pub mod store;

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App,
};
use sqlx::SqlitePool;

pub use crate::error::AppError;
pub use crate::password::PasswordHasher;

/// Builds the application: shared state, CORS, access logging, routes and the
/// JSON 404 fallback.
pub fn build_app(
    pool: SqlitePool,
    hasher: PasswordHasher,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(pool))
        .app_data(web::Data::new(hasher))
        .wrap(
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600),
        )
        .wrap(Logger::default())
        .configure(routes::config)
        .default_service(web::to(routes::not_found))
}
