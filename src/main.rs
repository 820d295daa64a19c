use actix_web::HttpServer;
use log::info;
use std::io;
use taskhub::{build_app, config::Config, db, PasswordHasher};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config =
        Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let pool = db::connect(&config.database_url, config.database_max_connections)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    db::migrate(&pool)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let hasher = PasswordHasher::new(config.bcrypt_cost);

    info!("Starting taskhub server at {}", config.server_url());
    HttpServer::new(move || build_app(pool.clone(), hasher))
        .bind((config.server_host.as_str(), config.server_port))?
        .run()
        .await
}
