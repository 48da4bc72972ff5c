use actix_web::{middleware::Logger, web, App, HttpServer};
use chrono::{DateTime, Utc};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod db;
mod models;

use config::Config;
use db::{Database, InitOutcome};

pub struct AppState {
    pub db: Arc<Database>,
    /// Server start time, reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(db),
            started_at: Utc::now(),
        }
    }
}

/// Create the notes schema if the store file is new.
///
/// A failure aborts startup unless `lenient` is set, in which case it is only
/// logged and later requests will surface the store errors.
fn prepare_database(db: &Database, lenient: bool) -> std::io::Result<()> {
    match db.initialize() {
        Ok(InitOutcome::Created) => Ok(()),
        Ok(InitOutcome::Existing) => {
            log::info!("Using existing database at {}", db.path().display());
            Ok(())
        }
        Err(e) if lenient => {
            log::error!("An error occurred while initializing the database: {}", e);
            log::warn!("Continuing startup without a verified notes schema");
            Ok(())
        }
        Err(e) => {
            log::error!("An error occurred while initializing the database: {}", e);
            Err(std::io::Error::other(format!(
                "failed to initialize database {}: {}",
                db.path().display(),
                e
            )))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("notes-backend v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();

    log::info!("Initializing database at {}", config.database_url);
    let db = Database::new(&config.database_url);
    prepare_database(&db, config.lenient_db_init)?;

    let bind_address = config.bind_address.clone();
    let port = config.port;
    let state = web::Data::new(AppState::new(db));

    log::info!("Starting server, listening on {}:{}", bind_address, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(controllers::configure)
    })
    .bind((bind_address.as_str(), port))?
    .run()
    .await
}
