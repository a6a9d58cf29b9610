//! Catalog server binary.
//!
//! # Responsibility
//! - Initialize logging, open and migrate the database, then serve the
//!   catalog router until the process is stopped.
//!
//! # Configuration
//! - `CATALOG_DB` — SQLite database path (default `catalog.db`).
//! - `CATALOG_ADDR` — bind address (default `127.0.0.1:8080`).
//! - `CATALOG_LOG_DIR` — log directory (default `<cwd>/logs`).

use catalog_core::db::open_db;
use catalog_core::{
    default_log_level, init_logging, ProductService, SqliteProductRepository,
};
use catalog_server::{build_router, AppState};
use log::info;
use std::env;
use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let log_dir = match env::var("CATALOG_LOG_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir()?.join("logs"),
    };
    let log_dir = log_dir
        .to_str()
        .ok_or("log directory must be valid UTF-8")?
        .to_string();
    init_logging(default_log_level(), &log_dir)?;

    let db_path = env::var("CATALOG_DB").unwrap_or_else(|_| "catalog.db".to_string());
    let conn = open_db(&db_path)?;
    let repo = SqliteProductRepository::try_new(conn)?;
    let state = AppState::new(ProductService::new(repo));

    let addr: SocketAddr = env::var("CATALOG_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("event=server_start module=http status=ok addr={addr} db={db_path}");

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
