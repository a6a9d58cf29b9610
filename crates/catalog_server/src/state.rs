//! Shared application state for HTTP handlers.
//!
//! # Responsibility
//! - Hold the storage-access capability handed to the router at startup.
//!
//! # Invariants
//! - State is created once in `main` and dropped at shutdown; there is no
//!   module-level storage handle anywhere in the server.

use catalog_core::{ProductService, SqliteProductRepository};
use std::sync::Arc;

/// Cloneable handle to the per-process service instance.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ProductService<SqliteProductRepository>>,
}

impl AppState {
    pub fn new(service: ProductService<SqliteProductRepository>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
