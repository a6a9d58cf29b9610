//! HTTP layer for the product catalog service.
//! Exposes the read/update/delete/list surface over `catalog_core`.

pub mod error;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
