//! Core domain logic and persistence for the product catalog service.
//! This crate is the single source of truth for catalog storage behavior.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::product::{
    parse_available_flag, NewProduct, Product, ProductId, ProductUpdate,
};
pub use repo::product_repo::{
    ProductListQuery, ProductRepository, RepoError, RepoResult, SqliteProductRepository,
};
pub use service::product_service::ProductService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
