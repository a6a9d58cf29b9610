//! Product use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for HTTP handlers and test harnesses.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass the repository contract.
//! - Service layer remains storage-agnostic.

use crate::model::product::{NewProduct, Product, ProductId, ProductUpdate};
use crate::repo::product_repo::{ProductListQuery, ProductRepository, RepoResult};

/// Use-case service wrapper for product CRUD operations.
///
/// This is the storage-access capability handed to the HTTP layer at
/// construction time; it is built once at startup and dropped at shutdown.
pub struct ProductService<R: ProductRepository> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new product and returns it with its assigned id.
    pub fn create_product(&self, input: &NewProduct) -> RepoResult<Product> {
        self.repo.create_product(input)
    }

    /// Gets one product by id; absence is `Ok(None)`.
    pub fn get_product(&self, id: ProductId) -> RepoResult<Option<Product>> {
        self.repo.get_product(id)
    }

    /// Applies a partial update; only supplied fields are merged.
    ///
    /// Returns the updated record, or `Ok(None)` when the id has no record.
    pub fn update_product(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> RepoResult<Option<Product>> {
        self.repo.update_product(id, update)
    }

    /// Deletes one product; returns whether a record was removed.
    pub fn delete_product(&self, id: ProductId) -> RepoResult<bool> {
        self.repo.delete_product(id)
    }

    /// Lists products matching the equality-filter query.
    pub fn list_products(&self, query: &ProductListQuery) -> RepoResult<Vec<Product>> {
        self.repo.list_products(query)
    }
}
