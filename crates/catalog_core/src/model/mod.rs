//! Domain model for the product catalog.
//!
//! # Responsibility
//! - Define the canonical record shapes used by repository and HTTP layers.
//!
//! # Invariants
//! - Every stored product is identified by a store-assigned `ProductId`.
//! - Deletion is a hard delete; a deleted id is simply absent afterwards.

pub mod product;
