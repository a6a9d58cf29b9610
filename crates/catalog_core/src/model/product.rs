//! Product domain model.
//!
//! # Responsibility
//! - Define the stored catalog record and the id-less construction input.
//! - Define the explicit partial-update shape accepted over HTTP.
//!
//! # Invariants
//! - `id` is assigned by the storage layer on insert and never changes.
//! - No field constraints beyond type: empty strings and duplicate names
//!   across records are accepted.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a catalog product.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProductId = i64;

/// Canonical catalog record as persisted and served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned row id, unique across the table lifetime.
    pub id: ProductId,
    /// Free-text display name.
    pub name: String,
    /// Free-text category label.
    pub category: String,
    /// Whether the product is currently available.
    pub available: bool,
    /// Price as an integer quantity; non-negative by convention only.
    pub price: i64,
}

/// Construction input for a product that does not yet have an id.
///
/// The store assigns the id on commit; callers receive the full [`Product`]
/// back from the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub available: bool,
    pub price: i64,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        available: bool,
        price: i64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            available,
            price,
        }
    }
}

/// Partial-update payload: only supplied fields are merged into the record.
///
/// `name` is the only field the update surface exposes. Unknown keys in an
/// incoming body are ignored rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
}

impl ProductUpdate {
    /// Returns true when no field is supplied, making the update a no-op.
    pub fn is_noop(&self) -> bool {
        self.name.is_none()
    }
}

/// Parses the textual availability flag used by query parameters and
/// scenario tables.
///
/// The exact literal `"True"` means true; every other string, including
/// `"true"` and `"TRUE"`, means false. This exact-string comparison is a
/// documented convention of the catalog wire contract and must not be
/// loosened to case-insensitive parsing.
pub fn parse_available_flag(value: &str) -> bool {
    value == "True"
}
