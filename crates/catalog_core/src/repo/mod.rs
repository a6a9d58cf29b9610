//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for catalog products.
//! - Isolate SQLite query details from service/HTTP orchestration.
//!
//! # Invariants
//! - Absence of a record by id is a normal result (`None`/`false`), never an
//!   error; only genuine storage faults surface as `RepoError`.
//! - Every mutating operation is durably committed before it returns.

pub mod product_repo;
