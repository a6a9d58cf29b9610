//! Product repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and equality-filter APIs over `products` storage.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `get`/`update`/`delete` report absence through their return value, not
//!   through an error; HTTP is the sole layer that turns absence into 404.
//! - Filter matching is exact equality, never substring or case-folded.

use crate::db::DbError;
use crate::model::product::{NewProduct, Product, ProductId, ProductUpdate};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};

const PRODUCT_SELECT_SQL: &str = "SELECT
    id,
    name,
    category,
    available,
    price
FROM products";

const REQUIRED_COLUMNS: &[&str] = &["id", "name", "category", "available", "price"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for product persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    PoisonedConnection,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted product data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
            Self::PoisonedConnection => {
                write!(f, "storage connection lock was poisoned by a panic")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Equality-filter options for listing products.
///
/// Each populated field becomes one exact-equality predicate; the default
/// query lists the entire table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub available: Option<bool>,
}

impl ProductListQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn by_availability(available: bool) -> Self {
        Self {
            available: Some(available),
            ..Self::default()
        }
    }
}

/// Repository contract for product CRUD and filter operations.
pub trait ProductRepository {
    /// Inserts a new product and returns it with its store-assigned id.
    fn create_product(&self, input: &NewProduct) -> RepoResult<Product>;
    /// Fetches one product; `Ok(None)` when the id has no record.
    fn get_product(&self, id: ProductId) -> RepoResult<Option<Product>>;
    /// Merges the supplied fields into an existing record and returns the
    /// updated row; `Ok(None)` when the id has no record.
    fn update_product(&self, id: ProductId, update: &ProductUpdate) -> RepoResult<Option<Product>>;
    /// Removes one product; returns whether a record was actually deleted.
    fn delete_product(&self, id: ProductId) -> RepoResult<bool>;
    /// Lists products matching the query, in insertion (id) order.
    fn list_products(&self, query: &ProductListQuery) -> RepoResult<Vec<Product>>;
}

/// SQLite-backed product repository.
///
/// Owns its connection behind a mutex so one repository value can serve
/// concurrent HTTP handlers; each operation is a single locked unit of work
/// committed before the lock is released.
pub struct SqliteProductRepository {
    conn: Mutex<Connection>,
}

impl SqliteProductRepository {
    /// Wraps a migrated connection after verifying the schema it carries.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were never applied.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` when the schema does
    ///   not contain the shape this repository queries.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        verify_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> RepoResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| RepoError::PoisonedConnection)
    }
}

impl ProductRepository for SqliteProductRepository {
    fn create_product(&self, input: &NewProduct) -> RepoResult<Product> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO products (name, category, available, price)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                input.name.as_str(),
                input.category.as_str(),
                bool_to_int(input.available),
                input.price,
            ],
        )?;

        Ok(Product {
            id: conn.last_insert_rowid(),
            name: input.name.clone(),
            category: input.category.clone(),
            available: input.available,
            price: input.price,
        })
    }

    fn get_product(&self, id: ProductId) -> RepoResult<Option<Product>> {
        let conn = self.conn()?;
        fetch_product(&conn, id)
    }

    fn update_product(&self, id: ProductId, update: &ProductUpdate) -> RepoResult<Option<Product>> {
        let conn = self.conn()?;

        if let Some(name) = update.name.as_deref() {
            let changed = conn.execute(
                "UPDATE products SET name = ?1 WHERE id = ?2;",
                params![name, id],
            )?;
            if changed == 0 {
                return Ok(None);
            }
        }

        // A no-op update still reports whether the record exists.
        fetch_product(&conn, id)
    }

    fn delete_product(&self, id: ProductId) -> RepoResult<bool> {
        let conn = self.conn()?;
        let changed = conn.execute("DELETE FROM products WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn list_products(&self, query: &ProductListQuery) -> RepoResult<Vec<Product>> {
        let mut sql = format!("{PRODUCT_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(name) = &query.name {
            sql.push_str(" AND name = ?");
            bind_values.push(Value::Text(name.clone()));
        }

        if let Some(category) = &query.category {
            sql.push_str(" AND category = ?");
            bind_values.push(Value::Text(category.clone()));
        }

        if let Some(available) = query.available {
            sql.push_str(" AND available = ?");
            bind_values.push(Value::Integer(bool_to_int(available)));
        }

        sql.push_str(" ORDER BY id ASC;");

        let conn = self.conn()?;
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut products = Vec::new();

        while let Some(row) = rows.next()? {
            products.push(parse_product_row(row)?);
        }

        Ok(products)
    }
}

fn fetch_product(conn: &Connection, id: ProductId) -> RepoResult<Option<Product>> {
    let mut stmt = conn.prepare(&format!("{PRODUCT_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;

    if let Some(row) = rows.next()? {
        return Ok(Some(parse_product_row(row)?));
    }

    Ok(None)
}

fn parse_product_row(row: &Row<'_>) -> RepoResult<Product> {
    let available = match row.get::<_, i64>("available")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid available value `{other}` in products.available"
            )));
        }
    };

    Ok(Product {
        id: row.get("id")?,
        name: row.get("name")?,
        category: row.get("category")?,
        available,
        price: row.get("price")?,
    })
}

fn verify_schema(conn: &Connection) -> RepoResult<()> {
    let expected_version = crate::db::migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;

    if actual_version < expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "products")? {
        return Err(RepoError::MissingRequiredTable("products"));
    }

    for &column in REQUIRED_COLUMNS {
        if !column_exists(conn, "products", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "products",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM pragma_table_info(?1)
            WHERE name = ?2
        );",
        [table, column],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
