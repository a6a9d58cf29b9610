//! Product resource handlers and router assembly.
//!
//! # Responsibility
//! - Parse path/query/body input, invoke the product service, serialize the
//!   result.
//!
//! # Invariants
//! - Handlers hold no cross-request state; everything flows through
//!   [`AppState`].
//! - `GET /products` is one handler that resolves its filter from the query
//!   string with the fixed precedence `name`, then `category`, then
//!   `available`. Only the first present parameter applies.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use catalog_core::{
    parse_available_flag, Product, ProductId, ProductListQuery, ProductUpdate,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// Builds the catalog router over the given application state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/products", get(list_products))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": catalog_core::core_version(),
    }))
}

/// Query parameters accepted by `GET /products`.
///
/// `available` stays textual here: the wire contract compares it against the
/// exact literal `"True"`, so parsing happens in [`resolve_filter`] rather
/// than in serde.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    name: Option<String>,
    category: Option<String>,
    available: Option<String>,
}

async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let query = resolve_filter(&params);
    let products = state.service.list_products(&query)?;
    Ok(Json(products))
}

fn resolve_filter(params: &ListParams) -> ProductListQuery {
    if let Some(name) = &params.name {
        return ProductListQuery::by_name(name.clone());
    }
    if let Some(category) = &params.category {
        return ProductListQuery::by_category(category.clone());
    }
    if let Some(available) = &params.available {
        return ProductListQuery::by_availability(parse_available_flag(available));
    }
    ProductListQuery::default()
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, ApiError> {
    let product = state.service.get_product(id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(product))
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(update): Json<ProductUpdate>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .service
        .update_product(id, &update)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(product))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode, ApiError> {
    if state.service.delete_product(id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
