//! HTTP error mapping.
//!
//! # Responsibility
//! - Translate repository results into response status codes.
//!
//! # Invariants
//! - Not-found is a 404 with an empty body.
//! - Storage faults surface as 500 and never leak SQL detail to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog_core::RepoError;
use log::error;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    /// Requested id has no corresponding record.
    NotFound,
    /// Underlying storage fault; not recovered, not retried.
    Storage(RepoError),
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Storage(err) => {
                error!("event=request_failed module=http status=error error={err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal storage failure" })),
                )
                    .into_response()
            }
        }
    }
}
