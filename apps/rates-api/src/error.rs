//! # API Error Types
//!
//! HTTP status mapping for the application.
//!
//! ## Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Response Taxonomy                                 │
//! │                                                                         │
//! │  Business rejection (core Rejection)   → 200  ok:false + details       │
//! │    below threshold, restricted product,  NOT AN ERROR - never           │
//! │    no coverage, blackout                 reaches this module            │
//! │                                                                         │
//! │  Validation failure (this module)      → 400  ok:false + details       │
//! │    missing wrappers, non-JSON body       typed, testable               │
//! │                                                                         │
//! │  Internal failure (this module)        → 500  ok:false + generic       │
//! │    anything unexpected                   logged at error level         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed payloads get a typed 400 instead of collapsing into the
//! generic 500 path, so callers can tell a broken request from an outage.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use envios_core::ValidationError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Application-level errors that map directly to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The payload is structurally unusable (missing wrappers, bad JSON).
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Unexpected internal failure. The payload message is generic; the
    /// real cause goes to the log only.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, details) = match &self {
            ApiError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Internal(err) => {
                error!(?err, "Unhandled error while processing request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error processing request".to_string(),
                )
            }
        };

        let body = Json(json!({ "ok": false, "details": details }));
        (status, body).into_response()
    }
}
