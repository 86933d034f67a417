//! # Routing and Handlers
//!
//! The HTTP surface: one business endpoint plus a liveness probe.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /shipping   webhook body → quote or business rejection (200)     │
//! │  GET  /health     liveness probe                                        │
//! │                                                                         │
//! │  Status codes:                                                          │
//! │    200  quote computed (ok:true) or declined for a business reason      │
//! │         (ok:false + details) - a declined quote is not an HTTP error    │
//! │    400  payload missing required structure (typed validation)           │
//! │    500  unexpected internal failure                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use envios_core::{resolve, Resolution, ShippingOption, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::payload::WebhookPayload;
use crate::state::AppState;

// =============================================================================
// Router
// =============================================================================

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/shipping", post(quote_shipping))
        .route("/health", get(health_handler))
        .with_state(state)
}

// =============================================================================
// Response Types
// =============================================================================

/// Webhook response envelope. Field names are part of the platform
/// contract and must not change.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<QuoteData>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteData {
    pub shipping_results: Vec<ShippingOption>,
}

impl QuoteResponse {
    fn approved(options: Vec<ShippingOption>) -> Self {
        QuoteResponse {
            ok: true,
            data: Some(QuoteData {
                shipping_results: options,
            }),
            details: None,
        }
    }

    fn rejected(details: String) -> Self {
        QuoteResponse {
            ok: false,
            data: None,
            details: Some(details),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Liveness probe.
async fn health_handler() -> impl IntoResponse {
    "OK"
}

/// Computes a shipping quote from a platform webhook.
async fn quote_shipping(
    State(state): State<AppState>,
    payload: Result<Json<WebhookPayload>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    // Non-JSON or wrongly-typed bodies become a 400, not axum's default
    let Json(payload) = payload.map_err(|rejection| {
        ApiError::Validation(ValidationError::MalformedBody {
            reason: rejection.body_text(),
        })
    })?;

    let request = payload.into_request()?;

    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        city = %request.city,
        region = %request.region,
        total = request.total_item_price,
        items = request.items.len(),
        "Resolving shipping quote"
    );

    let response = match resolve(state.catalog(), state.clock(), &request) {
        Resolution::Approved(options) => {
            info!(%request_id, options = options.len(), "Quote approved");
            QuoteResponse::approved(options)
        }
        Resolution::Rejected(rejection) => {
            info!(%request_id, reason = %rejection.message(), "Quote rejected");
            QuoteResponse::rejected(rejection.message())
        }
    };

    Ok(Json(response))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approved_envelope_shape() {
        let response = QuoteResponse::approved(vec![ShippingOption {
            method: "Envío Bogotá".to_string(),
            price: 8000,
            service_id: 10001,
            service_name: "Envío Bogotá (24 - 48 horas)".to_string(),
        }]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["data"]["shipping_results"][0]["service_id"], 10001);
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_rejected_envelope_shape() {
        let response = QuoteResponse::rejected("Shipping not available".to_string());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["details"], "Shipping not available");
        assert!(json.get("data").is_none());
    }
}
