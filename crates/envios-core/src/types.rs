//! # Domain Types
//!
//! Core domain types used throughout the quote service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ShipmentRequest │   │    LineItem     │   │ ShippingOption  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  city           │   │  name           │   │  method         │       │
//! │  │  region         │   │  category?      │   │  price          │       │
//! │  │  total price    │   │  allowed_cities?│   │  service_id     │       │
//! │  │  items          │   │                 │   │  service_name   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  LocationTier   │   │   Resolution    │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  BogotaMetro    │   │  Approved(opts) │                             │
//! │  │  NearBogota     │   │  Rejected(why)  │                             │
//! │  │  Coastal        │   └─────────────────┘                             │
//! │  │  OtherRegion    │                                                   │
//! │  │  Unclassified   │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All entities here are request-scoped: created when a webhook arrives,
//! dropped when the response is written. Nothing persists.

use serde::{Deserialize, Serialize};

use crate::catalog::MonthDay;

// =============================================================================
// Shipment Request
// =============================================================================

/// A normalized shipment quote request.
///
/// The HTTP layer extracts this from the platform webhook payload; the core
/// never sees the wrapper keys. Prices are whole pesos (no minor units).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentRequest {
    /// Destination city, as entered by the customer (raw, un-normalized).
    pub city: String,

    /// Destination department/region (raw, un-normalized).
    pub region: String,

    /// Sum of item prices in whole pesos.
    pub total_item_price: i64,

    /// Ordered line items.
    pub items: Vec<LineItem>,
}

/// One line item of the order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Display name, used in rejection messages.
    pub name: String,

    /// Product category, if the platform sent one. Drives reserva detection.
    pub category: Option<String>,

    /// Raw "allowed cities" restriction value, if the product carries one.
    /// Comma/"y"-separated; parsed by [`crate::normalize::split_city_list`].
    pub allowed_cities: Option<String>,
}

impl LineItem {
    /// An unrestricted item with just a name. Mostly useful in tests and
    /// examples.
    pub fn named(name: &str) -> Self {
        LineItem {
            name: name.to_string(),
            category: None,
            allowed_cities: None,
        }
    }
}

// =============================================================================
// Location Tier
// =============================================================================

/// The five mutually exclusive destination classes.
///
/// ## Classification Priority
/// ```text
/// BogotaMetro > NearBogota > Coastal > OtherRegion > Unclassified
/// ```
/// First match wins, so exactly one tier applies to any destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationTier {
    /// Destination matches the Bogotá spelling-variant set.
    BogotaMetro,

    /// Nearby municipality, or anywhere in Cundinamarca.
    NearBogota,

    /// The coastal pair (Barranquilla/Cartagena by default).
    Coastal,

    /// Any other recognized Colombian department.
    OtherRegion,

    /// Nothing matched - no shipping available.
    Unclassified,
}

impl std::fmt::Display for LocationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationTier::BogotaMetro => write!(f, "bogota_metro"),
            LocationTier::NearBogota => write!(f, "near_bogota"),
            LocationTier::Coastal => write!(f, "coastal"),
            LocationTier::OtherRegion => write!(f, "other_region"),
            LocationTier::Unclassified => write!(f, "unclassified"),
        }
    }
}

// =============================================================================
// Shipping Option
// =============================================================================

/// One shipping method offered for the order.
///
/// Serialized verbatim into the webhook response under
/// `data.shipping_results`, so field names match the platform contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
    /// Short method label (e.g. "Envío Bogotá").
    pub method: String,

    /// Price in whole pesos.
    pub price: i64,

    /// Fixed service id (10001-10006). Ids are unique across the catalog.
    pub service_id: i64,

    /// Display string shown at checkout, including the delivery promise.
    pub service_name: String,
}

// =============================================================================
// Resolution Outcome
// =============================================================================

/// Why a quote was declined.
///
/// A rejection is a legitimate business outcome, not a fault: the HTTP layer
/// maps every variant to a 200 response with `ok: false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The recurring year-end blackout is active; the warehouse is closed.
    /// Carries the configured resume date so the message stays in sync
    /// with the catalog's blackout window.
    Blackout { resume: MonthDay },

    /// Order total is below the configured minimum.
    BelowThreshold { threshold: i64 },

    /// A line item's allowed-cities restriction excludes the destination.
    /// Fail-fast: names the first offending product only.
    RestrictedProduct { product: String },

    /// Destination did not classify into any serviced tier.
    NoCoverage,
}

impl Rejection {
    /// Customer-facing message for this rejection.
    ///
    /// Wording is part of the storefront contract; the checkout displays
    /// these strings verbatim.
    pub fn message(&self) -> String {
        match self {
            Rejection::Blackout { resume } => {
                format!(
                    "We are closed for the end-of-year holidays. \
                     Shipping resumes on {resume}."
                )
            }
            Rejection::BelowThreshold { threshold } => format!(
                "Total item price must be greater than {threshold} to view shipping options"
            ),
            Rejection::RestrictedProduct { product } => {
                format!("Product '{product}' cannot be shipped to your city")
            }
            Rejection::NoCoverage => "Shipping not available for your location".to_string(),
        }
    }
}

/// The outcome of running the resolution pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Shipping is available; at least one option is always present.
    Approved(Vec<ShippingOption>),

    /// Quote declined for a business reason.
    Rejected(Rejection),
}

impl Resolution {
    /// True if the quote succeeded.
    pub fn is_approved(&self) -> bool {
        matches!(self, Resolution::Approved(_))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        let rej = Rejection::BelowThreshold { threshold: 70_000 };
        assert_eq!(
            rej.message(),
            "Total item price must be greater than 70000 to view shipping options"
        );

        let rej = Rejection::RestrictedProduct {
            product: "Product A".to_string(),
        };
        assert!(rej.message().contains("Product A"));
    }

    #[test]
    fn test_shipping_option_wire_shape() {
        let option = ShippingOption {
            method: "Envío Bogotá".to_string(),
            price: 8000,
            service_id: 10001,
            service_name: "Envío Bogotá (24 - 48 horas)".to_string(),
        };
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["service_id"], 10001);
        assert_eq!(json["price"], 8000);
        assert_eq!(json["method"], "Envío Bogotá");
    }

    #[test]
    fn test_resolution_is_approved() {
        assert!(Resolution::Approved(vec![]).is_approved());
        assert!(!Resolution::Rejected(Rejection::NoCoverage).is_approved());
    }
}
