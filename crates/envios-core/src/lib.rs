//! # envios-core: Pure Rate-Resolution Logic for Envios
//!
//! This crate is the **heart** of the shipping quote service. It decides
//! which shipping options apply to an order as a pure function of the rate
//! catalog, an injected clock, and the shipment request.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Envios Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Checkout Platform (webhook caller)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ POST /shipping                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 rates-api (Axum application)                    │   │
//! │  │    payload extraction ──► typed ShipmentRequest                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ envios-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ normalize │  │ location  │  │restriction│  │ schedule  │  │   │
//! │  │   │  accents  │  │   tiers   │  │  filter   │  │  windows  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO WALL CLOCK • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ShipmentRequest, ShippingOption, Resolution)
//! - [`normalize`] - Accent/case-insensitive text canonicalization
//! - [`catalog`] - The externalized rate catalog (cities, prices, schedule)
//! - [`location`] - Destination tier classification
//! - [`restriction`] - Per-item allowed-city filter
//! - [`schedule`] - Service windows, holidays, and the year-end blackout
//! - [`clock`] - Injected time source
//! - [`resolver`] - The sequential resolution pipeline
//! - [`error`] - Catalog and request validation errors
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: resolution depends only on (catalog, clock, request)
//! 2. **No I/O**: network, file system and wall-clock access are FORBIDDEN here
//! 3. **Normalize first**: every city/region/category comparison is
//!    case- and accent-insensitive
//! 4. **Rejections are not errors**: a declined quote is a domain outcome,
//!    modeled as [`types::Rejection`], never as `Err`
//!
//! ## Example Usage
//!
//! ```rust
//! use envios_core::catalog::RateCatalog;
//! use envios_core::clock::FixedClock;
//! use envios_core::resolver::resolve;
//! use envios_core::types::{LineItem, Resolution, ShipmentRequest};
//!
//! let catalog = RateCatalog::default();
//! // Tuesday 2025-03-04 10:00 in Bogota (15:00 UTC)
//! let clock = FixedClock::from_ymd_hms(2025, 3, 4, 15, 0, 0);
//!
//! let request = ShipmentRequest {
//!     city: "Bogotá".to_string(),
//!     region: "Cundinamarca".to_string(),
//!     total_item_price: 100_000,
//!     items: vec![LineItem::named("Product A")],
//! };
//!
//! match resolve(&catalog, &clock, &request) {
//!     Resolution::Approved(options) => assert!(!options.is_empty()),
//!     Resolution::Rejected(reason) => panic!("unexpected: {reason:?}"),
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod clock;
pub mod error;
pub mod location;
pub mod normalize;
pub mod resolver;
pub mod restriction;
pub mod schedule;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use envios_core::RateCatalog` instead of
// `use envios_core::catalog::RateCatalog`

pub use catalog::RateCatalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CatalogError, ValidationError};
pub use resolver::resolve;
pub use types::{LineItem, LocationTier, Rejection, Resolution, ShipmentRequest, ShippingOption};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default order minimum in whole pesos (COP has no usable minor unit here).
///
/// ## Business Reason
/// Orders below this total are not worth the shipping cost; the storefront
/// shows a "minimum order" notice instead of rates. Overridable per catalog.
pub const DEFAULT_ORDER_THRESHOLD: i64 = 70_000;

/// UTC offset for America/Bogota in hours.
///
/// Colombia does not observe daylight saving time, so a fixed offset is
/// exact year-round and avoids carrying a timezone database.
pub const BOGOTA_UTC_OFFSET_HOURS: i32 = -5;
