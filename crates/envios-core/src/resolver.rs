//! # Rate Resolution Pipeline
//!
//! The sequential decision function at the heart of the service.
//!
//! ## Pipeline Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Resolution Pipeline                                 │
//! │                                                                         │
//! │  ShipmentRequest                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Blackout check ──────────► Rejected(Blackout)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. Restriction filter ──────► Rejected(RestrictedProduct)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. Threshold gate ──────────► Rejected(BelowThreshold)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. Reserva detection                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. Location classification ─► Rejected(NoCoverage)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  6. Pricing lookup                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  7. Priority window gate (Bogotá only, no reserva)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Approved([ShippingOption])                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The restriction filter runs before the threshold gate: when both would
//! reject, the customer is told about the restricted product, which they
//! can remove, rather than the order total.

use crate::catalog::RateCatalog;
use crate::clock::Clock;
use crate::location::classify;
use crate::normalize::normalize;
use crate::restriction::check_items;
use crate::schedule::evaluate;
use crate::types::{LocationTier, Rejection, Resolution, ShipmentRequest, ShippingOption};

// =============================================================================
// Resolver
// =============================================================================

/// Resolves a shipment request into shipping options or a rejection.
///
/// Pure with respect to its arguments: same (catalog, clock instant,
/// request) always yields the same resolution.
pub fn resolve(catalog: &RateCatalog, clock: &dyn Clock, request: &ShipmentRequest) -> Resolution {
    let status = evaluate(&catalog.schedule, clock);

    // 1. Year-end blackout overrides everything
    if status.blackout {
        return Resolution::Rejected(Rejection::Blackout {
            resume: catalog.schedule.blackout.resume(),
        });
    }

    // Normalize destination exactly once; every later check uses these
    let city = normalize(&request.city);
    let region = normalize(&request.region);

    // 2. Product restrictions (fail-fast on the first offender)
    if let Err(rejection) = check_items(catalog, &city, &request.items) {
        return Resolution::Rejected(rejection);
    }

    // 3. Order minimum
    if request.total_item_price < catalog.threshold {
        return Resolution::Rejected(Rejection::BelowThreshold {
            threshold: catalog.threshold,
        });
    }

    // 4. Any backorder item switches the whole order to the reserva option
    let has_reserva = request
        .items
        .iter()
        .filter_map(|item| item.category.as_deref())
        .any(|category| catalog.is_reserva_category(category));

    // 5. Exactly one tier applies (priority-ordered classification)
    let tier = classify(catalog, &city, &region);
    let Some(entry) = catalog.entry_for_tier(tier) else {
        return Resolution::Rejected(Rejection::NoCoverage);
    };

    // 6./7. Pricing lookup and assembly
    if has_reserva {
        // Single deferred-dispatch option at the tier's normal price
        let reserva = &catalog.rates.reserva;
        return Resolution::Approved(vec![ShippingOption {
            method: reserva.method.clone(),
            price: entry.price,
            service_id: reserva.service_id,
            service_name: reserva.service_name.clone(),
        }]);
    }

    let mut options = vec![entry.to_option()];

    if tier == LocationTier::BogotaMetro && status.priority_window_open {
        options.push(catalog.rates.priority_bogota.to_option());
    }

    Resolution::Approved(options)
}

// =============================================================================
// Unit Tests
// =============================================================================
