//! # Location Classification
//!
//! Classifies a destination into exactly one of five tiers.
//!
//! ## Priority Order (first match wins)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. BogotaMetro   city in the Bogotá spelling-variant set              │
//! │  2. NearBogota    city in the nearby-municipality set,                 │
//! │                   OR region == "cundinamarca"                          │
//! │  3. Coastal       city in the coastal pair                             │
//! │  4. OtherRegion   region in the department enumeration                 │
//! │  5. Unclassified  nothing matched → no shipping                        │
//! │                                                                         │
//! │  City checks run before region checks: "Chía, Cundinamarca" must       │
//! │  hit the municipality rate, not fall through to the region rule.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutual exclusivity is by construction: the chain returns at the first
//! matching tier, so exactly one tier applies per destination.

use crate::catalog::RateCatalog;
use crate::normalize::contains_normalized;
use crate::types::LocationTier;

// =============================================================================
// Classifier
// =============================================================================

/// Classifies a destination. Both arguments must already be normalized
/// (the resolver normalizes request fields exactly once, at the top of the
/// pipeline).
pub fn classify(catalog: &RateCatalog, city: &str, region: &str) -> LocationTier {
    if contains_normalized(&catalog.cities.bogota, city) {
        return LocationTier::BogotaMetro;
    }

    if contains_normalized(&catalog.cities.near_bogota, city) || region == "cundinamarca" {
        return LocationTier::NearBogota;
    }

    if contains_normalized(&catalog.cities.coastal, city) {
        return LocationTier::Coastal;
    }

    if contains_normalized(&catalog.regions, region) {
        return LocationTier::OtherRegion;
    }

    LocationTier::Unclassified
}

// =============================================================================
// Unit Tests
// =============================================================================
