//! # Product-Restriction Filter
//!
//! Some products can only ship to certain cities (cold chain, fragile,
//! carrier contracts). Each line item may carry a raw "allowed cities"
//! value; this module decides whether the whole order passes.
//!
//! ## Resolution Per Item
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  allowed_cities value          →  outcome                               │
//! │  ──────────────────────────────────────────────────────────────────     │
//! │  (absent)                      →  passes, no restriction               │
//! │  contains "todas"              →  passes everywhere                    │
//! │  contains "bogota"             →  passes everywhere EXCEPT the         │
//! │                                   coastal pair (explicitly denied)     │
//! │  otherwise                     →  destination must appear verbatim     │
//! │                                   in the (normalized) list             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fail-fast: the FIRST offending item aborts resolution and its name goes
//! into the rejection message. Customers see one violation at a time, which
//! keeps the checkout messaging simple.

use crate::catalog::RateCatalog;
use crate::normalize::{contains_normalized, split_city_list};
use crate::types::{LineItem, Rejection};

// =============================================================================
// Filter
// =============================================================================

/// Checks every line item against the destination, in order.
///
/// `city` must already be normalized. Returns the first violation as a
/// [`Rejection::RestrictedProduct`] naming the offending item.
pub fn check_items(
    catalog: &RateCatalog,
    city: &str,
    items: &[LineItem],
) -> Result<(), Rejection> {
    for item in items {
        if !item_allows(catalog, city, item) {
            return Err(Rejection::RestrictedProduct {
                product: item.name.clone(),
            });
        }
    }
    Ok(())
}

/// Whether one item's restriction admits the destination.
fn item_allows(catalog: &RateCatalog, city: &str, item: &LineItem) -> bool {
    let Some(raw) = item.allowed_cities.as_deref() else {
        return true;
    };

    let allowed = split_city_list(raw);
    if allowed.is_empty() {
        // A present-but-blank value means no actual restriction
        return true;
    }

    if allowed.iter().any(|entry| entry == "todas") {
        return true;
    }

    if allowed.iter().any(|entry| entry == "bogota") {
        // Bogotá-tagged products ship anywhere inland, but the coastal
        // pair is explicitly denied
        return !contains_normalized(&catalog.cities.coastal, city);
    }

    allowed.iter().any(|entry| entry == city)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn catalog() -> RateCatalog {
        RateCatalog::production()
    }

    fn item(name: &str, allowed: Option<&str>) -> LineItem {
        LineItem {
            name: name.to_string(),
            category: None,
            allowed_cities: allowed.map(str::to_string),
        }
    }

    fn check(city_raw: &str, items: &[LineItem]) -> Result<(), Rejection> {
        check_items(&catalog(), &normalize(city_raw), items)
    }

    #[test]
    fn test_unrestricted_item_passes_anywhere() {
        let items = [item("Product A", None)];
        assert!(check("Bogotá", &items).is_ok());
        assert!(check("Cartagena", &items).is_ok());
        assert!(check("Nowhere", &items).is_ok());
    }

    #[test]
    fn test_todas_passes_everywhere() {
        let items = [item("Product A", Some("todas"))];
        assert!(check("Bogotá", &items).is_ok());
        assert!(check("Cartagena", &items).is_ok());
        assert!(check("Barranquilla", &items).is_ok());
    }

    #[test]
    fn test_bogota_tag_passes_inland() {
        let items = [item("Product A", Some("bogota"))];
        assert!(check("Bogotá", &items).is_ok());
        assert!(check("Medellín", &items).is_ok());
        assert!(check("Chía", &items).is_ok());
    }

    #[test]
    fn test_bogota_tag_denied_for_coastal_pair() {
        let items = [item("Product A", Some("bogota"))];
        for city in ["Cartagena", "Barranquilla"] {
            match check(city, &items) {
                Err(Rejection::RestrictedProduct { product }) => {
                    assert_eq!(product, "Product A");
                }
                other => panic!("expected restriction for {city}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_explicit_list_membership() {
        let items = [item("Product A", Some("Chía, Cota y Cajicá"))];
        assert!(check("chia", &items).is_ok());
        assert!(check("Cajicá", &items).is_ok());
        assert!(check("Bogotá", &items).is_err());
    }

    #[test]
    fn test_accent_insensitive_matching() {
        let items = [item("Product A", Some("MEDELLÍN"))];
        assert!(check("medellin", &items).is_ok());
        assert!(check("Medellín", &items).is_ok());
    }

    #[test]
    fn test_blank_value_means_no_restriction() {
        let items = [item("Product A", Some("   "))];
        assert!(check("Cartagena", &items).is_ok());
    }

    #[test]
    fn test_first_offender_wins() {
        let items = [
            item("Passes", Some("todas")),
            item("First Offender", Some("bogota")),
            item("Second Offender", Some("chia")),
        ];
        match check("Cartagena", &items) {
            Err(Rejection::RestrictedProduct { product }) => {
                assert_eq!(product, "First Offender");
            }
            other => panic!("expected restriction, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_order_passes() {
        assert!(check("Bogotá", &[]).is_ok());
    }
}
