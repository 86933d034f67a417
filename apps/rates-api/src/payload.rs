//! # Webhook Payload Extraction
//!
//! The checkout platform posts a deeply nested webhook body; this module
//! flattens it into the typed [`ShipmentRequest`] the core consumes.
//!
//! ## Payload Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  {                                                                      │
//! │    "_embedded": {                                                       │
//! │      "fx:shipment": {                                                   │
//! │        "total_item_price": 100000,                                      │
//! │        "shipping_address": { "city": "...", "region": "..." },          │
//! │        "city": "...", "region": "..."        ← older payloads           │
//! │      },                                                                 │
//! │      "fx:items": [ {                                                    │
//! │        "name": "...", "category": "...", "ciudad": "...",               │
//! │        "_embedded": {                                                   │
//! │          "fx:item_options":  [ {"name": "ciudad", "value": "..."} ],    │
//! │          "fx:custom_fields": [ ... ],                                   │
//! │          "fx:attributes":    [ ... ],                                   │
//! │          "fx:item_category": { "code": "..." }                          │
//! │        }                                                                │
//! │      } ]                                                                │
//! │    }                                                                    │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The platform has moved fields around over time, so everything below the
//! two required wrappers is read absent-safe: the allowed-cities value is
//! taken from the first of item options → custom fields → attributes →
//! item-level field, and the address falls back to shipment-level
//! city/region. Only the wrappers themselves are hard requirements; their
//! absence is a typed [`ValidationError`], not a 500.

use envios_core::{LineItem, ShipmentRequest, ValidationError};
use serde::Deserialize;

// =============================================================================
// Wire Types
// =============================================================================

/// Top-level webhook body.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(rename = "_embedded")]
    pub embedded: Option<EmbeddedPayload>,
}

/// The platform wrapper object.
#[derive(Debug, Deserialize)]
pub struct EmbeddedPayload {
    #[serde(rename = "fx:shipment")]
    pub shipment: Option<ShipmentPayload>,

    #[serde(rename = "fx:items", default)]
    pub items: Vec<ItemPayload>,
}

/// Shipment section. Address fields appear either nested or flat
/// depending on the platform version.
#[derive(Debug, Default, Deserialize)]
pub struct ShipmentPayload {
    #[serde(default)]
    pub total_item_price: Option<f64>,

    #[serde(default)]
    pub shipping_address: Option<AddressPayload>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddressPayload {
    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub region: Option<String>,
}

/// One cart item as sent by the platform.
#[derive(Debug, Default, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    /// Item-level restriction field (oldest payload variant).
    #[serde(default)]
    pub ciudad: Option<String>,

    #[serde(rename = "_embedded", default)]
    pub embedded: Option<ItemEmbedded>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemEmbedded {
    #[serde(rename = "fx:item_options", default)]
    pub item_options: Vec<NameValue>,

    #[serde(rename = "fx:custom_fields", default)]
    pub custom_fields: Vec<NameValue>,

    #[serde(rename = "fx:attributes", default)]
    pub attributes: Vec<NameValue>,

    #[serde(rename = "fx:item_category", default)]
    pub item_category: Option<CategoryPayload>,
}

/// Name/value pair used by options, custom fields and attributes alike.
#[derive(Debug, Default, Deserialize)]
pub struct NameValue {
    #[serde(default)]
    pub name: String,

    /// Values arrive as strings or numbers depending on how the product
    /// was configured; both are accepted.
    #[serde(default)]
    pub value: serde_json::Value,
}

impl NameValue {
    fn value_text(&self) -> Option<String> {
        match &self.value {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CategoryPayload {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}

// =============================================================================
// Extraction
// =============================================================================

/// Key of the restriction field across all its homes.
const CITY_FIELD: &str = "ciudad";

impl WebhookPayload {
    /// Flattens the webhook into a typed [`ShipmentRequest`].
    ///
    /// Only the `_embedded` / `fx:shipment` wrappers are required; every
    /// other field defaults when absent (empty city classifies as
    /// Unclassified downstream, which is the correct business answer).
    pub fn into_request(self) -> Result<ShipmentRequest, ValidationError> {
        let embedded = self.embedded.ok_or(ValidationError::MissingField {
            field: "_embedded",
        })?;

        let shipment = embedded.shipment.ok_or(ValidationError::MissingField {
            field: "_embedded.fx:shipment",
        })?;

        let address = shipment.shipping_address.unwrap_or_default();
        let city = address.city.or(shipment.city).unwrap_or_default();
        let region = address.region.or(shipment.region).unwrap_or_default();

        // `as i64` saturates and maps NaN to 0, which is safe here: a
        // garbage total simply fails the threshold gate
        let total_item_price = shipment.total_item_price.unwrap_or(0.0) as i64;

        let items = embedded.items.into_iter().map(extract_item).collect();

        Ok(ShipmentRequest {
            city,
            region,
            total_item_price,
            items,
        })
    }
}

/// Flattens one cart item, hunting the restriction value across its homes.
fn extract_item(item: ItemPayload) -> LineItem {
    let embedded = item.embedded.unwrap_or_default();

    let from_pairs = |pairs: &[NameValue]| {
        pairs
            .iter()
            .find(|pair| pair.name.eq_ignore_ascii_case(CITY_FIELD))
            .and_then(NameValue::value_text)
    };

    let allowed_cities = from_pairs(&embedded.item_options)
        .or_else(|| from_pairs(&embedded.custom_fields))
        .or_else(|| from_pairs(&embedded.attributes))
        .or(item.ciudad);

    let category = item.category.or_else(|| {
        embedded
            .item_category
            .and_then(|cat| cat.code.or(cat.name))
    });

    LineItem {
        name: item.name.unwrap_or_else(|| "(unnamed product)".to_string()),
        category,
        allowed_cities,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> WebhookPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_platform_payload() {
        let payload = parse(json!({
            "_embedded": {
                "fx:shipment": {
                    "total_item_price": 100000,
                    "shipping_address": { "city": "Bogotá", "region": "Cundinamarca" }
                },
                "fx:items": [{
                    "name": "Product A",
                    "_embedded": {
                        "fx:item_options": [{ "name": "ciudad", "value": "bogota" }]
                    }
                }]
            }
        }));

        let request = payload.into_request().unwrap();
        assert_eq!(request.city, "Bogotá");
        assert_eq!(request.region, "Cundinamarca");
        assert_eq!(request.total_item_price, 100_000);
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].name, "Product A");
        assert_eq!(request.items[0].allowed_cities.as_deref(), Some("bogota"));
    }

    #[test]
    fn test_missing_embedded_is_typed_error() {
        let payload = parse(json!({ "something": "else" }));
        assert_eq!(
            payload.into_request().unwrap_err(),
            ValidationError::MissingField { field: "_embedded" }
        );
    }

    #[test]
    fn test_missing_shipment_is_typed_error() {
        let payload = parse(json!({ "_embedded": { "fx:items": [] } }));
        assert_eq!(
            payload.into_request().unwrap_err(),
            ValidationError::MissingField {
                field: "_embedded.fx:shipment"
            }
        );
    }

    #[test]
    fn test_flat_address_fallback() {
        // Older payloads carry city/region directly on the shipment
        let payload = parse(json!({
            "_embedded": {
                "fx:shipment": { "city": "Medellín", "region": "Antioquia" }
            }
        }));
        let request = payload.into_request().unwrap();
        assert_eq!(request.city, "Medellín");
        assert_eq!(request.region, "Antioquia");
        assert_eq!(request.total_item_price, 0);
    }

    #[test]
    fn test_nested_address_wins_over_flat() {
        let payload = parse(json!({
            "_embedded": {
                "fx:shipment": {
                    "city": "Medellín",
                    "shipping_address": { "city": "Bogotá" }
                }
            }
        }));
        assert_eq!(payload.into_request().unwrap().city, "Bogotá");
    }

    #[test]
    fn test_restriction_source_precedence() {
        // Option beats custom field beats attribute beats item field
        let payload = parse(json!({
            "_embedded": {
                "fx:shipment": {},
                "fx:items": [{
                    "name": "P",
                    "ciudad": "from-item",
                    "_embedded": {
                        "fx:item_options": [{ "name": "ciudad", "value": "from-option" }],
                        "fx:custom_fields": [{ "name": "ciudad", "value": "from-custom" }],
                        "fx:attributes": [{ "name": "Ciudad", "value": "from-attr" }]
                    }
                }]
            }
        }));
        let request = payload.into_request().unwrap();
        assert_eq!(
            request.items[0].allowed_cities.as_deref(),
            Some("from-option")
        );
    }

    #[test]
    fn test_restriction_from_custom_field_when_no_option() {
        let payload = parse(json!({
            "_embedded": {
                "fx:shipment": {},
                "fx:items": [{
                    "name": "P",
                    "_embedded": {
                        "fx:custom_fields": [{ "name": "CIUDAD", "value": "chia" }]
                    }
                }]
            }
        }));
        let request = payload.into_request().unwrap();
        assert_eq!(request.items[0].allowed_cities.as_deref(), Some("chia"));
    }

    #[test]
    fn test_numeric_option_value_accepted() {
        let payload = parse(json!({
            "_embedded": {
                "fx:shipment": {},
                "fx:items": [{
                    "name": "P",
                    "_embedded": {
                        "fx:item_options": [{ "name": "ciudad", "value": 42 }]
                    }
                }]
            }
        }));
        let request = payload.into_request().unwrap();
        assert_eq!(request.items[0].allowed_cities.as_deref(), Some("42"));
    }

    #[test]
    fn test_category_from_embedded_category_code() {
        let payload = parse(json!({
            "_embedded": {
                "fx:shipment": {},
                "fx:items": [{
                    "name": "P",
                    "_embedded": {
                        "fx:item_category": { "code": "reserva" }
                    }
                }]
            }
        }));
        let request = payload.into_request().unwrap();
        assert_eq!(request.items[0].category.as_deref(), Some("reserva"));
    }

    #[test]
    fn test_fractional_total_truncates() {
        let payload = parse(json!({
            "_embedded": { "fx:shipment": { "total_item_price": 99999.9 } }
        }));
        assert_eq!(payload.into_request().unwrap().total_item_price, 99_999);
    }

    #[test]
    fn test_unnamed_item_gets_placeholder() {
        let payload = parse(json!({
            "_embedded": { "fx:shipment": {}, "fx:items": [{}] }
        }));
        let request = payload.into_request().unwrap();
        assert_eq!(request.items[0].name, "(unnamed product)");
    }
}
