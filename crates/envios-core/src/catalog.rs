//! # Rate Catalog
//!
//! The externalized reference data driving resolution: city sets, region
//! enumeration, pricing table, schedule and threshold.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Priority                                     │
//! │                                                                         │
//! │  1. TOML Catalog File                                                  │
//! │     Loaded by rates-api at startup (ENVIOS_CATALOG)                    │
//! │                                                                         │
//! │  2. Compiled Defaults (this file)                                      │
//! │     Match the production data of the latest revision                   │
//! │                                                                         │
//! │  Validated exactly once at startup; read-only afterwards, so           │
//! │  concurrent requests share it without locks.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Catalog File Format
//! ```toml
//! threshold = 70000
//!
//! [cities]
//! bogota = ["bogota", "bogota dc", "santafe de bogota"]
//! near_bogota = ["chia", "cajica", "cota"]
//! coastal = ["barranquilla", "cartagena"]
//!
//! regions = ["antioquia", "atlantico", "bolivar"]
//! reserva_categories = ["reserva", "preventa"]
//!
//! [rates.bogota]
//! method = "Envío Bogotá"
//! price = 8000
//! service_id = 10001
//! service_name = "Envío Bogotá (24 - 48 horas)"
//!
//! [schedule]
//! utc_offset_hours = -5
//! holidays = ["2025-01-01", "2025-05-01"]  # quoted ISO dates
//!
//! [schedule.weekday]
//! start_hour = 6
//! end_hour = 15
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::normalize::{contains_normalized, normalize};
use crate::types::{LocationTier, ShippingOption};
use crate::DEFAULT_ORDER_THRESHOLD;

// =============================================================================
// City Sets
// =============================================================================

/// The three city sets consulted during classification.
///
/// Entries may be stored in any spelling; lookups normalize both sides, so
/// `"Bogotá"` and `"bogota"` are the same entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitySets {
    /// Spelling-variant set for Bogotá. Deliberately large: upstream data
    /// entry is inconsistent and every observed variant gets added here.
    #[serde(default = "default_bogota_variants")]
    pub bogota: Vec<String>,

    /// Municipalities near Bogotá with their own rate.
    #[serde(default = "default_near_bogota")]
    pub near_bogota: Vec<String>,

    /// The coastal pair. Barranquilla + Cartagena in the current data;
    /// earlier data shipped Barranquilla + Montería, hence configurable.
    #[serde(default = "default_coastal")]
    pub coastal: Vec<String>,
}

fn default_bogota_variants() -> Vec<String> {
    [
        "bogota",
        "bogota dc",
        "bogota d c",
        "bogota distrito capital",
        "santafe de bogota",
        "santa fe de bogota",
        // Recurring typos seen in production orders
        "bogotta",
        "bogata",
        "vogota",
        "bogoa",
    ]
    .map(str::to_string)
    .to_vec()
}

fn default_near_bogota() -> Vec<String> {
    [
        "chia",
        "cajica",
        "cota",
        "funza",
        "mosquera",
        "madrid",
        "soacha",
        "zipaquira",
        "la calera",
        "sopo",
        "tocancipa",
        "tabio",
        "tenjo",
        "sibate",
        "facatativa",
    ]
    .map(str::to_string)
    .to_vec()
}

fn default_coastal() -> Vec<String> {
    ["barranquilla", "cartagena"].map(str::to_string).to_vec()
}

impl Default for CitySets {
    fn default() -> Self {
        CitySets {
            bogota: default_bogota_variants(),
            near_bogota: default_near_bogota(),
            coastal: default_coastal(),
        }
    }
}

// =============================================================================
// Rate Table
// =============================================================================

/// One row of the pricing table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateEntry {
    /// Short method label.
    pub method: String,

    /// Price in whole pesos.
    pub price: i64,

    /// Fixed service id, unique across the catalog.
    pub service_id: i64,

    /// Checkout display string including the delivery promise.
    pub service_name: String,
}

impl RateEntry {
    /// Materializes this row as a response option.
    pub fn to_option(&self) -> ShippingOption {
        ShippingOption {
            method: self.method.clone(),
            price: self.price,
            service_id: self.service_id,
            service_name: self.service_name.clone(),
        }
    }
}

/// The reserva (backorder) row. It carries no price of its own: the quoted
/// price is the normal price of the destination tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservaRate {
    pub method: String,
    pub service_id: i64,
    pub service_name: String,
}

/// Static mapping from location tier (and the reserva flag) to rates.
///
/// Values follow the latest revision of the production data; older prices
/// (e.g. free Bogotá shipping) are superseded, not alternatives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    #[serde(default = "default_rate_bogota")]
    pub bogota: RateEntry,

    /// Expedited same-day option, only offered inside the service window.
    #[serde(default = "default_rate_priority_bogota")]
    pub priority_bogota: RateEntry,

    #[serde(default = "default_rate_near_bogota")]
    pub near_bogota: RateEntry,

    #[serde(default = "default_rate_other_region")]
    pub other_region: RateEntry,

    #[serde(default = "default_rate_coastal")]
    pub coastal: RateEntry,

    #[serde(default = "default_rate_reserva")]
    pub reserva: ReservaRate,
}

fn default_rate_bogota() -> RateEntry {
    RateEntry {
        method: "Envío Bogotá".to_string(),
        price: 8000,
        service_id: 10001,
        service_name: "Envío Bogotá (24 - 48 horas)".to_string(),
    }
}

fn default_rate_priority_bogota() -> RateEntry {
    RateEntry {
        method: "Envío Prioritario Bogotá".to_string(),
        price: 12000,
        service_id: 10002,
        service_name: "Envío Prioritario Bogotá (3-4 horas)".to_string(),
    }
}

fn default_rate_near_bogota() -> RateEntry {
    RateEntry {
        method: "Envío Municipios Cerca a Bogotá".to_string(),
        price: 15000,
        service_id: 10003,
        service_name: "Envío Municipios Cerca a Bogotá (24-48 hrs)".to_string(),
    }
}

fn default_rate_other_region() -> RateEntry {
    RateEntry {
        method: "Envíos fuera de Bogotá".to_string(),
        price: 39000,
        service_id: 10004,
        service_name: "Envíos fuera de Bogotá (48-72 hrs)".to_string(),
    }
}

fn default_rate_coastal() -> RateEntry {
    RateEntry {
        method: "Envío Barranquilla y Cartagena".to_string(),
        price: 39000,
        service_id: 10005,
        service_name: "Envío Barranquilla y Cartagena (72 hrs - Lunes, Martes, Miércoles)"
            .to_string(),
    }
}

fn default_rate_reserva() -> ReservaRate {
    ReservaRate {
        method: "Envío en Reserva".to_string(),
        service_id: 10006,
        service_name: "Se envía cuando esté disponible".to_string(),
    }
}

impl Default for RateTable {
    fn default() -> Self {
        RateTable {
            bogota: default_rate_bogota(),
            priority_bogota: default_rate_priority_bogota(),
            near_bogota: default_rate_near_bogota(),
            other_region: default_rate_other_region(),
            coastal: default_rate_coastal(),
            reserva: default_rate_reserva(),
        }
    }
}

// =============================================================================
// Schedule Configuration
// =============================================================================

/// A same-day hour window, `start_hour <= hour < end_hour` local time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HourWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl HourWindow {
    /// True if the given local hour falls inside the window.
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

/// A recurring month/day calendar point (year-independent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    /// The (month, day) of a concrete date, for ordering comparisons.
    pub fn of(date: NaiveDate) -> Self {
        MonthDay {
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Customer-facing form, e.g. "January 14". Rejection messages embed this.
impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MONTHS: [&str; 12] = [
            "January", "February", "March", "April", "May", "June", "July",
            "August", "September", "October", "November", "December",
        ];
        let name = self
            .month
            .checked_sub(1)
            .and_then(|i| MONTHS.get(i as usize))
            .unwrap_or(&"?");
        write!(f, "{name} {}", self.day)
    }
}

/// The recurring year-end blackout window.
///
/// The bounds wrap the year boundary (Dec 27 → Jan 13), so a date is inside
/// when it is at-or-after the start OR at-or-before the end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlackoutWindow {
    #[serde(default = "default_blackout_start")]
    pub start: MonthDay,

    #[serde(default = "default_blackout_end")]
    pub end: MonthDay,
}

fn default_blackout_start() -> MonthDay {
    MonthDay { month: 12, day: 27 }
}

fn default_blackout_end() -> MonthDay {
    MonthDay { month: 1, day: 13 }
}

impl Default for BlackoutWindow {
    fn default() -> Self {
        BlackoutWindow {
            start: default_blackout_start(),
            end: default_blackout_end(),
        }
    }
}

impl BlackoutWindow {
    /// The day service resumes: the calendar day after `end`, with month
    /// and year-boundary rollover.
    pub fn resume(&self) -> MonthDay {
        // 2024 is a leap year, so every valid month/day maps to a real date
        NaiveDate::from_ymd_opt(2024, self.end.month, self.end.day)
            .and_then(|date| date.succ_opt())
            .map(MonthDay::of)
            .unwrap_or(self.end)
    }

    /// True if the blackout covers the given date.
    pub fn covers(&self, date: NaiveDate) -> bool {
        let md = MonthDay::of(date);
        if self.start <= self.end {
            // Plain range inside one year
            md >= self.start && md <= self.end
        } else {
            // Wrapping range across New Year
            md >= self.start || md <= self.end
        }
    }
}

/// Dispatch schedule: service windows, holidays, blackout, timezone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Fixed UTC offset for local-time evaluation. Colombia has no DST,
    /// so -5 is exact year-round.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i32,

    /// Business holidays. Priority dispatch is suspended on these dates.
    /// Quoted ISO dates in TOML ("2025-01-01"). Listed before the window
    /// tables so TOML serialization stays well-formed.
    #[serde(default = "default_holidays")]
    pub holidays: Vec<NaiveDate>,

    /// Monday-Friday priority dispatch window.
    #[serde(default = "default_weekday_window")]
    pub weekday: HourWindow,

    /// Saturday priority dispatch window (shorter).
    #[serde(default = "default_saturday_window")]
    pub saturday: HourWindow,

    /// Recurring year-end closure; overrides all resolution while active.
    #[serde(default)]
    pub blackout: BlackoutWindow,
}

fn default_utc_offset() -> i32 {
    crate::BOGOTA_UTC_OFFSET_HOURS
}

fn default_weekday_window() -> HourWindow {
    HourWindow {
        start_hour: 6,
        end_hour: 15,
    }
}

fn default_saturday_window() -> HourWindow {
    HourWindow {
        start_hour: 6,
        end_hour: 11,
    }
}

/// Colombian public holidays observed by the warehouse, 2025.
fn default_holidays() -> Vec<NaiveDate> {
    const DATES: &[(i32, u32, u32)] = &[
        (2025, 1, 1),
        (2025, 1, 6),
        (2025, 3, 24),
        (2025, 4, 17),
        (2025, 4, 18),
        (2025, 5, 1),
        (2025, 6, 2),
        (2025, 6, 23),
        (2025, 6, 30),
        (2025, 7, 20),
        (2025, 8, 7),
        (2025, 8, 18),
        (2025, 10, 13),
        (2025, 11, 3),
        (2025, 11, 17),
        (2025, 12, 8),
        (2025, 12, 25),
    ];
    DATES
        .iter()
        .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .collect()
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            utc_offset_hours: default_utc_offset(),
            weekday: default_weekday_window(),
            saturday: default_saturday_window(),
            holidays: default_holidays(),
            blackout: BlackoutWindow::default(),
        }
    }
}

// =============================================================================
// Main Catalog
// =============================================================================

/// Complete rate catalog.
///
/// Every field has a compiled default matching production data, so a missing
/// or partial TOML file still yields a working catalog.
///
/// Field order matters for TOML serialization: plain values and arrays
/// must precede the table-valued fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateCatalog {
    /// Minimum order total (whole pesos) to see any shipping option.
    pub threshold: i64,

    /// Remaining Colombian departments served at the out-of-town rate.
    /// Cundinamarca is absent on purpose: it classifies as NearBogota.
    pub regions: Vec<String>,

    /// Categories that flag an item as backorder (reserva).
    pub reserva_categories: Vec<String>,

    /// City sets for classification.
    pub cities: CitySets,

    /// Pricing table.
    pub rates: RateTable,

    /// Dispatch schedule.
    pub schedule: ScheduleConfig,
}

/// Default IS the production catalog, so `#[serde(default)]` backfills
/// partial files with real data instead of zeros and empty lists.
impl Default for RateCatalog {
    fn default() -> Self {
        RateCatalog::production()
    }
}

fn default_regions() -> Vec<String> {
    [
        "amazonas",
        "antioquia",
        "arauca",
        "atlantico",
        "bolivar",
        "boyaca",
        "caldas",
        "caqueta",
        "casanare",
        "cauca",
        "cesar",
        "choco",
        "cordoba",
        "guainia",
        "guaviare",
        "huila",
        "la guajira",
        "magdalena",
        "meta",
        "narino",
        "norte de santander",
        "putumayo",
        "quindio",
        "risaralda",
        "san andres y providencia",
        "santander",
        "sucre",
        "tolima",
        "valle del cauca",
        "vaupes",
        "vichada",
    ]
    .map(str::to_string)
    .to_vec()
}

fn default_reserva_categories() -> Vec<String> {
    ["reserva", "preventa", "pre venta", "bajo pedido"]
        .map(str::to_string)
        .to_vec()
}

impl RateCatalog {
    /// Validates the catalog. Called exactly once at startup; resolution
    /// assumes a valid catalog afterwards.
    ///
    /// ## Checks
    /// - threshold positive
    /// - city/region sets non-empty
    /// - service ids unique, prices non-negative
    /// - windows well-formed, blackout bounds real calendar days
    /// - UTC offset inside -12..=14
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.threshold <= 0 {
            return Err(CatalogError::InvalidThreshold(self.threshold));
        }

        if self.cities.bogota.is_empty() {
            return Err(CatalogError::EmptySet("cities.bogota"));
        }
        if self.cities.near_bogota.is_empty() {
            return Err(CatalogError::EmptySet("cities.near_bogota"));
        }
        if self.cities.coastal.is_empty() {
            return Err(CatalogError::EmptySet("cities.coastal"));
        }
        if self.regions.is_empty() {
            return Err(CatalogError::EmptySet("regions"));
        }

        // Service ids must not collide
        let ids = [
            self.rates.bogota.service_id,
            self.rates.priority_bogota.service_id,
            self.rates.near_bogota.service_id,
            self.rates.other_region.service_id,
            self.rates.coastal.service_id,
            self.rates.reserva.service_id,
        ];
        for (i, id) in ids.iter().enumerate() {
            if ids[..i].contains(id) {
                return Err(CatalogError::DuplicateServiceId(*id));
            }
        }

        let priced: [(&'static str, &RateEntry); 5] = [
            ("bogota", &self.rates.bogota),
            ("priority_bogota", &self.rates.priority_bogota),
            ("near_bogota", &self.rates.near_bogota),
            ("other_region", &self.rates.other_region),
            ("coastal", &self.rates.coastal),
        ];
        for (name, entry) in priced {
            if entry.price < 0 {
                return Err(CatalogError::NegativePrice {
                    entry: name,
                    price: entry.price,
                });
            }
        }

        for (name, window) in [
            ("weekday", self.schedule.weekday),
            ("saturday", self.schedule.saturday),
        ] {
            if window.start_hour >= window.end_hour || window.end_hour > 24 {
                return Err(CatalogError::InvalidWindow {
                    window: name,
                    start: window.start_hour,
                    end: window.end_hour,
                });
            }
        }

        for bound in [self.schedule.blackout.start, self.schedule.blackout.end] {
            // 2024 is a leap year, so Feb 29 bounds are accepted
            if NaiveDate::from_ymd_opt(2024, bound.month, bound.day).is_none() {
                return Err(CatalogError::InvalidBlackoutBound {
                    month: bound.month,
                    day: bound.day,
                });
            }
        }

        let offset = self.schedule.utc_offset_hours;
        if !(-12..=14).contains(&offset) {
            return Err(CatalogError::InvalidUtcOffset(offset));
        }

        Ok(())
    }

    /// The pricing row for a classified tier. `Unclassified` has no row.
    pub fn entry_for_tier(&self, tier: LocationTier) -> Option<&RateEntry> {
        match tier {
            LocationTier::BogotaMetro => Some(&self.rates.bogota),
            LocationTier::NearBogota => Some(&self.rates.near_bogota),
            LocationTier::Coastal => Some(&self.rates.coastal),
            LocationTier::OtherRegion => Some(&self.rates.other_region),
            LocationTier::Unclassified => None,
        }
    }

    /// True if a (raw) category string flags an item as backorder.
    pub fn is_reserva_category(&self, category: &str) -> bool {
        contains_normalized(&self.reserva_categories, &normalize(category))
    }
}

// Manual field defaults for the `#[serde(default)]` container attribute:
// Default::default() on i64/Vec would yield 0/empty, which is never what a
// partial catalog file means.
impl RateCatalog {
    /// The compiled production catalog.
    pub fn production() -> Self {
        RateCatalog {
            threshold: DEFAULT_ORDER_THRESHOLD,
            cities: CitySets::default(),
            regions: default_regions(),
            reserva_categories: default_reserva_categories(),
            rates: RateTable::default(),
            schedule: ScheduleConfig::default(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_catalog_is_valid() {
        assert!(RateCatalog::production().validate().is_ok());
    }

    #[test]
    fn test_service_ids_fixed_enumeration() {
        let catalog = RateCatalog::production();
        assert_eq!(catalog.rates.bogota.service_id, 10001);
        assert_eq!(catalog.rates.priority_bogota.service_id, 10002);
        assert_eq!(catalog.rates.near_bogota.service_id, 10003);
        assert_eq!(catalog.rates.other_region.service_id, 10004);
        assert_eq!(catalog.rates.coastal.service_id, 10005);
        assert_eq!(catalog.rates.reserva.service_id, 10006);
    }

    #[test]
    fn test_duplicate_service_id_rejected() {
        let mut catalog = RateCatalog::production();
        catalog.rates.coastal.service_id = 10001;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateServiceId(10001))
        ));
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let mut catalog = RateCatalog::production();
        catalog.threshold = 0;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidThreshold(0))
        ));
    }

    #[test]
    fn test_empty_set_rejected() {
        let mut catalog = RateCatalog::production();
        catalog.cities.coastal.clear();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::EmptySet("cities.coastal"))
        ));
    }

    #[test]
    fn test_invalid_window_rejected() {
        let mut catalog = RateCatalog::production();
        catalog.schedule.weekday = HourWindow {
            start_hour: 15,
            end_hour: 6,
        };
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidWindow { window: "weekday", .. })
        ));
    }

    #[test]
    fn test_blackout_wrapping_range() {
        let blackout = BlackoutWindow::default();
        assert!(blackout.covers(NaiveDate::from_ymd_opt(2025, 12, 27).unwrap()));
        assert!(blackout.covers(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()));
        assert!(blackout.covers(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
        assert!(blackout.covers(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap()));
        assert!(!blackout.covers(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap()));
        assert!(!blackout.covers(NaiveDate::from_ymd_opt(2025, 12, 26).unwrap()));
        assert!(!blackout.covers(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()));
    }

    #[test]
    fn test_blackout_non_wrapping_range() {
        let blackout = BlackoutWindow {
            start: MonthDay { month: 6, day: 1 },
            end: MonthDay { month: 6, day: 10 },
        };
        assert!(blackout.covers(NaiveDate::from_ymd_opt(2025, 6, 5).unwrap()));
        assert!(!blackout.covers(NaiveDate::from_ymd_opt(2025, 5, 31).unwrap()));
        assert!(!blackout.covers(NaiveDate::from_ymd_opt(2025, 6, 11).unwrap()));
    }

    #[test]
    fn test_blackout_resume_follows_end() {
        // Default end Jan 13 → resumes Jan 14
        let blackout = BlackoutWindow::default();
        assert_eq!(blackout.resume(), MonthDay { month: 1, day: 14 });
        assert_eq!(blackout.resume().to_string(), "January 14");

        // Month rollover
        let blackout = BlackoutWindow {
            start: MonthDay { month: 6, day: 1 },
            end: MonthDay { month: 6, day: 30 },
        };
        assert_eq!(blackout.resume(), MonthDay { month: 7, day: 1 });

        // Year-boundary rollover
        let blackout = BlackoutWindow {
            start: MonthDay { month: 12, day: 1 },
            end: MonthDay { month: 12, day: 31 },
        };
        assert_eq!(blackout.resume(), MonthDay { month: 1, day: 1 });
        assert_eq!(blackout.resume().to_string(), "January 1");
    }

    #[test]
    fn test_hour_window_half_open() {
        let window = default_weekday_window();
        assert!(!window.contains(5));
        assert!(window.contains(6));
        assert!(window.contains(14));
        assert!(!window.contains(15));
    }

    #[test]
    fn test_reserva_category_normalized() {
        let catalog = RateCatalog::production();
        assert!(catalog.is_reserva_category("Reserva"));
        assert!(catalog.is_reserva_category("  PREVENTA "));
        assert!(!catalog.is_reserva_category("perfumes"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml_src = r#"
            threshold = 90000

            [cities]
            coastal = ["barranquilla", "monteria"]
        "#;
        let catalog: RateCatalog = toml::from_str(toml_src).unwrap();
        assert_eq!(catalog.threshold, 90_000);
        assert_eq!(catalog.cities.coastal, vec!["barranquilla", "monteria"]);
        // Untouched sections keep compiled defaults
        assert_eq!(catalog.rates.bogota.service_id, 10001);
        assert!(!catalog.cities.bogota.is_empty());
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_holiday_dates_parse_from_toml() {
        let toml_src = r#"
            [schedule]
            holidays = ["2025-12-08", "2025-12-25"]
        "#;
        let catalog: RateCatalog = toml::from_str(toml_src).unwrap();
        assert_eq!(catalog.schedule.holidays.len(), 2);
        assert_eq!(
            catalog.schedule.holidays[0],
            NaiveDate::from_ymd_opt(2025, 12, 8).unwrap()
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let catalog = RateCatalog::production();
        let serialized = toml::to_string_pretty(&catalog).unwrap();
        assert!(serialized.contains("[cities]"));
        assert!(serialized.contains("[rates.bogota]"));
        assert!(serialized.contains("[schedule]"));
    }
}
