//! # Error Types
//!
//! Typed errors for envios-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  envios-core errors (this file)                                        │
//! │  ├── CatalogError     - Rate catalog fails startup validation          │
//! │  └── ValidationError  - Webhook payload missing required structure     │
//! │                                                                         │
//! │  rates-api errors (app crate)                                          │
//! │  └── ApiError         - HTTP status mapping (400/500)                  │
//! │                                                                         │
//! │  NOTE: a declined quote is NOT an error. Business rejections are       │
//! │  modeled as types::Rejection and travel the Ok path.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, offending values)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Catalog Error
// =============================================================================

/// Rate catalog validation failures.
///
/// Raised once at startup by [`crate::catalog::RateCatalog::validate`];
/// a service with an invalid catalog refuses to boot rather than quoting
/// nonsense prices all day.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required city/region/category set has no entries.
    #[error("Catalog set '{0}' must not be empty")]
    EmptySet(&'static str),

    /// Two rate entries claim the same service id.
    #[error("Duplicate service id {0} in rate table")]
    DuplicateServiceId(i64),

    /// The order threshold is zero or negative.
    #[error("Order threshold must be positive, got {0}")]
    InvalidThreshold(i64),

    /// A price is negative.
    #[error("Price for '{entry}' must be non-negative, got {price}")]
    NegativePrice { entry: &'static str, price: i64 },

    /// A service window has start >= end or hours out of range.
    #[error("Service window '{window}' is invalid: {start}:00 - {end}:00")]
    InvalidWindow {
        window: &'static str,
        start: u32,
        end: u32,
    },

    /// A blackout bound is not a real calendar day.
    #[error("Blackout bound {month}-{day} is not a valid calendar day")]
    InvalidBlackoutBound { month: u32, day: u32 },

    /// UTC offset outside the real-world range.
    #[error("UTC offset {0} is outside -12..=14")]
    InvalidUtcOffset(i32),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Webhook payload validation errors.
///
/// Extraction is an explicit, testable step: every variant maps to a 400
/// with a message naming the broken part of the payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required nested structure is missing.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// The request body is not the expected shape at all.
    #[error("Malformed request body: {reason}")]
    MalformedBody { reason: String },
}

// =============================================================================
// Unit Tests
// =============================================================================
