//! # Text Normalization Module
//!
//! Canonicalizes free-form location text before any set lookup.
//!
//! ## Why This Exists
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE UPSTREAM DATA PROBLEM                                              │
//! │                                                                         │
//! │  The same destination arrives spelled many ways:                        │
//! │    "Bogotá"  "BOGOTA"  "bogota d.c."  " Bogotá, D.C. "                  │
//! │                                                                         │
//! │  OUR SOLUTION: one canonical form for every comparison                  │
//! │    NFD decompose → drop combining marks → lowercase →                   │
//! │    drop punctuation → collapse whitespace → trim                        │
//! │                                                                         │
//! │    normalize("Bogotá, D.C.") == normalize("bogota dc") == "bogota dc"   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every city, region and category comparison in this crate goes through
//! [`normalize`] on both sides. The function is idempotent, so catalog
//! entries may be stored pre-normalized or not.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// =============================================================================
// Normalizer
// =============================================================================

/// Produces the canonical form of a city/region/category string.
///
/// ## Steps
/// 1. NFD decomposition ("á" → "a" + combining acute)
/// 2. Drop combining diacritical marks
/// 3. Lowercase
/// 4. Drop punctuation ("d.c." → "dc"); keep letters, digits and spaces
/// 5. Collapse whitespace runs to a single space, trim the ends
///
/// ## Idempotence
/// `normalize(normalize(x)) == normalize(x)` for all inputs - the output
/// alphabet (lowercase alphanumerics + single spaces) is a fixed point.
///
/// ## Example
/// ```rust
/// use envios_core::normalize::normalize;
///
/// assert_eq!(normalize("  Bogotá, D.C. "), "bogota dc");
/// assert_eq!(normalize("MEDELLÍN"), "medellin");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());

    for ch in raw.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            // to_lowercase can expand to multiple chars (e.g. 'İ')
            out.extend(ch.to_lowercase());
        } else if ch.is_whitespace() {
            // Collapse runs; leading space is trimmed by the push guard
            if !out.ends_with(' ') && !out.is_empty() {
                out.push(' ');
            }
        }
        // Everything else (punctuation, symbols) is dropped entirely so
        // "d.c." and "dc" land on the same form
    }

    if out.ends_with(' ') {
        out.pop();
    }
    out
}

// =============================================================================
// Restriction List Splitting
// =============================================================================

/// Splits a raw "allowed cities" value into normalized entries.
///
/// Upstream values are comma-separated, Spanish-connective-separated, or
/// both: `"Bogotá y Chía, Cota"` → `["bogota", "chia", "cota"]`.
///
/// Splitting on the standalone word `y` happens after normalization, so the
/// connective is matched with single-space padding and city names that merely
/// contain the letter (e.g. "Yopal") are untouched.
pub fn split_city_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize)
        .flat_map(|segment| {
            segment
                .split(" y ")
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Case/accent-insensitive membership test against a catalog list.
///
/// Catalog entries are normalized on the fly; the needle must already be
/// normalized (callers normalize request fields exactly once, at the top of
/// the pipeline).
pub fn contains_normalized(entries: &[String], needle: &str) -> bool {
    entries.iter().any(|entry| normalize(entry) == needle)
}

// =============================================================================
// Unit Tests
// =============================================================================
