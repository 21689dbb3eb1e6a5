// src/utils/date.rs
//
// Date Normalizer
//
// Catalog dates are plain `YYYY-MM-DD` strings. Parsing is best-effort:
// anything that does not match that exact shape yields None, never an
// error, so a malformed date can never abort a resolution.

use chrono::NaiveDate;

/// Parse a catalog date string, strictly `YYYY-MM-DD`.
///
/// Extra text, wrong separators and out-of-range components all yield None.
pub fn parse_catalog_date(text: &str) -> Option<NaiveDate> {
    // Exactly 4-2-2 digits; chrono's %Y would also accept wider years.
    if text.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Convenience for optional wire fields.
pub fn parse_optional_date(text: Option<&str>) -> Option<NaiveDate> {
    text.and_then(parse_catalog_date)
}
