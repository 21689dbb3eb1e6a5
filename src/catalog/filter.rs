// src/catalog/filter.rs
//
// Substring filter expressions for catalog list endpoints.
//
// The filter syntax is owned by the catalog service; this crate only ever
// builds single-field contains-matches and passes them through verbatim.

/// Build a contains-match filter: `<field> % "%<value>%"`.
///
/// No escaping beyond what URL query encoding applies later; the value is
/// the raw display name.
pub fn contains_filter(field: &str, value: &str) -> String {
    format!("{} % \"%{}%\"", field, value)
}
