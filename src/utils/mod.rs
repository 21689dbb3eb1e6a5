// src/utils/mod.rs
//
// Pure text/date helpers shared by the resolver services.

pub mod date;
pub mod slug;

pub use date::{parse_catalog_date, parse_optional_date};
pub use slug::slugify;
