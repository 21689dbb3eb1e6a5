// src/catalog/mod.rs
//
// Catalog boundary: wire models, filter building and the lookup client.

pub mod client;
pub mod filter;
pub mod models;

pub use client::{CatalogApi, HttpCatalogClient};
pub use filter::contains_filter;
pub use models::{
    ApiEnvelope, ApiError, Collection, CollectionItem, CollectionItems, CollectionPage, Media,
    MediaPage, MediaPart, MediaParts, Page,
};

#[cfg(test)]
pub use client::MockCatalogApi;
