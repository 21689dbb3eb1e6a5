// src/catalog/models.rs
//
// Catalog wire shapes
//
// Read-only data sourced from the remote catalog. Fetched fresh per
// resolution request; nothing here is cached or mutated by this crate.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Structured failure carried by a non-success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

/// Tagged result envelope wrapping every catalog response.
///
/// `data` is undefined unless `success` is true; go through
/// [`ApiEnvelope::into_result`] instead of touching the fields directly.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T> ApiEnvelope<T> {
    /// Enforce the success tag, turning the envelope into a crate result.
    pub fn into_result(self) -> AppResult<T> {
        if !self.success {
            let error = self.error.unwrap_or(ApiError {
                code: 0,
                kind: "unknown".to_string(),
                message: "catalog reported failure without an error body".to_string(),
            });
            return Err(AppError::Api {
                code: error.code,
                kind: error.kind,
                message: error.message,
            });
        }

        self.data
            .ok_or_else(|| AppError::Protocol("success envelope carried no data".to_string()))
    }
}

/// Page metadata attached to list responses. Pagination traversal is not
/// part of this crate; the first page is all that is ever consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    #[serde(rename = "page")]
    pub current_page: i64,
    #[serde(rename = "perPage")]
    pub per_page: i64,
    #[serde(rename = "totalItems")]
    pub total_items: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

/// A movie or a single season's underlying body.
#[derive(Debug, Clone, Deserialize)]
pub struct Media {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "mediaType")]
    pub media_type: String,
    pub score: Option<f32>,
    pub status: String,
    pub rating: String,
    #[serde(rename = "partCount")]
    pub part_count: i64,
    #[serde(rename = "airingSeason")]
    pub airing_season: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    pub creators: Vec<String>,
    pub tags: Vec<String>,
    #[serde(rename = "coverUrl")]
    pub cover_url: Option<String>,
    #[serde(rename = "bannerUrl")]
    pub banner_url: Option<String>,
    #[serde(rename = "logoUrl")]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaPage {
    pub page: Page,
    pub media: Vec<Media>,
}

/// One episode; `index` is the sole correlation key to a host episode.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaPart {
    pub index: i64,
    #[serde(rename = "mediaId")]
    pub media_id: String,
    pub name: String,
    #[serde(rename = "releaseDate")]
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaParts {
    pub parts: Vec<MediaPart>,
}

/// A series-level grouping of collection items.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    pub id: String,
    #[serde(rename = "collectionType")]
    pub collection_type: String,
    pub name: String,
    #[serde(rename = "coverUrl")]
    pub cover_url: Option<String>,
    #[serde(rename = "bannerUrl")]
    pub banner_url: Option<String>,
    #[serde(rename = "logoUrl")]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionPage {
    pub page: Page,
    pub collections: Vec<Collection>,
}

/// One season's membership in a collection, with a denormalized copy of the
/// referenced media's descriptive fields and a server-side precomputed
/// directory-matching slug.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionItem {
    #[serde(rename = "collectionId")]
    pub collection_id: String,
    #[serde(rename = "mediaId")]
    pub media_id: String,
    #[serde(rename = "collectionName")]
    pub collection_name: String,
    #[serde(rename = "searchSlug")]
    pub search_slug: String,
    pub position: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "mediaType")]
    pub media_type: String,
    pub score: Option<f32>,
    pub status: String,
    pub rating: String,
    #[serde(rename = "partCount")]
    pub part_count: i64,
    #[serde(rename = "airingSeason")]
    pub airing_season: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    pub creators: Vec<String>,
    pub tags: Vec<String>,
    #[serde(rename = "coverUrl")]
    pub cover_url: Option<String>,
    #[serde(rename = "bannerUrl")]
    pub banner_url: Option<String>,
    #[serde(rename = "logoUrl")]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionItems {
    pub items: Vec<CollectionItem>,
}
