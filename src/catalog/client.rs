// src/catalog/client.rs
//
// Catalog Lookup Client
//
// Boundary-facing HTTP operations against the remote catalog. The trait is
// the seam the resolver services depend on; `HttpCatalogClient` is the real
// transport. Every method honors the caller's cancellation token at the
// network-wait point and nowhere else.
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Returns wire models; services do the mapping
// - Envelope success tags are enforced here, so a returned payload is
//   always populated
// - No retry, no caching: each call is one fresh request

use crate::catalog::models::{
    ApiEnvelope, Collection, CollectionItems, CollectionPage, Media, MediaPage, MediaParts,
};
use crate::config::ResolverConfig;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Read-only catalog operations consumed by the resolver services.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Filtered media search, first page in server order.
    async fn get_media(&self, filter: &str, cancel: &CancellationToken) -> AppResult<MediaPage>;

    async fn get_media_by_id(&self, id: &str, cancel: &CancellationToken) -> AppResult<Media>;

    /// Ordered parts (episodes) of a media record.
    async fn get_media_parts(&self, id: &str, cancel: &CancellationToken)
        -> AppResult<MediaParts>;

    /// Filtered collection search, first page in server order.
    async fn get_collections(
        &self,
        filter: &str,
        cancel: &CancellationToken,
    ) -> AppResult<CollectionPage>;

    async fn get_collection_by_id(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> AppResult<Collection>;

    /// Membership items (seasons) of a collection.
    async fn get_collection_items(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> AppResult<CollectionItems>;

    /// Raw image passthrough; no interpretation of the bytes.
    async fn fetch_image(&self, url: &str, cancel: &CancellationToken) -> AppResult<Vec<u8>>;
}

/// HTTP implementation of [`CatalogApi`].
pub struct HttpCatalogClient {
    base_url: String,
    http: Client,
}

impl HttpCatalogClient {
    pub fn new(base_url: &str) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(&config.api_base_url)
    }

    // ========================================================================
    // INTERNAL: request execution
    // ========================================================================

    /// Fetch a catalog endpoint, decode its envelope and enforce the
    /// success tag. Cancellation is honored only while awaiting the wire.
    async fn get_enveloped<T>(&self, url: String, cancel: &CancellationToken) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let request = async {
            let response = self.http.get(&url).send().await?;
            let envelope: ApiEnvelope<T> = response.json().await?;
            envelope.into_result()
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(AppError::Cancelled),
            result = request => result,
        }
    }

    fn media_url(&self, suffix: &str) -> String {
        format!("{}/api/v1/media{}", self.base_url, suffix)
    }

    fn collections_url(&self, suffix: &str) -> String {
        format!("{}/api/v1/collections{}", self.base_url, suffix)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn get_media(&self, filter: &str, cancel: &CancellationToken) -> AppResult<MediaPage> {
        let url = self.media_url(&format!("?filter={}", urlencoding::encode(filter)));
        self.get_enveloped(url, cancel).await
    }

    async fn get_media_by_id(&self, id: &str, cancel: &CancellationToken) -> AppResult<Media> {
        let url = self.media_url(&format!("/{}", id));
        self.get_enveloped(url, cancel).await
    }

    async fn get_media_parts(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> AppResult<MediaParts> {
        let url = self.media_url(&format!("/{}/parts", id));
        self.get_enveloped(url, cancel).await
    }

    async fn get_collections(
        &self,
        filter: &str,
        cancel: &CancellationToken,
    ) -> AppResult<CollectionPage> {
        let url = self.collections_url(&format!("?filter={}", urlencoding::encode(filter)));
        self.get_enveloped(url, cancel).await
    }

    async fn get_collection_by_id(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> AppResult<Collection> {
        let url = self.collections_url(&format!("/{}", id));
        self.get_enveloped(url, cancel).await
    }

    async fn get_collection_items(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> AppResult<CollectionItems> {
        let url = self.collections_url(&format!("/{}/items", id));
        self.get_enveloped(url, cancel).await
    }

    async fn fetch_image(&self, url: &str, cancel: &CancellationToken) -> AppResult<Vec<u8>> {
        let request = async {
            let response = self.http.get(url).send().await?.error_for_status()?;
            let bytes = response.bytes().await?;
            Ok(bytes.to_vec())
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(AppError::Cancelled),
            result = request => result,
        }
    }
}
