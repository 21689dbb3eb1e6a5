// src/services/image_service.rs
//
// Image Service
//
// Enumerates the remote images a resolved catalog record exposes. Image
// BYTES are a raw passthrough through the catalog client; this service
// only maps URLs.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::catalog::CatalogApi;
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    Primary,
    Backdrop,
    Logo,
}

impl std::fmt::Display for ImageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageKind::Primary => write!(f, "primary"),
            ImageKind::Backdrop => write!(f, "backdrop"),
            ImageKind::Logo => write!(f, "logo"),
        }
    }
}

/// One remotely hosted image for a resolved item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteImage {
    pub kind: ImageKind,
    pub url: String,
}

pub struct ImageService {
    api: Arc<dyn CatalogApi>,
}

impl ImageService {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    /// Images for a movie or season body, by media id.
    pub async fn media_images(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> AppResult<Vec<RemoteImage>> {
        let media = self.api.get_media_by_id(id, cancel).await?;
        Ok(collect_images(media.cover_url, media.banner_url, media.logo_url))
    }

    /// Images for a series, by collection id.
    pub async fn collection_images(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> AppResult<Vec<RemoteImage>> {
        let collection = self.api.get_collection_by_id(id, cancel).await?;
        Ok(collect_images(
            collection.cover_url,
            collection.banner_url,
            collection.logo_url,
        ))
    }

    /// Raw byte passthrough for a previously enumerated image URL.
    pub async fn fetch_image(&self, url: &str, cancel: &CancellationToken) -> AppResult<Vec<u8>> {
        self.api.fetch_image(url, cancel).await
    }
}

fn collect_images(
    cover: Option<String>,
    banner: Option<String>,
    logo: Option<String>,
) -> Vec<RemoteImage> {
    let mut images = Vec::new();

    if let Some(url) = cover {
        images.push(RemoteImage {
            kind: ImageKind::Primary,
            url,
        });
    }
    if let Some(url) = banner {
        images.push(RemoteImage {
            kind: ImageKind::Backdrop,
            url,
        });
    }
    if let Some(url) = logo {
        images.push(RemoteImage {
            kind: ImageKind::Logo,
            url,
        });
    }

    images
}
