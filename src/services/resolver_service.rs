// src/services/resolver_service.rs
//
// Resolver Service (Identity Resolver)
//
// Resolves ONE content item per call from either a stored external id or a
// bare display name, and dispatches season/episode requests to the
// hierarchy linker. Each call re-fetches fresh catalog data; nothing is
// cached and nothing is mutated, so arbitrarily many resolutions may run
// concurrently.
//
// CRITICAL RULES:
// - A stored external id is trusted: a by-id failure escalates as fatal
//   rather than silently losing the user's match
// - An empty search is a normal outcome (Ok(None)), not an error
// - First-result selection in server order; no relevance re-ranking

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::catalog::models::{Collection, Media};
use crate::catalog::{contains_filter, CatalogApi};
use crate::config::ResolverConfig;
use crate::domain::resolution::{
    MetadataRequest, MovieLookup, MovieMetadata, ResolvedMetadata, SearchHit, SeriesLookup,
    SeriesMetadata,
};
use crate::error::AppResult;
use crate::services::hierarchy_service::HierarchyLinker;
use crate::utils::parse_optional_date;
use chrono::Datelike;

pub struct ResolverService {
    api: Arc<dyn CatalogApi>,
    linker: HierarchyLinker,
}

impl ResolverService {
    pub fn new(api: Arc<dyn CatalogApi>, config: ResolverConfig) -> Self {
        let linker = HierarchyLinker::new(api.clone(), config);
        Self { api, linker }
    }

    /// Resolve a single request. `Ok(None)` means the catalog has no
    /// metadata for this item; the host should leave existing metadata
    /// unchanged. `Err` means the catalog was unreachable or malformed.
    pub async fn resolve(
        &self,
        request: MetadataRequest,
        cancel: &CancellationToken,
    ) -> AppResult<Option<ResolvedMetadata>> {
        match request {
            MetadataRequest::Movie(lookup) => Ok(self
                .resolve_movie(&lookup, cancel)
                .await?
                .map(ResolvedMetadata::Movie)),
            MetadataRequest::Series(lookup) => Ok(self
                .resolve_series(&lookup, cancel)
                .await?
                .map(ResolvedMetadata::Series)),
            MetadataRequest::Season(lookup) => Ok(self
                .linker
                .resolve_season(&lookup, cancel)
                .await?
                .map(ResolvedMetadata::Season)),
            MetadataRequest::Episode(lookup) => Ok(self
                .linker
                .resolve_episode(&lookup, cancel)
                .await?
                .map(ResolvedMetadata::Episode)),
        }
    }

    /// Movie resolution against the media endpoints.
    pub async fn resolve_movie(
        &self,
        lookup: &MovieLookup,
        cancel: &CancellationToken,
    ) -> AppResult<Option<MovieMetadata>> {
        if let Some(id) = lookup.external_id.as_deref() {
            let media = match self.api.get_media_by_id(id, cancel).await {
                Ok(media) => media,
                Err(err) => {
                    log::error!("by-id media lookup failed for {}: {}", id, err);
                    return Err(err);
                }
            };
            return Ok(Some(map_media_to_movie(media)));
        }

        let filter = contains_filter("title", &lookup.name);
        let page = self.api.get_media(&filter, cancel).await?;
        log::debug!(
            "media search for {:?} returned {} record(s)",
            lookup.name,
            page.media.len()
        );

        Ok(page.media.into_iter().next().map(map_media_to_movie))
    }

    /// Series resolution against the collection endpoints.
    pub async fn resolve_series(
        &self,
        lookup: &SeriesLookup,
        cancel: &CancellationToken,
    ) -> AppResult<Option<SeriesMetadata>> {
        if let Some(id) = lookup.external_id.as_deref() {
            let collection = match self.api.get_collection_by_id(id, cancel).await {
                Ok(collection) => collection,
                Err(err) => {
                    log::error!("by-id collection lookup failed for {}: {}", id, err);
                    return Err(err);
                }
            };
            return Ok(Some(map_collection_to_series(collection)));
        }

        let filter = contains_filter("name", &lookup.name);
        let page = self.api.get_collections(&filter, cancel).await?;
        log::debug!(
            "collection search for {:?} returned {} record(s)",
            lookup.name,
            page.collections.len()
        );

        Ok(page
            .collections
            .into_iter()
            .next()
            .map(map_collection_to_series))
    }

    // ========================================================================
    // SEARCH LISTINGS (host-facing, all hits in server order)
    // ========================================================================

    pub async fn search_movies(
        &self,
        name: &str,
        cancel: &CancellationToken,
    ) -> AppResult<Vec<SearchHit>> {
        let page = self
            .api
            .get_media(&contains_filter("title", name), cancel)
            .await?;

        Ok(page
            .media
            .into_iter()
            .map(|media| SearchHit {
                external_id: media.id,
                name: media.title,
                image_url: media.cover_url,
            })
            .collect())
    }

    pub async fn search_series(
        &self,
        name: &str,
        cancel: &CancellationToken,
    ) -> AppResult<Vec<SearchHit>> {
        let page = self
            .api
            .get_collections(&contains_filter("name", name), cancel)
            .await?;

        Ok(page
            .collections
            .into_iter()
            .map(|collection| SearchHit {
                external_id: collection.id,
                name: collection.name,
                image_url: collection.cover_url,
            })
            .collect())
    }
}

// ============================================================================
// OUTPUT MAPPING
// ============================================================================

fn map_media_to_movie(media: Media) -> MovieMetadata {
    let premiere_date = parse_optional_date(media.start_date.as_deref());

    MovieMetadata {
        external_id: media.id,
        name: media.title,
        overview: media.description,
        production_year: premiere_date.map(|d| d.year()),
        premiere_date,
        rating: media.score,
        studios: media.creators,
        tags: media.tags,
    }
}

fn map_collection_to_series(collection: Collection) -> SeriesMetadata {
    SeriesMetadata {
        external_id: collection.id,
        name: collection.name,
    }
}
