// src/services/hierarchy_service.rs
//
// Hierarchy Linker
//
// Resolves seasons and episodes under an already-resolved parent:
// - Season: slug-match the directory name against the parent collection's
//   item list
// - Episode: exact index match against the parent season's part list
//
// CRITICAL RULES:
// - An absent parent id is an unmet precondition → Ok(None), never an error
// - No fuzzy fallback, no nearest-match
// - Duplicate slugs are broken by first match in server order
// - A season's persisted id is the referenced media id, so episode lookups
//   reuse the plain media path

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::catalog::CatalogApi;
use crate::config::ResolverConfig;
use crate::domain::resolution::{EpisodeLookup, EpisodeMetadata, SeasonLookup, SeasonMetadata};
use crate::error::AppResult;
use crate::utils::{parse_optional_date, slugify};
use chrono::Datelike;

pub struct HierarchyLinker {
    api: Arc<dyn CatalogApi>,
    config: ResolverConfig,
}

impl HierarchyLinker {
    pub fn new(api: Arc<dyn CatalogApi>, config: ResolverConfig) -> Self {
        Self { api, config }
    }

    /// Resolve a season by directory-name slug within its parent series.
    pub async fn resolve_season(
        &self,
        lookup: &SeasonLookup,
        cancel: &CancellationToken,
    ) -> AppResult<Option<SeasonMetadata>> {
        let Some(series_id) = lookup.series_id.as_deref() else {
            // A season with no known parent cannot be resolved.
            return Ok(None);
        };

        let items = match self.api.get_collection_items(series_id, cancel).await {
            Ok(items) => items,
            Err(err) => {
                log::error!("collection items lookup failed for {}: {}", series_id, err);
                return Err(err);
            }
        };

        let slug = slugify(&lookup.dir_name);
        log::debug!("matching season dir {:?} as slug {:?}", lookup.dir_name, slug);

        let matched = items
            .items
            .into_iter()
            .find(|item| item.search_slug == slug);

        let Some(item) = matched else {
            return Ok(None);
        };

        let premiere_date = parse_optional_date(item.start_date.as_deref());
        let end_date = parse_optional_date(item.end_date.as_deref());

        Ok(Some(SeasonMetadata {
            external_id: item.media_id,
            name: item.collection_name,
            season_number: item.position,
            overview: item.description,
            production_year: premiere_date.map(|d| d.year()),
            premiere_date,
            end_date,
            rating: item.score,
            studios: item.creators,
            tags: item.tags,
        }))
    }

    /// Resolve an episode by exact part index within its parent season.
    pub async fn resolve_episode(
        &self,
        lookup: &EpisodeLookup,
        cancel: &CancellationToken,
    ) -> AppResult<Option<EpisodeMetadata>> {
        let Some(season_id) = lookup.season_id.as_deref() else {
            return Ok(None);
        };

        let parts = match self.api.get_media_parts(season_id, cancel).await {
            Ok(parts) => parts,
            Err(err) => {
                log::error!("media parts lookup failed for {}: {}", season_id, err);
                return Err(err);
            }
        };

        let target = lookup.episode_number + self.config.episode_index_offset;
        let matched = parts.parts.into_iter().find(|part| part.index == target);

        // Episodes legitimately absent from the catalog resolve to no
        // metadata rather than aborting the season's processing.
        let Some(part) = matched else {
            return Ok(None);
        };

        Ok(Some(EpisodeMetadata {
            external_id: format!("{}/{}", part.media_id, part.index),
            name: part.name,
            index: lookup.episode_number,
            premiere_date: parse_optional_date(part.release_date.as_deref()),
        }))
    }
}
