// src/services/resolver_service_tests.rs
//
// UNIT TESTS: Resolver Service and Hierarchy Linker
//
// INVARIANTS TESTED:
// - A stored external id resolves by id and echoes that id back
// - A failing by-id envelope escalates with the catalog's code/message
// - An empty search is Ok(None), never an error
// - Season matching is exact-slug, first match, position-numbered, and
//   persists the referenced media id
// - Episode matching is exact-index with the configured offset applied
// - Absent parent ids short-circuit to Ok(None) without touching the wire

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::catalog::models::{
    Collection, CollectionItem, CollectionItems, CollectionPage, Media, MediaPage, MediaPart,
    MediaParts, Page,
};
use crate::catalog::MockCatalogApi;
use crate::config::ResolverConfig;
use crate::domain::resolution::{
    EpisodeLookup, MetadataRequest, MovieLookup, ResolvedMetadata, SeasonLookup, SeriesLookup,
};
use crate::error::AppError;
use crate::services::{HierarchyLinker, ResolverService};

// ============================================================================
// FIXTURES
// ============================================================================

fn sample_page(total: i64) -> Page {
    Page {
        current_page: 1,
        per_page: 20,
        total_items: total,
        total_pages: 1,
    }
}

fn sample_media(id: &str, title: &str) -> Media {
    Media {
        id: id.to_string(),
        title: title.to_string(),
        description: Some("an overview".to_string()),
        media_type: "movie".to_string(),
        score: Some(8.2),
        status: "finished".to_string(),
        rating: "PG-13".to_string(),
        part_count: 1,
        airing_season: None,
        start_date: Some("2019-07-04".to_string()),
        end_date: None,
        creators: vec!["Studio A".to_string()],
        tags: vec!["action".to_string(), "drama".to_string()],
        cover_url: Some("https://img.example.com/cover.jpg".to_string()),
        banner_url: None,
        logo_url: None,
    }
}

fn sample_collection(id: &str, name: &str) -> Collection {
    Collection {
        id: id.to_string(),
        collection_type: "series".to_string(),
        name: name.to_string(),
        cover_url: None,
        banner_url: None,
        logo_url: None,
    }
}

fn sample_item(media_id: &str, slug: &str, position: i64) -> CollectionItem {
    CollectionItem {
        collection_id: "col-1".to_string(),
        media_id: media_id.to_string(),
        collection_name: "Some Show".to_string(),
        search_slug: slug.to_string(),
        position,
        title: "Some Show Season".to_string(),
        description: Some("season overview".to_string()),
        media_type: "season".to_string(),
        score: Some(7.1),
        status: "finished".to_string(),
        rating: "PG".to_string(),
        part_count: 12,
        airing_season: None,
        start_date: Some("2020-04-01".to_string()),
        end_date: Some("2020-06-24".to_string()),
        creators: vec!["Studio B".to_string()],
        tags: vec!["comedy".to_string()],
        cover_url: None,
        banner_url: None,
        logo_url: None,
    }
}

fn sample_part(media_id: &str, index: i64, name: &str) -> MediaPart {
    MediaPart {
        index,
        media_id: media_id.to_string(),
        name: name.to_string(),
        release_date: Some("2020-04-08".to_string()),
    }
}

fn service_with(api: MockCatalogApi) -> ResolverService {
    ResolverService::new(Arc::new(api), ResolverConfig::default())
}

// ============================================================================
// IDENTITY RESOLVER: MOVIES
// ============================================================================

#[tokio::test]
async fn test_movie_by_id_echoes_external_id() {
    let mut api = MockCatalogApi::new();
    api.expect_get_media_by_id()
        .withf(|id, _| id == "med-1")
        .returning(|id, _| Ok(sample_media(id, "Some Movie")));

    let service = service_with(api);
    let movie = service
        .resolve_movie(
            &MovieLookup {
                external_id: Some("med-1".to_string()),
                name: "ignored".to_string(),
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap()
        .expect("by-id lookup must yield metadata");

    assert_eq!(movie.external_id, "med-1");
    assert_eq!(movie.name, "Some Movie");
    assert_eq!(movie.overview.as_deref(), Some("an overview"));
    assert_eq!(movie.production_year, Some(2019));
    assert_eq!(movie.rating, Some(8.2));
    assert_eq!(movie.studios, vec!["Studio A".to_string()]);
    assert_eq!(movie.tags.len(), 2);
}

#[tokio::test]
async fn test_movie_by_id_failure_propagates() {
    let mut api = MockCatalogApi::new();
    api.expect_get_media_by_id().returning(|_, _| {
        Err(AppError::Api {
            code: 500,
            kind: "INTERNAL".to_string(),
            message: "boom".to_string(),
        })
    });

    let service = service_with(api);
    let result = service
        .resolve_movie(
            &MovieLookup {
                external_id: Some("med-1".to_string()),
                name: "ignored".to_string(),
            },
            &CancellationToken::new(),
        )
        .await;

    match result {
        Err(AppError::Api { code, message, .. }) => {
            assert_eq!(code, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected fatal Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_movie_search_empty_is_no_match() {
    let mut api = MockCatalogApi::new();
    api.expect_get_media()
        .withf(|filter, _| filter == "title % \"%Unlisted Title%\"")
        .returning(|_, _| {
            Ok(MediaPage {
                page: sample_page(0),
                media: vec![],
            })
        });

    let service = service_with(api);
    let resolved = service
        .resolve_movie(
            &MovieLookup {
                external_id: None,
                name: "Unlisted Title".to_string(),
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert!(resolved.is_none());
}

#[tokio::test]
async fn test_movie_search_picks_first_in_server_order() {
    let mut api = MockCatalogApi::new();
    api.expect_get_media().returning(|_, _| {
        Ok(MediaPage {
            page: sample_page(2),
            media: vec![
                sample_media("med-first", "First Result"),
                sample_media("med-second", "Second Result"),
            ],
        })
    });

    let service = service_with(api);
    let movie = service
        .resolve_movie(
            &MovieLookup {
                external_id: None,
                name: "Result".to_string(),
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(movie.external_id, "med-first");
}

#[tokio::test]
async fn test_movie_unparseable_date_is_absorbed() {
    let mut api = MockCatalogApi::new();
    api.expect_get_media_by_id().returning(|id, _| {
        let mut media = sample_media(id, "No Date");
        media.start_date = Some("not-a-date".to_string());
        Ok(media)
    });

    let service = service_with(api);
    let movie = service
        .resolve_movie(
            &MovieLookup {
                external_id: Some("med-9".to_string()),
                name: String::new(),
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap()
        .unwrap();

    assert!(movie.premiere_date.is_none());
    assert!(movie.production_year.is_none());
}

// ============================================================================
// IDENTITY RESOLVER: SERIES
// ============================================================================

#[tokio::test]
async fn test_series_by_id() {
    let mut api = MockCatalogApi::new();
    api.expect_get_collection_by_id()
        .withf(|id, _| id == "col-1")
        .returning(|id, _| Ok(sample_collection(id, "Some Show")));

    let service = service_with(api);
    let series = service
        .resolve_series(
            &SeriesLookup {
                external_id: Some("col-1".to_string()),
                name: String::new(),
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(series.external_id, "col-1");
    assert_eq!(series.name, "Some Show");
}

#[tokio::test]
async fn test_series_search_fallback() {
    let mut api = MockCatalogApi::new();
    api.expect_get_collections()
        .withf(|filter, _| filter == "name % \"%Some Show%\"")
        .returning(|_, _| {
            Ok(CollectionPage {
                page: sample_page(1),
                collections: vec![sample_collection("col-7", "Some Show")],
            })
        });

    let service = service_with(api);
    let series = service
        .resolve_series(
            &SeriesLookup {
                external_id: None,
                name: "Some Show".to_string(),
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(series.external_id, "col-7");
}

// ============================================================================
// HIERARCHY LINKER: SEASONS
// ============================================================================

#[tokio::test]
async fn test_season_slug_match() {
    let mut api = MockCatalogApi::new();
    api.expect_get_collection_items()
        .withf(|id, _| id == "col-1")
        .returning(|_, _| {
            Ok(CollectionItems {
                items: vec![
                    sample_item("med-s1", "season-1", 1),
                    sample_item("med-s2", "season-2", 2),
                ],
            })
        });

    let linker = HierarchyLinker::new(Arc::new(api), ResolverConfig::default());
    let season = linker
        .resolve_season(
            &SeasonLookup {
                series_id: Some("col-1".to_string()),
                dir_name: "Season 2".to_string(),
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap()
        .expect("slug must match the second item");

    // The persisted id is the referenced media id, not the item identity.
    assert_eq!(season.external_id, "med-s2");
    assert_eq!(season.season_number, 2);
    assert_eq!(season.name, "Some Show");
    assert_eq!(season.production_year, Some(2020));
    assert!(season.end_date.is_some());
}

#[tokio::test]
async fn test_season_no_slug_match_is_no_match() {
    let mut api = MockCatalogApi::new();
    api.expect_get_collection_items().returning(|_, _| {
        Ok(CollectionItems {
            items: vec![sample_item("med-s1", "season-1", 1)],
        })
    });

    let linker = HierarchyLinker::new(Arc::new(api), ResolverConfig::default());
    let season = linker
        .resolve_season(
            &SeasonLookup {
                series_id: Some("col-1".to_string()),
                dir_name: "Specials".to_string(),
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert!(season.is_none());
}

#[tokio::test]
async fn test_season_duplicate_slugs_first_match_wins() {
    let mut api = MockCatalogApi::new();
    api.expect_get_collection_items().returning(|_, _| {
        Ok(CollectionItems {
            items: vec![
                sample_item("med-a", "season-1", 1),
                sample_item("med-b", "season-1", 4),
            ],
        })
    });

    let linker = HierarchyLinker::new(Arc::new(api), ResolverConfig::default());
    let season = linker
        .resolve_season(
            &SeasonLookup {
                series_id: Some("col-1".to_string()),
                dir_name: "Season 1".to_string(),
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(season.external_id, "med-a");
}

#[tokio::test]
async fn test_season_without_series_id_skips_the_wire() {
    // No expectations set: any API call would panic the mock.
    let api = MockCatalogApi::new();

    let linker = HierarchyLinker::new(Arc::new(api), ResolverConfig::default());
    let season = linker
        .resolve_season(
            &SeasonLookup {
                series_id: None,
                dir_name: "Season 1".to_string(),
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert!(season.is_none());
}

// ============================================================================
// HIERARCHY LINKER: EPISODES
// ============================================================================

#[tokio::test]
async fn test_episode_exact_index_match() {
    let mut api = MockCatalogApi::new();
    api.expect_get_media_parts()
        .withf(|id, _| id == "med-s1")
        .returning(|_, _| {
            Ok(MediaParts {
                parts: vec![
                    sample_part("med-s1", 1, "First"),
                    sample_part("med-s1", 2, "Second"),
                ],
            })
        });

    let linker = HierarchyLinker::new(Arc::new(api), ResolverConfig::default());
    let episode = linker
        .resolve_episode(
            &EpisodeLookup {
                season_id: Some("med-s1".to_string()),
                episode_number: 2,
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(episode.name, "Second");
    assert_eq!(episode.index, 2);
    assert_eq!(episode.external_id, "med-s1/2");
    assert!(episode.premiere_date.is_some());
}

#[tokio::test]
async fn test_episode_absent_index_is_no_match() {
    let mut api = MockCatalogApi::new();
    api.expect_get_media_parts().returning(|_, _| {
        Ok(MediaParts {
            parts: vec![sample_part("med-s1", 1, "First")],
        })
    });

    let linker = HierarchyLinker::new(Arc::new(api), ResolverConfig::default());
    let episode = linker
        .resolve_episode(
            &EpisodeLookup {
                season_id: Some("med-s1".to_string()),
                episode_number: 99,
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert!(episode.is_none());
}

#[tokio::test]
async fn test_episode_index_offset_applied() {
    let mut api = MockCatalogApi::new();
    api.expect_get_media_parts().returning(|_, _| {
        Ok(MediaParts {
            parts: vec![sample_part("med-s1", 0, "Zero-based opener")],
        })
    });

    let config = ResolverConfig {
        episode_index_offset: -1,
        ..Default::default()
    };
    let linker = HierarchyLinker::new(Arc::new(api), config);
    let episode = linker
        .resolve_episode(
            &EpisodeLookup {
                season_id: Some("med-s1".to_string()),
                episode_number: 1,
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap()
        .unwrap();

    // The host-facing index stays the host's numbering.
    assert_eq!(episode.index, 1);
    assert_eq!(episode.external_id, "med-s1/0");
}

#[tokio::test]
async fn test_episode_without_season_id_skips_the_wire() {
    let api = MockCatalogApi::new();

    let linker = HierarchyLinker::new(Arc::new(api), ResolverConfig::default());
    let episode = linker
        .resolve_episode(
            &EpisodeLookup {
                season_id: None,
                episode_number: 1,
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert!(episode.is_none());
}

// ============================================================================
// ENTRY-POINT DISPATCH
// ============================================================================

#[tokio::test]
async fn test_resolve_dispatches_once_per_variant() {
    let mut api = MockCatalogApi::new();
    api.expect_get_media_by_id()
        .returning(|id, _| Ok(sample_media(id, "Some Movie")));

    let service = service_with(api);
    let resolved = service
        .resolve(
            MetadataRequest::Movie(MovieLookup {
                external_id: Some("med-1".to_string()),
                name: String::new(),
            }),
            &CancellationToken::new(),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(resolved.name(), "Some Movie");
    match resolved {
        ResolvedMetadata::Movie(movie) => assert_eq!(movie.external_id, "med-1"),
        other => panic!("expected movie metadata, got {other:?}"),
    }
}

// ============================================================================
// SEARCH LISTINGS
// ============================================================================

#[tokio::test]
async fn test_search_movies_maps_hits() {
    let mut api = MockCatalogApi::new();
    api.expect_get_media().returning(|_, _| {
        Ok(MediaPage {
            page: sample_page(2),
            media: vec![
                sample_media("med-1", "Some Movie"),
                sample_media("med-2", "Some Movie II"),
            ],
        })
    });

    let service = service_with(api);
    let hits = service
        .search_movies("Some Movie", &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].external_id, "med-1");
    assert_eq!(
        hits[0].image_url.as_deref(),
        Some("https://img.example.com/cover.jpg")
    );
}

#[tokio::test]
async fn test_search_series_maps_hits() {
    let mut api = MockCatalogApi::new();
    api.expect_get_collections().returning(|_, _| {
        Ok(CollectionPage {
            page: sample_page(1),
            collections: vec![sample_collection("col-1", "Some Show")],
        })
    });

    let service = service_with(api);
    let hits = service
        .search_series("Some Show", &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Some Show");
    assert!(hits[0].image_url.is_none());
}
