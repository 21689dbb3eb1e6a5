// src/domain/resolution/value_objects.rs
//
// Resolution Value Objects
//
// Pure, immutable data structures representing resolution requests and
// outcomes. They are the bridge between the catalog wire models and the
// host's own library-item types.
//
// CRITICAL INVARIANTS:
// - All fields are immutable (no &mut self methods)
// - No side effects, no I/O
// - Deterministic construction
// - Clone + Debug + Serialize for traceability

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Namespace key under which the host stores a resolved external id.
/// One identifier per (host item, namespace).
pub const PROVIDER_KEY: &str = "MediaHub";

// ============================================================================
// REQUESTS (CLOSED VARIANT SET)
// ============================================================================

/// What the host wants resolved. Dispatch happens once, at the resolver
/// entry point; there is no per-operation type sniffing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MetadataRequest {
    Movie(MovieLookup),
    Series(SeriesLookup),
    Season(SeasonLookup),
    Episode(EpisodeLookup),
}

/// Movie resolution input: a stored id wins over the display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieLookup {
    /// Previously persisted external id, if the host item carries one.
    pub external_id: Option<String>,

    /// Display name used for the search fallback.
    pub name: String,
}

/// Series resolution input, same strategy split as movies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesLookup {
    pub external_id: Option<String>,
    pub name: String,
}

/// Season resolution input. Without a resolved parent series there is
/// nothing to enumerate, so `series_id: None` resolves to no match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonLookup {
    /// The parent series' stored external id (a collection id).
    pub series_id: Option<String>,

    /// The season's directory name on disk; slugified for matching.
    pub dir_name: String,
}

/// Episode resolution input. The season id is the media id persisted by
/// season resolution, so episode lookups reuse the movie-style media path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeLookup {
    /// The parent season's stored external id (a media id).
    pub season_id: Option<String>,

    /// The host's episode number, matched exactly against part indexes.
    pub episode_number: i64,
}

// ============================================================================
// OUTCOMES
// ============================================================================

/// A successful resolution, one variant per request kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ResolvedMetadata {
    Movie(MovieMetadata),
    Series(SeriesMetadata),
    Season(SeasonMetadata),
    Episode(EpisodeMetadata),
}

impl ResolvedMetadata {
    /// The external id the host should persist under [`PROVIDER_KEY`].
    pub fn external_id(&self) -> &str {
        match self {
            ResolvedMetadata::Movie(m) => &m.external_id,
            ResolvedMetadata::Series(s) => &s.external_id,
            ResolvedMetadata::Season(s) => &s.external_id,
            ResolvedMetadata::Episode(e) => &e.external_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ResolvedMetadata::Movie(m) => &m.name,
            ResolvedMetadata::Series(s) => &s.name,
            ResolvedMetadata::Season(s) => &s.name,
            ResolvedMetadata::Episode(e) => &e.name,
        }
    }
}

/// Resolved movie metadata mapped from a catalog media record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieMetadata {
    /// Catalog media id, persisted for future by-id lookups.
    pub external_id: String,

    pub name: String,
    pub overview: Option<String>,

    /// Parsed start date; also the source of `production_year`.
    pub premiere_date: Option<NaiveDate>,
    pub production_year: Option<i32>,

    /// Catalog score, 0-10.
    pub rating: Option<f32>,

    /// Creator list, passed through verbatim.
    pub studios: Vec<String>,

    /// Tag list, passed through verbatim.
    pub tags: Vec<String>,
}

/// Resolved series metadata mapped from a catalog collection record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesMetadata {
    /// Catalog collection id.
    pub external_id: String,

    pub name: String,
}

/// Resolved season metadata mapped from a collection item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonMetadata {
    /// The referenced media id, NOT the collection item's own identity.
    /// Episode lookups use it as a plain media id.
    pub external_id: String,

    pub name: String,

    /// Taken verbatim from the item's position field.
    pub season_number: i64,

    pub overview: Option<String>,
    pub premiere_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub production_year: Option<i32>,
    pub rating: Option<f32>,
    pub studios: Vec<String>,
    pub tags: Vec<String>,
}

/// Resolved episode metadata mapped from a media part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeMetadata {
    /// `"{media_id}/{index}"`; parts have no id of their own.
    pub external_id: String,

    pub name: String,

    /// The host episode number the part matched.
    pub index: i64,

    pub premiere_date: Option<NaiveDate>,
}

/// One entry of a host-facing search listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub external_id: String,
    pub name: String,
    pub image_url: Option<String>,
}

// ============================================================================
// TESTS
// ============================================================================
