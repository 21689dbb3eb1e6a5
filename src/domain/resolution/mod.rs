// src/domain/resolution/mod.rs
//
// Resolution Domain
//
// Value objects for catalog resolution requests and outcomes.
//
// CRITICAL RULES:
// - All types are pure value objects (immutable)
// - No side effects, no persistence
// - Deterministic: same input → same output

pub mod value_objects;

pub use value_objects::{
    EpisodeLookup,
    EpisodeMetadata,
    MetadataRequest,
    MovieLookup,
    MovieMetadata,
    ResolvedMetadata,
    SearchHit,
    SeasonLookup,
    SeasonMetadata,
    SeriesLookup,
    SeriesMetadata,
    PROVIDER_KEY,
};
