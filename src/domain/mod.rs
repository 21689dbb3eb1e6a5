// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod resolution;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use resolution::{
    EpisodeLookup, EpisodeMetadata, MetadataRequest, MovieLookup, MovieMetadata, ResolvedMetadata,
    SearchHit, SeasonLookup, SeasonMetadata, SeriesLookup, SeriesMetadata, PROVIDER_KEY,
};
