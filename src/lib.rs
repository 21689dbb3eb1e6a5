// src/lib.rs
// MediaHub - Remote catalog metadata resolver
//
// Architecture:
// - Domain-centric: resolution outcomes are pure value objects
// - Boundary-explicit: the catalog is reached only through `CatalogApi`
// - Explicit: no global client instance, no implicit behavior
// - Read-only: the catalog is never written to; the only produced artifact
//   is an external id the HOST persists under `PROVIDER_KEY`

// ============================================================================
// MODULES
// ============================================================================

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod utils;

// ============================================================================
// PUBLIC API - Domain Value Objects
// ============================================================================

pub use domain::{
    EpisodeLookup,
    EpisodeMetadata,
    // Requests
    MetadataRequest,
    MovieLookup,
    MovieMetadata,
    // Outcomes
    ResolvedMetadata,
    SearchHit,
    SeasonLookup,
    SeasonMetadata,
    SeriesLookup,
    SeriesMetadata,
    PROVIDER_KEY,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::{ResolverConfig, DEFAULT_API_BASE_URL};

// ============================================================================
// PUBLIC API - Catalog Boundary
// ============================================================================

pub use catalog::{CatalogApi, HttpCatalogClient};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    // Hierarchy Linker
    HierarchyLinker,
    ImageKind,
    // Image Service
    ImageService,
    RemoteImage,
    // Identity Resolver
    ResolverService,
};

// ============================================================================
// PUBLIC API - Utilities (cross-system contracts)
// ============================================================================

pub use utils::{parse_catalog_date, slugify};
