// src/config/mod.rs
//
// Resolver Configuration
//
// Owned by the embedding host; passed into the catalog client and the
// services at construction time. No global instance exists.

use serde::{Deserialize, Serialize};

/// Default catalog endpoint used when the host provides no override.
pub const DEFAULT_API_BASE_URL: &str = "https://mediahub.example.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Base URL of the catalog API (no trailing slash required).
    pub api_base_url: String,

    /// Base URL of the public web UI, used to build external-id links.
    pub web_base_url: String,

    /// Offset added to the host's episode number before comparing it
    /// against the catalog part index. The catalog contract does not pin
    /// the index base, so deployments against a 0-based catalog set -1.
    pub episode_index_offset: i64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            web_base_url: DEFAULT_API_BASE_URL.to_string(),
            episode_index_offset: 0,
        }
    }
}

impl ResolverConfig {
    /// Public web page for a collection (series) id.
    pub fn collection_url(&self, id: &str) -> String {
        format!("{}/collections/{}", self.web_base_url.trim_end_matches('/'), id)
    }

    /// Public web page for a media (movie/season) id.
    pub fn media_url(&self, id: &str) -> String {
        format!("{}/media/{}", self.web_base_url.trim_end_matches('/'), id)
    }
}
