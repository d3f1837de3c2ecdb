//! Tunables for the geocoder client and the suggestion resolver.

use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = "NavHUD/3.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 6;

/// How to reach the upstream geocoding search endpoint.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub endpoint: String,
    pub user_agent: String,
    /// Applies to each lookup separately.
    pub timeout: Duration,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Result limits for the two-tier search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestConfig {
    /// `limit` sent with the primary lookup.
    pub primary_limit: usize,
    /// `limit` sent with the fallback lookup.
    pub fallback_limit: usize,
    /// The fallback runs only when the primary lookup returns fewer records.
    pub fallback_threshold: usize,
    /// Cap on the merged result set.
    pub max_results: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            primary_limit: 8,
            fallback_limit: 5,
            fallback_threshold: 3,
            max_results: 10,
        }
    }
}
