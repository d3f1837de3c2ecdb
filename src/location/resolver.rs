//! Suggestion resolver — orchestrates the two-tier search.
//!
//! Flow:  normalize → primary lookup → (fallback lookup if thin) → merge/dedup → cap

use std::collections::HashSet;

use super::providers::GeocodeClient;
use super::query::{fallback_query, normalize_query};
use super::types::LocationRecord;
use crate::config::SuggestConfig;

/// Turns raw user text into a deduplicated suggestion list.
///
/// Holds no per-request state, so one instance serves every request.
pub struct SuggestionResolver {
    client: Box<dyn GeocodeClient>,
    config: SuggestConfig,
}

impl SuggestionResolver {
    pub fn new(client: Box<dyn GeocodeClient>) -> Self {
        Self::with_config(client, SuggestConfig::default())
    }

    pub fn with_config(client: Box<dyn GeocodeClient>, config: SuggestConfig) -> Self {
        Self { client, config }
    }

    /// Resolve a raw query into suggestions. Never fails: upstream problems
    /// are logged and yield whatever was gathered before them.
    pub fn resolve(&self, raw_query: &str) -> Vec<LocationRecord> {
        let trimmed = raw_query.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let query = normalize_query(trimmed);
        // Quote stripping can leave nothing worth sending upstream.
        if query.trim().is_empty() {
            tracing::debug!(raw = trimmed, "query empty after normalization");
            return Vec::new();
        }
        let fallback = fallback_query(&query);

        // 1. Primary lookup
        tracing::debug!(query = %query, limit = self.config.primary_limit, "primary lookup");
        let primary = match self.client.search(&query, self.config.primary_limit) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "primary lookup failed");
                return Vec::new();
            }
        };

        // 2. Fallback lookup when the primary came back thin
        let mut secondary = Vec::new();
        if primary.len() < self.config.fallback_threshold {
            if let Some(fb) = fallback.as_deref() {
                tracing::debug!(
                    query = %query,
                    fallback = fb,
                    primary_count = primary.len(),
                    limit = self.config.fallback_limit,
                    "fallback lookup"
                );
                match self.client.search(fb, self.config.fallback_limit) {
                    Ok(records) => secondary = records,
                    Err(e) => {
                        tracing::warn!(fallback = fb, error = %e, "fallback lookup failed");
                    }
                }
            }
        }

        merge_results(primary, secondary, self.config.max_results)
    }
}

/// Concatenate primary then fallback records, keeping the first record per
/// `display_name` and dropping records without one.
pub fn merge_results(
    primary: Vec<LocationRecord>,
    fallback: Vec<LocationRecord>,
    max_results: usize,
) -> Vec<LocationRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::with_capacity(max_results.min(primary.len() + fallback.len()));

    for record in primary.into_iter().chain(fallback) {
        if merged.len() >= max_results {
            break;
        }
        let Some(name) = record.display_name() else {
            continue;
        };
        if seen.insert(name.to_string()) {
            merged.push(record);
        }
    }

    merged
}
