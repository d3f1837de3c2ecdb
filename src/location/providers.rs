//! Geocoding providers: the client seam and the Nominatim implementation.

use std::io;
use std::time::Duration;

use super::types::{GeocodeError, LocationRecord};
use crate::config::GeocoderConfig;

/// A single forward-geocoding search.
///
/// Implementations perform exactly one request per call; retries and
/// fallbacks belong to the caller.
pub trait GeocodeClient: Send + Sync {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<LocationRecord>, GeocodeError>;
}

// ─── Nominatim provider ─────────────────────────────────────────

/// OpenStreetMap Nominatim `/search` over blocking HTTP.
pub struct NominatimClient {
    agent: ureq::Agent,
    endpoint: String,
    timeout: Duration,
}

impl NominatimClient {
    pub fn new(config: &GeocoderConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();

        Self {
            agent,
            endpoint: config.endpoint.clone(),
            timeout: config.timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl GeocodeClient for NominatimClient {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<LocationRecord>, GeocodeError> {
        let response = self
            .agent
            .get(&self.endpoint)
            .query("q", query)
            .query("format", "json")
            .query("addressdetails", "1")
            .query("limit", &limit.to_string())
            .call();

        let response = match response {
            Ok(r) => r,
            Err(ureq::Error::Status(code, _)) => {
                tracing::warn!(code, query, "geocoder returned non-success status");
                return Ok(Vec::new());
            }
            Err(ureq::Error::Transport(t)) => return Err(transport_error(t, self.timeout)),
        };

        // ureq hands back 1xx-3xx as Ok; only a plain 200 carries results.
        if response.status() != 200 {
            tracing::warn!(code = response.status(), query, "geocoder returned non-success status");
            return Ok(Vec::new());
        }

        response
            .into_json::<Vec<LocationRecord>>()
            .map_err(|e| body_error(e, self.timeout))
    }
}

fn is_timeout(kind: io::ErrorKind) -> bool {
    matches!(kind, io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}

fn transport_error(err: ureq::Transport, timeout: Duration) -> GeocodeError {
    let timed_out = std::error::Error::source(&err)
        .and_then(|source| source.downcast_ref::<io::Error>())
        .is_some_and(|io_err| is_timeout(io_err.kind()));

    if timed_out {
        GeocodeError::Timeout(timeout)
    } else {
        GeocodeError::Network(err.to_string())
    }
}

fn body_error(err: io::Error, timeout: Duration) -> GeocodeError {
    match err.kind() {
        kind if is_timeout(kind) => GeocodeError::Timeout(timeout),
        io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => {
            GeocodeError::InvalidResponse(err.to_string())
        }
        _ => GeocodeError::Network(err.to_string()),
    }
}
