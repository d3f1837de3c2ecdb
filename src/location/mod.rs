//! Location suggestion subsystem for NavHUD.
//!
//! Cleans up free-text queries, searches Nominatim with a broader fallback
//! when results are thin, and merges everything into one deduplicated list.

pub mod providers;
pub mod query;
pub mod resolver;
pub mod types;

pub use providers::{GeocodeClient, NominatimClient};
pub use query::{fallback_query, normalize_query};
pub use resolver::{merge_results, SuggestionResolver};
pub use types::{GeocodeError, LocationRecord, SuggestResponse};
