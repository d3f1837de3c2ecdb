use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Json, Response};
use std::sync::Arc;
use std::time::Instant;

use crate::location::SuggestResponse;

use super::state::AppState;
use super::static_files;

// ─── Static file handlers ────────────────────────────────────────

pub async fn index() -> Html<&'static str> {
    Html(static_files::INDEX_HTML)
}

pub async fn about() -> Html<&'static str> {
    Html(static_files::ABOUT_HTML)
}

pub async fn style() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css")],
        static_files::STYLE_CSS,
    )
        .into_response()
}

pub async fn script() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        static_files::APP_JS,
    )
        .into_response()
}

// ─── GET /api/suggest ────────────────────────────────────────────

/// First `q` value wins when the key repeats.
fn first_q(pairs: Vec<(String, String)>) -> String {
    pairs
        .into_iter()
        .find_map(|(key, value)| (key == "q").then_some(value))
        .unwrap_or_default()
}

/// Always answers 200; a malformed query string or upstream trouble shows up
/// as fewer (or no) results.
pub async fn suggest(
    State(state): State<Arc<AppState>>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<SuggestResponse> {
    let start = Instant::now();
    let query = match params {
        Ok(Query(pairs)) => first_q(pairs),
        Err(e) => {
            tracing::warn!(error = %e, "unreadable query string");
            String::new()
        }
    };

    // The geocoder client blocks, so keep it off the async workers.
    let worker_state = Arc::clone(&state);
    let worker_query = query.clone();
    let results = match tokio::task::spawn_blocking(move || {
        worker_state.resolver.resolve(&worker_query)
    })
    .await
    {
        Ok(results) => results,
        Err(e) => {
            tracing::error!(error = %e, "suggestion task failed");
            Vec::new()
        }
    };

    tracing::info!(
        query = query.trim(),
        results = results.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "GET /api/suggest"
    );

    Json(SuggestResponse { results })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_first_q_takes_first_of_repeated() {
        assert_eq!(first_q(pairs(&[("q", "Paris"), ("q", "London")])), "Paris");
    }

    #[test]
    fn test_first_q_ignores_other_keys() {
        assert_eq!(first_q(pairs(&[("lang", "en"), ("q", "Oslo")])), "Oslo");
        assert_eq!(first_q(pairs(&[("lang", "en")])), "");
    }
}
