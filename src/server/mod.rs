mod handlers;
mod state;
mod static_files;

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use state::AppState;
use std::io;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::location::SuggestionResolver;

/// Build the application router. Routes are fixed here; the resolver is the
/// only state and it is shared read-only.
pub fn build_router(resolver: SuggestionResolver) -> Router {
    let state = Arc::new(AppState { resolver });

    // Suggestions track live upstream data; don't let browsers reuse them.
    let no_store = SetResponseHeaderLayer::overriding(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store"),
    );

    Router::new()
        .route("/", get(handlers::index))
        .route("/about", get(handlers::about))
        .route("/static/style.css", get(handlers::style))
        .route("/static/app.js", get(handlers::script))
        .route("/api/suggest", get(handlers::suggest).layer(no_store))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start(host: &str, port: u16, resolver: SuggestionResolver) -> io::Result<()> {
    let app = build_router(resolver);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        io::Error::new(e.kind(), format!("cannot bind to {}: {}", addr, e))
    })?;

    tracing::info!("NavHUD server listening on http://{}", addr);
    tracing::info!("Press Ctrl+C to stop.");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
