mod handlers;
mod state;

use axum::Router;
use axum::routing::{get, post};
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::daily::DailyLocationProvider;

pub fn build_router() -> Router {
    router_with_provider(DailyLocationProvider::new())
}

/// Router over a specific provider (for testing and --cache-file).
pub fn router_with_provider(provider: DailyLocationProvider) -> Router {
    let state = Arc::new(AppState { provider });

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/get-location", get(handlers::get_location))
        .route("/api/check-distance", post(handlers::check_distance))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(host: &str, port: u16, provider: DailyLocationProvider) {
    let app = router_with_provider(provider);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    eprintln!("  Street Guess server listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        });
}
