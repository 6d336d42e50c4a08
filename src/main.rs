use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use bangline::bangs::handlers::{handle_list_bangs, handle_search};
use bangline::bangs::registry::BangRegistry;
use bangline::opensearch::handlers::handle_opensearch;
use bangline::suggest::external::{SuggestionsClient, DEFAULT_UPSTREAM};
use bangline::suggest::handlers::handle_suggest;
use bangline::suggest::service::SuggestService;
use bangline::AppState;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;

/// Entry Point
///
/// Builds the bang catalogue and prediction engine once, then serves the
/// three public endpoints.
///
/// ## Environment Variables
/// - `BIND_ADDR`: The local address to bind to (default: `127.0.0.1:8080`).
/// - `SUGGEST_UPSTREAM`: Override for the external suggestions endpoint.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let bind_addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;
    let upstream =
        std::env::var("SUGGEST_UPSTREAM").unwrap_or_else(|_| DEFAULT_UPSTREAM.to_string());

    let registry = Arc::new(BangRegistry::new());
    let client = SuggestionsClient::with_base_url(upstream);
    let suggest = Arc::new(SuggestService::with_client(registry.clone(), client));

    tracing::info!(
        "Catalogue loaded: {} bangs, default !{}",
        registry.len(),
        registry.default_bang().trigger
    );

    let state = AppState::new(registry, suggest);

    let app = Router::new()
        .route("/search", get(handle_search))
        .route("/api/suggest", get(handle_suggest))
        .route("/api/bangs", get(handle_list_bangs))
        .route("/opensearch.xml", get(handle_opensearch))
        .route("/health/routes", get(handle_routes))
        .with_state(state);

    tracing::info!("Listening on {}", bind_addr);
    axum::serve(tokio::net::TcpListener::bind(bind_addr).await?, app).await?;

    Ok(())
}

#[derive(Serialize)]
struct RoutesResponse {
    routes: Vec<&'static str>,
    bangs: usize,
}

async fn handle_routes(State(state): State<AppState>) -> Json<RoutesResponse> {
    Json(RoutesResponse {
        routes: vec![
            "/search",
            "/api/suggest",
            "/api/bangs",
            "/opensearch.xml",
            "/health/routes",
        ],
        bangs: state.registry.len(),
    })
}
