use super::types::SuggestParams;
use crate::AppState;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap};
use axum::response::IntoResponse;

const SUGGEST_CONTENT_TYPE: &str = "application/x-suggestions+json";
const CACHEABLE: &str = "public, max-age=60, stale-while-revalidate=30";
const NO_STORE: &str = "no-store";

/// `GET /api/suggest?q=…` — the OpenSearch suggestions feed.
///
/// Always answers 200 with a `[echoedQuery, [suggestions]]` body; upstream or
/// internal trouble degrades to fewer (or zero) suggestions. Empty queries
/// are served with cache-disabling headers.
pub async fn handle_suggest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SuggestParams>,
) -> impl IntoResponse {
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    let body = state.suggest.suggest(&params.q, accept_language).await;
    let payload =
        serde_json::to_string(&body).unwrap_or_else(|_| r#"["",[]]"#.to_string());

    let cache_control = if params.q.trim().is_empty() {
        NO_STORE
    } else {
        CACHEABLE
    };

    (
        [
            (header::CONTENT_TYPE, SUGGEST_CONTENT_TYPE),
            (header::CACHE_CONTROL, cache_control),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        payload,
    )
}
