use super::resolver::resolve;
use crate::AppState;
use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct BangListItem {
    pub trigger: String,
    pub name: String,
    pub domain: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct BangListResponse {
    pub count: usize,
    pub default_trigger: String,
    pub bangs: Vec<BangListItem>,
}

/// `GET /search?q=…` — resolves the query and redirects to the target
/// engine. Never fails; anything unresolvable lands on the default engine.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Redirect {
    let url = resolve(&state.registry, &params.q);
    tracing::debug!("resolved {:?} -> {}", params.q, url);
    Redirect::to(&url)
}

/// `GET /api/bangs` — the catalogue as JSON, for the shortcut listing page.
pub async fn handle_list_bangs(State(state): State<AppState>) -> Json<BangListResponse> {
    let bangs: Vec<BangListItem> = state
        .registry
        .iter()
        .map(|bang| BangListItem {
            trigger: bang.trigger.to_string(),
            name: bang.name.to_string(),
            domain: bang.domain.to_string(),
            description: bang.description.to_string(),
        })
        .collect();

    Json(BangListResponse {
        count: bangs.len(),
        default_trigger: state.registry.default_bang().trigger.to_string(),
        bangs,
    })
}
