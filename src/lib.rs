//! Bangline Library
//!
//! A search shortcut and autocomplete service. Queries submitted from the
//! browser address bar are resolved to a target engine via `!bang` triggers,
//! and every keystroke is answered through an OpenSearch-compatible
//! suggestions feed.
//!
//! ## Architecture Modules
//! - **`bangs`**: The static shortcut catalogue, query-to-URL resolution, and
//!   the two-tier trigger ranking used by suggestions.
//! - **`predict`**: The local prediction engine fusing prefix, trie, n-gram
//!   and fuzzy sources over a fixed corpus.
//! - **`suggest`**: The suggestions endpoint, combining local predictions
//!   with a cached external provider under a hard deadline.
//! - **`opensearch`**: The OpenSearch description document.

pub mod bangs;
pub mod opensearch;
pub mod predict;
pub mod suggest;

use bangs::registry::BangRegistry;
use std::sync::Arc;
use suggest::service::SuggestService;

/// Application state shared across handlers. Built once at startup; all
/// contents are immutable or internally synchronized, so clones are cheap
/// and post-init access needs no locking.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<BangRegistry>,
    pub suggest: Arc<SuggestService>,
}

impl AppState {
    pub fn new(registry: Arc<BangRegistry>, suggest: Arc<SuggestService>) -> Self {
        Self { registry, suggest }
    }
}
