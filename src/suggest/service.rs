//! Suggest Service Logic
//!
//! Routes a raw address-bar query to the right suggestion pipeline and
//! assembles the ordered, deduplicated response.
//!
//! 1. **Route**: bang-prefixed queries go to the catalogue path, everything
//!    else to the plain-text path.
//! 2. **Bang path**: ranked bang matches come first; with search terms
//!    present, external suggestions are re-prefixed with the best trigger.
//! 3. **Plain path**: external fetch and local prediction run concurrently;
//!    externals are emitted first, then the ranked local predictions.
//! 4. **Sink**: every emission passes a normalizing dedup sink capped at 8.

use super::external::SuggestionsClient;
use super::types::SuggestBody;
use crate::bangs::matcher::{match_bangs, MAX_NAME_MATCHES, MAX_TRIGGER_MATCHES};
use crate::bangs::registry::BangRegistry;
use crate::predict::engine::PredictionEngine;
use crate::predict::types::{Prediction, PredictionSource};
use std::collections::HashSet;
use std::sync::Arc;

/// Maximum suggestions in a response, per the OpenSearch wire contract.
pub const MAX_SUGGESTIONS: usize = 8;

const EXTERNAL_BASE_SCORE: f64 = 0.9;
const EXTERNAL_MATCH_BOOST: f64 = 0.15;

pub struct SuggestService {
    registry: Arc<BangRegistry>,
    engine: PredictionEngine,
    client: SuggestionsClient,
}

impl SuggestService {
    pub fn new(registry: Arc<BangRegistry>) -> Self {
        Self::with_client(registry, SuggestionsClient::new())
    }

    pub fn with_client(registry: Arc<BangRegistry>, client: SuggestionsClient) -> Self {
        let engine = PredictionEngine::new(&registry.corpus_extensions());
        Self {
            registry,
            engine,
            client,
        }
    }

    /// Computes the suggestions body for a raw query. A blank query echoes as
    /// `""` with no suggestions; everything else echoes the query as
    /// received.
    pub async fn suggest(&self, raw_query: &str, accept_language: Option<&str>) -> SuggestBody {
        let query = raw_query.trim();
        if query.is_empty() {
            return (String::new(), Vec::new());
        }

        let lang = parse_language(accept_language);
        let mut sink = Deduper::new(MAX_SUGGESTIONS);

        match query.strip_prefix('!') {
            Some(after_bang) => self.suggest_bangs(after_bang, &lang, &mut sink).await,
            None => self.suggest_plain(query, &lang, &mut sink).await,
        }

        (raw_query.to_string(), sink.into_items())
    }

    async fn suggest_bangs(&self, after_bang: &str, lang: &str, sink: &mut Deduper) {
        let mut parts = after_bang.split_whitespace();
        let prefix = parts.next().unwrap_or("");
        let text_after: String = parts.collect::<Vec<_>>().join(" ");

        let matches = match_bangs(&self.registry, prefix, MAX_TRIGGER_MATCHES, MAX_NAME_MATCHES);
        for bang in &matches {
            if text_after.is_empty() {
                sink.push(format!("!{} — {}", bang.trigger, bang.name));
            } else {
                sink.push(format!("!{} {}", bang.trigger, text_after));
            }
        }

        if !text_after.is_empty() {
            if let Some(best) = matches.first() {
                for suggestion in self.client.fetch(&text_after, lang).await {
                    sink.push(format!("!{} {}", best.trigger, suggestion));
                }
            }
        }
    }

    async fn suggest_plain(&self, query: &str, lang: &str, sink: &mut Deduper) {
        let (local, external) = tokio::join!(
            async { self.engine.predict(query, MAX_SUGGESTIONS) },
            self.client.fetch(query, lang),
        );

        for suggestion in &external {
            sink.push(suggestion);
        }
        for prediction in merge_with_external(local, &[], MAX_SUGGESTIONS) {
            sink.push(prediction.text);
        }
    }
}

/// Folds external suggestion strings into a ranked local prediction list.
///
/// Unseen externals enter with a base score of 0.9; an external that matches
/// an existing prediction (lowercased exact equality) instead boosts it by
/// 0.15, clamped at 1.0.
pub fn merge_with_external(
    mut predictions: Vec<Prediction>,
    external: &[String],
    limit: usize,
) -> Vec<Prediction> {
    for suggestion in external {
        let key = suggestion.to_lowercase();
        match predictions
            .iter_mut()
            .find(|p| p.text.to_lowercase() == key)
        {
            Some(existing) => {
                existing.score = (existing.score + EXTERNAL_MATCH_BOOST).min(1.0);
            }
            None => predictions.push(Prediction {
                text: suggestion.clone(),
                source: PredictionSource::External,
                score: EXTERNAL_BASE_SCORE,
            }),
        }
    }

    predictions.sort_by(|a, b| b.score.total_cmp(&a.score));
    predictions.truncate(limit);
    predictions
}

/// First tag of the Accept-Language header, quality parameter stripped;
/// defaults to `en`.
pub fn parse_language(header: Option<&str>) -> String {
    header
        .and_then(|value| value.split(',').next())
        .and_then(|tag| tag.split(';').next())
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "en".to_string())
}

/// Normalization key for deduplication: lowercased, whitespace collapsed to
/// single spaces, trimmed.
pub fn norm(s: &str) -> String {
    s.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Order-preserving deduplicating sink with a hard size cap.
pub struct Deduper {
    seen: HashSet<String>,
    items: Vec<String>,
    limit: usize,
}

impl Deduper {
    pub fn new(limit: usize) -> Self {
        Self {
            seen: HashSet::new(),
            items: Vec::new(),
            limit,
        }
    }

    /// Accepts `item` unless its normalization key is empty, already seen, or
    /// the sink is full. Returns whether the item was kept.
    pub fn push(&mut self, item: impl Into<String>) -> bool {
        if self.items.len() >= self.limit {
            return false;
        }
        let item = item.into();
        let key = norm(&item);
        if key.is_empty() || !self.seen.insert(key) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.limit
    }

    pub fn into_items(self) -> Vec<String> {
        self.items
    }
}
