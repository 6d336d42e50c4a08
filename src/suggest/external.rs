//! Upstream suggestions client.
//!
//! Fetches completion strings from the configured suggestions provider with a
//! hard per-request deadline and a read-through TTL cache. Every failure mode
//! (connectivity, timeout, non-2xx, malformed body) degrades to an empty
//! list; callers never see an error.

use super::cache::TtlCache;
use std::time::Duration;
use tokio::sync::Mutex;

pub const DEFAULT_UPSTREAM: &str = "https://suggestqueries.google.com/complete/search";

const FETCH_TIMEOUT: Duration = Duration::from_secs(3);
const CACHE_TTL: Duration = Duration::from_secs(60);
const CACHE_CAPACITY: usize = 500;
const MAX_RESULTS: usize = 10;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

pub struct SuggestionsClient {
    http_client: reqwest::Client,
    base_url: String,
    cache: Mutex<TtlCache>,
}

impl SuggestionsClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_UPSTREAM)
    }

    /// Points the client at a different upstream endpoint. Used for the
    /// `SUGGEST_UPSTREAM` override and by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            cache: Mutex::new(TtlCache::new(CACHE_CAPACITY, CACHE_TTL)),
        }
    }

    /// Fetches up to 10 suggestions for `query`, consulting the cache first.
    pub async fn fetch(&self, query: &str, lang: &str) -> Vec<String> {
        let cache_key = format!("{}:{}", query, lang);

        if let Some(cached) = self.cache.lock().await.get(&cache_key) {
            tracing::debug!("suggestions cache hit for {:?}", cache_key);
            return cached;
        }

        let results = self.fetch_upstream(query, lang).await;
        self.cache.lock().await.put(cache_key, results.clone());
        results
    }

    async fn fetch_upstream(&self, query: &str, lang: &str) -> Vec<String> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("client", "firefox"), ("hl", lang), ("q", query)])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(FETCH_TIMEOUT)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("suggestions upstream unreachable: {}", e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            tracing::warn!("suggestions upstream returned {}", response.status());
            return Vec::new();
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("failed to read suggestions body: {}", e);
                return Vec::new();
            }
        };

        // The provider answers with exactly [echoedQuery, [string, ...]];
        // anything else is rejected wholesale.
        match serde_json::from_str::<(String, Vec<String>)>(&body) {
            Ok((_echo, mut suggestions)) => {
                suggestions.truncate(MAX_RESULTS);
                suggestions
            }
            Err(e) => {
                tracing::debug!("malformed suggestions body: {}", e);
                Vec::new()
            }
        }
    }

    #[cfg(test)]
    pub async fn cached_len(&self) -> usize {
        self.cache.lock().await.len()
    }
}

impl Default for SuggestionsClient {
    fn default() -> Self {
        Self::new()
    }
}
