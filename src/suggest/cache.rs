//! Bounded insertion-ordered TTL cache.
//!
//! Expiry is an absolute instant checked lazily on read. When the cache is
//! full, the oldest insertion is evicted before the new entry goes in, so
//! eviction order is deterministic. Callers serialize access through a single
//! lock; the size check, eviction and insert must not interleave.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CacheEntry {
    results: Vec<String>,
    expires_at: Instant,
}

#[derive(Debug)]
pub struct TtlCache {
    capacity: usize,
    ttl: Duration,
    entries: HashMap<String, CacheEntry>,
    insertion_order: VecDeque<String>,
}

impl TtlCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            entries: HashMap::with_capacity(capacity),
            insertion_order: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns the cached results for `key`, removing the entry if its TTL
    /// has lapsed.
    pub fn get(&mut self, key: &str) -> Option<Vec<String>> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.expires_at <= Instant::now(),
            None => return None,
        };

        if expired {
            self.entries.remove(key);
            self.insertion_order.retain(|k| k != key);
            return None;
        }
        self.entries.get(key).map(|entry| entry.results.clone())
    }

    /// Stores `results` under `key` with a fresh expiry. A repeated key keeps
    /// its original insertion slot; a new key evicts the oldest insertion
    /// first when the cache is full.
    pub fn put(&mut self, key: String, results: Vec<String>) {
        let entry = CacheEntry {
            results,
            expires_at: Instant::now() + self.ttl,
        };

        if self.entries.contains_key(&key) {
            self.entries.insert(key, entry);
            return;
        }

        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.insertion_order.pop_front() {
                self.entries.remove(&oldest);
            }
        }

        self.insertion_order.push_back(key.clone());
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
