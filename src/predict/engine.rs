//! Prediction Engine
//!
//! Fuses the four local suggestion sources over a shared corpus.
//!
//! 1. **Prefix**: linear corpus scan for `starts_with`, weight 1.0.
//! 2. **Trie**: prefix-index lookup, weight 0.8.
//! 3. **N-gram**: trigram Jaccard candidates, weight 0.55 (queries of 2+ chars).
//! 4. **Fuzzy**: bounded edit-distance matches, weight 0.4 (queries of 3+ chars).
//!
//! The first source to produce a word establishes its score; the n-gram and
//! fuzzy layers may only boost an established score, never overwrite it.

use super::corpus::COMMON_QUERIES;
use super::distance::{default_max_distance, edit_distance, fuzzy_match};
use super::ngram::NgramIndex;
use super::trie::Trie;
use super::types::{Prediction, PredictionSource};
use std::collections::{HashMap, HashSet};

const PREFIX_WEIGHT: f64 = 1.0;
const TRIE_WEIGHT: f64 = 0.8;
const NGRAM_WEIGHT: f64 = 0.55;
const FUZZY_WEIGHT: f64 = 0.4;

const NGRAM_BOOST: f64 = 0.3;
const FUZZY_BOOST: f64 = 0.2;

const MIN_NGRAM_QUERY_LEN: usize = 2;
const MIN_FUZZY_QUERY_LEN: usize = 3;

/// Candidates requested from the trie and n-gram sources per query.
const CANDIDATES_PER_SOURCE: usize = 10;

pub struct PredictionEngine {
    corpus: Vec<String>,
    trie: Trie,
    ngrams: NgramIndex,
}

impl PredictionEngine {
    /// Builds the engine over the built-in common queries plus
    /// caller-supplied extension strings. The corpus, trie and n-gram index
    /// are constructed once and never mutated afterwards.
    pub fn new(extensions: &[String]) -> Self {
        let corpus: Vec<String> = COMMON_QUERIES
            .iter()
            .map(|query| query.to_string())
            .chain(extensions.iter().map(|ext| ext.to_lowercase()))
            .collect();

        let mut trie = Trie::new();
        for word in &corpus {
            trie.insert(word);
        }
        let ngrams = NgramIndex::build(&corpus);

        Self {
            corpus,
            trie,
            ngrams,
        }
    }

    /// Produces up to `limit` predictions for `query`, ranked by descending
    /// score and deduplicated by lowercased word.
    pub fn predict(&self, query: &str, limit: usize) -> Vec<Prediction> {
        let query = query.trim().to_lowercase();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }
        let query_len = query.chars().count();

        let mut order: Vec<String> = Vec::new();
        let mut scores: HashMap<String, f64> = HashMap::new();

        // Layer 1: direct prefix scan.
        for word in &self.corpus {
            if word.starts_with(&query) && !scores.contains_key(word) {
                let word_len = word.chars().count();
                let score = PREFIX_WEIGHT * query_len as f64 / word_len as f64;
                order.push(word.clone());
                scores.insert(word.clone(), score);
            }
        }

        // Layer 2: trie traversal. Establishes only; never boosts.
        let trie_words = self.trie.prefix_search(&query, CANDIDATES_PER_SOURCE);
        for word in &trie_words {
            if !scores.contains_key(word) {
                let word_len = word.chars().count();
                let score = TRIE_WEIGHT * query_len as f64 / word_len as f64;
                order.push(word.clone());
                scores.insert(word.clone(), score);
            }
        }
        let trie_words: HashSet<String> = trie_words.into_iter().collect();

        // Layer 3: trigram similarity.
        if query_len >= MIN_NGRAM_QUERY_LEN {
            for (word, jaccard) in self.ngrams.search(&query, CANDIDATES_PER_SOURCE) {
                let layer_score = NGRAM_WEIGHT * jaccard;
                match scores.get_mut(&word) {
                    Some(existing) => *existing += layer_score * NGRAM_BOOST,
                    None => {
                        order.push(word.clone());
                        scores.insert(word, layer_score);
                    }
                }
            }
        }

        // Layer 4: fuzzy matching.
        if query_len >= MIN_FUZZY_QUERY_LEN {
            for hit in fuzzy_match(&query, &self.corpus, None) {
                let layer_score = FUZZY_WEIGHT * hit.score;
                match scores.get_mut(&hit.word) {
                    Some(existing) => *existing += layer_score * FUZZY_BOOST,
                    None => {
                        order.push(hit.word.clone());
                        scores.insert(hit.word, layer_score);
                    }
                }
            }
        }

        let max_dist = default_max_distance(query_len);
        let mut predictions: Vec<Prediction> = order
            .into_iter()
            .map(|word| {
                let source = if word.starts_with(&query) {
                    PredictionSource::Prefix
                } else if trie_words.contains(&word) {
                    PredictionSource::Trie
                } else if edit_distance(&query, &word) <= max_dist {
                    PredictionSource::Fuzzy
                } else {
                    PredictionSource::Ngram
                };
                let score = scores[&word].min(1.0);
                Prediction {
                    text: word,
                    source,
                    score,
                }
            })
            .collect();

        predictions.sort_by(|a, b| b.score.total_cmp(&a.score));
        predictions.truncate(limit);
        predictions
    }

    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }
}
