//! Character-trigram inverted index scored by Jaccard similarity.

use std::collections::{HashMap, HashSet};

const GRAM_LEN: usize = 3;
const BOUNDARY: char = '$';

/// Jaccard scores at or below this floor are treated as noise.
const MIN_JACCARD: f64 = 0.1;

#[derive(Debug, Default)]
pub struct NgramIndex {
    /// gram -> indices of corpus words containing it.
    postings: HashMap<String, Vec<usize>>,
    words: Vec<String>,
    gram_counts: Vec<usize>,
}

impl NgramIndex {
    /// Indexes every corpus word under each of its trigrams.
    pub fn build(corpus: &[String]) -> Self {
        let mut index = NgramIndex::default();
        for word in corpus {
            let grams = grams(word);
            let idx = index.words.len();
            index.words.push(word.clone());
            index.gram_counts.push(grams.len());
            for gram in grams {
                index.postings.entry(gram).or_default().push(idx);
            }
        }
        index
    }

    /// Returns up to `limit` corpus words ranked by descending Jaccard
    /// similarity with the query's trigram set. Scores at or below the noise
    /// floor are discarded, so every returned score lies in `(0.1, 1]`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<(String, f64)> {
        let query_grams = grams(query);
        if query_grams.is_empty() {
            return Vec::new();
        }

        let mut shared: HashMap<usize, usize> = HashMap::new();
        for gram in &query_grams {
            if let Some(indices) = self.postings.get(gram) {
                for &idx in indices {
                    *shared.entry(idx).or_insert(0) += 1;
                }
            }
        }

        let mut scored: Vec<(usize, f64)> = shared
            .into_iter()
            .filter_map(|(idx, shared_count)| {
                let union = query_grams.len() + self.gram_counts[idx] - shared_count;
                let jaccard = shared_count as f64 / union as f64;
                (jaccard > MIN_JACCARD).then_some((idx, jaccard))
            })
            .collect();

        // Index-order tie-break keeps results deterministic.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scored.truncate(limit);

        scored
            .into_iter()
            .map(|(idx, jaccard)| (self.words[idx].clone(), jaccard))
            .collect()
    }

    pub fn gram_count(&self) -> usize {
        self.postings.len()
    }
}

/// Trigram set of `$<lowercase(word)>$`. The boundary sentinels give the
/// first and last two characters distinctive grams.
fn grams(word: &str) -> HashSet<String> {
    let padded: Vec<char> = std::iter::once(BOUNDARY)
        .chain(word.to_lowercase().chars())
        .chain(std::iter::once(BOUNDARY))
        .collect();

    padded
        .windows(GRAM_LEN)
        .map(|window| window.iter().collect())
        .collect()
}
