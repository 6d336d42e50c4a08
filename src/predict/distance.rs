//! Edit distance and fuzzy matching.
//!
//! Implements the Optimal String Alignment variant of Damerau-Levenshtein:
//! insertions, deletions, substitutions, and restricted adjacent
//! transpositions (a transposed pair is never edited again, so non-adjacent
//! swaps cost two edits). Comparison is case-insensitive.

#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyHit {
    pub word: String,
    pub distance: usize,
    pub score: f64,
}

/// Default edit-distance budget for a query of `query_len` characters.
pub fn default_max_distance(query_len: usize) -> usize {
    std::cmp::max(1, query_len / 3)
}

/// OSA Damerau-Levenshtein distance, computed with three rolling rows.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_prev = vec![0usize; b.len() + 1];
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);

            // Restricted transposition: the pair may only be swapped once.
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(prev_prev[j - 2] + 1);
            }
            curr[j] = best;
        }
        std::mem::swap(&mut prev_prev, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Finds corpus words within an edit-distance budget of `query`.
///
/// Candidates whose length differs from the query by more than the budget are
/// skipped before any distance is computed. Survivors are scored as
/// `1 - distance / max(|query|, |candidate|)` and returned sorted by distance
/// ascending, then score descending.
pub fn fuzzy_match(query: &str, corpus: &[String], max_dist: Option<usize>) -> Vec<FuzzyHit> {
    let query_len = query.chars().count();
    if query_len == 0 {
        return Vec::new();
    }
    let max_dist = max_dist.unwrap_or_else(|| default_max_distance(query_len));

    let mut hits = Vec::new();
    for word in corpus {
        let word_len = word.chars().count();
        if word_len.abs_diff(query_len) > max_dist {
            continue;
        }

        let distance = edit_distance(query, word);
        if distance > max_dist {
            continue;
        }

        let max_len = query_len.max(word_len);
        let score = 1.0 - distance as f64 / max_len as f64;
        hits.push(FuzzyHit {
            word: word.clone(),
            distance,
            score,
        });
    }

    hits.sort_by(|a, b| {
        a.distance
            .cmp(&b.distance)
            .then_with(|| b.score.total_cmp(&a.score))
    });
    hits
}
