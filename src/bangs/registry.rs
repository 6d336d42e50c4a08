//! The static bang catalogue.
//!
//! The table is compile-time constant; `BangRegistry::new` builds the trigger
//! lookup once at startup and validates the catalogue invariants. Violations
//! are programming errors and abort startup.

use super::types::Bang;
use std::collections::HashMap;

pub const PLACEHOLDER: &str = "{{{s}}}";

/// Trigger of the engine used when a query names no (known) bang.
pub const DEFAULT_TRIGGER: &str = "g";

pub const BANGS: &[Bang] = &[
    Bang {
        trigger: "g",
        name: "Google",
        domain: "www.google.com",
        url_template: "https://www.google.com/search?q={{{s}}}",
        description: "Google web search",
    },
    Bang {
        trigger: "d",
        name: "DuckDuckGo",
        domain: "duckduckgo.com",
        url_template: "https://duckduckgo.com/?q={{{s}}}",
        description: "DuckDuckGo web search",
    },
    Bang {
        trigger: "y",
        name: "YouTube",
        domain: "www.youtube.com",
        url_template: "https://www.youtube.com/results?search_query={{{s}}}",
        description: "YouTube video search",
    },
    Bang {
        trigger: "w",
        name: "Wikipedia",
        domain: "en.wikipedia.org",
        url_template: "https://en.wikipedia.org/w/index.php?search={{{s}}}",
        description: "Wikipedia article search",
    },
    Bang {
        trigger: "gh",
        name: "GitHub",
        domain: "github.com",
        url_template: "https://github.com/search?q={{{s}}}",
        description: "GitHub code and repository search",
    },
    Bang {
        trigger: "ghr",
        name: "GitHub Repo",
        domain: "github.com",
        url_template: "https://github.com/{{{s}}}",
        description: "Jump straight to a repository by owner/name",
    },
    Bang {
        trigger: "so",
        name: "Stack Overflow",
        domain: "stackoverflow.com",
        url_template: "https://stackoverflow.com/search?q={{{s}}}",
        description: "Stack Overflow question search",
    },
    Bang {
        trigger: "r",
        name: "Reddit",
        domain: "www.reddit.com",
        url_template: "https://www.reddit.com/search/?q={{{s}}}",
        description: "Reddit post search",
    },
    Bang {
        trigger: "a",
        name: "Amazon",
        domain: "www.amazon.com",
        url_template: "https://www.amazon.com/s?k={{{s}}}",
        description: "Amazon product search",
    },
    Bang {
        trigger: "maps",
        name: "Google Maps",
        domain: "maps.google.com",
        url_template: "https://maps.google.com/maps?q={{{s}}}",
        description: "Google Maps place search",
    },
    Bang {
        trigger: "gi",
        name: "Google Images",
        domain: "images.google.com",
        url_template: "https://www.google.com/search?tbm=isch&q={{{s}}}",
        description: "Google image search",
    },
    Bang {
        trigger: "gt",
        name: "Google Translate",
        domain: "translate.google.com",
        url_template: "https://translate.google.com/?text={{{s}}}",
        description: "Google Translate",
    },
    Bang {
        trigger: "mdn",
        name: "MDN Web Docs",
        domain: "developer.mozilla.org",
        url_template: "https://developer.mozilla.org/search?q={{{s}}}",
        description: "Mozilla web platform documentation",
    },
    Bang {
        trigger: "npm",
        name: "npm",
        domain: "www.npmjs.com",
        url_template: "https://www.npmjs.com/search?q={{{s}}}",
        description: "npm package search",
    },
    Bang {
        trigger: "crates",
        name: "crates.io",
        domain: "crates.io",
        url_template: "https://crates.io/search?q={{{s}}}",
        description: "Rust crate search",
    },
    Bang {
        trigger: "docs",
        name: "Docs.rs",
        domain: "docs.rs",
        url_template: "https://docs.rs/releases/search?query={{{s}}}",
        description: "Rust documentation search",
    },
    Bang {
        trigger: "hn",
        name: "Hacker News",
        domain: "news.ycombinator.com",
        url_template: "https://hn.algolia.com/?q={{{s}}}",
        description: "Hacker News story search",
    },
    Bang {
        trigger: "x",
        name: "X",
        domain: "x.com",
        url_template: "https://x.com/search?q={{{s}}}",
        description: "X (Twitter) post search",
    },
    Bang {
        trigger: "imdb",
        name: "IMDb",
        domain: "www.imdb.com",
        url_template: "https://www.imdb.com/find/?q={{{s}}}",
        description: "IMDb title search",
    },
    Bang {
        trigger: "wa",
        name: "Wolfram Alpha",
        domain: "www.wolframalpha.com",
        url_template: "https://www.wolframalpha.com/input?i={{{s}}}",
        description: "Wolfram Alpha computational queries",
    },
];

pub struct BangRegistry {
    bangs: &'static [Bang],
    by_trigger: HashMap<&'static str, usize>,
    default_idx: usize,
}

impl BangRegistry {
    pub fn new() -> Self {
        Self::with_table(BANGS, DEFAULT_TRIGGER)
    }

    fn with_table(bangs: &'static [Bang], default_trigger: &str) -> Self {
        let mut by_trigger = HashMap::with_capacity(bangs.len());
        for (idx, bang) in bangs.iter().enumerate() {
            assert!(
                !bang.trigger.is_empty()
                    && bang.trigger.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "bang trigger {:?} must be nonempty lowercase ascii",
                bang.trigger
            );
            assert!(
                bang.url_template.contains(PLACEHOLDER),
                "bang {:?} template is missing the search-terms placeholder",
                bang.trigger
            );
            let previous = by_trigger.insert(bang.trigger, idx);
            assert!(previous.is_none(), "duplicate bang trigger {:?}", bang.trigger);
        }

        let default_idx = match by_trigger.get(default_trigger) {
            Some(&idx) => idx,
            None => panic!("default bang {:?} is not in the catalogue", default_trigger),
        };

        Self {
            bangs,
            by_trigger,
            default_idx,
        }
    }

    /// Exact-match lookup by lowercased trigger.
    pub fn find(&self, trigger: &str) -> Option<&'static Bang> {
        self.by_trigger.get(trigger).map(|&idx| &self.bangs[idx])
    }

    pub fn default_bang(&self) -> &'static Bang {
        &self.bangs[self.default_idx]
    }

    /// All bangs in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Bang> + '_ {
        self.bangs.iter()
    }

    pub fn len(&self) -> usize {
        self.bangs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bangs.is_empty()
    }

    /// Corpus extension strings for the prediction engine: every bang name
    /// and trigger.
    pub fn corpus_extensions(&self) -> Vec<String> {
        self.bangs
            .iter()
            .flat_map(|bang| [bang.name.to_lowercase(), bang.trigger.to_string()])
            .collect()
    }
}

impl Default for BangRegistry {
    fn default() -> Self {
        Self::new()
    }
}
