//! Bang Module Tests
//!
//! ## Test Scopes
//! - **Registry**: catalogue invariants and lookup.
//! - **Resolver**: query-to-URL translation, fallback, path preservation.
//! - **Matcher**: two-tier trigger/name ranking.

#[cfg(test)]
mod tests {
    use crate::bangs::matcher::{match_bangs, MAX_NAME_MATCHES, MAX_TRIGGER_MATCHES};
    use crate::bangs::registry::{BangRegistry, BANGS, PLACEHOLDER};
    use crate::bangs::resolver::resolve;

    // ============================================================
    // REGISTRY TESTS
    // ============================================================

    #[test]
    fn test_registry_triggers_are_unique_and_lowercase() {
        let mut seen = std::collections::HashSet::new();
        for bang in BANGS {
            assert!(seen.insert(bang.trigger), "duplicate trigger {}", bang.trigger);
            assert_eq!(bang.trigger, bang.trigger.to_lowercase());
            assert!(!bang.trigger.contains(char::is_whitespace));
        }
    }

    #[test]
    fn test_registry_templates_carry_placeholder() {
        for bang in BANGS {
            assert!(
                bang.url_template.contains(PLACEHOLDER),
                "{} template lacks placeholder",
                bang.trigger
            );
        }
    }

    #[test]
    fn test_registry_lookup() {
        let registry = BangRegistry::new();

        assert_eq!(registry.find("y").map(|b| b.name), Some("YouTube"));
        assert!(registry.find("nope").is_none());
        assert_eq!(registry.default_bang().trigger, "g");
        assert_eq!(registry.len(), BANGS.len());
    }

    #[test]
    fn test_registry_corpus_extensions() {
        let registry = BangRegistry::new();
        let extensions = registry.corpus_extensions();

        assert_eq!(extensions.len(), 2 * registry.len());
        assert!(extensions.contains(&"youtube".to_string()));
        assert!(extensions.contains(&"ghr".to_string()));
    }

    // ============================================================
    // RESOLVER TESTS
    // ============================================================

    #[test]
    fn test_resolve_bang_with_terms() {
        let registry = BangRegistry::new();
        assert_eq!(
            resolve(&registry, "!y lofi music"),
            "https://www.youtube.com/results?search_query=lofi%20music"
        );
    }

    #[test]
    fn test_resolve_preserves_path_slashes() {
        let registry = BangRegistry::new();
        assert_eq!(
            resolve(&registry, "!ghr vercel/next.js"),
            "https://github.com/vercel/next.js"
        );
    }

    #[test]
    fn test_resolve_bare_bang_goes_to_site() {
        let registry = BangRegistry::new();
        assert_eq!(resolve(&registry, "!y"), "https://www.youtube.com");
    }

    #[test]
    fn test_resolve_plain_query_uses_default() {
        let registry = BangRegistry::new();
        assert_eq!(
            resolve(&registry, "hello world"),
            "https://www.google.com/search?q=hello%20world"
        );
    }

    #[test]
    fn test_resolve_empty_query_goes_home() {
        let registry = BangRegistry::new();
        assert_eq!(resolve(&registry, ""), "https://www.google.com");
        assert_eq!(resolve(&registry, "   "), "https://www.google.com");
    }

    #[test]
    fn test_resolve_unknown_trigger_falls_back() {
        let registry = BangRegistry::new();
        assert_eq!(
            resolve(&registry, "!zzz something"),
            "https://www.google.com/search?q=something"
        );
        // Bare unknown bang: trigger was present, so bare-site fallback wins.
        assert_eq!(resolve(&registry, "!zzz"), "https://www.google.com");
    }

    #[test]
    fn test_resolve_trigger_is_case_insensitive() {
        let registry = BangRegistry::new();
        assert_eq!(
            resolve(&registry, "!Y lofi"),
            "https://www.youtube.com/results?search_query=lofi"
        );
    }

    #[test]
    fn test_resolve_bang_anywhere_in_query() {
        let registry = BangRegistry::new();
        assert_eq!(
            resolve(&registry, "lofi !y music"),
            "https://www.youtube.com/results?search_query=lofi%20music"
        );
    }

    #[test]
    fn test_resolve_leftmost_bang_wins() {
        let registry = BangRegistry::new();
        let url = resolve(&registry, "!y !w lofi");
        assert!(url.starts_with("https://www.youtube.com/results?search_query="));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let registry = BangRegistry::new();
        for query in ["!y lofi", "hello world", "", "!ghr a/b"] {
            assert_eq!(resolve(&registry, query), resolve(&registry, query));
        }
    }

    // ============================================================
    // MATCHER TESTS
    // ============================================================

    #[test]
    fn test_match_bangs_trigger_prefix_tier() {
        let registry = BangRegistry::new();
        let matches = match_bangs(&registry, "g", MAX_TRIGGER_MATCHES, MAX_NAME_MATCHES);

        // Catalogue order within tier 1: g, gh, ghr, gi, gt.
        let triggers: Vec<&str> = matches.iter().map(|b| b.trigger).collect();
        assert_eq!(triggers[..5], ["g", "gh", "ghr", "gi", "gt"]);
    }

    #[test]
    fn test_match_bangs_name_tier_follows_trigger_tier() {
        let registry = BangRegistry::new();
        let matches = match_bangs(&registry, "you", MAX_TRIGGER_MATCHES, MAX_NAME_MATCHES);

        // No trigger starts with "you"; the YouTube name matches in tier 2.
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].trigger, "y");
    }

    #[test]
    fn test_match_bangs_tier_one_never_displaced() {
        let registry = BangRegistry::new();
        let matches = match_bangs(&registry, "w", 1, MAX_NAME_MATCHES);

        // Tier 1 keeps its slot even when truncated to a single entry.
        assert_eq!(matches[0].trigger, "w");
    }

    #[test]
    fn test_match_bangs_no_duplicates_across_tiers() {
        let registry = BangRegistry::new();
        // "d" matches the DuckDuckGo trigger in tier 1; its name must not be
        // re-emitted by tier 2.
        let matches = match_bangs(&registry, "d", MAX_TRIGGER_MATCHES, MAX_NAME_MATCHES);

        let mut seen = std::collections::HashSet::new();
        for bang in &matches {
            assert!(seen.insert(bang.trigger));
        }
    }

    #[test]
    fn test_match_bangs_case_insensitive_prefix() {
        let registry = BangRegistry::new();
        let matches = match_bangs(&registry, "YOU", MAX_TRIGGER_MATCHES, MAX_NAME_MATCHES);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "YouTube");
    }

    #[test]
    fn test_match_bangs_empty_prefix_lists_catalogue_head() {
        let registry = BangRegistry::new();
        let matches = match_bangs(&registry, "", MAX_TRIGGER_MATCHES, MAX_NAME_MATCHES);

        assert_eq!(matches.len(), MAX_TRIGGER_MATCHES + MAX_NAME_MATCHES);
        assert_eq!(matches[0].trigger, "g");
    }
}
