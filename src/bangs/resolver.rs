//! Query-to-URL resolution.
//!
//! Translates a submitted address-bar query into the target engine URL.
//! Resolution never fails: malformed input falls through to the default
//! engine.

use super::registry::{BangRegistry, PLACEHOLDER};
use regex::Regex;

/// Resolves `query` to a redirect URL.
///
/// 1. A blank query targets the default engine's home page.
/// 2. The first whitespace-delimited `!token` anywhere in the query selects
///    the bang (case-insensitive); unknown triggers fall back to the default.
/// 3. The token is removed, the remainder percent-encoded (with literal `/`
///    preserved for path-style bangs) and substituted into the template.
/// 4. A bang with no remaining terms goes to the engine's bare site.
pub fn resolve(registry: &BangRegistry, query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return registry.default_bang().home_url();
    }

    let bang_token = Regex::new(r"(?:^|\s)(!\S+)").unwrap();

    if let Some(token) = bang_token.captures(query).and_then(|caps| caps.get(1)) {
        let trigger = token.as_str()[1..].to_lowercase();
        let bang = registry
            .find(&trigger)
            .unwrap_or_else(|| registry.default_bang());

        let before = query[..token.start()].trim_end();
        let after = query[token.end()..].trim_start();
        let rest = if before.is_empty() {
            after.to_string()
        } else if after.is_empty() {
            before.to_string()
        } else {
            format!("{} {}", before, after)
        };

        if rest.is_empty() {
            return bang.home_url();
        }
        return bang
            .url_template
            .replace(PLACEHOLDER, &encode_search_terms(&rest));
    }

    registry
        .default_bang()
        .url_template
        .replace(PLACEHOLDER, &encode_search_terms(query))
}

/// Percent-encodes per URI component rules, then restores literal `/` so
/// path-style bangs (`owner/repo`) survive.
fn encode_search_terms(terms: &str) -> String {
    urlencoding::encode(terms).replace("%2F", "/")
}
