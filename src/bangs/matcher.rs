//! Two-tier bang ranking for bang-prefixed suggestions.

use super::registry::BangRegistry;
use super::types::Bang;

pub const MAX_TRIGGER_MATCHES: usize = 5;
pub const MAX_NAME_MATCHES: usize = 2;

/// Ranks bangs for a typed prefix.
///
/// Tier 1: triggers starting with `prefix`, in catalogue order, up to
/// `max_trigger`. Tier 2: bangs not already matched whose lowercased name
/// starts with `prefix`, up to `max_name`. Tier 1 entries are never displaced
/// by Tier 2.
pub fn match_bangs(
    registry: &BangRegistry,
    prefix: &str,
    max_trigger: usize,
    max_name: usize,
) -> Vec<&'static Bang> {
    let prefix = prefix.to_lowercase();

    let mut matches: Vec<&'static Bang> = registry
        .iter()
        .filter(|bang| bang.trigger.starts_with(&prefix))
        .take(max_trigger)
        .collect();

    let by_name: Vec<&'static Bang> = registry
        .iter()
        .filter(|bang| {
            bang.name.to_lowercase().starts_with(&prefix)
                && !matches.iter().any(|m| m.trigger == bang.trigger)
        })
        .take(max_name)
        .collect();

    matches.extend(by_name);
    matches
}
