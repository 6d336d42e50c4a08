//! Bang Module
//!
//! The search-shortcut catalogue and its query-understanding logic.
//!
//! ## Overview
//! A "bang" is a short `!trigger` token that selects a target search engine.
//! This module owns the static catalogue, resolves submitted queries to
//! redirect URLs, and ranks triggers for bang-prefixed autocomplete.
//!
//! ## Submodules
//! - **`registry`**: The compile-time bang catalogue and lookup table.
//! - **`resolver`**: Query-to-URL resolution for the `/search` redirect.
//! - **`matcher`**: Two-tier trigger/name ranking for suggestions.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: The bang record.

pub mod handlers;
pub mod matcher;
pub mod registry;
pub mod resolver;
pub mod types;

#[cfg(test)]
mod tests;
