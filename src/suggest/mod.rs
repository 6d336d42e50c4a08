//! Suggest Module
//!
//! The OpenSearch suggestions pipeline behind `/api/suggest`.
//!
//! ## Overview
//! Every keystroke in the browser address bar hits this module. Bang-prefixed
//! queries are answered from the bang catalogue (plus re-prefixed external
//! suggestions); plain text fans out to the local prediction engine and the
//! external provider concurrently and merges both streams through a
//! deduplicating sink. The endpoint is designed for zero user-visible
//! failures: upstream trouble degrades to fewer suggestions, never an error.
//!
//! ## Submodules
//! - **`service`**: Query routing, ranking and assembly.
//! - **`external`**: The upstream suggestions client with its TTL cache.
//! - **`cache`**: Bounded insertion-ordered TTL cache.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Request/response DTOs.

pub mod cache;
pub mod external;
pub mod handlers;
pub mod service;
pub mod types;
