//! Approximate string matching over in-memory catalogs
//!
//! This crate provides the search core for the catalog viewer:
//! - Levenshtein edit distance (classic dynamic-programming table)
//! - A ranking matcher that keeps items within a distance threshold,
//!   ordered by distance with catalog order preserved on ties
//! - A simpler substring filter, kept as a documented variant
//!
//! The matcher is generic over any value that can expose a searchable
//! key through the [`Searchable`] trait, so it carries no knowledge of
//! catalog items, rendering, or I/O.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_search::{Searchable, normalize_query, rank_by_distance, DEFAULT_MAX_DISTANCE};
//!
//! struct Product { name: Option<String> }
//!
//! impl Searchable for Product {
//!     fn search_key(&self) -> Option<&str> {
//!         self.name.as_deref()
//!     }
//! }
//!
//! let query = normalize_query("  Red Shirt ");
//! let ranked = rank_by_distance(&products, &query, DEFAULT_MAX_DISTANCE);
//! ```

mod distance;
mod matcher;

pub use distance::distance;
pub use matcher::{
    filter_substring, normalize_query, rank_by_distance, Searchable, DEFAULT_MAX_DISTANCE,
};
