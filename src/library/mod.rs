//! Listing content for the site's pages.
//!
//! # Sources
//!
//! ```text
//! <content_dir>/
//! ├── articles.json                 # Array of ContentItem (any listing)
//! ├── books.rows.json               # Exported `books` table rows
//! ├── events.rows.json              # Exported `events` table rows
//! └── meditation_sessions.rows.json # Exported `meditation_sessions` rows
//! ```
//!
//! Listings without a file fall back to the literal data in [`fixtures`].

pub mod catalog;
pub mod filter;
pub mod fixtures;
pub mod rows;

pub use catalog::{FacetOption, Facets, Listing, ListingError, ListingView, Source};
pub use filter::{
    filter_items, matches_category, matches_search, matches_secondary_facet, matches_tab,
    partition_results, select_featured, Partition,
};
