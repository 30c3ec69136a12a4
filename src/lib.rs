//! vedic-wisdom - Content listings for a Vedic wisdom site
//!
//! Articles, books, courses, events, media and meditation sessions are
//! browsed through one filtering core: a free-text search plus up to three
//! facet selectors, with a featured item that only surfaces when no filter
//! is active.
//!
//! # Modules
//!
//! - `domain`: Data structures (ContentItem, FilterState, Selection)
//! - `library`: Filtering, listings, literal fixtures and backend rows
//! - `presentation`: Carousel rotation and reveal-on-scroll latch
//! - `forms`: Contact, donation and enrollment submissions
//! - `config`: Layered path and timing configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Browse a listing
//! vedic list courses --facet advanced --category meditation
//!
//! # Show one item
//! vedic show media 3
//!
//! # Enroll in a meditation session
//! vedic enroll 2 --user user-1
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod forms;
pub mod library;
pub mod presentation;

// Re-export main types at crate root for convenience
pub use domain::{ContentId, ContentItem, FilterState, ItemDetails, ListingKind, Selection};
pub use forms::{Notice, Outbox, Submission};
pub use library::{filter_items, partition_results, select_featured, Listing, ListingView, Partition};
pub use presentation::{AutoAdvance, Carousel, RevealLatch};
