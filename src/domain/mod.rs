//! Domain types for the listing pages.
//!
//! This module contains the core data structures:
//! - ContentItem: One entry of a listing, with display details
//! - FilterState: The page's search box and select controls

pub mod content;
pub mod filter_state;

// Re-export commonly used types
pub use content::{ContentId, ContentItem, ItemDetails, ListingKind};
pub use filter_state::{FilterState, Selection};
