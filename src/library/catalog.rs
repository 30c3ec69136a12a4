//! Listings: validated item sets with their select-control options.
//!
//! A listing is loaded once per page and never mutated afterwards. It can
//! be searched and filtered any number of times.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;

use super::filter::{filter_items, partition_results, Partition};
use super::{fixtures, rows};
use crate::domain::{ContentId, ContentItem, FilterState, ListingKind};

/// Errors raised when a set of items cannot form a listing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("Duplicate item id in {kind} listing: {id}")]
    DuplicateId { kind: ListingKind, id: ContentId },

    #[error("{kind} listing has {count} featured items, at most one is allowed")]
    MultipleFeatured { kind: ListingKind, count: usize },

    #[error("Item {id} belongs to the {actual} listing, not {expected}")]
    WrongKind {
        id: ContentId,
        expected: ListingKind,
        actual: ListingKind,
    },
}

/// One choice of a select control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

impl FacetOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Options for every control a listing page shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    #[serde(default)]
    pub categories: Vec<FacetOption>,

    /// Level, month or similar; empty when the page has no second select
    #[serde(default)]
    pub secondary: Vec<FacetOption>,

    /// Media-type tabs; empty when the page has no tabs
    #[serde(default)]
    pub tabs: Vec<FacetOption>,
}

/// What a listing page shows for the current filter state
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView<'a> {
    pub kind: ListingKind,

    /// Featured slot and results grid
    pub partition: Partition<'a>,

    /// Heading above the results grid
    pub heading: String,

    /// "3 articles found"
    pub summary: String,
}

/// Where a listing's items came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Builtin,
    File(PathBuf),
}

/// A validated, immutable listing
#[derive(Debug, Clone)]
pub struct Listing {
    kind: ListingKind,
    items: Vec<ContentItem>,
    facets: Facets,
    source: Source,
}

impl Listing {
    /// Validate items for a listing: unique ids, matching kind, one featured at most
    pub fn new(kind: ListingKind, items: Vec<ContentItem>) -> Result<Self, ListingError> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.kind() != kind {
                return Err(ListingError::WrongKind {
                    id: item.id.clone(),
                    expected: kind,
                    actual: item.kind(),
                });
            }
            if !seen.insert(&item.id) {
                return Err(ListingError::DuplicateId {
                    kind,
                    id: item.id.clone(),
                });
            }
        }

        let featured = items.iter().filter(|i| i.featured).count();
        if featured > 1 {
            return Err(ListingError::MultipleFeatured {
                kind,
                count: featured,
            });
        }

        Ok(Self {
            kind,
            items,
            facets: fixtures::facets(kind),
            source: Source::Builtin,
        })
    }

    /// The literal content shipped with the site
    pub fn builtin(kind: ListingKind) -> Result<Self> {
        Self::new(kind, fixtures::items(kind))
            .with_context(|| format!("Builtin {} listing is invalid", kind))
    }

    /// Load a JSON array of items from disk
    pub async fn load(kind: ListingKind, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read listing: {}", path.display()))?;

        let items: Vec<ContentItem> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse listing JSON: {}", path.display()))?;

        let mut listing = Self::new(kind, items)?;
        listing.source = Source::File(path.to_path_buf());
        tracing::debug!(%kind, path = %path.display(), count = listing.len(), "Loaded listing");
        Ok(listing)
    }

    /// Load exported backend rows from disk
    pub async fn load_rows(kind: ListingKind, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read rows: {}", path.display()))?;

        let items = rows::items_from_json(kind, &content, Utc::now())
            .with_context(|| format!("Invalid rows in {}", path.display()))?;

        let mut listing = Self::new(kind, items)?;
        listing.source = Source::File(path.to_path_buf());
        tracing::debug!(%kind, path = %path.display(), count = listing.len(), "Loaded rows");
        Ok(listing)
    }

    /// Resolve a listing from a content directory, falling back to builtin data.
    ///
    /// Looks for `<kind>.json` (items) first, then `<table>.rows.json`
    /// (exported rows) for backend-backed listings.
    pub async fn discover(kind: ListingKind, content_dir: &Path) -> Result<Self> {
        let items_path = content_dir.join(format!("{}.json", kind));
        if items_path.exists() {
            return Self::load(kind, &items_path).await;
        }

        if let Some(table) = kind.table_name() {
            let rows_path = content_dir.join(format!("{}.rows.json", table));
            if rows_path.exists() {
                return Self::load_rows(kind, &rows_path).await;
            }
        }

        tracing::debug!(%kind, "No content file found, using builtin listing");
        Self::builtin(kind)
    }

    pub fn kind(&self) -> ListingKind {
        self.kind
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Get an item by ID
    pub fn find(&self, id: &ContentId) -> Option<&ContentItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Display label of a category value, if it is a known option
    pub fn category_label(&self, value: &str) -> Option<&str> {
        self.facets
            .categories
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    /// Items passing the filter state, in listing order
    pub fn filter(&self, state: &FilterState) -> Vec<&ContentItem> {
        filter_items(&self.items, state)
    }

    /// Search by free text alone
    pub fn search(&self, term: &str) -> Vec<&ContentItem> {
        self.filter(&FilterState::new().with_search(term))
    }

    /// Compose the page for a filter state
    pub fn view(&self, state: &FilterState) -> ListingView<'_> {
        let partition = partition_results(&self.items, state);
        let noun = self.kind.plural_noun();
        let heading = if state.is_default() {
            if partition.featured.is_some() {
                format!("Recent {}", noun)
            } else {
                format!("All {}", noun)
            }
        } else {
            format!("Filtered {}", noun)
        };
        let summary = self.kind.count_phrase(partition.len());

        ListingView {
            kind: self.kind,
            partition,
            heading,
            summary,
        }
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the listing is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_listings_are_valid() {
        for kind in ListingKind::ALL {
            let listing = Listing::builtin(kind).unwrap();
            assert_eq!(listing.kind(), kind);
            assert!(!listing.is_empty());
            assert_eq!(listing.source(), &Source::Builtin);
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut items = fixtures::articles();
        items[1].id = items[0].id.clone();
        let err = Listing::new(ListingKind::Articles, items).unwrap_err();
        assert_eq!(
            err,
            ListingError::DuplicateId {
                kind: ListingKind::Articles,
                id: ContentId::Number(1),
            }
        );
    }

    #[test]
    fn test_multiple_featured_rejected() {
        let mut items = fixtures::courses();
        items[3].featured = true;
        let err = Listing::new(ListingKind::Courses, items).unwrap_err();
        assert!(matches!(err, ListingError::MultipleFeatured { count: 2, .. }));
    }

    #[test]
    fn test_wrong_kind_rejected() {
        let err = Listing::new(ListingKind::Media, fixtures::articles()).unwrap_err();
        assert!(matches!(err, ListingError::WrongKind { .. }));
    }

    #[test]
    fn test_category_label() {
        let listing = Listing::builtin(ListingKind::Courses).unwrap();
        assert_eq!(listing.category_label("lifestyle"), Some("Mindful Living"));
        assert_eq!(listing.category_label("astrology"), None);
    }

    #[test]
    fn test_view_headings() {
        let listing = Listing::builtin(ListingKind::Articles).unwrap();

        let view = listing.view(&FilterState::new());
        assert_eq!(view.heading, "Recent Articles");
        assert_eq!(view.summary, "6 articles found");

        let view = listing.view(&FilterState::new().with_category("meditation"));
        assert_eq!(view.heading, "Filtered Articles");
        assert_eq!(view.summary, "1 article found");
    }

    #[test]
    fn test_search() {
        let listing = Listing::builtin(ListingKind::Articles).unwrap();
        // Tags are searchable
        let results = listing.search("DEVOTION");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, ContentId::Number(2));
        assert!(listing.search("python").is_empty());
    }

    #[tokio::test]
    async fn test_discover_prefers_content_files() {
        let temp = TempDir::new().unwrap();
        let items = vec![fixtures::articles().remove(2)];
        std::fs::write(
            temp.path().join("articles.json"),
            serde_json::to_string(&items).unwrap(),
        )
        .unwrap();

        let listing = Listing::discover(ListingKind::Articles, temp.path()).await.unwrap();
        assert_eq!(listing.len(), 1);
        assert!(matches!(listing.source(), Source::File(_)));

        // No file for courses: builtin data
        let listing = Listing::discover(ListingKind::Courses, temp.path()).await.unwrap();
        assert_eq!(listing.len(), 6);
    }

    #[tokio::test]
    async fn test_discover_reads_exported_rows() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("books.rows.json"),
            r#"[{"id": "b1", "title": "Sacred Sound", "created_at": "2026-02-01T00:00:00Z"}]"#,
        )
        .unwrap();

        let listing = Listing::discover(ListingKind::Books, temp.path()).await.unwrap();
        assert_eq!(listing.len(), 1);
        assert!(listing.find(&ContentId::from("b1")).is_some());
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("media.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(Listing::load(ListingKind::Media, &path).await.is_err());
    }
}
