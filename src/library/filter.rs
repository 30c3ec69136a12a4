//! Filtering and featured-item selection for listing pages.
//!
//! Everything here is a pure function of an item slice and a
//! [`FilterState`]: no I/O, no allocation beyond the returned vectors, and
//! the input is never reordered or mutated. Filter values outside a
//! listing's known set simply match nothing.

use crate::domain::{ContentItem, FilterState, Selection};

/// Case-insensitive substring match against the item's searchable fields.
///
/// An empty term matches everything.
pub fn matches_search(item: &ContentItem, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let term_lower = term.to_lowercase();
    item.searchable_fields()
        .any(|field| field.to_lowercase().contains(&term_lower))
}

/// `all` or exact equality with the item's category
pub fn matches_category(item: &ContentItem, category: &Selection) -> bool {
    category.admits(Some(item.category.as_str()))
}

/// `all` or exact equality with the item's secondary facet
pub fn matches_secondary_facet(item: &ContentItem, facet: &Selection) -> bool {
    facet.admits(item.secondary_facet.as_deref())
}

/// `all` or exact equality with the item's media-type tab
pub fn matches_tab(item: &ContentItem, tab: &Selection) -> bool {
    tab.admits(item.tab.as_deref())
}

/// Whether an item passes every control in `state`
pub fn matches(item: &ContentItem, state: &FilterState) -> bool {
    matches_search(item, &state.search_term)
        && matches_category(item, &state.category)
        && matches_secondary_facet(item, &state.secondary_facet)
        && matches_tab(item, &state.active_tab)
}

/// Items passing all active filters, in their original order
pub fn filter_items<'a>(items: &'a [ContentItem], state: &FilterState) -> Vec<&'a ContentItem> {
    items.iter().filter(|item| matches(item, state)).collect()
}

/// The featured item, but only while every control is at its default
pub fn select_featured<'a>(items: &'a [ContentItem], state: &FilterState) -> Option<&'a ContentItem> {
    if !state.is_default() {
        return None;
    }
    items.iter().find(|item| item.featured)
}

/// Featured slot plus the remaining grid
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<'a> {
    /// Shown in the highlight slot
    pub featured: Option<&'a ContentItem>,

    /// Shown in the plain results grid
    pub rest: Vec<&'a ContentItem>,
}

impl Partition<'_> {
    /// Total number of items displayed
    pub fn len(&self) -> usize {
        self.rest.len() + usize::from(self.featured.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split a listing into featured slot and grid.
///
/// When the featured item is surfaced it is removed from `rest`; under
/// any active filter it stays in `rest` if it matches like any other item.
pub fn partition_results<'a>(items: &'a [ContentItem], state: &FilterState) -> Partition<'a> {
    let featured = select_featured(items, state);
    let mut rest = filter_items(items, state);

    if let Some(spotlight) = featured {
        rest.retain(|item| item.id != spotlight.id);
    }

    Partition { featured, rest }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContentId, ItemDetails};
    use chrono::NaiveDate;

    fn media(id: u64, title: &str, category: &str, tab: &str, description: &str) -> ContentItem {
        ContentItem::new(
            id,
            title,
            category,
            ItemDetails::Media {
                description: description.to_string(),
                duration_minutes: 10,
                publish_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                thumbnail: String::new(),
                url: "#".to_string(),
                views: None,
                downloads: None,
            },
        )
        .with_tab(tab)
        .with_search_text(description)
    }

    fn sample() -> Vec<ContentItem> {
        vec![
            media(1, "Surrender", "lectures", "video", "Letting go").featured(),
            media(2, "Morning Meditation", "meditation", "audio", "Guided session"),
            media(3, "Gita Chapter 2", "scripture", "video", "The eternal soul"),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = sample();
        assert!(matches_search(&items[1], "MORNING"));
        assert!(matches_search(&items[2], "eternal"));
        assert!(matches_search(&items[2], ""));
        assert!(!matches_search(&items[2], "kirtan"));
    }

    #[test]
    fn test_tab_filter() {
        let items = sample();
        let state = FilterState::new().with_tab("audio");
        let ids: Vec<_> = filter_items(&items, &state).iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec![ContentId::from(2)]);
    }

    #[test]
    fn test_missing_facet_only_matches_all() {
        let items = sample();
        assert!(matches_secondary_facet(&items[0], &Selection::All));
        assert!(!matches_secondary_facet(&items[0], &Selection::from("beginner")));
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let items = sample();
        let state = FilterState::new().with_category("astrology");
        assert!(filter_items(&items, &state).is_empty());
    }

    #[test]
    fn test_partition_default_spotlights_featured() {
        let items = sample();
        let partition = partition_results(&items, &FilterState::new());
        assert_eq!(partition.featured.map(|i| i.title.as_str()), Some("Surrender"));
        assert_eq!(partition.rest.len(), 2);
        assert_eq!(partition.len(), 3);
    }

    #[test]
    fn test_partition_folds_featured_back_under_filter() {
        let items = sample();
        let partition = partition_results(&items, &FilterState::new().with_tab("video"));
        assert!(partition.featured.is_none());
        let titles: Vec<&str> = partition.rest.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Surrender", "Gita Chapter 2"]);
    }

    #[test]
    fn test_empty_listing() {
        let partition = partition_results(&[], &FilterState::new());
        assert!(partition.is_empty());
    }
}
