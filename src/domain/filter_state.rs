//! Transient filter state driven by the listing page controls.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A select control's value: the `all` sentinel or one concrete value.
///
/// Serialized as a plain string so it can round-trip through query
/// strings and config files unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Sentinel string meaning "no restriction"
    pub const ALL: &'static str = "all";

    /// Whether this is the default, unrestricted selection
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// The selected value, if restricted
    pub fn value(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(v),
        }
    }

    /// Whether an item attribute passes this selection.
    ///
    /// A missing attribute only passes `All`.
    pub fn admits(&self, attribute: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(v) => attribute == Some(v.as_str()),
        }
    }
}

impl From<&str> for Selection {
    fn from(s: &str) -> Self {
        if s == Self::ALL {
            Selection::All
        } else {
            Selection::Only(s.to_string())
        }
    }
}

impl From<String> for Selection {
    fn from(s: String) -> Self {
        if s == Self::ALL {
            Selection::All
        } else {
            Selection::Only(s)
        }
    }
}

impl From<Option<String>> for Selection {
    fn from(s: Option<String>) -> Self {
        s.map(Selection::from).unwrap_or_default()
    }
}

impl From<Selection> for String {
    fn from(s: Selection) -> Self {
        match s {
            Selection::All => Selection::ALL.to_string(),
            Selection::Only(v) => v,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "{}", Self::ALL),
            Selection::Only(v) => write!(f, "{}", v),
        }
    }
}

/// Current state of a listing page's search box and select controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free text, matched as a case-insensitive substring
    #[serde(default)]
    pub search_term: String,

    #[serde(default)]
    pub category: Selection,

    /// Level, event month, or similar second axis
    #[serde(default)]
    pub secondary_facet: Selection,

    /// Media type tab
    #[serde(default)]
    pub active_tab: Selection,
}

impl FilterState {
    /// State at page mount: every control at its default
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<Selection>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_facet(mut self, facet: impl Into<Selection>) -> Self {
        self.secondary_facet = facet.into();
        self
    }

    pub fn with_tab(mut self, tab: impl Into<Selection>) -> Self {
        self.active_tab = tab.into();
        self
    }

    /// True when no control restricts the listing
    pub fn is_default(&self) -> bool {
        self.search_term.is_empty()
            && self.category.is_all()
            && self.secondary_facet.is_all()
            && self.active_tab.is_all()
    }

    /// Put every control back to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_sentinel() {
        assert_eq!(Selection::from("all"), Selection::All);
        assert_eq!(
            Selection::from("meditation"),
            Selection::Only("meditation".to_string())
        );
        assert_eq!(Selection::from(None::<String>), Selection::All);
        assert_eq!(Selection::All.to_string(), "all");
    }

    #[test]
    fn test_selection_admits() {
        let only = Selection::from("advanced");
        assert!(only.admits(Some("advanced")));
        assert!(!only.admits(Some("beginner")));
        assert!(!only.admits(None));
        assert!(Selection::All.admits(None));
    }

    #[test]
    fn test_default_state() {
        let state = FilterState::new();
        assert!(state.is_default());
        assert!(!state.clone().with_search("peace").is_default());
        assert!(!state.clone().with_tab("video").is_default());
        // Explicitly selecting "all" is still the default
        assert!(state.with_category("all").is_default());
    }

    #[test]
    fn test_reset() {
        let mut state = FilterState::new()
            .with_search("gita")
            .with_category("scripture")
            .with_facet("advanced");
        state.reset();
        assert!(state.is_default());
    }

    #[test]
    fn test_filter_state_serializes_sentinels_as_strings() {
        let state = FilterState::new().with_category("meditation");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["category"], "meditation");
        assert_eq!(json["secondary_facet"], "all");

        let parsed: FilterState = serde_json::from_str(r#"{"category":"all"}"#).unwrap();
        assert!(parsed.is_default());
    }
}
