//! Content items shown on the listing pages.
//!
//! Every listing (articles, books, courses, events, media, meditation
//! sessions) is a flat list of [`ContentItem`]s. Only `category`,
//! `secondary_facet`, `tab`, the title and `search_text` take part in
//! filtering; everything in [`ItemDetails`] is carried through for display.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a listing entry, unique within one listing.
///
/// Literal page data uses small integers, rows exported from the hosted
/// tables use UUID strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentId {
    Number(u64),
    Text(String),
}

impl From<u64> for ContentId {
    fn from(n: u64) -> Self {
        ContentId::Number(n)
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        ContentId::Text(s.to_string())
    }
}

impl From<String> for ContentId {
    fn from(s: String) -> Self {
        ContentId::Text(s)
    }
}

impl FromStr for ContentId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u64>() {
            Ok(n) => ContentId::Number(n),
            Err(_) => ContentId::Text(s.to_string()),
        })
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentId::Number(n) => write!(f, "{}", n),
            ContentId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Which listing page a set of items belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Articles,
    Books,
    Courses,
    Events,
    Media,
    Meditation,
}

impl ListingKind {
    /// Every listing, in navigation order
    pub const ALL: [ListingKind; 6] = [
        ListingKind::Books,
        ListingKind::Articles,
        ListingKind::Courses,
        ListingKind::Events,
        ListingKind::Media,
        ListingKind::Meditation,
    ];

    /// Singular noun used in headings ("Featured Article")
    pub fn noun(&self) -> &'static str {
        match self {
            ListingKind::Articles => "Article",
            ListingKind::Books => "Book",
            ListingKind::Courses => "Course",
            ListingKind::Events => "Event",
            ListingKind::Media => "Content",
            ListingKind::Meditation => "Session",
        }
    }

    /// Plural noun used in headings ("Recent Articles")
    pub fn plural_noun(&self) -> &'static str {
        match self {
            ListingKind::Articles => "Articles",
            ListingKind::Books => "Books",
            ListingKind::Courses => "Courses",
            ListingKind::Events => "Events",
            ListingKind::Media => "Media",
            ListingKind::Meditation => "Sessions",
        }
    }

    /// Count phrase for the results line ("1 article found", "3 items found")
    pub fn count_phrase(&self, count: usize) -> String {
        let word = match self {
            ListingKind::Articles => "article",
            ListingKind::Books => "book",
            ListingKind::Courses => "course",
            ListingKind::Events => "event",
            ListingKind::Media => "item",
            ListingKind::Meditation => "session",
        };
        let suffix = if count == 1 { "" } else { "s" };
        format!("{} {}{} found", count, word, suffix)
    }

    /// Hosted table the listing is exported from, if it is backend-backed
    pub fn table_name(&self) -> Option<&'static str> {
        match self {
            ListingKind::Books => Some("books"),
            ListingKind::Events => Some("events"),
            ListingKind::Meditation => Some("meditation_sessions"),
            _ => None,
        }
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingKind::Articles => write!(f, "articles"),
            ListingKind::Books => write!(f, "books"),
            ListingKind::Courses => write!(f, "courses"),
            ListingKind::Events => write!(f, "events"),
            ListingKind::Media => write!(f, "media"),
            ListingKind::Meditation => write!(f, "meditation"),
        }
    }
}

impl FromStr for ListingKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "articles" | "article" | "blog" => Ok(ListingKind::Articles),
            "books" | "book" => Ok(ListingKind::Books),
            "courses" | "course" => Ok(ListingKind::Courses),
            "events" | "event" => Ok(ListingKind::Events),
            "media" => Ok(ListingKind::Media),
            "meditation" | "meditations" | "sessions" => Ok(ListingKind::Meditation),
            _ => anyhow::bail!("Unknown listing: {}", s),
        }
    }
}

/// Listing-specific display fields, never consulted by the filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemDetails {
    Article {
        author: String,
        publish_date: NaiveDate,
        read_time: String,
        #[serde(default)]
        tags: Vec<String>,
    },
    Book {
        author: String,
        description: String,
        #[serde(default)]
        cover_image_url: Option<String>,
        #[serde(default)]
        purchase_link: Option<String>,
        #[serde(default)]
        price: Option<f64>,
    },
    Course {
        instructor: String,
        description: String,
        price: u32,
        duration: String,
        lessons: u32,
        students: u32,
        rating: f32,
        reviews: u32,
        #[serde(default)]
        highlights: Vec<String>,
    },
    Event {
        description: String,
        location: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        #[serde(default)]
        banner_url: Option<String>,
        #[serde(default)]
        price: f64,
        #[serde(default)]
        max_attendees: Option<u32>,
    },
    Media {
        description: String,
        duration_minutes: u32,
        publish_date: NaiveDate,
        thumbnail: String,
        url: String,
        #[serde(default)]
        views: Option<u64>,
        #[serde(default)]
        downloads: Option<u64>,
    },
    Meditation {
        description: String,
        duration_minutes: u32,
        #[serde(default)]
        price: f64,
        instructor: String,
        #[serde(default)]
        thumbnail_url: Option<String>,
        #[serde(default)]
        audio_url: Option<String>,
        #[serde(default)]
        video_url: Option<String>,
    },
}

impl ItemDetails {
    /// The listing these details belong to
    pub fn kind(&self) -> ListingKind {
        match self {
            ItemDetails::Article { .. } => ListingKind::Articles,
            ItemDetails::Book { .. } => ListingKind::Books,
            ItemDetails::Course { .. } => ListingKind::Courses,
            ItemDetails::Event { .. } => ListingKind::Events,
            ItemDetails::Media { .. } => ListingKind::Media,
            ItemDetails::Meditation { .. } => ListingKind::Meditation,
        }
    }
}

/// One entry of a listing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique within the listing
    pub id: ContentId,

    /// Display title, always searchable
    pub title: String,

    /// One value from the listing's category set
    pub category: String,

    /// Searchable fields besides the title (excerpt, description, tags)
    #[serde(default)]
    pub search_text: Vec<String>,

    /// Second classification axis (course level, event month)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_facet: Option<String>,

    /// Media type driving the tab control (video, audio)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,

    /// Highlighted in the featured slot; at most one per listing
    #[serde(default)]
    pub featured: bool,

    pub details: ItemDetails,
}

impl ContentItem {
    /// Create a new, non-featured item with no facets
    pub fn new(
        id: impl Into<ContentId>,
        title: impl Into<String>,
        category: impl Into<String>,
        details: ItemDetails,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            search_text: Vec::new(),
            secondary_facet: None,
            tab: None,
            featured: false,
            details,
        }
    }

    /// Add a searchable field
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text.push(text.into());
        self
    }

    /// Add several searchable fields
    pub fn with_search_texts(mut self, texts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.search_text.extend(texts.into_iter().map(Into::into));
        self
    }

    /// Set the secondary facet
    pub fn with_facet(mut self, facet: impl Into<String>) -> Self {
        self.secondary_facet = Some(facet.into());
        self
    }

    /// Set the media-type tab
    pub fn with_tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = Some(tab.into());
        self
    }

    /// Mark as the featured item
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Which listing this item belongs to
    pub fn kind(&self) -> ListingKind {
        self.details.kind()
    }

    /// All fields eligible for free-text search, title first
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str()).chain(self.search_text.iter().map(String::as_str))
    }
}
