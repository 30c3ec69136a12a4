//! Rows exported from the hosted `books`, `events` and
//! `meditation_sessions` tables.
//!
//! Rows are mapped into [`ContentItem`]s and ordered the way the site
//! queried them: featured rows first, then newest (books, sessions) or
//! soonest (events). Past events are dropped.

use std::cmp::Ordering;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ContentItem, ItemDetails, ListingKind};

/// Category given to rows that carry none
pub const DEFAULT_CATEGORY: &str = "general";

/// A row of the `books` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub purchase_link: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

/// A row of the `events` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub banner_url: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub max_attendees: Option<u32>,
    #[serde(default)]
    pub is_featured: bool,
}

/// A row of the `meditation_sessions` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeditationRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Minutes
    pub duration: u32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Event format derived from its location
pub fn event_format(location: &str) -> &'static str {
    if location.to_lowercase().contains("online") {
        "online"
    } else {
        "in-person"
    }
}

/// Lowercase English month name of a timestamp ("march")
pub fn month_facet(time: &DateTime<Utc>) -> String {
    time.format("%B").to_string().to_lowercase()
}

/// Featured rows first
fn featured_first(a: bool, b: bool) -> Ordering {
    b.cmp(&a)
}

/// Keep the featured flag on the first featured item only
fn single_featured(mut items: Vec<ContentItem>) -> Vec<ContentItem> {
    let mut seen = false;
    for item in items.iter_mut() {
        if item.featured {
            if seen {
                tracing::debug!(id = %item.id, "Demoting extra featured row");
                item.featured = false;
            }
            seen = true;
        }
    }
    items
}

impl From<BookRow> for ContentItem {
    fn from(row: BookRow) -> Self {
        let mut item = ContentItem::new(
            row.id,
            row.title,
            row.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            ItemDetails::Book {
                author: row.author.clone(),
                description: row.description.clone(),
                cover_image_url: row.cover_image_url,
                purchase_link: row.purchase_link,
                price: row.price,
            },
        )
        .with_search_text(row.description)
        .with_search_text(row.author);
        item.featured = row.is_featured;
        item
    }
}

impl From<EventRow> for ContentItem {
    fn from(row: EventRow) -> Self {
        let format = event_format(&row.location);
        let month = month_facet(&row.start_time);
        let mut item = ContentItem::new(
            row.id,
            row.title,
            format,
            ItemDetails::Event {
                description: row.description.clone(),
                location: row.location.clone(),
                start_time: row.start_time,
                end_time: row.end_time,
                banner_url: row.banner_url,
                price: row.price,
                max_attendees: row.max_attendees,
            },
        )
        .with_facet(month)
        .with_search_text(row.description)
        .with_search_text(row.location);
        item.featured = row.is_featured;
        item
    }
}

impl From<MeditationRow> for ContentItem {
    fn from(row: MeditationRow) -> Self {
        let mut item = ContentItem::new(
            row.id,
            row.title,
            row.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            ItemDetails::Meditation {
                description: row.description.clone(),
                duration_minutes: row.duration,
                price: row.price,
                instructor: row.instructor,
                thumbnail_url: row.thumbnail_url,
                audio_url: row.audio_url,
                video_url: row.video_url,
            },
        )
        .with_search_text(row.description);
        item.featured = row.is_featured;
        item
    }
}

/// Books: featured first, then most recently created
pub fn books_to_items(mut rows: Vec<BookRow>) -> Vec<ContentItem> {
    rows.sort_by(|a, b| {
        featured_first(a.is_featured, b.is_featured).then_with(|| b.created_at.cmp(&a.created_at))
    });
    single_featured(rows.into_iter().map(ContentItem::from).collect())
}

/// Upcoming events only: featured first, then soonest
pub fn events_to_items(rows: Vec<EventRow>, now: DateTime<Utc>) -> Vec<ContentItem> {
    let mut upcoming: Vec<EventRow> = rows.into_iter().filter(|r| r.start_time >= now).collect();
    upcoming.sort_by(|a, b| {
        featured_first(a.is_featured, b.is_featured).then_with(|| a.start_time.cmp(&b.start_time))
    });
    single_featured(upcoming.into_iter().map(ContentItem::from).collect())
}

/// Meditation sessions: featured first, then most recently created
pub fn sessions_to_items(mut rows: Vec<MeditationRow>) -> Vec<ContentItem> {
    rows.sort_by(|a, b| {
        featured_first(a.is_featured, b.is_featured).then_with(|| b.created_at.cmp(&a.created_at))
    });
    single_featured(rows.into_iter().map(ContentItem::from).collect())
}

/// Parse a JSON array of exported rows for a backend-backed listing
pub fn items_from_json(kind: ListingKind, json: &str, now: DateTime<Utc>) -> Result<Vec<ContentItem>> {
    match kind {
        ListingKind::Books => {
            let rows: Vec<BookRow> = serde_json::from_str(json).context("Failed to parse book rows")?;
            Ok(books_to_items(rows))
        }
        ListingKind::Events => {
            let rows: Vec<EventRow> =
                serde_json::from_str(json).context("Failed to parse event rows")?;
            Ok(events_to_items(rows, now))
        }
        ListingKind::Meditation => {
            let rows: Vec<MeditationRow> =
                serde_json::from_str(json).context("Failed to parse meditation session rows")?;
            Ok(sessions_to_items(rows))
        }
        other => anyhow::bail!("The {} listing is not exported from a table", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, month, day, 10, 0, 0).unwrap()
    }

    fn book_row(id: &str, featured: bool, created: DateTime<Utc>) -> BookRow {
        BookRow {
            id: id.to_string(),
            title: format!("Book {}", id),
            description: String::new(),
            author: "Author".to_string(),
            cover_image_url: None,
            purchase_link: None,
            price: None,
            category: None,
            is_featured: featured,
            created_at: created,
        }
    }

    fn event_row(id: &str, featured: bool, start: DateTime<Utc>, location: &str) -> EventRow {
        EventRow {
            id: id.to_string(),
            title: format!("Event {}", id),
            description: String::new(),
            location: location.to_string(),
            start_time: start,
            end_time: start,
            banner_url: None,
            price: 0.0,
            max_attendees: None,
            is_featured: featured,
        }
    }

    fn ids(items: &[ContentItem]) -> Vec<String> {
        items.iter().map(|i| i.id.to_string()).collect()
    }

    #[test]
    fn test_books_featured_then_newest() {
        let items = books_to_items(vec![
            book_row("old", false, ts(1, 1)),
            book_row("new", false, ts(3, 1)),
            book_row("star", true, ts(2, 1)),
        ]);
        assert_eq!(ids(&items), vec!["star", "new", "old"]);
        assert_eq!(items[0].category, DEFAULT_CATEGORY);
        assert!(items[0].featured);
    }

    #[test]
    fn test_events_drop_past_and_sort_soonest() {
        let now = ts(6, 1);
        let items = events_to_items(
            vec![
                event_row("past", true, ts(5, 1), "Mumbai"),
                event_row("later", false, ts(9, 1), "Online"),
                event_row("sooner", false, ts(7, 1), "Pune"),
            ],
            now,
        );
        assert_eq!(ids(&items), vec!["sooner", "later"]);
        assert_eq!(items[0].category, "in-person");
        assert_eq!(items[0].secondary_facet.as_deref(), Some("july"));
        assert_eq!(items[1].category, "online");
    }

    #[test]
    fn test_extra_featured_rows_are_demoted() {
        let items = books_to_items(vec![
            book_row("a", true, ts(1, 1)),
            book_row("b", true, ts(2, 1)),
        ]);
        assert_eq!(items.iter().filter(|i| i.featured).count(), 1);
        assert_eq!(ids(&items), vec!["b", "a"]);
        assert!(items[0].featured);
    }

    #[test]
    fn test_items_from_json_sessions() {
        let json = r#"[
            {"id": "s1", "title": "Japa", "duration": 30, "created_at": "2026-01-01T00:00:00Z"},
            {"id": "s2", "title": "Stillness", "duration": 20, "is_featured": true,
             "category": "guided", "created_at": "2025-01-01T00:00:00Z"}
        ]"#;
        let items = items_from_json(ListingKind::Meditation, json, Utc::now()).unwrap();
        assert_eq!(ids(&items), vec!["s2", "s1"]);
        assert_eq!(items[0].category, "guided");
    }

    #[test]
    fn test_items_from_json_rejects_literal_listings() {
        assert!(items_from_json(ListingKind::Articles, "[]", Utc::now()).is_err());
    }
}
