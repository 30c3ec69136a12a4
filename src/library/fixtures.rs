//! Literal listing content shipped with the site.
//!
//! Articles, courses and media are defined here and never change at
//! runtime. Books, events and meditation sessions normally come from
//! exported backend rows (see [`super::rows`]); the sets below are used
//! when no export is present.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use super::catalog::{FacetOption, Facets};
use crate::domain::{ContentItem, ItemDetails, ListingKind};

const AUTHOR: &str = "Vraja Bihari Das";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn options(pairs: &[(&str, &str)]) -> Vec<FacetOption> {
    pairs
        .iter()
        .map(|(value, label)| FacetOption::new(*value, *label))
        .collect()
}

/// Literal items for a listing
pub fn items(kind: ListingKind) -> Vec<ContentItem> {
    match kind {
        ListingKind::Articles => articles(),
        ListingKind::Books => books(),
        ListingKind::Courses => courses(),
        ListingKind::Events => events(),
        ListingKind::Media => media(),
        ListingKind::Meditation => meditation_sessions(),
    }
}

/// Select-control choices for a listing (without the `all` entries)
pub fn facets(kind: ListingKind) -> Facets {
    match kind {
        ListingKind::Articles => Facets {
            categories: options(&[
                ("spiritual-practice", "Spiritual Practice"),
                ("bhakti-yoga", "Bhakti Yoga"),
                ("daily-practice", "Daily Practice"),
                ("vedic-wisdom", "Vedic Wisdom"),
                ("community", "Community"),
                ("meditation", "Meditation"),
            ]),
            ..Default::default()
        },
        ListingKind::Books => Facets {
            categories: options(&[
                ("general", "General"),
                ("scripture", "Scripture"),
                ("practice", "Practice"),
            ]),
            ..Default::default()
        },
        ListingKind::Courses => Facets {
            categories: options(&[
                ("bhakti-yoga", "Bhakti Yoga"),
                ("meditation", "Meditation"),
                ("scripture", "Scripture Study"),
                ("lifestyle", "Mindful Living"),
                ("leadership", "Spiritual Leadership"),
            ]),
            secondary: options(&[
                ("beginner", "Beginner"),
                ("intermediate", "Intermediate"),
                ("advanced", "Advanced"),
            ]),
            ..Default::default()
        },
        ListingKind::Events => Facets {
            categories: options(&[("in-person", "In Person"), ("online", "Online")]),
            secondary: options(&[
                ("january", "January"),
                ("february", "February"),
                ("march", "March"),
                ("april", "April"),
                ("may", "May"),
                ("june", "June"),
                ("july", "July"),
                ("august", "August"),
                ("september", "September"),
                ("october", "October"),
                ("november", "November"),
                ("december", "December"),
            ]),
            ..Default::default()
        },
        ListingKind::Media => Facets {
            categories: options(&[
                ("lectures", "Lectures"),
                ("meditation", "Meditation"),
                ("scripture", "Scripture Study"),
                ("kirtan", "Kirtan"),
                ("practical", "Practical Wisdom"),
                ("prayers", "Prayers"),
            ]),
            tabs: options(&[("video", "Videos"), ("audio", "Audio")]),
            ..Default::default()
        },
        ListingKind::Meditation => Facets {
            categories: options(&[
                ("guided", "Guided"),
                ("mantra", "Mantra"),
                ("breathwork", "Breathwork"),
            ]),
            ..Default::default()
        },
    }
}

fn article(
    id: u64,
    title: &str,
    excerpt: &str,
    category: &str,
    publish_date: NaiveDate,
    read_time: &str,
    tags: &[&str],
) -> ContentItem {
    let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
    ContentItem::new(
        id,
        title,
        category,
        ItemDetails::Article {
            author: AUTHOR.to_string(),
            publish_date,
            read_time: read_time.to_string(),
            tags: tags.clone(),
        },
    )
    .with_search_text(excerpt)
    .with_search_texts(tags)
}

/// The six sample articles
pub fn articles() -> Vec<ContentItem> {
    vec![
        article(
            1,
            "Finding Inner Peace in Turbulent Times",
            "Discover practical techniques from ancient Vedic wisdom to maintain equilibrium and spiritual balance amidst life's challenges and uncertainties.",
            "spiritual-practice",
            date(2024, 1, 15),
            "8 min read",
            &["inner peace", "meditation", "spiritual balance"],
        )
        .featured(),
        article(
            2,
            "The Power of Gratitude in Bhakti Yoga",
            "Learn how cultivating genuine gratitude can transform your spiritual practice and deepen your connection with the divine through practical exercises.",
            "bhakti-yoga",
            date(2024, 1, 8),
            "6 min read",
            &["gratitude", "bhakti", "devotion"],
        ),
        article(
            3,
            "Mindful Living: Integrating Spirituality into Daily Routine",
            "Practical strategies for bringing spiritual awareness into everyday activities, from morning prayers to evening reflection.",
            "daily-practice",
            date(2024, 1, 1),
            "10 min read",
            &["mindfulness", "daily practice", "spirituality"],
        ),
        article(
            4,
            "Understanding the Bhagavad Gita's Relevance Today",
            "Explore how the timeless teachings of the Bhagavad Gita provide guidance for modern life challenges and decision-making.",
            "vedic-wisdom",
            date(2023, 12, 25),
            "12 min read",
            &["bhagavad gita", "ancient wisdom", "guidance"],
        ),
        article(
            5,
            "Building Spiritual Community in the Digital Age",
            "How to create meaningful spiritual connections and maintain devotional practices through online communities and digital tools.",
            "community",
            date(2023, 12, 18),
            "7 min read",
            &["community", "digital age", "connection"],
        ),
        article(
            6,
            "The Science of Chanting: Ancient Practice, Modern Benefits",
            "Discover the neurological and psychological benefits of mantra meditation and chanting practices backed by contemporary research.",
            "meditation",
            date(2023, 12, 11),
            "9 min read",
            &["chanting", "mantra", "meditation", "science"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: u64,
    title: &str,
    category: &str,
    level: &str,
    price: u32,
    duration: &str,
    (lessons, students): (u32, u32),
    (rating, reviews): (f32, u32),
    description: &str,
    highlights: &[&str],
) -> ContentItem {
    let highlights: Vec<String> = highlights.iter().map(|h| h.to_string()).collect();
    ContentItem::new(
        id,
        title,
        category,
        ItemDetails::Course {
            instructor: AUTHOR.to_string(),
            description: description.to_string(),
            price,
            duration: duration.to_string(),
            lessons,
            students,
            rating,
            reviews,
            highlights: highlights.clone(),
        },
    )
    .with_facet(level)
    .with_search_text(description)
    .with_search_texts(highlights)
}

/// The six sample courses; the secondary facet is the course level
pub fn courses() -> Vec<ContentItem> {
    vec![
        course(
            1,
            "Fundamentals of Bhakti Yoga",
            "bhakti-yoga",
            "beginner",
            99,
            "8 weeks",
            (24, 1250),
            (4.9, 156),
            "A comprehensive introduction to the principles and practices of Bhakti Yoga, perfect for beginners seeking spiritual transformation.",
            &["Daily meditation practices", "Scripture study", "Community support", "Live Q&A sessions"],
        )
        .featured(),
        course(
            2,
            "Advanced Meditation Techniques",
            "meditation",
            "advanced",
            149,
            "12 weeks",
            (36, 890),
            (4.8, 98),
            "Deepen your meditation practice with advanced techniques from Vedic tradition and modern mindfulness approaches.",
            &["Advanced breathing techniques", "Chakra meditation", "Silent retreats", "Personal guidance"],
        ),
        course(
            3,
            "Bhagavad Gita Deep Dive",
            "scripture",
            "intermediate",
            129,
            "16 weeks",
            (48, 2100),
            (4.9, 234),
            "Explore the timeless wisdom of the Bhagavad Gita with verse-by-verse analysis and practical life applications.",
            &["18 chapters covered", "Sanskrit pronunciation", "Practical applications", "Study materials included"],
        ),
        course(
            4,
            "Mindful Living Masterclass",
            "lifestyle",
            "beginner",
            79,
            "6 weeks",
            (18, 1560),
            (4.7, 189),
            "Transform your daily routine into spiritual practice with mindfulness techniques rooted in Vedic wisdom.",
            &["Daily life integration", "Stress management", "Relationship harmony", "Work-life balance"],
        ),
        course(
            5,
            "Sacred Sound and Mantra Meditation",
            "meditation",
            "intermediate",
            109,
            "10 weeks",
            (30, 745),
            (4.8, 87),
            "Discover the transformative power of sacred sound through traditional mantras and kirtan practice.",
            &["Traditional mantras", "Kirtan practice", "Sound healing", "Voice training"],
        ),
        course(
            6,
            "Spiritual Leadership Program",
            "leadership",
            "advanced",
            299,
            "20 weeks",
            (60, 320),
            (4.9, 45),
            "Develop conscious leadership skills through spiritual principles for creating positive change in your community.",
            &["Leadership principles", "Community building", "Mentorship training", "Certificate program"],
        ),
    ]
}

/// Audience reach of a media item
enum Reach {
    Views(u64),
    Downloads(u64),
}

#[allow(clippy::too_many_arguments)]
fn media_item(
    id: u64,
    title: &str,
    media_type: &str,
    category: &str,
    description: &str,
    duration_minutes: u32,
    publish_date: NaiveDate,
    thumbnail: &str,
    reach: Reach,
) -> ContentItem {
    let (views, downloads) = match reach {
        Reach::Views(n) => (Some(n), None),
        Reach::Downloads(n) => (None, Some(n)),
    };
    ContentItem::new(
        id,
        title,
        category,
        ItemDetails::Media {
            description: description.to_string(),
            duration_minutes,
            publish_date,
            thumbnail: thumbnail.to_string(),
            url: "#".to_string(),
            views,
            downloads,
        },
    )
    .with_tab(media_type)
    .with_search_text(description)
}

/// The six sample media entries; the tab is the media type
pub fn media() -> Vec<ContentItem> {
    vec![
        media_item(
            1,
            "The Art of Spiritual Surrender",
            "video",
            "lectures",
            "A comprehensive lecture on letting go and surrendering to divine will in daily spiritual practice.",
            45,
            date(2024, 1, 10),
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=225&fit=crop",
            Reach::Views(12_500),
        )
        .featured(),
        media_item(
            2,
            "Morning Meditation: Finding Inner Peace",
            "audio",
            "meditation",
            "A guided 20-minute meditation session to start your day with spiritual awareness and tranquility.",
            20,
            date(2024, 1, 8),
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=225&fit=crop",
            Reach::Downloads(8_900),
        ),
        media_item(
            3,
            "Bhagavad Gita Chapter 2: The Eternal Soul",
            "video",
            "scripture",
            "Deep dive into the second chapter of the Bhagavad Gita exploring the nature of the eternal soul.",
            60,
            date(2024, 1, 5),
            "https://images.unsplash.com/photo-1544967882-f3927602b5f5?w=400&h=225&fit=crop",
            Reach::Views(18_200),
        ),
        media_item(
            4,
            "Kirtan: Sacred Sound Meditation",
            "audio",
            "kirtan",
            "Experience the transformative power of sacred sound through traditional kirtan chanting.",
            35,
            date(2024, 1, 3),
            "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400&h=225&fit=crop",
            Reach::Downloads(15_600),
        ),
        media_item(
            5,
            "Practical Spirituality in Modern Life",
            "video",
            "practical",
            "How to integrate spiritual principles into your career, relationships, and daily decisions.",
            38,
            date(2023, 12, 28),
            "https://images.unsplash.com/photo-1499209974431-9dddcece7f88?w=400&h=225&fit=crop",
            Reach::Views(9_800),
        ),
        media_item(
            6,
            "Evening Prayers and Reflection",
            "audio",
            "prayers",
            "End your day with gratitude through traditional evening prayers and spiritual reflection.",
            15,
            date(2023, 12, 25),
            "https://images.unsplash.com/photo-1447958272669-9c562446851",
            Reach::Downloads(7_200),
        ),
    ]
}

fn book(id: u64, title: &str, category: &str, description: &str, price: f64) -> ContentItem {
    ContentItem::new(
        id,
        title,
        category,
        ItemDetails::Book {
            author: AUTHOR.to_string(),
            description: description.to_string(),
            cover_image_url: None,
            purchase_link: None,
            price: Some(price),
        },
    )
    .with_search_text(description)
}

/// Fallback book list
pub fn books() -> Vec<ContentItem> {
    vec![
        book(
            1,
            "Vedic Wisdom for the Modern World",
            "general",
            "Timeless principles from the Vedic tradition applied to work, relationships and inner life.",
            19.99,
        )
        .featured(),
        book(
            2,
            "Bhagavad Gita: A Practical Companion",
            "scripture",
            "A chapter-by-chapter guide to living the teachings of the Gita.",
            24.99,
        ),
        book(
            3,
            "The Daily Sadhana Handbook",
            "practice",
            "Morning and evening routines for a steady devotional practice.",
            14.99,
        ),
    ]
}

fn event(
    id: u64,
    title: &str,
    description: &str,
    location: &str,
    (start_time, end_time): (DateTime<Utc>, DateTime<Utc>),
    price: f64,
    max_attendees: Option<u32>,
) -> ContentItem {
    let format = super::rows::event_format(location);
    let month = super::rows::month_facet(&start_time);
    ContentItem::new(
        id,
        title,
        format,
        ItemDetails::Event {
            description: description.to_string(),
            location: location.to_string(),
            start_time,
            end_time,
            banner_url: None,
            price,
            max_attendees,
        },
    )
    .with_facet(month)
    .with_search_text(description)
    .with_search_text(location)
}

/// Fallback event list; category is the format, facet is the month
pub fn events() -> Vec<ContentItem> {
    vec![
        event(
            1,
            "Bhakti Yoga Weekend Retreat",
            "Two days of kirtan, scripture study and silent meditation.",
            "Govardhan Eco Village, Maharashtra",
            (at(2026, 11, 21, 9, 0), at(2026, 11, 22, 17, 0)),
            150.0,
            Some(80),
        )
        .featured(),
        event(
            2,
            "Gita Wisdom Evening",
            "An open discussion on chapter 12 of the Bhagavad Gita.",
            "Online (Zoom)",
            (at(2026, 12, 5, 14, 0), at(2026, 12, 5, 15, 30)),
            0.0,
            None,
        ),
        event(
            3,
            "New Year Kirtan Celebration",
            "Welcome the new year with sacred sound and community.",
            "Radha Gopinath Temple, Mumbai",
            (at(2027, 1, 1, 12, 0), at(2027, 1, 1, 15, 0)),
            0.0,
            Some(300),
        ),
    ]
}

fn session(
    id: u64,
    title: &str,
    category: &str,
    description: &str,
    duration_minutes: u32,
    price: f64,
) -> ContentItem {
    ContentItem::new(
        id,
        title,
        category,
        ItemDetails::Meditation {
            description: description.to_string(),
            duration_minutes,
            price,
            instructor: AUTHOR.to_string(),
            thumbnail_url: None,
            audio_url: None,
            video_url: None,
        },
    )
    .with_search_text(description)
}

/// Fallback meditation sessions
pub fn meditation_sessions() -> Vec<ContentItem> {
    vec![
        session(
            1,
            "Morning Stillness",
            "guided",
            "A gentle guided practice to begin the day with clarity.",
            20,
            0.0,
        )
        .featured(),
        session(
            2,
            "Maha Mantra Japa",
            "mantra",
            "Rhythmic chanting on beads to steady the mind.",
            30,
            9.0,
        ),
        session(
            3,
            "Breath of the Heart",
            "breathwork",
            "Pranayama sequences that calm the nervous system.",
            15,
            5.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listing_has_one_featured_item() {
        for kind in ListingKind::ALL {
            let featured = items(kind).iter().filter(|i| i.featured).count();
            assert_eq!(featured, 1, "{} should have one featured item", kind);
        }
    }

    #[test]
    fn test_item_details_match_listing() {
        for kind in ListingKind::ALL {
            assert!(items(kind).iter().all(|i| i.kind() == kind));
        }
    }

    #[test]
    fn test_item_categories_are_known_options() {
        for kind in ListingKind::ALL {
            let facets = facets(kind);
            for item in items(kind) {
                assert!(
                    facets.categories.iter().any(|o| o.value == item.category),
                    "{} has unknown category {}",
                    item.title,
                    item.category
                );
            }
        }
    }

    #[test]
    fn test_event_facets_are_derived() {
        let events = events();
        assert_eq!(events[0].category, "in-person");
        assert_eq!(events[0].secondary_facet.as_deref(), Some("november"));
        assert_eq!(events[1].category, "online");
        assert_eq!(events[2].secondary_facet.as_deref(), Some("january"));
    }
}
