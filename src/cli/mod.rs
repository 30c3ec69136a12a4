//! Command-line interface for vedic.
//!
//! Provides commands for browsing and filtering the listings, rotating the
//! home page highlights, and submitting the contact, donation and
//! enrollment forms.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::config;
use crate::domain::{ContentId, ContentItem, FilterState, ItemDetails, ListingKind, Selection};
use crate::forms::{
    submit_contact, submit_donation, submit_enrollment, ContactForm, DonationForm,
    InquiryCategory, LogOutbox, Notice, QUICK_AMOUNTS,
};
use crate::library::{FacetOption, Listing};
use crate::presentation::AutoAdvance;

pub mod format;

use format::{format_count, format_date, format_datetime, format_duration, format_price, truncate};

/// Number of home page highlight slides
const HIGHLIGHT_SLIDES: usize = 3;

/// vedic - Browse and filter Vedic wisdom content
#[derive(Parser, Debug)]
#[command(name = "vedic")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a page's items under the given filters
    List {
        /// Listing to show
        #[arg(value_enum)]
        listing: ListingArg,

        /// Case-insensitive search over titles and descriptions
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category value ("all" for every category)
        #[arg(short, long, default_value = Selection::ALL)]
        category: String,

        /// Secondary facet value such as course level or event month
        #[arg(short, long, default_value = Selection::ALL)]
        facet: String,

        /// Media tab (video, audio)
        #[arg(short, long, default_value = Selection::ALL)]
        tab: String,

        /// Maximum number of items to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show the filter choices a page offers
    Facets {
        #[arg(value_enum)]
        listing: ListingArg,
    },

    /// Show details of one item
    Show {
        #[arg(value_enum)]
        listing: ListingArg,

        /// Item ID
        id: String,
    },

    /// Rotate the home page highlights
    Carousel {
        /// Number of automatic advances to watch
        #[arg(short, long, default_value = "3")]
        ticks: usize,

        /// Seconds between advances (config value if not specified)
        #[arg(short, long)]
        interval_secs: Option<u64>,
    },

    /// Send a contact message
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,

        /// Inquiry category (general, courses, events, books, media, donations, technical)
        #[arg(long)]
        category: Option<String>,
    },

    /// Record a donation pledge
    Donate {
        /// Amount in dollars (quick amounts: 25, 50, 100, 250, 500)
        #[arg(long)]
        amount: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: Option<String>,

        /// Signed-in user ID
        #[arg(long, env = "VEDIC_USER")]
        user: Option<String>,
    },

    /// Enroll in a meditation session
    Enroll {
        /// Meditation session ID
        session_id: String,

        /// Signed-in user ID
        #[arg(long, env = "VEDIC_USER")]
        user: Option<String>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Listing for CLI (maps to ListingKind)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListingArg {
    Articles,
    Books,
    Courses,
    Events,
    Media,
    Meditation,
}

impl From<ListingArg> for ListingKind {
    fn from(l: ListingArg) -> Self {
        match l {
            ListingArg::Articles => ListingKind::Articles,
            ListingArg::Books => ListingKind::Books,
            ListingArg::Courses => ListingKind::Courses,
            ListingArg::Events => ListingKind::Events,
            ListingArg::Media => ListingKind::Media,
            ListingArg::Meditation => ListingKind::Meditation,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::List {
                listing,
                search,
                category,
                facet,
                tab,
                limit,
            } => {
                let state = FilterState::new()
                    .with_search(search)
                    .with_category(category)
                    .with_facet(facet)
                    .with_tab(tab);
                list_items(listing.into(), &state, limit).await
            }
            Commands::Facets { listing } => {
                show_facets(listing.into()).await
            }
            Commands::Show { listing, id } => {
                show_item(listing.into(), &id).await
            }
            Commands::Carousel {
                ticks,
                interval_secs,
            } => {
                run_carousel(ticks, interval_secs).await
            }
            Commands::Contact {
                name,
                email,
                subject,
                message,
                category,
            } => {
                send_contact(name, email, subject, message, category).await
            }
            Commands::Donate {
                amount,
                name,
                email,
                message,
                user,
            } => {
                let mut form = DonationForm {
                    amount,
                    donor_name: name,
                    donor_email: email,
                    message: message.unwrap_or_default(),
                };
                let label = form.button_label();
                eprintln!("{}", label);
                report(submit_donation(&mut form, user.as_deref(), &LogOutbox::new()).await)
            }
            Commands::Enroll { session_id, user } => {
                enroll(&session_id, user.as_deref()).await
            }
            Commands::Config => {
                show_config().await
            }
        }
    }
}

/// Load a listing from the configured content directory
async fn load_listing(kind: ListingKind) -> Result<Listing> {
    let content_dir = config::content_dir()?;
    Listing::discover(kind, &content_dir).await
}

fn print_row(listing: &Listing, item: &ContentItem) {
    let category = listing
        .category_label(&item.category)
        .unwrap_or(&item.category);
    println!(
        "{:<6} {:<22} {:<12} {:<50}",
        item.id.to_string(),
        truncate(category, 22),
        item.secondary_facet.as_deref().or(item.tab.as_deref()).unwrap_or("-"),
        truncate(&item.title, 50)
    );
}

/// List items of a page under a filter state
async fn list_items(kind: ListingKind, state: &FilterState, limit: usize) -> Result<()> {
    let listing = load_listing(kind).await?;
    let view = listing.view(state);

    if let Some(featured) = view.partition.featured {
        println!("Featured {}", kind.noun());
        println!("  {}", featured.title);
        if let Some(summary) = featured.search_text.first() {
            println!("  {}", truncate(summary, 76));
        }
        println!();
    }

    println!("{}", view.heading);

    if view.partition.rest.is_empty() {
        println!("\nNo {} found matching your criteria.", kind.plural_noun().to_lowercase());
    } else {
        println!("{:<6} {:<22} {:<12} {:<50}", "ID", "CATEGORY", "FACET", "TITLE");
        println!("{}", "-".repeat(92));
        for item in view.partition.rest.iter().take(limit) {
            print_row(&listing, item);
        }
    }

    println!("\n{}", view.summary);

    Ok(())
}

fn print_options(heading: &str, options: &[FacetOption]) {
    if options.is_empty() {
        return;
    }
    println!("{}:", heading);
    println!("  {:<22} {}", Selection::ALL, "All");
    for option in options {
        println!("  {:<22} {}", option.value, option.label);
    }
    println!();
}

/// Show the filter choices for a page
async fn show_facets(kind: ListingKind) -> Result<()> {
    let listing = load_listing(kind).await?;
    let facets = listing.facets();

    print_options("Categories", &facets.categories);
    print_options(
        match kind {
            ListingKind::Courses => "Levels",
            ListingKind::Events => "Months",
            _ => "Secondary",
        },
        &facets.secondary,
    );
    print_options("Tabs", &facets.tabs);

    Ok(())
}

/// Show details of one item
async fn show_item(kind: ListingKind, id: &str) -> Result<()> {
    let listing = load_listing(kind).await?;
    let content_id: ContentId = id.parse().unwrap_or_else(|never| match never {});

    let item = listing
        .find(&content_id)
        .ok_or_else(|| anyhow::anyhow!("{} not found: {}", kind.noun(), id))?;

    println!("{}", "=".repeat(64));
    println!("  ID: {}", item.id);
    println!("  Title: {}", item.title);
    println!(
        "  Category: {}",
        listing.category_label(&item.category).unwrap_or(&item.category)
    );
    if let Some(facet) = &item.secondary_facet {
        println!("  Facet: {}", facet);
    }
    if let Some(tab) = &item.tab {
        println!("  Type: {}", tab);
    }
    if item.featured {
        println!("  Featured: yes");
    }
    println!("{}", "=".repeat(64));

    print_details(&item.details);

    Ok(())
}

fn print_details(details: &ItemDetails) {
    match details {
        ItemDetails::Article {
            author,
            publish_date,
            read_time,
            tags,
        } => {
            println!("By {} on {} ({})", author, format_date(publish_date), read_time);
            if !tags.is_empty() {
                println!("Tags: {}", tags.join(", "));
            }
        }
        ItemDetails::Book {
            author,
            description,
            purchase_link,
            price,
            ..
        } => {
            println!("By {}", author);
            println!("{}", description);
            if let Some(price) = price {
                println!("Price: {}", format_price(*price));
            }
            if let Some(link) = purchase_link {
                println!("Buy: {}", link);
            }
        }
        ItemDetails::Course {
            instructor,
            description,
            price,
            duration,
            lessons,
            students,
            rating,
            reviews,
            highlights,
        } => {
            println!("Instructor: {}", instructor);
            println!("{}", description);
            println!(
                "{} | {} lessons | {} students | {:.1} ({} reviews) | {}",
                duration,
                lessons,
                format_count(u64::from(*students)),
                rating,
                reviews,
                format_price(f64::from(*price))
            );
            for highlight in highlights {
                println!("  - {}", highlight);
            }
        }
        ItemDetails::Event {
            description,
            location,
            start_time,
            end_time,
            price,
            max_attendees,
            ..
        } => {
            println!("{}", description);
            println!("Where: {}", location);
            println!("Starts: {}", format_datetime(start_time));
            println!("Ends:   {}", format_datetime(end_time));
            println!("Price: {}", format_price(*price));
            if let Some(max) = max_attendees {
                println!("Capacity: {}", max);
            }
        }
        ItemDetails::Media {
            description,
            duration_minutes,
            publish_date,
            url,
            views,
            downloads,
            ..
        } => {
            println!("{}", description);
            println!(
                "{} | published {}",
                format_duration(*duration_minutes),
                format_date(publish_date)
            );
            if let Some(views) = views {
                println!("{} views", format_count(*views));
            }
            if let Some(downloads) = downloads {
                println!("{} downloads", format_count(*downloads));
            }
            println!("{}", url);
        }
        ItemDetails::Meditation {
            description,
            duration_minutes,
            price,
            instructor,
            audio_url,
            video_url,
            ..
        } => {
            println!("Guided by {}", instructor);
            println!("{}", description);
            println!(
                "{} | {}",
                format_duration(*duration_minutes),
                format_price(*price)
            );
            if let Some(url) = audio_url.as_ref().or(video_url.as_ref()) {
                println!("{}", url);
            }
        }
    }
}

/// Rotate the first articles as home page highlights
async fn run_carousel(ticks: usize, interval_secs: Option<u64>) -> Result<()> {
    let listing = load_listing(ListingKind::Articles).await?;
    let slides: Vec<&ContentItem> = listing.items().iter().take(HIGHLIGHT_SLIDES).collect();

    if slides.is_empty() {
        println!("No articles to show.");
        return Ok(());
    }

    let interval = match interval_secs {
        Some(secs) => Duration::from_secs(secs),
        None => config::presentation()?.carousel_interval,
    };

    let carousel = AutoAdvance::start(slides.len(), interval);
    let mut index = carousel.subscribe();

    let show = |i: usize| {
        if let Some(slide) = slides.get(i) {
            println!("[{}/{}] {}", i + 1, slides.len(), slide.title);
        }
    };

    show(carousel.current());
    for _ in 0..ticks {
        index
            .changed()
            .await
            .context("Carousel stopped unexpectedly")?;
        show(*index.borrow_and_update());
    }

    carousel.stop().await
}

/// Send a contact message through the log outbox
async fn send_contact(
    name: String,
    email: String,
    subject: String,
    message: String,
    category: Option<String>,
) -> Result<()> {
    let category = category
        .map(|c| c.parse::<InquiryCategory>())
        .transpose()?;

    let mut form = ContactForm {
        name,
        email,
        subject,
        category,
        message,
    };

    report(submit_contact(&mut form, &LogOutbox::new()).await)
}

/// Enroll a user in a meditation session
async fn enroll(session_id: &str, user: Option<&str>) -> Result<()> {
    let listing = load_listing(ListingKind::Meditation).await?;
    let session_id: ContentId = session_id.parse().unwrap_or_else(|never| match never {});

    let session = listing
        .find(&session_id)
        .ok_or_else(|| anyhow::anyhow!("Meditation session not found: {}", session_id))?;
    eprintln!("Session: {}", session.title);

    report(submit_enrollment(user, session_id, &LogOutbox::new()).await)
}

/// Print a notice, turning failures into an error exit
fn report(notice: Notice) -> Result<()> {
    if notice.is_failure() {
        anyhow::bail!("{}", notice);
    }
    println!("{}", notice);
    Ok(())
}

/// Show the resolved configuration (for debugging)
async fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("{}", "=".repeat(64));
    println!("  Vedic Configuration");
    println!("{}", "=".repeat(64));
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Paths:");
    println!("  Home:    {}", cfg.home.display());
    println!("  Content: {}", cfg.content_dir.display());
    println!();
    println!("Listing sources:");
    for kind in ListingKind::ALL {
        let items_file = cfg.listing_file(kind);
        let source = if items_file.exists() {
            items_file.display().to_string()
        } else {
            match cfg.rows_file(kind).filter(|p| p.exists()) {
                Some(rows) => rows.display().to_string(),
                None => "(builtin)".to_string(),
            }
        };
        println!("  {:<12} {}", kind.to_string(), source);
    }
    println!();
    println!("Presentation:");
    println!(
        "  Carousel interval: {}s",
        cfg.presentation.carousel_interval.as_secs()
    );
    println!("  Reveal threshold:  {}", cfg.presentation.reveal_threshold);
    println!(
        "  Quick amounts:     {}",
        QUICK_AMOUNTS
            .iter()
            .map(|a| format!("${}", a))
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_defaults() {
        let cli = Cli::try_parse_from(["vedic", "list", "articles"]).unwrap();
        match cli.command {
            Commands::List {
                listing,
                search,
                category,
                limit,
                ..
            } => {
                assert_eq!(ListingKind::from(listing), ListingKind::Articles);
                assert_eq!(search, "");
                assert_eq!(category, "all");
                assert_eq!(limit, 20);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::try_parse_from([
            "vedic", "list", "courses", "--facet", "advanced", "-c", "meditation",
        ])
        .unwrap();
        match cli.command {
            Commands::List {
                listing,
                category,
                facet,
                ..
            } => {
                assert_eq!(ListingKind::from(listing), ListingKind::Courses);
                assert_eq!(category, "meditation");
                assert_eq!(facet, "advanced");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_listing_rejected() {
        assert!(Cli::try_parse_from(["vedic", "list", "podcasts"]).is_err());
    }

    #[test]
    fn test_report() {
        assert!(report(Notice::success("Thank You!", "Recorded")).is_ok());
        assert!(report(Notice::failure("Error", "Try again")).is_err());
    }
}
