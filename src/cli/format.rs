//! Terminal rendering helpers for listing output.

use chrono::{DateTime, NaiveDate, Utc};

/// "1h 5m" or "45m"
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// "12.5k" above a thousand, plain number below
pub fn format_count(count: u64) -> String {
    if count >= 1000 {
        format!("{:.1}k", count as f64 / 1000.0)
    } else {
        count.to_string()
    }
}

/// "March 15, 2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Friday, November 20, 2026 at 18:30 UTC"
pub fn format_datetime(time: &DateTime<Utc>) -> String {
    time.format("%A, %B %-d, %Y at %H:%M UTC").to_string()
}

/// "Free" for zero, otherwise "$12.99"
pub fn format_price(price: f64) -> String {
    if price <= 0.0 {
        "Free".to_string()
    } else if price.fract() == 0.0 {
        format!("${:.0}", price)
    } else {
        format!("${:.2}", price)
    }
}

/// Cut a string to `max` characters, ending in "..." when shortened
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(65), "1h 5m");
        assert_eq!(format_duration(120), "2h 0m");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12_500), "12.5k");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "Free");
        assert_eq!(format_price(25.0), "$25");
        assert_eq!(format_price(12.5), "$12.50");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(&date), "March 5, 2024");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer title", 10), "a much ...");
    }
}
