//! Display formatting for dates and counters

use chrono::{DateTime, Utc};

/// `January 15, 2024`
pub fn long_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// `1/15/2024`
pub fn short_date(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

pub fn year(at: &DateTime<Utc>) -> String {
    at.format("%Y").to_string()
}

pub fn read_time(minutes: usize) -> String {
    format!("{} min read", minutes)
}

/// First letter of a title, for the placeholder thumbnails
pub fn initial(title: &str) -> String {
    title.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()
}

/// First `shown` tags plus how many were left out
pub fn split_tags(tags: &[String], shown: usize) -> (&[String], Option<usize>) {
    if tags.len() > shown {
        (&tags[..shown], Some(tags.len() - shown))
    } else {
        (tags, None)
    }
}
