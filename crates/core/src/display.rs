//! Presentation-only transformations
//!
//! Nothing here feeds back into filtering or sorting; those always work on
//! the post exactly as fetched.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::Serialize;

use crate::post::{Category, Post};

/// A post prepared for rendering
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub author: String,
    pub avatar: String,
    pub categories: Vec<String>,
    pub summary: String,
    pub published: String,
}

/// Collapse categories sharing a name to their first occurrence
pub fn dedupe_categories(categories: &[Category]) -> Vec<&Category> {
    let mut seen: Vec<&str> = Vec::new();
    let mut unique = Vec::new();
    for category in categories {
        if !seen.contains(&category.name.as_str()) {
            seen.push(category.name.as_str());
            unique.push(category);
        }
    }
    unique
}

/// Render a publish date as a calendar date in `tz`
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` timestamps
/// (read as UTC) and bare dates. Anything else is returned unchanged.
pub fn format_publish_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(tz).date_naive().to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc().with_timezone(tz).date_naive().to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.to_string();
    }
    raw.to_string()
}

/// Render a publish date in the local timezone
pub fn format_publish_date(raw: &str) -> String {
    format_publish_date_in(raw, &Local)
}

/// Build the card shown for `post`
pub fn to_card(post: &Post) -> PostCard {
    PostCard {
        id: post.id.clone(),
        title: post.title.clone(),
        author: post.author.name.clone(),
        avatar: post.author.avatar.clone(),
        categories: dedupe_categories(&post.categories)
            .into_iter()
            .map(|c| c.name.clone())
            .collect(),
        summary: post.summary.clone(),
        published: format_publish_date(&post.publish_date),
    }
}
