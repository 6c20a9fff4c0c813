//! Blog domain types.

use chrono::NaiveDate;
use safal_shared::types::PostSlug;
use serde::{Deserialize, Serialize};

use super::content::ContentBlock;

/// A published article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// URL slug.
    pub slug: PostSlug,
    /// Headline.
    pub title: String,
    /// One-paragraph teaser.
    pub excerpt: String,
    /// Category shown on the card.
    pub category: String,
    /// Author name.
    pub author: String,
    /// Author's role.
    pub author_role: String,
    /// Publication date.
    pub published_on: NaiveDate,
    /// Estimated reading time in minutes.
    pub read_minutes: u32,
    /// Cover image URL.
    pub image: String,
    /// Whether the post is pinned to the featured row.
    pub featured: bool,
    /// Article body.
    pub content: Vec<ContentBlock>,
}

impl BlogPost {
    /// Publication date as shown on the site, e.g. `December 10, 2024`.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.published_on.format("%B %-d, %Y").to_string()
    }

    /// Reading time label, e.g. `8 min read`.
    #[must_use]
    pub fn read_time(&self) -> String {
        format!("{} min read", self.read_minutes)
    }
}
