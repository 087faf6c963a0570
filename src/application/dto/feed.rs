use chrono::{DateTime, Utc};

pub const FEED_LANGUAGE: &str = "en";
pub const FEED_TTL_MINUTES: u32 = 60;

/// RSS channel assembled for a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedChannel {
    pub title: String,
    pub description: String,
    pub site_url: String,
    pub feed_url: String,
    pub language: String,
    pub ttl: u32,
    pub last_build_date: DateTime<Utc>,
    pub items: Vec<FeedItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: Option<String>,
    pub url: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub categories: Vec<String>,
}
