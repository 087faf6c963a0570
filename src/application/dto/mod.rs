pub mod feed;
pub mod sitemap;

pub use feed::{FeedChannel, FeedItem};
pub use sitemap::{Sitemap, SitemapDiagnostic, UrlEntry};
