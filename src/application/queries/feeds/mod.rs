mod common;
mod feed;
mod sitemap;

pub use feed::{FeedBuilder, render_rss};
pub use sitemap::{SITEMAP_NS, SitemapBuilder, render_sitemap};
