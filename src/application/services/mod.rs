// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::time::Clock,
        queries::feeds::{FeedBuilder, SitemapBuilder},
    },
    config::{SiteConfig, SitemapOptions},
    domain::article::ContentQueryService,
};

pub struct ApplicationServices {
    pub feed: Arc<FeedBuilder>,
    pub sitemap: Arc<SitemapBuilder>,
    site: SiteConfig,
}

impl ApplicationServices {
    pub fn new(
        content: Arc<dyn ContentQueryService>,
        clock: Arc<dyn Clock>,
        site: SiteConfig,
        sitemap_options: SitemapOptions,
    ) -> Self {
        let feed = Arc::new(FeedBuilder::new(
            Arc::clone(&content),
            Arc::clone(&clock),
            site.clone(),
        ));
        let sitemap = Arc::new(SitemapBuilder::new(
            Arc::clone(&content),
            site.clone(),
            sitemap_options,
        ));

        Self {
            feed,
            sitemap,
            site,
        }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }
}
