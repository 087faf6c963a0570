use crate::domain::article::{ChangeFrequency, Priority};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sitemap {
    pub urls: Vec<UrlEntry>,
    pub diagnostics: Vec<SitemapDiagnostic>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub loc: String,
    /// ISO-8601 instant.
    pub lastmod: Option<String>,
    pub priority: Option<Priority>,
    pub changefreq: Option<ChangeFrequency>,
}

impl UrlEntry {
    #[must_use]
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            lastmod: None,
            priority: None,
            changefreq: None,
        }
    }
}

/// Problems noticed while assembling a sitemap that did not abort it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapDiagnostic {
    MissingSlug { title: Option<String> },
    NoArticles,
}
