// src/config.rs
use crate::domain::article::ArticleSlug;
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Site-level metadata shared by the feed builders. Built once at startup and
/// handed to each builder; nothing here reads the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    base_url: String,
    title: String,
    description: String,
}

impl SiteConfig {
    pub fn new(
        base_url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "site URL must start with http:// or https://, got {base_url:?}"
            )));
        }

        Ok(Self {
            base_url,
            title: title.into(),
            description: description.into(),
        })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn root_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    #[must_use]
    pub fn article_url(&self, slug: &ArticleSlug) -> String {
        format!("{}/articles/{}", self.base_url, slug)
    }

    #[must_use]
    pub fn feed_url(&self) -> String {
        format!("{}/rss.xml", self.base_url)
    }

    #[must_use]
    pub fn sitemap_url(&self) -> String {
        format!("{}/sitemap.xml", self.base_url)
    }

    /// Resolve a site path (`/about`) or pass an absolute URL through.
    #[must_use]
    pub fn page_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SitemapOptions {
    pub include_static_paths: bool,
    pub skip_missing_slug: bool,
    pub log_diagnostics: bool,
    pub static_paths: Vec<String>,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            include_static_paths: true,
            skip_missing_slug: true,
            log_diagnostics: true,
            static_paths: default_static_paths(),
        }
    }
}

impl SitemapOptions {
    /// Root plus articles only, failing on records without a slug.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            include_static_paths: false,
            skip_missing_slug: false,
            log_diagnostics: false,
            static_paths: Vec::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    content_dir: PathBuf,
    site: SiteConfig,
    sitemap: SitemapOptions,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_static_paths() -> Vec<String> {
    vec!["/articles".into()]
}

fn parse_flag(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(name) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(ConfigError::Invalid(format!(
                "{name} must be a boolean, got {other:?}"
            ))),
        },
        Err(_) => Ok(default),
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables. Uses defaults for
    /// optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let content_dir = env::var("CONTENT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_content_dir());

        let base_url = env::var("PUBLIC_URL").map_err(|_| ConfigError::Missing("PUBLIC_URL"))?;
        let title = env::var("PUBLIC_TITLE").map_err(|_| ConfigError::Missing("PUBLIC_TITLE"))?;
        let description = env::var("PUBLIC_DESCRIPTION").unwrap_or_default();
        let site = SiteConfig::new(base_url, title, description)?;

        let sitemap = SitemapOptions {
            include_static_paths: parse_flag("SITEMAP_INCLUDE_STATIC", true)?,
            skip_missing_slug: parse_flag("SITEMAP_SKIP_MISSING_SLUG", true)?,
            log_diagnostics: parse_flag("SITEMAP_LOG_DIAGNOSTICS", true)?,
            static_paths: env::var("SITEMAP_STATIC_PATHS")
                .ok()
                .map(|s| parse_list(&s))
                .unwrap_or_else(default_static_paths),
        };

        Ok(Self {
            listen_addr,
            content_dir,
            site,
            sitemap,
        })
    }

    #[must_use]
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    #[must_use]
    pub fn content_dir(&self) -> &PathBuf {
        &self.content_dir
    }

    #[must_use]
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    #[must_use]
    pub fn sitemap(&self) -> &SitemapOptions {
        &self.sitemap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_config_trims_trailing_slash() {
        let site = SiteConfig::new("https://example.com/", "Example", "Notes").unwrap();
        assert_eq!(site.base_url(), "https://example.com");
        assert_eq!(site.root_url(), "https://example.com/");
        assert_eq!(site.feed_url(), "https://example.com/rss.xml");
        assert_eq!(site.sitemap_url(), "https://example.com/sitemap.xml");
        let slug = ArticleSlug::new("hello").unwrap();
        assert_eq!(site.article_url(&slug), "https://example.com/articles/hello");
    }

    #[test]
    fn site_config_rejects_relative_urls() {
        assert!(matches!(
            SiteConfig::new("example.com", "Example", ""),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn page_url_resolves_relative_paths() {
        let site = SiteConfig::new("https://example.com", "Example", "").unwrap();
        assert_eq!(site.page_url("/articles"), "https://example.com/articles");
        assert_eq!(site.page_url("about"), "https://example.com/about");
        assert_eq!(
            site.page_url("https://other.example/x"),
            "https://other.example/x"
        );
    }

    #[test]
    fn list_parsing_drops_blank_entries() {
        assert_eq!(parse_list(" /a , ,/b"), vec!["/a".to_string(), "/b".to_string()]);
    }

    #[test]
    fn default_sitemap_options_are_defensive() {
        let options = SitemapOptions::default();
        assert!(options.include_static_paths);
        assert!(options.skip_missing_slug);
        assert!(options.log_diagnostics);
        assert_eq!(options.static_paths, vec!["/articles".to_string()]);
        assert!(!SitemapOptions::minimal().skip_missing_slug);
    }
}
