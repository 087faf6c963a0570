//! Sitemap generation.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url><loc>https://example.com/</loc></url>
//!   <url>
//!     <loc>https://example.com/articles/hello</loc>
//!     <lastmod>2024-01-15T00:00:00.000Z</lastmod>
//!   </url>
//! </urlset>
//! ```
//!
//! The rendered document is not indented.

use super::common::{fetch_articles, xml_error};
use crate::{
    application::{
        dto::sitemap::{Sitemap, SitemapDiagnostic, UrlEntry},
        error::{ApplicationError, ApplicationResult},
    },
    config::{SiteConfig, SitemapOptions},
    domain::article::{ArticleRecord, ContentQueryService, iso_instant},
};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::{io::Write, sync::Arc};

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub struct SitemapBuilder {
    content: Arc<dyn ContentQueryService>,
    site: SiteConfig,
    options: SitemapOptions,
}

impl SitemapBuilder {
    #[must_use]
    pub fn new(
        content: Arc<dyn ContentQueryService>,
        site: SiteConfig,
        options: SitemapOptions,
    ) -> Self {
        Self {
            content,
            site,
            options,
        }
    }

    /// Root entry, then static paths (if enabled), then one entry per
    /// article in query order.
    pub async fn build(&self) -> ApplicationResult<Sitemap> {
        let articles = fetch_articles(self.content.as_ref()).await?;

        let static_count = if self.options.include_static_paths {
            self.options.static_paths.len()
        } else {
            0
        };
        let mut sitemap = Sitemap {
            urls: Vec::with_capacity(1 + static_count + articles.len()),
            diagnostics: Vec::new(),
        };

        sitemap.urls.push(UrlEntry::new(self.site.root_url()));

        if self.options.include_static_paths {
            sitemap.urls.extend(
                self.options
                    .static_paths
                    .iter()
                    .map(|path| UrlEntry::new(self.site.page_url(path))),
            );
        }

        if articles.is_empty() {
            self.record(&mut sitemap, SitemapDiagnostic::NoArticles);
        }

        for article in &articles {
            match self.entry_for(article)? {
                Some(entry) => sitemap.urls.push(entry),
                None => self.record(
                    &mut sitemap,
                    SitemapDiagnostic::MissingSlug {
                        title: article.title.clone(),
                    },
                ),
            }
        }

        Ok(sitemap)
    }

    pub async fn render(&self) -> ApplicationResult<String> {
        let sitemap = self.build().await?;
        let xml = render_sitemap(&sitemap)?;
        if self.options.log_diagnostics {
            tracing::info!(
                entries = sitemap.urls.len(),
                skipped = sitemap.diagnostics.len(),
                "generated sitemap"
            );
        }
        Ok(xml)
    }

    /// `Ok(None)` marks a record skipped for lack of a slug.
    fn entry_for(&self, article: &ArticleRecord) -> ApplicationResult<Option<UrlEntry>> {
        let Some(slug) = article.slug.as_ref() else {
            if self.options.skip_missing_slug {
                return Ok(None);
            }
            return Err(ApplicationError::invalid_record(format!(
                "article is missing a slug (title: {:?})",
                article.title
            )));
        };

        let mut entry = UrlEntry::new(self.site.article_url(slug));
        entry.lastmod = article.published_at().map(|date| iso_instant(&date));
        entry.priority = article.priority;
        entry.changefreq = article.changefreq;
        Ok(Some(entry))
    }

    fn record(&self, sitemap: &mut Sitemap, diagnostic: SitemapDiagnostic) {
        if self.options.log_diagnostics {
            match &diagnostic {
                SitemapDiagnostic::MissingSlug { title } => {
                    tracing::warn!(title = ?title, "article missing slug, skipped in sitemap");
                }
                SitemapDiagnostic::NoArticles => {
                    tracing::warn!("no articles found to include in the sitemap");
                }
            }
        }
        sitemap.diagnostics.push(diagnostic);
    }
}

/// Serialize a sitemap per the sitemaps.org 0.9 schema.
pub fn render_sitemap(sitemap: &Sitemap) -> ApplicationResult<String> {
    let mut writer = Writer::new(Vec::with_capacity(256 + sitemap.urls.len() * 128));

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Start(
            BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)]),
        ))
        .map_err(xml_error)?;

    for entry in &sitemap.urls {
        write_url(&mut writer, entry)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("urlset")))
        .map_err(xml_error)?;

    String::from_utf8(writer.into_inner()).map_err(xml_error)
}

fn write_url<W: Write>(writer: &mut Writer<W>, entry: &UrlEntry) -> ApplicationResult<()> {
    writer
        .write_event(Event::Start(BytesStart::new("url")))
        .map_err(xml_error)?;

    write_text_element(writer, "loc", &entry.loc)?;
    if let Some(lastmod) = &entry.lastmod {
        write_text_element(writer, "lastmod", lastmod)?;
    }
    if let Some(priority) = &entry.priority {
        write_text_element(writer, "priority", &priority.to_string())?;
    }
    if let Some(changefreq) = &entry.changefreq {
        write_text_element(writer, "changefreq", changefreq.as_str())?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("url")))
        .map_err(xml_error)
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> ApplicationResult<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_error)
}
