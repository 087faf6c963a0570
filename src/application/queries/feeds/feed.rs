use super::common::{fetch_articles, xml_error};
use crate::{
    application::{
        dto::feed::{FEED_LANGUAGE, FEED_TTL_MINUTES, FeedChannel, FeedItem},
        error::ApplicationResult,
        ports::time::Clock,
    },
    config::SiteConfig,
    domain::article::{ArticleRecord, ContentQueryService},
};
use rss::{
    CategoryBuilder, ChannelBuilder, GuidBuilder, Item, ItemBuilder,
    extension::atom::{AtomExtensionBuilder, Link},
    validation::Validate,
};
use std::sync::Arc;

const INDENT_WIDTH: usize = 2;

/// Builds the RSS 2.0 feed over every markdown article, newest first.
pub struct FeedBuilder {
    content: Arc<dyn ContentQueryService>,
    clock: Arc<dyn Clock>,
    site: SiteConfig,
}

impl FeedBuilder {
    #[must_use]
    pub fn new(
        content: Arc<dyn ContentQueryService>,
        clock: Arc<dyn Clock>,
        site: SiteConfig,
    ) -> Self {
        Self {
            content,
            clock,
            site,
        }
    }

    pub async fn build(&self) -> ApplicationResult<FeedChannel> {
        let articles = fetch_articles(self.content.as_ref()).await?;
        let items: Vec<FeedItem> = articles
            .iter()
            .filter_map(|article| self.item_for(article))
            .collect();

        Ok(FeedChannel {
            title: self.site.title().to_string(),
            description: self.site.description().to_string(),
            site_url: self.site.base_url().to_string(),
            feed_url: self.site.feed_url(),
            language: FEED_LANGUAGE.to_string(),
            ttl: FEED_TTL_MINUTES,
            last_build_date: self.clock.now(),
            items,
        })
    }

    /// Query, assemble and serialize in one step.
    pub async fn render(&self) -> ApplicationResult<String> {
        let channel = self.build().await?;
        let xml = render_rss(&channel)?;
        tracing::info!(items = channel.items.len(), "generated RSS feed");
        Ok(xml)
    }

    fn item_for(&self, article: &ArticleRecord) -> Option<FeedItem> {
        let Some(slug) = article.slug.as_ref() else {
            tracing::warn!(title = ?article.title, "skipping feed item without slug");
            return None;
        };

        if article.has_unparseable_date() {
            tracing::warn!(%slug, date = ?article.date, "ignoring unparseable article date");
        }

        Some(FeedItem {
            title: article.title.clone(),
            url: self.site.article_url(slug),
            description: article.description.clone(),
            author: article.author.clone(),
            published_at: article.published_at(),
            categories: article.tags.clone(),
        })
    }
}

/// Serialize a channel as indented RSS 2.0.
pub fn render_rss(channel: &FeedChannel) -> ApplicationResult<String> {
    let items: Vec<Item> = channel.items.iter().map(to_rss_item).collect();

    let mut self_link = Link::default();
    self_link.set_href(channel.feed_url.clone());
    self_link.set_rel("self");
    self_link.set_mime_type(Some("application/rss+xml".to_string()));
    let atom = AtomExtensionBuilder::default()
        .links(vec![self_link])
        .build();

    let rss_channel = ChannelBuilder::default()
        .title(channel.title.clone())
        .link(channel.site_url.clone())
        .description(channel.description.clone())
        .language(Some(channel.language.clone()))
        .ttl(Some(channel.ttl.to_string()))
        .last_build_date(Some(channel.last_build_date.to_rfc2822()))
        .atom_ext(Some(atom))
        .items(items)
        .build();

    rss_channel
        .validate()
        .map_err(|err| xml_error(format!("RSS validation failed: {err}")))?;

    let bytes = rss_channel
        .pretty_write_to(Vec::new(), b' ', INDENT_WIDTH)
        .map_err(xml_error)?;
    String::from_utf8(bytes).map_err(xml_error)
}

fn to_rss_item(item: &FeedItem) -> Item {
    let guid = GuidBuilder::default()
        .value(item.url.clone())
        .permalink(true)
        .build();
    let categories = item
        .categories
        .iter()
        .map(|name| CategoryBuilder::default().name(name.clone()).build())
        .collect::<Vec<_>>();

    ItemBuilder::default()
        .title(item.title.clone())
        .link(Some(item.url.clone()))
        .description(item.description.clone())
        .author(item.author.clone())
        .pub_date(item.published_at.map(|date| date.to_rfc2822()))
        .guid(Some(guid))
        .categories(categories)
        .build()
}
