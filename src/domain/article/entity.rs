// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleSlug, ChangeFrequency, MARKDOWN_EXTENSION, Priority, parse_published_date,
};
use chrono::{DateTime, Utc};

/// A document returned by the content source. Every field except the
/// extension may be missing; consumers decide how strict to be.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleRecord {
    pub slug: Option<ArticleSlug>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Raw frontmatter value. See [`ArticleRecord::published_at`].
    pub date: Option<String>,
    pub priority: Option<Priority>,
    pub changefreq: Option<ChangeFrequency>,
    pub tags: Vec<String>,
    pub author: Option<String>,
    /// Drafts stay out of every published listing.
    pub draft: bool,
    pub extension: String,
}

impl ArticleRecord {
    #[must_use]
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn markdown() -> Self {
        Self::new(MARKDOWN_EXTENSION)
    }

    /// `None` when the date is absent or unparseable.
    #[must_use]
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.date.as_deref().and_then(parse_published_date)
    }

    pub fn has_unparseable_date(&self) -> bool {
        self.date.is_some() && self.published_at().is_none()
    }

    pub fn is_markdown(&self) -> bool {
        self.extension == MARKDOWN_EXTENSION
    }

    pub const fn is_published(&self) -> bool {
        !self.draft
    }

    #[must_use]
    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn with_changefreq(mut self, changefreq: ChangeFrequency) -> Self {
        self.changefreq = Some(changefreq);
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn as_draft(mut self) -> Self {
        self.draft = true;
        self
    }
}
