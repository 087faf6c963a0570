use crate::domain::article::entity::ArticleRecord;
use crate::domain::article::value_objects::MARKDOWN_EXTENSION;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::cmp::Ordering;

pub const ARTICLES_COLLECTION: &str = "articles";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Filter and ordering handed to a [`ContentQueryService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleQuery {
    pub collection: String,
    /// Equality filter on the record extension.
    pub extension: Option<String>,
    pub sort_by_date: Option<SortDirection>,
    pub include_drafts: bool,
}

impl ArticleQuery {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            extension: None,
            sort_by_date: None,
            include_drafts: true,
        }
    }

    /// The article set every feed is derived from: non-draft markdown
    /// articles, newest first.
    #[must_use]
    pub fn published_markdown() -> Self {
        Self::new(ARTICLES_COLLECTION)
            .with_extension(MARKDOWN_EXTENSION)
            .sorted_by_date(SortDirection::Descending)
            .published_only()
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    #[must_use]
    pub const fn sorted_by_date(mut self, direction: SortDirection) -> Self {
        self.sort_by_date = Some(direction);
        self
    }

    #[must_use]
    pub const fn published_only(mut self) -> Self {
        self.include_drafts = false;
        self
    }

    /// Whether a record passes the extension and draft filters.
    pub fn accepts(&self, record: &ArticleRecord) -> bool {
        self.accepts_extension(&record.extension) && (self.include_drafts || record.is_published())
    }

    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extension.as_deref().is_none_or(|wanted| wanted == extension)
    }

    /// Filter and sort records in memory. Undated records sort last in
    /// either direction; ties keep their input order.
    pub fn apply(&self, records: Vec<ArticleRecord>) -> Vec<ArticleRecord> {
        let mut matched: Vec<_> = records
            .into_iter()
            .filter(|record| self.accepts(record))
            .map(|record| (record.published_at(), record))
            .collect();

        if let Some(direction) = self.sort_by_date {
            matched.sort_by(|(a, _), (b, _)| match (a, b) {
                (Some(a), Some(b)) => match direction {
                    SortDirection::Ascending => a.cmp(b),
                    SortDirection::Descending => b.cmp(a),
                },
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }

        matched.into_iter().map(|(_, record)| record).collect()
    }
}

#[async_trait]
pub trait ContentQueryService: Send + Sync {
    async fn find(&self, query: &ArticleQuery) -> DomainResult<Vec<ArticleRecord>>;
}
