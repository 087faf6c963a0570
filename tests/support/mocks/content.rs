// tests/support/mocks/content.rs
use article_feeds::domain::{
    article::{ArticleQuery, ArticleRecord, ArticleSlug, ContentQueryService},
    errors::{DomainError, DomainResult},
};
use async_trait::async_trait;
use std::sync::Mutex;

/* -------------------------------- InMemoryContent -------------------------------- */

/// 記録をメモリ上に保持するコンテンツサービス。クエリはそのまま適用される。
#[derive(Default)]
pub struct InMemoryContent {
    records: Vec<ArticleRecord>,
    queries: Mutex<Vec<ArticleQuery>>,
}

impl InMemoryContent {
    pub fn new(records: Vec<ArticleRecord>) -> Self {
        Self {
            records,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Queries received so far, in order.
    pub fn queries(&self) -> Vec<ArticleQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentQueryService for InMemoryContent {
    async fn find(&self, query: &ArticleQuery) -> DomainResult<Vec<ArticleRecord>> {
        self.queries.lock().unwrap().push(query.clone());
        let in_collection = if query.collection == "articles" {
            self.records.clone()
        } else {
            Vec::new()
        };
        Ok(query.apply(in_collection))
    }
}

/* -------------------------------- FailingContent -------------------------------- */

/// 常に失敗するコンテンツサービス
pub struct FailingContent;

#[async_trait]
impl ContentQueryService for FailingContent {
    async fn find(&self, _query: &ArticleQuery) -> DomainResult<Vec<ArticleRecord>> {
        Err(DomainError::Persistence("content service unreachable".into()))
    }
}

/* -------------------------------- builders -------------------------------- */

/// Markdown article with a slug, title and date.
pub fn article(slug: &str, title: &str, date: &str) -> ArticleRecord {
    ArticleRecord::markdown()
        .with_slug(ArticleSlug::new(slug).expect("valid slug"))
        .with_title(title)
        .with_date(date)
}
