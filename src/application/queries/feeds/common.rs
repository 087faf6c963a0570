use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{ArticleQuery, ArticleRecord, ContentQueryService},
};
use std::fmt::Display;

/// Fetch the article set shared by the feed and the sitemap.
pub(super) async fn fetch_articles(
    content: &dyn ContentQueryService,
) -> ApplicationResult<Vec<ArticleRecord>> {
    let query = ArticleQuery::published_markdown();
    let records = content.find(&query).await?;
    tracing::debug!(
        collection = %query.collection,
        count = records.len(),
        "fetched articles"
    );
    Ok(records)
}

pub(super) fn xml_error(err: impl Display) -> ApplicationError {
    ApplicationError::serialization(err.to_string())
}
