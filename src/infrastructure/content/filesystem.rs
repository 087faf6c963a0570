use super::{frontmatter::record_from_source, map_io};
use crate::domain::{
    article::{ArticleQuery, ArticleRecord, ContentQueryService},
    errors::DomainResult,
};
use async_trait::async_trait;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Content source reading `{root}/{collection}/*` from disk on every query.
#[derive(Debug, Clone)]
pub struct MarkdownContentStore {
    root: PathBuf,
}

impl MarkdownContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn read_collection(
        &self,
        dir: &Path,
        query: &ArticleQuery,
    ) -> DomainResult<Vec<(PathBuf, ArticleRecord)>> {
        let mut entries = match fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!(dir = %dir.display(), "content collection does not exist");
                return Ok(Vec::new());
            }
            Err(err) => return Err(map_io(dir, err)),
        };

        let mut records = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|err| map_io(dir, err))? {
            let path = entry.path();
            let file_type = entry.file_type().await.map_err(|err| map_io(&path, err))?;
            if !file_type.is_file() {
                continue;
            }

            let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
                continue;
            };
            if !query.accepts_extension(extension) {
                tracing::trace!(path = %path.display(), "skipping non-matching file");
                continue;
            }

            let bytes = fs::read(&path).await.map_err(|err| map_io(&path, err))?;
            let Ok(source) = String::from_utf8(bytes) else {
                tracing::warn!(path = %path.display(), "skipping source that is not valid UTF-8");
                continue;
            };
            let record = record_from_source(extension, &source);
            records.push((path, record));
        }

        Ok(records)
    }
}

#[async_trait]
impl ContentQueryService for MarkdownContentStore {
    async fn find(&self, query: &ArticleQuery) -> DomainResult<Vec<ArticleRecord>> {
        let dir = self.root.join(&query.collection);
        let mut records = self.read_collection(&dir, query).await?;

        // read_dir order is platform dependent; fix it before the stable sort.
        records.sort_by(|(a, _), (b, _)| a.cmp(b));
        let records = records.into_iter().map(|(_, record)| record).collect();
        Ok(query.apply(records))
    }
}
