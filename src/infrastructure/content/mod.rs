mod filesystem;
mod frontmatter;

pub use filesystem::MarkdownContentStore;

use crate::domain::errors::DomainError;
use std::{io, path::Path};

pub(crate) fn map_io(path: &Path, err: io::Error) -> DomainError {
    DomainError::Persistence(format!("failed to read {}: {err}", path.display()))
}
