pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::ArticleRecord;
pub use repository::{ARTICLES_COLLECTION, ArticleQuery, ContentQueryService, SortDirection};
pub use value_objects::{
    ArticleSlug, ChangeFrequency, MARKDOWN_EXTENSION, Priority, iso_instant, parse_published_date,
};
