//! Frontmatter extraction for markdown sources.
//!
//! Only the flat subset used by article headers is understood: `key: value`
//! lines, optionally quoted values, inline `[a, b]` lists and `- item` block
//! lists.

use crate::domain::article::{ArticleRecord, ArticleSlug, ChangeFrequency, Priority};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FrontmatterValue {
    Scalar(String),
    List(Vec<String>),
}

pub(crate) type Frontmatter = BTreeMap<String, FrontmatterValue>;

/// Return the text between the opening and closing `---` fences.
pub(crate) fn split_frontmatter(source: &str) -> Option<&str> {
    let source = source.trim_start_matches('\u{feff}');
    let rest = source.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

pub(crate) fn parse_frontmatter(block: &str) -> Frontmatter {
    let mut fields = Frontmatter::new();
    let mut open_list: Option<String> = None;

    for line in block.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(item) = trimmed.strip_prefix("- ") {
            if let Some(key) = open_list.as_ref() {
                if let Some(FrontmatterValue::List(items)) = fields.get_mut(key) {
                    items.push(unquote(item).to_string());
                }
            }
            continue;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            open_list = None;
            continue;
        };
        let key = key.trim().to_string();
        let value = value.trim();

        if value.is_empty() {
            fields.insert(key.clone(), FrontmatterValue::List(Vec::new()));
            open_list = Some(key);
            continue;
        }

        open_list = None;
        let parsed = match value
            .strip_prefix('[')
            .and_then(|inner| inner.strip_suffix(']'))
        {
            Some(inner) => FrontmatterValue::List(
                inner
                    .split(',')
                    .map(|item| unquote(item.trim()).to_string())
                    .filter(|item| !item.is_empty())
                    .collect(),
            ),
            None => FrontmatterValue::Scalar(unquote(value).to_string()),
        };
        fields.insert(key, parsed);
    }

    fields
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

fn scalar<'a>(fields: &'a Frontmatter, key: &str) -> Option<&'a str> {
    match fields.get(key) {
        Some(FrontmatterValue::Scalar(value)) => {
            let value = value.trim();
            match value {
                "" | "~" | "null" => None,
                other => Some(other),
            }
        }
        _ => None,
    }
}

/// Build a record from a whole source file. Sources without frontmatter
/// produce a record carrying only the extension.
pub(crate) fn record_from_source(extension: &str, source: &str) -> ArticleRecord {
    let mut record = ArticleRecord::new(extension);
    let Some(block) = split_frontmatter(source) else {
        return record;
    };
    let fields = parse_frontmatter(block);

    record.slug = scalar(&fields, "slug").and_then(|s| ArticleSlug::new(s).ok());
    record.title = scalar(&fields, "title").map(str::to_string);
    record.description = scalar(&fields, "description").map(str::to_string);
    record.date = scalar(&fields, "date").map(str::to_string);
    record.author = scalar(&fields, "author").map(str::to_string);
    record.draft = scalar(&fields, "draft").is_some_and(|raw| raw.eq_ignore_ascii_case("true"));

    record.priority = scalar(&fields, "priority").and_then(|raw| match raw.parse::<Priority>() {
        Ok(priority) => Some(priority),
        Err(err) => {
            tracing::warn!(error = %err, slug = ?record.slug, "ignoring sitemap priority");
            None
        }
    });
    record.changefreq =
        scalar(&fields, "changefreq").and_then(|raw| match raw.parse::<ChangeFrequency>() {
            Ok(changefreq) => Some(changefreq),
            Err(err) => {
                tracing::warn!(error = %err, slug = ?record.slug, "ignoring sitemap changefreq");
                None
            }
        });

    record.tags = match fields.get("tags") {
        Some(FrontmatterValue::List(tags)) => tags.clone(),
        Some(FrontmatterValue::Scalar(tag)) if !tag.trim().is_empty() => vec![tag.trim().to_string()],
        _ => Vec::new(),
    };

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "---\n\
title: \"Hello, world\"\n\
slug: hello-world\n\
description: 'A first post'\n\
date: 2024-01-15 10:30:00\n\
priority: 0.8\n\
changefreq: weekly\n\
tags: [rust, \"web\"]\n\
author: Jane Doe\n\
---\n\
# Hello\n\nBody text.\n";

    #[test]
    fn split_requires_both_fences() {
        assert_eq!(split_frontmatter("---\na: b\n---\nbody"), Some("a: b\n"));
        assert_eq!(split_frontmatter("---\r\na: b\r\n---\r\nbody"), Some("a: b\r\n"));
        assert_eq!(split_frontmatter("---\n---\n"), Some(""));
        assert_eq!(split_frontmatter("no frontmatter"), None);
        assert_eq!(split_frontmatter("---\nunterminated: yes\n"), None);
    }

    #[test]
    fn parses_scalars_and_lists() {
        let fields = parse_frontmatter("a: 1\nb: \"two\"\nc: [x, 'y']\nd:\n  - p\n  - q\n# note\n");
        assert_eq!(fields.get("a"), Some(&FrontmatterValue::Scalar("1".into())));
        assert_eq!(fields.get("b"), Some(&FrontmatterValue::Scalar("two".into())));
        assert_eq!(
            fields.get("c"),
            Some(&FrontmatterValue::List(vec!["x".into(), "y".into()]))
        );
        assert_eq!(
            fields.get("d"),
            Some(&FrontmatterValue::List(vec!["p".into(), "q".into()]))
        );
    }

    #[test]
    fn record_from_source_reads_every_field() {
        let record = record_from_source("md", SOURCE);

        assert_eq!(record.slug.as_ref().map(|s| s.as_str()), Some("hello-world"));
        assert_eq!(record.title.as_deref(), Some("Hello, world"));
        assert_eq!(record.description.as_deref(), Some("A first post"));
        assert_eq!(record.date.as_deref(), Some("2024-01-15 10:30:00"));
        assert_eq!(record.priority.map(|p| p.value()), Some(0.8));
        assert_eq!(record.changefreq, Some(ChangeFrequency::Weekly));
        assert_eq!(record.tags, vec!["rust".to_string(), "web".to_string()]);
        assert_eq!(record.author.as_deref(), Some("Jane Doe"));
        assert!(record.is_published());
        assert!(record.is_markdown());
    }

    #[test]
    fn draft_flag_is_read() {
        let draft = record_from_source("md", "---\nslug: secret\ndraft: True\n---\n");
        assert!(draft.draft);
        assert!(!draft.is_published());

        let explicit = record_from_source("md", "---\nslug: open\ndraft: false\n---\n");
        assert!(explicit.is_published());
    }

    #[test]
    fn invalid_hints_are_dropped() {
        let record = record_from_source(
            "md",
            "---\nslug: x\npriority: 3\nchangefreq: sometimes\n---\n",
        );
        assert!(record.priority.is_none());
        assert!(record.changefreq.is_none());
        assert!(record.slug.is_some());
    }

    #[test]
    fn source_without_frontmatter_has_no_fields() {
        let record = record_from_source("md", "# Just a heading\n");
        assert_eq!(record, ArticleRecord::markdown());
    }

    #[test]
    fn blank_slug_is_treated_as_missing() {
        let record = record_from_source("md", "---\nslug: \"\"\ntitle: Orphan\n---\n");
        assert!(record.slug.is_none());
        assert_eq!(record.title.as_deref(), Some("Orphan"));
    }
}
