// tests/support/helpers.rs
use super::mocks;
use article_feeds::application::services::ApplicationServices;
use article_feeds::config::{SiteConfig, SitemapOptions};
use article_feeds::domain::article::ContentQueryService;
use article_feeds::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use quick_xml::{Reader, events::Event};
use std::sync::Arc;

pub const BASE_URL: &str = "https://example.com";

pub fn site() -> SiteConfig {
    SiteConfig::new(BASE_URL, "Example Blog", "Notes on Rust and everything else")
        .expect("valid site config")
}

pub fn build_services(
    content: Arc<dyn ContentQueryService>,
    options: SitemapOptions,
) -> ApplicationServices {
    ApplicationServices::new(content, Arc::new(mocks::FixedClock), site(), options)
}

pub fn make_test_router(content: Arc<dyn ContentQueryService>) -> axum::Router {
    make_test_router_with_options(content, SitemapOptions::default())
}

pub fn make_test_router_with_options(
    content: Arc<dyn ContentQueryService>,
    options: SitemapOptions,
) -> axum::Router {
    let state = HttpState {
        services: Arc::new(build_services(content, options)),
    };
    build_router(state)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Status, content type and body text of a response.
pub async fn read_response(resp: Response) -> (StatusCode, String, String) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let content_type = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    (
        status,
        content_type,
        String::from_utf8(body_bytes.to_vec()).expect("utf-8 body"),
    )
}

/// A `<url>` element as seen by an XML parser: child element names in
/// document order plus their text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedUrl {
    pub children: Vec<(String, String)>,
}

impl ParsedUrl {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, text)| text.as_str())
    }

    pub fn names(&self) -> Vec<&str> {
        self.children.iter().map(|(name, _)| name.as_str()).collect()
    }
}

/// Parse a sitemap document into its `<url>` entries, panicking on any
/// malformed XML.
pub fn parse_sitemap(xml: &str) -> Vec<ParsedUrl> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut urls = Vec::new();
    let mut current: Option<ParsedUrl> = None;
    let mut child: Option<String> = None;
    let mut saw_urlset = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                match name.as_str() {
                    "urlset" => saw_urlset = true,
                    "url" => current = Some(ParsedUrl { children: vec![] }),
                    _ => {
                        if let Some(url) = current.as_mut() {
                            url.children.push((name.clone(), String::new()));
                        }
                        child = Some(name);
                    }
                }
            }
            Ok(Event::Text(text)) => {
                if let (Some(url), Some(_)) = (current.as_mut(), child.as_ref()) {
                    if let Some((_, value)) = url.children.last_mut() {
                        value.push_str(&String::from_utf8_lossy(&text));
                    }
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"url" => urls.extend(current.take()),
                _ => child = None,
            },
            Ok(Event::Eof) => break,
            Err(err) => panic!("sitemap is not well-formed XML: {err}"),
            _ => {}
        }
    }

    assert!(saw_urlset, "sitemap has no <urlset> root");
    urls
}
