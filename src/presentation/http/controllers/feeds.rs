// src/presentation/http/controllers/feeds.rs
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::responses::XmlDocument;
use crate::presentation::http::state::HttpState;
use axum::Extension;

pub async fn rss_feed(Extension(state): Extension<HttpState>) -> HttpResult<XmlDocument> {
    let xml = state
        .services
        .feed
        .render()
        .await
        .into_http("Error generating RSS feed")?;
    Ok(XmlDocument::rss(xml))
}

pub async fn sitemap(Extension(state): Extension<HttpState>) -> HttpResult<XmlDocument> {
    let xml = state
        .services
        .sitemap
        .render()
        .await
        .into_http("Error generating sitemap")?;
    Ok(XmlDocument::sitemap(xml))
}

pub async fn robots_txt(Extension(state): Extension<HttpState>) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        state.services.site().sitemap_url()
    )
}
