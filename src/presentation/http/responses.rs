use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

pub const RSS_CONTENT_TYPE: &str = "text/xml";
pub const SITEMAP_CONTENT_TYPE: &str = "application/xml";

/// A fully rendered XML body. Only constructed once serialization has
/// succeeded, so a 200 never carries a partial document.
#[derive(Debug)]
pub struct XmlDocument {
    content_type: &'static str,
    body: String,
}

impl XmlDocument {
    pub fn rss(body: String) -> Self {
        Self {
            content_type: RSS_CONTENT_TYPE,
            body,
        }
    }

    pub fn sitemap(body: String) -> Self {
        Self {
            content_type: SITEMAP_CONTENT_TYPE,
            body,
        }
    }
}

impl IntoResponse for XmlDocument {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, self.content_type)],
            self.body,
        )
            .into_response()
    }
}
