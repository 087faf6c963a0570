use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Plain-text error response. The message is a fixed, caller-supplied
/// string; the underlying error is only logged.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(context: &'static str, err: ApplicationError) -> Self {
        tracing::error!(error = %err, "{context}");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self, context: &'static str) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self, context: &'static str) -> HttpResult<T> {
        self.map_err(|err| HttpError::from_error(context, err))
    }
}
