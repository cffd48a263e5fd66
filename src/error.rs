use actix_web::dev::ServiceResponse;
use actix_web::http::{header, StatusCode};
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::StoreError;

const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Body of every failed response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    #[schema(example = "Database Error")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();

        if message.trim().is_empty() {
            return Self {
                error: String::from(INTERNAL_SERVER_ERROR),
            };
        }

        Self { error: message }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Query,
    NotFound,
    Unexpected,
}

/// Every failure a handler can return. Actix renders it through `ResponseError`, so the
/// handlers only need `?`.
#[derive(thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Query {
        message: &'static str,
        #[source]
        source: StoreError,
    },
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn query(message: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        move |source| ApiError::Query { message, source }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        ApiError::Unexpected(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Query { .. } => ErrorKind::Query,
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Query => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::BAD_REQUEST,
            ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

/// Writes the error followed by every source in the chain, so the logs keep the root cause
/// that the response body hides.
pub fn error_chain_fmt(
    error: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}", error)?;

    let mut current = error.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }

    Ok(())
}

/// Rewrites any 500 produced outside of our handlers (eg: a panic in a middleware or an
/// extractor failure) into the same JSON envelope.
pub fn render_server_error<B>(
    response: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (request, response) = response.into_parts();
    let message = response
        .error()
        .map(|err| err.to_string())
        .unwrap_or_default();

    tracing::error!("Unhandled error: {}", message);

    let response = ApiError::unexpected(message).error_response();

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(request, response).map_into_right_body(),
    ))
}

/// Wraps bodyless 404s (eg: an unknown Swagger UI asset) in the JSON envelope. Responses that
/// are already JSON are left untouched.
pub fn render_not_found<B>(
    response: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value.starts_with("application/json"));

    if is_json {
        return Ok(ErrorHandlerResponse::Response(response.map_into_left_body()));
    }

    let (request, _) = response.into_parts();
    let response = HttpResponse::NotFound().json(ErrorResponse::new("Not Found"));

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(request, response).map_into_right_body(),
    ))
}

/// Fallback for requests that no route matched.
pub async fn handle_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Not Found"))
}
