// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

use crate::handlers::pages;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and is
/// rendered as a localized HTML error page
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Places API error: {0}")]
    PlacesApi(String),

    #[error("WordPress API error: {0}")]
    WordPressApi(String),

    #[error("Places API rate limit exceeded")]
    RateLimitExceeded,

    #[error("Listing is empty after filtering; lower the review threshold or raise max results")]
    EmptyListing,
}

/// Convert AppError to an HTTP response
/// DOCUMENTATION: Upstream API failures surface as 502 with the upstream
/// status and body in the message; everything else is a user input error
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/html; charset=utf-8")
            .body(pages::error_page(self))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::PlacesApi(_) => StatusCode::BAD_GATEWAY,
            AppError::WordPressApi(_) => StatusCode::BAD_GATEWAY,
            AppError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            AppError::EmptyListing => StatusCode::BAD_REQUEST,
        }
    }
}
