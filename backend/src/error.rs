//! Error types
//!
//! - `ConfigError`: startup configuration failures
//! - `ApiError`: HTTP layer failures, rendered as JSON

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PORT value '{value}': {reason}")]
    InvalidPort { value: String, reason: String },

    #[error("HOST must not be empty")]
    EmptyHost,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
