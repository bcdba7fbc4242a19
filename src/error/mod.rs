//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the conversion
//! logic that turns errors into the uniform JSON error envelope. `AppError`
//! is the top-level error type returned by services and handlers; the
//! `error_envelope` middleware fills in the request path and timestamp that
//! `IntoResponse` cannot know about on its own.

pub mod config;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use thiserror::Error;

use crate::{dto::api::ErrorResponse, error::config::ConfigError};

/// Top-level application error type.
///
/// Domain errors (`NotFound`, `BadRequest`, `Validation`) carry the messages
/// that end up in the error envelope. Infrastructure errors map to a generic
/// 500 with details logged server-side.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM. Always 500; details are logged.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket error while binding or serving. Only occurs at startup, before
    /// any response is produced.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Resource not found. 404 with a single message.
    #[error("{0}")]
    NotFound(String),

    /// Domain-rule violation (duplicate unique key, broken reference,
    /// double-booking, capability mismatch). 400 with a single message.
    #[error("{0}")]
    BadRequest(String),

    /// Request body field validation failure. 400 with one message per
    /// failing field.
    #[error("request validation failed")]
    Validation(Vec<String>),

    /// Unparseable request body. 400 with the leading token of the parser
    /// error.
    #[error("{0}")]
    UnreadableBody(String),
}

/// Status code and messages of a failed request, attached to the response as
/// an extension so the envelope middleware can render the full error body.
#[derive(Clone)]
pub struct ErrorBody {
    pub status: StatusCode,
    pub messages: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, messages) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, vec![msg]),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, vec![msg]),
            Self::Validation(messages) => (StatusCode::BAD_REQUEST, messages),
            Self::UnreadableBody(msg) => (StatusCode::BAD_REQUEST, vec![msg]),
            err => {
                tracing::error!("internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["Internal server error".to_string()],
                )
            }
        };

        let body = ErrorBody {
            status,
            messages: messages.clone(),
        };

        // The middleware rewrites this with the request path filled in; the
        // pathless envelope is the fallback when no middleware is mounted.
        let mut response =
            (status, Json(ErrorResponse::new(status, String::new(), messages))).into_response();
        response.extensions_mut().insert(body);
        response
    }
}

/// Renders the uniform error envelope for failed requests.
///
/// Captures the request path before dispatch and, when the response carries
/// an [`ErrorBody`] extension, replaces the body with the complete envelope
/// (timestamp, status, reason phrase, path, messages).
pub async fn error_envelope(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let Some(body) = response.extensions().get::<ErrorBody>().cloned() else {
        return response;
    };

    (body.status, Json(ErrorResponse::new(body.status, path, body.messages))).into_response()
}

impl ErrorResponse {
    pub fn new(status: StatusCode, path: String, messages: Vec<String>) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or_default().to_string(),
            path,
            messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The envelope timestamp is server-local wall-clock time, not UTC.
    #[test]
    fn envelope_timestamp_is_local_time() {
        let body = ErrorResponse::new(
            StatusCode::NOT_FOUND,
            "/countries/999".to_string(),
            vec!["Country with ID 999 not found".to_string()],
        );

        let drift = (Local::now().naive_local() - body.timestamp).num_seconds().abs();
        assert!(drift <= 5, "timestamp drifted {drift}s from local time");
        assert_eq!(body.status, 404);
        assert_eq!(body.error, "Not Found");
    }
}
