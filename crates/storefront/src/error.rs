//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use std::sync::Arc;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use remakeup_core::carousel::CarouselError;
use remakeup_core::sitemap::SitemapError;
use serde_json::json;
use thiserror::Error;

use crate::backend::{BackendError, InputError};

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store backend call failed.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Catalog snapshot could not be loaded.
    #[error("Catalog unavailable: {0}")]
    Catalog(#[from] Arc<BackendError>),

    /// Admin payload failed validation.
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    /// Carousel navigation to a slide that does not exist.
    #[error(transparent)]
    Carousel(#[from] CarouselError),

    /// Sitemap document could not be written.
    #[error("Sitemap error: {0}")]
    Sitemap(#[from] SitemapError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Backend(err) => backend_status(err),
            Self::Catalog(_) => StatusCode::BAD_GATEWAY,
            Self::Input(_) | Self::Carousel(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Sitemap(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Upstream and internal details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            Self::Backend(BackendError::NotFound(resource)) => format!("Not found: {resource}"),
            Self::Backend(BackendError::Unauthorized) => "Login required".to_string(),
            Self::Backend(BackendError::Conflict(_)) => {
                "A record with this name already exists".to_string()
            }
            Self::Backend(_) | Self::Catalog(_) => "Store backend unavailable".to_string(),
            Self::Sitemap(_) | Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

const fn backend_status(err: &BackendError) -> StatusCode {
    match err {
        BackendError::NotFound(_) => StatusCode::NOT_FOUND,
        BackendError::Unauthorized => StatusCode::UNAUTHORIZED,
        BackendError::Conflict(_) => StatusCode::CONFLICT,
        BackendError::Http(_)
        | BackendError::Url(_)
        | BackendError::Parse(_)
        | BackendError::Status { .. } => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
