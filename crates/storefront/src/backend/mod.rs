//! Client for the ReMakeup store backend REST API.
//!
//! # Architecture
//!
//! - The backend is the source of truth for products, categories and brands
//! - Plain JSON over HTTP via `reqwest`; responses decode straight into core types
//! - Writes need a bearer token, passed explicitly as a [`BackendSession`]
//!
//! # Example
//!
//! ```rust,ignore
//! use remakeup_storefront::backend::{BackendClient, BackendSession};
//!
//! let client = BackendClient::new(&config.backend)?;
//! let products = client.list_products().await?;
//!
//! let session = BackendSession::bearer(token);
//! client.delete_category(&session, CategoryId::new(3)).await?;
//! ```

mod client;
mod session;
pub mod types;

pub use client::BackendClient;
pub use session::BackendSession;
pub use types::{BrandInput, CategoryInput, InputError, LogoUpload, ProductInput};

use thiserror::Error;

/// Errors that can occur when talking to the store backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A path could not be joined onto the base URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend rejected the session token, or none was sent.
    #[error("Unauthorized")]
    Unauthorized,

    /// The write clashes with existing data (e.g. duplicate name).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other non-success status.
    #[error("Backend returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}
