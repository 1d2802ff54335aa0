//! Credentials attached to outgoing backend requests.

use secrecy::{ExposeSecret, SecretString};

/// Who a backend request is made on behalf of.
///
/// Created per request from the shopper's session and handed to every
/// [`BackendClient`](super::BackendClient) call that needs it; the client
/// keeps no token of its own.
#[derive(Clone, Default)]
pub struct BackendSession {
    token: Option<SecretString>,
}

impl BackendSession {
    /// Unauthenticated requests.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { token: None }
    }

    /// Requests carrying `Authorization: Bearer <token>`.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(SecretString::from(token.into())),
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Attach the bearer header, if any.
    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }
}

impl std::fmt::Debug for BackendSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendSession")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
