//! Admin authentication extractor.
//!
//! The backend issues a bearer token at the end of its Google OAuth2 flow.
//! The token lives in the session and is turned into a [`BackendSession`]
//! for every admin request.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_sessions::Session;

use super::session::keys;
use crate::backend::BackendSession;
use crate::state::AppState;

/// Extractor that requires a logged-in administrator.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequireToken(session): RequireToken) -> Result<Json<Brand>> {
///     let brand = state.backend().create_brand(&session, &input).await?;
///     Ok(Json(brand))
/// }
/// ```
pub struct RequireToken(pub BackendSession);

/// Returned when no token is in the session.
#[derive(Debug)]
pub struct AuthRejection {
    login_url: String,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Login required",
                "loginUrl": self.login_url,
            })),
        )
            .into_response()
    }
}

impl FromRequestParts<AppState> for RequireToken {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let rejection = || AuthRejection {
            login_url: state.backend().login_url(),
        };

        // Set by SessionManagerLayer
        let session = parts.extensions.get::<Session>().ok_or_else(rejection)?;

        let token: String = session
            .get(keys::BACKEND_TOKEN)
            .await
            .ok()
            .flatten()
            .ok_or_else(rejection)?;

        Ok(Self(BackendSession::bearer(token)))
    }
}

/// Store the backend token in the session.
///
/// Cycles the session id first so a pre-login cookie cannot be reused.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_backend_token(
    session: &Session,
    token: &str,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(keys::BACKEND_TOKEN, token).await
}

/// Remove the backend token from the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_backend_token(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<String>(keys::BACKEND_TOKEN).await?;
    Ok(())
}
