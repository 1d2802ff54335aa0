//! Admin login through the backend's Google OAuth2 flow.
//!
//! The backend sends the browser back to `/oauth2/redirect?token=...`; the
//! token is kept in the server-side session and never reaches page scripts.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use remakeup_core::meta::PageMeta;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::{RequireToken, clear_backend_token, set_backend_token};
use crate::state::AppState;

/// Where a successful login lands.
const ADMIN_PATH: &str = "/admin";

#[derive(Debug, Deserialize)]
pub struct RedirectQuery {
    pub token: Option<String>,
}

/// Shown when the login cannot be completed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequired {
    pub meta: PageMeta,
    pub error: &'static str,
    pub login_url: String,
}

/// `GET /auth/login`: send the browser to the backend's Google login.
pub async fn login(State(state): State<AppState>) -> Redirect {
    Redirect::to(&state.backend().login_url())
}

/// `GET /oauth2/redirect?token=...`
pub async fn oauth2_redirect(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RedirectQuery>,
) -> Result<Response> {
    let Some(token) = query
        .token
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
    else {
        tracing::warn!("OAuth2 redirect without a token");
        let body = LoginRequired {
            meta: PageMeta::private("Login"),
            error: "Token não encontrado",
            login_url: state.backend().login_url(),
        };
        return Ok((StatusCode::UNAUTHORIZED, Json(body)).into_response());
    };

    set_backend_token(&session, token).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to store backend token");
        AppError::Internal("session unavailable".to_string())
    })?;
    tracing::info!("Admin logged in");

    Ok(Redirect::to(ADMIN_PATH).into_response())
}

/// `POST /auth/logout`
pub async fn logout(session: Session) -> StatusCode {
    if let Err(e) = clear_backend_token(&session).await {
        tracing::error!("Failed to clear session: {}", e);
    }

    // Also destroy the entire session
    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {}", e);
    }

    StatusCode::NO_CONTENT
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub meta: PageMeta,
    pub authenticated: bool,
}

/// `GET /admin/api/session`: 401 unless logged in.
pub async fn admin_session(RequireToken(session): RequireToken) -> Json<AdminSession> {
    Json(AdminSession {
        meta: PageMeta::private("Painel Administrativo"),
        authenticated: session.is_authenticated(),
    })
}
