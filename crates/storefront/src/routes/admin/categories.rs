//! Category management. Duplicate names come back as 409.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use remakeup_core::{Category, CategoryId};
use tracing::instrument;

use crate::backend::CategoryInput;
use crate::error::Result;
use crate::middleware::RequireToken;
use crate::state::AppState;

/// `GET /admin/api/categories`
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RequireToken(_session): RequireToken,
) -> Result<Json<Vec<Category>>> {
    Ok(Json(state.backend().list_categories().await?))
}

/// `POST /admin/api/categories`
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    RequireToken(session): RequireToken,
    Json(input): Json<CategoryInput>,
) -> Result<(StatusCode, Json<Category>)> {
    let input = input.validated()?;
    let category = state.backend().create_category(&session, &input).await?;
    state.catalog().invalidate().await;

    tracing::info!(id = %category.id, name = %category.name, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// `PUT /admin/api/categories/{id}`
#[instrument(skip(state, session, input))]
pub async fn update(
    State(state): State<AppState>,
    RequireToken(session): RequireToken,
    Path(id): Path<CategoryId>,
    Json(input): Json<CategoryInput>,
) -> Result<Json<Category>> {
    let input = input.validated()?;
    let category = state.backend().update_category(&session, id, &input).await?;
    state.catalog().invalidate().await;

    Ok(Json(category))
}

/// `DELETE /admin/api/categories/{id}`
#[instrument(skip(state, session))]
pub async fn destroy(
    State(state): State<AppState>,
    RequireToken(session): RequireToken,
    Path(id): Path<CategoryId>,
) -> Result<StatusCode> {
    state.backend().delete_category(&session, id).await?;
    state.catalog().invalidate().await;

    tracing::info!(%id, "Category deleted");
    Ok(StatusCode::NO_CONTENT)
}
