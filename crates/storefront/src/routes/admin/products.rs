//! Product management.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use remakeup_core::{Product, ProductId};
use tracing::instrument;

use crate::backend::ProductInput;
use crate::error::Result;
use crate::middleware::RequireToken;
use crate::state::AppState;

/// `GET /admin/api/products`: straight from the backend, not the snapshot.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RequireToken(_session): RequireToken,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.backend().list_products().await?))
}

/// `GET /admin/api/products/{id}`: current backend copy for the edit form.
#[instrument(skip(state, _session))]
pub async fn show(
    State(state): State<AppState>,
    RequireToken(_session): RequireToken,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    Ok(Json(state.backend().get_product(id).await?))
}

/// `POST /admin/api/products`
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    RequireToken(session): RequireToken,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<Product>)> {
    let input = input.validated()?;
    let product = state.backend().create_product(&session, &input).await?;
    state.catalog().invalidate().await;

    tracing::info!(id = %product.id, name = %product.name, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /admin/api/products/{id}`
#[instrument(skip(state, session, input))]
pub async fn update(
    State(state): State<AppState>,
    RequireToken(session): RequireToken,
    Path(id): Path<ProductId>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>> {
    let input = input.validated()?;
    let product = state.backend().update_product(&session, id, &input).await?;
    state.catalog().invalidate().await;

    tracing::info!(%id, "Product updated");
    Ok(Json(product))
}

/// `DELETE /admin/api/products/{id}`
#[instrument(skip(state, session))]
pub async fn destroy(
    State(state): State<AppState>,
    RequireToken(session): RequireToken,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    state.backend().delete_product(&session, id).await?;
    state.catalog().invalidate().await;

    tracing::info!(%id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
