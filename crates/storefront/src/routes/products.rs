//! Product detail.

use axum::{
    Json,
    extract::{Path, State},
};
use remakeup_core::display::ProductCard;
use remakeup_core::meta::PageMeta;
use remakeup_core::{Product, ProductId};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub meta: PageMeta,
    pub product: Product,
    pub card: ProductCard,
}

/// `GET /products/{id}`
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductPage>> {
    let snapshot = state.catalog().snapshot().await?;
    let product = snapshot
        .product(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(Json(ProductPage {
        meta: PageMeta::product(Some(product)),
        card: ProductCard::from(product),
        product: product.clone(),
    }))
}
