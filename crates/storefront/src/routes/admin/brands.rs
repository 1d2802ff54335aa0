//! Brand management and logo uploads.

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use remakeup_core::{Brand, BrandId};
use tracing::instrument;

use crate::backend::{BrandInput, LogoUpload};
use crate::error::{AppError, Result};
use crate::middleware::RequireToken;
use crate::state::AppState;

/// Multipart field carrying the logo file.
const LOGO_FIELD: &str = "file";

/// `GET /admin/api/brands`
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RequireToken(_session): RequireToken,
) -> Result<Json<Vec<Brand>>> {
    Ok(Json(state.backend().list_brands().await?))
}

/// `POST /admin/api/brands`
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    RequireToken(session): RequireToken,
    Json(input): Json<BrandInput>,
) -> Result<(StatusCode, Json<Brand>)> {
    let input = input.validated()?;
    let brand = state.backend().create_brand(&session, &input).await?;
    state.catalog().invalidate().await;

    tracing::info!(id = %brand.id, name = %brand.name, "Brand created");
    Ok((StatusCode::CREATED, Json(brand)))
}

/// `DELETE /admin/api/brands/{id}`
#[instrument(skip(state, session))]
pub async fn destroy(
    State(state): State<AppState>,
    RequireToken(session): RequireToken,
    Path(id): Path<BrandId>,
) -> Result<StatusCode> {
    state.backend().delete_brand(&session, id).await?;
    state.catalog().invalidate().await;

    tracing::info!(%id, "Brand deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /admin/api/brands/{id}/logo` with the image in multipart field `file`.
#[instrument(skip(state, session, multipart))]
pub async fn upload_logo(
    State(state): State<AppState>,
    RequireToken(session): RequireToken,
    Path(id): Path<BrandId>,
    multipart: Multipart,
) -> Result<Json<Brand>> {
    let upload = read_logo(multipart).await?;
    let brand = state.backend().upload_brand_logo(&session, id, upload).await?;
    state.catalog().invalidate().await;

    tracing::info!(%id, logo = ?brand.logo_url, "Brand logo uploaded");
    Ok(Json(brand))
}

async fn read_logo(mut multipart: Multipart) -> Result<LogoUpload> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(LOGO_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("logo").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        if !content_type.starts_with("image/") {
            return Err(AppError::BadRequest(format!(
                "logo must be an image, got {content_type}"
            )));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        if bytes.is_empty() {
            return Err(AppError::BadRequest("logo file is empty".to_string()));
        }

        return Ok(LogoUpload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Err(AppError::BadRequest(format!(
        "missing multipart field '{LOGO_FIELD}'"
    )))
}
