//! `sitemap.xml` built from the current categories.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use remakeup_core::sitemap::build_sitemap;

use crate::error::Result;
use crate::state::AppState;

/// `GET /sitemap.xml`
pub async fn sitemap(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let snapshot = state.catalog().snapshot().await?;
    let xml = build_sitemap(state.config().site_url.as_str(), &snapshot.categories)?;

    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    ))
}
