//! Manual carousel controls.
//!
//! Every handler makes sure the catalog (and therefore the slide list) is
//! loaded first, so the carousel is only idle when there is nothing to show.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::autoplay::CarouselSnapshot;
use crate::error::Result;
use crate::state::AppState;

/// `GET /api/carousel`
pub async fn show(State(state): State<AppState>) -> Result<Json<CarouselSnapshot>> {
    state.catalog().snapshot().await?;
    Ok(Json(state.autoplay().snapshot()))
}

/// `POST /api/carousel/next`
pub async fn next(State(state): State<AppState>) -> Result<Json<CarouselSnapshot>> {
    state.catalog().snapshot().await?;
    state.autoplay().next();
    Ok(Json(state.autoplay().snapshot()))
}

/// `POST /api/carousel/prev`
pub async fn prev(State(state): State<AppState>) -> Result<Json<CarouselSnapshot>> {
    state.catalog().snapshot().await?;
    state.autoplay().prev();
    Ok(Json(state.autoplay().snapshot()))
}

/// `POST /api/carousel/goto/{index}`: 400 when the slide does not exist.
pub async fn go_to(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<CarouselSnapshot>> {
    state.catalog().snapshot().await?;
    state.autoplay().go_to(index)?;
    Ok(Json(state.autoplay().snapshot()))
}
