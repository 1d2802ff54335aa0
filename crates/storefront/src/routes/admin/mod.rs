//! Admin JSON API.
//!
//! Every handler requires a logged-in administrator and forwards the stored
//! token to the backend. Successful writes drop the catalog snapshot, so the
//! next storefront read reloads it and rebuilds the carousel.

pub mod brands;
pub mod categories;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Routes nested under `/admin/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/session", get(super::auth::admin_session))
        .route("/products", get(products::index).post(products::create))
        .route(
            "/products/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::destroy),
        )
        .route("/categories", get(categories::index).post(categories::create))
        .route(
            "/categories/{id}",
            put(categories::update).delete(categories::destroy),
        )
        .route("/brands", get(brands::index).post(brands::create))
        .route("/brands/{id}", delete(brands::destroy))
        .route("/brands/{id}/logo", post(brands::upload_logo))
}
