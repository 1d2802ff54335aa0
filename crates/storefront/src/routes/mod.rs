//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                             - Home: heading, filters, product grid, carousel
//! GET  /categoria/{id}               - Home with a category preselected
//! GET  /products/{id}                - Product detail
//! GET  /sitemap.xml                  - Sitemap
//!
//! # Carousel
//! GET  /api/carousel                 - Current slide
//! POST /api/carousel/next            - Next slide
//! POST /api/carousel/prev            - Previous slide
//! POST /api/carousel/goto/{index}    - Jump to a slide
//!
//! # Auth
//! GET  /auth/login                   - Redirect to the backend's Google login
//! GET  /oauth2/redirect              - Login callback (`?token=`)
//! POST /auth/logout                  - Logout
//!
//! # Admin (requires login)
//! GET  /admin/api/session
//! GET  /admin/api/products           POST /admin/api/products
//! GET  /admin/api/products/{id}      PUT  /admin/api/products/{id}
//! DELETE /admin/api/products/{id}
//! GET  /admin/api/categories         POST /admin/api/categories
//! PUT  /admin/api/categories/{id}    DELETE /admin/api/categories/{id}
//! GET  /admin/api/brands             POST /admin/api/brands
//! DELETE /admin/api/brands/{id}      POST /admin/api/brands/{id}/logo
//! ```

pub mod admin;
pub mod auth;
pub mod carousel;
pub mod home;
pub mod products;
pub mod sitemap;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the carousel API router.
pub fn carousel_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(carousel::show))
        .route("/next", post(carousel::next))
        .route("/prev", post(carousel::prev))
        .route("/goto/{index}", post(carousel::go_to))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login))
        .route("/logout", post(auth::logout))
}

/// Build the complete storefront router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/categoria/{id}", get(home::category))
        .route("/products/{id}", get(products::show))
        .route("/sitemap.xml", get(sitemap::sitemap))
        .route("/oauth2/redirect", get(auth::oauth2_redirect))
        .nest("/api/carousel", carousel_routes())
        .nest("/auth", auth_routes())
        .nest("/admin/api", admin::routes())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use remakeup_core::{
        Brand, BrandId, Category, CategoryId, CategoryRef, Price, Product, ProductId, ProductType,
    };
    use serde_json::Value;
    use tower::ServiceExt;
    use url::Url;

    use crate::catalog::CatalogSnapshot;
    use crate::config::{BackendConfig, CatalogConfig, StorefrontConfig};
    use crate::state::AppState;

    fn config() -> StorefrontConfig {
        StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            site_url: Url::parse("https://remakeup.com.br").unwrap(),
            // Nothing listens here; every test seeds the snapshot.
            backend: BackendConfig {
                base_url: Url::parse("http://127.0.0.1:9").unwrap(),
                timeout: Duration::from_millis(200),
            },
            catalog: CatalogConfig {
                carousel_interval: Duration::from_secs(3600),
                ..CatalogConfig::default()
            },
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    fn product(id: i64, name: &str, brand: &str, category: (i64, &str), featured: bool) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            brand: brand.to_string(),
            categories: vec![CategoryRef {
                id: CategoryId::new(category.0),
                name: category.1.to_string(),
            }],
            price: Some(Price::from_cents(2990)),
            is_featured: featured,
            product_type: ProductType::Physical,
            img_url: None,
            affiliate_url: None,
        }
    }

    fn catalog() -> CatalogSnapshot {
        CatalogSnapshot {
            products: vec![
                product(1, "Batom Matte Vermelho", "Melu", (5, "Batom"), true),
                product(2, "Batom Cremoso Nude", "Melu", (5, "Batom"), false),
                product(3, "Base Matte", "Makiê", (7, "Pele"), false),
            ],
            categories: vec![
                Category {
                    id: CategoryId::new(5),
                    name: "Batom".to_string(),
                },
                Category {
                    id: CategoryId::new(7),
                    name: "Pele".to_string(),
                },
            ],
            brands: vec![Brand {
                id: BrandId::new(1),
                name: "Melu".to_string(),
                logo_url: Some("/uploads/melu.png".to_string()),
            }],
        }
    }

    async fn app_with(snapshot: CatalogSnapshot) -> axum::Router {
        let state = AppState::new(config()).unwrap();
        state.catalog().seed(snapshot).await;
        crate::app(state)
    }

    async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with(catalog()).await;
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_home_applies_all_filters() {
        let app = app_with(catalog()).await;
        let (status, json) = send(&app, get("/?category=5&brand=melu&q=MATTE")).await;

        assert_eq!(status, StatusCode::OK);
        let products = json["products"].as_array().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0]["id"], 1);
        assert_eq!(products[0]["priceLabel"], "R$ 29.90");
        assert_eq!(json["heading"]["title"], "Batom");
        assert_eq!(json["heading"]["subtitle"], "1 produtos encontrados");
        assert_eq!(
            json["brands"][0]["logoUrl"],
            "http://127.0.0.1:9/uploads/melu.png"
        );
    }

    #[tokio::test]
    async fn test_home_without_filters() {
        let app = app_with(catalog()).await;
        let (status, json) = send(&app, get("/?category=all&brand=all")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["heading"]["title"], "Vitrine Completa");
        assert_eq!(json["products"].as_array().unwrap().len(), 3);
        assert_eq!(json["meta"]["title"], "ReMakeup Store");
        assert_eq!(json["carousel"]["state"], "rotating");
        assert_eq!(json["carousel"]["total"], 2);
    }

    #[tokio::test]
    async fn test_home_unknown_brand_is_empty() {
        let app = app_with(catalog()).await;
        let (status, json) = send(&app, get("/?brand=Inexistente")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["products"].as_array().unwrap().is_empty());
        assert_eq!(json["pagination"]["totalPages"], 1);
    }

    #[tokio::test]
    async fn test_home_clamps_page() {
        let products = (1..=25)
            .map(|id| product(id, &format!("Produto {id}"), "Melu", (5, "Batom"), false))
            .collect();
        let app = app_with(CatalogSnapshot {
            products,
            ..CatalogSnapshot::default()
        })
        .await;

        let (status, json) = send(&app, get("/?page=5")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["pagination"]["pageIndex"], 2);
        assert_eq!(json["pagination"]["totalPages"], 3);
        assert_eq!(json["pagination"]["nextHref"], Value::Null);
        assert_eq!(json["pagination"]["prevHref"], "/?page=1");
        assert_eq!(json["products"][0]["id"], 25);
    }

    #[tokio::test]
    async fn test_category_page() {
        let app = app_with(catalog()).await;

        let (_, json) = send(&app, get("/categoria/7")).await;
        assert_eq!(json["heading"]["title"], "Pele");
        assert_eq!(json["products"][0]["id"], 3);

        let (_, json) = send(&app, get("/categoria/99")).await;
        assert_eq!(json["heading"]["title"], "Produtos");
        assert!(json["products"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_category_query() {
        let app = app_with(catalog()).await;
        let (status, _) = send(&app, get("/?category=batom")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_product_detail() {
        let app = app_with(catalog()).await;

        let (status, json) = send(&app, get("/products/2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["meta"]["title"], "Batom Cremoso Nude | ReMakeup Store");
        assert_eq!(
            json["meta"]["description"],
            "Detalhes do produto na ReMakeup Store."
        );
        assert_eq!(json["card"]["categoryLabel"], "Batom");
        assert_eq!(json["card"]["callToAction"]["action"], "addToCart");

        let (status, _) = send(&app, get("/products/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_carousel_navigation() {
        let app = app_with(catalog()).await;

        let (_, json) = send(&app, get("/api/carousel")).await;
        assert_eq!(json["current"], 0);
        assert_eq!(json["slide"]["kind"], "hero");

        let (_, json) = send(&app, post("/api/carousel/next")).await;
        assert_eq!(json["current"], 1);
        assert_eq!(json["slide"]["kind"], "featured");

        let (_, json) = send(&app, post("/api/carousel/next")).await;
        assert_eq!(json["current"], 0);

        let (_, json) = send(&app, post("/api/carousel/prev")).await;
        assert_eq!(json["current"], 1);

        let (status, _) = send(&app, post("/api/carousel/goto/5")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (_, json) = send(&app, get("/api/carousel")).await;
        assert_eq!(json["current"], 1);

        let (status, json) = send(&app, post("/api/carousel/goto/0")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["current"], 0);
    }

    #[tokio::test]
    async fn test_sitemap() {
        let app = app_with(catalog()).await;
        let response = app.oneshot(get("/sitemap.xml")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/xml; charset=utf-8"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let xml = String::from_utf8(body.to_vec()).unwrap();
        assert!(xml.contains("<loc>https://remakeup.com.br/</loc>"));
        assert!(xml.contains("<loc>https://remakeup.com.br/categoria/7</loc>"));
    }

    #[tokio::test]
    async fn test_admin_requires_login() {
        let app = app_with(catalog()).await;

        let (status, json) = send(&app, get("/admin/api/products")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            json["loginUrl"],
            "http://127.0.0.1:9/oauth2/authorization/google"
        );

        let (status, _) = send(&app, post("/admin/api/categories")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, get("/admin/api/products/5")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_redirect_without_token() {
        let app = app_with(catalog()).await;
        let (status, json) = send(&app, get("/oauth2/redirect")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["meta"]["robots"], "noindex, nofollow");
        assert!(json["loginUrl"].as_str().unwrap().ends_with("/oauth2/authorization/google"));
    }

    #[tokio::test]
    async fn test_login_session_unlocks_admin() {
        let app = app_with(catalog()).await;

        let response = app
            .clone()
            .oneshot(get("/oauth2/redirect?token=abc.def.ghi"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/admin");
        let cookie = response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();

        let (status, json) = send(
            &app,
            Request::builder()
                .uri("/admin/api/session")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["authenticated"], true);

        // Validation runs before anything is sent to the backend.
        let (status, json) = send(
            &app,
            Request::builder()
                .method("POST")
                .uri("/admin/api/categories")
                .header(header::COOKIE, &cookie)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name": "   "}"#))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid input: name is required");

        // Single products come from the backend, which is unreachable here.
        let (status, json) = send(
            &app,
            Request::builder()
                .uri("/admin/api/products/5")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"], "Store backend unavailable");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/logout")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let (status, _) = send(
            &app,
            Request::builder()
                .uri("/admin/api/session")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
