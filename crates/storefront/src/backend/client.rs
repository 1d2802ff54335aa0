//! HTTP client for the store backend.

use std::sync::Arc;

use remakeup_core::{Brand, BrandId, Category, CategoryId, Product, ProductId};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::types::{BrandInput, CategoryInput, ListResponse, LogoUpload, ProductInput};
use super::{BackendError, BackendSession};
use crate::config::BackendConfig;

/// Path of the backend's Google OAuth2 entry point.
const GOOGLE_LOGIN_PATH: &str = "oauth2/authorization/google";

/// Client for the store backend REST API.
///
/// Cheap to clone. Holds no credentials; authenticated calls take a
/// [`BackendSession`].
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Create a new backend client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("remakeup-storefront/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(BackendClientInner {
                client,
                base_url: with_trailing_slash(config.base_url.clone()),
            }),
        })
    }

    /// The backend base URL, always ending in `/`.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Where shoppers are sent to log in with Google.
    #[must_use]
    pub fn login_url(&self) -> String {
        self.inner
            .base_url
            .join(GOOGLE_LOGIN_PATH)
            .map_or_else(|_| self.inner.base_url.to_string(), String::from)
    }

    /// Make a brand logo path absolute.
    ///
    /// Absolute `http(s)` URLs are returned as-is; anything else is served by
    /// the backend and gets its base URL prefixed.
    #[must_use]
    pub fn resolve_logo_url(&self, logo_url: Option<&str>) -> Option<String> {
        let logo_url = logo_url.map(str::trim).filter(|u| !u.is_empty())?;
        if logo_url.starts_with("http://") || logo_url.starts_with("https://") {
            return Some(logo_url.to_string());
        }
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        let path = logo_url.trim_start_matches('/');
        Some(format!("{base}/{path}"))
    }

    fn url(&self, path: &str) -> Result<Url, BackendError> {
        Ok(self.inner.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Send a request and decode the JSON body.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        session: &BackendSession,
        resource: &str,
    ) -> Result<T, BackendError> {
        let response_text = self.send(request, session, resource).await?;

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                resource,
                body = %response_text.chars().take(500).collect::<String>(),
                "Failed to parse backend response"
            );
            BackendError::Parse(e)
        })
    }

    /// Send a request and return the raw body of a successful response.
    async fn send(
        &self,
        request: RequestBuilder,
        session: &BackendSession,
        resource: &str,
    ) -> Result<String, BackendError> {
        let response = session.apply(request).send().await?;
        let status = response.status();
        let response_text = response.text().await?;

        if status.is_success() {
            return Ok(response_text);
        }

        debug!(%status, resource, "Backend returned non-success status");

        Err(match status {
            StatusCode::NOT_FOUND => BackendError::NotFound(resource.to_string()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BackendError::Unauthorized,
            StatusCode::CONFLICT => BackendError::Conflict(resource.to_string()),
            _ => {
                tracing::error!(
                    status = %status,
                    resource,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Backend request failed"
                );
                BackendError::Status {
                    status,
                    body: response_text.chars().take(200).collect(),
                }
            }
        })
    }

    async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, BackendError> {
        let request = self.inner.client.get(self.url(path)?);
        let list: ListResponse<T> = self
            .send_json(request, &BackendSession::anonymous(), path)
            .await?;
        Ok(list.into_items())
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, BackendError> {
        let products: Vec<Product> = self.list("products").await?;
        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    /// Fetch one product.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] for unknown ids.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, BackendError> {
        let path = format!("products/{id}");
        let request = self.inner.client.get(self.url(&path)?);
        self.send_json(request, &BackendSession::anonymous(), &path)
            .await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Unauthorized`] without a valid session.
    #[instrument(skip(self, session, input), fields(name = %input.name))]
    pub async fn create_product(
        &self,
        session: &BackendSession,
        input: &ProductInput,
    ) -> Result<Product, BackendError> {
        let request = self.inner.client.post(self.url("products")?).json(input);
        self.send_json(request, session, "products").await
    }

    /// Replace a product.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] for unknown ids.
    #[instrument(skip(self, session, input))]
    pub async fn update_product(
        &self,
        session: &BackendSession,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<Product, BackendError> {
        let path = format!("products/{id}");
        let request = self.inner.client.put(self.url(&path)?).json(input);
        self.send_json(request, session, &path).await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] for unknown ids.
    #[instrument(skip(self, session))]
    pub async fn delete_product(
        &self,
        session: &BackendSession,
        id: ProductId,
    ) -> Result<(), BackendError> {
        let path = format!("products/{id}");
        let request = self.inner.client.delete(self.url(&path)?);
        self.send(request, session, &path).await.map(drop)
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Fetch all categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, BackendError> {
        self.list("categories").await
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Conflict`] if the name is taken.
    #[instrument(skip(self, session))]
    pub async fn create_category(
        &self,
        session: &BackendSession,
        input: &CategoryInput,
    ) -> Result<Category, BackendError> {
        let request = self.inner.client.post(self.url("categories")?).json(input);
        self.send_json(request, session, "categories").await
    }

    /// Rename a category.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Conflict`] if the name is taken.
    #[instrument(skip(self, session))]
    pub async fn update_category(
        &self,
        session: &BackendSession,
        id: CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, BackendError> {
        let path = format!("categories/{id}");
        let request = self.inner.client.put(self.url(&path)?).json(input);
        self.send_json(request, session, &path).await
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns an error if products still reference the category.
    #[instrument(skip(self, session))]
    pub async fn delete_category(
        &self,
        session: &BackendSession,
        id: CategoryId,
    ) -> Result<(), BackendError> {
        let path = format!("categories/{id}");
        let request = self.inner.client.delete(self.url(&path)?);
        self.send(request, session, &path).await.map(drop)
    }

    // =========================================================================
    // Brands
    // =========================================================================

    /// Fetch all brands.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    #[instrument(skip(self))]
    pub async fn list_brands(&self) -> Result<Vec<Brand>, BackendError> {
        self.list("brands").await
    }

    /// Create a brand.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Conflict`] if the name is taken.
    #[instrument(skip(self, session))]
    pub async fn create_brand(
        &self,
        session: &BackendSession,
        input: &BrandInput,
    ) -> Result<Brand, BackendError> {
        let request = self.inner.client.post(self.url("brands")?).json(input);
        self.send_json(request, session, "brands").await
    }

    /// Delete a brand.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] for unknown ids.
    #[instrument(skip(self, session))]
    pub async fn delete_brand(&self, session: &BackendSession, id: BrandId) -> Result<(), BackendError> {
        let path = format!("brands/{id}");
        let request = self.inner.client.delete(self.url(&path)?);
        self.send(request, session, &path).await.map(drop)
    }

    /// Upload a brand logo as multipart field `file`.
    ///
    /// # Errors
    ///
    /// Returns an error if the content type is invalid or the upload fails.
    #[instrument(skip(self, session, upload), fields(file = %upload.file_name, size = upload.bytes.len()))]
    pub async fn upload_brand_logo(
        &self,
        session: &BackendSession,
        id: BrandId,
        upload: LogoUpload,
    ) -> Result<Brand, BackendError> {
        let path = format!("brands/{id}/logo");
        let part = reqwest::multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);
        let request = self.inner.client.post(self.url(&path)?).multipart(form);
        self.send_json(request, session, &path).await
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn client(base: &str) -> BackendClient {
        BackendClient::new(&BackendConfig {
            base_url: Url::parse(base).unwrap(),
            timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    #[test]
    fn test_urls_keep_base_path() {
        let client = client("https://api.remakeup.com.br/v1");
        assert_eq!(client.base_url().as_str(), "https://api.remakeup.com.br/v1/");
        assert_eq!(
            client.url("/products/3").unwrap().as_str(),
            "https://api.remakeup.com.br/v1/products/3"
        );
    }

    #[test]
    fn test_login_url() {
        assert_eq!(
            client("http://localhost:8080").login_url(),
            "http://localhost:8080/oauth2/authorization/google"
        );
    }

    #[test]
    fn test_resolve_logo_url() {
        let client = client("http://localhost:8080");
        assert_eq!(
            client.resolve_logo_url(Some("https://cdn.example/logo.png")).as_deref(),
            Some("https://cdn.example/logo.png")
        );
        assert_eq!(
            client.resolve_logo_url(Some("/uploads/brands/7.png")).as_deref(),
            Some("http://localhost:8080/uploads/brands/7.png")
        );
        assert_eq!(client.resolve_logo_url(Some("  ")), None);
        assert_eq!(client.resolve_logo_url(None), None);
    }
}
