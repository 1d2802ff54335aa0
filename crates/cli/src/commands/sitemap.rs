//! Sitemap generation.

use std::path::Path;

use remakeup_core::sitemap::build_sitemap;
use remakeup_storefront::backend::BackendClient;
use remakeup_storefront::config::{BackendConfig, site_url_from_env};
use tracing::info;

/// Fetch the categories and write the sitemap to `output`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the backend cannot be
/// reached, the XML cannot be written, or the file cannot be written.
pub async fn generate(
    output: &Path,
    site_url: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let site_url = match site_url {
        Some(url) => url.to_string(),
        None => site_url_from_env()?.to_string(),
    };

    let backend = BackendClient::new(&BackendConfig::from_env()?)?;
    info!(backend = %backend.base_url(), "Fetching categories");
    let categories = backend.list_categories().await?;

    let xml = build_sitemap(&site_url, &categories)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(output, xml).await?;

    info!(
        path = %output.display(),
        urls = categories.len() + 1,
        "Sitemap written"
    );
    Ok(())
}
