//! Catalog browsing from the terminal.

use std::io::Write;
use std::num::NonZeroUsize;

use remakeup_core::catalog::{CatalogBrowser, CatalogHeading, FilterCriteria};
use remakeup_core::display::ProductCard;
use remakeup_core::CategoryId;
use remakeup_storefront::backend::BackendClient;
use remakeup_storefront::config::BackendConfig;
use serde::Serialize;
use tracing::info;

/// Filters and page requested on the command line.
#[derive(Debug)]
pub struct CatalogQuery {
    pub category: Option<i64>,
    pub brand: Option<String>,
    pub search: Option<String>,
    pub page: usize,
    pub page_size: NonZeroUsize,
}

impl CatalogQuery {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            category: self.category.map(CategoryId::new),
            brand: self.brand.clone(),
            search: self.search.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogOutput {
    heading: CatalogHeading,
    page_index: usize,
    total_pages: usize,
    products: Vec<ProductCard>,
}

/// Load the catalog and print the requested page as JSON on stdout.
///
/// # Errors
///
/// Returns an error if the backend cannot be reached or stdout is closed.
pub async fn browse(query: &CatalogQuery) -> Result<(), Box<dyn std::error::Error>> {
    let backend = BackendClient::new(&BackendConfig::from_env()?)?;
    let (products, categories) =
        tokio::try_join!(backend.list_products(), backend.list_categories())?;
    info!(products = products.len(), "Catalog loaded");

    let browser = CatalogBrowser::at(query.criteria(), query.page, query.page_size);
    let view = browser.view(&products);

    let output = CatalogOutput {
        heading: CatalogHeading::new(query.category.map(CategoryId::new), &categories, view.total_matching),
        page_index: view.page_index,
        total_pages: view.total_pages,
        products: view.items.iter().copied().map(ProductCard::from).collect(),
    };

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &output)?;
    writeln!(stdout)?;
    Ok(())
}
