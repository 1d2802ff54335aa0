//! Document metadata (title, description, robots) for each page.

use serde::Serialize;

use crate::types::Product;

/// Site name appended to page titles.
pub const SITE_NAME: &str = "ReMakeup Store";

/// Robots directive for pages that must stay out of search engines.
pub const NO_INDEX: &str = "noindex, nofollow";

/// Metadata a renderer writes into the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
    /// `None` removes any robots tag.
    pub robots: Option<&'static str>,
}

impl PageMeta {
    #[must_use]
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
            robots: None,
        }
    }

    /// Keep the page out of search results.
    #[must_use]
    pub const fn no_index(mut self) -> Self {
        self.robots = Some(NO_INDEX);
        self
    }

    /// Metadata for the storefront home page.
    #[must_use]
    pub fn home() -> Self {
        Self::new(
            SITE_NAME,
            Some("Maquiagem, skincare e cursos selecionados para você.".to_string()),
        )
    }

    /// Metadata for a product detail page; `None` while the product is unknown.
    #[must_use]
    pub fn product(product: Option<&Product>) -> Self {
        let title = product.map_or_else(
            || format!("Produto | {SITE_NAME}"),
            |p| format!("{} | {SITE_NAME}", p.name),
        );
        let description = product
            .map(|p| p.description.trim())
            .filter(|d| !d.is_empty())
            .map_or_else(
                || format!("Detalhes do produto na {SITE_NAME}."),
                str::to_string,
            );

        Self::new(title, Some(description))
    }

    /// Metadata for admin and login screens.
    #[must_use]
    pub fn private(title: &str) -> Self {
        Self::new(format!("{title} | {SITE_NAME}"), None).no_index()
    }
}
