//! Conjunctive category, brand and free-text filtering.

use serde::{Deserialize, Serialize};

use super::normalize::normalize;
use crate::types::{CategoryId, Product};

/// Filters selected by the shopper.
///
/// Each field is independent. `None` means the filter is off; a product has
/// to satisfy every active filter to be kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Keep products tagged with this category.
    pub category: Option<CategoryId>,
    /// Keep products whose brand folds to the same text.
    pub brand: Option<String>,
    /// Keep products whose text contains this substring after folding.
    pub search: Option<String>,
}

impl FilterCriteria {
    /// Criteria with no active filter.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Whether no filter would exclude anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.compile().is_pass_through()
    }

    fn compile(&self) -> CompiledFilter {
        CompiledFilter {
            category: self.category,
            brand: self.brand.as_deref().map(normalize).filter(|b| !b.is_empty()),
            search: self.search.as_deref().map(normalize).filter(|s| !s.is_empty()),
        }
    }
}

/// Criteria with their text already folded, so each product pays for
/// normalization of its own fields only.
struct CompiledFilter {
    category: Option<CategoryId>,
    brand: Option<String>,
    search: Option<String>,
}

impl CompiledFilter {
    const fn is_pass_through(&self) -> bool {
        self.category.is_none() && self.brand.is_none() && self.search.is_none()
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category
            && !product.in_category(category)
        {
            return false;
        }

        if let Some(brand) = &self.brand
            && normalize(&product.brand) != *brand
        {
            return false;
        }

        if let Some(needle) = &self.search
            && !normalize(&search_text(product)).contains(needle.as_str())
        {
            return false;
        }

        true
    }
}

/// Everything a shopper might type to find a product, space-joined.
fn search_text(product: &Product) -> String {
    let mut text = format!("{} {} {}", product.name, product.description, product.brand);
    for category in &product.categories {
        text.push(' ');
        text.push_str(&category.name);
    }
    text
}

/// Apply the criteria to a product list.
///
/// Returns the matching products in their original order. An empty list or
/// criteria that match nothing yield an empty result. Blank brand or search
/// text counts as no filter.
///
/// ```
/// use remakeup_core::catalog::{FilterCriteria, apply_filters};
///
/// let products = Vec::new();
/// assert!(apply_filters(&products, &FilterCriteria::all().with_search("batom")).is_empty());
/// ```
#[must_use]
pub fn apply_filters<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let filter = criteria.compile();
    products.iter().filter(|p| filter.matches(p)).collect()
}
