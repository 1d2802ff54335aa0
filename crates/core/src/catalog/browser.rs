//! Shopper-facing catalog state: current filters plus current page.

use std::num::NonZeroUsize;

use serde::Serialize;

use super::filter::{FilterCriteria, apply_filters};
use super::pagination::{DEFAULT_PAGE_SIZE, paginate, total_pages};
use crate::types::{Category, CategoryId, Product};

/// Filter and page position for one shopper's view of the catalog.
///
/// Changing the criteria always returns to the first page; the page index is
/// only ever moved by the navigation methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogBrowser {
    criteria: FilterCriteria,
    page_index: usize,
    page_size: NonZeroUsize,
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CatalogBrowser {
    #[must_use]
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page_index: 0,
            page_size,
        }
    }

    /// Start from the given criteria and page, e.g. restored from a URL.
    #[must_use]
    pub const fn at(criteria: FilterCriteria, page_index: usize, page_size: NonZeroUsize) -> Self {
        Self {
            criteria,
            page_index,
            page_size,
        }
    }

    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Replace the criteria and go back to the first page.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page_index = 0;
    }

    pub fn select_category(&mut self, category: Option<CategoryId>) {
        let criteria = FilterCriteria {
            category,
            ..self.criteria.clone()
        };
        self.set_criteria(criteria);
    }

    pub fn select_brand(&mut self, brand: Option<String>) {
        let criteria = FilterCriteria {
            brand,
            ..self.criteria.clone()
        };
        self.set_criteria(criteria);
    }

    pub fn search(&mut self, text: Option<String>) {
        let criteria = FilterCriteria {
            search: text,
            ..self.criteria.clone()
        };
        self.set_criteria(criteria);
    }

    /// Advance one page. No-op on the last page.
    pub fn next_page(&mut self, products: &[Product]) {
        let matching = apply_filters(products, &self.criteria).len();
        let last = total_pages(matching, self.page_size) - 1;
        let current = self.page_index.min(last);
        if current < last {
            self.page_index = current + 1;
        } else {
            self.page_index = current;
        }
    }

    /// Go back one page. No-op on the first page.
    pub const fn prev_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Filter and paginate the given catalog.
    #[must_use]
    pub fn view<'a>(&self, products: &'a [Product]) -> CatalogPage<'a> {
        let matching = apply_filters(products, &self.criteria);
        let page = paginate(&matching, self.page_index, self.page_size);

        CatalogPage {
            items: page.items.to_vec(),
            page_index: page.index,
            total_pages: page.total_pages,
            total_matching: page.total_items,
            has_next: page.next_index().is_some(),
            has_prev: page.prev_index().is_some(),
        }
    }
}

/// The visible slice of a filtered catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage<'a> {
    pub items: Vec<&'a Product>,
    pub page_index: usize,
    pub total_pages: usize,
    pub total_matching: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Title and result count shown above the product grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogHeading {
    pub title: String,
    pub subtitle: String,
}

impl CatalogHeading {
    /// Heading for the full catalog.
    pub const ALL_TITLE: &'static str = "Vitrine Completa";
    /// Heading when the selected category is not in the category list.
    pub const FALLBACK_TITLE: &'static str = "Produtos";

    #[must_use]
    pub fn new(selected: Option<CategoryId>, categories: &[Category], total_matching: usize) -> Self {
        let title = selected.map_or_else(
            || Self::ALL_TITLE.to_string(),
            |id| {
                categories
                    .iter()
                    .find(|c| c.id == id)
                    .map_or_else(|| Self::FALLBACK_TITLE.to_string(), |c| c.name.clone())
            },
        );

        Self {
            title,
            subtitle: format!("{total_matching} produtos encontrados"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryRef, ProductId, ProductType};

    fn catalog(len: i64) -> Vec<Product> {
        (1..=len)
            .map(|id| Product {
                id: ProductId::new(id),
                name: format!("Produto {id}"),
                description: String::new(),
                brand: if id % 2 == 0 { "Vult" } else { "Makiê" }.to_string(),
                categories: vec![CategoryRef {
                    id: CategoryId::new(id % 3),
                    name: format!("Categoria {}", id % 3),
                }],
                price: None,
                is_featured: false,
                product_type: ProductType::Physical,
                img_url: None,
                affiliate_url: None,
            })
            .collect()
    }

    fn small_pages() -> CatalogBrowser {
        CatalogBrowser::new(NonZeroUsize::new(4).unwrap())
    }

    #[test]
    fn test_changing_criteria_resets_page() {
        let products = catalog(20);
        let mut browser = small_pages();
        browser.next_page(&products);
        browser.next_page(&products);
        assert_eq!(browser.page_index(), 2);

        browser.select_brand(Some("makie".to_string()));
        assert_eq!(browser.page_index(), 0);

        browser.next_page(&products);
        browser.search(Some("produto".to_string()));
        assert_eq!(browser.page_index(), 0);
    }

    #[test]
    fn test_next_page_stops_on_last_page() {
        let products = catalog(9);
        let mut browser = small_pages();
        for _ in 0..10 {
            browser.next_page(&products);
        }
        assert_eq!(browser.page_index(), 2);

        let view = browser.view(&products);
        assert_eq!(view.items.len(), 1);
        assert!(!view.has_next);
        assert!(view.has_prev);
    }

    #[test]
    fn test_prev_page_stops_on_first_page() {
        let mut browser = small_pages();
        browser.prev_page();
        assert_eq!(browser.page_index(), 0);
    }

    #[test]
    fn test_view_clamps_stale_index() {
        let products = catalog(20);
        let browser = CatalogBrowser::at(FilterCriteria::all(), 4, NonZeroUsize::new(4).unwrap());

        let shrunk = &products[..6];
        let view = browser.view(shrunk);
        assert_eq!(view.page_index, 1);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.items.len(), 2);
    }

    #[test]
    fn test_view_counts_matching_products() {
        let products = catalog(10);
        let mut browser = small_pages();
        browser.select_category(Some(CategoryId::new(0)));

        let view = browser.view(&products);
        assert_eq!(view.total_matching, 3);
        assert!(view.items.iter().all(|p| p.in_category(CategoryId::new(0))));
    }

    #[test]
    fn test_heading() {
        let categories = vec![Category {
            id: CategoryId::new(5),
            name: "Batom".to_string(),
        }];

        let all = CatalogHeading::new(None, &categories, 12);
        assert_eq!(all.title, "Vitrine Completa");
        assert_eq!(all.subtitle, "12 produtos encontrados");

        let known = CatalogHeading::new(Some(CategoryId::new(5)), &categories, 1);
        assert_eq!(known.title, "Batom");

        let unknown = CatalogHeading::new(Some(CategoryId::new(8)), &categories, 0);
        assert_eq!(unknown.title, "Produtos");
    }
}
