//! Home page and category pages: heading, filters, product grid, carousel.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use remakeup_core::catalog::{CatalogBrowser, CatalogHeading, FilterCriteria};
use remakeup_core::display::ProductCard;
use remakeup_core::meta::PageMeta;
use remakeup_core::{BrandId, Category, CategoryId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::autoplay::CarouselSnapshot;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Filter value the shop UI sends for "no filter".
const ALL: &str = "all";

/// Query parameters of the home page.
///
/// `category` and `brand` accept `all` (or nothing) for "no filter".
/// `page` is zero-based and clamped to the last page.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub category: Option<String>,
    pub brand: Option<String>,
    pub q: Option<String>,
    pub page: Option<usize>,
}

impl HomeQuery {
    fn criteria(&self) -> Result<FilterCriteria> {
        let category = match selected(self.category.as_deref()) {
            Some(raw) => Some(
                raw.parse::<CategoryId>()
                    .map_err(|_| AppError::BadRequest(format!("invalid category '{raw}'")))?,
            ),
            None => None,
        };

        Ok(FilterCriteria {
            category,
            brand: selected(self.brand.as_deref()).map(String::from),
            search: self.q.clone(),
        })
    }
}

fn selected(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
}

/// Brand filter option with its logo made absolute.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandOption {
    pub id: BrandId,
    pub name: String,
    pub logo_url: Option<String>,
}

/// Where the shopper is in the filtered catalog.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_index: usize,
    pub total_pages: usize,
    pub total_matching: usize,
    pub next_href: Option<String>,
    pub prev_href: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub meta: PageMeta,
    pub heading: CatalogHeading,
    pub criteria: FilterCriteria,
    pub categories: Vec<Category>,
    pub brands: Vec<BrandOption>,
    pub products: Vec<ProductCard>,
    pub pagination: Pagination,
    pub carousel: CarouselSnapshot,
}

/// `GET /`
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Result<Json<HomePage>> {
    let criteria = query.criteria()?;
    render(&state, criteria, query.page.unwrap_or_default()).await
}

/// `GET /categoria/{id}`: the home page with the category preselected.
#[instrument(skip(state))]
pub async fn category(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Query(query): Query<HomeQuery>,
) -> Result<Json<HomePage>> {
    let criteria = FilterCriteria {
        category: Some(id),
        ..query.criteria()?
    };
    render(&state, criteria, query.page.unwrap_or_default()).await
}

async fn render(state: &AppState, criteria: FilterCriteria, page: usize) -> Result<Json<HomePage>> {
    let snapshot = state.catalog().snapshot().await?;

    let browser = CatalogBrowser::at(criteria, page, state.config().catalog.page_size);
    let view = browser.view(&snapshot.products);
    let criteria = browser.criteria();

    let pagination = Pagination {
        page_index: view.page_index,
        total_pages: view.total_pages,
        total_matching: view.total_matching,
        next_href: view.has_next.then(|| page_href(criteria, view.page_index + 1)),
        prev_href: view
            .has_prev
            .then(|| page_href(criteria, view.page_index.saturating_sub(1))),
    };

    let brands = snapshot
        .brands
        .iter()
        .map(|b| BrandOption {
            id: b.id,
            name: b.name.clone(),
            logo_url: state.backend().resolve_logo_url(b.logo_url.as_deref()),
        })
        .collect();

    Ok(Json(HomePage {
        meta: PageMeta::home(),
        heading: CatalogHeading::new(criteria.category, &snapshot.categories, view.total_matching),
        criteria: criteria.clone(),
        categories: snapshot.categories.clone(),
        brands,
        products: view.items.iter().copied().map(ProductCard::from).collect(),
        pagination,
        carousel: state.autoplay().snapshot(),
    }))
}

/// Home link for another page of the same filtered view.
fn page_href(criteria: &FilterCriteria, page: usize) -> String {
    let mut params = Vec::new();
    if let Some(category) = criteria.category {
        params.push(format!("category={category}"));
    }
    if let Some(brand) = criteria.brand.as_deref().filter(|b| !b.trim().is_empty()) {
        params.push(format!("brand={}", urlencoding::encode(brand.trim())));
    }
    if let Some(q) = criteria.search.as_deref().filter(|q| !q.trim().is_empty()) {
        params.push(format!("q={}", urlencoding::encode(q.trim())));
    }
    params.push(format!("page={page}"));
    format!("/?{}", params.join("&"))
}
