//! Catalog filter engine.
//!
//! Pure functions over an already-loaded product list:
//!
//! - [`apply_filters`] keeps products matching every active criterion
//! - [`paginate`] cuts the result into fixed-size pages, clamping stale indexes
//! - [`CatalogBrowser`] holds a shopper's criteria and page position
//!
//! Text comparisons go through [`normalize`], which ignores case, accents and
//! surrounding whitespace.

mod browser;
mod filter;
mod normalize;
mod pagination;

pub use browser::{CatalogBrowser, CatalogHeading, CatalogPage};
pub use filter::{FilterCriteria, apply_filters};
pub use normalize::normalize;
pub use pagination::{DEFAULT_PAGE_SIZE, Page, paginate, total_pages};
