//! CLI command implementations.

pub mod catalog;
pub mod sitemap;
