//! ReMakeup Core - catalog and carousel engines.
//!
//! This crate provides the in-memory logic shared by every ReMakeup component:
//! - `storefront` - HTTP storefront and admin API in front of the store backend
//! - `cli` - Command-line tools for sitemap generation and catalog browsing
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no timers. Products are loaded elsewhere and handed in.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices and catalog entities
//! - [`catalog`] - Category/brand/search filtering and clamped pagination
//! - [`carousel`] - Promotional slide rotation with wraparound
//! - [`display`] - Product card presentation rules
//! - [`meta`] - Page title/description/robots metadata
//! - [`sitemap`] - sitemaps.org XML generation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod carousel;
pub mod catalog;
pub mod display;
pub mod meta;
pub mod sitemap;
pub mod types;

pub use types::*;
