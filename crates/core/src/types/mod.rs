//! Core types for ReMakeup Store.
//!
//! This module provides type-safe wrappers for catalog entities.

pub mod id;
pub mod price;
pub mod product;

pub use id::*;
pub use price::Price;
pub use product::{Brand, Category, CategoryRef, Product, ProductType};
