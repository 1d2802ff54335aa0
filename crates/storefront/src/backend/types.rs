//! Request and response bodies specific to the backend API.
//!
//! Entities themselves (`Product`, `Category`, `Brand`) come from
//! `remakeup_core`; this module only holds the write payloads and the list
//! envelope.

use remakeup_core::{CategoryId, Price, ProductType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// List endpoints answer either with a bare array or with a Spring-style
/// page object whose items sit under `content`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListResponse<T> {
    Bare(Vec<T>),
    Paged { content: Vec<T> },
}

impl<T> ListResponse<T> {
    pub(crate) fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) => items,
            Self::Paged { content } => content,
        }
    }
}

/// Validation failures for admin write payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("price cannot be negative")]
    NegativePrice,
    #[error("affiliate products need an affiliate URL")]
    MissingAffiliateUrl,
}

/// Reference to a category by id, as the backend expects on writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryIdRef {
    pub id: CategoryId,
}

/// Body for creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate_url: Option<String>,
    #[serde(rename = "type", default)]
    pub product_type: ProductType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryIdRef>,
}

impl ProductInput {
    /// Trim text fields and check the payload before it is sent.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validated(mut self) -> Result<Self, InputError> {
        self.name = self.name.trim().to_string();
        self.description = self.description.trim().to_string();
        self.img_url = non_blank(self.img_url);
        self.affiliate_url = non_blank(self.affiliate_url);
        self.brand = non_blank(self.brand);

        if self.name.is_empty() {
            return Err(InputError::Required("name"));
        }
        if self.price.is_some_and(|p| p.amount().is_sign_negative()) {
            return Err(InputError::NegativePrice);
        }
        if self.product_type == ProductType::Affiliate && self.affiliate_url.is_none() {
            return Err(InputError::MissingAffiliateUrl);
        }
        Ok(self)
    }
}

/// Body for creating or renaming a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
}

impl CategoryInput {
    /// # Errors
    ///
    /// Returns [`InputError::Required`] for a blank name.
    pub fn validated(self) -> Result<Self, InputError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(InputError::Required("name"));
        }
        Ok(Self { name })
    }
}

/// Body for creating a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl BrandInput {
    /// # Errors
    ///
    /// Returns [`InputError::Required`] for a blank name.
    pub fn validated(self) -> Result<Self, InputError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(InputError::Required("name"));
        }
        Ok(Self {
            name,
            logo_url: non_blank(self.logo_url),
        })
    }
}

/// A brand logo file forwarded to the backend.
#[derive(Debug, Clone)]
pub struct LogoUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
