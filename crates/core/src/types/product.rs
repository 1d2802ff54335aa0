//! Catalog entities as delivered by the store backend.
//!
//! Field names follow the backend's camelCase JSON so these types can be
//! decoded straight from API responses and re-emitted unchanged.

use serde::{Deserialize, Serialize};

use super::id::{BrandId, CategoryId, ProductId};
use super::price::Price;

/// How a product is sold.
///
/// Only affects price display and the call-to-action. Filtering ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    /// Shipped by the store.
    #[default]
    Physical,
    /// Sold by a partner; the store links out and the price is indicative.
    Affiliate,
    /// Course or other downloadable content.
    Digital,
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Physical => write!(f, "PHYSICAL"),
            Self::Affiliate => write!(f, "AFFILIATE"),
            Self::Digital => write!(f, "DIGITAL"),
        }
    }
}

/// A category reference embedded in a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub name: String,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Free-text brand name. Matched by normalized text, not by id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<CategoryRef>,
    /// Absent for affiliate listings priced by the partner.
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(rename = "type", default)]
    pub product_type: ProductType,
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(default)]
    pub affiliate_url: Option<String>,
}

impl Product {
    /// Whether the product belongs to the given category.
    #[must_use]
    pub fn in_category(&self, id: CategoryId) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    /// Whether the product links out to a partner store.
    #[must_use]
    pub fn is_affiliate(&self) -> bool {
        self.product_type == ProductType::Affiliate
    }
}

/// A category as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A brand as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_backend_json() {
        let json = r#"{
            "id": 3,
            "name": "Batom Matte",
            "description": "Longa duração",
            "brand": null,
            "price": 39.9,
            "isFeatured": true,
            "type": "AFFILIATE",
            "imgUrl": "https://cdn.example/batom.jpg",
            "affiliateUrl": "https://partner.example/batom",
            "categories": [{"id": 5, "name": "Batom"}]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.brand, "");
        assert!(product.is_featured);
        assert!(product.is_affiliate());
        assert!(product.in_category(CategoryId::new(5)));
        assert!(!product.in_category(CategoryId::new(6)));
        assert_eq!(product.price.map(|p| p.to_string()).as_deref(), Some("R$ 39.90"));
    }

    #[test]
    fn test_product_defaults_for_sparse_json() {
        let product: Product = serde_json::from_str(r#"{"id": 1, "name": "Pó"}"#).unwrap();
        assert_eq!(product.product_type, ProductType::Physical);
        assert!(product.categories.is_empty());
        assert!(product.price.is_none());
        assert!(!product.is_featured);
    }

    #[test]
    fn test_product_list_decodes_null_fields() {
        let json = r#"[{
            "id": 1,
            "name": "Batom",
            "brand": "Vult",
            "description": null,
            "categories": null,
            "price": null,
            "type": "PHYSICAL"
        }]"#;

        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        let product = products.first().unwrap();
        assert_eq!(product.description, "");
        assert_eq!(product.brand, "Vult");
        assert!(product.categories.is_empty());
        assert!(product.price.is_none());
    }
}
