//! Presentation rules for product cards and detail pages.
//!
//! The storefront renders nothing itself; these views carry the decisions a
//! renderer needs (labels, fallbacks, call-to-action) as plain data.

use serde::Serialize;

use crate::types::{Product, ProductId};

/// Category label used when a product has no category.
pub const DEFAULT_CATEGORY_LABEL: &str = "Geral";
/// Image shown when a product has no picture.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200?text=Sem+Imagem";
/// Notice shown next to partner prices.
pub const AFFILIATE_PRICE_NOTICE: &str = "Preço sujeito a alteração";
/// Badge shown on partner listings.
pub const AFFILIATE_BADGE: &str = "Parceiro";

/// What the card's button does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum CallToAction {
    /// Open the partner offer in a new tab.
    #[serde(rename_all = "camelCase")]
    ExternalOffer { label: &'static str, url: String },
    /// Add to the store's own cart.
    #[serde(rename_all = "camelCase")]
    AddToCart { label: &'static str },
}

impl CallToAction {
    /// Partner listings with a link go out; everything else goes to the cart.
    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        match (&product.affiliate_url, product.is_affiliate()) {
            (Some(url), true) => Self::ExternalOffer {
                label: "Ver Oferta",
                url: url.clone(),
            },
            _ => Self::AddToCart {
                label: "Adicionar ao carrinho",
            },
        }
    }
}

/// Product card data for the catalog grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category_label: String,
    pub image_url: String,
    pub price_label: Option<String>,
    pub badge: Option<&'static str>,
    pub price_notice: Option<&'static str>,
    pub call_to_action: CallToAction,
    pub detail_path: String,
}

impl ProductCard {
    #[must_use]
    pub fn new(product: &Product) -> Self {
        let affiliate = product.is_affiliate();

        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            brand: product.brand.clone(),
            category_label: primary_category(product).to_string(),
            image_url: image_url(product).to_string(),
            price_label: product.price.map(|p| p.to_string()),
            badge: affiliate.then_some(AFFILIATE_BADGE),
            price_notice: affiliate.then_some(AFFILIATE_PRICE_NOTICE),
            call_to_action: CallToAction::for_product(product),
            detail_path: format!("/products/{}", product.id),
        }
    }
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self::new(product)
    }
}

/// First category's name, or the generic label.
#[must_use]
pub fn primary_category(product: &Product) -> &str {
    product
        .categories
        .first()
        .map_or(DEFAULT_CATEGORY_LABEL, |c| c.name.as_str())
}

/// Product picture, or the placeholder.
#[must_use]
pub fn image_url(product: &Product) -> &str {
    product
        .img_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE_URL)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::{CategoryId, CategoryRef, Price, ProductType};

    fn product(product_type: ProductType) -> Product {
        Product {
            id: ProductId::new(8),
            name: "Paleta Nude".to_string(),
            description: "12 cores".to_string(),
            brand: "Ruby Rose".to_string(),
            categories: Vec::new(),
            price: Some(Price::new(Decimal::new(5990, 2))),
            is_featured: false,
            product_type,
            img_url: None,
            affiliate_url: None,
        }
    }

    #[test]
    fn test_physical_card() {
        let card = ProductCard::new(&product(ProductType::Physical));

        assert_eq!(card.category_label, "Geral");
        assert_eq!(card.image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(card.price_label.as_deref(), Some("R$ 59.90"));
        assert_eq!(card.badge, None);
        assert_eq!(card.detail_path, "/products/8");
        assert!(matches!(card.call_to_action, CallToAction::AddToCart { .. }));
    }

    #[test]
    fn test_affiliate_card_links_out() {
        let mut affiliate = product(ProductType::Affiliate);
        affiliate.affiliate_url = Some("https://partner.example/paleta".to_string());
        affiliate.price = None;
        affiliate.categories.push(CategoryRef {
            id: CategoryId::new(2),
            name: "Olhos".to_string(),
        });

        let card = ProductCard::new(&affiliate);
        assert_eq!(card.category_label, "Olhos");
        assert_eq!(card.price_label, None);
        assert_eq!(card.badge, Some("Parceiro"));
        assert_eq!(card.price_notice, Some(AFFILIATE_PRICE_NOTICE));
        assert_eq!(
            card.call_to_action,
            CallToAction::ExternalOffer {
                label: "Ver Oferta",
                url: "https://partner.example/paleta".to_string()
            }
        );
    }

    #[test]
    fn test_affiliate_without_link_falls_back_to_cart() {
        let card = ProductCard::new(&product(ProductType::Affiliate));
        assert!(matches!(card.call_to_action, CallToAction::AddToCart { .. }));
    }

    #[test]
    fn test_blank_image_uses_placeholder() {
        let mut p = product(ProductType::Digital);
        p.img_url = Some("  ".to_string());
        assert_eq!(image_url(&p), PLACEHOLDER_IMAGE_URL);

        p.img_url = Some("https://cdn.example/p.jpg".to_string());
        assert_eq!(image_url(&p), "https://cdn.example/p.jpg");
    }
}
