//! Carousel slides.

use serde::Serialize;

use crate::types::Product;

/// The fixed banner that always opens the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    pub title: &'static str,
    pub tagline: &'static str,
    pub img_url: &'static str,
}

impl HeroSlide {
    pub const REMAKEUP: Self = Self {
        title: "ReMakeup Store",
        tagline: "Destaques do dia: ofertas especiais selecionadas para você.",
        img_url: "/hero-banner.jpg",
    };
}

impl Default for HeroSlide {
    fn default() -> Self {
        Self::REMAKEUP
    }
}

/// One carousel position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Slide {
    Hero(HeroSlide),
    Featured(Box<Product>),
}

impl Slide {
    /// Hero first, then every featured product in catalog order.
    #[must_use]
    pub fn sequence(products: &[Product]) -> Vec<Self> {
        std::iter::once(Self::Hero(HeroSlide::REMAKEUP))
            .chain(
                products
                    .iter()
                    .filter(|p| p.is_featured)
                    .map(|p| Self::Featured(Box::new(p.clone()))),
            )
            .collect()
    }

    #[must_use]
    pub const fn is_hero(&self) -> bool {
        matches!(self, Self::Hero(_))
    }

    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        match self {
            Self::Hero(_) => None,
            Self::Featured(product) => Some(product),
        }
    }
}
