//! Compiled-in catalog store.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::catalog::{Category, Feature, Product, Slide, SocialLink};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;

static SEED: LazyLock<CatalogStore> = LazyLock::new(CatalogStore::seed);

const UNSPLASH: &str = "https://images.unsplash.com";

/// Read-only reference data for the storefront.
///
/// Sequences keep their definition order; that order is the display order
/// for listings and the rotation order for slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStore {
    categories: Vec<Category>,
    products: Vec<Product>,
    slides: Vec<Slide>,
    features: Vec<Feature>,
    social_links: Vec<SocialLink>,
}

impl CatalogStore {
    /// Build a store from explicit sequences.
    pub fn new(
        categories: Vec<Category>,
        products: Vec<Product>,
        slides: Vec<Slide>,
        features: Vec<Feature>,
        social_links: Vec<SocialLink>,
    ) -> Self {
        Self {
            categories,
            products,
            slides,
            features,
            social_links,
        }
    }

    /// The shared seed store.
    pub fn global() -> &'static CatalogStore {
        &SEED
    }

    /// Build the seed data shipped with the storefront.
    pub fn seed() -> Self {
        let image = |path: &str, width: u32| {
            format!("{UNSPLASH}/{path}?auto=format&fit=crop&q=80&w={width}")
        };

        let slides = vec![
            Slide::new(
                &image("photo-1445205170230-053b83016050", 1920),
                "Summer Collection 2024",
                "Discover timeless elegance",
            ),
            Slide::new(
                &image("photo-1469334031218-e382a71b716b", 1920),
                "Luxury Essentials",
                "Curated for sophistication",
            ),
            Slide::new(
                &image("photo-1441984904996-e0b6ba687e04", 1920),
                "Autumn Styles",
                "Embrace the season",
            ),
        ];

        let categories = vec![
            Category::new("men", "Men", image("photo-1617137968427-85924c800a22", 600)),
            Category::new("women", "Women", image("photo-1618244972963-dbee1a7edc95", 600)),
            Category::new("children", "Children", image("photo-1622290291468-a28f7a7dc6a8", 600)),
            Category::new(
                "accessories",
                "Accessories",
                image("photo-1614164185128-e4ec99c436d7", 600),
            ),
        ];

        let products = vec![
            Product::new("1", "men", "Classic White Shirt", Money::usd(8999))
                .with_image(image("photo-1521572163474-6864f9cf17ab", 800))
                .with_description("Premium cotton dress shirt perfect for any occasion"),
            Product::new("2", "men", "Navy Blazer", Money::usd(29999))
                .with_image(image("photo-1555069519-127aadedf1ee", 800))
                .with_description("Tailored fit blazer in premium wool blend"),
            Product::new("3", "women", "Floral Dress", Money::usd(15999))
                .with_image(image("photo-1572804013309-59a88b7e92f1", 800))
                .with_description("Elegant floral print dress perfect for summer"),
            Product::new("4", "women", "Leather Handbag", Money::usd(19999))
                .with_image(image("photo-1584917865442-de89df76afd3", 800))
                .with_description("Premium leather handbag with gold hardware"),
            Product::new("5", "children", "Kids Denim Set", Money::usd(7999))
                .with_image(image("photo-1519457431-44ccd64a579b", 800))
                .with_description("Comfortable denim set for active kids"),
            Product::new("6", "accessories", "Leather Watch", Money::usd(24999))
                .with_image(image("photo-1524592094714-0f0654e20314", 800))
                .with_description("Classic leather watch with silver case"),
        ];

        let features = vec![
            Feature::new("trending-up", "Premium Quality", "Finest materials & craftsmanship"),
            Feature::new("package", "Free Shipping", "On orders over $200"),
            Feature::new("refresh-cw", "Easy Returns", "30-day return policy"),
            Feature::new("clock", "24/7 Support", "Always here to help"),
        ];

        let social_links = vec![
            SocialLink::new("facebook", "https://facebook.com"),
            SocialLink::new("instagram", "https://instagram.com"),
            SocialLink::new("twitter", "https://twitter.com"),
            SocialLink::new("youtube", "https://youtube.com"),
        ];

        Self::new(categories, products, slides, features, social_links)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }

    /// Look up a category; `None` when the id is unknown.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Look up a product; `None` when the id is unknown.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products in a category, in catalog order.
    pub fn products_in(&self, category_id: &CategoryId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_in(category_id))
            .collect()
    }

    /// The first `limit` products, shown as featured on the home page.
    pub fn featured(&self, limit: usize) -> &[Product] {
        &self.products[..limit.min(self.products.len())]
    }

    /// Check the reference-data invariants.
    ///
    /// Ids must be unique, every product must point at a known category,
    /// prices must not be negative, and there must be at least one slide.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(&category.id) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate category id {}",
                    category.id
                )));
            }
        }

        let mut product_ids = HashSet::new();
        for product in &self.products {
            if !product_ids.insert(&product.id) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if !category_ids.contains(&product.category_id) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {} references unknown category {}",
                    product.id, product.category_id
                )));
            }
            if product.price.is_negative() {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {} has a negative price",
                    product.id
                )));
            }
        }

        if self.slides.is_empty() {
            return Err(CommerceError::InvalidCatalog("no slides defined".to_string()));
        }

        Ok(())
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::seed()
    }
}
