//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Category this product belongs to.
    pub category_id: CategoryId,
    /// Product name.
    pub name: String,
    /// Unit price, never negative.
    pub price: Money,
    /// Product image URL.
    pub image: String,
    /// Short marketing description.
    pub description: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        category_id: impl Into<CategoryId>,
        name: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            name: name.into(),
            price,
            image: String::new(),
            description: String::new(),
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Path of the single-product checkout page.
    pub fn checkout_href(&self) -> String {
        format!("/checkout/{}", self.id)
    }

    /// Check whether the product belongs to a category.
    pub fn is_in(&self, category_id: &CategoryId) -> bool {
        &self.category_id == category_id
    }
}
