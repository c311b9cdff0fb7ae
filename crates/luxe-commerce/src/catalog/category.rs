//! Category types for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A top-level product grouping (Men, Women, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique category identifier, also its URL segment.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Cover image URL.
    pub image: String,
}

impl Category {
    /// Create a new category.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
        }
    }

    /// Path of the category listing page.
    pub fn href(&self) -> String {
        format!("/category/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_href() {
        let cat = Category::new("men", "Men", "https://example.com/men.jpg");
        assert_eq!(cat.href(), "/category/men");
        assert_eq!(cat.name, "Men");
    }
}
