//! Resolving URL path segments to catalog entries.
//!
//! A miss is an ordinary outcome here: pages render an explicit not-found
//! branch instead of failing, so lookups return [`Resolved`] rather than a
//! `Result`.

use crate::catalog::{CatalogStore, Category, Product};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use serde::Serialize;
use std::fmt;

/// What kind of entity a path segment was expected to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Category,
    Product,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Category => "category",
            EntityKind::Product => "product",
        }
    }

    /// Heading shown on the not-found page.
    pub fn not_found_message(&self) -> &'static str {
        match self {
            EntityKind::Category => "Category not found",
            EntityKind::Product => "Product not found",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An id that did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFound {
    pub kind: EntityKind,
    pub id: String,
}

impl NotFound {
    fn into_error(self) -> CommerceError {
        match self.kind {
            EntityKind::Category => CommerceError::CategoryNotFound(self.id),
            EntityKind::Product => CommerceError::ProductNotFound(self.id),
        }
    }
}

/// Outcome of a path lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<T> {
    Found(T),
    NotFound(NotFound),
}

impl<T> Resolved<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolved::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        !self.is_found()
    }

    /// Discard the miss details.
    pub fn found(self) -> Option<T> {
        match self {
            Resolved::Found(value) => Some(value),
            Resolved::NotFound(_) => None,
        }
    }

    /// Turn a miss into the matching `CommerceError` for `?` call sites.
    pub fn into_result(self) -> Result<T, CommerceError> {
        match self {
            Resolved::Found(value) => Ok(value),
            Resolved::NotFound(miss) => Err(miss.into_error()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        match self {
            Resolved::Found(value) => Resolved::Found(f(value)),
            Resolved::NotFound(miss) => Resolved::NotFound(miss),
        }
    }
}

/// A category together with its products, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing<'a> {
    pub category: &'a Category,
    pub products: Vec<&'a Product>,
}

/// Pure lookups over a catalog store.
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    store: &'a CatalogStore,
}

impl<'a> Navigator<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// Navigator over the shared seed catalog.
    pub fn global() -> Navigator<'static> {
        Navigator::new(CatalogStore::global())
    }

    pub fn store(&self) -> &'a CatalogStore {
        self.store
    }

    pub fn resolve_category(&self, id: &str) -> Resolved<&'a Category> {
        match self.store.category(&CategoryId::new(id)) {
            Some(category) => Resolved::Found(category),
            None => Resolved::NotFound(NotFound {
                kind: EntityKind::Category,
                id: id.to_string(),
            }),
        }
    }

    pub fn resolve_product(&self, id: &str) -> Resolved<&'a Product> {
        match self.store.product(&ProductId::new(id)) {
            Some(product) => Resolved::Found(product),
            None => Resolved::NotFound(NotFound {
                kind: EntityKind::Product,
                id: id.to_string(),
            }),
        }
    }

    /// Resolve a category and collect its products.
    pub fn category_listing(&self, id: &str) -> Resolved<CategoryListing<'a>> {
        let store = self.store;
        self.resolve_category(id).map(|category| CategoryListing {
            category,
            products: store.products_in(&category.id),
        })
    }
}
