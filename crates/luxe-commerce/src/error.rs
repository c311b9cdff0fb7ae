//! Commerce error types.

use crate::checkout::CheckoutField;
use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// One or more required checkout fields were left empty.
    #[error("Missing required fields: {}", join_fields(.missing))]
    ValidationFailed { missing: Vec<CheckoutField> },

    /// Unknown checkout form field name.
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(u64, u32),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// The reference data breaks one of its own invariants.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl CommerceError {
    /// Whether this error is a missing-entity lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CommerceError::ProductNotFound(_) | CommerceError::CategoryNotFound(_)
        )
    }
}

fn join_fields(fields: &[CheckoutField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
