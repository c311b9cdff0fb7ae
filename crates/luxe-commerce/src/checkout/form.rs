//! Draft order form and its controller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::checkout::{OrderPlaced, OrderSink};
use crate::error::CommerceError;

/// A required buyer field on the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutField {
    Name,
    Address,
    Phone,
    Email,
}

impl CheckoutField {
    /// All fields in form order.
    pub const ALL: [CheckoutField; 4] = [
        CheckoutField::Name,
        CheckoutField::Address,
        CheckoutField::Phone,
        CheckoutField::Email,
    ];

    /// Form input name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutField::Name => "name",
            CheckoutField::Address => "address",
            CheckoutField::Phone => "phone",
            CheckoutField::Email => "email",
        }
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            CheckoutField::Name => "Full Name",
            CheckoutField::Address => "Delivery Address",
            CheckoutField::Phone => "Phone Number",
            CheckoutField::Email => "Email",
        }
    }
}

impl fmt::Display for CheckoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckoutField {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckoutField::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::UnknownField(s.to_string()))
    }
}

/// Buyer-supplied fields for a single purchase.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutForm {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl CheckoutForm {
    pub fn get(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::Name => &self.name,
            CheckoutField::Address => &self.address,
            CheckoutField::Phone => &self.phone,
            CheckoutField::Email => &self.email,
        }
    }

    fn slot(&mut self, field: CheckoutField) -> &mut String {
        match field {
            CheckoutField::Name => &mut self.name,
            CheckoutField::Address => &mut self.address,
            CheckoutField::Phone => &mut self.phone,
            CheckoutField::Email => &mut self.email,
        }
    }

    /// Required fields that are empty or whitespace, in form order.
    pub fn missing_fields(&self) -> Vec<CheckoutField> {
        CheckoutField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }
}

/// Owns the draft form for one checkout page visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutController {
    product: Product,
    draft: CheckoutForm,
}

impl CheckoutController {
    /// Start an empty draft for a product.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            draft: CheckoutForm::default(),
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn draft(&self) -> &CheckoutForm {
        &self.draft
    }

    /// Update exactly one field.
    pub fn set_field(&mut self, field: CheckoutField, value: impl Into<String>) {
        *self.draft.slot(field) = value.into();
    }

    pub fn missing_fields(&self) -> Vec<CheckoutField> {
        self.draft.missing_fields()
    }

    /// Validate and place the order.
    ///
    /// On success the event goes to `sink` exactly once and the draft is
    /// cleared. On failure nothing is emitted and the draft is kept so the
    /// buyer can correct it.
    pub fn submit(&mut self, sink: &dyn OrderSink) -> Result<OrderPlaced, CommerceError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            tracing::warn!(product_id = %self.product.id, ?missing, "checkout blocked");
            return Err(CommerceError::ValidationFailed { missing });
        }

        let form = std::mem::take(&mut self.draft);
        let order = OrderPlaced::new(self.product.clone(), form);
        sink.order_placed(&order);
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use crate::checkout::RecordingOrderSink;
    use crate::ids::ProductId;

    fn controller() -> CheckoutController {
        let product = CatalogStore::global()
            .product(&ProductId::new("2"))
            .cloned()
            .unwrap();
        CheckoutController::new(product)
    }

    fn fill(controller: &mut CheckoutController) {
        controller.set_field(CheckoutField::Name, "Jane Doe");
        controller.set_field(CheckoutField::Address, "1 Main St");
        controller.set_field(CheckoutField::Phone, "555-0100");
        controller.set_field(CheckoutField::Email, "jane@example.com");
    }

    #[test]
    fn test_new_draft_is_empty() {
        let controller = controller();
        assert_eq!(controller.draft(), &CheckoutForm::default());
        assert_eq!(controller.missing_fields(), CheckoutField::ALL.to_vec());
    }

    #[test]
    fn test_set_field_touches_one_field() {
        let mut controller = controller();
        controller.set_field(CheckoutField::Phone, "555-0100");

        assert_eq!(controller.draft().phone, "555-0100");
        assert!(controller.draft().name.is_empty());
        assert!(controller.draft().address.is_empty());
        assert!(controller.draft().email.is_empty());
    }

    #[test]
    fn test_submit_with_any_field_empty_emits_nothing() {
        for blank in CheckoutField::ALL {
            let mut controller = controller();
            fill(&mut controller);
            controller.set_field(blank, "");
            let sink = RecordingOrderSink::new();

            let err = controller.submit(&sink).unwrap_err();

            assert_eq!(err, CommerceError::ValidationFailed { missing: vec![blank] });
            assert!(sink.is_empty());
            assert_eq!(controller.missing_fields(), vec![blank]);
        }
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut controller = controller();
        fill(&mut controller);
        controller.set_field(CheckoutField::Address, "   ");

        let sink = RecordingOrderSink::new();
        assert!(controller.submit(&sink).is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_submit_emits_one_order_and_clears_draft() {
        let mut controller = controller();
        fill(&mut controller);
        let sink = RecordingOrderSink::new();

        let order = controller.submit(&sink).unwrap();

        let orders = sink.orders();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0], order);
        assert_eq!(order.product.id.as_str(), "2");
        assert_eq!(order.form.name, "Jane Doe");
        assert_eq!(order.form.address, "1 Main St");
        assert_eq!(order.form.phone, "555-0100");
        assert_eq!(order.form.email, "jane@example.com");
        assert_eq!(controller.draft(), &CheckoutForm::default());
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("email".parse::<CheckoutField>().unwrap(), CheckoutField::Email);
        assert_eq!(" Name ".parse::<CheckoutField>().unwrap(), CheckoutField::Name);
        assert_eq!(
            "zip".parse::<CheckoutField>().unwrap_err(),
            CommerceError::UnknownField("zip".to_string())
        );
    }
}
