//! Order-placed events and the collaborators that receive them.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::checkout::CheckoutForm;
use crate::ids::OrderId;

/// Message shown to the buyer once an order is accepted.
pub const ORDER_ACKNOWLEDGEMENT: &str = "Order placed successfully! We will contact you soon.";

/// How the order will be paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

/// A submitted single-product order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderPlaced {
    pub order_id: OrderId,
    /// Product snapshot at submit time.
    pub product: Product,
    /// Buyer fields at submit time.
    pub form: CheckoutForm,
    pub payment: PaymentMethod,
    pub placed_at: DateTime<Utc>,
}

impl OrderPlaced {
    pub fn new(product: Product, form: CheckoutForm) -> Self {
        Self {
            order_id: OrderId::generate(),
            product,
            form,
            payment: PaymentMethod::CashOnDelivery,
            placed_at: Utc::now(),
        }
    }
}

/// Receives order-placed events.
///
/// Order management and notification live outside the storefront; this is
/// the seam where they plug in.
pub trait OrderSink {
    fn order_placed(&self, order: &OrderPlaced);
}

/// Logs each order through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingOrderSink;

impl OrderSink for LoggingOrderSink {
    fn order_placed(&self, order: &OrderPlaced) {
        tracing::info!(
            order_id = %order.order_id,
            product_id = %order.product.id,
            price = %order.product.price,
            buyer = %order.form.name,
            payment = order.payment.display_name(),
            "order placed"
        );
    }
}

/// Keeps every order it receives. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingOrderSink {
    orders: Arc<Mutex<Vec<OrderPlaced>>>,
}

impl RecordingOrderSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the received orders, oldest first.
    pub fn orders(&self) -> Vec<OrderPlaced> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<OrderPlaced>> {
        self.orders
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl OrderSink for RecordingOrderSink {
    fn order_placed(&self, order: &OrderPlaced) {
        self.lock().push(order.clone());
    }
}
