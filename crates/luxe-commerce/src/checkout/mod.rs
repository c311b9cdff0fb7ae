//! Checkout module.
//!
//! Single-product, cash-on-delivery checkout: a draft form, its validation,
//! and the order-placed event handed to an [`OrderSink`].

mod form;
mod order;

pub use form::{CheckoutController, CheckoutField, CheckoutForm};
pub use order::{
    LoggingOrderSink, OrderPlaced, OrderSink, PaymentMethod, RecordingOrderSink,
    ORDER_ACKNOWLEDGEMENT,
};
