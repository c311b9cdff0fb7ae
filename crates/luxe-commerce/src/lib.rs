//! Catalog, cart and checkout domain for the LUXE storefront.
//!
//! This crate holds everything the storefront needs that has invariants worth
//! testing, with no rendering and no I/O:
//!
//! - **Catalog**: compiled-in categories, products, slides and feature blurbs
//! - **Navigation**: resolving path segments to categories and products
//! - **Cart**: line items keyed by product, with a derived item count
//! - **Checkout**: a single-product cash-on-delivery draft order
//!
//! # Example
//!
//! ```rust
//! use luxe_commerce::prelude::*;
//!
//! let store = CatalogStore::global();
//! let shirt = store.product(&ProductId::new("1")).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add(shirt, 2).unwrap();
//! assert_eq!(cart.total_item_count(), 2);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod navigation;
pub mod cart;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{CatalogStore, Category, Feature, Product, Slide, SocialLink};

    // Navigation
    pub use crate::navigation::{CategoryListing, EntityKind, Navigator, NotFound, Resolved};

    // Cart
    pub use crate::cart::{Cart, CartItem, MAX_QUANTITY_PER_ITEM};

    // Checkout
    pub use crate::checkout::{
        CheckoutController, CheckoutField, CheckoutForm, LoggingOrderSink, OrderPlaced,
        OrderSink, PaymentMethod, RecordingOrderSink,
    };
}
