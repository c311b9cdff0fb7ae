//! Shopping cart module.
//!
//! Line items are keyed by product; the header badge shows their total quantity.

mod cart;

pub use cart::{Cart, CartItem, MAX_QUANTITY_PER_ITEM};
