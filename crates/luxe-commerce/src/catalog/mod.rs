//! Product catalog module.
//!
//! Contains the reference data types and the read-only store that serves them.

mod category;
mod content;
mod product;
mod store;

pub use category::Category;
pub use content::{Feature, Slide, SocialLink};
pub use product::Product;
pub use store::CatalogStore;
