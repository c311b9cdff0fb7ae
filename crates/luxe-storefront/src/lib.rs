//! Storefront shell for LUXE: routing, the hero carousel, page rendering and
//! the per-session state that ties them together.
//!
//! The domain types live in [`luxe_commerce`]; this crate decides which page
//! is showing, owns the cart for the session and renders HTML.
//!
//! # Example
//!
//! ```rust
//! use luxe_storefront::prelude::*;
//!
//! let mut shell = Shell::new(StorefrontConfig::default()).unwrap();
//! shell.navigate("/checkout/42").unwrap();
//!
//! assert!(shell.render_page().unwrap().contains("Product not found"));
//! ```

pub mod error;
pub mod config;
pub mod html;
pub mod routes;

pub mod carousel;
pub mod header;
pub mod newsletter;
pub mod pages;
pub mod shell;

pub use error::StorefrontError;
pub use shell::{Outcome, Shell, ShellBuilder, ShellEvent, View};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::carousel::{AutoRotation, Carousel, SlideRotator, DEFAULT_ROTATION_INTERVAL};
    pub use crate::config::{generate_default_config, LogFormat, StorefrontConfig};
    pub use crate::error::StorefrontError;
    pub use crate::header::HeaderState;
    pub use crate::newsletter::{NewsletterSignup, NoopSubscriptionService, SubscriptionService};
    pub use crate::pages::CheckoutStatus;
    pub use crate::routes::Route;
    pub use crate::shell::{Outcome, Shell, ShellBuilder, ShellEvent, View};

    pub use luxe_commerce::prelude::*;
}
