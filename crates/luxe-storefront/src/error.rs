//! Error types for the storefront shell.

use luxe_commerce::CommerceError;
use thiserror::Error;

/// Errors that can occur while driving the storefront.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Domain error (lookup miss, checkout validation, cart limits).
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// The event has no meaning for the page currently shown.
    #[error("{event} does not apply to the {view} page")]
    EventNotApplicable {
        event: &'static str,
        view: &'static str,
    },

    /// Slide index outside the carousel.
    #[error("Slide {index} out of range (carousel has {count} slides)")]
    InvalidSlide { index: usize, count: usize },

    /// A carousel needs at least one slide.
    #[error("Carousel has no slides")]
    EmptyCarousel,

    /// Newsletter email rejected.
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error while reading or writing configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorefrontError {
    /// Whether the buyer can fix this by correcting their input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StorefrontError::Commerce(CommerceError::ValidationFailed { .. })
                | StorefrontError::InvalidEmail(_)
        )
    }
}
