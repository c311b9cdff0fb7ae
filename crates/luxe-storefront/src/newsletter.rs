//! Newsletter signup on the home page.

use crate::error::StorefrontError;
use crate::html::escape;

/// The email subscription backend.
pub trait SubscriptionService {
    fn subscribe(&self, email: &str) -> Result<(), StorefrontError>;
}

/// Accepts every subscription and only logs it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSubscriptionService;

impl SubscriptionService for NoopSubscriptionService {
    fn subscribe(&self, email: &str) -> Result<(), StorefrontError> {
        tracing::info!(email, "newsletter subscription accepted");
        Ok(())
    }
}

/// Draft email and result of the last subscribe attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterSignup {
    email: String,
    subscribed: Option<String>,
    error: Option<String>,
}

impl NewsletterSignup {
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The last address that subscribed successfully.
    pub fn subscribed(&self) -> Option<&str> {
        self.subscribed.as_deref()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.error = None;
    }

    /// Validate the draft and hand it to the service.
    ///
    /// On success the draft is cleared and the address returned.
    pub fn subscribe(&mut self, service: &dyn SubscriptionService) -> Result<String, StorefrontError> {
        let email = self.email.trim().to_string();
        if !looks_like_email(&email) {
            self.error = Some("Please enter a valid email address.".to_string());
            return Err(StorefrontError::InvalidEmail(email));
        }

        service.subscribe(&email)?;
        self.email.clear();
        self.error = None;
        self.subscribed = Some(email.clone());
        Ok(email)
    }

    pub fn render(&self) -> String {
        let status = match (&self.subscribed, &self.error) {
            (_, Some(error)) => format!(r#"<p class="newsletter-error">{}</p>"#, escape(error)),
            (Some(_), None) => {
                r#"<p class="newsletter-success">Thanks for subscribing!</p>"#.to_string()
            }
            (None, None) => String::new(),
        };

        format!(
            r#"<section class="newsletter" data-section="newsletter">
    <h2>Join Our Newsletter</h2>
    <p>Subscribe to receive updates, access to exclusive deals, and more.</p>
    <form class="newsletter-form" data-action="subscribe">
        <input type="email" name="email" placeholder="Enter your email" value="{}" required>
        <button type="submit">Subscribe</button>
    </form>
    {}
</section>"#,
            escape(&self.email),
            status
        )
    }
}

/// Minimal shape check: text on both sides of a single `@`, a dot in the domain.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct CapturingService {
        emails: RefCell<Vec<String>>,
    }

    impl SubscriptionService for CapturingService {
        fn subscribe(&self, email: &str) -> Result<(), StorefrontError> {
            self.emails.borrow_mut().push(email.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("jane@example.com"));
        assert!(!looks_like_email(""));
        assert!(!looks_like_email("jane"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("jane@localhost"));
        assert!(!looks_like_email("jane@@example.com"));
        assert!(!looks_like_email("jane doe@example.com"));
    }

    #[test]
    fn test_subscribe_clears_draft() {
        let service = CapturingService::default();
        let mut signup = NewsletterSignup::default();
        signup.set_email(" jane@example.com ");

        let email = signup.subscribe(&service).unwrap();

        assert_eq!(email, "jane@example.com");
        assert_eq!(signup.email(), "");
        assert_eq!(signup.subscribed(), Some("jane@example.com"));
        assert_eq!(*service.emails.borrow(), vec!["jane@example.com".to_string()]);
        assert!(signup.render().contains("Thanks for subscribing!"));
    }

    #[test]
    fn test_invalid_email_not_sent() {
        let service = CapturingService::default();
        let mut signup = NewsletterSignup::default();
        signup.set_email("not-an-email");

        let err = signup.subscribe(&service).unwrap_err();

        assert!(matches!(err, StorefrontError::InvalidEmail(_)));
        assert!(err.is_recoverable());
        assert!(service.emails.borrow().is_empty());
        assert_eq!(signup.email(), "not-an-email");
        assert!(signup.render().contains("newsletter-error"));
    }
}
