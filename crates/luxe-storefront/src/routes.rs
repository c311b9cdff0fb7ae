//! Path routing for the storefront.
//!
//! | Path | Route |
//! |------|-------|
//! | `/` | [`Route::Home`] |
//! | `/category/{id}` | [`Route::Category`] |
//! | `/checkout/{id}` | [`Route::Checkout`] |
//! | `/cart` | [`Route::Cart`] |
//! | anything else | [`Route::NotFound`] |
//!
//! Ids are taken verbatim; whether they exist is decided later by the
//! navigator, so `/category/shoes` parses as a category route.

use std::fmt;

/// A parsed storefront path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Category(String),
    Checkout(String),
    Cart,
    NotFound(String),
}

impl Route {
    /// Parse a request path. Query strings, fragments and trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = bare.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["category", id] => Route::Category((*id).to_string()),
            ["checkout", id] => Route::Checkout((*id).to_string()),
            ["cart"] => Route::Cart,
            _ => Route::NotFound(bare.to_string()),
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Category(id) => format!("/category/{}", id),
            Route::Checkout(id) => format!("/checkout/{}", id),
            Route::Cart => "/cart".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Short name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Category(_) => "category",
            Route::Checkout(_) => "checkout",
            Route::Cart => "cart",
            Route::NotFound(_) => "not-found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/category/men"), Route::Category("men".into()));
        assert_eq!(Route::parse("/checkout/3"), Route::Checkout("3".into()));
        assert_eq!(Route::parse("/cart"), Route::Cart);
    }

    #[test]
    fn test_parse_ignores_trailing_slash_and_query() {
        assert_eq!(Route::parse("/category/women/"), Route::Category("women".into()));
        assert_eq!(Route::parse("/checkout/1?ref=hero"), Route::Checkout("1".into()));
        assert_eq!(Route::parse("/?utm=mail#top"), Route::Home);
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::parse("/about"), Route::NotFound("/about".into()));
        assert_eq!(Route::parse("/category"), Route::NotFound("/category".into()));
        assert_eq!(
            Route::parse("/category/men/extra"),
            Route::NotFound("/category/men/extra".into())
        );
    }

    #[test]
    fn test_path_is_canonical() {
        assert_eq!(Route::parse("/category/men/").path(), "/category/men");
        assert_eq!(Route::Home.to_string(), "/");
    }
}
