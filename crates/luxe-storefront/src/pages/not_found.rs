//! Not-found pages for unresolved ids and unmatched paths.

use luxe_commerce::navigation::NotFound;

use crate::html::escape;

/// Not-found branch for a category or product id that did not resolve.
pub fn render_missing_entity(miss: &NotFound) -> String {
    format!(
        r#"<section class="not-found" data-kind="{}" data-id="{}">
    <h1>{}</h1>
    <a href="/">Back to Home</a>
</section>"#,
        miss.kind,
        escape(&miss.id),
        miss.kind.not_found_message()
    )
}

/// 404 page for a path no route matches.
pub fn render_missing_route(path: &str) -> String {
    format!(
        r#"<section class="not-found" data-path="{}">
    <h1>404</h1>
    <p>Page not found</p>
    <a href="/">Back to Home</a>
</section>"#,
        escape(path)
    )
}
