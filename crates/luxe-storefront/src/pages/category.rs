//! Category listing page.

use luxe_commerce::navigation::CategoryListing;

use super::product_card;
use crate::html::escape;

pub fn render_category(listing: &CategoryListing<'_>) -> String {
    let cards: String = listing.products.iter().map(|p| product_card(p)).collect();
    let body = if listing.products.is_empty() {
        r#"<p class="empty">No products in this category yet.</p>"#.to_string()
    } else {
        format!(r#"<div class="product-grid">{}</div>"#, cards)
    };

    format!(
        r#"<section class="category-page" data-category-id="{}">
    <h1>{}</h1>
    {}
</section>"#,
        escape(listing.category.id.as_str()),
        escape(&listing.category.name),
        body
    )
}
