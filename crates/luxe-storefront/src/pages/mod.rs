//! Page renderers.
//!
//! Each page renders to an HTML fragment that the shell places under the
//! header inside the document body.

mod cart;
mod category;
mod checkout;
mod home;
mod not_found;

pub use cart::render_cart;
pub use category::render_category;
pub use checkout::{render_checkout, CheckoutStatus};
pub use home::{render_home, HomePage};
pub use not_found::{render_missing_entity, render_missing_route};

use luxe_commerce::catalog::Product;

use crate::html::escape;

/// Product tile with "Buy Now" and "Add to cart" actions.
pub(crate) fn product_card(product: &Product) -> String {
    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <div class="product-media">
        <img src="{image}" alt="{name}">
        <a href="{checkout}" class="btn buy-now">Buy Now</a>
    </div>
    <div class="product-info">
        <h3>{name}</h3>
        <p class="product-description">{description}</p>
        <p class="price">{price}</p>
        <button class="btn add-to-cart" data-action="add-to-cart" data-product-id="{id}">Add to cart</button>
    </div>
</article>"#,
        id = escape(product.id.as_str()),
        image = escape(&product.image),
        name = escape(&product.name),
        checkout = escape(&product.checkout_href()),
        description = escape(&product.description),
        price = escape(&product.price.display()),
    )
}
