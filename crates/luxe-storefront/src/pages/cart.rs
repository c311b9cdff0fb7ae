//! Cart page.

use luxe_commerce::cart::Cart;
use luxe_commerce::CommerceError;

use crate::html::escape;

pub fn render_cart(cart: &Cart) -> Result<String, CommerceError> {
    if cart.is_empty() {
        return Ok(r#"<section class="cart-page">
    <h1>Your Cart</h1>
    <p>Your cart is empty.</p>
    <a href="/">Continue shopping</a>
</section>"#
            .to_string());
    }

    let mut rows = String::new();
    for item in cart.items() {
        rows.push_str(&format!(
            r#"<tr data-product-id="{id}">
            <td><img src="{image}" alt="{name}"> {name}</td>
            <td class="unit-price">{unit}</td>
            <td class="quantity">{quantity}</td>
            <td class="line-total">{total}</td>
            <td><button data-action="remove-from-cart" data-product-id="{id}">Remove</button></td>
        </tr>"#,
            id = escape(item.product_id.as_str()),
            image = escape(&item.image),
            name = escape(&item.name),
            unit = item.unit_price.display(),
            quantity = item.quantity,
            total = item.line_total()?.display(),
        ));
    }

    Ok(format!(
        r#"<section class="cart-page">
    <h1>Your Cart</h1>
    <table class="cart-lines">
        {}
    </table>
    <p class="cart-summary"><span class="item-count">{} items</span> <span class="subtotal">Subtotal: {}</span></p>
</section>"#,
        rows,
        cart.total_item_count(),
        cart.subtotal()?.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_commerce::catalog::CatalogStore;

    #[test]
    fn test_empty_cart() {
        let html = render_cart(&Cart::new()).unwrap();
        assert!(html.contains("Your cart is empty."));
    }

    #[test]
    fn test_cart_lines_and_totals() {
        let store = CatalogStore::global();
        let mut cart = Cart::new();
        cart.add(&store.products()[0], 1).unwrap();
        cart.add(&store.products()[2], 3).unwrap();

        let html = render_cart(&cart).unwrap();

        assert_eq!(html.matches("<tr data-product-id=").count(), 2);
        assert!(html.contains("4 items"));
        assert!(html.contains(r#"<td class="line-total">$479.97</td>"#));
        assert!(html.contains("Subtotal: $569.96"));
    }
}
