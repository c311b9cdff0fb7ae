//! Site header: brand, category navigation, cart badge and mobile menu.

use luxe_commerce::catalog::Category;

use crate::html::escape;

/// Header UI state that outlives page changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    menu_open: bool,
}

impl HeaderState {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Flip the mobile menu. Returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Following a menu link closes the menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Render the header.
///
/// The cart badge is only drawn when the cart holds at least one item.
pub fn render_header(
    brand: &str,
    categories: &[Category],
    cart_count: u64,
    state: &HeaderState,
) -> String {
    let nav_links: String = categories
        .iter()
        .map(|c| {
            format!(
                r#"<a href="{}" class="nav-link">{}</a>"#,
                escape(&c.href()),
                escape(&c.name)
            )
        })
        .collect();

    let badge = if cart_count > 0 {
        format!(r#"<span class="cart-badge">{}</span>"#, cart_count)
    } else {
        String::new()
    };

    let (menu_icon, mobile_menu) = if state.menu_open() {
        (
            "x",
            format!(
                r#"<nav class="mobile-menu" data-menu="open">{}</nav>"#,
                nav_links
            ),
        )
    } else {
        ("menu", String::new())
    };

    format!(
        r#"<header class="site-header">
    <div class="header-bar">
        <a href="/" class="logo">{brand}</a>
        <nav class="desktop-nav">{nav_links}</nav>
        <div class="header-actions">
            <button class="icon-button" data-icon="search" aria-label="Search"></button>
            <button class="icon-button" data-icon="heart" aria-label="Wishlist"></button>
            <a href="/cart" class="icon-button cart-link" data-icon="shopping-cart" aria-label="Cart">{badge}</a>
            <button class="icon-button" data-icon="user" aria-label="Account"></button>
            <button class="icon-button menu-toggle" data-icon="{menu_icon}" data-action="toggle-menu" aria-expanded="{expanded}"></button>
        </div>
    </div>
    {mobile_menu}
</header>"#,
        brand = escape(brand),
        nav_links = nav_links,
        badge = badge,
        menu_icon = menu_icon,
        expanded = state.menu_open(),
        mobile_menu = mobile_menu,
    )
}
