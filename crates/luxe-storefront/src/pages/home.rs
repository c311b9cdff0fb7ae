//! Home page sections.

use luxe_commerce::catalog::{CatalogStore, Category, Feature, Product, Slide, SocialLink};

use super::product_card;
use crate::html::escape;
use crate::newsletter::NewsletterSignup;

/// Everything the home page needs to render.
#[derive(Debug, Clone, Copy)]
pub struct HomePage<'a> {
    pub store: &'a CatalogStore,
    pub brand: &'a str,
    pub slide_index: usize,
    pub featured_count: usize,
    pub newsletter: &'a NewsletterSignup,
}

pub fn render_home(page: &HomePage<'_>) -> String {
    [
        render_carousel(page.store.slides(), page.slide_index),
        render_featured(page.store.featured(page.featured_count)),
        render_spotlight(),
        render_category_grid(page.store.categories()),
        render_features(page.store.features()),
        page.newsletter.render(),
        render_footer(page.brand, page.store.social_links()),
    ]
    .join("\n")
}

/// Hero carousel; only the slide at `active` is visible.
fn render_carousel(slides: &[Slide], active: usize) -> String {
    let frames: String = slides
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            format!(
                r#"<div class="slide{active}" data-slide="{i}" aria-hidden="{hidden}">
            <img src="{image}" alt="{title}">
            <div class="slide-caption">
                <h2>{title}</h2>
                <p>{subtitle}</p>
                <a href="/category/women" class="btn">Shop Now</a>
            </div>
        </div>"#,
                active = if i == active { " active" } else { "" },
                hidden = i != active,
                i = i,
                image = escape(&slide.image),
                title = escape(&slide.title),
                subtitle = escape(&slide.subtitle),
            )
        })
        .collect();

    let dots: String = (0..slides.len())
        .map(|i| {
            format!(
                r#"<button class="dot{}" data-action="go-to-slide" data-slide="{}"></button>"#,
                if i == active { " active" } else { "" },
                i
            )
        })
        .collect();

    format!(
        r#"<section class="hero-carousel" data-section="carousel" data-active-slide="{active}">
    {frames}
    <button class="carousel-prev" data-icon="chevron-left" data-action="prev-slide" aria-label="Previous slide"></button>
    <button class="carousel-next" data-icon="chevron-right" data-action="next-slide" aria-label="Next slide"></button>
    <div class="carousel-dots">{dots}</div>
</section>"#,
        active = active,
        frames = frames,
        dots = dots,
    )
}

fn render_featured(products: &[Product]) -> String {
    let cards: String = products.iter().map(product_card).collect();
    format!(
        r#"<section class="featured" data-section="featured">
    <h2>Featured Products</h2>
    <div class="product-grid">{}</div>
</section>"#,
        cards
    )
}

fn render_spotlight() -> String {
    r#"<section class="spotlight" data-section="spotlight">
    <div class="spotlight-copy">
        <h2>Spring Collection 2024</h2>
        <p>Discover our latest collection featuring sustainable materials and timeless designs. Each piece is crafted with attention to detail and commitment to quality.</p>
        <a href="/category/women" class="btn">Explore Collection</a>
    </div>
    <div class="spotlight-video">
        <iframe src="https://www.youtube.com/embed/your-video-id" title="Spring Collection 2024" allowfullscreen></iframe>
    </div>
</section>"#
        .to_string()
}

fn render_category_grid(categories: &[Category]) -> String {
    let tiles: String = categories
        .iter()
        .map(|c| {
            format!(
                r#"<a href="{}" class="category-tile">
            <img src="{}" alt="{}">
            <h3>{}</h3>
        </a>"#,
                escape(&c.href()),
                escape(&c.image),
                escape(&c.name),
                escape(&c.name)
            )
        })
        .collect();

    format!(
        r#"<section class="categories" data-section="categories">
    <h2>Shop by Category</h2>
    <div class="category-grid">{}</div>
</section>"#,
        tiles
    )
}

fn render_features(features: &[Feature]) -> String {
    let cards: String = features
        .iter()
        .map(|f| {
            format!(
                r#"<div class="feature-card">
            <span class="feature-icon" data-icon="{}"></span>
            <h3>{}</h3>
            <p>{}</p>
        </div>"#,
                escape(&f.icon),
                escape(&f.title),
                escape(&f.description)
            )
        })
        .collect();

    format!(
        r#"<section class="features" data-section="features">{}</section>"#,
        cards
    )
}

fn render_footer(brand: &str, links: &[SocialLink]) -> String {
    let icons: String = links
        .iter()
        .map(|l| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" data-icon="{}" aria-label="{}"></a>"#,
                escape(&l.url),
                escape(&l.network),
                escape(&l.network)
            )
        })
        .collect();

    format!(
        r#"<footer class="site-footer">
    <div class="social-links">{}</div>
    <p>&copy; 2024 {}. All rights reserved.</p>
</footer>"#,
        icons,
        escape(brand)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(slide_index: usize, featured_count: usize) -> String {
        let newsletter = NewsletterSignup::default();
        render_home(&HomePage {
            store: CatalogStore::global(),
            brand: "LUXE",
            slide_index,
            featured_count,
            newsletter: &newsletter,
        })
    }

    #[test]
    fn test_active_slide_marked() {
        let html = render(1, 4);
        assert!(html.contains(r#"data-active-slide="1""#));
        assert!(html.contains(r#"<div class="slide active" data-slide="1" aria-hidden="false">"#));
        assert!(html.contains(r#"<div class="slide" data-slide="0" aria-hidden="true">"#));
        assert_eq!(html.matches(r#"class="slide active""#).count(), 1);
    }

    #[test]
    fn test_featured_shows_first_products() {
        let html = render(0, 4);
        let featured = &html[html.find("Featured Products").unwrap()..html.find("spotlight").unwrap()];
        assert_eq!(featured.matches("class=\"product-card\"").count(), 4);
        assert!(featured.contains("Leather Handbag"));
        assert!(!featured.contains("Kids Denim Set"));
    }

    #[test]
    fn test_home_sections_present() {
        let html = render(0, 4);
        for section in ["carousel", "featured", "spotlight", "categories", "features", "newsletter"] {
            assert!(html.contains(&format!(r#"data-section="{section}""#)), "{section}");
        }
        assert!(html.contains("Free Shipping"));
        assert!(html.contains("https://instagram.com"));
        assert!(html.contains("&copy; 2024 LUXE. All rights reserved."));
    }
}
