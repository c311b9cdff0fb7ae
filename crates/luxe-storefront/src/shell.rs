//! The storefront shell: owns session state and routes events to the active page.
//!
//! A [`Shell`] holds the cart, the header state and the newsletter draft for
//! the whole session, plus exactly one [`View`] for the current route. Views
//! own their page-local state (the carousel on the home page, the checkout
//! draft on the checkout page), so leaving a page drops that state. For the
//! home page that includes the auto-rotation timer.
//!
//! # Example
//!
//! ```rust
//! use luxe_storefront::prelude::*;
//!
//! let mut shell = Shell::builder().build().unwrap();
//! shell.navigate("/category/men").unwrap();
//! shell
//!     .dispatch(ShellEvent::AddToCart { product_id: "1".into(), quantity: 2 })
//!     .unwrap();
//!
//! assert_eq!(shell.cart_count(), 2);
//! assert!(shell.render().unwrap().contains(r#"<span class="cart-badge">2</span>"#));
//! ```

use std::sync::Arc;

use luxe_commerce::cart::Cart;
use luxe_commerce::catalog::CatalogStore;
use luxe_commerce::checkout::{
    CheckoutController, CheckoutField, CheckoutForm, LoggingOrderSink, OrderPlaced, OrderSink,
    ORDER_ACKNOWLEDGEMENT,
};
use luxe_commerce::navigation::{Navigator, NotFound, Resolved};
use luxe_commerce::{CategoryId, CommerceError, ProductId};
use tokio::runtime::Handle;

use crate::carousel::Carousel;
use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::header::{render_header, HeaderState};
use crate::html::Document;
use crate::newsletter::{NewsletterSignup, NoopSubscriptionService, SubscriptionService};
use crate::pages::{
    render_cart, render_category, render_checkout, render_home, render_missing_entity,
    render_missing_route, CheckoutStatus, HomePage,
};
use crate::routes::Route;

/// Page-local state for the current route.
#[derive(Debug)]
pub enum View {
    Home {
        carousel: Carousel,
    },
    Category {
        category_id: CategoryId,
    },
    Checkout {
        controller: CheckoutController,
        status: CheckoutStatus,
    },
    Cart,
    /// A category or product id that did not resolve.
    MissingEntity(NotFound),
    /// No route matched the path.
    MissingRoute(String),
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Home { .. } => "home",
            View::Category { .. } => "category",
            View::Checkout { .. } => "checkout",
            View::Cart => "cart",
            View::MissingEntity(_) | View::MissingRoute(_) => "not-found",
        }
    }
}

/// User interactions the shell understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    Navigate(String),
    NextSlide,
    PrevSlide,
    GoToSlide(usize),
    /// Apply ticks posted by the carousel timer.
    PumpTimer,
    ToggleMenu,
    AddToCart { product_id: String, quantity: u32 },
    RemoveFromCart(String),
    SetCartQuantity { product_id: String, quantity: u32 },
    SetCheckoutField { field: CheckoutField, value: String },
    SubmitCheckout,
    SetNewsletterEmail(String),
    SubscribeNewsletter,
}

impl ShellEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ShellEvent::Navigate(_) => "navigate",
            ShellEvent::NextSlide => "next-slide",
            ShellEvent::PrevSlide => "prev-slide",
            ShellEvent::GoToSlide(_) => "go-to-slide",
            ShellEvent::PumpTimer => "pump-timer",
            ShellEvent::ToggleMenu => "toggle-menu",
            ShellEvent::AddToCart { .. } => "add-to-cart",
            ShellEvent::RemoveFromCart(_) => "remove-from-cart",
            ShellEvent::SetCartQuantity { .. } => "set-cart-quantity",
            ShellEvent::SetCheckoutField { .. } => "set-checkout-field",
            ShellEvent::SubmitCheckout => "submit-checkout",
            ShellEvent::SetNewsletterEmail(_) => "set-newsletter-email",
            ShellEvent::SubscribeNewsletter => "subscribe-newsletter",
        }
    }
}

/// What a handled event changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Navigated(Route),
    /// New carousel index.
    Slide(usize),
    /// Number of timer ticks applied.
    Ticks(usize),
    /// Whether the mobile menu is now open.
    Menu(bool),
    /// Cart item count after the change.
    CartCount(u64),
    /// Cart operation that matched nothing.
    Unchanged,
    FieldUpdated(CheckoutField),
    OrderPlaced(Box<OrderPlaced>),
    Subscribed(String),
}

/// Builder for [`Shell`].
pub struct ShellBuilder {
    config: StorefrontConfig,
    store: Option<Arc<CatalogStore>>,
    order_sink: Option<Box<dyn OrderSink>>,
    subscriptions: Option<Box<dyn SubscriptionService>>,
    runtime: Option<Handle>,
}

impl ShellBuilder {
    pub fn new() -> Self {
        Self {
            config: StorefrontConfig::default(),
            store: None,
            order_sink: None,
            subscriptions: None,
            runtime: None,
        }
    }

    pub fn config(mut self, config: StorefrontConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom catalog instead of the seed data.
    pub fn catalog(mut self, store: impl Into<Arc<CatalogStore>>) -> Self {
        self.store = Some(store.into());
        self
    }

    /// Where placed orders go. Defaults to [`LoggingOrderSink`].
    pub fn order_sink(mut self, sink: impl OrderSink + 'static) -> Self {
        self.order_sink = Some(Box::new(sink));
        self
    }

    /// Newsletter backend. Defaults to [`NoopSubscriptionService`].
    pub fn subscriptions(mut self, service: impl SubscriptionService + 'static) -> Self {
        self.subscriptions = Some(Box::new(service));
        self
    }

    /// Runtime for the carousel timer. Defaults to the ambient runtime, if any.
    pub fn runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Validate config and catalog, then open the home page.
    pub fn build(self) -> Result<Shell, StorefrontError> {
        self.config.validate()?;
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(CatalogStore::global().clone()));
        store.validate()?;

        let runtime = self.runtime.or_else(|| Handle::try_current().ok());
        if runtime.is_none() && self.config.carousel.autoplay {
            tracing::debug!("no tokio runtime, carousel will only move manually");
        }

        let mut shell = Shell {
            config: self.config,
            store,
            runtime,
            route: Route::Home,
            view: View::Cart,
            cart: Cart::new(),
            header: HeaderState::default(),
            newsletter: NewsletterSignup::default(),
            order_sink: self.order_sink.unwrap_or_else(|| Box::new(LoggingOrderSink)),
            subscriptions: self
                .subscriptions
                .unwrap_or_else(|| Box::new(NoopSubscriptionService)),
        };
        shell.view = shell.open(&Route::Home)?;
        Ok(shell)
    }
}

impl Default for ShellBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One browsing session.
pub struct Shell {
    config: StorefrontConfig,
    store: Arc<CatalogStore>,
    runtime: Option<Handle>,
    route: Route,
    view: View,
    cart: Cart,
    header: HeaderState,
    newsletter: NewsletterSignup,
    order_sink: Box<dyn OrderSink>,
    subscriptions: Box<dyn SubscriptionService>,
}

impl Shell {
    pub fn builder() -> ShellBuilder {
        ShellBuilder::new()
    }

    /// Shell over the seed catalog with the given config and default collaborators.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorefrontError> {
        ShellBuilder::new().config(config).build()
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Number shown on the header badge.
    pub fn cart_count(&self) -> u64 {
        self.cart.total_item_count()
    }

    pub fn menu_open(&self) -> bool {
        self.header.menu_open()
    }

    pub fn newsletter(&self) -> &NewsletterSignup {
        &self.newsletter
    }

    /// The hero carousel, when the home page is showing.
    pub fn home_carousel(&self) -> Option<&Carousel> {
        match &self.view {
            View::Home { carousel } => Some(carousel),
            _ => None,
        }
    }

    pub fn current_slide(&self) -> Option<usize> {
        self.home_carousel().map(Carousel::index)
    }

    pub fn is_auto_rotating(&self) -> bool {
        self.home_carousel().is_some_and(Carousel::is_auto)
    }

    /// Draft order, when the checkout page is showing.
    pub fn checkout_draft(&self) -> Option<&CheckoutForm> {
        match &self.view {
            View::Checkout { controller, .. } => Some(controller.draft()),
            _ => None,
        }
    }

    pub fn checkout_status(&self) -> Option<&CheckoutStatus> {
        match &self.view {
            View::Checkout { status, .. } => Some(status),
            _ => None,
        }
    }

    /// Switch to the page for `path`.
    ///
    /// The next view is built before the previous one is replaced, so a
    /// failure leaves route and view untouched. Replacing the home view drops
    /// its carousel timer. The mobile menu closes.
    pub fn navigate(&mut self, path: &str) -> Result<&Route, StorefrontError> {
        let route = Route::parse(path);
        let view = self.open(&route)?;
        self.view = view;
        self.header.close_menu();

        tracing::debug!(route = %route, view = self.view.name(), "navigated");
        self.route = route;
        Ok(&self.route)
    }

    fn open(&self, route: &Route) -> Result<View, StorefrontError> {
        let navigator = Navigator::new(&self.store);
        let view = match route {
            Route::Home => View::Home {
                carousel: self.start_carousel()?,
            },
            Route::Category(id) => match navigator.resolve_category(id) {
                Resolved::Found(category) => View::Category {
                    category_id: category.id.clone(),
                },
                Resolved::NotFound(miss) => View::MissingEntity(miss),
            },
            Route::Checkout(id) => match navigator.resolve_product(id) {
                Resolved::Found(product) => View::Checkout {
                    controller: CheckoutController::new(product.clone()),
                    status: CheckoutStatus::default(),
                },
                Resolved::NotFound(miss) => View::MissingEntity(miss),
            },
            Route::Cart => View::Cart,
            Route::NotFound(path) => View::MissingRoute(path.clone()),
        };
        Ok(view)
    }

    fn start_carousel(&self) -> Result<Carousel, StorefrontError> {
        let slides = self.store.slides().len();
        match (&self.runtime, self.config.carousel.autoplay) {
            (Some(runtime), true) => {
                Carousel::auto(slides, runtime, self.config.carousel_interval())
            }
            _ => Carousel::manual(slides),
        }
    }

    /// Handle one event against the current view.
    pub fn dispatch(&mut self, event: ShellEvent) -> Result<Outcome, StorefrontError> {
        tracing::trace!(event = event.name(), view = self.view.name(), "dispatch");
        let name = event.name();

        match event {
            ShellEvent::Navigate(path) => {
                let route = self.navigate(&path)?.clone();
                Ok(Outcome::Navigated(route))
            }
            ShellEvent::NextSlide => Ok(Outcome::Slide(self.carousel(name)?.next())),
            ShellEvent::PrevSlide => Ok(Outcome::Slide(self.carousel(name)?.prev())),
            ShellEvent::GoToSlide(index) => Ok(Outcome::Slide(self.carousel(name)?.go_to(index)?)),
            ShellEvent::PumpTimer => Ok(Outcome::Ticks(self.pump())),
            ShellEvent::ToggleMenu => Ok(Outcome::Menu(self.header.toggle_menu())),
            ShellEvent::AddToCart {
                product_id,
                quantity,
            } => {
                let product = self
                    .store
                    .product(&ProductId::new(&product_id))
                    .ok_or(CommerceError::ProductNotFound(product_id))?;
                self.cart.add(product, quantity)?;
                Ok(Outcome::CartCount(self.cart_count()))
            }
            ShellEvent::RemoveFromCart(product_id) => {
                if self.cart.remove(&ProductId::new(product_id)) {
                    Ok(Outcome::CartCount(self.cart_count()))
                } else {
                    Ok(Outcome::Unchanged)
                }
            }
            ShellEvent::SetCartQuantity {
                product_id,
                quantity,
            } => {
                if self.cart.set_quantity(&ProductId::new(product_id), quantity)? {
                    Ok(Outcome::CartCount(self.cart_count()))
                } else {
                    Ok(Outcome::Unchanged)
                }
            }
            ShellEvent::SetCheckoutField { field, value } => {
                let (controller, status) = self.checkout(name)?;
                controller.set_field(field, value);
                match status {
                    CheckoutStatus::Missing(_) => {
                        *status = CheckoutStatus::Missing(controller.missing_fields());
                    }
                    CheckoutStatus::Placed(_) => *status = CheckoutStatus::Editing,
                    CheckoutStatus::Editing => {}
                }
                Ok(Outcome::FieldUpdated(field))
            }
            ShellEvent::SubmitCheckout => self.submit_checkout(),
            ShellEvent::SetNewsletterEmail(email) => {
                self.require_home(name)?;
                self.newsletter.set_email(email);
                Ok(Outcome::Unchanged)
            }
            ShellEvent::SubscribeNewsletter => {
                self.require_home(name)?;
                let email = self.newsletter.subscribe(self.subscriptions.as_ref())?;
                Ok(Outcome::Subscribed(email))
            }
        }
    }

    /// Apply pending carousel ticks. Zero when the home page is not showing.
    pub fn pump(&mut self) -> usize {
        match &mut self.view {
            View::Home { carousel } => carousel.pump(),
            _ => 0,
        }
    }

    fn submit_checkout(&mut self) -> Result<Outcome, StorefrontError> {
        let (controller, status) = match &mut self.view {
            View::Checkout { controller, status } => (controller, status),
            other => return Err(not_applicable("submit-checkout", other)),
        };

        match controller.submit(self.order_sink.as_ref()) {
            Ok(order) => {
                *status = CheckoutStatus::Placed(ORDER_ACKNOWLEDGEMENT.to_string());
                Ok(Outcome::OrderPlaced(Box::new(order)))
            }
            Err(CommerceError::ValidationFailed { missing }) => {
                *status = CheckoutStatus::Missing(missing.clone());
                Err(CommerceError::ValidationFailed { missing }.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn carousel(&mut self, event: &'static str) -> Result<&mut Carousel, StorefrontError> {
        match &mut self.view {
            View::Home { carousel } => Ok(carousel),
            other => Err(not_applicable(event, other)),
        }
    }

    fn checkout(
        &mut self,
        event: &'static str,
    ) -> Result<(&mut CheckoutController, &mut CheckoutStatus), StorefrontError> {
        match &mut self.view {
            View::Checkout { controller, status } => Ok((controller, status)),
            other => Err(not_applicable(event, other)),
        }
    }

    fn require_home(&self, event: &'static str) -> Result<(), StorefrontError> {
        match &self.view {
            View::Home { .. } => Ok(()),
            other => Err(not_applicable(event, other)),
        }
    }

    /// Full HTML document for the current view.
    pub fn render(&self) -> Result<String, StorefrontError> {
        let header = render_header(
            &self.config.store.brand,
            self.store.categories(),
            self.cart_count(),
            &self.header,
        );
        let page = self.render_page()?;

        let document = Document::new(self.title())
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_meta("description", "Premium fashion and accessories")
            .with_stylesheet("/styles.css");
        Ok(document.render(&format!("{header}\n<main>\n{page}\n</main>")))
    }

    /// Just the page fragment under the header.
    pub fn render_page(&self) -> Result<String, StorefrontError> {
        let html = match &self.view {
            View::Home { carousel } => render_home(&HomePage {
                store: &self.store,
                brand: &self.config.store.brand,
                slide_index: carousel.index(),
                featured_count: self.config.home.featured_count,
                newsletter: &self.newsletter,
            }),
            View::Category { category_id } => {
                match Navigator::new(&self.store).category_listing(category_id.as_str()) {
                    Resolved::Found(listing) => render_category(&listing),
                    Resolved::NotFound(miss) => render_missing_entity(&miss),
                }
            }
            View::Checkout { controller, status } => render_checkout(controller, status),
            View::Cart => render_cart(&self.cart)?,
            View::MissingEntity(miss) => render_missing_entity(miss),
            View::MissingRoute(path) => render_missing_route(path),
        };
        Ok(html)
    }

    fn title(&self) -> String {
        let brand = &self.config.store.brand;
        match &self.view {
            View::Home { .. } => brand.clone(),
            View::Category { category_id } => match self.store.category(category_id) {
                Some(category) => format!("{} | {}", category.name, brand),
                None => brand.clone(),
            },
            View::Checkout { controller, .. } => {
                format!("Checkout: {} | {}", controller.product().name, brand)
            }
            View::Cart => format!("Cart | {}", brand),
            View::MissingEntity(_) | View::MissingRoute(_) => format!("Not Found | {}", brand),
        }
    }
}

fn not_applicable(event: &'static str, view: &View) -> StorefrontError {
    StorefrontError::EventNotApplicable {
        event,
        view: view.name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_commerce::checkout::RecordingOrderSink;

    fn shell() -> Shell {
        Shell::builder().build().unwrap()
    }

    #[test]
    fn test_starts_on_home_without_runtime() {
        let shell = shell();
        assert_eq!(shell.route(), &Route::Home);
        assert_eq!(shell.current_slide(), Some(0));
        assert!(!shell.is_auto_rotating());
        assert_eq!(shell.cart_count(), 0);
    }

    #[test]
    fn test_manual_slides() {
        let mut shell = shell();
        assert_eq!(shell.dispatch(ShellEvent::PrevSlide).unwrap(), Outcome::Slide(2));
        assert_eq!(shell.dispatch(ShellEvent::NextSlide).unwrap(), Outcome::Slide(0));
        assert_eq!(shell.dispatch(ShellEvent::GoToSlide(1)).unwrap(), Outcome::Slide(1));
        assert!(matches!(
            shell.dispatch(ShellEvent::GoToSlide(3)),
            Err(StorefrontError::InvalidSlide { index: 3, count: 3 })
        ));
    }

    #[test]
    fn test_slide_events_rejected_off_home() {
        let mut shell = shell();
        shell.navigate("/cart").unwrap();
        let err = shell.dispatch(ShellEvent::NextSlide).unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::EventNotApplicable {
                event: "next-slide",
                view: "cart"
            }
        ));
        assert_eq!(shell.dispatch(ShellEvent::PumpTimer).unwrap(), Outcome::Ticks(0));
    }

    #[test]
    fn test_navigation_closes_menu() {
        let mut shell = shell();
        assert_eq!(shell.dispatch(ShellEvent::ToggleMenu).unwrap(), Outcome::Menu(true));
        assert!(shell.render().unwrap().contains(r#"data-menu="open""#));

        shell.navigate("/category/women").unwrap();
        assert!(!shell.menu_open());
    }

    #[test]
    fn test_unknown_ids_render_not_found() {
        let mut shell = shell();

        shell.navigate("/checkout/999").unwrap();
        assert_eq!(shell.view().name(), "not-found");
        assert!(shell.render_page().unwrap().contains("Product not found"));

        shell.navigate("/category/shoes").unwrap();
        assert!(shell.render_page().unwrap().contains("Category not found"));

        shell.navigate("/about").unwrap();
        assert!(shell.render_page().unwrap().contains("404"));
    }

    #[test]
    fn test_cart_events() {
        let mut shell = shell();
        let add = |id: &str, quantity| ShellEvent::AddToCart {
            product_id: id.to_string(),
            quantity,
        };

        shell.dispatch(add("1", 1)).unwrap();
        assert_eq!(shell.dispatch(add("3", 3)).unwrap(), Outcome::CartCount(4));
        assert_eq!(
            shell.dispatch(ShellEvent::RemoveFromCart("6".into())).unwrap(),
            Outcome::Unchanged
        );
        assert_eq!(
            shell
                .dispatch(ShellEvent::SetCartQuantity {
                    product_id: "3".into(),
                    quantity: 0
                })
                .unwrap(),
            Outcome::CartCount(1)
        );

        let err = shell.dispatch(add("99", 1)).unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Commerce(CommerceError::ProductNotFound(_))
        ));
        assert_eq!(shell.cart_count(), 1);
    }

    #[test]
    fn test_checkout_flow() {
        let sink = RecordingOrderSink::new();
        let mut shell = Shell::builder().order_sink(sink.clone()).build().unwrap();
        shell.navigate("/checkout/2").unwrap();

        let err = shell.dispatch(ShellEvent::SubmitCheckout).unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(
            shell.checkout_status(),
            Some(&CheckoutStatus::Missing(CheckoutField::ALL.to_vec()))
        );

        for (field, value) in [
            (CheckoutField::Name, "Jane Doe"),
            (CheckoutField::Address, "1 Main St"),
            (CheckoutField::Phone, "555-0100"),
        ] {
            shell
                .dispatch(ShellEvent::SetCheckoutField {
                    field,
                    value: value.to_string(),
                })
                .unwrap();
        }
        assert_eq!(
            shell.checkout_status(),
            Some(&CheckoutStatus::Missing(vec![CheckoutField::Email]))
        );
        assert!(sink.is_empty());

        shell
            .dispatch(ShellEvent::SetCheckoutField {
                field: CheckoutField::Email,
                value: "jane@example.com".to_string(),
            })
            .unwrap();
        let outcome = shell.dispatch(ShellEvent::SubmitCheckout).unwrap();

        assert!(matches!(outcome, Outcome::OrderPlaced(order) if order.product.id.as_str() == "2"));
        assert_eq!(sink.len(), 1);
        assert!(shell.render_page().unwrap().contains(ORDER_ACKNOWLEDGEMENT));
        assert_eq!(shell.cart_count(), 0);
    }

    #[test]
    fn test_editing_after_order_clears_acknowledgement() {
        let mut shell = shell();
        shell.navigate("/checkout/4").unwrap();
        for (field, value) in [
            (CheckoutField::Name, "Jane Doe"),
            (CheckoutField::Address, "1 Main St"),
            (CheckoutField::Phone, "555-0100"),
            (CheckoutField::Email, "jane@example.com"),
        ] {
            shell
                .dispatch(ShellEvent::SetCheckoutField {
                    field,
                    value: value.to_string(),
                })
                .unwrap();
        }
        shell.dispatch(ShellEvent::SubmitCheckout).unwrap();
        assert!(matches!(shell.checkout_status(), Some(CheckoutStatus::Placed(_))));

        shell
            .dispatch(ShellEvent::SetCheckoutField {
                field: CheckoutField::Name,
                value: "John Roe".to_string(),
            })
            .unwrap();

        assert_eq!(shell.checkout_status(), Some(&CheckoutStatus::Editing));
        assert!(!shell.render_page().unwrap().contains(ORDER_ACKNOWLEDGEMENT));
        assert_eq!(shell.checkout_draft().unwrap().name, "John Roe");
    }

    #[test]
    fn test_failed_navigation_keeps_route_and_view() {
        let mut shell = shell();
        shell.navigate("/cart").unwrap();

        let seed = CatalogStore::global();
        shell.store = Arc::new(CatalogStore::new(
            seed.categories().to_vec(),
            seed.products().to_vec(),
            Vec::new(),
            seed.features().to_vec(),
            seed.social_links().to_vec(),
        ));

        assert!(matches!(shell.navigate("/"), Err(StorefrontError::EmptyCarousel)));
        assert_eq!(shell.route(), &Route::Cart);
        assert_eq!(shell.view().name(), "cart");
        assert!(shell.current_slide().is_none());
    }

    #[test]
    fn test_newsletter_only_on_home() {
        let mut shell = shell();
        shell
            .dispatch(ShellEvent::SetNewsletterEmail("jane@example.com".into()))
            .unwrap();
        assert_eq!(
            shell.dispatch(ShellEvent::SubscribeNewsletter).unwrap(),
            Outcome::Subscribed("jane@example.com".into())
        );

        shell.navigate("/cart").unwrap();
        assert!(shell.dispatch(ShellEvent::SubscribeNewsletter).is_err());
    }

    #[test]
    fn test_render_titles() {
        let mut shell = shell();
        assert!(shell.render().unwrap().contains("<title>LUXE</title>"));

        shell.navigate("/category/men").unwrap();
        assert!(shell.render().unwrap().contains("<title>Men | LUXE</title>"));

        shell.navigate("/checkout/1").unwrap();
        assert!(shell
            .render()
            .unwrap()
            .contains("<title>Checkout: Classic White Shirt | LUXE</title>"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = StorefrontConfig::default();
        config.carousel.interval_ms = 0;
        assert!(matches!(
            Shell::new(config),
            Err(StorefrontError::Config(_))
        ));
    }
}
