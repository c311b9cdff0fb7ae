//! End-to-end browsing sessions driven through the shell.

use std::sync::atomic::Ordering;
use std::time::Duration;

use luxe_storefront::prelude::*;
use tokio::runtime::Handle;
use tokio::time;

fn fill_checkout(shell: &mut Shell) {
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
}

#[test]
fn checkout_for_unknown_product_renders_not_found() {
    let mut shell = Shell::builder().build().unwrap();
    shell.navigate("/checkout/unknown").unwrap();

    let html = shell.render().unwrap();
    assert!(html.contains("Product not found"));
    assert!(html.contains(r#"data-id="unknown""#));
    assert!(!html.contains("checkout-form"));

    let err = shell.dispatch(ShellEvent::SubmitCheckout).unwrap_err();
    assert!(matches!(err, StorefrontError::EventNotApplicable { view: "not-found", .. }));
}

#[test]
fn category_men_lists_first_two_products() {
    let mut shell = Shell::builder().build().unwrap();
    shell.navigate("/category/men/").unwrap();

    let html = shell.render_page().unwrap();
    assert_eq!(html.matches(r#"<article class="product-card""#).count(), 2);
    let shirt = html.find("Classic White Shirt").unwrap();
    let blazer = html.find("Navy Blazer").unwrap();
    assert!(shirt < blazer);
}

#[test]
fn adding_to_cart_shows_badge() {
    let mut shell = Shell::builder().build().unwrap();
    assert!(!shell.render().unwrap().contains("cart-badge"));

    shell.navigate("/category/women").unwrap();
    for id in ["3", "4", "3"] {
        shell
            .dispatch(ShellEvent::AddToCart {
                product_id: id.to_string(),
                quantity: 1,
            })
            .unwrap();
    }

    assert_eq!(shell.cart().len(), 2);
    assert!(shell
        .render()
        .unwrap()
        .contains(r#"<span class="cart-badge">3</span>"#));

    shell.navigate("/cart").unwrap();
    let html = shell.render_page().unwrap();
    assert!(html.contains("Subtotal: $519.97"));
    assert_eq!(shell.cart_count(), 3);
}

#[test]
fn checkout_submit_emits_one_order() {
    let sink = RecordingOrderSink::new();
    let mut shell = Shell::builder().order_sink(sink.clone()).build().unwrap();
    shell.navigate("/checkout/5").unwrap();
    fill_checkout(&mut shell);

    shell.dispatch(ShellEvent::SubmitCheckout).unwrap();

    let orders = sink.orders();
    assert_eq!(orders.len(), 1);
    let order = &orders[0];
    assert_eq!(order.product.id.as_str(), "5");
    assert_eq!(order.form.name, "Jane Doe");
    assert_eq!(order.form.address, "1 Main St");
    assert_eq!(order.form.phone, "555-0100");
    assert_eq!(order.form.email, "jane@example.com");
    assert_eq!(order.payment, PaymentMethod::CashOnDelivery);
    assert_eq!(shell.checkout_draft(), Some(&CheckoutForm::default()));
}

#[test]
fn checkout_with_missing_field_emits_nothing() {
    let sink = RecordingOrderSink::new();
    let mut shell = Shell::builder().order_sink(sink.clone()).build().unwrap();
    shell.navigate("/checkout/1").unwrap();
    fill_checkout(&mut shell);
    shell
        .dispatch(ShellEvent::SetCheckoutField {
            field: CheckoutField::Address,
            value: String::new(),
        })
        .unwrap();

    let err = shell.dispatch(ShellEvent::SubmitCheckout).unwrap_err();

    assert!(matches!(
        err,
        StorefrontError::Commerce(CommerceError::ValidationFailed { ref missing })
            if missing == &vec![CheckoutField::Address]
    ));
    assert!(sink.is_empty());
    assert_eq!(shell.checkout_draft().unwrap().name, "Jane Doe");
    assert!(shell
        .render_page()
        .unwrap()
        .contains(r#"<div class="form-field invalid" data-field="address">"#));
}

#[tokio::test(start_paused = true)]
async fn home_carousel_rotates_on_timer() {
    let mut shell = Shell::builder().runtime(Handle::current()).build().unwrap();
    assert!(shell.is_auto_rotating());

    time::sleep(Duration::from_millis(5001)).await;
    assert_eq!(shell.dispatch(ShellEvent::PumpTimer).unwrap(), Outcome::Ticks(1));
    assert_eq!(shell.current_slide(), Some(1));
    assert!(shell.render_page().unwrap().contains(r#"data-active-slide="1""#));

    shell.dispatch(ShellEvent::PrevSlide).unwrap();
    time::sleep(Duration::from_millis(10_000)).await;
    shell.pump();
    assert_eq!(shell.current_slide(), Some(2));
}

#[tokio::test(start_paused = true)]
async fn slide_jump_lands_after_queued_tick() {
    let mut shell = Shell::builder().runtime(Handle::current()).build().unwrap();

    time::sleep(Duration::from_millis(5001)).await;
    assert_eq!(shell.dispatch(ShellEvent::GoToSlide(0)).unwrap(), Outcome::Slide(0));
    assert_eq!(shell.dispatch(ShellEvent::PumpTimer).unwrap(), Outcome::Ticks(0));
    assert_eq!(shell.current_slide(), Some(0));
}

#[tokio::test(start_paused = true)]
async fn leaving_home_stops_ticks() {
    let mut config = StorefrontConfig::default();
    config.carousel.interval_ms = 100;
    let mut shell = Shell::builder().config(config).build().unwrap();

    let counter = shell.home_carousel().and_then(Carousel::tick_counter).unwrap();
    time::sleep(Duration::from_millis(150)).await;
    assert_eq!(counter.upgrade().unwrap().load(Ordering::SeqCst), 1);

    shell.navigate("/category/children").unwrap();
    time::sleep(Duration::from_millis(1000)).await;
    assert!(counter.upgrade().is_none(), "timer task still holds the tick counter");

    shell.navigate("/").unwrap();
    assert_eq!(shell.current_slide(), Some(0));
    time::sleep(Duration::from_millis(150)).await;
    assert_eq!(shell.pump(), 1);
}

#[tokio::test(start_paused = true)]
async fn autoplay_can_be_disabled() {
    let mut config = StorefrontConfig::default();
    config.carousel.autoplay = false;
    let mut shell = Shell::builder().config(config).build().unwrap();

    time::sleep(Duration::from_millis(20_000)).await;
    assert!(!shell.is_auto_rotating());
    assert_eq!(shell.pump(), 0);
    assert_eq!(shell.current_slide(), Some(0));
}
