//! Single-product checkout page.

use luxe_commerce::checkout::{CheckoutController, CheckoutField, PaymentMethod};

use crate::html::escape;

/// Result of the last submit attempt, shown above the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckoutStatus {
    #[default]
    Editing,
    /// Submit was blocked; these fields are required.
    Missing(Vec<CheckoutField>),
    /// The order went through; carries the acknowledgement text.
    Placed(String),
}

pub fn render_checkout(controller: &CheckoutController, status: &CheckoutStatus) -> String {
    let product = controller.product();
    let missing: &[CheckoutField] = match status {
        CheckoutStatus::Missing(fields) => fields,
        _ => &[],
    };

    let banner = match status {
        CheckoutStatus::Editing => String::new(),
        CheckoutStatus::Missing(fields) => {
            let labels: Vec<&str> = fields.iter().map(|f| f.label()).collect();
            format!(
                r#"<div class="form-error" role="alert">Please fill in: {}</div>"#,
                escape(&labels.join(", "))
            )
        }
        CheckoutStatus::Placed(message) => format!(
            r#"<div class="form-success" role="status">{}</div>"#,
            escape(message)
        ),
    };

    let inputs: String = CheckoutField::ALL
        .iter()
        .map(|field| render_input(*field, controller.draft().get(*field), missing.contains(field)))
        .collect();

    format!(
        r#"<section class="checkout-page" data-product-id="{id}">
    <h1>Checkout</h1>
    <div class="checkout-summary">
        <img src="{image}" alt="{name}">
        <div>
            <h3>{name}</h3>
            <p>{description}</p>
            <p class="price">{price}</p>
        </div>
    </div>
    {banner}
    <form class="checkout-form" data-action="submit-checkout" novalidate>
        {inputs}
        <button type="submit">Place Order ({payment})</button>
    </form>
</section>"#,
        id = escape(product.id.as_str()),
        image = escape(&product.image),
        name = escape(&product.name),
        description = escape(&product.description),
        price = escape(&product.price.display()),
        banner = banner,
        inputs = inputs,
        payment = PaymentMethod::CashOnDelivery.display_name(),
    )
}

fn render_input(field: CheckoutField, value: &str, invalid: bool) -> String {
    let name = field.as_str();
    let control = match field {
        CheckoutField::Address => format!(
            r#"<textarea id="{name}" name="{name}" rows="3" required>{}</textarea>"#,
            escape(value)
        ),
        _ => {
            let kind = match field {
                CheckoutField::Phone => "tel",
                CheckoutField::Email => "email",
                _ => "text",
            };
            format!(
                r#"<input type="{kind}" id="{name}" name="{name}" value="{}" required>"#,
                escape(value)
            )
        }
    };

    format!(
        r#"<div class="form-field{}" data-field="{name}">
            <label for="{name}">{}</label>
            {control}
        </div>"#,
        if invalid { " invalid" } else { "" },
        field.label(),
    )
}
