//! Scripted browsing sessions.
//!
//! A script is one command per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! goto /checkout/2
//! field name Jane Doe
//! field email jane@example.com
//! submit
//! ```

use std::io::Read;
use std::time::Duration;

use anyhow::{bail, Context as _, Result};
use luxe_commerce::checkout::{CheckoutField, RecordingOrderSink};
use luxe_storefront::{Outcome, Shell, ShellEvent, StorefrontError};

use super::SessionArgs;
use crate::context::Context;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Event(ShellEvent),
    /// Sleep, then apply carousel ticks.
    Wait(Duration),
    Render,
}

/// Parse one script line. `None` for blanks and comments.
pub fn parse_step(line: &str) -> Result<Option<Step>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let args: Vec<&str> = rest.split_whitespace().collect();

    let step = match (command, args.as_slice()) {
        ("goto", [path]) => Step::Event(ShellEvent::Navigate(path.to_string())),
        ("next", []) => Step::Event(ShellEvent::NextSlide),
        ("prev", []) => Step::Event(ShellEvent::PrevSlide),
        ("slide", [index]) => Step::Event(ShellEvent::GoToSlide(
            index.parse().with_context(|| format!("bad slide index {:?}", index))?,
        )),
        ("menu", []) => Step::Event(ShellEvent::ToggleMenu),
        ("add", [id]) => Step::Event(ShellEvent::AddToCart {
            product_id: id.to_string(),
            quantity: 1,
        }),
        ("add", [id, quantity]) => Step::Event(ShellEvent::AddToCart {
            product_id: id.to_string(),
            quantity: parse_quantity(quantity)?,
        }),
        ("remove", [id]) => Step::Event(ShellEvent::RemoveFromCart(id.to_string())),
        ("qty", [id, quantity]) => Step::Event(ShellEvent::SetCartQuantity {
            product_id: id.to_string(),
            quantity: parse_quantity(quantity)?,
        }),
        ("field", [name, ..]) => {
            let field: CheckoutField = name.parse()?;
            let value = rest[name.len()..].trim().to_string();
            Step::Event(ShellEvent::SetCheckoutField { field, value })
        }
        ("submit", []) => Step::Event(ShellEvent::SubmitCheckout),
        ("email", [address]) => Step::Event(ShellEvent::SetNewsletterEmail(address.to_string())),
        ("subscribe", []) => Step::Event(ShellEvent::SubscribeNewsletter),
        ("wait", [ms]) => Step::Wait(Duration::from_millis(
            ms.parse().with_context(|| format!("bad duration {:?}", ms))?,
        )),
        ("render", []) => Step::Render,
        _ => bail!("unrecognized command: {}", line),
    };

    Ok(Some(step))
}

fn parse_quantity(s: &str) -> Result<u32> {
    s.parse().with_context(|| format!("bad quantity {:?}", s))
}

/// Run the session command.
pub async fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let script = read_script(&args.script, ctx)?;

    let orders = RecordingOrderSink::new();
    let mut shell = Shell::builder()
        .config(ctx.config.clone())
        .order_sink(orders.clone())
        .build()
        .context("Failed to start storefront")?;

    let mut log = Vec::new();
    for (number, line) in script.lines().enumerate() {
        let number = number + 1;
        let Some(step) = parse_step(line).with_context(|| format!("line {}", number))? else {
            continue;
        };
        tracing::debug!(line = number, step = ?step, "session step");

        match step {
            Step::Event(event) => match shell.dispatch(event) {
                Ok(outcome) => {
                    let message = describe(&outcome, &shell);
                    ctx.output.success(&message);
                    log.push(serde_json::json!({ "line": number, "ok": message }));
                }
                Err(e) if is_soft(&e) => {
                    tracing::debug!(line = number, error = %e, "step rejected");
                    ctx.output.warn(&format!("line {}: {}", number, e));
                    log.push(serde_json::json!({ "line": number, "error": e.to_string() }));
                }
                Err(e) => return Err(e).with_context(|| format!("line {}", number)),
            },
            Step::Wait(duration) => {
                tokio::time::sleep(duration).await;
                let ticks = shell.pump();
                ctx.output
                    .info(&format!("waited {}ms, {} slide tick(s)", duration.as_millis(), ticks));
                log.push(serde_json::json!({ "line": number, "ticks": ticks }));
            }
            Step::Render => {
                let html = shell.render()?;
                if ctx.output.is_json() {
                    log.push(serde_json::json!({ "line": number, "html": html }));
                } else {
                    println!("{}", html);
                }
            }
        }
    }

    tracing::info!(
        route = %shell.route(),
        cart_items = shell.cart_count(),
        orders = orders.len(),
        "session finished"
    );

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "steps": log,
            "route": shell.route().path(),
            "cart_count": shell.cart_count(),
            "orders": orders.orders(),
        }));
    } else {
        ctx.output.kv("route", &shell.route().path());
        ctx.output.kv("cart items", &shell.cart_count().to_string());
        ctx.output.kv("orders placed", &orders.len().to_string());
    }

    Ok(())
}

fn read_script(source: &str, ctx: &Context) -> Result<String> {
    if source == "-" {
        let mut script = String::new();
        std::io::stdin()
            .read_to_string(&mut script)
            .context("Failed to read script from stdin")?;
        return Ok(script);
    }

    let path = ctx.resolve_path(source);
    std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Errors a shopper would see as a message on the page rather than a crash.
fn is_soft(error: &StorefrontError) -> bool {
    error.is_recoverable() || matches!(error, StorefrontError::EventNotApplicable { .. })
}

fn describe(outcome: &Outcome, shell: &Shell) -> String {
    match outcome {
        Outcome::Navigated(route) => format!("{} ({} page)", route, shell.view().name()),
        Outcome::Slide(index) => format!("slide {}", index),
        Outcome::Ticks(ticks) => format!("{} slide tick(s)", ticks),
        Outcome::Menu(open) => format!("menu {}", if *open { "open" } else { "closed" }),
        Outcome::CartCount(count) => format!("cart has {} item(s)", count),
        Outcome::Unchanged => "no change".to_string(),
        Outcome::FieldUpdated(field) => format!("{} updated", field.label()),
        Outcome::OrderPlaced(order) => format!(
            "order {} for {} ({})",
            order.order_id,
            order.product.name,
            luxe_commerce::checkout::ORDER_ACKNOWLEDGEMENT
        ),
        Outcome::Subscribed(email) => format!("subscribed {}", email),
    }
}
