//! Render a route to HTML.

use anyhow::{Context as _, Result};
use luxe_storefront::{Shell, ShellEvent};

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut shell = Shell::new(ctx.config.clone()).context("Failed to start storefront")?;

    for product_id in args.add {
        shell
            .dispatch(ShellEvent::AddToCart {
                product_id: product_id.clone(),
                quantity: 1,
            })
            .with_context(|| format!("Failed to add product {} to the cart", product_id))?;
    }

    shell.navigate(&args.path)?;
    tracing::debug!(path = %args.path, view = shell.view().name(), "rendering route");

    let html = if args.fragment {
        shell.render_page()?
    } else {
        shell.render()?
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "route": shell.route().path(),
            "view": shell.view().name(),
            "cart_count": shell.cart_count(),
            "html": html,
        }));
    } else {
        println!("{}", html);
    }

    Ok(())
}
