//! Catalog listing.

use anyhow::Result;
use luxe_commerce::catalog::Product;
use luxe_commerce::navigation::Navigator;

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let navigator = Navigator::global();

    match args.category {
        Some(id) => {
            let listing = navigator.category_listing(&id).into_result()?;
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "category": listing.category,
                    "products": listing.products,
                }));
                return Ok(());
            }

            ctx.output.header(&listing.category.name);
            print_products(&listing.products, ctx);
        }
        None => {
            let store = navigator.store();
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "categories": store.categories(),
                    "products": store.products(),
                }));
                return Ok(());
            }

            ctx.output.header("Categories");
            let widths = [14, 16, 8];
            ctx.output.table_row(&["ID", "NAME", "PRODUCTS"], &widths);
            for category in store.categories() {
                let count = store.products_in(&category.id).len().to_string();
                ctx.output
                    .table_row(&[category.id.as_str(), &category.name, &count], &widths);
            }

            ctx.output.header("Products");
            let products: Vec<&Product> = store.products().iter().collect();
            print_products(&products, ctx);
        }
    }

    Ok(())
}

fn print_products(products: &[&Product], ctx: &Context) {
    let widths = [4, 22, 14, 10];
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE"], &widths);
    for product in products {
        let price = product.price.display();
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                product.category_id.as_str(),
                &price,
            ],
            &widths,
        );
    }
}
