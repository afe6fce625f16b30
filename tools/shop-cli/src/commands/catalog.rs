//! Catalog listing commands.

use anyhow::Result;
use shop_core::catalog::CategorySelection;

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut selection = CategorySelection::for_catalog(&catalog);
    selection.set_category(&args.category)?;

    let products = catalog.filter(selection.filter());
    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} · {}",
        ctx.config.store.name,
        selection.current_category()
    ));
    if products.is_empty() {
        ctx.output.info("No products in this category");
    }
    for product in products {
        ctx.output.product(product);
    }
    Ok(())
}

/// Run the categories command.
pub fn categories(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let selection = CategorySelection::for_catalog(&catalog);

    if ctx.output.is_json() {
        let tokens: Vec<&str> = selection.tokens().collect();
        ctx.output.json(&tokens);
        return Ok(());
    }

    ctx.output.header("Categories");
    for token in selection.tokens() {
        let count = catalog.filter_by_category(token).len();
        ctx.output.list_item(&format!("{token} ({count})"));
    }
    Ok(())
}
