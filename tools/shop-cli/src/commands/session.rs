//! Line-oriented shopping session.
//!
//! Each input line is one gesture from the storefront UI. After every
//! gesture that changes state the cart (or product list) is re-rendered.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::str::FromStr;

use anyhow::{bail, Context as _, Result};
use shop_core::prelude::*;

use super::SessionArgs;
use crate::context::Context;

const HELP: &str = "\
add <id>          add one unit to the cart
inc <id>          + button on a cart line
dec <id>          - button on a cart line (removes at 1)
remove <id>       remove a cart line
qty <id> <n>      set a line quantity (0 removes)
category <name>   select a category tab (\"All\" for everything)
list              show products under the current tab
cart              show the cart
clear             empty the cart
help              show this help
quit              end the session";

/// One user gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    Add(ProductId),
    Increment(ProductId),
    Decrement(ProductId),
    Remove(ProductId),
    SetQuantity(ProductId, i64),
    Category(String),
    List,
    Cart,
    Clear,
    Help,
    Quit,
}

impl FromStr for Gesture {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            bail!("Empty command");
        };

        let gesture = match verb.to_lowercase().as_str() {
            "add" => Gesture::Add(product_arg(parts.next())?),
            "inc" | "+" => Gesture::Increment(product_arg(parts.next())?),
            "dec" | "-" => Gesture::Decrement(product_arg(parts.next())?),
            "remove" | "rm" => Gesture::Remove(product_arg(parts.next())?),
            "qty" => {
                let id = product_arg(parts.next())?;
                let raw = parts.next().context("Missing quantity")?;
                let quantity = raw
                    .parse()
                    .with_context(|| format!("Invalid quantity: {raw}"))?;
                Gesture::SetQuantity(id, quantity)
            }
            "category" | "cat" => {
                // Category names may contain spaces.
                let name = parts.by_ref().collect::<Vec<_>>().join(" ");
                if name.is_empty() {
                    bail!("Missing category name");
                }
                return Ok(Gesture::Category(name));
            }
            "list" | "ls" => Gesture::List,
            "cart" => Gesture::Cart,
            "clear" => Gesture::Clear,
            "help" | "?" => Gesture::Help,
            "quit" | "exit" | "q" => Gesture::Quit,
            other => bail!("Unknown command: {other} (try `help`)"),
        };

        if let Some(extra) = parts.next() {
            bail!("Unexpected argument: {extra}");
        }
        Ok(gesture)
    }
}

fn product_arg(arg: Option<&str>) -> Result<ProductId> {
    let raw = arg.context("Missing product id")?;
    raw.parse()
        .with_context(|| format!("Invalid product id: {raw}"))
}

/// What the front end should show after a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Cart,
    Products,
    Help,
    Nothing,
    Quit,
}

/// Apply a gesture to the storefront.
pub fn apply(shop: &mut Storefront, gesture: &Gesture) -> Result<View, CommerceError> {
    let view = match gesture {
        Gesture::Add(id) => {
            shop.add_to_cart(*id)?;
            View::Cart
        }
        Gesture::Increment(id) => changed(shop.increment(*id)?),
        Gesture::Decrement(id) => changed(shop.decrement(*id)?),
        Gesture::Remove(id) => changed(shop.remove_from_cart(*id)),
        Gesture::SetQuantity(id, quantity) => changed(shop.set_quantity(*id, *quantity)?),
        Gesture::Category(token) => {
            shop.select_category(token)?;
            View::Products
        }
        Gesture::List => View::Products,
        Gesture::Cart => View::Cart,
        Gesture::Clear => {
            shop.cart_mut().clear();
            View::Cart
        }
        Gesture::Help => View::Help,
        Gesture::Quit => View::Quit,
    };
    Ok(view)
}

fn changed(did_change: bool) -> View {
    if did_change {
        View::Cart
    } else {
        View::Nothing
    }
}

/// Run the session command.
pub fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let mut shop = Storefront::new(ctx.catalog()?);

    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("Failed to open script: {}", path.display())
        })?)),
        None => {
            ctx.output.header(&format!("{} session", ctx.config.store.name));
            ctx.output.info("Type `help` for commands");
            Box::new(BufReader::new(io::stdin()))
        }
    };

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let outcome = line
            .parse::<Gesture>()
            .and_then(|gesture| apply(&mut shop, &gesture).map_err(anyhow::Error::from));

        match outcome {
            Ok(View::Quit) => break,
            Ok(view) => render(ctx, &shop, view),
            Err(e) if args.strict => {
                return Err(e.context(format!("line {}: {line}", index + 1)));
            }
            Err(e) => ctx.output.error(&format!("{:#}", e)),
        }
    }

    let summary = shop.summary();
    tracing::info!(
        total_items = summary.total_items,
        total_price = %summary.total_price,
        "session ended"
    );
    if ctx.output.is_json() {
        ctx.output.json(&summary);
    } else {
        ctx.output.success(&format!(
            "Session ended with {} item(s), total {}",
            summary.total_items, summary.total_price
        ));
    }
    Ok(())
}

fn render(ctx: &Context, shop: &Storefront, view: View) {
    match view {
        View::Cart => ctx.output.cart(&shop.summary()),
        View::Products => {
            let products = shop.visible_products();
            if ctx.output.is_json() {
                ctx.output.json(&products);
                return;
            }
            ctx.output
                .header(&format!("Catalog · {}", shop.selection().current_category()));
            for product in products {
                ctx.output.product(product);
            }
        }
        View::Help => {
            if !ctx.output.is_json() {
                println!("{HELP}");
            }
        }
        View::Nothing => ctx.output.debug("Nothing to update"),
        View::Quit => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn shop() -> Storefront {
        Storefront::new(Arc::new(ProductCatalog::builtin().unwrap()))
    }

    fn run_script(shop: &mut Storefront, lines: &[&str]) -> Vec<View> {
        lines
            .iter()
            .map(|line| apply(shop, &line.parse().unwrap()).unwrap())
            .collect()
    }

    #[test]
    fn test_parse_gestures() {
        assert_eq!("add 1".parse::<Gesture>().unwrap(), Gesture::Add(ProductId::new(1)));
        assert_eq!(
            "QTY 2 5".parse::<Gesture>().unwrap(),
            Gesture::SetQuantity(ProductId::new(2), 5)
        );
        assert_eq!(
            "qty 2 -1".parse::<Gesture>().unwrap(),
            Gesture::SetQuantity(ProductId::new(2), -1)
        );
        assert_eq!("- 3".parse::<Gesture>().unwrap(), Gesture::Decrement(ProductId::new(3)));
        assert_eq!(
            "category Smart Home".parse::<Gesture>().unwrap(),
            Gesture::Category("Smart Home".to_string())
        );
        assert_eq!("q".parse::<Gesture>().unwrap(), Gesture::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<Gesture>().is_err());
        assert!("add".parse::<Gesture>().is_err());
        assert!("add x".parse::<Gesture>().is_err());
        assert!("add 1 2".parse::<Gesture>().is_err());
        assert!("qty 1".parse::<Gesture>().is_err());
        assert!("category".parse::<Gesture>().is_err());
        assert!("checkout".parse::<Gesture>().is_err());
    }

    #[test]
    fn test_session_script() {
        let mut shop = shop();
        let views = run_script(
            &mut shop,
            &["add 1", "add 1", "add 3", "inc 3", "dec 1", "remove 9", "category Laptops"],
        );

        assert_eq!(
            views,
            vec![
                View::Cart,
                View::Cart,
                View::Cart,
                View::Cart,
                View::Cart,
                View::Nothing,
                View::Products
            ]
        );
        assert_eq!(shop.cart().total_items(), 3);
        assert_eq!(shop.cart().total_price().amount_minor, 12_999_000 + 2 * 2_499_000);
        assert_eq!(shop.visible_products().len(), 1);
    }

    #[test]
    fn test_rejected_gestures_keep_state() {
        let mut shop = shop();
        run_script(&mut shop, &["add 2"]);

        let err = apply(&mut shop, &"qty 2 -4".parse().unwrap()).unwrap_err();
        assert_eq!(err, CommerceError::InvalidQuantity(-4));
        let err = apply(&mut shop, &"add 77".parse().unwrap()).unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound(ProductId::new(77)));
        let err = apply(&mut shop, &"category Cameras".parse().unwrap()).unwrap_err();
        assert_eq!(err, CommerceError::UnknownCategory("Cameras".to_string()));

        assert_eq!(shop.cart().quantity_of(ProductId::new(2)), 1);
        assert_eq!(shop.selection().current_category(), "All");
    }

    #[test]
    fn test_clear_and_quit() {
        let mut shop = shop();
        let views = run_script(&mut shop, &["add 4", "clear", "quit"]);
        assert_eq!(views, vec![View::Cart, View::Cart, View::Quit]);
        assert!(shop.cart().is_empty());
    }
}
