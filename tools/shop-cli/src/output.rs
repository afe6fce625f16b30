//! Output formatting for the CLI.

use console::style;
use shop_core::cart::CartSummary;
use shop_core::catalog::Product;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a product card: name, badge, category, price, and specs in order.
    pub fn product(&self, product: &Product) {
        if self.json {
            return;
        }
        let badge = product
            .badge
            .as_deref()
            .map(|b| format!(" {}", style(format!("[{b}]")).magenta()))
            .unwrap_or_default();
        println!(
            "\n{} {}{}",
            style(format!("#{}", product.id)).dim(),
            style(&product.name).bold(),
            badge
        );
        println!(
            "  {}  {}",
            style(&product.category).cyan(),
            style(product.price.display()).green().bold()
        );
        for (_, value) in product.specs.iter() {
            println!("  {} {}", style("✓").green(), value);
        }
        if self.verbose {
            self.kv("image", &product.image);
        }
    }

    /// Print the cart sheet: one row per line, then totals.
    pub fn cart(&self, summary: &CartSummary) {
        if self.json {
            self.json(summary);
            return;
        }

        let title = match summary.badge_count() {
            Some(count) => format!("Cart ({count})"),
            None => "Cart".to_string(),
        };
        self.header(&title);

        if summary.is_empty() {
            self.info("Cart is empty");
            return;
        }

        for line in &summary.lines {
            println!(
                "  {} {}  {} × {}  = {}",
                style(format!("#{}", line.product_id)).dim(),
                line.name,
                line.unit_price.display(),
                line.quantity,
                style(line.line_total.display()).bold()
            );
        }
        println!(
            "  {} {}",
            style("Total:").bold(),
            style(summary.total_price.display()).green().bold()
        );
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}
