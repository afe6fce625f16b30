//! Shop CLI - terminal storefront for the TechShop catalog.
//!
//! Commands:
//! - `shop catalog` - List products, optionally for one category
//! - `shop categories` - List category tabs
//! - `shop session` - Browse and fill a cart interactively

mod commands;
mod config;
mod context;
mod logging;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, SessionArgs};

/// TechShop - browse the catalog and manage a cart from the terminal
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog(CatalogArgs),

    /// List category tabs
    Categories,

    /// Start a shopping session reading gestures line by line
    Session(SessionArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), output)?;
    logging::init(&ctx.config.logging, cli.verbose);
    if let Some(path) = &ctx.config_path {
        tracing::debug!(path = %path.display(), "config loaded");
    }

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Categories => commands::catalog::categories(&ctx),
        Commands::Session(args) => commands::session::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
