//! CLI command implementations.

pub mod catalog;
pub mod session;

use std::path::PathBuf;

use clap::Args;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Category tab to show ("All" shows everything).
    #[arg(short = 'C', long, default_value = shop_core::catalog::ALL_CATEGORIES)]
    pub category: String,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Read gestures from a file instead of stdin.
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Stop at the first rejected gesture instead of continuing.
    #[arg(long)]
    pub strict: bool,
}
