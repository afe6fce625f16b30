//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use shop_core::ProductCatalog;

use crate::config::ShopConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// Where the configuration came from, if a file was used.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from an explicit config file, or the nearest one found
    /// from the current directory upwards.
    pub fn load(config_path: Option<&Path>, output: Output) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                ShopConfig::find(&cwd)
            }
        };

        let config = match &config_path {
            Some(path) => ShopConfig::load(path)?,
            None => ShopConfig::default(),
        };

        Ok(Self {
            config,
            config_path,
            output,
        })
    }

    /// Load the catalog this store sells from.
    pub fn catalog(&self) -> Result<Arc<ProductCatalog>> {
        let catalog = self.config.catalog()?;
        self.output.debug(&format!(
            "Loaded {} products in {} categories",
            catalog.len(),
            catalog.categories().len()
        ));
        Ok(catalog)
    }
}
