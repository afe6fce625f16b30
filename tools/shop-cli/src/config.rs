//! CLI configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use shop_core::{Currency, ProductCatalog};

/// File names searched for when no `--config` is given.
pub const CONFIG_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: ShopConfig = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };

        // Catalog paths are relative to the config file.
        if let (Some(catalog), Some(dir)) = (config.store.catalog.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }

        Ok(config)
    }

    /// Find a config file in `start` or any parent directory.
    pub fn find(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_NAMES {
                let candidate = current.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Store currency.
    pub fn currency(&self) -> Result<Currency> {
        Ok(Currency::parse(&self.store.currency)?)
    }

    /// Load the configured catalog, or the builtin seed catalog.
    pub fn catalog(&self) -> Result<Arc<ProductCatalog>> {
        let catalog = match &self.store.catalog {
            Some(path) => ProductCatalog::load(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?,
            None => ProductCatalog::builtin().context("Builtin catalog is invalid")?,
        };

        let currency = self.currency()?;
        if catalog.currency() != currency {
            bail!(
                "Catalog is priced in {} but the store currency is {}",
                catalog.currency(),
                currency
            );
        }
        Ok(Arc::new(catalog))
    }
}

/// Store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name shown in headers.
    #[serde(default = "default_name")]
    pub name: String,

    /// ISO currency code.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Catalog file (TOML or JSON). Uses the builtin catalog when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

fn default_name() -> String {
    "TechShop".to_string()
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            currency: default_currency(),
            catalog: None,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "shop_core=debug".
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format.
    #[default]
    Human,
    /// JSON format.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("shop-cli-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_defaults() {
        let config: ShopConfig = toml::from_str("").unwrap();
        assert_eq!(config.store.name, "TechShop");
        assert_eq!(config.store.currency, "RUB");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Human);
        assert_eq!(config.catalog().unwrap().len(), 6);
    }

    #[test]
    fn test_parse_toml() {
        let config: ShopConfig = toml::from_str(
            r#"
[store]
name = "Gadgets"

[logging]
level = "shop_core=debug"
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.store.name, "Gadgets");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut config = ShopConfig::default();
        config.store.currency = "USD".to_string();
        assert!(config.catalog().is_err());

        config.store.currency = "ABC".to_string();
        assert!(config.currency().is_err());
    }

    #[test]
    fn test_load_resolves_catalog_relative_to_config() {
        let dir = scratch_dir("relative");
        std::fs::write(
            dir.join("mini.toml"),
            "categories = [\"A\"]\n\n[[products]]\nid = 1\nname = \"One\"\nprice = 100\ncategory = \"A\"\nimage = \"1.png\"\n",
        )
        .unwrap();
        let config_path = dir.join("shop.toml");
        std::fs::write(&config_path, "[store]\ncatalog = \"mini.toml\"\n").unwrap();

        let config = ShopConfig::load(&config_path).unwrap();
        assert_eq!(config.store.catalog.as_deref(), Some(dir.join("mini.toml").as_path()));
        assert_eq!(config.catalog().unwrap().len(), 1);

        let nested = dir.join("nested");
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(ShopConfig::find(&nested), Some(config_path));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
