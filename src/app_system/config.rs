use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ProductCreate;
use super::ConfigError;

/// Command-line surface of the binary.
#[derive(Debug, Parser)]
#[command(
    name = "order_desk",
    about = "Interactive order management desk",
    after_help = "Examples:\n  order_desk\n  order_desk --catalog catalog.toml\n  RUST_LOG=debug order_desk"
)]
pub struct Cli {
    /// TOML file with a `[[products]]` table replacing the built-in catalog
    #[arg(long, env = "ORDER_DESK_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "ORDER_DESK_LOG", default_value = "warn")]
    pub log_level: String,

    /// Request buffer of each actor mailbox
    #[arg(long, env = "ORDER_DESK_MAILBOX", default_value_t = 32)]
    pub mailbox_size: usize,
}

/// Everything `OrderSystem::start` needs.
#[derive(Debug, Clone)]
pub struct SystemSettings {
    pub mailbox_size: usize,
    pub catalog: Vec<ProductCreate>,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            mailbox_size: 32,
            catalog: default_catalog(),
        }
    }
}

impl SystemSettings {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        if cli.mailbox_size == 0 {
            return Err(ConfigError::InvalidMailboxSize);
        }
        let catalog = match &cli.catalog {
            Some(path) => load_catalog(path)?,
            None => default_catalog(),
        };
        Ok(Self {
            mailbox_size: cli.mailbox_size,
            catalog,
        })
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    code: String,
    name: String,
    price: f64,
    #[serde(default)]
    stock: i64,
    #[serde(default)]
    category: String,
}

impl From<CatalogEntry> for ProductCreate {
    fn from(entry: CatalogEntry) -> Self {
        ProductCreate {
            code: entry.code,
            name: entry.name,
            price: entry.price,
            stock: entry.stock,
            category: entry.category,
        }
    }
}

pub fn load_catalog(path: &Path) -> Result<Vec<ProductCreate>, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: CatalogFile = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if file.products.is_empty() {
        return Err(ConfigError::EmptyCatalog(path.to_path_buf()));
    }
    Ok(file.products.into_iter().map(ProductCreate::from).collect())
}

/// Catalog used when no file is given.
pub fn default_catalog() -> Vec<ProductCreate> {
    [
        ("P001", "Laptop", 1200.0, 10, "Electronics"),
        ("P002", "Mouse", 25.0, 50, "Accessories"),
        ("P003", "Keyboard", 75.0, 30, "Accessories"),
    ]
    .into_iter()
    .map(|(code, name, price, stock, category)| ProductCreate {
        code: code.to_string(),
        name: name.to_string(),
        price,
        stock,
        category: category.to_string(),
    })
    .collect()
}
