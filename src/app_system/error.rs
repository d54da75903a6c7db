use std::path::PathBuf;
use thiserror::Error;

use crate::product_actor::ProductError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("catalog {0} lists no products")]
    EmptyCatalog(PathBuf),
    #[error("mailbox size must be at least 1")]
    InvalidMailboxSize,
}

/// Top-level failures that end the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("catalog seeding failed: {0}")]
    Seeding(#[from] ProductError),
    #[error("actor task failed: {0}")]
    Shutdown(String),
}
