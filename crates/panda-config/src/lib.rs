//! Panda Config
//!
//! User configuration for the Panda style toolchain, plus the style value
//! types shared by the style-sheet engine and the generator.
//!
//! ```text
//! panda.config.json → load_config() → UserConfig { globalCss, outdir }
//! ```
//!
//! # Example
//!
//! ```
//! use panda_config::UserConfig;
//!
//! let config = UserConfig::from_json(r#"{ "globalCss": { "body": { "margin": 0 } } }"#).unwrap();
//! assert_eq!(config.global_css().len(), 1);
//! ```

pub mod config;
pub mod style;

use std::path::PathBuf;

pub use config::{load_config, UserConfig, DEFAULT_OUTDIR};
pub use style::{format_number, Declarations, GlobalStyleObject, StyleValue};

/// Configuration loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
