//! CLI configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | MENU_DATA_DIR | ./.menu-data | Remembered customer identity |
//! | MENU_LOG_DIR | unset | Daily rolling log files, console only when unset |
//! | MENU_LOG_LEVEL | info | Log level of the menu crates |
//!
//! Backend settings are read by [`ClientConfig::from_env`].

use menu_client::ClientConfig;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./.menu-data";

#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientConfig,
    pub data_dir: PathBuf,
    pub log_dir: Option<String>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            client: ClientConfig::from_env(),
            data_dir: std::env::var("MENU_DATA_DIR")
                .unwrap_or_else(|_| DEFAULT_DATA_DIR.into())
                .into(),
            log_dir: std::env::var("MENU_LOG_DIR").ok().filter(|d| !d.is_empty()),
            log_level: std::env::var("MENU_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }
}
