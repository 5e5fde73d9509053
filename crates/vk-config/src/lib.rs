//! # vk-config
//!
//! Layered configuration loading for Vaultkeeper using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Prefixed environment variables (`VAULTKEEPER_*`, `__` as separator)
//! 2. Project-level `.vaultkeeper/config.toml`, where `vk use-db` saves the
//!    active database
//! 3. Bare credential variables `NOTION_TOKEN`, `NOTION_PAGE_ID`, `NOTION_DATABASE_ID`
//!    (usually from `.env`)
//! 4. User-level `~/.config/vaultkeeper/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VAULTKEEPER_NOTION__BASE_URL` -> `notion.base_url` and
//! `VAULTKEEPER_GENERAL__DATA_FILE` -> `general.data_file`. The bare
//! `NOTION_*` credentials map onto the `notion` section so an existing `.env`
//! with `NOTION_TOKEN=...` works unchanged.
//!
//! # Usage
//!
//! ```no_run
//! use vk_config::VaultConfig;
//!
//! let config = VaultConfig::load_with_dotenv().expect("config");
//! if config.notion.is_configured() {
//!     println!("database: {}", config.notion.database_id);
//! }
//! ```

mod error;
mod general;
mod notion;
mod write_back;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use notion::NotionConfig;
pub use write_back::write_active_database;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Credential variables read without a prefix.
const NOTION_ENV_KEYS: [&str; 3] = ["NOTION_TOKEN", "NOTION_PAGE_ID", "NOTION_DATABASE_ID"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VaultConfig {
    #[serde(default)]
    pub notion: NotionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl VaultConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`VaultConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// `.env` values never override variables already set in the process.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        figment = figment.merge(
            Env::raw()
                .only(&NOTION_ENV_KEYS)
                .map(|key| notion_key(key.as_str()).into()),
        );

        let local_path = Self::project_config_path();
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("VAULTKEEPER_").split("__"))
    }

    /// Project-local config file, relative to the working directory.
    ///
    /// This is also where the CLI persists the active database id.
    #[must_use]
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(".vaultkeeper").join("config.toml")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vaultkeeper").join("config.toml"))
    }
}

/// `NOTION_DATABASE_ID` -> `notion.database_id`.
fn notion_key(raw: &str) -> String {
    let lower = raw.to_ascii_lowercase();
    let field = lower.strip_prefix("notion_").unwrap_or(&lower);
    format!("notion.{field}")
}
