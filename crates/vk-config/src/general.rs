//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_data_file() -> String {
    String::from("inventory_data.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Path of the local bootstrap file (`{characters, items}` JSON).
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}
