//! Notion API configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    String::from("https://api.notion.com/v1")
}

fn default_api_version() -> String {
    String::from("2022-06-28")
}

fn default_database_title() -> String {
    String::from("Destiny Inventory")
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotionConfig {
    /// Integration token (`secret_...` / `ntn_...`).
    #[serde(default)]
    pub token: String,

    /// Parent page new databases are created under.
    #[serde(default)]
    pub page_id: String,

    /// Database all item operations target.
    #[serde(default)]
    pub database_id: String,

    /// API root, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the `Notion-Version` header.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Title given to provisioned databases.
    #[serde(default = "default_database_title")]
    pub database_title: String,

    /// Request timeout in seconds. `0` leaves the HTTP client default.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            page_id: String::new(),
            database_id: String::new(),
            base_url: default_base_url(),
            api_version: default_api_version(),
            database_title: default_database_title(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl NotionConfig {
    /// Token and target database are both set, so item operations can run.
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty() && !self.database_id.is_empty()
    }

    /// Token and parent page are both set, so a database can be provisioned.
    pub fn can_provision(&self) -> bool {
        !self.token.is_empty() && !self.page_id.is_empty()
    }

    /// The configured database id, or `None` when unset.
    pub fn database_id(&self) -> Option<&str> {
        (!self.database_id.is_empty()).then_some(self.database_id.as_str())
    }
}
