use std::path::PathBuf;

use anyhow::Context;
use vk_config::VaultConfig;
use vk_core::bootstrap::BootstrapData;
use vk_notion::NotionStore;

use crate::cli::GlobalFlags;
use crate::controller::InventoryController;
use crate::local_file;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: VaultConfig,
    pub controller: InventoryController<NotionStore>,
    pub data_file: PathBuf,
    /// Bootstrap file contents as read at startup.
    pub local: BootstrapData,
    /// Why the bootstrap file could not be read, if it exists but failed to load.
    pub local_error: Option<String>,
}

impl AppContext {
    /// Build the Notion-backed controller and read the bootstrap file.
    ///
    /// A `--database` flag overrides the configured database for this run only.
    pub fn init(config: VaultConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let store =
            NotionStore::from_config(&config.notion).context("failed to build Notion client")?;
        let mut controller = InventoryController::new(store);
        if let Some(database) = &flags.database {
            tracing::debug!(%database, "using database from --database");
            controller.set_active_database(database.clone());
        }

        let data_file = PathBuf::from(&config.general.data_file);
        let (local, local_error) = match local_file::load_or_default(&data_file) {
            Ok(data) => (data, None),
            Err(error) => {
                let reason = format!("{error:#}");
                tracing::warn!(
                    path = %data_file.display(),
                    error = %reason,
                    "failed to read local bootstrap file; starting empty"
                );
                (BootstrapData::default(), Some(reason))
            }
        };

        Ok(Self {
            config,
            controller,
            data_file,
            local,
            local_error,
        })
    }
}
