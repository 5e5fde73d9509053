use anyhow::Context;
use vk_config::VaultConfig;

/// Load `.env`, then the layered configuration.
pub fn load_config() -> anyhow::Result<VaultConfig> {
    VaultConfig::load_with_dotenv().context("failed to load vaultkeeper configuration")
}
