use anyhow::Context;
use vk_config::{VaultConfig, write_active_database};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UseDbArgs;
use crate::commands::{fail, report};
use crate::context::AppContext;
use crate::controller::Notice;

/// Handle `vk use-db`: switch databases, check that the new one is readable,
/// then persist it to the project config.
pub async fn handle(
    args: UseDbArgs,
    ctx: &mut AppContext,
    _flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let database_id = args.database_id.trim().to_string();
    if database_id.is_empty() {
        anyhow::bail!("database id must not be empty");
    }

    ctx.controller.set_active_database(database_id.clone());
    let count = match ctx.controller.refresh().await {
        Ok(count) => count,
        Err(error) => return fail("Switch database failed", &error),
    };

    let path = VaultConfig::project_config_path();
    write_active_database(&path, &database_id)
        .with_context(|| format!("failed to save active database to {}", path.display()))?;

    report(&Notice::success(
        "Active database",
        format!("now using {database_id} ({count} items), saved to {}", path.display()),
    ))
}
