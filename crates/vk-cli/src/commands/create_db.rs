use anyhow::Context;
use serde::Serialize;
use vk_config::{VaultConfig, write_active_database};

use crate::cli::root_commands::CreateDbArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::report;
use crate::context::AppContext;
use crate::controller::Notice;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CreateDbResponse {
    database_id: String,
    title: String,
    active: bool,
}

/// Handle `vk create-db`.
pub async fn handle(
    args: &CreateDbArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !ctx.config.notion.can_provision() {
        tracing::debug!("notion.token or notion.page_id missing; the request will be rejected");
    }

    let (notice, database_id) = ctx.controller.provision_database().await;
    report(&notice)?;
    let Some(database_id) = database_id else {
        return Ok(());
    };

    if args.activate {
        ctx.controller.set_active_database(database_id.clone());
        let path = VaultConfig::project_config_path();
        write_active_database(&path, &database_id)
            .with_context(|| format!("failed to save active database to {}", path.display()))?;
        report(&Notice::info(
            "Active database",
            format!("saved {database_id} to {}", path.display()),
        ))?;
    } else {
        report(&Notice::info(
            "Active database",
            format!("unchanged; run `vk use-db {database_id}` to switch"),
        ))?;
    }

    if flags.format != OutputFormat::Table {
        output(
            &CreateDbResponse {
                database_id,
                title: ctx.config.notion.database_title.clone(),
                active: args.activate,
            },
            flags.format,
        )?;
    }
    Ok(())
}
