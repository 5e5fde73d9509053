use serde::Serialize;
use vk_core::ItemForm;

use crate::cli::root_commands::AddArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::{fail, report};
use crate::context::AppContext;
use crate::controller::Notice;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AddResponse {
    id: String,
    name: String,
}

/// Handle `vk add`.
pub async fn handle(
    args: AddArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = ItemForm {
        name: args.name,
        item_type: args.item_type,
        power: args.power,
        location: args.location,
        notes: args.notes,
    };

    let id = match ctx.controller.add_item(&form).await {
        Ok(id) => id,
        Err(error) => return fail("Add failed", &error),
    };

    report(&Notice::success("Add", format!("added '{}' ({id})", form.name)))?;
    if flags.format != OutputFormat::Table {
        output(&AddResponse { id, name: form.name }, flags.format)?;
    }
    Ok(())
}
