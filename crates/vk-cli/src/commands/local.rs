use vk_core::bootstrap::BootstrapData;

use crate::cli::subcommands::LocalCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::report;
use crate::context::AppContext;
use crate::controller::Notice;
use crate::local_file;
use crate::output::{output, output_items};

/// Handle `vk local`.
pub fn handle(
    action: &LocalCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LocalCommands::Show => show(ctx, flags),
        LocalCommands::Save { sample } => save(*sample, ctx),
    }
}

fn show(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format != OutputFormat::Table {
        return output(&ctx.local, flags.format);
    }

    if ctx.local.characters.is_empty() {
        println!("Characters: (none)");
    } else {
        println!("Characters: {}", ctx.local.characters.join(", "));
    }
    output_items(&ctx.local.items.iter().collect::<Vec<_>>(), flags.format)
}

fn save(sample: bool, ctx: &mut AppContext) -> anyhow::Result<()> {
    if let Some(reason) = &ctx.local_error {
        anyhow::bail!(
            "refusing to overwrite {} because it could not be read: {reason}",
            ctx.data_file.display()
        );
    }

    if sample {
        if ctx.local.is_empty() {
            ctx.local = BootstrapData::sample();
        } else {
            report(&Notice::info(
                "Local file",
                "already has data; sample not applied",
            ))?;
        }
    }

    local_file::save(&ctx.data_file, &ctx.local)?;
    report(&Notice::success(
        "Local file",
        format!("saved {}", ctx.data_file.display()),
    ))
}
