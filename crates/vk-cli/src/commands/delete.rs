use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeleteArgs;
use crate::commands::shared::prompt::{CliDialogs, EditOverrides};
use crate::commands::{fail, report};
use crate::context::AppContext;
use crate::controller::{Notice, Outcome};

/// Handle `vk delete`.
pub async fn handle(
    args: &DeleteArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Err(error) = ctx.controller.refresh().await {
        return fail("Load failed", &error);
    }

    let key = args.item.as_str();
    let selected = ctx.controller.select(key).map(|row| row.id.clone());
    let mut dialogs = CliDialogs::new(EditOverrides::default(), flags.yes);

    match ctx.controller.delete(selected.as_deref(), &mut dialogs).await {
        Ok(Outcome::Done) => report(&Notice::success("Delete", format!("archived '{key}'"))),
        Ok(Outcome::NoSelection) => {
            report(&Notice::info("Delete", format!("no item matches '{key}'")))
        }
        Ok(Outcome::Declined) => report(&Notice::info("Delete", format!("kept '{key}'"))),
        Ok(Outcome::Cancelled) => Ok(()),
        Err(error) => fail("Delete failed", &error),
    }
}
