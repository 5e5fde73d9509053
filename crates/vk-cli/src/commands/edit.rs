use crate::cli::GlobalFlags;
use crate::cli::root_commands::EditArgs;
use crate::commands::shared::prompt::{CliDialogs, EditOverrides};
use crate::commands::{fail, report};
use crate::context::AppContext;
use crate::controller::{Notice, Outcome};

/// Handle `vk edit`.
pub async fn handle(
    args: EditArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Err(error) = ctx.controller.refresh().await {
        return fail("Load failed", &error);
    }

    let key = args.item.clone();
    let selected = ctx.controller.select(&key).map(|row| row.id.clone());
    let mut dialogs = CliDialogs::new(EditOverrides::from(args), flags.yes);

    match ctx.controller.edit(selected.as_deref(), &mut dialogs).await {
        Ok(Outcome::Done) => report(&Notice::success("Edit", format!("updated '{key}'"))),
        Ok(Outcome::NoSelection) => {
            report(&Notice::info("Edit", format!("no item matches '{key}'")))
        }
        Ok(Outcome::Cancelled) => report(&Notice::info(
            "Edit",
            "no fields given (--name, --type, --power, --location); nothing changed",
        )),
        Ok(Outcome::Declined) => Ok(()),
        Err(error) => fail("Update failed", &error),
    }
}
