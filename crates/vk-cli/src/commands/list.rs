use vk_core::Filter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::fail;
use crate::context::AppContext;
use crate::output::output_items;

/// Handle `vk list`.
pub async fn handle(
    args: &ListArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Err(error) = ctx.controller.refresh().await {
        return fail("Load failed", &error);
    }

    let filter = Filter::new(args.search.clone(), args.item_type);
    let visible = ctx.controller.visible(&filter);
    tracing::debug!(
        shown = visible.len(),
        total = ctx.controller.rows().len(),
        "filtered item list"
    );
    output_items(&visible, flags.format)
}
