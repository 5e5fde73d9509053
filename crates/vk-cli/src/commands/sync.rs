use vk_core::Filter;

use crate::cli::GlobalFlags;
use crate::commands::report;
use crate::context::AppContext;
use crate::output::output_items;

/// Handle `vk sync`: reload everything and show it unfiltered.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let notice = ctx.controller.sync_now().await;
    report(&notice)?;
    output_items(&ctx.controller.visible(&Filter::default()), flags.format)
}
