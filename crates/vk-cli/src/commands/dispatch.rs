use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::handle(&args, ctx, flags).await,
        Commands::Add(args) => commands::add::handle(args, ctx, flags).await,
        Commands::Edit(args) => commands::edit::handle(args, ctx, flags).await,
        Commands::Delete(args) => commands::delete::handle(&args, ctx, flags).await,
        Commands::Sync => commands::sync::handle(ctx, flags).await,
        Commands::CreateDb(args) => commands::create_db::handle(&args, ctx, flags).await,
        Commands::UseDb(args) => commands::use_db::handle(args, ctx, flags).await,
        Commands::Local { action } => commands::local::handle(&action, ctx, flags),
    }
}
