use clap::{Args, Subcommand};
use vk_core::{ItemType, Location, TypeFilter};

use crate::cli::subcommands::LocalCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List items, optionally filtered by name and type.
    List(ListArgs),
    /// Add an item.
    Add(AddArgs),
    /// Edit an item. Notes are kept as they are.
    Edit(EditArgs),
    /// Delete (archive) an item.
    Delete(DeleteArgs),
    /// Reload all items from Notion.
    Sync,
    /// Create a new Notion inventory database.
    #[command(name = "create-db")]
    CreateDb(CreateDbArgs),
    /// Make a database the active one for item commands.
    #[command(name = "use-db")]
    UseDb(UseDbArgs),
    /// Local bootstrap file.
    Local {
        #[command(subcommand)]
        action: LocalCommands,
    },
}

/// Arguments for `vk list`.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring of the item name.
    #[arg(short, long, default_value = "")]
    pub search: String,
    /// Item type to show, or `All`.
    #[arg(short = 't', long = "type", default_value = "All")]
    pub item_type: TypeFilter,
}

/// Arguments for `vk add`.
#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long = "type")]
    pub item_type: ItemType,
    /// Power level; must be an integer.
    #[arg(long, allow_hyphen_values = true)]
    pub power: String,
    #[arg(long)]
    pub location: Location,
    #[arg(long, default_value = "")]
    pub notes: String,
}

/// Arguments for `vk edit`. Omitted fields keep their current value; with no
/// field flags at all the edit is cancelled.
#[derive(Clone, Debug, Args)]
pub struct EditArgs {
    /// Item id, or its exact name (case-insensitive) when unique.
    pub item: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long = "type")]
    pub item_type: Option<ItemType>,
    #[arg(long, allow_hyphen_values = true)]
    pub power: Option<String>,
    #[arg(long)]
    pub location: Option<Location>,
}

/// Arguments for `vk delete`.
#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    /// Item id, or its exact name (case-insensitive) when unique.
    pub item: String,
}

/// Arguments for `vk create-db`.
#[derive(Clone, Debug, Args)]
pub struct CreateDbArgs {
    /// Switch item commands to the new database and save it to the project config.
    #[arg(long)]
    pub activate: bool,
}

/// Arguments for `vk use-db`.
#[derive(Clone, Debug, Args)]
pub struct UseDbArgs {
    pub database_id: String,
}
