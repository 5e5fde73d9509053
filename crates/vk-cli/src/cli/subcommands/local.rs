use clap::Subcommand;

/// Local bootstrap file commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LocalCommands {
    /// Print the bootstrap file as loaded at startup.
    Show,
    /// Write the bootstrap file.
    Save {
        /// Fill an empty file with the sample characters and items.
        #[arg(long)]
        sample: bool,
    },
}
