use clap::Subcommand;

#[derive(Subcommand)]
pub enum GroupCommands {
    /// List every group chat in the export
    List,
}
