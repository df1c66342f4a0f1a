use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List every user in the export
    List,

    /// Look up one user by id
    Get {
        /// User id to look for
        id: i32,
    },
}
