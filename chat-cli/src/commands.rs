use crate::group_commands::GroupCommands;
use crate::user_commands::UserCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect user records
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Inspect group chat records
    Groups {
        #[command(subcommand)]
        action: GroupCommands,
    },
}
