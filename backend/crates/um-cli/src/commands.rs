use crate::user_commands::UserCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// User operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}
