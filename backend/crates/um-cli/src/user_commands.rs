use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all users
    List,
    /// Add a user
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Age in years
        #[arg(long)]
        age: String,
    },
    /// Change the age of a user
    Update {
        /// User ID
        id: i64,
        #[arg(long)]
        age: i32,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: i64,
    },
}
