use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "um")]
#[command(about = "User management client for the um-server API")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (defaults to client.server_url from config, or UM_SERVER_URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Print the command result as JSON instead of the user list
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(long, global = true)]
    pub pretty: bool,
}
