//! um - user management CLI
//!
//! # Examples
//!
//! ```bash
//! # List all users
//! um user list
//!
//! # Add a user, printing the created row as JSON
//! um user add --name Ada --email ada@example.com --age 36 --pretty
//!
//! # Change an age, then delete
//! um user update 1 --age 37
//! um user delete 1
//! ```

use um_cli::{
    Client, UserForm, UserList, UserStore, cli::Cli, commands::Commands,
    form::SUBMIT_FAILED_ERROR, logger, user_commands::UserCommands,
};

use um_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use serde::Serialize;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = logger::initialize(LevelFilter::Warn) {
        eprintln!("Error initializing logger: {}", e);
    }

    // Server URL: explicit flag > config (UM_SERVER_URL, config.toml) > default
    let server_url = match cli.server {
        Some(ref url) => url.clone(),
        None => match load_server_url() {
            Ok(url) => url,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let mut store = UserStore::new(Client::new(&server_url));
    let json = cli.json || cli.pretty;

    let Commands::User { action } = cli.command;
    let result = match action {
        UserCommands::List => store
            .refresh()
            .await
            .map(serde_json::to_value),
        UserCommands::Add { name, email, age } => {
            let mut form = UserForm::new(name, email, age);
            match form.submit(&mut store).await {
                Some(user) => Ok(serde_json::to_value(user)),
                None => {
                    eprintln!("Error: {}", form.error().unwrap_or(SUBMIT_FAILED_ERROR));
                    return ExitCode::FAILURE;
                }
            }
        }
        UserCommands::Update { id, age } => store
            .update_age(id, age)
            .await
            .map(serde_json::to_value),
        UserCommands::Delete { id } => match UserList::delete(&mut store, id).await {
            Some(deleted) => Ok(serde_json::to_value(deleted)),
            None => {
                eprintln!("Error: could not delete user {}", id);
                return ExitCode::FAILURE;
            }
        },
    };

    let value = match result {
        Ok(Ok(value)) => value,
        Ok(Err(e)) => {
            eprintln!("Error serializing response: {}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if json {
        print_json(&value, cli.pretty)
    } else {
        println!("{}", UserList::new(store.users()));
        ExitCode::SUCCESS
    }
}

fn load_server_url() -> Result<String, um_config::ConfigError> {
    let config = Config::load()?;
    config.client.validate()?;
    Ok(config.client.server_url)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}
