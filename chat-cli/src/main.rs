//! chat - database export inspection CLI
//!
//! Lists and looks up the typed records held in a JSON export of the chat
//! database.
//!
//! # Examples
//!
//! ```bash
//! # List all users in an export
//! chat users list --export export.json
//!
//! # Look up one user by id
//! chat users get 42
//!
//! # List group chats as pretty JSON
//! chat groups list --pretty
//! ```

use chat_cli::cli::Cli;
use chat_cli::commands::Commands;
use chat_cli::group_commands::GroupCommands;
use chat_cli::user_commands::UserCommands;
use chat_cli::{CliError, Config, ExportStore, logger};

use std::fmt::Display;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use serde::Serialize;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(&config.logging) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    config.log_summary();

    // Explicit flag wins over configuration
    let export_path = cli.export.unwrap_or(config.export.path);

    match run(cli.command, &export_path, cli.pretty) {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, export_path: &str, pretty: bool) -> Result<ExitCode, CliError> {
    let store = ExportStore::open(export_path)?;

    match command {
        Commands::Users { action } => match action {
            UserCommands::List => {
                print_records(&store.users()?, pretty)?;
                Ok(ExitCode::SUCCESS)
            }
            UserCommands::Get { id } => match store.user_by_id(id)? {
                Some(user) => {
                    print_records(&[user], pretty)?;
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    error!("No user with id {id}");
                    Ok(ExitCode::FAILURE)
                }
            },
        },

        Commands::Groups { action } => match action {
            GroupCommands::List => {
                print_records(&store.groups()?, pretty)?;
                Ok(ExitCode::SUCCESS)
            }
        },
    }
}

fn print_records<T: Serialize + Display>(records: &[T], pretty: bool) -> Result<(), CliError> {
    if pretty {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else {
        for record in records {
            println!("{record}");
        }
    }

    Ok(())
}
