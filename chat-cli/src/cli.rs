use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "chat")]
#[command(about = "Inspect JSON exports of the chat database")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the export file (overrides configuration)
    #[arg(long, global = true)]
    pub export: Option<String>,

    /// Print records as pretty JSON instead of one line each
    #[arg(long, global = true)]
    pub pretty: bool,
}
