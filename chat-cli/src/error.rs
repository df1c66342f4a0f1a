use crate::config::ConfigError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Core error: {0}")]
    Core(#[from] chat_core::CoreError),

    #[error("Failed to read export file {path}: {source}")]
    ExportFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON render error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
