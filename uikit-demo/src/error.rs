//! Error types for the demo binary.

use std::io;
use std::path::PathBuf;

use uidom::SelectorError;

/// Errors that stop the demo.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// A configuration or script file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::DemoConfig`].
    #[error("Invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Unknown `log_level` value.
    #[error("Invalid log level: {0}")]
    LogLevel(String),

    /// The log file could not be created or a logger was already set.
    #[error("Failed to initialize logging: {0}")]
    Logger(String),

    /// A widget selector failed to parse during installation.
    #[error("Failed to install widgets: {0}")]
    Install(#[from] SelectorError),

    /// Reading commands or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A script line that could not be parsed. The script keeps running.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A required argument is missing.
    #[error("{command} needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("{0} takes no arguments")]
    UnexpectedArgument(&'static str),
}
