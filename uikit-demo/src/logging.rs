//! Logger setup.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use crate::error::DemoError;

pub fn parse_level(level: &str) -> Result<LevelFilter, DemoError> {
    LevelFilter::from_str(level.trim()).map_err(|_| DemoError::LogLevel(level.to_string()))
}

/// Log to `file` when given, otherwise to stderr (stdout carries script
/// output).
pub fn init(level: &str, file: Option<&Path>) -> Result<(), DemoError> {
    let level = parse_level(level)?;
    let result = match file {
        Some(path) => {
            let file = File::create(path)
                .map_err(|err| DemoError::Logger(format!("{}: {err}", path.display())))?;
            WriteLogger::init(level, Config::default(), file)
        }
        None => TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto),
    };
    result.map_err(|err| DemoError::Logger(err.to_string()))
}
