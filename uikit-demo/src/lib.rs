//! Device control panel built on `uikit`, driven by a command script.

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod panel;
pub mod paths;
pub mod script;

use uidom::{Document, Page};

pub use config::DemoConfig;
pub use controller::Controller;
pub use error::{DemoError, ScriptError};
pub use script::{Command, Flow, Session};

/// Build the panel page with widgets and behaviour installed.
pub fn build_page(config: &DemoConfig) -> Result<(Page, Controller), DemoError> {
    let mut page = Page::new(Document::from_element(panel::build()));
    uikit::install(&mut page, &config.kit)?;
    let controller = controller::install(&mut page, config)?;
    Ok((page, controller))
}
