//! Widget adapters over a [`uidom::Page`].
//!
//! Widgets keep no state of their own: the document is the model, and
//! each widget only mirrors its native control onto classes, ARIA
//! attributes and text. Call [`install`] once after building the page, or
//! a single widget's `install` to use a subset.

pub mod config;
mod resolve;
pub mod target;
pub mod widgets;

pub use config::KitConfig;
pub use target::Target;
pub use widgets::radio::RadioGroup;
pub use widgets::tabs::TabChange;
pub use widgets::{button, checkbox, combo, groupbox, lineedit, progress, radio, slider, tabs, toggle};

use uidom::{Page, SelectorError};

/// Initialise every widget instance on the page and bind all delegated
/// listeners.
pub fn install(page: &mut Page, config: &KitConfig) -> Result<(), SelectorError> {
    button::install(page, config)?;
    checkbox::install(page, config)?;
    combo::install(page, config)?;
    groupbox::install(page, config)?;
    lineedit::install(page, config)?;
    progress::install(page, config)?;
    radio::install(page, config)?;
    slider::install(page, config)?;
    tabs::install(page, config)?;
    toggle::install(page, config)?;
    Ok(())
}
