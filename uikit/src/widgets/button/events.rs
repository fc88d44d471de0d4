//! Delegated behaviour for data-driven buttons.

use uidom::{EventKind, Page, SelectorError};

use crate::config::KitConfig;
use crate::resolve;

use super::{ACTIVE, WRAPPER, set_loading, toggle};

const TOGGLE_BUTTONS: &str = "[data-ui-btn-toggle]";
const LOADING_BUTTONS: &str = "[data-ui-btn-loading]";

/// Sync toggle buttons and bind the `data-ui-btn-*` click behaviours.
pub fn install(page: &mut Page, config: &KitConfig) -> Result<(), SelectorError> {
    for btn in resolve::query_all(page, TOGGLE_BUTTONS) {
        let active = page.has_class(btn, ACTIVE);
        page.set_attr(btn, "aria-pressed", resolve::bool_attr(active));
    }

    page.on(EventKind::Click, TOGGLE_BUTTONS, |page, cx| {
        let btn = cx.current_target();
        if page.is_disabled(btn) {
            return;
        }
        toggle(page, btn);
    })?;

    let delay = config.loading_demo();
    page.on(EventKind::Click, LOADING_BUTTONS, move |page, cx| {
        let btn = cx.current_target();
        if page.is_disabled(btn) {
            return;
        }
        set_loading(page, btn, true);
        page.set_timeout(delay, move |page| set_loading(page, btn, false));
    })?;

    log::info!(
        "[button] installed ({} instance(s))",
        resolve::query_all(page, WRAPPER).len()
    );
    Ok(())
}
