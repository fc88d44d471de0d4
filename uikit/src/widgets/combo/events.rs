use uidom::{EventKind, Page, SelectorError};

use crate::config::KitConfig;
use crate::resolve;

use super::{DISABLED, OPTION, SELECT, VALUE, WRAPPER, close, close_all, refresh, set, sync_label, toggle};

const INSTANCES: &str = "[data-ui-combo]";

pub fn install(page: &mut Page, _config: &KitConfig) -> Result<(), SelectorError> {
    let wrappers = resolve::query_all(page, INSTANCES);
    for wrapper in &wrappers {
        refresh(page, *wrapper);
    }

    page.on(EventKind::Click, VALUE, |page, cx| {
        let Some(wrapper) = resolve::closest(page, cx.current_target(), WRAPPER) else {
            return;
        };
        if page.has_class(wrapper, DISABLED) {
            return;
        }
        cx.stop_propagation();
        toggle(page, wrapper);
    })?;

    page.on(EventKind::Click, OPTION, |page, cx| {
        let option = cx.current_target();
        let Some(wrapper) = resolve::closest(page, option, WRAPPER) else {
            return;
        };
        if page.has_class(wrapper, DISABLED) {
            return;
        }
        cx.stop_propagation();
        let value = page.data(option, "value").unwrap_or_default().to_string();
        set(page, wrapper, &value);
        close(page, wrapper);
    })?;

    // Any click that was not stopped by a combo closes them all
    page.on_document(EventKind::Click, |page, _| close_all(page));

    page.on(EventKind::Change, SELECT, |page, cx| {
        if let Some(wrapper) = resolve::closest(page, cx.current_target(), WRAPPER) {
            sync_label(page, wrapper);
        }
    })?;

    log::info!("[combo] installed ({} instance(s))", wrappers.len());
    Ok(())
}
