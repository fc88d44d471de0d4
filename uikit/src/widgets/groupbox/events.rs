use uidom::{EventKind, NodeId, Page, SelectorError};

use crate::config::KitConfig;
use crate::resolve;

use super::{COLLAPSIBLE, DISABLED, WRAPPER, sync, toggle};

const INSTANCES: &str = "[data-ui-groupbox]";
const COLLAPSIBLE_HEADERS: &str = ".ui-groupbox_collapsible .ui-groupbox__header";

/// `data-collapsible` counts as set unless it reads `false` or `0`.
fn wants_collapsible(page: &Page, wrapper: NodeId) -> bool {
    page.data(wrapper, "collapsible")
        .is_some_and(|v| !matches!(v.trim(), "false" | "0"))
}

pub fn install(page: &mut Page, _config: &KitConfig) -> Result<(), SelectorError> {
    let wrappers = resolve::query_all(page, INSTANCES);
    for wrapper in &wrappers {
        if wants_collapsible(page, *wrapper) {
            page.add_class(*wrapper, COLLAPSIBLE);
        }
        sync(page, *wrapper);
    }

    page.on(EventKind::Click, COLLAPSIBLE_HEADERS, |page, cx| {
        let Some(wrapper) = resolve::closest(page, cx.current_target(), WRAPPER) else {
            return;
        };
        // A plain box nested inside a collapsible one
        if !page.has_class(wrapper, COLLAPSIBLE) || page.has_class(wrapper, DISABLED) {
            return;
        }
        toggle(page, wrapper);
    })?;

    log::info!("[groupbox] installed ({} instance(s))", wrappers.len());
    Ok(())
}
