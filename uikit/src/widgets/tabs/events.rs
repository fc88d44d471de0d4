use uidom::{EventKind, NodeId, Page, SelectorError};

use crate::config::KitConfig;
use crate::resolve;

use super::{WRAPPER, activate, is_tab_disabled, tab_id, tabs_of};

const INSTANCES: &str = "[data-ui-tabs]";
const TAB: &str = ".ui-tabs__tab";

/// Pick the initial tab: the enabled one marked `data-active="1"`, else
/// the first enabled one. No change event is fired.
fn init(page: &mut Page, wrapper: NodeId) {
    let candidates: Vec<NodeId> = tabs_of(page, wrapper)
        .into_iter()
        .filter(|tab| tab_id(page, *tab).is_some() && !is_tab_disabled(page, *tab))
        .collect();
    let initial = candidates
        .iter()
        .copied()
        .find(|tab| page.data(*tab, "active") == Some("1"))
        .or_else(|| candidates.first().copied());
    let Some(id) = initial.and_then(|tab| tab_id(page, tab).map(str::to_string)) else {
        log::debug!("[tabs] {wrapper} has no enabled tab");
        return;
    };
    activate(page, wrapper, &id, true);
}

pub fn install(page: &mut Page, _config: &KitConfig) -> Result<(), SelectorError> {
    let wrappers = resolve::query_all(page, INSTANCES);
    for wrapper in &wrappers {
        init(page, *wrapper);
    }

    page.on(EventKind::Click, TAB, |page, cx| {
        let tab = cx.current_target();
        if is_tab_disabled(page, tab) {
            return;
        }
        let Some(wrapper) = resolve::closest(page, tab, WRAPPER) else {
            return;
        };
        let Some(id) = tab_id(page, tab).map(str::to_string) else {
            return;
        };
        activate(page, wrapper, &id, false);
    })?;

    log::info!("[tabs] installed ({} instance(s))", wrappers.len());
    Ok(())
}
