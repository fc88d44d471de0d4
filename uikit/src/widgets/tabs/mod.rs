//! Tab widget.
//!
//! Tabs and panels are paired by `data-tab-id`. Only tabs and panels whose
//! nearest `.ui-tabs` is the wrapper belong to it, so nested tab widgets
//! stay independent.

mod events;

pub use events::install;

use uidom::{Document, EventKind, NodeId, Page};

use crate::resolve;
use crate::target::Target;

pub const WRAPPER: &str = ".ui-tabs";
const TAB: &str = ".ui-tabs__tab";
const PANEL: &str = ".ui-tabs__panel";

pub const TAB_ACTIVE: &str = "ui-tabs__tab_active";
pub const TAB_DISABLED: &str = "ui-tabs__tab_disabled";
pub const PANEL_ACTIVE: &str = "ui-tabs__panel_active";

/// Name of the event fired on the wrapper when the active tab changes.
pub const CHANGE_EVENT: &str = "uitabs:change";

/// Detail of a [`CHANGE_EVENT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabChange {
    pub tab_id: String,
    pub tab: NodeId,
    pub panel: NodeId,
}

pub fn change_event() -> EventKind {
    EventKind::custom(CHANGE_EVENT)
}

fn resolve_wrapper(doc: &Document, target: impl Into<Target>) -> Option<NodeId> {
    resolve::wrapper(doc, &target.into(), WRAPPER)
}

fn owned(doc: &Document, wrapper: NodeId, selector: &str) -> Vec<NodeId> {
    resolve::find_all(doc, wrapper, selector)
        .into_iter()
        .filter(|node| resolve::closest(doc, *node, WRAPPER) == Some(wrapper))
        .collect()
}

pub(crate) fn tabs_of(doc: &Document, wrapper: NodeId) -> Vec<NodeId> {
    owned(doc, wrapper, TAB)
}

fn panels_of(doc: &Document, wrapper: NodeId) -> Vec<NodeId> {
    owned(doc, wrapper, PANEL)
}

pub(crate) fn tab_id(doc: &Document, node: NodeId) -> Option<&str> {
    doc.data(node, "tab-id").filter(|id| !id.is_empty())
}

pub(crate) fn is_tab_disabled(doc: &Document, tab: NodeId) -> bool {
    doc.has_class(tab, TAB_DISABLED) || doc.is_disabled(tab)
}

fn find_by_id(doc: &Document, nodes: &[NodeId], id: &str) -> Option<NodeId> {
    nodes.iter().copied().find(|n| tab_id(doc, *n) == Some(id))
}

/// Ids of the enabled tabs, in document order.
fn enabled_ids(doc: &Document, wrapper: NodeId) -> Vec<String> {
    tabs_of(doc, wrapper)
        .into_iter()
        .filter(|tab| !is_tab_disabled(doc, *tab))
        .filter_map(|tab| tab_id(doc, tab).map(str::to_string))
        .collect()
}

/// Remove the active marks from every tab and panel.
fn deactivate_all(page: &mut Page, wrapper: NodeId) {
    for tab in tabs_of(page, wrapper) {
        page.remove_class(tab, TAB_ACTIVE);
        page.remove_attr(tab, "data-active");
        page.set_attr(tab, "aria-selected", "false");
    }
    for panel in panels_of(page, wrapper) {
        page.remove_class(panel, PANEL_ACTIVE);
    }
}

/// Make `id` the active tab. Returns false (changing nothing) when the tab
/// or its panel is missing or the tab is disabled.
pub(crate) fn activate(page: &mut Page, wrapper: NodeId, id: &str, silent: bool) -> bool {
    let tab = find_by_id(page, &tabs_of(page, wrapper), id);
    let panel = find_by_id(page, &panels_of(page, wrapper), id);
    let (Some(tab), Some(panel)) = (tab, panel) else {
        log::debug!("[tabs] {wrapper} has no tab/panel {id:?}");
        return false;
    };
    if is_tab_disabled(page, tab) {
        return false;
    }

    deactivate_all(page, wrapper);
    page.add_class(tab, TAB_ACTIVE);
    page.set_attr(tab, "data-active", "1");
    page.set_attr(tab, "aria-selected", "true");
    page.add_class(panel, PANEL_ACTIVE);

    if !silent {
        let detail = TabChange {
            tab_id: id.to_string(),
            tab,
            panel,
        };
        page.trigger_with(wrapper, change_event(), detail);
    }
    true
}

// -------------------------------------------------------------------------
// Public API
// -------------------------------------------------------------------------

/// Id of the active tab.
pub fn get_active(doc: &Document, target: impl Into<Target>) -> Option<String> {
    let wrapper = resolve_wrapper(doc, target)?;
    tabs_of(doc, wrapper)
        .into_iter()
        .find(|tab| doc.has_class(*tab, TAB_ACTIVE))
        .and_then(|tab| tab_id(doc, tab).map(str::to_string))
}

/// Activate tab `id` and fire [`CHANGE_EVENT`]. Disabled or unknown ids
/// are ignored.
pub fn set_active(page: &mut Page, target: impl Into<Target>, id: &str) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    activate(page, wrapper, id, false);
}

/// Enable or disable one tab.
///
/// Disabling the active tab moves activation to the first enabled tab in
/// document order that has a panel, or leaves no tab active. Enabling a
/// tab while none is active activates it.
pub fn set_disabled(page: &mut Page, target: impl Into<Target>, id: &str, disabled: bool) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    let Some(tab) = find_by_id(page, &tabs_of(page, wrapper), id) else {
        return;
    };

    let was_active = page.has_class(tab, TAB_ACTIVE);
    page.toggle_class(tab, TAB_DISABLED, disabled);
    page.set_disabled(tab, disabled);
    page.set_attr(tab, "aria-disabled", resolve::bool_attr(disabled));

    if disabled && was_active {
        // Tabs without a panel cannot be activated, so try each in turn
        let moved = enabled_ids(page, wrapper)
            .iter()
            .any(|next| activate(page, wrapper, next, false));
        if !moved {
            deactivate_all(page, wrapper);
        }
    } else if !disabled && get_active(page, wrapper).is_none() {
        activate(page, wrapper, id, false);
    }
}
