//! Titled group box, optionally collapsible.

mod events;

pub use events::install;

use uidom::{Document, Element, NodeId, Page};

use crate::resolve;
use crate::target::Target;

pub const WRAPPER: &str = ".ui-groupbox";
const HEADER: &str = ".ui-groupbox__header";
const TITLE: &str = ".ui-groupbox__title";
const TITLES: &str = ".ui-groupbox__titles";
const SUBTITLE: &str = ".ui-groupbox__subtitle";

pub const COLLAPSIBLE: &str = "ui-groupbox_collapsible";
pub const COLLAPSED: &str = "ui-groupbox_collapsed";
pub const DISABLED: &str = "ui-groupbox_disabled";

fn resolve_wrapper(doc: &Document, target: impl Into<Target>) -> Option<NodeId> {
    resolve::wrapper(doc, &target.into(), WRAPPER)
}

/// Mirror the collapsed state onto the header's `aria-expanded`.
pub fn sync(page: &mut Page, wrapper: NodeId) {
    if !page.has_class(wrapper, COLLAPSIBLE) {
        return;
    }
    let expanded = !page.has_class(wrapper, COLLAPSED);
    if let Some(header) = resolve::find_first(page, wrapper, HEADER) {
        page.set_attr(header, "aria-expanded", resolve::bool_attr(expanded));
    }
}

pub fn is_collapsed(doc: &Document, target: impl Into<Target>) -> bool {
    resolve_wrapper(doc, target).is_some_and(|wrapper| doc.has_class(wrapper, COLLAPSED))
}

pub fn collapse(page: &mut Page, target: impl Into<Target>) {
    set_collapsed(page, target, true);
}

pub fn expand(page: &mut Page, target: impl Into<Target>) {
    set_collapsed(page, target, false);
}

pub fn toggle(page: &mut Page, target: impl Into<Target>) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    let collapsed = page.has_class(wrapper, COLLAPSED);
    set_collapsed(page, wrapper, !collapsed);
}

fn set_collapsed(page: &mut Page, target: impl Into<Target>, collapsed: bool) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    page.toggle_class(wrapper, COLLAPSED, collapsed);
    sync(page, wrapper);
}

pub fn set_disabled(page: &mut Page, target: impl Into<Target>, disabled: bool) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    page.toggle_class(wrapper, DISABLED, disabled);
}

pub fn set_title(page: &mut Page, target: impl Into<Target>, title: &str) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    if let Some(node) = resolve::find_first(page, wrapper, TITLE) {
        page.set_text(node, title);
    }
}

/// Set the subtitle, creating its node inside `.ui-groupbox__titles` when
/// there is none yet and `subtitle` is not empty.
pub fn set_subtitle(page: &mut Page, target: impl Into<Target>, subtitle: &str) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    let existing = resolve::find_first(page, wrapper, SUBTITLE);
    let node = match existing {
        Some(node) => node,
        None if subtitle.is_empty() => return,
        None => {
            let Some(titles) = resolve::find_first(page, wrapper, TITLES) else {
                log::debug!("[groupbox] {wrapper} has no titles block");
                return;
            };
            page.append_element(titles, Element::div().class("ui-groupbox__subtitle"))
        }
    };
    page.set_text(node, subtitle);
}
