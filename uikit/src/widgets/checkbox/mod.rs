//! Checkbox adapter.
//!
//! Mirrors the native checkbox onto its `.ui-chk` wrapper. Indeterminate
//! and checked are mutually exclusive: setting one clears the other.

mod events;

pub use events::install;

use uidom::{Document, EventKind, NodeId, Page};

use crate::resolve;
use crate::target::Target;

pub const WRAPPER: &str = ".ui-chk";
pub const CONTROL: &str = "input[type=checkbox].ui-chk__input";

pub const CHECKED: &str = "ui-chk_checked";
pub const DISABLED: &str = "ui-chk_disabled";
pub const INDETERMINATE: &str = "ui-chk_indeterminate";

fn resolve_input(doc: &Document, target: impl Into<Target>) -> Option<NodeId> {
    resolve::control(doc, &target.into(), CONTROL, WRAPPER)
}

/// Recompute wrapper classes and `aria-checked` from the input.
pub fn sync(page: &mut Page, input: NodeId) {
    let checked = page.is_checked(input);
    let indeterminate = page.is_indeterminate(input);
    let aria = if indeterminate {
        "mixed"
    } else {
        resolve::bool_attr(checked)
    };
    page.set_attr(input, "aria-checked", aria);

    let Some(wrapper) = resolve::closest(page, input, WRAPPER) else {
        log::debug!("[checkbox] {input} has no wrapper");
        return;
    };
    let disabled = page.is_disabled(input);
    page.toggle_class(wrapper, CHECKED, checked);
    page.toggle_class(wrapper, DISABLED, disabled);
    page.toggle_class(wrapper, INDETERMINATE, indeterminate);
}

pub fn is_checked(doc: &Document, target: impl Into<Target>) -> bool {
    resolve_input(doc, target).is_some_and(|input| doc.is_checked(input))
}

pub fn is_indeterminate(doc: &Document, target: impl Into<Target>) -> bool {
    resolve_input(doc, target).is_some_and(|input| doc.is_indeterminate(input))
}

/// Check or uncheck, clearing indeterminate, then notify `change`.
pub fn set(page: &mut Page, target: impl Into<Target>, checked: bool) {
    let Some(input) = resolve_input(page, target) else {
        return;
    };
    page.set_checked(input, checked);
    page.set_indeterminate(input, false);
    sync(page, input);
    page.trigger(input, EventKind::Change);
}

pub fn toggle(page: &mut Page, target: impl Into<Target>) {
    let Some(input) = resolve_input(page, target) else {
        return;
    };
    let checked = !page.is_checked(input);
    set(page, input, checked);
}

/// Entering the indeterminate state unchecks the box.
pub fn set_indeterminate(page: &mut Page, target: impl Into<Target>, indeterminate: bool) {
    let Some(input) = resolve_input(page, target) else {
        return;
    };
    page.set_indeterminate(input, indeterminate);
    if indeterminate {
        page.set_checked(input, false);
    }
    sync(page, input);
}

pub fn set_disabled(page: &mut Page, target: impl Into<Target>, disabled: bool) {
    let Some(input) = resolve_input(page, target) else {
        return;
    };
    page.set_disabled(input, disabled);
    sync(page, input);
}
