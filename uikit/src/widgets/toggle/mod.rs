//! On/off switch built on a checkbox input.

use uidom::{Document, EventKind, NodeId, Page, SelectorError};

use crate::config::KitConfig;
use crate::resolve;
use crate::target::Target;

pub const WRAPPER: &str = ".ui-toggle";
pub const CONTROL: &str = "input[type=checkbox].ui-toggle__input";

pub const ON: &str = "ui-toggle_on";
pub const DISABLED: &str = "ui-toggle_disabled";

fn resolve_input(doc: &Document, target: impl Into<Target>) -> Option<NodeId> {
    resolve::control(doc, &target.into(), CONTROL, WRAPPER)
}

pub fn sync(page: &mut Page, input: NodeId) {
    let on = page.is_checked(input);
    page.set_attr(input, "aria-checked", resolve::bool_attr(on));

    let Some(wrapper) = resolve::closest(page, input, WRAPPER) else {
        log::debug!("[toggle] {input} has no wrapper");
        return;
    };
    let disabled = page.is_disabled(input);
    page.toggle_class(wrapper, ON, on);
    page.toggle_class(wrapper, DISABLED, disabled);
}

pub fn is_on(doc: &Document, target: impl Into<Target>) -> bool {
    resolve_input(doc, target).is_some_and(|input| doc.is_checked(input))
}

pub fn set(page: &mut Page, target: impl Into<Target>, on: bool) {
    let Some(input) = resolve_input(page, target) else {
        return;
    };
    page.set_checked(input, on);
    sync(page, input);
    page.trigger(input, EventKind::Change);
}

pub fn toggle(page: &mut Page, target: impl Into<Target>) {
    let Some(input) = resolve_input(page, target) else {
        return;
    };
    let on = !page.is_checked(input);
    set(page, input, on);
}

pub fn set_disabled(page: &mut Page, target: impl Into<Target>, disabled: bool) {
    let Some(input) = resolve_input(page, target) else {
        return;
    };
    page.set_disabled(input, disabled);
    sync(page, input);
}

pub fn install(page: &mut Page, _config: &KitConfig) -> Result<(), SelectorError> {
    let inputs = resolve::query_all(page, CONTROL);
    for input in &inputs {
        sync(page, *input);
    }

    page.on(EventKind::Change, CONTROL, |page, cx| {
        sync(page, cx.current_target());
    })?;

    log::info!("[toggle] installed ({} instance(s))", inputs.len());
    Ok(())
}
