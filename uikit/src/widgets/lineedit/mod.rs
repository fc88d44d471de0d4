//! Single-line text field with an error hint.
//!
//! The error message goes into `.ui-lineedit__error-text`. A plain
//! `.ui-lineedit__hint` is borrowed for it when there is no dedicated node
//! (its text is restored on [`clear_error`]), and one is created otherwise.

use uidom::{Document, Element, EventKind, NodeId, Page, SelectorError};

use crate::config::KitConfig;
use crate::resolve;
use crate::target::Target;

pub const WRAPPER: &str = ".ui-lineedit";
const INSTANCES: &str = "[data-ui-lineedit]";
const INPUT: &str = ".ui-lineedit__input";
const HINT: &str = ".ui-lineedit__hint";
const ERROR_TEXT: &str = ".ui-lineedit__error-text";

pub const ERROR: &str = "ui-lineedit_error";
pub const DISABLED: &str = "ui-lineedit_disabled";

const ERROR_TEXT_CLASS: &str = "ui-lineedit__error-text";
/// Data key holding a borrowed hint's own text.
const HINT_TEXT: &str = "hint-text";

fn resolve_wrapper(doc: &Document, target: impl Into<Target>) -> Option<NodeId> {
    resolve::wrapper(doc, &target.into(), WRAPPER)
}

fn input_of(doc: &Document, wrapper: NodeId) -> Option<NodeId> {
    resolve::find_first(doc, wrapper, INPUT)
}

// -------------------------------------------------------------------------
// Value
// -------------------------------------------------------------------------

/// Current text; empty when the target does not resolve.
pub fn get_value(doc: &Document, target: impl Into<Target>) -> String {
    resolve_wrapper(doc, target)
        .and_then(|wrapper| input_of(doc, wrapper))
        .and_then(|input| doc.value(input))
        .unwrap_or_default()
}

/// Replace the text and notify `change`.
pub fn set_value(page: &mut Page, target: impl Into<Target>, value: &str) {
    let Some(input) = resolve_wrapper(page, target).and_then(|w| input_of(page, w)) else {
        return;
    };
    page.set_value(input, value);
    page.trigger(input, EventKind::Change);
}

/// Focus the input with the caret after the last character.
pub fn focus(page: &mut Page, target: impl Into<Target>) -> bool {
    let Some(input) = resolve_wrapper(page, target).and_then(|w| input_of(page, w)) else {
        return false;
    };
    page.focus(input)
}

pub fn set_disabled(page: &mut Page, target: impl Into<Target>, disabled: bool) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    let Some(input) = input_of(page, wrapper) else {
        return;
    };
    page.set_disabled(input, disabled);
    page.toggle_class(wrapper, DISABLED, disabled);
}

// -------------------------------------------------------------------------
// Error state
// -------------------------------------------------------------------------

pub fn has_error(doc: &Document, target: impl Into<Target>) -> bool {
    resolve_wrapper(doc, target).is_some_and(|wrapper| doc.has_class(wrapper, ERROR))
}

fn error_node(page: &mut Page, wrapper: NodeId) -> NodeId {
    if let Some(node) = resolve::find_first(page, wrapper, ERROR_TEXT) {
        return node;
    }
    if let Some(hint) = resolve::find_first(page, wrapper, HINT) {
        let original = page.text(hint);
        page.set_data(hint, HINT_TEXT, original);
        page.add_class(hint, ERROR_TEXT_CLASS);
        return hint;
    }
    page.append_element(
        wrapper,
        Element::div().class("ui-lineedit__hint ui-lineedit__error-text"),
    )
}

/// Mark the field invalid. `None` keeps whatever message is shown.
pub fn set_error(page: &mut Page, target: impl Into<Target>, message: Option<&str>) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    page.add_class(wrapper, ERROR);
    if let Some(input) = input_of(page, wrapper) {
        page.set_attr(input, "aria-invalid", "true");
    }

    let node = error_node(page, wrapper);
    if let Some(message) = message {
        page.set_text(node, message);
    }
}

pub fn clear_error(page: &mut Page, target: impl Into<Target>) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    page.remove_class(wrapper, ERROR);
    if let Some(input) = input_of(page, wrapper) {
        page.remove_attr(input, "aria-invalid");
    }

    let Some(node) = resolve::find_first(page, wrapper, ERROR_TEXT) else {
        return;
    };
    match page.remove_data(node, HINT_TEXT) {
        Some(original) => {
            page.remove_class(node, ERROR_TEXT_CLASS);
            page.set_text(node, original);
        }
        None => page.set_text(node, ""),
    }
}

/// Apply `ui-lineedit_disabled` from markup to the inputs. Nothing is
/// bound: the input's own value is the state.
pub fn install(page: &mut Page, _config: &KitConfig) -> Result<(), SelectorError> {
    let wrappers = resolve::query_all(page, INSTANCES);
    for wrapper in &wrappers {
        let Some(input) = input_of(page, *wrapper) else {
            log::debug!("[lineedit] {wrapper} has no input");
            continue;
        };
        if page.has_class(*wrapper, DISABLED) {
            page.set_disabled(input, true);
        }
    }
    log::info!("[lineedit] installed ({} instance(s))", wrappers.len());
    Ok(())
}
