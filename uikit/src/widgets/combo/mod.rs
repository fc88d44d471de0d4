//! Combo box over a native `<select>`.
//!
//! The select holds the value. The value button shows the selected
//! option's label and the dropdown holds one generated
//! `button.ui-combo__option` per option. At most one combo is open on a
//! page.

mod events;

pub use events::install;

use uidom::{Document, Element, EventKind, NodeId, Page};

use crate::resolve;
use crate::target::Target;

pub const WRAPPER: &str = ".ui-combo";
const SELECT: &str = ".ui-combo__select";
const VALUE: &str = ".ui-combo__value";
const DROPDOWN: &str = ".ui-combo__dropdown";
const OPTION: &str = ".ui-combo__option";
const OPEN_SELECTOR: &str = ".ui-combo_open";

pub const OPEN: &str = "ui-combo_open";
pub const DISABLED: &str = "ui-combo_disabled";
pub const VALUE_DISABLED: &str = "ui-combo__value_disabled";
pub const OPTION_SELECTED: &str = "ui-combo__option_selected";

/// The three required parts of one combo.
#[derive(Debug, Clone, Copy)]
struct Parts {
    select: NodeId,
    value: NodeId,
    dropdown: NodeId,
}

impl Parts {
    fn find(doc: &Document, wrapper: NodeId) -> Option<Self> {
        let select = resolve::find_first(doc, wrapper, SELECT);
        let value = resolve::find_first(doc, wrapper, VALUE);
        let dropdown = resolve::find_first(doc, wrapper, DROPDOWN);
        match (select, value, dropdown) {
            (Some(select), Some(value), Some(dropdown)) => Some(Self {
                select,
                value,
                dropdown,
            }),
            _ => {
                log::debug!("[combo] {wrapper} is missing parts");
                None
            }
        }
    }
}

fn resolve_wrapper(doc: &Document, target: impl Into<Target>) -> Option<NodeId> {
    resolve::wrapper(doc, &target.into(), WRAPPER)
}

// -------------------------------------------------------------------------
// Sync
// -------------------------------------------------------------------------

/// Rebuild the dropdown from the select's options and re-sync.
pub fn refresh(page: &mut Page, target: impl Into<Target>) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    let Some(parts) = Parts::find(page, wrapper) else {
        return;
    };

    page.clear_children(parts.dropdown);
    for option in page.options(parts.select) {
        let value = page.value(option).unwrap_or_default();
        let label = page.text(option);
        page.append_element(
            parts.dropdown,
            Element::button()
                .class("ui-combo__option")
                .data("value", value)
                .attr("role", "option")
                .text(label),
        );
    }

    sync_label(page, wrapper);
    if page.is_disabled(parts.select) || page.has_class(wrapper, DISABLED) {
        set_disabled(page, wrapper, true);
    }
}

/// Show the selected option's label and mark it in the dropdown.
pub fn sync_label(page: &mut Page, wrapper: NodeId) {
    let Some(parts) = Parts::find(page, wrapper) else {
        return;
    };
    let Some(selected) = page.selected_option(parts.select) else {
        return;
    };
    let value = page.value(selected).unwrap_or_default();
    let label = page.text(selected);
    page.set_text(parts.value, label);
    page.set_data(parts.value, "value", value.as_str());

    for option in resolve::find_all(page, parts.dropdown, OPTION) {
        let is_selected = page.data(option, "value") == Some(value.as_str());
        page.toggle_class(option, OPTION_SELECTED, is_selected);
        page.set_attr(option, "aria-selected", resolve::bool_attr(is_selected));
    }
}

// -------------------------------------------------------------------------
// Value
// -------------------------------------------------------------------------

pub fn get(doc: &Document, target: impl Into<Target>) -> Option<String> {
    let wrapper = resolve_wrapper(doc, target)?;
    let select = resolve::find_first(doc, wrapper, SELECT)?;
    doc.value(select)
}

/// Select the option with `value` and notify `change` on the select.
/// Unknown values are ignored.
pub fn set(page: &mut Page, target: impl Into<Target>, value: &str) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    let Some(parts) = Parts::find(page, wrapper) else {
        return;
    };
    if !page.set_select_value(parts.select, value) {
        log::warn!("[combo] {wrapper} has no option {value:?}");
        return;
    }
    sync_label(page, wrapper);
    page.trigger(parts.select, EventKind::Change);
}

// -------------------------------------------------------------------------
// Open state
// -------------------------------------------------------------------------

pub fn is_open(doc: &Document, target: impl Into<Target>) -> bool {
    resolve_wrapper(doc, target).is_some_and(|wrapper| doc.has_class(wrapper, OPEN))
}

fn set_open(page: &mut Page, wrapper: NodeId, open: bool) {
    page.toggle_class(wrapper, OPEN, open);
    if let Some(value) = resolve::find_first(page, wrapper, VALUE) {
        page.set_attr(value, "aria-expanded", resolve::bool_attr(open));
    }
}

/// Open the dropdown, closing every other combo first. Disabled combos
/// stay closed.
pub fn open(page: &mut Page, target: impl Into<Target>) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    if page.has_class(wrapper, DISABLED) {
        return;
    }
    close_all(page);
    set_open(page, wrapper, true);
}

pub fn close(page: &mut Page, target: impl Into<Target>) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    set_open(page, wrapper, false);
}

pub fn toggle(page: &mut Page, target: impl Into<Target>) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    if page.has_class(wrapper, OPEN) {
        close(page, wrapper);
    } else {
        open(page, wrapper);
    }
}

pub fn close_all(page: &mut Page) {
    for wrapper in resolve::query_all(page, OPEN_SELECTOR) {
        set_open(page, wrapper, false);
    }
}

/// Disabling also closes the dropdown.
pub fn set_disabled(page: &mut Page, target: impl Into<Target>, disabled: bool) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    page.toggle_class(wrapper, DISABLED, disabled);
    if let Some(select) = resolve::find_first(page, wrapper, SELECT) {
        page.set_disabled(select, disabled);
    }
    if let Some(value) = resolve::find_first(page, wrapper, VALUE) {
        page.toggle_class(value, VALUE_DISABLED, disabled);
    }
    if disabled {
        set_open(page, wrapper, false);
    }
}
