//! Progress bar.
//!
//! Range and value are kept in the wrapper's data store (`min`, `max`,
//! `value`), seeded from the `data-*` attributes. The stored value is
//! always clamped to the range.

use uidom::{Document, NodeId, Page, SelectorError};

use crate::config::{DEFAULT_PLACEHOLDER, KitConfig};
use crate::resolve;
use crate::target::Target;

pub const WRAPPER: &str = ".ui-progress";
const INSTANCES: &str = "[data-ui-progress]";
const BAR: &str = ".ui-progress__bar";
const VALUE: &str = ".ui-progress__value";
const LABEL: &str = ".ui-progress__label";

pub const INDETERMINATE: &str = "ui-progress_indeterminate";
pub const DISABLED: &str = "ui-progress_disabled";

const PLACEHOLDER_KEY: &str = "placeholder";

const DEFAULT_MIN: f64 = 0.0;
const DEFAULT_MAX: f64 = 100.0;

fn resolve_wrapper(doc: &Document, target: impl Into<Target>) -> Option<NodeId> {
    resolve::wrapper(doc, &target.into(), WRAPPER)
}

fn range(doc: &Document, wrapper: NodeId) -> (f64, f64) {
    let min = resolve::number(doc.data(wrapper, "min")).unwrap_or(DEFAULT_MIN);
    let max = resolve::number(doc.data(wrapper, "max")).unwrap_or(DEFAULT_MAX);
    resolve::ordered(min, max)
}

fn stored_value(doc: &Document, wrapper: NodeId) -> Option<f64> {
    resolve::number(doc.data(wrapper, "value"))
}

/// Normalise the data store of one instance and render it.
fn init(page: &mut Page, wrapper: NodeId, placeholder: &str) {
    let (min, max) = range(page, wrapper);
    page.set_data(wrapper, "min", min.to_string());
    page.set_data(wrapper, "max", max.to_string());
    match stored_value(page, wrapper) {
        Some(value) => page.set_data(wrapper, "value", resolve::clamp(value, min, max).to_string()),
        None => {
            page.remove_data(wrapper, "value");
        }
    }
    if page.data(wrapper, PLACEHOLDER_KEY).is_none() {
        page.set_data(wrapper, PLACEHOLDER_KEY, placeholder);
    }
    page.set_attr(wrapper, "role", "progressbar");
    sync(page, wrapper);
}

/// Render bar width, value text and ARIA attributes.
pub fn sync(page: &mut Page, wrapper: NodeId) {
    let (min, max) = range(page, wrapper);
    page.set_attr(wrapper, "aria-valuemin", min.to_string());
    page.set_attr(wrapper, "aria-valuemax", max.to_string());

    let bar = resolve::find_first(page, wrapper, BAR);
    let value_text = resolve::find_first(page, wrapper, VALUE);

    if page.has_class(wrapper, INDETERMINATE) {
        page.remove_attr(wrapper, "aria-valuenow");
        if let Some(bar) = bar {
            page.remove_style(bar, "width");
        }
        if let Some(node) = value_text {
            let placeholder = page
                .data(wrapper, PLACEHOLDER_KEY)
                .unwrap_or(DEFAULT_PLACEHOLDER)
                .to_string();
            page.set_text(node, placeholder);
        }
        return;
    }

    let value = resolve::clamp(stored_value(page, wrapper).unwrap_or(f64::NAN), min, max);
    let pct = resolve::percent(value, min, max);
    page.set_attr(wrapper, "aria-valuenow", value.to_string());
    if let Some(bar) = bar {
        page.set_style(bar, "width", format!("{}%", resolve::format_number(pct)));
    }
    if let Some(node) = value_text {
        page.set_text(node, format!("{}%", resolve::format_number(pct.round())));
    }
}

// -------------------------------------------------------------------------
// Read methods
// -------------------------------------------------------------------------

/// Stored value, `None` if unresolved or never set.
pub fn get(doc: &Document, target: impl Into<Target>) -> Option<f64> {
    resolve_wrapper(doc, target).and_then(|wrapper| stored_value(doc, wrapper))
}

/// Position within the range in percent. `None` while indeterminate.
pub fn percent(doc: &Document, target: impl Into<Target>) -> Option<f64> {
    let wrapper = resolve_wrapper(doc, target)?;
    if doc.has_class(wrapper, INDETERMINATE) {
        return None;
    }
    let (min, max) = range(doc, wrapper);
    let value = resolve::clamp(stored_value(doc, wrapper).unwrap_or(min), min, max);
    Some(resolve::percent(value, min, max))
}

pub fn is_indeterminate(doc: &Document, target: impl Into<Target>) -> bool {
    resolve_wrapper(doc, target).is_some_and(|wrapper| doc.has_class(wrapper, INDETERMINATE))
}

// -------------------------------------------------------------------------
// Write methods
// -------------------------------------------------------------------------

/// Store `value` clamped to the range (non-finite falls back to `min`).
/// Leaves indeterminate mode.
pub fn set(page: &mut Page, target: impl Into<Target>, value: f64) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    let (min, max) = range(page, wrapper);
    page.set_data(wrapper, "value", resolve::clamp(value, min, max).to_string());
    page.remove_class(wrapper, INDETERMINATE);
    sync(page, wrapper);
}

/// Replace the range and re-clamp the value.
///
/// Non-finite or equal bounds are rejected; reversed bounds are swapped.
pub fn set_range(page: &mut Page, target: impl Into<Target>, min: f64, max: f64) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    let Some((min, max)) = resolve::checked_range("progress", min, max) else {
        return;
    };
    page.set_data(wrapper, "min", min.to_string());
    page.set_data(wrapper, "max", max.to_string());

    let current = stored_value(page, wrapper).unwrap_or(min);
    page.set_data(wrapper, "value", resolve::clamp(current, min, max).to_string());
    sync(page, wrapper);
}

pub fn set_indeterminate(page: &mut Page, target: impl Into<Target>, indeterminate: bool) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    page.toggle_class(wrapper, INDETERMINATE, indeterminate);
    sync(page, wrapper);
}

pub fn set_label(page: &mut Page, target: impl Into<Target>, text: &str) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    if let Some(label) = resolve::find_first(page, wrapper, LABEL) {
        page.set_text(label, text);
    }
}

pub fn set_disabled(page: &mut Page, target: impl Into<Target>, disabled: bool) {
    let Some(wrapper) = resolve_wrapper(page, target) else {
        return;
    };
    page.toggle_class(wrapper, DISABLED, disabled);
    if disabled {
        page.set_attr(wrapper, "aria-disabled", "true");
    } else {
        page.remove_attr(wrapper, "aria-disabled");
    }
}

/// Initialise every `[data-ui-progress]`. Progress bars have no
/// interactive parts, so nothing is bound.
pub fn install(page: &mut Page, config: &KitConfig) -> Result<(), SelectorError> {
    let wrappers = resolve::query_all(page, INSTANCES);
    for wrapper in &wrappers {
        init(page, *wrapper, &config.indeterminate_placeholder);
    }
    log::info!("[progress] installed ({} instance(s))", wrappers.len());
    Ok(())
}
