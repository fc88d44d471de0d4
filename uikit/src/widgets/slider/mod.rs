//! Slider over an `input[type=range]`.
//!
//! The range lives in the input's `min`/`max` attributes (defaults 0 and
//! 100) and the value in its live value. Sync writes the rounded value
//! into `.ui-slider__value` and paints the track fill as a gradient.

mod events;

pub use events::install;

use uidom::{Document, EventKind, NodeId, Page};

use crate::config::{DEFAULT_SLIDER_FILL, DEFAULT_SLIDER_TRACK};
use crate::resolve;
use crate::target::Target;

pub const WRAPPER: &str = ".ui-slider";
pub const CONTROL: &str = "input[type=range].ui-slider__input";
const VALUE: &str = ".ui-slider__value";

pub const DISABLED: &str = "ui-slider_disabled";

pub(crate) const FILL_KEY: &str = "fill-color";
pub(crate) const TRACK_KEY: &str = "track-color";

const DEFAULT_MIN: f64 = 0.0;
const DEFAULT_MAX: f64 = 100.0;

fn resolve_input(doc: &Document, target: impl Into<Target>) -> Option<NodeId> {
    resolve::control(doc, &target.into(), CONTROL, WRAPPER)
}

fn bounds(doc: &Document, input: NodeId) -> (f64, f64) {
    let min = resolve::number(doc.attr(input, "min")).unwrap_or(DEFAULT_MIN);
    let max = resolve::number(doc.attr(input, "max")).unwrap_or(DEFAULT_MAX);
    (min, max)
}

/// Current `(min, max)` of the input, lower bound first.
pub fn range(doc: &Document, input: NodeId) -> (f64, f64) {
    let (min, max) = bounds(doc, input);
    resolve::ordered(min, max)
}

/// Swap reversed `min`/`max` attributes from markup.
pub(crate) fn normalize_range(page: &mut Page, input: NodeId) {
    let (min, max) = bounds(page, input);
    if min <= max {
        return;
    }
    if let Some((min, max)) = resolve::checked_range("slider", min, max) {
        log::debug!("[slider] {input} range swapped to {min}..{max}");
        page.set_attr(input, "min", min.to_string());
        page.set_attr(input, "max", max.to_string());
    }
}

fn raw_value(doc: &Document, input: NodeId) -> Option<f64> {
    resolve::number(doc.value(input).as_deref())
}

pub fn sync(page: &mut Page, input: NodeId) {
    let (min, max) = range(page, input);
    let value = resolve::clamp(raw_value(page, input).unwrap_or(f64::NAN), min, max);
    let pct = resolve::format_number(resolve::percent(value, min, max));

    let fill = page.data(input, FILL_KEY).unwrap_or(DEFAULT_SLIDER_FILL);
    let track = page.data(input, TRACK_KEY).unwrap_or(DEFAULT_SLIDER_TRACK);
    let gradient = format!(
        "linear-gradient(to right, {fill} 0%, {fill} {pct}%, {track} {pct}%, {track} 100%)"
    );
    page.set_style(input, "background-image", gradient);

    let Some(wrapper) = resolve::closest(page, input, WRAPPER) else {
        log::debug!("[slider] {input} has no wrapper");
        return;
    };
    if let Some(label) = resolve::find_first(page, wrapper, VALUE) {
        page.set_text(label, resolve::format_number(value.round()));
    }
    let disabled = page.is_disabled(input);
    page.toggle_class(wrapper, DISABLED, disabled);
}

/// Current value, `None` if unresolved or not a number.
pub fn get(doc: &Document, target: impl Into<Target>) -> Option<f64> {
    resolve_input(doc, target).and_then(|input| raw_value(doc, input))
}

/// Set the value clamped to the range (non-finite falls back to `min`)
/// and notify `change`.
pub fn set(page: &mut Page, target: impl Into<Target>, value: f64) {
    let Some(input) = resolve_input(page, target) else {
        return;
    };
    let (min, max) = range(page, input);
    let clamped = resolve::clamp(value, min, max);
    page.set_value(input, clamped.to_string());
    sync(page, input);
    page.trigger(input, EventKind::Change);
}

/// Replace the range, re-clamping the current value.
///
/// Non-finite or equal bounds are rejected; reversed bounds are swapped.
pub fn set_range(page: &mut Page, target: impl Into<Target>, min: f64, max: f64) {
    let Some(input) = resolve_input(page, target) else {
        return;
    };
    let Some((min, max)) = resolve::checked_range("slider", min, max) else {
        return;
    };
    page.set_attr(input, "min", min.to_string());
    page.set_attr(input, "max", max.to_string());

    let current = raw_value(page, input).unwrap_or(min);
    page.set_value(input, resolve::clamp(current, min, max).to_string());
    sync(page, input);
}

pub fn set_disabled(page: &mut Page, target: impl Into<Target>, disabled: bool) {
    let Some(input) = resolve_input(page, target) else {
        return;
    };
    page.set_disabled(input, disabled);
    sync(page, input);
}
