//! Finding wrappers and controls.
//!
//! Every widget has a wrapper (the root node carrying its state classes)
//! and most have an inner control (the native input they mirror). These
//! helpers take selector text that is fixed at compile time; a parse
//! failure is logged and treated as "no match".

use uidom::{Document, NodeId, SelectorList};

use crate::target::Target;

pub(crate) fn parse(selector: &str) -> Option<SelectorList> {
    match SelectorList::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            log::debug!("[uikit] bad selector: {err}");
            None
        }
    }
}

pub(crate) fn is(doc: &Document, node: NodeId, selector: &str) -> bool {
    parse(selector).is_some_and(|s| doc.matches(node, &s))
}

pub(crate) fn closest(doc: &Document, node: NodeId, selector: &str) -> Option<NodeId> {
    doc.closest(node, &parse(selector)?)
}

pub(crate) fn find_first(doc: &Document, node: NodeId, selector: &str) -> Option<NodeId> {
    doc.find_first(node, &parse(selector)?)
}

pub(crate) fn find_all(doc: &Document, node: NodeId, selector: &str) -> Vec<NodeId> {
    parse(selector).map_or_else(Vec::new, |s| doc.find_all(node, &s))
}

pub(crate) fn query_all(doc: &Document, selector: &str) -> Vec<NodeId> {
    parse(selector).map_or_else(Vec::new, |s| doc.query_all(&s))
}

/// The wrapper for `target`: the node itself or its nearest ancestor
/// matching `wrapper`.
pub(crate) fn wrapper(doc: &Document, target: &Target, wrapper: &str) -> Option<NodeId> {
    let node = target.resolve(doc)?;
    let found = closest(doc, node, wrapper);
    if found.is_none() {
        log::debug!("[uikit] no {wrapper} for {target}");
    }
    found
}

/// The control for `target`, tried in order: the node itself, its first
/// descendant control, the control of its nearest wrapper.
pub(crate) fn control(doc: &Document, target: &Target, control: &str, wrapper: &str) -> Option<NodeId> {
    let node = target.resolve(doc)?;
    let control_sel = parse(control)?;

    if doc.matches(node, &control_sel) {
        return Some(node);
    }
    if let Some(inner) = doc.find_first(node, &control_sel) {
        return Some(inner);
    }

    let found = closest(doc, node, wrapper).and_then(|outer| {
        if doc.matches(outer, &control_sel) {
            Some(outer)
        } else {
            doc.find_first(outer, &control_sel)
        }
    });
    if found.is_none() {
        log::debug!("[uikit] no {control} for {target}");
    }
    found
}

/// Read a number the way a form control would: absent, unparsable and
/// non-finite text all yield `None`.
pub(crate) fn number(text: Option<&str>) -> Option<f64> {
    text.and_then(|t| t.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Clamp into `[min, max]`; a non-finite value falls back to `min`.
pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.max(min).min(max)
    } else {
        min
    }
}

/// Position of `value` within `[min, max]` in percent. A zero-width range
/// is treated as width one.
pub(crate) fn percent(value: f64, min: f64, max: f64) -> f64 {
    let width = if max - min == 0.0 { 1.0 } else { max - min };
    (value - min) / width * 100.0
}

/// Format a number for an attribute or style value, at most two decimals.
pub(crate) fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

pub(crate) fn bool_attr(on: bool) -> &'static str {
    if on { "true" } else { "false" }
}

/// `(min, max)` with the lower bound first.
pub(crate) fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a > b { (b, a) } else { (a, b) }
}

/// Validate a new `[min, max]` range, swapping reversed bounds.
pub(crate) fn checked_range(widget: &str, min: f64, max: f64) -> Option<(f64, f64)> {
    if !min.is_finite() || !max.is_finite() || min == max {
        log::warn!("[{widget}] invalid range {min}..{max} ignored");
        return None;
    }
    Some(ordered(min, max))
}
