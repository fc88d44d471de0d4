//! Radio groups.
//!
//! A group is every `.ui-radio__input` sharing a `name`. Each radio mirrors
//! its own state onto its `.ui-radio` wrapper.

mod events;

pub use events::install;

use uidom::{Document, EventKind, NodeId, Page};

use crate::resolve;
use crate::target::Target;

pub const WRAPPER: &str = ".ui-radio";
pub const CONTROL: &str = "input[type=radio].ui-radio__input";

pub const CHECKED: &str = "ui-radio_checked";
pub const DISABLED: &str = "ui-radio_disabled";

/// How a radio group is referred to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadioGroup {
    /// The shared `name` attribute.
    Name(String),
    /// A node containing the group; the name is taken from its first radio.
    Container(Target),
}

impl RadioGroup {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn container(target: impl Into<Target>) -> Self {
        Self::Container(target.into())
    }

    /// The group's name, if it can be determined.
    pub fn resolve_name(&self, doc: &Document) -> Option<String> {
        let name = match self {
            Self::Name(name) => name.clone(),
            Self::Container(target) => {
                let node = target.resolve(doc)?;
                let first = if resolve::is(doc, node, CONTROL) {
                    Some(node)
                } else {
                    resolve::find_first(doc, node, CONTROL)
                };
                first.and_then(|radio| doc.attr(radio, "name"))?.to_string()
            }
        };
        (!name.is_empty()).then_some(name)
    }
}

/// Radios of the group in document order.
pub fn group_inputs(doc: &Document, group: &RadioGroup) -> Vec<NodeId> {
    let Some(name) = group.resolve_name(doc) else {
        return Vec::new();
    };
    named_inputs(doc, &name)
}

fn named_inputs(doc: &Document, name: &str) -> Vec<NodeId> {
    resolve::query_all(doc, CONTROL)
        .into_iter()
        .filter(|radio| doc.attr(*radio, "name") == Some(name))
        .collect()
}

pub fn sync(page: &mut Page, input: NodeId) {
    let Some(wrapper) = resolve::closest(page, input, WRAPPER) else {
        log::debug!("[radio] {input} has no wrapper");
        return;
    };
    let checked = page.is_checked(input);
    let disabled = page.is_disabled(input);
    page.toggle_class(wrapper, CHECKED, checked);
    page.toggle_class(wrapper, DISABLED, disabled);
}

/// Sync `input` and every radio sharing its name.
pub fn sync_group_of(page: &mut Page, input: NodeId) {
    let name = page.attr(input, "name").map(str::to_string);
    match name.filter(|n| !n.is_empty()) {
        Some(name) => {
            for radio in named_inputs(page, &name) {
                sync(page, radio);
            }
        }
        None => sync(page, input),
    }
}

/// Value of the checked radio, or `None` if none is checked.
pub fn get_group_value(doc: &Document, group: &RadioGroup) -> Option<String> {
    group_inputs(doc, group)
        .into_iter()
        .find(|radio| doc.is_checked(*radio))
        .and_then(|radio| doc.value(radio))
}

/// Check exactly the radio whose value is `value` (or none when nothing
/// matches) and notify `change` on it.
pub fn set_group_value(page: &mut Page, group: &RadioGroup, value: &str) {
    let inputs = group_inputs(page, group);
    let mut selected = None;
    for radio in &inputs {
        let matches = selected.is_none() && page.value(*radio).as_deref() == Some(value);
        page.set_checked(*radio, matches);
        if matches {
            selected = Some(*radio);
        }
    }
    for radio in &inputs {
        sync(page, *radio);
    }
    if let Some(radio) = selected {
        page.trigger(radio, EventKind::Change);
    }
}

/// Enable or disable a single radio, or all radios inside a container.
pub fn set_disabled(page: &mut Page, target: impl Into<Target>, disabled: bool) {
    let Some(node) = target.into().resolve(page) else {
        return;
    };
    let inputs = if resolve::is(page, node, CONTROL) {
        vec![node]
    } else {
        resolve::find_all(page, node, CONTROL)
    };
    for radio in inputs {
        page.set_disabled(radio, disabled);
        sync(page, radio);
    }
}
