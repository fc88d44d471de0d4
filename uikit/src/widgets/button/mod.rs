//! Push buttons with toggle and loading states.
//!
//! State lives on the button itself:
//! - `ui-btn_active` + `aria-pressed` for toggle buttons
//! - `ui-btn_loading` + `disabled` + `aria-busy` while loading; when a
//!   `data-loading-text` replaces the label, the original children are
//!   stashed under `original-label` with their markup

mod events;

pub use events::install;

use uidom::{Document, NodeId, Page};

use crate::resolve;
use crate::target::Target;

pub const WRAPPER: &str = ".ui-btn";
const CONTROL: &str = "button, .ui-btn";

pub const ACTIVE: &str = "ui-btn_active";
pub const LOADING: &str = "ui-btn_loading";

const ORIGINAL_LABEL: &str = "original-label";
const LOADING_TEXT: &str = "loading-text";

fn resolve_button(doc: &Document, target: impl Into<Target>) -> Option<NodeId> {
    resolve::control(doc, &target.into(), CONTROL, WRAPPER)
}

// -------------------------------------------------------------------------
// Read methods
// -------------------------------------------------------------------------

pub fn is_active(doc: &Document, target: impl Into<Target>) -> bool {
    resolve_button(doc, target).is_some_and(|btn| doc.has_class(btn, ACTIVE))
}

pub fn is_loading(doc: &Document, target: impl Into<Target>) -> bool {
    resolve_button(doc, target).is_some_and(|btn| doc.has_class(btn, LOADING))
}

// -------------------------------------------------------------------------
// Write methods
// -------------------------------------------------------------------------

/// Flip the pressed state.
pub fn toggle(page: &mut Page, target: impl Into<Target>) {
    let Some(btn) = resolve_button(page, target) else {
        return;
    };
    let active = !page.has_class(btn, ACTIVE);
    page.toggle_class(btn, ACTIVE, active);
    page.set_attr(btn, "aria-pressed", resolve::bool_attr(active));
}

/// Enter or leave the loading state.
///
/// Entering saves the current label once, so repeated calls keep the
/// first one; leaving restores exactly that label, child elements
/// included.
pub fn set_loading(page: &mut Page, target: impl Into<Target>, loading: bool) {
    let Some(btn) = resolve_button(page, target) else {
        return;
    };

    if loading {
        if page.has_class(btn, LOADING) {
            return;
        }
        let loading_text = page
            .data(btn, LOADING_TEXT)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        if let Some(text) = loading_text {
            page.stash_children(btn, ORIGINAL_LABEL);
            page.set_text(btn, text);
        }
        page.add_class(btn, LOADING);
        page.set_disabled(btn, true);
        page.set_attr(btn, "aria-busy", "true");
    } else {
        if !page.has_class(btn, LOADING) {
            return;
        }
        page.unstash_children(btn, ORIGINAL_LABEL);
        page.remove_class(btn, LOADING);
        page.set_disabled(btn, false);
        page.remove_attr(btn, "aria-busy");
    }
}
