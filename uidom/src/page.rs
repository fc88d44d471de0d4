//! A document plus its listeners and timers.
//!
//! Listeners are registered at the document level and filtered by a
//! selector when the event bubbles, so they apply to nodes created after
//! registration as well.

use std::any::Any;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use crate::document::{Document, NodeId};
use crate::event::{Event, EventContext, EventKind};
use crate::selector::{SelectorError, SelectorList};
use crate::timer::TimerQueue;

/// Nested dispatch beyond this depth is dropped.
const MAX_DISPATCH_DEPTH: usize = 32;

type Handler = Rc<dyn Fn(&mut Page, &mut EventContext)>;

/// Handle returned by listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Listener {
    id: ListenerId,
    kind: EventKind,
    /// `None` for plain document-level listeners.
    selector: Option<SelectorList>,
    handler: Handler,
}

pub struct Page {
    doc: Document,
    listeners: Vec<Listener>,
    next_listener: u64,
    depth: usize,
    pub(crate) timers: TimerQueue,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Document::new())
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("listeners", &self.listeners.len())
            .field("timers", &self.timers.len())
            .field("now", &self.timers.now())
            .finish()
    }
}

impl Deref for Page {
    type Target = Document;

    fn deref(&self) -> &Document {
        &self.doc
    }
}

impl DerefMut for Page {
    fn deref_mut(&mut self) -> &mut Document {
        &mut self.doc
    }
}

impl Page {
    pub fn new(doc: Document) -> Self {
        Self {
            doc,
            listeners: Vec::new(),
            next_listener: 0,
            depth: 0,
            timers: TimerQueue::default(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    /// Register a delegated listener: `handler` runs for `kind` events whose
    /// target is, or is inside, an element matching `selector`.
    pub fn on<F>(&mut self, kind: EventKind, selector: &str, handler: F) -> Result<ListenerId, SelectorError>
    where
        F: Fn(&mut Page, &mut EventContext) + 'static,
    {
        let selector = SelectorList::parse(selector)?;
        Ok(self.register(kind, Some(selector), Rc::new(handler)))
    }

    /// Register a listener that sees every `kind` event reaching the document.
    pub fn on_document<F>(&mut self, kind: EventKind, handler: F) -> ListenerId
    where
        F: Fn(&mut Page, &mut EventContext) + 'static,
    {
        self.register(kind, None, Rc::new(handler))
    }

    fn register(&mut self, kind: EventKind, selector: Option<SelectorList>, handler: Handler) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        log::trace!(
            "[events] listen {} on {}",
            kind,
            selector.as_ref().map_or("document", |s| s.source())
        );
        self.listeners.push(Listener {
            id,
            kind,
            selector,
            handler,
        });
        id
    }

    /// Remove a listener. Returns true if it existed.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Dispatch an event synchronously.
    ///
    /// The handler queue is fixed before the first handler runs: for each
    /// node from the target up to the root, delegated listeners whose
    /// selector matches that node, then the document-level listeners.
    /// Returns true if propagation was stopped.
    pub fn dispatch(&mut self, event: Event) -> bool {
        if self.depth >= MAX_DISPATCH_DEPTH {
            log::warn!(
                "[events] dropping {} on {}: dispatch nested too deeply",
                event.kind,
                event.target
            );
            return false;
        }

        let queue = self.handler_queue(&event);
        log::trace!(
            "[events] {} on {} -> {} handler(s)",
            event.kind,
            event.target,
            queue.iter().map(|(_, level)| level.len()).sum::<usize>()
        );

        let mut cx = EventContext::new(event);
        self.depth += 1;
        for (node, handlers) in queue {
            cx.set_current_target(node);
            for handler in handlers {
                handler(self, &mut cx);
            }
            if cx.is_propagation_stopped() {
                break;
            }
        }
        self.depth -= 1;
        cx.is_propagation_stopped()
    }

    fn handler_queue(&self, event: &Event) -> Vec<(NodeId, Vec<Handler>)> {
        let root = self.doc.root();
        let mut queue = Vec::new();

        if self.doc.is_connected(event.target) {
            let path = std::iter::once(event.target)
                .chain(self.doc.ancestors(event.target))
                .filter(|n| *n != root);
            for node in path {
                let handlers: Vec<Handler> = self
                    .listeners
                    .iter()
                    .filter(|l| l.kind == event.kind)
                    .filter(|l| l.selector.as_ref().is_some_and(|s| s.matches(&self.doc, node)))
                    .map(|l| Rc::clone(&l.handler))
                    .collect();
                if !handlers.is_empty() {
                    queue.push((node, handlers));
                }
            }
        }

        let document_level: Vec<Handler> = self
            .listeners
            .iter()
            .filter(|l| l.kind == event.kind && l.selector.is_none())
            .map(|l| Rc::clone(&l.handler))
            .collect();
        if !document_level.is_empty() {
            queue.push((root, document_level));
        }
        queue
    }

    /// Dispatch a bare event of `kind` at `target`.
    pub fn trigger(&mut self, target: NodeId, kind: EventKind) -> bool {
        self.dispatch(Event::new(kind, target))
    }

    /// Dispatch an event of `kind` at `target` carrying `detail`.
    pub fn trigger_with<T: Any>(&mut self, target: NodeId, kind: EventKind, detail: T) -> bool {
        self.dispatch(Event::new(kind, target).with_detail(detail))
    }

    // -------------------------------------------------------------------------
    // User interaction
    // -------------------------------------------------------------------------

    /// Simulate a user click, including the built-in activation of
    /// checkboxes and radios. Clicks on disabled controls are swallowed.
    pub fn click(&mut self, node: NodeId) {
        if !self.doc.is_connected(node) {
            log::debug!("[events] click on detached {node} ignored");
            return;
        }
        if self.doc.is_form_control(node) && self.doc.is_disabled(node) {
            log::debug!("[events] click on disabled {node} ignored");
            return;
        }

        let mut changed = false;
        if self.doc.is_checkable(node) {
            let checked = self.doc.is_checked(node);
            if self.doc.input_type(node) == "radio" {
                if !checked {
                    self.doc.set_checked(node, true);
                    changed = true;
                }
            } else {
                self.doc.set_checked(node, !checked);
                self.doc.set_indeterminate(node, false);
                changed = true;
            }
        }

        self.trigger(node, EventKind::Click);
        if changed {
            self.trigger(node, EventKind::Input);
            self.trigger(node, EventKind::Change);
        } else if !self.doc.is_form_control(node) {
            self.activate_label(node);
        }
    }

    /// A click inside a `<label>` activates its control: checkables get a
    /// click of their own, other controls take focus.
    fn activate_label(&mut self, node: NodeId) {
        let label = std::iter::once(node)
            .chain(self.doc.ancestors(node))
            .find(|n| self.doc.tag(*n) == "label");
        let Some(control) = label.and_then(|label| self.doc.labeled_control(label)) else {
            return;
        };
        if self.doc.is_checkable(control) {
            self.click(control);
        } else {
            self.doc.focus(control);
        }
    }

    /// Simulate typing into (or dragging) a value control.
    pub fn input_text(&mut self, node: NodeId, text: &str) {
        if !self.doc.is_connected(node) || self.doc.is_disabled(node) {
            return;
        }
        self.doc.set_value(node, text);
        self.trigger(node, EventKind::Input);
        self.trigger(node, EventKind::Change);
    }

    /// Simulate picking an option of a `<select>`. Returns false if no
    /// option has that value.
    pub fn choose(&mut self, select: NodeId, value: &str) -> bool {
        if !self.doc.is_connected(select) || self.doc.is_disabled(select) {
            return false;
        }
        if !self.doc.set_select_value(select, value) {
            return false;
        }
        self.trigger(select, EventKind::Input);
        self.trigger(select, EventKind::Change);
        true
    }
}
