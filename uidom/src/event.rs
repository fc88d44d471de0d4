use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::document::NodeId;

/// Event types understood by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    /// Value is being edited (text typed, range dragged).
    Input,
    /// Value committed.
    Change,
    /// Application-defined notification, e.g. `uitabs:change`.
    Custom(String),
}

impl EventKind {
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Click => "click",
            Self::Input => "input",
            Self::Change => "change",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An event aimed at a node, with an optional typed payload.
#[derive(Clone)]
pub struct Event {
    pub kind: EventKind,
    pub target: NodeId,
    detail: Option<Rc<dyn Any>>,
}

impl Event {
    pub fn new(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            detail: None,
        }
    }

    pub fn with_detail<T: Any>(mut self, detail: T) -> Self {
        self.detail = Some(Rc::new(detail));
        self
    }

    /// The payload, if present and of type `T`.
    pub fn detail<T: Any>(&self) -> Option<&T> {
        self.detail.as_deref().and_then(|d| d.downcast_ref::<T>())
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("kind", &self.kind)
            .field("target", &self.target)
            .field("detail", &self.detail.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Handed to every listener during dispatch.
#[derive(Debug)]
pub struct EventContext {
    event: Event,
    current_target: NodeId,
    propagation_stopped: bool,
}

impl EventContext {
    pub(crate) fn new(event: Event) -> Self {
        let current_target = event.target;
        Self {
            event,
            current_target,
            propagation_stopped: false,
        }
    }

    pub(crate) fn set_current_target(&mut self, node: NodeId) {
        self.current_target = node;
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn kind(&self) -> &EventKind {
        &self.event.kind
    }

    /// Node the event was aimed at.
    pub fn target(&self) -> NodeId {
        self.event.target
    }

    /// Node whose delegated selector matched for the running listener.
    /// For document-level listeners this is the document root.
    pub fn current_target(&self) -> NodeId {
        self.current_target
    }

    pub fn detail<T: Any>(&self) -> Option<&T> {
        self.event.detail::<T>()
    }

    /// Stop the event from reaching further ancestors. Listeners on the
    /// current level still run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
