pub mod document;
pub mod element;
pub mod event;
pub mod page;
pub mod render;
pub mod selector;
pub mod timer;

pub use document::{Document, NodeId, NodeKind, Props};
pub use element::{Content, Element};
pub use event::{Event, EventContext, EventKind};
pub use page::{ListenerId, Page};
pub use render::{inner_html, outer_html};
pub use selector::{SelectorError, SelectorList};
pub use timer::TimerId;
