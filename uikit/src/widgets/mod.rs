//! Widget adapters.
//!
//! Each widget is a module of free functions over the page:
//! - mutators take `&mut Page`, re-sync presentation, and notify `change`
//!   where a native control changed
//! - getters take `&Document` and return `false`/`None`/empty when the
//!   target does not resolve
//! - `install` initialises existing instances and binds delegated listeners

pub mod button;
pub mod checkbox;
pub mod combo;
pub mod groupbox;
pub mod lineedit;
pub mod progress;
pub mod radio;
pub mod slider;
pub mod tabs;
pub mod toggle;
