//! Surface backends
//!
//! Everything the renderer draws goes through two small traits:
//!
//! - [`Backend`]: creates nodes, attaches the root to the document body and
//!   reports the viewport size
//! - [`SurfaceNode`]: one visual element; style, attributes, children and
//!   event listeners
//!
//! [`MemoryBackend`] keeps an inspectable node tree in memory and backs all
//! native tests. With the `wasm` feature, [`DomBackend`] drives real
//! `HtmlElement`s through `web_sys`.

mod memory;

#[cfg(feature = "wasm")]
mod dom;

pub use memory::{MemoryBackend, MemoryEvent, MemoryNode};

#[cfg(feature = "wasm")]
pub use dom::DomBackend;

use crate::error::BrickResult;
use crate::types::Pixels;

/// Callback attached with [`SurfaceNode::add_listener`]
pub type Listener<E> = Box<dyn FnMut(E)>;

/// Source of nodes and of the document the root lives in
pub trait Backend {
    /// Handle to one element created by this backend
    type Node: SurfaceNode;

    /// Create a detached element
    fn create_node(&self) -> BrickResult<Self::Node>;

    /// Append a node to the document body
    fn attach_to_body(&self, node: &Self::Node) -> BrickResult<()>;

    /// Current viewport size as (width, height)
    fn viewport_size(&self) -> BrickResult<(Pixels, Pixels)>;
}

/// A single visual element
///
/// Handles are cheap clones pointing at the same element.
pub trait SurfaceNode: Clone {
    /// Payload handed to event listeners
    type Event;

    /// Set one inline style property (`"left"`, `"z-index"`, ...)
    fn set_style(&self, property: &str, value: &str) -> BrickResult<()>;

    /// Set an element attribute
    fn set_attribute(&self, name: &str, value: &str) -> BrickResult<()>;

    /// Append `child` as the last child of this element
    fn append_child(&self, child: &Self) -> BrickResult<()>;

    /// Attach a listener to the element's native event dispatch
    ///
    /// Listeners live as long as the element; there is no removal.
    fn add_listener(&self, event: &str, callback: Listener<Self::Event>) -> BrickResult<()>;
}
