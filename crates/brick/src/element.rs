//! Base element owning width and height

use crate::error::{check_size, BrickResult};
use crate::surface::{Listener, SurfaceNode};
use crate::types::{px, Pixels};

/// A node whose layout size always mirrors `width`/`height`
#[derive(Clone, Debug)]
pub struct VisualNode<N: SurfaceNode> {
    node: N,
    width: Pixels,
    height: Pixels,
}

impl<N: SurfaceNode> VisualNode<N> {
    /// Wrap a fresh node, clearing overflow, margin and padding
    ///
    /// Width and height start at 0 and are not written until set.
    pub fn new(node: N) -> BrickResult<Self> {
        node.set_style("overflow", "hidden")?;
        node.set_style("margin", "0")?;
        node.set_style("padding", "0")?;
        Ok(Self {
            node,
            width: 0.0,
            height: 0.0,
        })
    }

    pub fn width(&self) -> Pixels {
        self.width
    }

    pub fn height(&self) -> Pixels {
        self.height
    }

    /// Set width in pixels; negative or non-finite values are rejected
    pub fn set_width(&mut self, width: Pixels) -> BrickResult<()> {
        let width = check_size("width", width)?;
        self.node.set_style("width", &px(width))?;
        self.width = width;
        Ok(())
    }

    /// Set height in pixels; negative or non-finite values are rejected
    pub fn set_height(&mut self, height: Pixels) -> BrickResult<()> {
        let height = check_size("height", height)?;
        self.node.set_style("height", &px(height))?;
        self.height = height;
        Ok(())
    }

    /// Shorthand for adding an event listener to the backing node
    pub fn on<F>(&self, event: &str, callback: F) -> BrickResult<()>
    where
        F: FnMut(N::Event) + 'static,
    {
        let listener: Listener<N::Event> = Box::new(callback);
        self.node.add_listener(event, listener)
    }

    /// The backing node
    pub fn node(&self) -> &N {
        &self.node
    }
}
