//! Rendering context
//!
//! The layer that every entity is appended to. One per [`Brick`](crate::Brick).

use crate::config::{BrickConfig, RootSizing};
use crate::element::VisualNode;
use crate::error::BrickResult;
use crate::surface::{Backend, SurfaceNode};

/// Root container attached to the document body
#[derive(Clone, Debug)]
pub struct RenderSurface<N: SurfaceNode> {
    element: VisualNode<N>,
    sizing: RootSizing,
}

impl<N: SurfaceNode> RenderSurface<N> {
    /// Create the root node, append it to the body and size it
    pub fn new<B>(backend: &B, config: &BrickConfig) -> BrickResult<Self>
    where
        B: Backend<Node = N>,
    {
        let node = backend.create_node()?;
        let element = VisualNode::new(node)?;
        backend.attach_to_body(element.node())?;
        element.node().set_attribute("id", &config.root_id)?;

        let mut surface = Self {
            element,
            sizing: config.root_sizing,
        };
        surface.fit_viewport(backend)?;

        tracing::debug!(
            id = config.root_id.as_str(),
            width = surface.width(),
            height = surface.height(),
            "render surface attached"
        );
        Ok(surface)
    }

    /// Re-read the viewport size and apply it
    ///
    /// With [`RootSizing::Zero`] the root stays at 0 x 0.
    pub fn fit_viewport<B>(&mut self, backend: &B) -> BrickResult<()>
    where
        B: Backend<Node = N>,
    {
        let (width, height) = match self.sizing {
            RootSizing::Viewport => backend.viewport_size()?,
            RootSizing::Zero => (0.0, 0.0),
        };
        self.element.set_width(width)?;
        self.element.set_height(height)
    }

    pub fn sizing(&self) -> RootSizing {
        self.sizing
    }

    pub fn width(&self) -> f64 {
        self.element.width()
    }

    pub fn height(&self) -> f64 {
        self.element.height()
    }

    pub fn set_width(&mut self, width: f64) -> BrickResult<()> {
        self.element.set_width(width)
    }

    pub fn set_height(&mut self, height: f64) -> BrickResult<()> {
        self.element.set_height(height)
    }

    pub fn on<F>(&self, event: &str, callback: F) -> BrickResult<()>
    where
        F: FnMut(N::Event) + 'static,
    {
        self.element.on(event, callback)
    }

    /// The backing root node; entities are appended here
    pub fn node(&self) -> &N {
        self.element.node()
    }
}
