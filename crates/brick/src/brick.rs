//! Library facade

use crate::config::BrickConfig;
use crate::context::RenderSurface;
use crate::entity::Entity;
use crate::error::BrickResult;
use crate::sprite::Sprite;
use crate::surface::Backend;
use crate::types::{Pixels, Rect, ZIndex};

/// Owns the root surface and creates entities under it
///
/// Every entity created by one `Brick` shares its stacking order. Each
/// `Brick` owns an independent root; nothing is global.
pub struct Brick<B: Backend> {
    backend: B,
    config: BrickConfig,
    root: RenderSurface<B::Node>,
}

impl<B: Backend> Brick<B> {
    /// Create the root container and attach it to the document
    pub fn new(backend: B, config: BrickConfig) -> BrickResult<Self> {
        let root = RenderSurface::new(&backend, &config)?;
        tracing::debug!(z_index = config.z_index, "brick ready");
        Ok(Self {
            backend,
            config,
            root,
        })
    }

    /// Default config with the given stacking order
    pub fn with_z_index(backend: B, z_index: ZIndex) -> BrickResult<Self> {
        Self::new(backend, BrickConfig::default().with_z_index(z_index))
    }

    pub fn root(&self) -> &RenderSurface<B::Node> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut RenderSurface<B::Node> {
        &mut self.root
    }

    /// Re-fit the root to the current viewport (call on window resize)
    pub fn fit_viewport(&mut self) -> BrickResult<()> {
        self.root.fit_viewport(&self.backend)
    }

    pub fn z_index(&self) -> ZIndex {
        self.config.z_index
    }

    pub fn config(&self) -> &BrickConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Create an entity; `graphic` falls back to the configured default
    pub fn entity(
        &self,
        x: Pixels,
        y: Pixels,
        width: Pixels,
        height: Pixels,
        graphic: Option<&str>,
    ) -> BrickResult<Entity<B::Node>> {
        let node = self.backend.create_node()?;
        Entity::new(
            self.root.node(),
            node,
            Rect::new(x, y, width, height),
            graphic.unwrap_or(&self.config.default_graphic),
            self.config.z_index,
        )
    }

    /// Create a sprite; `graphic` is usually a `url(...)` sprite sheet
    pub fn sprite(
        &self,
        x: Pixels,
        y: Pixels,
        width: Pixels,
        height: Pixels,
        graphic: Option<&str>,
    ) -> BrickResult<Sprite<B::Node>> {
        let node = self.backend.create_node()?;
        Sprite::new(
            self.root.node(),
            node,
            Rect::new(x, y, width, height),
            graphic.unwrap_or(&self.config.default_graphic),
            self.config.z_index,
        )
    }
}

impl<B: Backend + std::fmt::Debug> std::fmt::Debug for Brick<B>
where
    B::Node: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Brick")
            .field("backend", &self.backend)
            .field("config", &self.config)
            .field("root", &self.root)
            .finish()
    }
}
