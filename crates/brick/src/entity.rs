//! Positioned entity
//!
//! A rectangle placed from the viewport's top-left corner, with a
//! background graphic and a CSS transform built from scale and angle.
//!
//! `graphic` is written verbatim to the `background` property, so anything
//! that property accepts works: `#fff`, `rgba(255, 127, 0, 0.5)`,
//! `url(myimage.png)`, gradients.

use crate::element::VisualNode;
use crate::error::{check_finite, check_size, BrickResult};
use crate::surface::SurfaceNode;
use crate::types::{px, transform, Degrees, Pixels, Rect, ZIndex};

/// A positioned, scaled and rotated rectangle
#[derive(Clone, Debug)]
pub struct Entity<N: SurfaceNode> {
    element: VisualNode<N>,
    x: Pixels,
    y: Pixels,
    graphic: String,
    scale: f64,
    angle: Degrees,
    z_index: ZIndex,
}

impl<N: SurfaceNode> Entity<N> {
    /// Append `node` under `parent` and apply the initial state
    ///
    /// Styles are written in a fixed order: `position`, `z-index`, x, y,
    /// width, height, graphic, then scale 1 and angle 0.
    pub fn new(
        parent: &N,
        node: N,
        bounds: Rect,
        graphic: &str,
        z_index: ZIndex,
    ) -> BrickResult<Self> {
        // Validate before touching the document so a bad call leaves no node behind
        check_finite("x", bounds.x)?;
        check_finite("y", bounds.y)?;
        check_size("width", bounds.width)?;
        check_size("height", bounds.height)?;

        let element = VisualNode::new(node)?;
        parent.append_child(element.node())?;

        element.node().set_style("position", "fixed")?;
        element.node().set_style("z-index", &z_index.to_string())?;

        let mut entity = Self {
            element,
            x: 0.0,
            y: 0.0,
            graphic: String::new(),
            scale: 1.0,
            angle: 0.0,
            z_index,
        };
        entity.set_x(bounds.x)?;
        entity.set_y(bounds.y)?;
        entity.set_width(bounds.width)?;
        entity.set_height(bounds.height)?;
        entity.set_graphic(graphic)?;
        entity.set_scale(1.0)?;
        entity.set_angle(0.0)?;
        Ok(entity)
    }

    pub fn x(&self) -> Pixels {
        self.x
    }

    /// Offset from the left edge (`left` style)
    pub fn set_x(&mut self, x: Pixels) -> BrickResult<()> {
        let x = check_finite("x", x)?;
        self.element.node().set_style("left", &px(x))?;
        self.x = x;
        Ok(())
    }

    pub fn y(&self) -> Pixels {
        self.y
    }

    /// Offset from the top edge (`top` style)
    pub fn set_y(&mut self, y: Pixels) -> BrickResult<()> {
        let y = check_finite("y", y)?;
        self.element.node().set_style("top", &px(y))?;
        self.y = y;
        Ok(())
    }

    pub fn width(&self) -> Pixels {
        self.element.width()
    }

    pub fn set_width(&mut self, width: Pixels) -> BrickResult<()> {
        self.element.set_width(width)
    }

    pub fn height(&self) -> Pixels {
        self.element.height()
    }

    pub fn set_height(&mut self, height: Pixels) -> BrickResult<()> {
        self.element.set_height(height)
    }

    pub fn graphic(&self) -> &str {
        &self.graphic
    }

    pub fn set_graphic(&mut self, graphic: &str) -> BrickResult<()> {
        self.element.node().set_style("background", graphic)?;
        self.graphic = graphic.to_string();
        Ok(())
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f64) -> BrickResult<()> {
        let scale = check_finite("scale", scale)?;
        self.apply_transform(scale, self.angle)?;
        self.scale = scale;
        Ok(())
    }

    pub fn angle(&self) -> Degrees {
        self.angle
    }

    /// Rotation in degrees
    pub fn set_angle(&mut self, angle: Degrees) -> BrickResult<()> {
        let angle = check_finite("angle", angle)?;
        self.apply_transform(self.scale, angle)?;
        self.angle = angle;
        Ok(())
    }

    pub fn z_index(&self) -> ZIndex {
        self.z_index
    }

    /// Current placement as a rectangle
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width(), self.height())
    }

    pub fn on<F>(&self, event: &str, callback: F) -> BrickResult<()>
    where
        F: FnMut(N::Event) + 'static,
    {
        self.element.on(event, callback)
    }

    pub fn node(&self) -> &N {
        self.element.node()
    }

    fn apply_transform(&self, scale: f64, angle: Degrees) -> BrickResult<()> {
        self.element
            .node()
            .set_style("transform", &transform(scale, angle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Backend, MemoryBackend, MemoryNode};
    use crate::BrickError;

    fn entity(bounds: Rect, graphic: &str) -> (MemoryNode, Entity<MemoryNode>) {
        let backend = MemoryBackend::new();
        let parent = backend.create_node().unwrap();
        let node = backend.create_node().unwrap();
        let entity = Entity::new(&parent, node, bounds, graphic, 999).unwrap();
        (parent, entity)
    }

    #[test]
    fn test_new_applies_initial_styles() {
        let (parent, e) = entity(Rect::new(10.0, 20.0, 30.0, 40.0), "#fff");
        let node = e.node();

        assert_eq!(parent.children(), vec![node.clone()]);
        assert_eq!(node.style("position").as_deref(), Some("fixed"));
        assert_eq!(node.style("z-index").as_deref(), Some("999"));
        assert_eq!(node.style("left").as_deref(), Some("10px"));
        assert_eq!(node.style("top").as_deref(), Some("20px"));
        assert_eq!(node.style("width").as_deref(), Some("30px"));
        assert_eq!(node.style("height").as_deref(), Some("40px"));
        assert_eq!(node.style("background").as_deref(), Some("#fff"));
        assert_eq!(
            node.style("transform").as_deref(),
            Some("scale(1) rotate(0deg)")
        );
        assert_eq!(e.scale(), 1.0);
        assert_eq!(e.angle(), 0.0);
        assert_eq!(e.bounds(), Rect::new(10.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn test_position_roundtrip() {
        let (_parent, mut e) = entity(Rect::default(), "#fff");
        e.set_x(-15.0).unwrap();
        e.set_y(240.25).unwrap();

        assert_eq!(e.x(), -15.0);
        assert_eq!(e.y(), 240.25);
        assert_eq!(e.node().style("left").as_deref(), Some("-15px"));
        assert_eq!(e.node().style("top").as_deref(), Some("240.25px"));
    }

    #[test]
    fn test_graphic_is_verbatim() {
        let (_parent, mut e) = entity(Rect::default(), "#fff");
        for graphic in [
            "rgba(255, 127, 0, 0.5)",
            "url(myimage.png)",
            "linear-gradient(red, blue)",
        ] {
            e.set_graphic(graphic).unwrap();
            assert_eq!(e.graphic(), graphic);
            assert_eq!(e.node().style("background").as_deref(), Some(graphic));
        }
    }

    #[test]
    fn test_scale_keeps_angle() {
        let (_parent, mut e) = entity(Rect::default(), "#fff");
        e.set_angle(45.0).unwrap();
        e.set_scale(2.0).unwrap();
        assert_eq!(
            e.node().style("transform").as_deref(),
            Some("scale(2) rotate(45deg)")
        );

        e.set_angle(-90.0).unwrap();
        assert_eq!(
            e.node().style("transform").as_deref(),
            Some("scale(2) rotate(-90deg)")
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let (_parent, mut e) = entity(Rect::new(5.0, 5.0, 10.0, 10.0), "#fff");

        assert!(matches!(
            e.set_x(f64::NAN),
            Err(BrickError::InvalidDimension { field: "x", .. })
        ));
        assert!(e.set_scale(f64::INFINITY).is_err());
        assert!(e.set_angle(f64::NAN).is_err());
        assert!(e.set_width(-3.0).is_err());

        assert_eq!(e.x(), 5.0);
        assert_eq!(e.scale(), 1.0);
        assert_eq!(
            e.node().style("transform").as_deref(),
            Some("scale(1) rotate(0deg)")
        );
    }

    #[test]
    fn test_invalid_initial_size_fails_construction() {
        let backend = MemoryBackend::new();
        let parent = backend.create_node().unwrap();
        let node = backend.create_node().unwrap();

        let result = Entity::new(&parent, node, Rect::new(0.0, 0.0, -1.0, 4.0), "#fff", 1);
        assert!(matches!(
            result,
            Err(BrickError::InvalidDimension { field: "width", .. })
        ));
        assert!(parent.children().is_empty());
    }
}
