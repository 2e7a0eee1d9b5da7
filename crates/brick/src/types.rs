//! Core type definitions for the renderer
//!
//! This module centralizes type aliases and the CSS value formatting
//! shared by every entity kind.

use serde::{Deserialize, Serialize};

/// CSS pixel quantity (JS number semantics)
pub type Pixels = f64;

/// Rotation in degrees
pub type Degrees = f64;

/// Stacking order applied through the `z-index` style
pub type ZIndex = i32;

/// Index of a frame within a horizontal sprite sheet
pub type FrameIndex = u32;

/// Axis-aligned placement of an entity, from the viewport's top-left
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: Pixels,
    pub y: Pixels,
    pub width: Pixels,
    pub height: Pixels,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: Pixels, y: Pixels, width: Pixels, height: Pixels) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Format a pixel length the way layout expects it (`12px`, `0.5px`)
///
/// Negative zero is written as `0px`.
pub(crate) fn px(value: Pixels) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}px", value)
}

/// Compose the transform; order is always scale then rotate
pub(crate) fn transform(scale: f64, angle: Degrees) -> String {
    format!("scale({}) rotate({}deg)", scale, angle)
}
