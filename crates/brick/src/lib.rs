//! Brick: a very rudimentary DOM-based renderer
//!
//! This crate places positioned, scaled and rotated rectangles ("entities")
//! inside a full-viewport container element, and animates sprite-sheet
//! backgrounds from time deltas supplied by the host's render loop.
//!
//! ## Architecture
//!
//! - [`surface`]: Backend seam (`Backend`, `SurfaceNode`) with an in-memory
//!   implementation and, under the `wasm` feature, a `web_sys` one
//! - [`element`]: `VisualNode`, the width/height-owning base of everything
//! - [`context`]: `RenderSurface`, the root container appended to the body
//! - [`entity`]: `Entity`, a positioned rectangle with graphic/scale/angle
//! - [`sprite`]: `Sprite`, an entity with named frame animations
//! - [`Brick`]: the facade owning the root and creating entities
//!
//! ## Example
//!
//! ```rust
//! use brick::{Brick, BrickConfig, MemoryBackend};
//!
//! let lib = Brick::new(MemoryBackend::new(), BrickConfig::default()).unwrap();
//! let mut hero = lib.sprite(0.0, 0.0, 32.0, 32.0, Some("url(sheet.png)")).unwrap();
//!
//! hero.set_animation("spin", vec![0, 1, 2, 3], 10.0).unwrap();
//! hero.use_animation("spin").unwrap();
//!
//! // Host render loop supplies elapsed milliseconds
//! assert!(hero.animate(100.0).unwrap());
//! assert_eq!(hero.frame_index(), Some(1));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state is plain Rust, testable without a browser
//! 2. **Explicit Time**: Sprites advance from supplied deltas, never a hidden clock
//! 3. **Composition**: `Sprite` embeds `Entity` embeds `VisualNode`

pub mod config;
pub mod context;
pub mod element;
pub mod entity;
pub mod error;
pub mod sprite;
pub mod surface;
pub mod types;

mod brick;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use brick::Brick;
pub use config::{BrickConfig, RootSizing, DEFAULT_GRAPHIC, DEFAULT_ROOT_ID, DEFAULT_Z_INDEX};
pub use context::RenderSurface;
pub use element::VisualNode;
pub use entity::Entity;
pub use error::{BrickError, BrickResult};
pub use sprite::{frame_indices, Animation, Playback, Sprite};
pub use surface::{Backend, Listener, MemoryBackend, MemoryEvent, MemoryNode, SurfaceNode};
pub use types::{Degrees, FrameIndex, Pixels, Rect, ZIndex};

#[cfg(feature = "wasm")]
pub use surface::DomBackend;
