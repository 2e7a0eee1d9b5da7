//! Sprite-sheet entities
//!
//! A [`Sprite`] is an [`Entity`](crate::Entity) whose background is a sheet
//! of equally wide frames laid out side by side. Named [`Animation`]s list
//! which frames to show and how fast; the host drives playback by calling
//! [`Sprite::animate`] with the milliseconds elapsed since its last call.

mod animation;
#[allow(clippy::module_inception)]
mod sprite;

pub use animation::{frame_indices, Animation, Playback};
pub use sprite::Sprite;
