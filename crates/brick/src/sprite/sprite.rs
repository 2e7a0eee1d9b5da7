//! Sprite entity and its animation clock

use std::collections::HashMap;

use super::animation::{Animation, Playback};
use crate::entity::Entity;
use crate::error::{BrickError, BrickResult};
use crate::surface::SurfaceNode;
use crate::types::{px, FrameIndex, Rect, ZIndex};

/// An entity that plays sprite-sheet animations
///
/// The sheet is shifted left by `frame × width` pixels through
/// `background-position-x`, so frame 0 sits at `0px`, frame 1 at
/// `-{width}px`, and so on. `use_animation` and `animate` both use that
/// convention.
#[derive(Debug)]
pub struct Sprite<N: SurfaceNode> {
    entity: Entity<N>,
    animations: HashMap<String, Animation>,
    playback: Playback,
    accumulator_ms: f64,
    previous_sample: Option<f64>,
}

impl<N: SurfaceNode> Sprite<N> {
    pub fn new(
        parent: &N,
        node: N,
        bounds: Rect,
        graphic: &str,
        z_index: ZIndex,
    ) -> BrickResult<Self> {
        Ok(Self {
            entity: Entity::new(parent, node, bounds, graphic, z_index)?,
            animations: HashMap::new(),
            playback: Playback::Idle,
            accumulator_ms: 0.0,
            previous_sample: None,
        })
    }

    /// The positioned entity underneath
    pub fn entity(&self) -> &Entity<N> {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity<N> {
        &mut self.entity
    }

    /// Register (or replace) an animation
    ///
    /// Nothing is rendered. Replacing the active animation keeps it active;
    /// playback restarts at position 0 if the old position no longer exists.
    pub fn set_animation(
        &mut self,
        name: impl Into<String>,
        frames: Vec<FrameIndex>,
        frame_rate: f64,
    ) -> BrickResult<()> {
        self.insert_animation(name, Animation::new(frames, frame_rate))
    }

    /// Register (or replace) a prebuilt animation
    pub fn insert_animation(
        &mut self,
        name: impl Into<String>,
        animation: Animation,
    ) -> BrickResult<()> {
        let name = name.into();
        animation.validate(&name)?;

        if let Playback::Playing {
            name: active,
            frame_index,
        } = &mut self.playback
        {
            if *active == name && *frame_index >= animation.len() {
                *frame_index = 0;
            }
        }

        self.animations.insert(name, animation);
        Ok(())
    }

    pub fn animation(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }

    /// Switch to `name`, show its first frame and reset the clock
    pub fn use_animation(&mut self, name: &str) -> BrickResult<()> {
        let frame = self
            .animations
            .get(name)
            .and_then(|animation| animation.frame(0))
            .ok_or_else(|| BrickError::AnimationNotFound(name.to_string()))?;

        self.apply_frame(frame)?;
        self.playback = Playback::Playing {
            name: name.to_string(),
            frame_index: 0,
        };
        self.accumulator_ms = 0.0;

        tracing::debug!(animation = name, frame, "animation selected");
        Ok(())
    }

    /// Advance the clock by `delta_ms`; call once per render tick
    ///
    /// When the accumulated time reaches `1000 / frame_rate` the accumulator
    /// is cleared (leftover time is dropped) and the sprite steps exactly one
    /// frame, wrapping after the last. Returns whether the frame changed.
    /// Negative or non-finite deltas count as zero. Does nothing while idle.
    pub fn animate(&mut self, delta_ms: f64) -> BrickResult<bool> {
        let delta = if delta_ms.is_finite() && delta_ms > 0.0 {
            delta_ms
        } else {
            0.0
        };

        let (next_index, frame) = {
            let (name, frame_index) = match &self.playback {
                Playback::Playing { name, frame_index } => (name, *frame_index),
                Playback::Idle => return Ok(false),
            };
            let Some(animation) = self.animations.get(name) else {
                return Ok(false);
            };

            self.accumulator_ms += delta;
            if self.accumulator_ms < animation.threshold_ms() {
                return Ok(false);
            }

            let next = (frame_index + 1) % animation.len();
            match animation.frame(next) {
                Some(frame) => (next, frame),
                None => return Ok(false),
            }
        };

        self.accumulator_ms = 0.0;
        self.apply_frame(frame)?;
        if let Playback::Playing { frame_index, .. } = &mut self.playback {
            *frame_index = next_index;
        }

        tracing::trace!(frame_index = next_index, frame, "sprite frame advanced");
        Ok(true)
    }

    /// Sample a timestamp (ms) and animate by the time since the last sample
    ///
    /// The first sample only sets the baseline.
    pub fn tick(&mut self, now_ms: f64) -> BrickResult<bool> {
        let delta = self.previous_sample.map_or(0.0, |previous| now_ms - previous);
        self.previous_sample = Some(now_ms);
        self.animate(delta)
    }

    /// Set the clock baseline without advancing
    pub fn sync_clock(&mut self, now_ms: f64) {
        self.previous_sample = Some(now_ms);
    }

    /// Return to idle; the current frame stays on screen
    pub fn stop(&mut self) {
        self.playback = Playback::Idle;
        self.accumulator_ms = 0.0;
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn current_animation(&self) -> Option<&str> {
        self.playback.name()
    }

    /// Position within the active animation's frame list
    pub fn frame_index(&self) -> Option<usize> {
        self.playback.frame_index()
    }

    /// Sheet frame currently shown
    pub fn current_frame(&self) -> Option<FrameIndex> {
        match &self.playback {
            Playback::Playing { name, frame_index } => self
                .animations
                .get(name)
                .and_then(|animation| animation.frame(*frame_index)),
            Playback::Idle => None,
        }
    }

    pub fn accumulator_ms(&self) -> f64 {
        self.accumulator_ms
    }

    pub fn on<F>(&self, event: &str, callback: F) -> BrickResult<()>
    where
        F: FnMut(N::Event) + 'static,
    {
        self.entity.on(event, callback)
    }

    pub fn node(&self) -> &N {
        self.entity.node()
    }

    fn apply_frame(&self, frame: FrameIndex) -> BrickResult<()> {
        let offset = -(f64::from(frame) * self.entity.width());
        self.entity
            .node()
            .set_style("background-position-x", &px(offset))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::surface::{Backend, MemoryBackend};
    use proptest::prelude::*;

    fn playing(frames: Vec<FrameIndex>, rate: f64) -> Sprite<crate::MemoryNode> {
        let backend = MemoryBackend::new();
        let parent = backend.create_node().unwrap();
        let mut s = Sprite::new(
            &parent,
            backend.create_node().unwrap(),
            Rect::new(0.0, 0.0, 24.0, 24.0),
            "url(sheet.png)",
            0,
        )
        .unwrap();
        s.set_animation("loop", frames, rate).unwrap();
        s.use_animation("loop").unwrap();
        s
    }

    proptest! {
        /// Advancing len(frames) times returns to the first position
        #[test]
        fn advancing_full_cycle_returns_to_start(
            frames in prop::collection::vec(0u32..16, 1..12),
            rate in 1.0f64..60.0,
        ) {
            let len = frames.len();
            let mut s = playing(frames, rate);
            let step = 1000.0 / rate;

            for _ in 0..len {
                prop_assert!(s.animate(step).unwrap());
            }
            prop_assert_eq!(s.frame_index(), Some(0));
        }

        /// Deltas that stay under the threshold never change the frame
        #[test]
        fn sub_threshold_ticks_are_noops(
            frames in prop::collection::vec(0u32..16, 2..8),
            rate in 1.0f64..60.0,
            fractions in prop::collection::vec(0.0f64..0.1, 1..9),
        ) {
            let mut s = playing(frames, rate);
            let threshold = 1000.0 / rate;

            for fraction in fractions {
                prop_assert!(!s.animate(threshold * fraction).unwrap());
            }
            prop_assert_eq!(s.frame_index(), Some(0));
        }

        /// Frame position always indexes inside the active animation
        #[test]
        fn frame_index_stays_in_range(
            frames in prop::collection::vec(0u32..16, 1..10),
            deltas in prop::collection::vec(0.0f64..400.0, 0..64),
        ) {
            let len = frames.len();
            let mut s = playing(frames, 12.0);

            for delta in deltas {
                s.animate(delta).unwrap();
                let index = s.frame_index().unwrap();
                prop_assert!(index < len);
                prop_assert!(s.current_frame().is_some());
            }
        }
    }
}
