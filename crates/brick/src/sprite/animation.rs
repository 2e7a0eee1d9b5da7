//! Animation definitions and playback state

use serde::{Deserialize, Serialize};

use crate::error::{BrickError, BrickResult};
use crate::types::FrameIndex;

/// Frames to cycle through and the rate to cycle at
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    frames: Vec<FrameIndex>,
    frame_rate: f64,
}

impl Animation {
    /// Frames may repeat; `frame_rate` is in frames per second
    pub fn new(frames: Vec<FrameIndex>, frame_rate: f64) -> Self {
        Self { frames, frame_rate }
    }

    pub fn frames(&self) -> &[FrameIndex] {
        &self.frames
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sheet frame shown at position `index` of the sequence
    pub fn frame(&self, index: usize) -> Option<FrameIndex> {
        self.frames.get(index).copied()
    }

    /// Milliseconds that must accumulate before the next frame
    pub fn threshold_ms(&self) -> f64 {
        1000.0 / self.frame_rate
    }

    pub(crate) fn validate(&self, name: &str) -> BrickResult<()> {
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(BrickError::InvalidFrameRate(self.frame_rate));
        }
        if self.frames.is_empty() {
            return Err(BrickError::EmptyAnimation(name.to_string()));
        }
        Ok(())
    }
}

/// Convert host-supplied numbers to sheet frame indices
///
/// Each value must be a whole number in `0..=u32::MAX`; anything else fails
/// with `InvalidDimension` instead of being truncated or wrapped.
pub fn frame_indices(values: &[f64]) -> BrickResult<Vec<FrameIndex>> {
    values
        .iter()
        .map(|&value| {
            if !value.is_finite()
                || value < 0.0
                || value.fract() != 0.0
                || value > FrameIndex::MAX as f64
            {
                tracing::warn!(value, "rejected frame index");
                return Err(BrickError::InvalidDimension {
                    field: "frame",
                    value,
                });
            }
            Ok(value as FrameIndex)
        })
        .collect()
}

/// Playback state of a sprite
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Playback {
    /// No animation selected yet
    #[default]
    Idle,
    /// Showing position `frame_index` of animation `name`
    Playing {
        name: String,
        frame_index: usize,
    },
}

impl Playback {
    pub fn is_playing(&self) -> bool {
        matches!(self, Playback::Playing { .. })
    }

    /// Name of the active animation
    pub fn name(&self) -> Option<&str> {
        match self {
            Playback::Playing { name, .. } => Some(name),
            Playback::Idle => None,
        }
    }

    pub fn frame_index(&self) -> Option<usize> {
        match self {
            Playback::Playing { frame_index, .. } => Some(*frame_index),
            Playback::Idle => None,
        }
    }
}
