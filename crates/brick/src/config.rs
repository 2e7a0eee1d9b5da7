//! Library configuration
//!
//! `BrickConfig` is plain serde data so the JS side can hand over an object
//! literal; every field has a default.

use serde::{Deserialize, Serialize};

use crate::types::ZIndex;

/// Stacking order used when none is given
pub const DEFAULT_Z_INDEX: ZIndex = 999;

/// Id attribute put on the root container
pub const DEFAULT_ROOT_ID: &str = "dom-renderer";

/// Background used for entities created without a graphic
pub const DEFAULT_GRAPHIC: &str = "#fff";

/// How the root container is sized
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootSizing {
    /// Track the viewport reported by the backend
    #[default]
    Viewport,
    /// Literal 0 x 0, as older pages expect
    Zero,
}

/// Settings shared by every entity one facade creates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickConfig {
    /// `z-index` applied to every entity
    pub z_index: ZIndex,
    /// Id attribute of the root container
    pub root_id: String,
    /// Root container sizing policy
    pub root_sizing: RootSizing,
    /// Background for entities created without a graphic
    pub default_graphic: String,
}

impl Default for BrickConfig {
    fn default() -> Self {
        Self {
            z_index: DEFAULT_Z_INDEX,
            root_id: DEFAULT_ROOT_ID.to_string(),
            root_sizing: RootSizing::default(),
            default_graphic: DEFAULT_GRAPHIC.to_string(),
        }
    }
}

impl BrickConfig {
    /// Default config with a specific stacking order
    pub fn with_z_index(mut self, z_index: ZIndex) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn with_root_id(mut self, root_id: impl Into<String>) -> Self {
        self.root_id = root_id.into();
        self
    }

    pub fn with_root_sizing(mut self, sizing: RootSizing) -> Self {
        self.root_sizing = sizing;
        self
    }

    pub fn with_default_graphic(mut self, graphic: impl Into<String>) -> Self {
        self.default_graphic = graphic.into();
        self
    }
}
