//! The single sprite image
//!
//! Loading happens outside the crate; the platform layer reports progress by
//! replacing the value. The simulation never looks at this.

use serde::{Deserialize, Serialize};

/// Load status of the sprite image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpriteAsset {
    #[default]
    Loading,
    Ready { width: u32, height: u32 },
    Failed,
}

impl SpriteAsset {
    pub fn ready(width: u32, height: u32) -> Self {
        SpriteAsset::Ready { width, height }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SpriteAsset::Ready { .. })
    }
}
