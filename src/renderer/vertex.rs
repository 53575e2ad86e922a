//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Vertex for the textured sprite quad
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl SpriteVertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
        }
    }
}

/// Colors for game elements (paper and ink)
pub mod colors {
    pub const PAPER: [f32; 4] = [0.98, 0.98, 0.98, 1.0]; // #fafafa
    pub const INK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const TEXT: [f32; 4] = [0.2, 0.2, 0.2, 1.0]; // #333333
    pub const OBSTACLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const CAP: [f32; 4] = [0.867, 0.867, 0.867, 1.0]; // #dddddd
    pub const GAME_OVER_VEIL: [f32; 4] = [1.0, 1.0, 1.0, 0.9];
}
