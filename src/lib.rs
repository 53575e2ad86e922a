//! Duck-Rabbit Flapper - a hand-drawn flappy arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, scoring, lifecycle)
//! - `config`: Simulation constants, validation and JSON loading
//! - `input`: Maps raw user events to simulation operations
//! - `renderer`: Builds a platform-free draw list from a snapshot
//! - `host`: Frame loop that drives the simulation and halts on faults

pub mod config;
pub mod host;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use host::{FrameLoop, HostError};
pub use sim::{GameEvent, GameState, Simulation, Snapshot};

/// Default game constants
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Downward acceleration added to velocity every frame
    pub const GRAVITY: f32 = 0.5;
    /// Velocity the subject is set to on a flap (negative = up)
    pub const JUMP_VELOCITY: f32 = -8.0;

    /// Obstacle defaults
    pub const OBSTACLE_SPEED: f32 = 2.0;
    pub const OBSTACLE_GAP: f32 = 120.0;
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    /// Minimum distance between the gap and the top/bottom of the field
    pub const GAP_MARGIN: f32 = 100.0;
    /// Frames between obstacle spawns (2 seconds at 60 fps)
    pub const SPAWN_PERIOD_FRAMES: u32 = 120;

    /// Sprite edge length (collision box is size x size)
    pub const SPRITE_SIZE: f32 = 35.0;

    /// Points awarded per cleared obstacle
    pub const SCORE_PER_OBSTACLE: u64 = 1;
}
