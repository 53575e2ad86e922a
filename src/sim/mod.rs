//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `advance_frame` per display refresh, no wall-clock time
//! - Injected, seedable gap source only
//! - Stable iteration order (spawn order = left-to-right)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::{Autopilot, Pilot};
pub use collision::{hits_obstacle, out_of_bounds, overlaps_horizontally};
pub use spawn::{GapSource, ScriptedGaps};
pub use state::{
    CrashCause, GameEvent, GameState, Obstacle, ScoreReason, Simulation, Snapshot, Subject,
};
