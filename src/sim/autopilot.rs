//! Demo-mode controller
//!
//! Plays the game from a snapshot alone: aim for the center of the next gap
//! and flap whenever the sprite is below that line and not already rising.

use super::state::{GameState, Snapshot};

/// Decides one flap per frame from the current snapshot
pub trait Pilot {
    /// Whether to flap before the next frame is advanced
    fn wants_flap(&mut self, snapshot: &Snapshot) -> bool;
}

/// Default trigger offset below the target line
///
/// A flap at the default physics climbs about 60 px, so triggering 26 px low
/// keeps the oscillation roughly centered on the target.
pub const DEFAULT_SLACK: f32 = 26.0;

/// Gap-tracking pilot; deterministic, no RNG
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Pixels below the target line tolerated before flapping
    pub slack: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(DEFAULT_SLACK)
    }
}

impl Autopilot {
    pub fn new(slack: f32) -> Self {
        Self { slack }
    }

    /// The y the pilot is steering toward
    pub fn target_y(snapshot: &Snapshot) -> f32 {
        let subject_left = snapshot.subject.pos.x - snapshot.subject.size / 2.0;
        snapshot
            .obstacles
            .iter()
            .find(|o| o.right_edge(snapshot.obstacle_width) >= subject_left)
            .map(|o| o.gap_center())
            .unwrap_or(snapshot.field.y / 2.0)
    }
}

impl Pilot for Autopilot {
    fn wants_flap(&mut self, snapshot: &Snapshot) -> bool {
        if snapshot.state != GameState::Running {
            return false;
        }
        let subject = &snapshot.subject;
        let target = Self::target_y(snapshot) + self.slack;
        subject.pos.y > target && subject.velocity >= 0.0
    }
}
