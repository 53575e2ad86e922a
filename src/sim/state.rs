//! Game state and core simulation types
//!
//! The [`Simulation`] owns every entity. Outside code reads through `&`
//! accessors or a [`Snapshot`]; only the lifecycle operations mutate.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::GapSource;
use crate::config::{ConfigError, SimConfig};

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Title screen, waiting for the first input
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended by a collision, waiting for restart input
    Ended,
}

/// The flapping sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Center position; x never changes after construction
    pub pos: Vec2,
    /// Vertical velocity (positive = down)
    pub velocity: f32,
    /// Edge length of the square collision box
    pub size: f32,
}

impl Subject {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            pos: Vec2::new(config.subject_x(), config.height / 2.0),
            velocity: 0.0,
            size: config.sprite_size,
        }
    }

    #[inline]
    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.half_size()
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.half_size()
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.half_size()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.half_size()
    }
}

/// A top/bottom barrier pair with a passable gap between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Spawn-order identifier, unique within a run
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Bottom edge of the top barrier (= top of the gap)
    pub top_height: f32,
    /// Top edge of the bottom barrier (= bottom of the gap)
    pub bottom_y: f32,
    /// Set once the obstacle has been counted; never cleared
    pub scored: bool,
}

impl Obstacle {
    pub fn new(id: u32, x: f32, top_height: f32, gap: f32) -> Self {
        Self {
            id,
            x,
            top_height,
            bottom_y: top_height + gap,
            scored: false,
        }
    }

    #[inline]
    pub fn right_edge(&self, width: f32) -> f32 {
        self.x + width
    }

    /// Vertical center of the gap
    #[inline]
    pub fn gap_center(&self) -> f32 {
        (self.top_height + self.bottom_y) / 2.0
    }
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Subject left the top of the field
    Ceiling,
    /// Subject fell through the bottom of the field
    Floor,
    /// Subject hit an obstacle's top or bottom barrier
    Obstacle { id: u32 },
}

/// Which scoring path counted an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreReason {
    /// Right edge moved past the subject
    Passed,
    /// Removed off-screen before the pass check fired
    Removed,
}

/// Something that happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32 },
    Scored { id: u32, score: u64, reason: ScoreReason },
    Removed { id: u32 },
    Crashed(CrashCause),
}

/// Read-only copy of everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: GameState,
    pub subject: Subject,
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    pub frame_count: u64,
    pub field: Vec2,
    pub obstacle_width: f32,
}

/// The simulation core: one independent game instance
///
/// Generic over the gap source so tests can script obstacle layouts; the
/// default is a seeded `Pcg32`.
#[derive(Debug, Clone)]
pub struct Simulation<G = Pcg32> {
    pub(super) config: SimConfig,
    pub(super) state: GameState,
    pub(super) subject: Subject,
    pub(super) obstacles: Vec<Obstacle>,
    pub(super) score: u64,
    /// Frames since the last spawn
    pub(super) spawn_timer: u32,
    /// Frames since the last start
    pub(super) frame_count: u64,
    pub(super) gaps: G,
    seed: Option<u64>,
    next_id: u32,
}

impl Simulation<Pcg32> {
    /// Create a simulation whose gaps come from a `Pcg32` seeded with `seed`
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut sim = Self::with_gap_source(config, Pcg32::seed_from_u64(seed))?;
        sim.seed = Some(seed);
        Ok(sim)
    }
}

impl<G: GapSource> Simulation<G> {
    /// Create a simulation with an explicit gap source
    ///
    /// Rejects configs that fail [`SimConfig::validate`], so a run can never
    /// hit an empty gap band mid-game.
    pub fn with_gap_source(config: SimConfig, gaps: G) -> Result<Self, ConfigError> {
        config.validate()?;
        let subject = Subject::new(&config);
        Ok(Self {
            config,
            state: GameState::NotStarted,
            subject,
            obstacles: Vec::new(),
            score: 0,
            spawn_timer: 0,
            frame_count: 0,
            gaps,
            seed: None,
            next_id: 1,
        })
    }

    /// Begin a run (from NotStarted or Ended); no-op while Running
    pub fn start(&mut self) {
        match self.state {
            GameState::NotStarted | GameState::Ended => {
                self.score = 0;
                self.obstacles.clear();
                self.spawn_timer = 0;
                self.frame_count = 0;
                self.subject.pos.y = self.config.height / 2.0;
                self.subject.velocity = 0.0;
                self.state = GameState::Running;
                log::info!("Run started");
            }
            GameState::Running => {}
        }
    }

    /// Flap: overwrite the vertical velocity with the jump velocity
    pub fn apply_impulse(&mut self) {
        match self.state {
            GameState::Running => self.subject.velocity = self.config.jump_velocity,
            GameState::NotStarted | GameState::Ended => {}
        }
    }

    /// Back to the title screen; nothing else is reset until `start`
    pub fn restart(&mut self) {
        match self.state {
            GameState::Ended => {
                self.state = GameState::NotStarted;
                log::info!("Back to title (last score {})", self.score);
            }
            GameState::NotStarted | GameState::Running => {}
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Live obstacles, left to right
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn spawn_timer(&self) -> u32 {
        self.spawn_timer
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Seed used to build the gap source, if it was built from one
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            subject: self.subject,
            obstacles: self.obstacles.clone(),
            score: self.score,
            frame_count: self.frame_count,
            field: Vec2::new(self.config.width, self.config.height),
            obstacle_width: self.config.obstacle_width,
        }
    }

    /// Allocate a new obstacle ID
    pub(super) fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(super) fn end_run(&mut self, cause: CrashCause) -> GameEvent {
        self.state = GameState::Ended;
        log::info!(
            "Run ended at frame {} with score {} ({:?})",
            self.frame_count,
            self.score,
            cause
        );
        GameEvent::Crashed(cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> Simulation {
        let mut sim = Simulation::new(SimConfig::default(), 7).expect("valid config");
        sim.start();
        sim
    }

    #[test]
    fn test_new_is_not_started() {
        let sim = Simulation::new(SimConfig::default(), 1).expect("valid config");
        assert_eq!(sim.state(), GameState::NotStarted);
        assert_eq!(sim.subject().pos, Vec2::new(100.0, 300.0));
        assert_eq!(sim.seed(), Some(1));
    }

    #[test]
    fn test_impulse_overwrites_velocity() {
        let mut sim = running();
        sim.subject.velocity = 5.0;
        sim.apply_impulse();
        assert_eq!(sim.subject().velocity, -8.0);

        // Not cumulative
        sim.apply_impulse();
        assert_eq!(sim.subject().velocity, -8.0);
    }

    #[test]
    fn test_start_resets_everything() {
        let mut sim = running();
        sim.score = 4;
        sim.spawn_timer = 77;
        sim.frame_count = 900;
        sim.subject.pos.y = 12.0;
        sim.subject.velocity = 3.5;
        sim.obstacles.push(Obstacle::new(1, 50.0, 150.0, 120.0));
        sim.state = GameState::Ended;

        sim.start();
        assert_eq!(sim.state(), GameState::Running);
        assert_eq!(sim.score(), 0);
        assert!(sim.obstacles().is_empty());
        assert_eq!(sim.spawn_timer(), 0);
        assert_eq!(sim.frame_count(), 0);
        assert_eq!(sim.subject().pos.y, 300.0);
        assert_eq!(sim.subject().velocity, 0.0);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut sim = running();
        sim.score = 2;
        sim.subject.pos.y = 250.0;
        sim.start();
        assert_eq!(sim.score(), 2);
        assert_eq!(sim.subject().pos.y, 250.0);
    }

    #[test]
    fn test_invalid_operations_are_noops() {
        let mut sim = Simulation::new(SimConfig::default(), 3).expect("valid config");
        let before = sim.snapshot();
        sim.apply_impulse();
        sim.restart();
        assert_eq!(sim.snapshot(), before);

        sim.start();
        sim.restart();
        assert_eq!(sim.state(), GameState::Running);
    }

    #[test]
    fn test_restart_keeps_state_until_start() {
        let mut sim = running();
        sim.score = 9;
        sim.obstacles.push(Obstacle::new(1, 50.0, 150.0, 120.0));
        sim.state = GameState::Ended;

        sim.restart();
        assert_eq!(sim.state(), GameState::NotStarted);
        assert_eq!(sim.score(), 9);
        assert_eq!(sim.obstacles().len(), 1);

        // A second restart from NotStarted does nothing
        sim.restart();
        assert_eq!(sim.state(), GameState::NotStarted);
    }

    #[test]
    fn test_rejects_invalid_config_at_construction() {
        // Gap taller than the field leaves no band to draw from
        let config = SimConfig {
            obstacle_gap: 450.0,
            gravity: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            Simulation::new(config.clone(), 1),
            Err(ConfigError::GapDoesNotFit { .. })
        ));
        assert!(matches!(
            Simulation::with_gap_source(config, crate::sim::ScriptedGaps::default()),
            Err(ConfigError::GapDoesNotFit { .. })
        ));
    }

    #[test]
    fn test_obstacle_geometry() {
        let obstacle = Obstacle::new(1, 400.0, 40.0, 120.0);
        assert_eq!(obstacle.bottom_y, 160.0);
        assert_eq!(obstacle.right_edge(60.0), 460.0);
        assert_eq!(obstacle.gap_center(), 100.0);
        assert!(!obstacle.scored);
    }
}
