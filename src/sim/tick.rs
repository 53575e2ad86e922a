//! Per-frame simulation step
//!
//! One call per display refresh. Order matters and is fixed:
//! counters, physics, bounds, spawning, then obstacles left to right.

use super::collision::{hits_obstacle, out_of_bounds};
use super::spawn::GapSource;
use super::state::{CrashCause, GameEvent, GameState, Obstacle, ScoreReason, Simulation};
use crate::consts::SCORE_PER_OBSTACLE;

impl<G: GapSource> Simulation<G> {
    /// Advance the game by one frame
    ///
    /// Does nothing (and returns no events) unless Running. Stops early on the
    /// first collision; obstacles after the one that was hit keep their
    /// previous position for this frame.
    pub fn advance_frame(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match self.state {
            GameState::Running => {}
            GameState::NotStarted | GameState::Ended => return events,
        }

        self.frame_count += 1;

        // Semi-implicit Euler: velocity first, then position
        self.subject.velocity += self.config.gravity;
        self.subject.pos.y += self.subject.velocity;

        if let Some(cause) = out_of_bounds(&self.subject, self.config.height) {
            events.push(self.end_run(cause));
            return events;
        }

        self.spawn_timer += 1;
        if self.spawn_timer >= self.config.spawn_period_frames {
            events.push(self.spawn_obstacle());
            self.spawn_timer = 0;
        }

        self.update_obstacles(&mut events);
        events
    }

    fn spawn_obstacle(&mut self) -> GameEvent {
        let id = self.next_obstacle_id();
        let top = self.gaps.next_gap_top(self.config.gap_range());
        self.obstacles
            .push(Obstacle::new(id, self.config.width, top, self.config.obstacle_gap));
        log::debug!("Spawned obstacle {} with gap at {:.1}", id, top);
        GameEvent::Spawned { id }
    }

    /// Move, score, cull and collide obstacles in spawn order
    ///
    /// Index-based with in-place removal so no element is skipped after a
    /// removal.
    fn update_obstacles(&mut self, events: &mut Vec<GameEvent>) {
        let width = self.config.obstacle_width;
        let speed = self.config.obstacle_speed;
        let subject_x = self.subject.pos.x;

        let mut i = 0;
        while i < self.obstacles.len() {
            let obstacle = &mut self.obstacles[i];
            obstacle.x -= speed;
            let right = obstacle.right_edge(width);

            if right < 0.0 {
                let removed = self.obstacles.remove(i);
                if !removed.scored {
                    self.award(removed.id, ScoreReason::Removed, events);
                }
                events.push(GameEvent::Removed { id: removed.id });
                continue;
            }

            if !obstacle.scored && right < subject_x {
                obstacle.scored = true;
                let id = obstacle.id;
                self.award(id, ScoreReason::Passed, events);
            } else if hits_obstacle(&self.subject, obstacle, width) {
                let id = obstacle.id;
                events.push(self.end_run(CrashCause::Obstacle { id }));
                return;
            }

            i += 1;
        }
    }

    fn award(&mut self, id: u32, reason: ScoreReason, events: &mut Vec<GameEvent>) {
        self.score += SCORE_PER_OBSTACLE;
        log::debug!("Obstacle {} scored ({:?}), score {}", id, reason, self.score);
        events.push(GameEvent::Scored {
            id,
            score: self.score,
            reason,
        });
    }
}
