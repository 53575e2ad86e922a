//! Collision tests for the square sprite
//!
//! Everything is axis-aligned: the subject is a box of `size x size` around
//! its center, and an obstacle is two rectangles sharing an x-span:
//! `[x, x + width] x [0, top_height]` and `[x, x + width] x [bottom_y, height]`.

use super::state::{CrashCause, Obstacle, Subject};

/// Check the subject against the top and bottom of the field
///
/// Uses the center against `half_size` margins, so the sprite may touch the
/// edge exactly without ending the run.
pub fn out_of_bounds(subject: &Subject, field_height: f32) -> Option<CrashCause> {
    let half = subject.half_size();
    if subject.pos.y > field_height - half {
        Some(CrashCause::Floor)
    } else if subject.pos.y < half {
        Some(CrashCause::Ceiling)
    } else {
        None
    }
}

/// Whether the subject's box overlaps the obstacle horizontally
#[inline]
pub fn overlaps_horizontally(subject: &Subject, obstacle: &Obstacle, obstacle_width: f32) -> bool {
    subject.right() > obstacle.x && subject.left() < obstacle.right_edge(obstacle_width)
}

/// Check the subject against one obstacle's two barriers
///
/// A subject entirely inside `[top_height, bottom_y]` never hits.
pub fn hits_obstacle(subject: &Subject, obstacle: &Obstacle, obstacle_width: f32) -> bool {
    overlaps_horizontally(subject, obstacle, obstacle_width)
        && (subject.top() < obstacle.top_height || subject.bottom() > obstacle.bottom_y)
}
