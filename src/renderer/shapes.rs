//! Shape generation for 2D primitives

use glam::Vec2;
use rand::Rng;

use super::vertex::{SpriteVertex, Vertex};

/// Points are spaced about this far apart along a hand-drawn line
const HAND_DRAWN_STEP: f32 = 8.0;
/// Default jitter amplitude for hand-drawn lines
pub const DEFAULT_WOBBLE: f32 = 0.8;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate a line strip that looks sketched by hand
///
/// Starts exactly at `from`; each of the following `max(distance / 8, 2)`
/// points is jittered by up to `wobble / 2` on both axes.
pub fn hand_drawn_line<R: Rng>(
    from: Vec2,
    to: Vec2,
    wobble: f32,
    color: [f32; 4],
    rng: &mut R,
) -> Vec<Vertex> {
    let distance = from.distance(to);
    let steps = ((distance / HAND_DRAWN_STEP).floor() as u32).max(2);

    let mut strip = Vec::with_capacity(steps as usize + 1);
    strip.push(Vertex::new(from.x, from.y, color));
    for i in 1..=steps {
        let p = from.lerp(to, i as f32 / steps as f32);
        let jitter = Vec2::new(rng.random::<f32>() - 0.5, rng.random::<f32>() - 0.5) * wobble;
        let p = p + jitter;
        strip.push(Vertex::new(p.x, p.y, color));
    }
    strip
}

/// Textured quad of side `size` centered on `center`
pub fn sprite_quad(center: Vec2, size: f32) -> Vec<SpriteVertex> {
    let half = size / 2.0;
    let min = center - Vec2::splat(half);
    let max = center + Vec2::splat(half);
    vec![
        SpriteVertex::new(min.x, min.y, 0.0, 0.0),
        SpriteVertex::new(max.x, min.y, 1.0, 0.0),
        SpriteVertex::new(min.x, max.y, 0.0, 1.0),
        SpriteVertex::new(min.x, max.y, 0.0, 1.0),
        SpriteVertex::new(max.x, min.y, 1.0, 0.0),
        SpriteVertex::new(max.x, max.y, 1.0, 1.0),
    ]
}
