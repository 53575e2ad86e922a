//! Per-frame scene assembly
//!
//! Turns a [`Snapshot`] into a backend-agnostic draw list. Never mutates the
//! simulation; the only randomness is the line jitter, drawn from the
//! caller's RNG so replays can reproduce frames exactly.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::shapes::{DEFAULT_WOBBLE, hand_drawn_line, rect, sprite_quad};
use super::sprite::SpriteAsset;
use super::vertex::{SpriteVertex, Vertex, colors};
use crate::sim::{GameState, Obstacle, Snapshot};

/// Height of the lip drawn at the mouth of each barrier
const CAP_HEIGHT: f32 = 20.0;
/// How far a lip overhangs the barrier on each side
const CAP_OVERHANG: f32 = 5.0;

pub const TITLE: &str = "Duck-Rabbit Flapper";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A line of text for the backend's font renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    /// Font size in pixels
    pub size: f32,
    pub bold: bool,
    pub align: TextAlign,
}

impl TextItem {
    fn new(text: impl Into<String>, pos: Vec2, size: f32, bold: bool, align: TextAlign) -> Self {
        Self {
            text: text.into(),
            pos,
            size,
            bold,
            align,
        }
    }
}

/// Everything to draw for one frame, back to front
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Filled triangles (background, barriers, caps)
    pub fills: Vec<Vertex>,
    /// Ink outlines, one strip per line, drawn 2 px wide
    pub lines: Vec<Vec<Vertex>>,
    /// Sprite quad; empty when the image is not ready
    pub sprite: Vec<SpriteVertex>,
    /// Translucent layer drawn over everything but the text
    pub overlay: Vec<Vertex>,
    pub texts: Vec<TextItem>,
}

impl Scene {
    fn outline<R: Rng>(&mut self, from: Vec2, to: Vec2, rng: &mut R) {
        self.lines
            .push(hand_drawn_line(from, to, DEFAULT_WOBBLE, colors::INK, rng));
    }

    /// Place the sprite, or skip it while the image is unavailable
    fn sprite(&mut self, center: Vec2, size: f32, asset: &SpriteAsset) {
        if asset.is_ready() {
            self.sprite = sprite_quad(center, size);
        } else {
            log::warn!("Sprite image not ready ({:?}), skipping", asset);
        }
    }

    fn obstacle<R: Rng>(&mut self, obstacle: &Obstacle, width: f32, height: f32, rng: &mut R) {
        let left = obstacle.x;
        let right = obstacle.x + width;
        let top = obstacle.top_height;
        let bottom = obstacle.bottom_y;

        // Barriers
        self.fills
            .extend(rect(Vec2::new(left, 0.0), Vec2::new(width, top), colors::OBSTACLE));
        self.fills.extend(rect(
            Vec2::new(left, bottom),
            Vec2::new(width, height - bottom),
            colors::OBSTACLE,
        ));

        self.outline(Vec2::new(left, 0.0), Vec2::new(left, top), rng);
        self.outline(Vec2::new(right, 0.0), Vec2::new(right, top), rng);
        self.outline(Vec2::new(left, top), Vec2::new(right, top), rng);

        self.outline(Vec2::new(left, bottom), Vec2::new(left, height), rng);
        self.outline(Vec2::new(right, bottom), Vec2::new(right, height), rng);
        self.outline(Vec2::new(left, bottom), Vec2::new(right, bottom), rng);

        // Caps at the mouth of the gap
        let cap_left = left - CAP_OVERHANG;
        let cap_right = right + CAP_OVERHANG;
        let cap_size = Vec2::new(width + 2.0 * CAP_OVERHANG, CAP_HEIGHT);
        self.fills
            .extend(rect(Vec2::new(cap_left, top - CAP_HEIGHT), cap_size, colors::CAP));
        self.fills
            .extend(rect(Vec2::new(cap_left, bottom), cap_size, colors::CAP));

        for (y0, y1) in [(top - CAP_HEIGHT, top), (bottom, bottom + CAP_HEIGHT)] {
            self.outline(Vec2::new(cap_left, y0), Vec2::new(cap_right, y0), rng);
            self.outline(Vec2::new(cap_left, y1), Vec2::new(cap_right, y1), rng);
            self.outline(Vec2::new(cap_left, y0), Vec2::new(cap_left, y1), rng);
            self.outline(Vec2::new(cap_right, y0), Vec2::new(cap_right, y1), rng);
        }
    }
}

/// Build the draw list for one frame
pub fn build_scene<R: Rng>(snapshot: &Snapshot, asset: &SpriteAsset, rng: &mut R) -> Scene {
    let field = snapshot.field;
    let center = field / 2.0;
    let mut scene = Scene::default();

    scene.fills.extend(rect(Vec2::ZERO, field, colors::PAPER));

    match snapshot.state {
        GameState::NotStarted => {
            scene.texts.push(TextItem::new(
                TITLE,
                center - Vec2::new(0.0, 80.0),
                24.0,
                true,
                TextAlign::Center,
            ));
            scene.texts.push(TextItem::new(
                "Click anywhere to start!",
                center + Vec2::new(0.0, 20.0),
                16.0,
                false,
                TextAlign::Center,
            ));
            scene.texts.push(TextItem::new(
                "Can you see both duck and rabbit?",
                center + Vec2::new(0.0, 40.0),
                16.0,
                false,
                TextAlign::Center,
            ));
            // Preview sprite above the prompts, not at the subject's position
            scene.sprite(center - Vec2::new(0.0, 30.0), snapshot.subject.size, asset);
        }
        GameState::Running => {
            for obstacle in &snapshot.obstacles {
                scene.obstacle(obstacle, snapshot.obstacle_width, field.y, rng);
            }
            scene.sprite(snapshot.subject.pos, snapshot.subject.size, asset);
            scene.texts.push(TextItem::new(
                format!("§. {}", snapshot.score),
                Vec2::new(10.0, 35.0),
                24.0,
                true,
                TextAlign::Left,
            ));
            scene.texts.push(TextItem::new(
                "Click or SPACE to flap",
                field - Vec2::new(10.0, 10.0),
                12.0,
                false,
                TextAlign::Right,
            ));
        }
        GameState::Ended => {
            for obstacle in &snapshot.obstacles {
                scene.obstacle(obstacle, snapshot.obstacle_width, field.y, rng);
            }
            scene.sprite(snapshot.subject.pos, snapshot.subject.size, asset);
            scene.overlay = rect(Vec2::ZERO, field, colors::GAME_OVER_VEIL);
            scene.texts.push(TextItem::new(
                "Game Over!",
                center - Vec2::new(0.0, 40.0),
                28.0,
                true,
                TextAlign::Center,
            ));
            scene.texts.push(TextItem::new(
                format!("Final Score: {}", snapshot.score),
                center,
                20.0,
                true,
                TextAlign::Center,
            ));
            scene.texts.push(TextItem::new(
                "Click to play again",
                center + Vec2::new(0.0, 40.0),
                16.0,
                false,
                TextAlign::Center,
            ));
        }
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::{ScriptedGaps, Simulation};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn texts(scene: &Scene) -> Vec<&str> {
        scene.texts.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_title_scene() {
        let sim = Simulation::new(SimConfig::default(), 1).expect("valid config");
        let mut rng = Pcg32::seed_from_u64(0);
        let scene = build_scene(&sim.snapshot(), &SpriteAsset::ready(512, 512), &mut rng);

        assert_eq!(texts(&scene)[0], TITLE);
        assert!(scene.lines.is_empty());
        // Preview sprite centered at (200, 270)
        assert_eq!(scene.sprite[0].position, [182.5, 252.5]);
    }

    #[test]
    fn test_running_scene_draws_obstacles_and_score() {
        let config = SimConfig {
            gravity: 0.0,
            ..Default::default()
        };
        let mut sim = Simulation::with_gap_source(config, ScriptedGaps::new([200.0]))
            .expect("valid config");
        sim.start();
        for _ in 0..120 {
            sim.advance_frame();
        }
        assert_eq!(sim.obstacles().len(), 1);

        let mut rng = Pcg32::seed_from_u64(0);
        let scene = build_scene(&sim.snapshot(), &SpriteAsset::ready(512, 512), &mut rng);

        // Background + 2 barriers + 2 caps
        assert_eq!(scene.fills.len(), 5 * 6);
        // 6 barrier edges + 8 cap edges
        assert_eq!(scene.lines.len(), 14);
        assert_eq!(scene.sprite.len(), 6);
        assert!(scene.overlay.is_empty());
        assert_eq!(texts(&scene), vec!["§. 0", "Click or SPACE to flap"]);
    }

    #[test]
    fn test_game_over_scene() {
        let mut sim = Simulation::new(SimConfig::default(), 1).expect("valid config");
        sim.start();
        while sim.state() == GameState::Running {
            sim.advance_frame();
        }

        let mut rng = Pcg32::seed_from_u64(0);
        let scene = build_scene(&sim.snapshot(), &SpriteAsset::ready(512, 512), &mut rng);
        assert_eq!(scene.overlay.len(), 6);
        assert_eq!(scene.overlay[0].color, colors::GAME_OVER_VEIL);
        assert_eq!(
            texts(&scene),
            vec!["Game Over!", "Final Score: 0", "Click to play again"]
        );
    }

    #[test]
    fn test_missing_sprite_is_skipped() {
        let mut sim = Simulation::new(SimConfig::default(), 1).expect("valid config");
        sim.start();
        let mut rng = Pcg32::seed_from_u64(0);

        let scene = build_scene(&sim.snapshot(), &SpriteAsset::Loading, &mut rng);
        assert!(scene.sprite.is_empty());
        let scene = build_scene(&sim.snapshot(), &SpriteAsset::Failed, &mut rng);
        assert!(scene.sprite.is_empty());
        // The rest of the frame is still drawn
        assert_eq!(scene.texts.len(), 2);
    }
}
