//! Obstacle gap placement
//!
//! Gaps are drawn uniformly from a band strictly inside the field so every
//! obstacle is passable. The source is injectable: any `rand::Rng` works,
//! and tests can script exact layouts.

use std::collections::VecDeque;
use std::ops::Range;

use rand::Rng;

/// Supplies the top edge of each new gap
pub trait GapSource {
    /// Pick a gap top from `range` (`start..end`, end exclusive)
    fn next_gap_top(&mut self, range: Range<f32>) -> f32;
}

impl<R: Rng> GapSource for R {
    fn next_gap_top(&mut self, range: Range<f32>) -> f32 {
        self.random_range(range)
    }
}

/// Replays a fixed list of gap tops, then repeats the last one
///
/// Ignores the configured band, so it can also place gaps a random source
/// never would.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGaps {
    queue: VecDeque<f32>,
    last: Option<f32>,
}

impl ScriptedGaps {
    pub fn new(tops: impl IntoIterator<Item = f32>) -> Self {
        Self {
            queue: tops.into_iter().collect(),
            last: None,
        }
    }
}

impl GapSource for ScriptedGaps {
    fn next_gap_top(&mut self, range: Range<f32>) -> f32 {
        if let Some(top) = self.queue.pop_front() {
            self.last = Some(top);
        }
        // Empty script: fall back to the middle of the band
        self.last
            .unwrap_or_else(|| (range.start + range.end) / 2.0)
    }
}
