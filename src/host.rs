//! Frame loop host
//!
//! Owns the simulation, so every input and frame goes through one timeline.
//! A fault inside a frame halts the loop for good; it is logged for the
//! operator and never retried.

use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};

use rand_pcg::Pcg32;
use thiserror::Error;

use crate::input::{InputEvent, dispatch};
use crate::sim::{GameEvent, GapSource, Pilot, Simulation};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("frame {frame} faulted: {message}")]
    Fault { frame: u64, message: String },
    #[error("frame loop halted after a fault at frame {frame}")]
    Halted { frame: u64 },
}

/// Drives a simulation one display tick at a time
#[derive(Debug)]
pub struct FrameLoop<G = Pcg32> {
    sim: Simulation<G>,
    pending: VecDeque<InputEvent>,
    /// Frame that faulted, once halted
    halted_at: Option<u64>,
    ticks: u64,
}

impl<G: GapSource> FrameLoop<G> {
    pub fn new(sim: Simulation<G>) -> Self {
        Self {
            sim,
            pending: VecDeque::new(),
            halted_at: None,
            ticks: 0,
        }
    }

    pub fn sim(&self) -> &Simulation<G> {
        &self.sim
    }

    pub fn is_halted(&self) -> bool {
        self.halted_at.is_some()
    }

    /// Total ticks processed, across runs
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Queue a raw input event for the next tick
    pub fn push_input(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Ask the pilot whether to flap, and queue the intent if so
    pub fn steer<P: Pilot>(&mut self, pilot: &mut P) {
        if pilot.wants_flap(&self.sim.snapshot()) {
            self.push_input(InputEvent::PointerDown);
        }
    }

    /// Apply queued input, then advance one frame
    pub fn tick(&mut self) -> Result<Vec<GameEvent>, HostError> {
        if let Some(frame) = self.halted_at {
            return Err(HostError::Halted { frame });
        }

        let sim = &mut self.sim;
        let pending = &mut self.pending;
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            while let Some(event) = pending.pop_front() {
                if let Some(action) = dispatch(sim, &event) {
                    log::debug!("{:?} -> {:?}", event, action);
                }
            }
            sim.advance_frame()
        }));
        self.ticks += 1;

        match result {
            Ok(events) => {
                log::trace!(
                    "Frame: {:?} {:.1}",
                    self.sim.state(),
                    self.sim.subject().pos.y
                );
                Ok(events)
            }
            Err(payload) => {
                let frame = self.sim.frame_count();
                let message = panic_message(payload.as_ref());
                log::error!("Frame {} crashed: {}; halting frame loop", frame, message);
                self.halted_at = Some(frame);
                self.pending.clear();
                Err(HostError::Fault { frame, message })
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
