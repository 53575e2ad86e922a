//! User input dispatch
//!
//! Every intent (pointer press, touch start, Space) maps to exactly one
//! simulation operation chosen by the current state. Anything else is ignored
//! without touching the simulation.

use serde::{Deserialize, Serialize};

use crate::sim::{GameState, GapSource, Simulation};

/// Raw events a platform layer forwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown,
    TouchStart,
    /// Key press, by DOM-style code (e.g. `"Space"`, `"KeyA"`)
    Key(String),
}

impl InputEvent {
    /// Whether this event expresses the single game intent
    pub fn is_intent(&self) -> bool {
        match self {
            InputEvent::PointerDown | InputEvent::TouchStart => true,
            InputEvent::Key(code) => code == "Space",
        }
    }
}

/// Operation an intent resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Start,
    Flap,
    Restart,
}

impl Action {
    /// The operation an intent triggers in `state`
    pub fn for_state(state: GameState) -> Self {
        match state {
            GameState::NotStarted => Action::Start,
            GameState::Running => Action::Flap,
            GameState::Ended => Action::Restart,
        }
    }
}

/// Apply one raw event to the simulation
///
/// Returns the action taken, or `None` when the event is not an intent.
pub fn dispatch<G: GapSource>(sim: &mut Simulation<G>, event: &InputEvent) -> Option<Action> {
    if !event.is_intent() {
        return None;
    }
    let action = Action::for_state(sim.state());
    match action {
        Action::Start => sim.start(),
        Action::Flap => sim.apply_impulse(),
        Action::Restart => sim.restart(),
    }
    Some(action)
}
