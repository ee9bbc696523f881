//! Fixed timestep simulation tick
//!
//! Order within a tick is fixed: intents, skier motion, world scroll (and
//! band regeneration), collisions, pruning.

use serde::{Deserialize, Serialize};

use super::collision::{prune_obstacles, resolve_collisions};
use super::scroll::scroll_world;
use super::state::{GameEvent, GamePhase, Session};

/// A discrete player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    TurnLeft,
    TurnRight,
    Accelerate,
    Decelerate,
    Quit,
}

/// Input commands for a single tick, applied in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub intents: Vec<Intent>,
}

impl TickInput {
    pub fn new(intents: impl IntoIterator<Item = Intent>) -> Self {
        Self {
            intents: intents.into_iter().collect(),
        }
    }

    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

/// Apply intents to the skier. Returns false if the player quit.
fn apply_intents(session: &mut Session, input: &TickInput) -> bool {
    for intent in &input.intents {
        match intent {
            Intent::TurnLeft => session.skier.turn(-1),
            Intent::TurnRight => session.skier.turn(1),
            Intent::Accelerate => session.skier.speed_up(),
            Intent::Decelerate => session.skier.slow_down(),
            Intent::Quit => {
                session.phase = GamePhase::Quit;
                session.events.push(GameEvent::Quit);
                log::info!("Player quit with score {}", session.score);
                return false;
            }
        }
    }
    true
}

/// Advance the session by one tick. Does nothing once the run is over.
pub fn tick(session: &mut Session, input: &TickInput) {
    session.events.clear();

    if session.is_over() {
        return;
    }

    session.time_ticks += 1;

    if !apply_intents(session, input) {
        return;
    }

    let vy = session.skier.velocity().y;
    session.skier.step(&session.viewport);

    scroll_world(session, vy);

    resolve_collisions(session);
    if session.is_terminal() {
        return;
    }

    let pruned = prune_obstacles(session);
    if pruned > 0 {
        log::debug!("Pruned {} obstacles", pruned);
    }
}
