//! Collision detection and resolution
//!
//! Everything on the slope is an axis-aligned box. Only the first obstacle
//! found overlapping the skier is resolved in a tick; anything else still
//! overlapping gets its turn on the next tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, ObstacleKind, Session};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap: boxes that only share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Outcome of the collision pass for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    Clear,
    Flag { score: u64 },
    Crash { score: u64 },
}

/// Index of the first obstacle overlapping `bounds`, in iteration order
pub fn first_hit(bounds: &Rect, session: &Session) -> Option<usize> {
    session
        .obstacles
        .iter()
        .position(|o| o.bounds().overlaps(bounds))
}

/// Test the skier against the active obstacles and apply the first hit
pub fn resolve_collisions(session: &mut Session) -> CollisionOutcome {
    if session.phase != GamePhase::Skiing {
        return CollisionOutcome::Clear;
    }

    let Some(index) = first_hit(&session.skier.bounds(), session) else {
        return CollisionOutcome::Clear;
    };

    let kind = session.obstacles[index].kind;
    match kind {
        ObstacleKind::Tree => {
            session.phase = GamePhase::Crashed;
            log::info!(
                "Crashed into a tree after {} ticks, final score {}",
                session.time_ticks,
                session.score
            );
            session.events.push(GameEvent::Crashed {
                score: session.score,
            });
            CollisionOutcome::Crash {
                score: session.score,
            }
        }
        ObstacleKind::Flag => {
            session.obstacles.remove(index);
            session.score += session.settings.flag_reward;
            log::debug!("Flag collected, score {}", session.score);
            session.events.push(GameEvent::FlagCollected {
                score: session.score,
            });
            CollisionOutcome::Flag {
                score: session.score,
            }
        }
    }
}

/// Drop obstacles that have scrolled off the top of the view.
///
/// Returns the number removed.
pub fn prune_obstacles(session: &mut Session) -> usize {
    let limit = -session.viewport.scale_height(session.settings.prune_margin);
    let before = session.obstacles.len();
    session.obstacles.retain(|o| o.pos.y >= limit);
    before - session.obstacles.len()
}
