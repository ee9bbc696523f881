//! Read-only view of a session for the front-end

use glam::Vec2;
use serde::Serialize;

use super::kinematics::Orientation;
use super::state::{GamePhase, ObstacleKind, Session};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub player: String,
    pub tick: u64,
    pub skier_pos: Vec2,
    pub skier_size: Vec2,
    pub angle: i8,
    pub orientation: Orientation,
    pub velocity: Vec2,
    pub obstacles: Vec<ObstacleView>,
    pub score: u64,
    pub terminal: bool,
    pub paused: bool,
    pub phase: GamePhase,
}

impl Session {
    pub fn snapshot(&self) -> Snapshot {
        let orientation = if self.is_terminal() {
            Orientation::Crashed
        } else {
            self.skier.orientation()
        };

        Snapshot {
            player: self.player.clone(),
            tick: self.time_ticks,
            skier_pos: self.skier.pos,
            skier_size: self.skier.size,
            angle: self.skier.angle,
            orientation,
            velocity: self.skier.velocity(),
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    kind: o.kind,
                    pos: o.pos,
                    size: o.size,
                })
                .collect(),
            score: self.score,
            terminal: self.is_terminal(),
            paused: self.is_paused(),
            phase: self.phase,
        }
    }
}
