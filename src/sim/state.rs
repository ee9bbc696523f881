//! Game state and core simulation types
//!
//! One [`Session`] owns everything a run needs. Nothing here is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::field::spawn_band;
use super::kinematics::Skier;
use super::scroll::ScrollState;
use crate::consts::*;
use crate::{Settings, Viewport};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Run in progress (possibly stopped at zero throttle)
    Skiing,
    /// Hit a tree; terminal
    Crashed,
    /// Player walked away
    Quit,
}

/// Something the front-end may want to react to (sound, flash, screen change)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BandGenerated { count: usize },
    FlagCollected { score: u64 },
    Crashed { score: u64 },
    Quit,
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Ends the run on contact
    Tree,
    /// Worth points, consumed on contact
    Flag,
}

impl ObstacleKind {
    /// Bounding box size in design pixels
    pub fn design_size(self) -> Vec2 {
        match self {
            ObstacleKind::Tree => Vec2::new(TREE_WIDTH, TREE_HEIGHT),
            ObstacleKind::Flag => Vec2::new(FLAG_WIDTH, FLAG_HEIGHT),
        }
    }
}

/// An obstacle on the slope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Centre position in view space
    pub pos: Vec2,
    /// Bounding box size (viewport pixels)
    pub size: Vec2,
}

impl Obstacle {
    pub fn new(id: u32, kind: ObstacleKind, pos: Vec2, viewport: &Viewport) -> Self {
        let design = kind.design_size();
        Self {
            id,
            kind,
            pos,
            size: Vec2::new(viewport.scale_width(design.x), viewport.scale_height(design.y)),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }
}

/// Complete state of one run (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Obstacle placement RNG
    pub rng: Pcg32,
    /// Play area, fixed for the life of the session
    pub viewport: Viewport,
    /// Tuning in effect
    pub settings: Settings,
    /// Player name (owned by the front-end, never interpreted here)
    pub player: String,
    pub skier: Skier,
    /// Active obstacles, in placement order
    pub obstacles: Vec<Obstacle>,
    pub scroll: ScrollState,
    pub score: u64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised since the last tick began. `new` and `restart` leave the
    /// first band's event here; read it before the first `tick`, which clears it.
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl Session {
    /// Start a new run and lay down the first band of obstacles.
    ///
    /// The first band's `BandGenerated` event is pending in `events` until the
    /// first tick.
    pub fn new(seed: u64, viewport: Viewport, settings: Settings) -> Self {
        let settings = settings.sanitized();
        let mut session = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            skier: Skier::new(&viewport, settings.initial_throttle),
            scroll: ScrollState::new(viewport.height),
            settings,
            player: String::new(),
            obstacles: Vec::new(),
            score: 0,
            phase: GamePhase::Skiing,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };

        session.start_run();
        session
    }

    /// Attach the player's name
    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = player.into();
        self
    }

    /// Reset the run in place. The RNG keeps its stream so the new slope differs.
    pub fn restart(&mut self) {
        self.skier = Skier::new(&self.viewport, self.settings.initial_throttle);
        self.obstacles.clear();
        self.scroll = ScrollState::new(self.viewport.height);
        self.score = 0;
        self.phase = GamePhase::Skiing;
        self.time_ticks = 0;
        self.events.clear();
        self.start_run();
    }

    fn start_run(&mut self) {
        let count = spawn_band(self);
        log::info!(
            "Run started: seed={}, viewport={}x{}, first band={} obstacles",
            self.seed,
            self.viewport.width,
            self.viewport.height,
            count
        );
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// True once the skier has hit a tree. Never cleared except by `restart`.
    pub fn is_terminal(&self) -> bool {
        self.phase == GamePhase::Crashed
    }

    /// True when the run has ended for any reason
    pub fn is_over(&self) -> bool {
        self.phase != GamePhase::Skiing
    }

    /// Zero throttle: the front-end shows its pause overlay
    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Skiing && self.skier.is_stopped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_initial_values() {
        let session = Session::new(1, Viewport::default(), Settings::default());
        assert_eq!(session.score, 0);
        assert_eq!(session.skier.throttle, 6);
        assert_eq!(session.skier.angle, 0);
        assert_eq!(session.scroll.distance, 0.0);
        assert_eq!(session.scroll.band_gap, 720.0);
        assert_eq!(session.phase, GamePhase::Skiing);
        assert!(!session.obstacles.is_empty());
    }

    #[test]
    fn test_first_band_starts_below_view() {
        let session = Session::new(2, Viewport::default(), Settings::default());
        assert!(session.obstacles.iter().all(|o| o.pos.y >= 720.0));
    }

    #[test]
    fn test_restart_resets_run() {
        let mut session =
            Session::new(3, Viewport::default(), Settings::default()).with_player("ada");
        session.score = 40;
        session.phase = GamePhase::Crashed;
        session.scroll.distance = 123.0;
        session.skier.throttle = 30;
        session.skier.angle = -2;

        session.restart();
        assert_eq!(session.score, 0);
        assert_eq!(session.phase, GamePhase::Skiing);
        assert_eq!(session.scroll.distance, 0.0);
        assert_eq!(session.skier.throttle, 6);
        assert_eq!(session.skier.angle, 0);
        assert_eq!(session.player, "ada");
        assert!(session.obstacles.iter().all(|o| o.pos.y >= 720.0));
    }

    #[test]
    fn test_first_band_event_pending_until_first_tick() {
        let mut session = Session::new(8, Viewport::default(), Settings::default());
        let count = session.obstacles.len();
        assert_eq!(session.events, vec![GameEvent::BandGenerated { count }]);

        crate::sim::tick(&mut session, &crate::sim::TickInput::default());
        assert!(!session
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::BandGenerated { .. })));

        session.restart();
        let count = session.obstacles.len();
        assert_eq!(session.events, vec![GameEvent::BandGenerated { count }]);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let session = Session::new(4, Viewport::default(), Settings::default());
        let mut ids: Vec<u32> = session.obstacles.iter().map(|o| o.id).collect();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    #[test]
    fn test_paused_at_zero_throttle() {
        let settings = Settings {
            initial_throttle: 0,
            ..Default::default()
        };
        let session = Session::new(5, Viewport::default(), settings);
        assert!(session.is_paused());
        assert!(!session.is_over());
    }

    #[test]
    fn test_session_serde_roundtrip_keeps_rng() {
        let session = Session::new(6, Viewport::default(), Settings::default());
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.rng, session.rng);
        assert_eq!(restored.obstacles, session.obstacles);
        assert_eq!(restored.skier, session.skier);
    }
}
