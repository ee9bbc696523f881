//! SkiFree - A downhill skiing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, obstacle field, scrolling, collisions)
//! - `settings`: Data-driven game tuning
//! - `highscores`: Optional score sink for the front-end
//!
//! Rendering, menus and input devices belong to the front-end. The simulation
//! only consumes per-tick intents and the viewport size, and hands back a
//! [`sim::Snapshot`] each tick.

pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::{HighScores, ScoreSink};
pub use settings::Settings;

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (one tick per rendered frame)
    pub const TICK_HZ: u32 = 30;

    /// Design resolution all pixel sizes are authored against
    pub const DESIGN_WIDTH: f32 = 1280.0;
    pub const DESIGN_HEIGHT: f32 = 720.0;

    /// Steering angle limits (0 = straight downhill)
    pub const MIN_ANGLE: i8 = -2;
    pub const MAX_ANGLE: i8 = 2;

    /// Throttle limits and per-intent step
    pub const MIN_THROTTLE: u8 = 0;
    pub const MAX_THROTTLE: u8 = 32;
    pub const THROTTLE_STEP: u8 = 3;

    /// Lateral speed divisor: vx = angle * throttle / LATERAL_DIVISOR
    pub const LATERAL_DIVISOR: f32 = 6.0;
    /// Downhill speed lost per unit of steering deflection
    pub const TURN_DRAG: f32 = 2.0;

    /// Skier sprite size (design pixels)
    pub const SKIER_WIDTH: f32 = 30.0;
    pub const SKIER_HEIGHT: f32 = 64.0;
    /// Skier sits this far above the viewport centre (design pixels)
    pub const SKIER_LIFT: f32 = 150.0;

    /// Obstacle sprite sizes (design pixels)
    pub const TREE_WIDTH: f32 = 50.0;
    pub const TREE_HEIGHT: f32 = 64.0;
    pub const FLAG_WIDTH: f32 = 30.0;
    pub const FLAG_HEIGHT: f32 = 64.0;
}

/// Size of the play area handed over by the front-end at session start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Scale a horizontal design-pixel length to this viewport
    #[inline]
    pub fn scale_width(&self, design: f32) -> f32 {
        design * (self.width / consts::DESIGN_WIDTH)
    }

    /// Scale a vertical design-pixel length to this viewport
    #[inline]
    pub fn scale_height(&self, design: f32) -> f32 {
        design * (self.height / consts::DESIGN_HEIGHT)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(consts::DESIGN_WIDTH, consts::DESIGN_HEIGHT)
    }
}
