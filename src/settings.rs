//! Game tuning
//!
//! Loaded from a JSON file by the front-end; every field falls back to the
//! classic game's value when missing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_THROTTLE, TICK_HZ};

/// Smallest accepted obstacle spacing (viewport pixels per slot)
pub const MIN_OBSTACLE_SPACING: f32 = 1.0;
/// Largest accepted candidate budget per slot
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation ticks per second (frame pacing is the front-end's job)
    pub tick_hz: u32,

    // === Obstacle field ===
    /// Columns and rows of the virtual placement grid
    pub grid_cells: u32,
    /// Viewport pixels per obstacle slot (n = viewport_width / spacing)
    pub obstacle_spacing: f32,
    /// Minimum separation between obstacles in one band (design pixels)
    pub placement_buffer: f32,
    /// Candidate draws allowed per slot before the band gives up
    pub placement_attempts: u32,

    // === Scoring ===
    /// Points for each flag collected
    pub flag_reward: u64,

    // === Skier ===
    /// Throttle at session start
    pub initial_throttle: u8,

    // === Cleanup ===
    /// Obstacles whose centre scrolls above -margin are dropped (design pixels)
    pub prune_margin: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_hz: TICK_HZ,

            grid_cells: 30,
            obstacle_spacing: 70.0,
            placement_buffer: 150.0,
            placement_attempts: 1,

            flag_reward: 10,

            initial_throttle: 6,

            prune_margin: 32.0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Pull out-of-range values back into something playable
    pub fn sanitized(mut self) -> Self {
        self.tick_hz = self.tick_hz.max(1);
        self.grid_cells = self.grid_cells.max(2);
        if self.obstacle_spacing.is_nan() || self.obstacle_spacing <= 0.0 {
            self.obstacle_spacing = Self::default().obstacle_spacing;
        }
        self.obstacle_spacing = self.obstacle_spacing.max(MIN_OBSTACLE_SPACING);
        self.placement_buffer = self.placement_buffer.max(0.0);
        self.placement_attempts = self.placement_attempts.clamp(1, MAX_PLACEMENT_ATTEMPTS);
        self.initial_throttle = self.initial_throttle.min(MAX_THROTTLE);
        self.prune_margin = self.prune_margin.max(0.0);
        self
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read {}: {}, using defaults", path.display(), err);
                Self::default()
            }
        }
    }

    /// Seconds per simulation tick
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.tick_hz as f32
    }
}
