//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (placement order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod field;
pub mod kinematics;
pub mod scroll;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::demo_input;
pub use collision::{CollisionOutcome, Rect, prune_obstacles, resolve_collisions};
pub use field::{BandParams, Placement, generate_band, spawn_band};
pub use kinematics::{Orientation, Skier, velocity};
pub use scroll::{ScrollState, scroll_world};
pub use snapshot::{ObstacleView, Snapshot};
pub use state::{GameEvent, GamePhase, Obstacle, ObstacleKind, Session};
pub use tick::{Intent, TickInput, tick};
