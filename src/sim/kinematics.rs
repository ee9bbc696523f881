//! Skier kinematics
//!
//! Steering angle and throttle are the only inputs; velocity is derived from
//! them every time it is asked for, so it can never go stale.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::Viewport;
use crate::consts::*;

/// Sprite pose for the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Left2,
    Left1,
    Down,
    Right1,
    Right2,
    Crashed,
}

impl Orientation {
    /// Pose for a steering angle in [-2, 2]
    pub fn from_angle(angle: i8) -> Self {
        match angle {
            i8::MIN..=-2 => Orientation::Left2,
            -1 => Orientation::Left1,
            0 => Orientation::Down,
            1 => Orientation::Right1,
            _ => Orientation::Right2,
        }
    }
}

/// Velocity for a steering angle and throttle.
///
/// vx = angle * throttle / 6, vy = max(0, throttle - 2|angle|).
/// Inputs are clamped first so out-of-range callers still get a legal answer.
#[inline]
pub fn velocity(angle: i8, throttle: u8) -> Vec2 {
    let a = angle.clamp(MIN_ANGLE, MAX_ANGLE) as f32;
    let t = throttle.min(MAX_THROTTLE) as f32;
    let vx = a * t / LATERAL_DIVISOR;
    let vy = (t - a.abs() * TURN_DRAG).max(0.0);
    Vec2::new(vx, vy)
}

/// Clamp a skier centre so a box of `half_width` stays inside [0, width]
#[inline]
pub fn clamp_to_slope(x: f32, half_width: f32, width: f32) -> f32 {
    if half_width * 2.0 >= width {
        return width / 2.0;
    }
    x.clamp(half_width, width - half_width)
}

/// The player's skier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skier {
    /// Centre position in view space (y never changes, the world scrolls)
    pub pos: Vec2,
    /// Steering angle, 0 = straight downhill, negative = left
    pub angle: i8,
    /// Downhill throttle in [0, 32]
    pub throttle: u8,
    /// Bounding box size (viewport pixels)
    pub size: Vec2,
}

impl Skier {
    /// New skier parked at the top-centre start position
    pub fn new(viewport: &Viewport, throttle: u8) -> Self {
        Self {
            pos: Vec2::new(
                viewport.width / 2.0,
                viewport.height / 2.0 - viewport.scale_height(SKIER_LIFT),
            ),
            angle: 0,
            throttle: throttle.min(MAX_THROTTLE),
            size: Vec2::new(
                viewport.scale_width(SKIER_WIDTH),
                viewport.scale_height(SKIER_HEIGHT),
            ),
        }
    }

    /// Current velocity (pixels per tick)
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        velocity(self.angle, self.throttle)
    }

    /// Steer by one notch (negative = left)
    pub fn turn(&mut self, direction: i8) {
        self.angle = self
            .angle
            .saturating_add(direction.signum())
            .clamp(MIN_ANGLE, MAX_ANGLE);
    }

    pub fn speed_up(&mut self) {
        self.throttle = self.throttle.saturating_add(THROTTLE_STEP).min(MAX_THROTTLE);
    }

    pub fn slow_down(&mut self) {
        self.throttle = self.throttle.saturating_sub(THROTTLE_STEP).max(MIN_THROTTLE);
    }

    /// A stopped skier is shown as paused by the front-end
    pub fn is_stopped(&self) -> bool {
        self.velocity().y <= 0.0
    }

    /// Apply one tick of lateral motion, clamped at the slope edges.
    ///
    /// Only a skier that is moving downhill drifts sideways.
    pub fn step(&mut self, viewport: &Viewport) {
        let vel = self.velocity();
        if vel.y > 0.0 {
            self.pos.x = clamp_to_slope(self.pos.x + vel.x, self.size.x / 2.0, viewport.width);
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_angle(self.angle)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }
}
