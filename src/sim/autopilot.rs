//! Demo mode player
//!
//! Reads the slope the same way a player would: dodge the nearest tree in
//! the skier's lane, otherwise drift toward the nearest flag, and hold a
//! cruising throttle. Emits at most one steering and one throttle intent per
//! tick so it plays under the same rules as a human.

use std::cmp::Ordering;

use super::state::{Obstacle, ObstacleKind, Session};
use super::tick::{Intent, TickInput};
use crate::consts::{MAX_ANGLE, MIN_ANGLE, THROTTLE_STEP};

/// Throttle the demo player settles at
pub const CRUISE_THROTTLE: u8 = 15;
/// How far ahead the demo player looks (design pixels)
const LOOKAHEAD: f32 = 360.0;
/// Extra clearance added around the skier's lane (design pixels)
const LANE_MARGIN: f32 = 20.0;
/// Fraction of the slope width treated as "near the wall"
const WALL_ZONE: f32 = 0.15;

fn by_distance(a: &&Obstacle, b: &&Obstacle) -> Ordering {
    a.pos.y.total_cmp(&b.pos.y)
}

/// Target steering angle for the current slope
fn desired_angle(session: &Session) -> i8 {
    let skier = &session.skier;
    let vp = &session.viewport;
    let lookahead = vp.scale_height(LOOKAHEAD);
    let margin = vp.scale_width(LANE_MARGIN);

    let ahead = || {
        session.obstacles.iter().filter(move |o| {
            let dy = o.pos.y - skier.pos.y;
            dy > -(o.size.y + skier.size.y) / 2.0 && dy < lookahead
        })
    };

    let threat = ahead()
        .filter(|o| o.kind == ObstacleKind::Tree)
        .filter(|o| (o.pos.x - skier.pos.x).abs() < (o.size.x + skier.size.x) / 2.0 + margin)
        .min_by(by_distance);

    if let Some(tree) = threat {
        let mut go_left = tree.pos.x >= skier.pos.x;
        if go_left && skier.pos.x < vp.width * WALL_ZONE {
            go_left = false;
        } else if !go_left && skier.pos.x > vp.width * (1.0 - WALL_ZONE) {
            go_left = true;
        }
        return if go_left { MIN_ANGLE } else { MAX_ANGLE };
    }

    let flag = ahead()
        .filter(|o| o.kind == ObstacleKind::Flag)
        .min_by(by_distance);

    match flag {
        Some(flag) => {
            let dx = flag.pos.x - skier.pos.x;
            if dx.abs() < skier.size.x / 2.0 {
                0
            } else if dx < 0.0 {
                -1
            } else {
                1
            }
        }
        None => 0,
    }
}

/// Intents for one tick of demo play
pub fn demo_input(session: &Session) -> TickInput {
    let mut input = TickInput::default();
    if session.is_over() {
        return input;
    }

    let angle = session.skier.angle;
    match desired_angle(session).cmp(&angle) {
        Ordering::Less => input.push(Intent::TurnLeft),
        Ordering::Greater => input.push(Intent::TurnRight),
        Ordering::Equal => {}
    }

    let throttle = session.skier.throttle;
    if throttle + THROTTLE_STEP <= CRUISE_THROTTLE {
        input.push(Intent::Accelerate);
    } else if throttle > CRUISE_THROTTLE {
        input.push(Intent::Decelerate);
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;
    use crate::sim::tick::tick;
    use crate::{Settings, Viewport};
    use glam::Vec2;

    fn empty_session() -> Session {
        let mut session = Session::new(31, Viewport::default(), Settings::default());
        session.obstacles.clear();
        session
    }

    fn place(session: &mut Session, kind: ObstacleKind, pos: Vec2) {
        let id = session.next_entity_id();
        session.obstacles.push(Obstacle::new(id, kind, pos, &session.viewport));
    }

    #[test]
    fn test_clear_slope_speeds_up_to_cruise() {
        let mut session = empty_session();
        assert_eq!(demo_input(&session).intents, vec![Intent::Accelerate]);
        for _ in 0..10 {
            let input = demo_input(&session);
            tick(&mut session, &input);
            session.obstacles.clear();
        }
        assert_eq!(session.skier.throttle, CRUISE_THROTTLE);
        assert!(demo_input(&session).is_empty());
    }

    #[test]
    fn test_dodges_tree_in_lane() {
        let mut session = empty_session();
        let at = session.skier.pos + Vec2::new(5.0, 120.0);
        place(&mut session, ObstacleKind::Tree, at);
        let input = demo_input(&session);
        assert!(input.intents.contains(&Intent::TurnLeft));
    }

    #[test]
    fn test_dodges_away_from_wall() {
        let mut session = empty_session();
        session.skier.pos.x = 40.0;
        let at = session.skier.pos + Vec2::new(5.0, 120.0);
        place(&mut session, ObstacleKind::Tree, at);
        let input = demo_input(&session);
        assert!(input.intents.contains(&Intent::TurnRight));
    }

    #[test]
    fn test_heads_for_flag() {
        let mut session = empty_session();
        let at = session.skier.pos + Vec2::new(200.0, 200.0);
        place(&mut session, ObstacleKind::Flag, at);
        let input = demo_input(&session);
        assert!(input.intents.contains(&Intent::TurnRight));
    }

    #[test]
    fn test_ignores_obstacles_behind() {
        let mut session = empty_session();
        let at = session.skier.pos - Vec2::new(0.0, 150.0);
        place(&mut session, ObstacleKind::Tree, at);
        let input = demo_input(&session);
        assert!(!input.intents.contains(&Intent::TurnLeft));
        assert!(!input.intents.contains(&Intent::TurnRight));
    }

    #[test]
    fn test_no_input_after_run_ends() {
        let mut session = empty_session();
        session.phase = GamePhase::Crashed;
        assert!(demo_input(&session).is_empty());
    }

    #[test]
    fn test_demo_run_is_reproducible() {
        let play = || {
            let mut session = Session::new(77, Viewport::default(), Settings::default());
            for _ in 0..600 {
                let input = demo_input(&session);
                tick(&mut session, &input);
            }
            (session.score, session.time_ticks, session.phase)
        };
        let first = play();
        assert_eq!(first, play());
        assert_eq!(first.0 % 10, 0);
    }
}
