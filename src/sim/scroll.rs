//! World scrolling
//!
//! The skier stays put on screen; the slope slides up underneath by the
//! downhill speed every tick. Travel is tracked so a fresh band of obstacles
//! can be laid down once a band gap has gone by.

use serde::{Deserialize, Serialize};

use super::field::spawn_band;
use super::state::Session;

/// Downhill travel since the last band was generated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    /// Distance travelled since the last band (reset to 0 on regeneration)
    pub distance: f32,
    /// Travel that triggers the next band (one viewport height)
    pub band_gap: f32,
}

impl ScrollState {
    pub fn new(band_gap: f32) -> Self {
        Self {
            distance: 0.0,
            band_gap,
        }
    }

    /// Add one tick of travel. Returns true when a new band is due, in which
    /// case the accumulator has already been reset.
    pub fn advance(&mut self, vy: f32) -> bool {
        self.distance += vy.max(0.0);
        if self.distance >= self.band_gap {
            self.distance = 0.0;
            true
        } else {
            false
        }
    }
}

/// Scroll the world by `vy`: regenerate if a band gap has passed, then shift
/// every active obstacle up.
///
/// Returns the number of obstacles added this tick.
pub fn scroll_world(session: &mut Session, vy: f32) -> usize {
    let added = if session.scroll.advance(vy) {
        spawn_band(session)
    } else {
        0
    };

    if vy != 0.0 {
        for obstacle in &mut session.obstacles {
            obstacle.pos.y -= vy;
        }
    }

    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameEvent;
    use crate::{Settings, Viewport};

    #[test]
    fn test_advance_accumulates_then_resets() {
        let mut scroll = ScrollState::new(100.0);
        assert!(!scroll.advance(40.0));
        assert!(!scroll.advance(40.0));
        assert_eq!(scroll.distance, 80.0);
        assert!(scroll.advance(40.0));
        assert_eq!(scroll.distance, 0.0);
    }

    #[test]
    fn test_advance_exact_gap_triggers() {
        let mut scroll = ScrollState::new(30.0);
        assert!(scroll.advance(30.0));
        assert_eq!(scroll.distance, 0.0);
    }

    #[test]
    fn test_zero_speed_never_triggers() {
        let mut scroll = ScrollState::new(10.0);
        for _ in 0..100 {
            assert!(!scroll.advance(0.0));
        }
        assert_eq!(scroll.distance, 0.0);
    }

    #[test]
    fn test_scroll_shifts_all_obstacles() {
        let mut session = Session::new(11, Viewport::default(), Settings::default());
        let before: Vec<f32> = session.obstacles.iter().map(|o| o.pos.y).collect();

        let added = scroll_world(&mut session, 12.0);
        assert_eq!(added, 0);
        for (o, y) in session.obstacles.iter().zip(before) {
            assert_eq!(o.pos.y, y - 12.0);
        }
        assert_eq!(session.scroll.distance, 12.0);
    }

    #[test]
    fn test_scroll_generates_band_at_gap() {
        let mut session = Session::new(12, Viewport::default(), Settings::default());
        let existing = session.obstacles.len();
        session.scroll.distance = 715.0;

        let added = scroll_world(&mut session, 10.0);
        assert_eq!(session.scroll.distance, 0.0);
        assert_eq!(session.obstacles.len(), existing + added);
        assert!(added > 0);
        assert!(session
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::BandGenerated { .. })));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: accumulation never decreases except by a reset to exactly 0
            #[test]
            fn prop_monotonic_between_regenerations(
                gap in 50.0f32..1000.0,
                speeds in proptest::collection::vec(0.0f32..32.0, 1..300)
            ) {
                let mut scroll = ScrollState::new(gap);
                for vy in speeds {
                    let prev = scroll.distance;
                    if scroll.advance(vy) {
                        prop_assert_eq!(scroll.distance, 0.0);
                    } else {
                        prop_assert!(scroll.distance >= prev);
                        prop_assert!(scroll.distance < gap);
                    }
                }
            }
        }
    }
}
