//! Obstacle field generation
//!
//! Each band is a viewport-sized strip just below the view. Candidates are
//! snapped to a coarse grid and rejection-sampled so no two obstacles in the
//! same band sit closer than the placement buffer on both axes at once.
//! A crowded band simply comes out smaller.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, Obstacle, ObstacleKind, Session};
use crate::{Settings, Viewport};

/// Inputs for one band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandParams {
    /// Obstacles wanted (never more than the grid has slots)
    pub count: usize,
    /// Grid columns and rows
    pub grid_cells: u32,
    /// Minimum separation (viewport pixels, both axes)
    pub buffer: f32,
    /// Total candidate draws = count * attempts_per_slot
    pub attempts_per_slot: u32,
    /// Vertical offset of the band's top edge below the view
    pub offset: f32,
    pub width: f32,
    pub height: f32,
}

impl BandParams {
    /// Band parameters for a viewport, starting `offset` below the view
    pub fn new(settings: &Settings, viewport: &Viewport, offset: f32) -> Self {
        let grid_cells = settings.grid_cells.max(2);
        let wanted = (viewport.width / settings.obstacle_spacing) as usize;
        Self {
            count: wanted.min(grid_slots(grid_cells)),
            grid_cells,
            buffer: viewport.scale_width(settings.placement_buffer),
            attempts_per_slot: settings.placement_attempts.max(1),
            offset,
            width: viewport.width,
            height: viewport.height,
        }
    }
}

/// An accepted obstacle position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub kind: ObstacleKind,
    pub pos: Vec2,
}

/// Distinct candidate positions on a grid: columns 1..cells, rows 0..=cells
#[inline]
pub fn grid_slots(cells: u32) -> usize {
    let cells = cells as usize;
    cells.saturating_sub(1).saturating_mul(cells.saturating_add(1))
}

/// True when `a` and `b` are closer than `buffer` on both axes
#[inline]
pub fn too_close(a: Vec2, b: Vec2, buffer: f32) -> bool {
    (a.x - b.x).abs() < buffer && (a.y - b.y).abs() < buffer
}

/// Draw a grid-snapped candidate inside the band.
///
/// Columns 1..cells keep obstacles off the side walls; rows span 0..=cells.
fn sample_candidate<R: Rng + ?Sized>(rng: &mut R, params: &BandParams) -> Vec2 {
    let cells = params.grid_cells;
    let col = rng.random_range(1..cells);
    let row = rng.random_range(0..=cells);
    Vec2::new(
        col as f32 * (params.width / cells as f32),
        row as f32 * (params.height / cells as f32) + params.offset,
    )
}

/// Generate one band of placements
pub fn generate_band<R: Rng + ?Sized>(rng: &mut R, params: &BandParams) -> Vec<Placement> {
    let mut placements: Vec<Placement> =
        Vec::with_capacity(params.count.min(grid_slots(params.grid_cells)));
    let budget = params.count.saturating_mul(params.attempts_per_slot as usize);

    for _ in 0..budget {
        if placements.len() >= params.count {
            break;
        }

        let candidate = sample_candidate(rng, params);
        if placements
            .iter()
            .any(|p| too_close(p.pos, candidate, params.buffer))
        {
            continue;
        }

        let kind = if rng.random_bool(0.5) {
            ObstacleKind::Tree
        } else {
            ObstacleKind::Flag
        };
        placements.push(Placement {
            kind,
            pos: candidate,
        });
    }

    placements
}

/// Generate the next band below the view and append it to the session.
///
/// Returns the number of obstacles added.
pub fn spawn_band(session: &mut Session) -> usize {
    let params = BandParams::new(&session.settings, &session.viewport, session.scroll.band_gap);
    let placements = generate_band(&mut session.rng, &params);

    for placement in &placements {
        let id = session.next_entity_id();
        session.obstacles.push(Obstacle::new(
            id,
            placement.kind,
            placement.pos,
            &session.viewport,
        ));
    }

    let count = placements.len();
    if count < params.count {
        log::debug!("Band saturated: placed {} of {} obstacles", count, params.count);
    }
    log::info!(
        "Band generated: {} obstacles ({} active)",
        count,
        session.obstacles.len()
    );
    session.events.push(GameEvent::BandGenerated { count });
    count
}
