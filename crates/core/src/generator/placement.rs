//! Rejection-sampling placement of the eye and the mandatory board features.

use log::debug;

use crate::config::HolePolicy;
use crate::error::GenerateError;
use crate::grid::Grid;
use crate::model::{PositionDirection, ResourceEntry};
use crate::seed::BoardRng;
use crate::types::{Field, Position};

use super::BoardDraft;

const MIN_PLACEMENT_DRAWS: usize = 1024;
const PLACEMENT_DRAWS_PER_CELL: usize = 64;
const HOLE_CANDIDATES: usize = 64;

pub(super) fn placement_cap(grid: &Grid) -> usize {
    MIN_PLACEMENT_DRAWS.max(PLACEMENT_DRAWS_PER_CELL * grid.cell_count())
}

/// Uniform cell, occupied or not. Wall endpoints use this since walls sit on edges.
pub(super) fn random_position(grid: &Grid, rng: &mut BoardRng) -> Position {
    let x = rng.below(grid.width());
    let y = rng.below(grid.height());
    Position::new(x as i32, y as i32)
}

pub(super) fn random_free_position(
    draft: &mut BoardDraft,
    feature: &'static str,
) -> Result<Position, GenerateError> {
    random_free_position_where(draft, feature, |_, _| true)
}

fn random_free_position_where(
    draft: &mut BoardDraft,
    feature: &'static str,
    accept: impl Fn(&BoardDraft, Position) -> bool,
) -> Result<Position, GenerateError> {
    let attempts = placement_cap(&draft.grid);
    for _ in 0..attempts {
        let candidate = random_position(&draft.grid, &mut draft.rng);
        if draft.grid.is_free(candidate) && accept(&*draft, candidate) {
            return Ok(candidate);
        }
    }
    Err(GenerateError::PlacementExhausted { feature, attempts })
}

/// True when `candidate` could become an obstacle without cutting the open cells apart.
fn keeps_open_cells_connected(draft: &BoardDraft, candidate: Position) -> bool {
    draft.oracle().assuming_obstacle(candidate).open_cells_connected()
}

pub(super) fn place_eye(draft: &mut BoardDraft) -> Result<PositionDirection, GenerateError> {
    let position = random_free_position_where(draft, "eye", keeps_open_cells_connected)?;
    let direction = draft.rng.direction();
    draft.grid.place(position, Field::Eye { direction });
    debug!("eye placed at {position} facing {direction:?}");
    Ok(PositionDirection { position, direction })
}

pub(super) fn place_start_fields(
    draft: &mut BoardDraft,
    count: usize,
) -> Result<(), GenerateError> {
    for _ in 0..count {
        let position = random_free_position(draft, "start field")?;
        let direction = draft.rng.direction();
        draft.grid.place(position, Field::StartField { direction });
        draft.start_fields.push(PositionDirection { position, direction });
    }
    Ok(())
}

pub(super) fn place_checkpoints(draft: &mut BoardDraft, count: usize) -> Result<(), GenerateError> {
    for rank in 0..count {
        let position = random_free_position(draft, "checkpoint")?;
        draft.grid.place(position, Field::Checkpoint { rank });
        draft.checkpoints.push(position);
    }
    Ok(())
}

pub(super) fn place_holes(draft: &mut BoardDraft, count: usize) -> Result<(), GenerateError> {
    match draft.hole_policy {
        HolePolicy::Passable => {
            for _ in 0..count {
                let position = random_free_position(draft, "hole")?;
                place_hole(draft, position);
            }
        }
        HolePolicy::Blocking => {
            for _ in 0..count {
                match gated_hole_candidate(draft) {
                    Some(position) => place_hole(draft, position),
                    None => {
                        draft.stats.holes_skipped += 1;
                        debug!("no hole candidate kept the board connected, skipping");
                    }
                }
            }
        }
    }
    Ok(())
}

fn gated_hole_candidate(draft: &mut BoardDraft) -> Option<Position> {
    for _ in 0..HOLE_CANDIDATES {
        let candidate = random_position(&draft.grid, &mut draft.rng);
        if draft.grid.is_free(candidate) && keeps_open_cells_connected(draft, candidate) {
            return Some(candidate);
        }
    }
    None
}

fn place_hole(draft: &mut BoardDraft, position: Position) {
    draft.grid.place(position, Field::Hole);
    draft.holes.push(position);
}

pub(super) fn place_resource_fields(
    draft: &mut BoardDraft,
    count: usize,
    max_amount: u32,
    exact_amount: bool,
) -> Result<(), GenerateError> {
    for _ in 0..count {
        let position = random_free_position(draft, "resource field")?;
        let amount = if exact_amount {
            max_amount
        } else {
            draft.rng.range_inclusive(0, max_amount as usize) as u32
        };
        draft.grid.place(position, Field::ResourceField { amount });
        draft.resource_fields.push(ResourceEntry { position, amount });
    }
    Ok(())
}
