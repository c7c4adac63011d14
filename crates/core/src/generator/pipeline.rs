//! Board-construction pipeline that runs the generation phases in their fixed order.

use log::{debug, info};

use crate::config::BoardConfig;
use crate::error::GenerateError;
use crate::model::GeneratedBoard;

use super::BoardDraft;
use super::carving::carve_walls;
use super::placement::{
    place_checkpoints, place_eye, place_holes, place_resource_fields, place_start_fields,
};
use super::rivers::place_rivers;

pub(super) fn generate_board(
    config: &BoardConfig,
    seed: u64,
) -> Result<GeneratedBoard, GenerateError> {
    config.validate()?;
    let mut draft = BoardDraft::new(config, seed);

    let eye = place_eye(&mut draft)?;
    place_start_fields(&mut draft, config.start_fields)?;
    place_checkpoints(&mut draft, config.checkpoints)?;
    place_holes(&mut draft, config.holes)?;
    place_resource_fields(
        &mut draft,
        config.resource_fields,
        config.max_resource_amount,
        config.exact_resource_amount,
    )?;
    debug!(
        "features placed on {}x{} board, {} cells still free",
        config.width,
        config.height,
        draft.grid.free_count()
    );

    if config.rivers {
        place_rivers(&mut draft, config.river_algorithm)?;
    }
    if config.walls {
        carve_walls(&mut draft, config.wall_strategy, config.wall_fraction);
    }

    let board = draft.into_board(config.name.clone(), eye, seed);
    info!(
        "generated {:?} seed={seed} fingerprint={:016x} walls={} rivers={} holes_skipped={}",
        board.document.name,
        board.document.fingerprint(),
        board.document.walls.len(),
        board.document.river_fields.len(),
        board.stats.holes_skipped
    );
    Ok(board)
}
