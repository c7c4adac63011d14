//! River tiles laid on the grass left over after feature placement.

use log::debug;

use crate::config::RiverAlgorithm;
use crate::error::GenerateError;
use crate::model::PositionDirection;
use crate::seed::BoardRng;
use crate::types::{Direction, Field, Position};

use super::BoardDraft;
use super::placement::random_free_position;

const INDEPENDENT_DIVISOR: usize = 3;
const CONNECTED_DIVISOR: usize = 5;
const MIN_RUN_LENGTH: usize = 2;

pub(super) fn place_rivers(
    draft: &mut BoardDraft,
    algorithm: RiverAlgorithm,
) -> Result<(), GenerateError> {
    let divisor = match algorithm {
        RiverAlgorithm::Independent => INDEPENDENT_DIVISOR,
        RiverAlgorithm::Connected => CONNECTED_DIVISOR,
    };
    let target = river_target(&mut draft.rng, draft.grid.free_count(), divisor);
    match algorithm {
        RiverAlgorithm::Independent => place_independent(draft, target)?,
        RiverAlgorithm::Connected => place_connected(draft, target)?,
    }
    debug!(
        "placed {} of {target} river tiles in {} runs ({algorithm:?})",
        draft.stats.river_tiles, draft.stats.river_runs
    );
    Ok(())
}

fn river_target(rng: &mut BoardRng, free: usize, divisor: usize) -> usize {
    if free == 0 {
        return 0;
    }
    let max = free / divisor;
    let target = if max <= 1 { 1 } else { rng.range_inclusive(1, max) };
    target.min(free)
}

fn place_independent(draft: &mut BoardDraft, target: usize) -> Result<(), GenerateError> {
    for _ in 0..target {
        let position = random_free_position(draft, "river")?;
        let direction = draft.rng.direction();
        place_river(draft, position, direction);
    }
    Ok(())
}

fn place_connected(draft: &mut BoardDraft, target: usize) -> Result<(), GenerateError> {
    let longest_run = MIN_RUN_LENGTH.max(draft.grid.width().min(draft.grid.height()));
    let mut placed = 0;

    while placed < target && draft.grid.free_count() > 0 {
        let mut position = random_free_position(draft, "river")?;
        let mut direction = draft.rng.direction();
        let run_length = draft.rng.range_inclusive(MIN_RUN_LENGTH, longest_run);
        place_river(draft, position, direction);
        draft.stats.river_runs += 1;
        placed += 1;

        let mut run_tiles = 1;
        while run_tiles < run_length && placed < target {
            let next = position.step(direction);
            if !draft.grid.in_bounds(next) || !draft.grid.is_free(next) {
                break;
            }
            let next_direction = continue_flow(&mut draft.rng, direction);
            place_river(draft, next, next_direction);
            position = next;
            direction = next_direction;
            run_tiles += 1;
            placed += 1;
        }
    }
    Ok(())
}

/// Re-rolls the flow for the next tile. A roll straight back upstream turns sideways instead.
fn continue_flow(rng: &mut BoardRng, current: Direction) -> Direction {
    let rolled = rng.direction();
    if rolled == current.reverse() {
        rng.pick(&current.perpendicular())
    } else {
        rolled
    }
}

fn place_river(draft: &mut BoardDraft, position: Position, direction: Direction) {
    draft.grid.place(position, Field::River { direction });
    draft.river_fields.push(PositionDirection { position, direction });
    draft.stats.river_tiles += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;

    fn empty_draft(width: usize, height: usize, seed: u64) -> BoardDraft {
        let config = BoardConfig { width, height, ..BoardConfig::default() };
        BoardDraft::new(&config, seed)
    }

    #[test]
    fn target_is_zero_only_without_free_cells() {
        let mut rng = BoardRng::seeded(1);
        assert_eq!(river_target(&mut rng, 0, 3), 0);
        assert_eq!(river_target(&mut rng, 1, 3), 1);
        assert_eq!(river_target(&mut rng, 4, 5), 1);
        for _ in 0..50 {
            let target = river_target(&mut rng, 30, 3);
            assert!((1..=10).contains(&target));
        }
    }

    #[test]
    fn flow_never_turns_straight_back() {
        let mut rng = BoardRng::seeded(77);
        for current in Direction::ALL {
            for _ in 0..100 {
                assert_ne!(continue_flow(&mut rng, current), current.reverse());
            }
        }
    }

    #[test]
    fn connected_tiles_sit_downstream_of_their_predecessor() {
        for seed in 0..20 {
            let mut draft = empty_draft(9, 9, seed);
            place_connected(&mut draft, 16).expect("board is empty");
            assert_eq!(draft.river_fields.len(), 16);

            let breaks = draft
                .river_fields
                .windows(2)
                .filter(|pair| pair[0].position.step(pair[0].direction) != pair[1].position)
                .count();
            assert!(breaks < draft.stats.river_runs, "seed={seed}");
        }
    }

    #[test]
    fn rivers_stop_when_the_grass_runs_out() {
        let mut draft = empty_draft(2, 2, 5);
        draft.grid.place(Position::new(0, 0), Field::Hole);
        place_connected(&mut draft, 10).expect("free cells remain until the last one is used");
        assert_eq!(draft.river_fields.len(), 3);
        assert_eq!(draft.grid.free_count(), 0);
    }

    #[test]
    fn independent_rivers_cover_exactly_the_target() {
        let mut draft = empty_draft(4, 4, 11);
        place_independent(&mut draft, 5).expect("board is empty");
        assert_eq!(draft.grid.count_matching(Field::is_river), 5);
        assert_eq!(draft.stats.river_runs, 0);
    }
}
