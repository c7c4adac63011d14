//! Wall carving: propose an edge, stage it, check every landmark, then commit or roll back.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::config::{WallStrategy, internal_edge_count};
use crate::grid::Grid;
use crate::oracle::{Landmarks, Oracle};
use crate::seed::BoardRng;
use crate::types::{Direction, Position};
use crate::walls::Edge;

use super::BoardDraft;
use super::placement::random_position;

const ATTEMPTS_PER_EDGE: usize = 4;
const MAX_ATTEMPTS: usize = 1024;
const PER_CELL_WALL_PERCENT: u32 = 20;

pub(super) fn carve_walls(draft: &mut BoardDraft, strategy: WallStrategy, wall_fraction: f64) {
    let landmarks = draft.landmarks();
    match strategy {
        WallStrategy::Budgeted => carve_budgeted(draft, &landmarks, wall_fraction),
        WallStrategy::PerCell => carve_per_cell(draft, &landmarks),
    }
    debug!(
        "{strategy:?} carving kept {} walls, rejected {}, {} attempts, {} oracle queries",
        draft.stats.walls_committed,
        draft.stats.walls_rejected,
        draft.stats.wall_attempts,
        draft.stats.oracle_queries
    );
}

fn carve_budgeted(draft: &mut BoardDraft, landmarks: &Landmarks, wall_fraction: f64) {
    let edges = internal_edge_count(draft.grid.width(), draft.grid.height());
    let budget = (edges as f64 * wall_fraction).floor() as usize;
    let target = if budget == 0 { 0 } else { draft.rng.range_inclusive(1, budget) };
    let attempt_cap = (edges * ATTEMPTS_PER_EDGE).min(MAX_ATTEMPTS);
    draft.stats.wall_budget = Some(budget);
    draft.stats.wall_target = Some(target);

    let mut tried = BTreeSet::new();
    while draft.stats.walls_committed < target && draft.stats.wall_attempts < attempt_cap {
        draft.stats.wall_attempts += 1;
        let Some(edge) = random_edge(&draft.grid, &mut draft.rng) else {
            break;
        };
        if !tried.insert(edge) {
            continue;
        }
        try_wall(draft, landmarks, edge);
    }
}

fn carve_per_cell(draft: &mut BoardDraft, landmarks: &Landmarks) {
    let positions: Vec<Position> = draft.grid.positions().collect();
    for pos in positions {
        for direction in [Direction::East, Direction::South] {
            let next = pos.step(direction);
            if !draft.grid.in_bounds(next) || !draft.rng.chance(PER_CELL_WALL_PERCENT) {
                continue;
            }
            let Some(edge) = Edge::new(pos, next) else {
                continue;
            };
            draft.stats.wall_attempts += 1;
            try_wall(draft, landmarks, edge);
        }
    }
}

/// A random cell paired with one of its in-bounds neighbors.
fn random_edge(grid: &Grid, rng: &mut BoardRng) -> Option<Edge> {
    let cell = random_position(grid, rng);
    let neighbors = grid.neighbors(cell);
    if neighbors.is_empty() {
        return None;
    }
    Edge::new(cell, rng.pick(&neighbors))
}

/// Stages `edge`, runs the feasibility test against the staged set, and keeps the wall only if
/// every landmark still reaches the hub. Returns whether the wall was committed.
fn try_wall(draft: &mut BoardDraft, landmarks: &Landmarks, edge: Edge) -> bool {
    let Some(staged) = draft.walls.stage(edge) else {
        return false;
    };
    let feasibility = Oracle::new(&draft.grid, staged.walls(), draft.hole_policy)
        .path_possible(landmarks, draft.search_mode);
    draft.stats.oracle_queries += feasibility.queries_run;

    let (a, b) = edge.endpoints();
    if feasibility.ok {
        staged.commit();
        draft.stats.walls_committed += 1;
        trace!("wall {a} - {b} committed");
    } else {
        staged.rollback();
        draft.stats.walls_rejected += 1;
        trace!("wall {a} - {b} rolled back");
    }
    feasibility.ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BoardConfig, HolePolicy, SearchMode};
    use crate::model::PositionDirection;
    use crate::types::Field;

    fn corridor_draft(search_mode: SearchMode) -> BoardDraft {
        let config = BoardConfig { width: 3, height: 1, search_mode, ..BoardConfig::default() };
        let mut draft = BoardDraft::new(&config, 9);
        let hub = Position::new(0, 0);
        draft.grid.place(hub, Field::StartField { direction: Direction::East });
        draft.start_fields.push(PositionDirection { position: hub, direction: Direction::East });
        draft.grid.place(Position::new(2, 0), Field::Checkpoint { rank: 0 });
        draft.checkpoints.push(Position::new(2, 0));
        draft
    }

    fn edge(ax: i32, ay: i32, bx: i32, by: i32) -> Edge {
        Edge::new(Position::new(ax, ay), Position::new(bx, by)).expect("test edge must be adjacent")
    }

    #[test]
    fn cutting_wall_is_rolled_back() {
        for mode in [SearchMode::Reachability, SearchMode::Heuristic] {
            let mut draft = corridor_draft(mode);
            let landmarks = draft.landmarks();
            assert!(!try_wall(&mut draft, &landmarks, edge(0, 0, 1, 0)));
            assert!(draft.walls.is_empty());
            assert!(draft.walls.committed().is_empty());
            assert_eq!(draft.stats.walls_rejected, 1);
            assert_eq!(draft.stats.oracle_queries, 1);
        }
    }

    #[test]
    fn harmless_wall_is_committed_once() {
        let config = BoardConfig { width: 2, height: 2, ..BoardConfig::default() };
        let mut draft = BoardDraft::new(&config, 1);
        let landmarks = Landmarks {
            start_fields: vec![Position::new(0, 0)],
            checkpoints: vec![Position::new(1, 1)],
            resource_fields: Vec::new(),
        };
        assert!(try_wall(&mut draft, &landmarks, edge(0, 0, 1, 0)));
        assert!(!try_wall(&mut draft, &landmarks, edge(1, 0, 0, 0)), "duplicates are never staged");
        assert_eq!(draft.walls.committed(), &[edge(0, 0, 1, 0)]);
        assert_eq!(draft.stats.walls_committed, 1);
        assert!(!try_wall(&mut draft, &landmarks, edge(0, 0, 0, 1)), "second wall would seal the hub");
    }

    #[test]
    fn random_edges_are_always_internal() {
        let grid = Grid::new(4, 3);
        let mut rng = BoardRng::seeded(3);
        for _ in 0..200 {
            let edge = random_edge(&grid, &mut rng).expect("every cell has a neighbor");
            let (a, b) = edge.endpoints();
            assert!(grid.in_bounds(a) && grid.in_bounds(b));
        }
        assert!(random_edge(&Grid::new(1, 1), &mut rng).is_none());
    }

    #[test]
    fn budget_of_zero_carves_nothing() {
        let mut draft = corridor_draft(SearchMode::Heuristic);
        let landmarks = draft.landmarks();
        carve_budgeted(&mut draft, &landmarks, 0.0);
        assert_eq!(draft.stats.wall_budget, Some(0));
        assert_eq!(draft.stats.wall_target, Some(0));
        assert_eq!(draft.stats.wall_attempts, 0);
        assert!(draft.walls.is_empty());
    }

    #[test]
    fn open_board_reaches_its_budgeted_target() {
        let config = BoardConfig { width: 6, height: 6, hole_policy: HolePolicy::Passable, ..BoardConfig::default() };
        let mut draft = BoardDraft::new(&config, 31);
        let landmarks = Landmarks { start_fields: vec![Position::new(0, 0)], ..Landmarks::default() };
        carve_budgeted(&mut draft, &landmarks, 0.25);
        let target = draft.stats.wall_target.expect("budgeted run records a target");
        assert_eq!(draft.walls.len(), target, "a lone hub cannot be disconnected from anything");
        assert_eq!(draft.stats.walls_rejected, 0);
    }

    #[test]
    fn per_cell_pass_only_proposes_east_and_south_edges() {
        let config = BoardConfig { width: 5, height: 4, ..BoardConfig::default() };
        let mut draft = BoardDraft::new(&config, 8);
        carve_per_cell(&mut draft, &Landmarks::default());
        assert_eq!(draft.walls.len(), draft.stats.wall_attempts);
        assert!(draft.walls.len() <= internal_edge_count(5, 4));
    }
}
