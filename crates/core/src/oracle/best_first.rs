//! Best-first search guided by straight-line distance and obstacle density.
//!
//! The estimate of a node is its step cost plus the Euclidean distance to the goal
//! plus [`OBSTACLE_PENALTY`] for every obstacle on the rasterized line between them.
//! A cell that was ever queued is never queued again.

use std::collections::BTreeSet;

use crate::types::Position;

use super::Oracle;
use super::line::bresenham_line;

pub(super) const OBSTACLE_PENALTY: f64 = 10.0;

/// Fixed-point scale applied to estimates so the frontier can be totally ordered.
const ESTIMATE_SCALE: f64 = 1_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    estimate: u64,
    sequence: u64,
    y: i32,
    x: i32,
}

pub(super) fn search(
    oracle: &Oracle<'_>,
    start: Position,
    goal: Position,
) -> Option<Vec<Position>> {
    let grid = oracle.grid();
    let mut frontier = BTreeSet::new();
    let mut queued = vec![false; grid.cell_count()];
    let mut cost = vec![0_u32; grid.cell_count()];
    let mut came_from: Vec<Option<Position>> = vec![None; grid.cell_count()];
    let mut sequence = 0_u64;

    frontier.insert(OpenNode {
        estimate: scaled(heuristic(oracle, start, goal)),
        sequence,
        y: start.y,
        x: start.x,
    });
    queued[grid.index(start)] = true;

    while let Some(node) = frontier.pop_first() {
        let current = Position::new(node.x, node.y);
        if current == goal {
            return Some(reconstruct_path(oracle, &came_from, start, goal));
        }

        let current_cost = cost[grid.index(current)];
        for next in oracle.passable_neighbors(current) {
            let index = grid.index(next);
            if queued[index] {
                continue;
            }
            queued[index] = true;
            cost[index] = current_cost + 1;
            came_from[index] = Some(current);
            sequence += 1;
            frontier.insert(OpenNode {
                estimate: scaled(f64::from(cost[index]) + heuristic(oracle, next, goal)),
                sequence,
                y: next.y,
                x: next.x,
            });
        }
    }

    None
}

fn heuristic(oracle: &Oracle<'_>, from: Position, goal: Position) -> f64 {
    let dx = f64::from(from.x - goal.x);
    let dy = f64::from(from.y - goal.y);
    let blocked_cells =
        bresenham_line(from, goal).into_iter().filter(|&cell| oracle.is_obstacle(cell)).count();
    (dx * dx + dy * dy).sqrt() + blocked_cells as f64 * OBSTACLE_PENALTY
}

fn scaled(estimate: f64) -> u64 {
    (estimate * ESTIMATE_SCALE).round() as u64
}

fn reconstruct_path(
    oracle: &Oracle<'_>,
    came_from: &[Option<Position>],
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let grid = oracle.grid();
    let mut current = goal;
    let mut path = vec![current];
    while current != start {
        let Some(previous) = came_from[grid.index(current)] else {
            break;
        };
        current = previous;
        path.push(current);
    }
    path.reverse();
    path
}
