//! Exhaustive depth-first reachability over passable cells.

use crate::types::Position;

use super::Oracle;

pub(super) fn reachable(oracle: &Oracle<'_>, from: Position, to: Position) -> bool {
    if from == to {
        return true;
    }

    let grid = oracle.grid();
    let mut visited = vec![false; grid.cell_count()];
    let mut stack = vec![from];
    visited[grid.index(from)] = true;

    while let Some(current) = stack.pop() {
        for next in oracle.passable_neighbors(current) {
            if next == to {
                return true;
            }
            let index = grid.index(next);
            if !visited[index] {
                visited[index] = true;
                stack.push(next);
            }
        }
    }

    false
}

/// Number of cells reachable from `start`, `start` included.
pub(super) fn flood_fill_count(oracle: &Oracle<'_>, start: Position) -> usize {
    let grid = oracle.grid();
    let mut visited = vec![false; grid.cell_count()];
    let mut stack = vec![start];
    visited[grid.index(start)] = true;
    let mut count = 1;

    while let Some(current) = stack.pop() {
        for next in oracle.passable_neighbors(current) {
            let index = grid.index(next);
            if !visited[index] {
                visited[index] = true;
                count += 1;
                stack.push(next);
            }
        }
    }

    count
}
