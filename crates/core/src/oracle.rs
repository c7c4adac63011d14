//! Connectivity oracle: path existence between cells given the grid and a wall set.
//!
//! The oracle never mutates its inputs. Two searches are available:
//! an exhaustive depth-first reachability search, and a best-first search whose
//! estimate adds a penalty for obstacles on the straight line to the goal.
//! [`Oracle::path_possible`] runs the landmark checks the wall carver relies on.

mod best_first;
mod line;
mod reachability;

use crate::config::{HolePolicy, SearchMode};
use crate::grid::Grid;
use crate::types::{Field, Position};
use crate::walls::WallSet;

pub use line::bresenham_line;

/// Positions that must stay reachable from the hub (the first start field).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Landmarks {
    pub start_fields: Vec<Position>,
    pub checkpoints: Vec<Position>,
    pub resource_fields: Vec<Position>,
}

impl Landmarks {
    pub fn hub(&self) -> Option<Position> {
        self.start_fields.first().copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feasibility {
    pub ok: bool,
    /// Searches performed, including the failing one.
    pub queries_run: usize,
}

#[derive(Clone, Copy)]
pub struct Oracle<'a> {
    grid: &'a Grid,
    walls: &'a WallSet,
    hole_policy: HolePolicy,
    assumed_obstacle: Option<Position>,
}

impl<'a> Oracle<'a> {
    pub fn new(grid: &'a Grid, walls: &'a WallSet, hole_policy: HolePolicy) -> Self {
        Self { grid, walls, hole_policy, assumed_obstacle: None }
    }

    /// Treats `pos` as blocked without touching the grid. Used to vet a candidate
    /// obstacle before it is placed.
    pub fn assuming_obstacle(self, pos: Position) -> Self {
        Self { assumed_obstacle: Some(pos), ..self }
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    pub fn is_obstacle(&self, pos: Position) -> bool {
        if self.assumed_obstacle == Some(pos) {
            return true;
        }
        match self.grid.field_at(pos) {
            Field::Eye { .. } => true,
            Field::Hole => self.hole_policy == HolePolicy::Blocking,
            Field::Grass
            | Field::StartField { .. }
            | Field::Checkpoint { .. }
            | Field::ResourceField { .. }
            | Field::River { .. } => false,
        }
    }

    pub fn is_wall_between(&self, a: Position, b: Position) -> bool {
        self.walls.is_wall_between(a, b)
    }

    /// Neighbors that can be entered from `pos`: in bounds, not an obstacle, no wall between.
    pub fn passable_neighbors(&self, pos: Position) -> Vec<Position> {
        self.grid
            .neighbors(pos)
            .into_iter()
            .filter(|&next| !self.is_obstacle(next) && !self.is_wall_between(pos, next))
            .collect()
    }

    pub fn reachable(&self, from: Position, to: Position) -> bool {
        reachability::reachable(self, from, to)
    }

    /// Best-first route from `from` to `to`, both ends included.
    pub fn heuristic_path(&self, from: Position, to: Position) -> Option<Vec<Position>> {
        best_first::search(self, from, to)
    }

    pub fn connected(&self, from: Position, to: Position, mode: SearchMode) -> bool {
        match mode {
            SearchMode::Reachability => self.reachable(from, to),
            SearchMode::Heuristic => self.heuristic_path(from, to).is_some(),
        }
    }

    /// True when every non-obstacle cell can reach every other one.
    pub fn open_cells_connected(&self) -> bool {
        let open: Vec<Position> =
            self.grid.positions().filter(|&pos| !self.is_obstacle(pos)).collect();
        let Some(&first) = open.first() else {
            return true;
        };
        reachability::flood_fill_count(self, first) == open.len()
    }

    /// Hub to every other start field, every resource field to the hub, every
    /// checkpoint to the hub. Stops at the first unreachable pair.
    pub fn path_possible(&self, landmarks: &Landmarks, mode: SearchMode) -> Feasibility {
        let Some(hub) = landmarks.hub() else {
            return Feasibility { ok: true, queries_run: 0 };
        };

        let queries = landmarks.start_fields[1..]
            .iter()
            .map(|&start| (hub, start))
            .chain(landmarks.resource_fields.iter().map(|&resource| (resource, hub)))
            .chain(landmarks.checkpoints.iter().map(|&checkpoint| (checkpoint, hub)));

        let mut queries_run = 0;
        for (from, to) in queries {
            queries_run += 1;
            if !self.connected(from, to, mode) {
                return Feasibility { ok: false, queries_run };
            }
        }
        Feasibility { ok: true, queries_run }
    }
}
