//! Canonical wall edges and the wall set with staged insertion.
//!
//! A candidate wall is inserted through [`WallSet::stage`], validated while staged,
//! then either committed or rolled back. Dropping an uncommitted [`StagedWall`]
//! removes the edge again, so a failed validation can never leave it behind.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Position;

/// A wall between two orthogonally adjacent cells, stored with its endpoints sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Position; 2]", into = "[Position; 2]")]
pub struct Edge {
    a: Position,
    b: Position,
}

impl Edge {
    /// Returns `None` unless `first` and `second` are orthogonal neighbors.
    pub fn new(first: Position, second: Position) -> Option<Self> {
        if first.manhattan(second) != 1 {
            return None;
        }
        let (a, b) = if first <= second { (first, second) } else { (second, first) };
        Some(Self { a, b })
    }

    pub fn endpoints(self) -> (Position, Position) {
        (self.a, self.b)
    }
}

impl TryFrom<[Position; 2]> for Edge {
    type Error = NotAdjacent;

    fn try_from([first, second]: [Position; 2]) -> Result<Self, Self::Error> {
        Self::new(first, second).ok_or(NotAdjacent { first, second })
    }
}

impl From<Edge> for [Position; 2] {
    fn from(edge: Edge) -> Self {
        [edge.a, edge.b]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("wall endpoints {first} and {second} are not adjacent")]
pub struct NotAdjacent {
    pub first: Position,
    pub second: Position,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WallSet {
    edges: BTreeSet<Edge>,
    committed: Vec<Edge>,
}

impl WallSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, edge: Edge) -> bool {
        self.edges.contains(&edge)
    }

    pub fn is_wall_between(&self, a: Position, b: Position) -> bool {
        Edge::new(a, b).is_some_and(|edge| self.contains(edge))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Committed walls in commit order.
    pub fn committed(&self) -> &[Edge] {
        &self.committed
    }

    /// Inserts an already validated wall. Returns `false` for duplicates.
    pub fn insert(&mut self, edge: Edge) -> bool {
        if !self.edges.insert(edge) {
            return false;
        }
        self.committed.push(edge);
        true
    }

    /// Tentatively inserts `edge`. Returns `None` when the edge is already present.
    pub fn stage(&mut self, edge: Edge) -> Option<StagedWall<'_>> {
        if !self.edges.insert(edge) {
            return None;
        }
        Some(StagedWall { walls: self, edge, settled: false })
    }
}

#[must_use = "a staged wall is rolled back unless committed"]
pub struct StagedWall<'a> {
    walls: &'a mut WallSet,
    edge: Edge,
    settled: bool,
}

impl StagedWall<'_> {
    /// The wall set including the staged edge.
    pub fn walls(&self) -> &WallSet {
        &*self.walls
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn commit(mut self) {
        self.walls.committed.push(self.edge);
        self.settled = true;
    }

    pub fn rollback(self) {}
}

impl Drop for StagedWall<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.walls.edges.remove(&self.edge);
        }
    }
}
