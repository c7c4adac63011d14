//! Public data models for finished boards: the exported document and run statistics.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::grid::Grid;
use crate::oracle::Landmarks;
use crate::types::{Direction, Position};
use crate::walls::Edge;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionDirection {
    pub position: Position,
    pub direction: Direction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub position: Position,
    pub amount: u32,
}

/// The serializable board description handed to validators and renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDocument {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub eye: PositionDirection,
    pub start_fields: Vec<PositionDirection>,
    /// Array index is the intended visiting order.
    #[serde(rename = "checkPoints")]
    pub checkpoints: Vec<Position>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub holes: Vec<Position>,
    #[serde(rename = "lembas", default, skip_serializing_if = "Vec::is_empty")]
    pub resource_fields: Vec<ResourceEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub river_fields: Vec<PositionDirection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub walls: Vec<Edge>,
}

impl BoardDocument {
    /// Positions the connectivity invariant is checked against, hub first.
    pub fn landmarks(&self) -> Landmarks {
        Landmarks {
            start_fields: self.start_fields.iter().map(|start| start.position).collect(),
            checkpoints: self.checkpoints.clone(),
            resource_fields: self
                .resource_fields
                .iter()
                .map(|resource| resource.position)
                .collect(),
        }
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.name.len() as u32).to_le_bytes());
        bytes.extend(self.name.as_bytes());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        push_position_direction(&mut bytes, self.eye);

        bytes.extend((self.start_fields.len() as u32).to_le_bytes());
        for &start in &self.start_fields {
            push_position_direction(&mut bytes, start);
        }
        bytes.extend((self.checkpoints.len() as u32).to_le_bytes());
        for &checkpoint in &self.checkpoints {
            push_position(&mut bytes, checkpoint);
        }
        bytes.extend((self.holes.len() as u32).to_le_bytes());
        for &hole in &self.holes {
            push_position(&mut bytes, hole);
        }
        bytes.extend((self.resource_fields.len() as u32).to_le_bytes());
        for resource in &self.resource_fields {
            push_position(&mut bytes, resource.position);
            bytes.extend(resource.amount.to_le_bytes());
        }
        bytes.extend((self.river_fields.len() as u32).to_le_bytes());
        for &river in &self.river_fields {
            push_position_direction(&mut bytes, river);
        }
        bytes.extend((self.walls.len() as u32).to_le_bytes());
        for wall in &self.walls {
            let (a, b) = wall.endpoints();
            push_position(&mut bytes, a);
            push_position(&mut bytes, b);
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }
}

fn push_position(bytes: &mut Vec<u8>, pos: Position) {
    bytes.extend(pos.x.to_le_bytes());
    bytes.extend(pos.y.to_le_bytes());
}

fn push_position_direction(bytes: &mut Vec<u8>, entry: PositionDirection) {
    push_position(bytes, entry.position);
    bytes.push(entry.direction.code());
}

/// Counters collected while generating one board. Shortfalls are reported here, not as errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Upper bound on walls for the budgeted strategy.
    pub wall_budget: Option<usize>,
    /// Walls the budgeted strategy aimed for, at most `wall_budget`.
    pub wall_target: Option<usize>,
    /// Edges drawn by the budgeted strategy, or edges that won the coin flip per cell.
    pub wall_attempts: usize,
    pub walls_committed: usize,
    pub walls_rejected: usize,
    pub holes_skipped: usize,
    pub river_tiles: usize,
    /// Runs started by the connected river algorithm.
    pub river_runs: usize,
    /// Searches run by feasibility tests while carving walls.
    pub oracle_queries: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedBoard {
    pub seed: u64,
    pub grid: Grid,
    pub document: BoardDocument,
    pub stats: GenerationStats,
}
