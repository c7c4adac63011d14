//! Board generation orchestration: feature placement, rivers, then wall carving.

mod carving;
mod pipeline;
mod placement;
mod rivers;

use crate::config::{BoardConfig, HolePolicy, SearchMode};
use crate::error::GenerateError;
use crate::grid::Grid;
use crate::model::{
    BoardDocument, GeneratedBoard, GenerationStats, PositionDirection, ResourceEntry,
};
use crate::oracle::{Landmarks, Oracle};
use crate::seed::BoardRng;
use crate::types::Position;
use crate::walls::WallSet;

pub struct BoardGenerator {
    config: BoardConfig,
    seed: u64,
}

impl BoardGenerator {
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    pub fn generate(&self) -> Result<GeneratedBoard, GenerateError> {
        pipeline::generate_board(&self.config, self.seed)
    }
}

/// Mutable state of one generation run. Never outlives the run.
struct BoardDraft {
    grid: Grid,
    walls: WallSet,
    rng: BoardRng,
    hole_policy: HolePolicy,
    search_mode: SearchMode,
    start_fields: Vec<PositionDirection>,
    checkpoints: Vec<Position>,
    holes: Vec<Position>,
    resource_fields: Vec<ResourceEntry>,
    river_fields: Vec<PositionDirection>,
    stats: GenerationStats,
}

impl BoardDraft {
    fn new(config: &BoardConfig, seed: u64) -> Self {
        Self {
            grid: Grid::new(config.width, config.height),
            walls: WallSet::new(),
            rng: BoardRng::seeded(seed),
            hole_policy: config.hole_policy,
            search_mode: config.search_mode,
            start_fields: Vec::with_capacity(config.start_fields),
            checkpoints: Vec::with_capacity(config.checkpoints),
            holes: Vec::with_capacity(config.holes),
            resource_fields: Vec::with_capacity(config.resource_fields),
            river_fields: Vec::new(),
            stats: GenerationStats::default(),
        }
    }

    fn oracle(&self) -> Oracle<'_> {
        Oracle::new(&self.grid, &self.walls, self.hole_policy)
    }

    fn landmarks(&self) -> Landmarks {
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

    fn into_board(self, name: String, eye: PositionDirection, seed: u64) -> GeneratedBoard {
        let document = BoardDocument {
            name,
            width: self.grid.width(),
            height: self.grid.height(),
            eye,
            start_fields: self.start_fields,
            checkpoints: self.checkpoints,
            holes: self.holes,
            resource_fields: self.resource_fields,
            river_fields: self.river_fields,
            walls: self.walls.committed().to_vec(),
        };
        GeneratedBoard { seed, grid: self.grid, document, stats: self.stats }
    }
}
