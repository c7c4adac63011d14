//! Procedural board generation: features, rivers and walls under a hub connectivity guarantee.

pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod model;
pub mod oracle;
pub mod seed;
pub mod types;
pub mod walls;

pub use config::{BoardConfig, HolePolicy, RiverAlgorithm, SearchMode, WallStrategy};
pub use error::{ConfigError, GenerateError};
pub use generator::BoardGenerator;
pub use grid::Grid;
pub use model::{BoardDocument, GeneratedBoard, GenerationStats, PositionDirection, ResourceEntry};
pub use oracle::{Feasibility, Landmarks, Oracle};
pub use types::{Direction, Field, Position};
pub use walls::{Edge, StagedWall, WallSet};

pub fn generate_board(config: &BoardConfig, seed: u64) -> Result<GeneratedBoard, GenerateError> {
    BoardGenerator::new(config.clone(), seed).generate()
}

/// Runs the aggregate feasibility test: every landmark must reach the hub.
pub fn path_possible(
    grid: &Grid,
    walls: &WallSet,
    landmarks: &Landmarks,
    hole_policy: HolePolicy,
    mode: SearchMode,
) -> Feasibility {
    Oracle::new(grid, walls, hole_policy).path_possible(landmarks, mode)
}

/// Re-checks a finished board document, rebuilding its grid and wall set first.
pub fn verify_document(
    document: &BoardDocument,
    hole_policy: HolePolicy,
    mode: SearchMode,
) -> Result<Feasibility, GenerateError> {
    let grid = Grid::from_document(document)?;
    let mut walls = WallSet::new();
    for &wall in &document.walls {
        if !walls.insert(wall) {
            let (a, b) = wall.endpoints();
            return Err(GenerateError::invalid(format!("duplicate wall {a} - {b}")));
        }
    }
    Ok(path_possible(&grid, &walls, &document.landmarks(), hole_policy, mode))
}
