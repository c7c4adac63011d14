//! Generation parameters, their defaults, and TOML loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GenerateError};

pub const DEFAULT_BOARD_NAME: &str = "THE CENTERLÄND";
pub const DEFAULT_WALL_FRACTION: f64 = 0.25;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiverAlgorithm {
    /// Scatter river tiles with no continuity requirement.
    #[default]
    Independent,
    /// Grow runs of river tiles that follow each other's flow direction.
    Connected,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallStrategy {
    /// Random edges up to a budget derived from the edge count.
    #[default]
    Budgeted,
    /// Every east/south edge gets one biased coin flip.
    PerCell,
}

/// Whether hole cells block the connectivity oracle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HolePolicy {
    /// Only the eye blocks movement; holes are placed without a connectivity check.
    #[default]
    Passable,
    /// Eye and holes block movement; every hole is gated by a connectivity check.
    Blocking,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Exhaustive depth-first search.
    Reachability,
    /// Best-first search guided by distance and obstacles on the straight line to the goal.
    #[default]
    Heuristic,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub start_fields: usize,
    pub checkpoints: usize,
    pub holes: usize,
    pub resource_fields: usize,
    pub max_resource_amount: u32,
    /// Every resource field gets `max_resource_amount` when set, otherwise a random amount.
    pub exact_resource_amount: bool,
    pub rivers: bool,
    pub river_algorithm: RiverAlgorithm,
    pub walls: bool,
    pub wall_strategy: WallStrategy,
    /// Share of internal edges the budgeted strategy may turn into walls.
    pub wall_fraction: f64,
    pub hole_policy: HolePolicy,
    pub search_mode: SearchMode,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_BOARD_NAME.to_string(),
            width: 2,
            height: 2,
            start_fields: 2,
            checkpoints: 1,
            holes: 0,
            resource_fields: 0,
            max_resource_amount: 0,
            exact_resource_amount: true,
            rivers: false,
            river_algorithm: RiverAlgorithm::Independent,
            walls: false,
            wall_strategy: WallStrategy::Budgeted,
            wall_fraction: DEFAULT_WALL_FRACTION,
            hole_policy: HolePolicy::Passable,
            search_mode: SearchMode::Heuristic,
        }
    }
}

impl BoardConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn capacity(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Cells taken by the eye and every mandatory feature. Saturates instead of wrapping.
    pub fn required_occupied(&self) -> usize {
        [self.start_fields, self.checkpoints, self.holes, self.resource_fields]
            .into_iter()
            .fold(1_usize, usize::saturating_add)
    }

    pub fn internal_edge_count(&self) -> usize {
        internal_edge_count(self.width, self.height)
    }

    /// Checks run once before anything is placed. Any failure aborts the run.
    pub fn validate(&self) -> Result<(), GenerateError> {
        let capacity = checked_cell_count(self.width, self.height)?;
        if !(0.0..=1.0).contains(&self.wall_fraction) {
            return Err(GenerateError::invalid(format!(
                "wall_fraction must be within 0.0..=1.0, got {}",
                self.wall_fraction
            )));
        }
        let required = self.required_occupied();
        if capacity < required {
            return Err(GenerateError::BoardTooSmall { capacity, required });
        }
        Ok(())
    }
}

/// Cell count of a `width` x `height` board, rejecting empty boards and sizes
/// outside the `i32` coordinate range.
pub(crate) fn checked_cell_count(width: usize, height: usize) -> Result<usize, GenerateError> {
    if width == 0 || height == 0 {
        return Err(GenerateError::invalid(format!(
            "board dimensions must be positive, got {width}x{height}"
        )));
    }
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(GenerateError::invalid("board dimensions exceed the coordinate range"));
    }
    width
        .checked_mul(height)
        .ok_or_else(|| GenerateError::invalid("board cell count overflows"))
}

pub(crate) fn internal_edge_count(width: usize, height: usize) -> usize {
    width.saturating_sub(1) * height + height.saturating_sub(1) * width
}
