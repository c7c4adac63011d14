//! Command-line overrides layered on top of a [`BoardConfig`].

use std::path::PathBuf;

use anyhow::{Context, Result};
use board_core::{BoardConfig, HolePolicy, RiverAlgorithm, SearchMode, WallStrategy};
use clap::{Args, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RiverArg {
    Independent,
    Connected,
}

impl From<RiverArg> for RiverAlgorithm {
    fn from(arg: RiverArg) -> Self {
        match arg {
            RiverArg::Independent => Self::Independent,
            RiverArg::Connected => Self::Connected,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WallArg {
    Budgeted,
    PerCell,
}

impl From<WallArg> for WallStrategy {
    fn from(arg: WallArg) -> Self {
        match arg {
            WallArg::Budgeted => Self::Budgeted,
            WallArg::PerCell => Self::PerCell,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HoleArg {
    Passable,
    Blocking,
}

impl From<HoleArg> for HolePolicy {
    fn from(arg: HoleArg) -> Self {
        match arg {
            HoleArg::Passable => Self::Passable,
            HoleArg::Blocking => Self::Blocking,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchArg {
    Reachability,
    Heuristic,
}

impl From<SearchArg> for SearchMode {
    fn from(arg: SearchArg) -> Self {
        match arg {
            SearchArg::Reachability => Self::Reachability,
            SearchArg::Heuristic => Self::Heuristic,
        }
    }
}

/// Board options shared by every binary. Flags override values read from `--config`.
#[derive(Args, Clone, Debug, Default)]
pub struct BoardArgs {
    /// TOML file with generation parameters
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name written into the board document
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub width: Option<usize>,

    #[arg(long)]
    pub height: Option<usize>,

    #[arg(long)]
    pub start_fields: Option<usize>,

    #[arg(long)]
    pub checkpoints: Option<usize>,

    #[arg(long)]
    pub holes: Option<usize>,

    /// Number of resource fields ("lembas" in the board document)
    #[arg(long)]
    pub resource_fields: Option<usize>,

    #[arg(long)]
    pub max_resource_amount: Option<u32>,

    /// Draw each resource amount between 0 and the maximum instead of using the maximum
    #[arg(long, default_value_t = false)]
    pub random_amount: bool,

    /// Enable rivers with the given algorithm
    #[arg(value_enum, long)]
    pub rivers: Option<RiverArg>,

    /// Enable walls with the given strategy
    #[arg(value_enum, long)]
    pub walls: Option<WallArg>,

    /// Share of internal edges the budgeted strategy may wall off
    #[arg(long)]
    pub wall_fraction: Option<f64>,

    #[arg(value_enum, long)]
    pub hole_policy: Option<HoleArg>,

    #[arg(value_enum, long)]
    pub search: Option<SearchArg>,
}

impl BoardArgs {
    /// Loads `--config` when given, otherwise the defaults, then applies every flag.
    pub fn resolve(&self) -> Result<BoardConfig> {
        let mut config = match &self.config {
            Some(path) => BoardConfig::load(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?,
            None => BoardConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    pub fn apply(&self, config: &mut BoardConfig) {
        if let Some(name) = &self.name {
            config.name.clone_from(name);
        }
        override_with(&mut config.width, self.width);
        override_with(&mut config.height, self.height);
        override_with(&mut config.start_fields, self.start_fields);
        override_with(&mut config.checkpoints, self.checkpoints);
        override_with(&mut config.holes, self.holes);
        override_with(&mut config.resource_fields, self.resource_fields);
        override_with(&mut config.max_resource_amount, self.max_resource_amount);
        override_with(&mut config.wall_fraction, self.wall_fraction);
        if self.random_amount {
            config.exact_resource_amount = false;
        }
        if let Some(rivers) = self.rivers {
            config.rivers = true;
            config.river_algorithm = rivers.into();
        }
        if let Some(walls) = self.walls {
            config.walls = true;
            config.wall_strategy = walls.into();
        }
        if let Some(policy) = self.hole_policy {
            config.hole_policy = policy.into();
        }
        if let Some(search) = self.search {
            config.search_mode = search.into();
        }
    }
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
