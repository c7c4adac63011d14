//! Error types raised by configuration loading and board generation.
//!
//! Only configuration problems abort a run. Rejected wall or hole candidates are
//! soft shortfalls and surface through [`crate::model::GenerationStats`] instead.

use std::io;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The board cannot hold the eye plus every mandatory feature.
    #[error("board too small for all fields: {capacity} cells, {required} required")]
    BoardTooSmall { capacity: usize, required: usize },

    /// Rejection sampling gave up before finding a free cell.
    #[error("no free cell found for {feature} after {attempts} draws")]
    PlacementExhausted { feature: &'static str, attempts: usize },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl GenerateError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig { reason: reason.into() }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("config is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
