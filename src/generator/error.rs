// src/generator/error.rs

use thiserror::Error;

use crate::generator::state::Phase;
use crate::utils::Vec3;

/// Invalid settings. Raised before any stage runs; generation does not start.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("max_depth must not be negative, got {0}")]
    NegativeDepth(i32),

    #[error("max_depth {depth} exceeds the supported limit of {limit}")]
    DepthTooLarge { depth: i32, limit: u32 },

    #[error("missing {0} template handle")]
    MissingTemplate(&'static str),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}

/// An internal invariant violated while a stage was running.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StageError {
    #[error("leaf {index} has a non-positive extent {size:?}")]
    DegenerateLeaf { index: usize, size: Vec3 },

    #[error("{walkers} walkers requested but no rooms were placed")]
    NoRooms { walkers: u32 },
}

/// Anything that can stop a generation run.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("{phase:?} stage failed: {source}")]
    Stage {
        phase: Phase,
        #[source]
        source: StageError,
    },

    #[error("a generation run is already in progress")]
    AlreadyGenerating,

    #[error("no generation run is in progress")]
    NotStarted,
}
