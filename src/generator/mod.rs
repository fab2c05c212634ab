// src/generator/mod.rs

mod error;
mod orchestrator;
mod rooms;
mod settings;
mod state;
mod walker;

pub use error::{ConfigError, GenerationError, StageError};
pub use orchestrator::{MapGenerator, RunId};
pub use rooms::RoomPlacer;
pub use settings::MapSettings;
pub use state::{GenerationState, Phase, StateHandle};
pub use walker::{CorridorWalker, Direction, Walker};
