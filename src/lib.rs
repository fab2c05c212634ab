// src/lib.rs

pub mod bsp;
pub mod document;
pub mod generator;
pub mod map;
pub mod utils;

pub use document::{GeneratedMap, PlacementLog, PlacementSink};
pub use generator::{GenerationError, GenerationState, MapGenerator, MapSettings, Phase};
