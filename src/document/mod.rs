// src/document/mod.rs
mod document;
mod sink;

pub use self::document::{GeneratedMap, ObjType, Summary};
pub use self::sink::{PlacementLog, PlacementSink};
