// src/document/document.rs

use std::fmt;

use serde::Serialize;

use crate::generator::MapSettings;
use crate::map::{CorridorSegment, Room};
use crate::utils::Volume;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjType {
    Leaves,
    Rooms,
    Corridors,
}

/// Everything one generation run produced, in generation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedMap {
    /// Master seed of the run; replaying it with the same settings
    /// reproduces this map exactly.
    pub seed: u64,
    pub settings: MapSettings,
    pub leaves: Vec<Volume>,
    pub rooms: Vec<Room>,
    pub corridors: Vec<CorridorSegment>,
}

/// Headline numbers for a generated map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub seed: u64,
    pub leaf_count: usize,
    pub room_count: usize,
    pub corridor_count: usize,
    pub corridor_length: f32,
    pub room_area: f32,
}

impl GeneratedMap {
    pub fn num_objects(&self, obj_type: ObjType) -> usize {
        match obj_type {
            ObjType::Leaves => self.leaves.len(),
            ObjType::Rooms => self.rooms.len(),
            ObjType::Corridors => self.corridors.len(),
        }
    }

    /// Room ids are leaf indices, so lookup is by position.
    pub fn room(&self, id: u32) -> Option<&Room> {
        self.rooms.get(id as usize).filter(|room| room.id == id)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            seed: self.seed,
            leaf_count: self.leaves.len(),
            room_count: self.rooms.len(),
            corridor_count: self.corridors.len(),
            corridor_length: self.corridors.iter().map(|c| c.length).sum(),
            room_area: self.rooms.iter().map(|r| r.bounds().floor_area()).sum(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seed {}: {} leaves, {} rooms ({:.1} floor area), {} corridor segments ({:.1} total length)",
            self.seed,
            self.leaf_count,
            self.room_count,
            self.room_area,
            self.corridor_count,
            self.corridor_length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Vec3;

    fn sample() -> GeneratedMap {
        let leaf = Volume::new(Vec3::ZERO, Vec3::new(10.0, 4.0, 10.0));
        GeneratedMap {
            seed: 5,
            settings: MapSettings::default(),
            leaves: vec![leaf],
            rooms: vec![Room::new(0, Vec3::new(2.0, 0.0, 2.0), Vec3::new(6.0, 4.0, 5.0))],
            corridors: vec![
                CorridorSegment::new(Vec3::new(2.0, 0.0, 2.0), Vec3::new(3.0, 0.0, 2.0)),
                CorridorSegment::new(Vec3::new(3.0, 0.0, 2.0), Vec3::new(3.0, 0.0, 3.0)),
            ],
        }
    }

    #[test]
    fn test_counts_and_lookup() {
        let map = sample();
        assert_eq!(map.num_objects(ObjType::Leaves), 1);
        assert_eq!(map.num_objects(ObjType::Rooms), 1);
        assert_eq!(map.num_objects(ObjType::Corridors), 2);
        assert_eq!(map.room(0).map(|r| r.size.x), Some(6.0));
        assert!(map.room(1).is_none());
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(summary.corridor_length, 2.0);
        assert_eq!(summary.room_area, 30.0);
        let text = summary.to_string();
        assert!(text.starts_with("seed 5: 1 leaves, 1 rooms"));
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["seed"], 5);
        assert_eq!(json["rooms"][0]["connected"], false);
        assert_eq!(json["corridors"].as_array().map(Vec::len), Some(2));
    }
}
