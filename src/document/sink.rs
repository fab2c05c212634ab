//! The seam between the generator and whatever instantiates its output.

use crate::map::{CorridorPlacement, RoomPlacement};

/// Host side of the generator: receives one request per generated entity
/// and is responsible for instantiating it.
pub trait PlacementSink {
    fn place_room(&mut self, placement: RoomPlacement);
    fn place_corridor(&mut self, placement: CorridorPlacement);
}

/// A sink that just records every request, in arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementLog {
    pub rooms: Vec<RoomPlacement>,
    pub corridors: Vec<CorridorPlacement>,
}

impl PlacementLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rooms.len() + self.corridors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PlacementSink for PlacementLog {
    fn place_room(&mut self, placement: RoomPlacement) {
        self.rooms.push(placement);
    }

    fn place_corridor(&mut self, placement: CorridorPlacement) {
        self.corridors.push(placement);
    }
}
