// src/map/room.rs

use serde::{Deserialize, Serialize};

use crate::map::placement::{RoomPlacement, TemplateHandle};
use crate::utils::{Vec3, Volume};

/// A room carved out of one BSP leaf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Sequential id, equal to the index of the leaf the room came from.
    pub id: u32,

    /// Extent of the room. Height (Y) is inherited from the leaf.
    pub size: Vec3,

    /// Minimum corner of the room, and the anchor walkers start from.
    pub position: Vec3,

    /// Kept for host compatibility. Corridor walking never sets it, so a
    /// room may stay `false` even when a corridor passes through it.
    pub connected: bool,
}

impl Room {
    pub fn new(id: u32, position: Vec3, size: Vec3) -> Self {
        Room {
            id,
            size,
            position,
            connected: false,
        }
    }

    pub fn bounds(&self) -> Volume {
        Volume::new(self.position, self.size)
    }

    pub fn center(&self) -> Vec3 {
        self.position + self.size * 0.5
    }

    /// The host-facing request to instantiate this room.
    pub fn placement(&self, template: TemplateHandle) -> RoomPlacement {
        RoomPlacement {
            template,
            position: self.position,
            size: self.size,
            id: self.id,
        }
    }
}
