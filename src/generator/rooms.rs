//! # Room Placement
//!
//! One room per BSP leaf, centred in it, with X and Z extents drawn between
//! `min_room_size` and the leaf extent less one unit. Height is taken from
//! the leaf. Leaves are independent, so they are placed in parallel.

use log::debug;
use rayon::prelude::*;

use crate::generator::{MapSettings, StageError};
use crate::map::Room;
use crate::utils::{RandomSource, Vec3, Volume};

/// Carves one room, centred, inside every BSP leaf.
#[derive(Debug, Clone, Copy)]
pub struct RoomPlacer {
    min_room_size: f32,
}

impl RoomPlacer {
    pub fn new(min_room_size: f32) -> Self {
        RoomPlacer { min_room_size }
    }

    pub fn from_settings(settings: &MapSettings) -> Self {
        Self::new(settings.min_room_size)
    }

    /// Places one room per leaf; room `i` comes from `leaves[i]` and gets id `i`.
    ///
    /// Leaves are handled in parallel, each with its own fork of `rng`, so the
    /// result does not depend on how the work is scheduled.
    pub fn place(&self, leaves: &[Volume], rng: &RandomSource) -> Result<Vec<Room>, StageError> {
        if let Some((index, leaf)) = leaves.iter().enumerate().find(|(_, leaf)| !is_usable(leaf)) {
            return Err(StageError::DegenerateLeaf { index, size: leaf.size });
        }

        let rooms: Vec<Room> = leaves
            .par_iter()
            .enumerate()
            .map(|(index, leaf)| {
                let mut leaf_rng = rng.fork(index as u64);
                self.place_in(index as u32, leaf, &mut leaf_rng)
            })
            .collect();

        debug!("Placed {} rooms", rooms.len());
        Ok(rooms)
    }

    fn place_in(&self, id: u32, leaf: &Volume, rng: &mut RandomSource) -> Room {
        let size = Vec3::new(
            self.room_extent(leaf.size.x, rng),
            leaf.size.y,
            self.room_extent(leaf.size.z, rng),
        );
        let position = leaf.origin + (leaf.size - size) * 0.5;
        Room::new(id, position, size)
    }

    /// Size along one axis, drawn from `[min_room_size, leaf_extent - 1)`.
    /// A leaf too small for that range gets a room filling it completely.
    fn room_extent(&self, leaf_extent: f32, rng: &mut RandomSource) -> f32 {
        let upper = leaf_extent - 1.0;
        if upper < self.min_room_size {
            leaf_extent
        } else {
            rng.next_float_range(self.min_room_size, upper)
        }
    }
}

fn is_usable(leaf: &Volume) -> bool {
    let s = leaf.size;
    leaf.origin.is_finite() && s.is_finite() && s.x > 0.0 && s.y > 0.0 && s.z > 0.0
}
