// src/map/placement.rs

use serde::{Deserialize, Serialize};

use crate::utils::{Orientation, Vec3};

/// Opaque reference to a host-owned prefab. Forwarded, never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateHandle(pub u64);

/// Request for the host to instantiate a room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomPlacement {
    pub template: TemplateHandle,
    pub position: Vec3,
    pub size: Vec3,
    pub id: u32,
}

/// Request for the host to instantiate a corridor segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorridorPlacement {
    pub template: TemplateHandle,
    pub position: Vec3,
    pub orientation: Orientation,
    pub length: f32,
}
