// src/map/corridor.rs

use serde::{Deserialize, Serialize};

use crate::map::placement::{CorridorPlacement, TemplateHandle};
use crate::utils::{Orientation, Vec3};

/// One step of a walker: a straight piece of corridor between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorridorSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub length: f32,
}

impl CorridorSegment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        CorridorSegment {
            start,
            end,
            length: start.distance_to(&end),
        }
    }

    /// World position of the segment (its midpoint).
    pub fn midpoint(&self) -> Vec3 {
        self.start.midpoint(&self.end)
    }

    /// Facing from `start` towards `end`.
    pub fn orientation(&self) -> Orientation {
        Orientation::look_rotation(self.end - self.start)
    }

    pub fn placement(&self, template: TemplateHandle) -> CorridorPlacement {
        CorridorPlacement {
            template,
            position: self.midpoint(),
            orientation: self.orientation(),
            length: self.length,
        }
    }
}
