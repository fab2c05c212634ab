// src/utils/geometry.rs

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 3D point or extent. X and Z span the map floor, Y is height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance_to(&self, other: &Vec3) -> f32 {
        (*other - *self).length()
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(&self, other: &Vec3) -> Vec3 {
        *self + (*other - *self) * 0.5
    }

    pub fn normalize(&self) -> Vec3 {
        let length = self.length();
        if length == 0.0 {
            return *self;
        }
        *self * (1.0 / length)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// The split axis of a BSP partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Split across X ("horizontal" split).
    X,
    /// Split across Z ("vertical" split).
    Z,
}

/// An axis-aligned box. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub origin: Vec3,
    pub size: Vec3,
}

impl Volume {
    pub fn new(origin: Vec3, size: Vec3) -> Self {
        Volume { origin, size }
    }

    /// Opposite corner of the box.
    pub fn max(&self) -> Vec3 {
        self.origin + self.size
    }

    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.size.x,
            Axis::Z => self.size.z,
        }
    }

    /// Floor area (X by Z).
    pub fn floor_area(&self) -> f32 {
        self.size.x * self.size.z
    }

    /// Cuts the volume in two at `offset` along `axis`, measured from the origin.
    /// The halves share the cut plane and cover the volume exactly.
    pub fn split(&self, axis: Axis, offset: f32) -> (Volume, Volume) {
        let o = self.origin;
        let s = self.size;
        match axis {
            Axis::X => (
                Volume::new(o, Vec3::new(offset, s.y, s.z)),
                Volume::new(Vec3::new(o.x + offset, o.y, o.z), Vec3::new(s.x - offset, s.y, s.z)),
            ),
            Axis::Z => (
                Volume::new(o, Vec3::new(s.x, s.y, offset)),
                Volume::new(Vec3::new(o.x, o.y, o.z + offset), Vec3::new(s.x, s.y, s.z - offset)),
            ),
        }
    }

    /// Whether `other` lies inside `self` on the floor plane, allowing `epsilon` slack.
    pub fn contains_floor(&self, other: &Volume, epsilon: f32) -> bool {
        let (a_min, a_max) = (self.origin, self.max());
        let (b_min, b_max) = (other.origin, other.max());
        b_min.x >= a_min.x - epsilon
            && b_min.z >= a_min.z - epsilon
            && b_max.x <= a_max.x + epsilon
            && b_max.z <= a_max.z + epsilon
    }

    /// Whether the floor footprints of two volumes overlap by more than `epsilon`.
    pub fn overlaps_floor(&self, other: &Volume, epsilon: f32) -> bool {
        let (a_min, a_max) = (self.origin, self.max());
        let (b_min, b_max) = (other.origin, other.max());
        a_min.x < b_max.x - epsilon
            && b_min.x < a_max.x - epsilon
            && a_min.z < b_max.z - epsilon
            && b_min.z < a_max.z - epsilon
    }
}

/// A facing direction for placed entities: a unit quaternion `[x, y, z, w]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Orientation {
    pub const IDENTITY: Orientation = Orientation { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Rotation that turns +Z to face `direction`, keeping +Y up.
    ///
    /// Built from yaw about Y followed by pitch about the local X axis, which
    /// matches a look-rotation with world up for every non-vertical direction.
    pub fn look_rotation(direction: Vec3) -> Self {
        let dir = direction.normalize();
        if dir.length() == 0.0 {
            return Orientation::IDENTITY;
        }
        let yaw = dir.x.atan2(dir.z);
        let pitch = -dir.y.clamp(-1.0, 1.0).asin();
        let (sy, cy) = (yaw * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        // q = q_yaw(Y) * q_pitch(X)
        Orientation {
            x: cy * sp,
            y: sy * cp,
            z: -sy * sp,
            w: cy * cp,
        }
    }

    /// Heading on the floor plane in radians, measured from +Z towards +X.
    pub fn yaw(&self) -> f32 {
        let siny = 2.0 * (self.w * self.y - self.z * self.x);
        let cosy = 1.0 - 2.0 * (self.x * self.x + self.y * self.y);
        siny.atan2(cosy)
    }

    /// Rotates `v` by this orientation.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let q = Vec3::new(self.x, self.y, self.z);
        let t = cross(q, v) * 2.0;
        v + t * self.w + cross(q, t)
    }
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.y * b.z - a.z * b.y, a.z * b.x - a.x * b.z, a.x * b.y - a.y * b.x)
}
