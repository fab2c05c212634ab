// src/utils/mod.rs

pub mod geometry;
pub mod random;
pub mod util;

pub use geometry::{Axis, Orientation, Vec3, Volume};
pub use random::RandomSource;
