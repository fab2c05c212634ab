// src/bsp/mod.rs

pub mod bsp_node;
pub mod bsp_partition;

pub use bsp_node::{BspNode, NodeRecord, Partition};
pub use bsp_partition::BspPartitioner;

/// Deepest tree the partitioner accepts; each level can double the leaf count.
pub const BSP_DEPTH_LIMIT: u32 = 24;

/// Slack for floating-point comparisons on partition boundaries.
pub const EPSILON: f32 = 1e-4;
