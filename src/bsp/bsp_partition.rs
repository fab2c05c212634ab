//! # BSP Partitioning
//!
//! Splits the map volume into a binary tree whose leaves tile it exactly.
//! Leaves become room slots for the generator.

use log::debug;

use crate::bsp::bsp_node::{BspNode, Partition};
use crate::generator::MapSettings;
use crate::utils::{Axis, RandomSource, Volume};

/// Recursively splits a volume into a binary tree of sub-volumes.
///
/// A node stops splitting once it reaches `max_depth`, or as soon as its X
/// or Z extent is smaller than `2 * min_room_size`. Otherwise the axis is
/// picked by a coin flip (X when the draw is `>= 0.5`) and the cut lands
/// uniformly in `[min_room_size, extent - min_room_size]`.
#[derive(Debug, Clone, Copy)]
pub struct BspPartitioner {
    max_depth: u32,
    min_room_size: f32,
}

impl BspPartitioner {
    /// `min_room_size` must be positive and finite; see [`MapSettings::validate`].
    pub fn new(max_depth: u32, min_room_size: f32) -> Self {
        BspPartitioner { max_depth, min_room_size }
    }

    /// Partitioner for settings that already passed validation.
    pub fn from_settings(settings: &MapSettings) -> Self {
        Self::new(settings.max_depth.max(0) as u32, settings.min_room_size)
    }

    /// Builds the full tree for `root`.
    pub fn partition(&self, root: Volume, rng: &mut RandomSource) -> BspNode {
        let tree = self.split_node(root, 0, rng);
        debug!(
            "BSP partition: {} nodes, {} leaves, depth {}",
            tree.node_count(),
            tree.leaves().len(),
            tree.max_depth()
        );
        tree
    }

    /// Flattened leaf volumes of `root`, in left-to-right order.
    pub fn leaf_volumes(&self, root: Volume, rng: &mut RandomSource) -> Vec<Volume> {
        self.partition(root, rng).leaves()
    }

    fn is_terminal(&self, volume: &Volume, depth: u32) -> bool {
        let min_split = self.min_room_size * 2.0;
        depth >= self.max_depth || volume.size.x < min_split || volume.size.z < min_split
    }

    fn split_node(&self, volume: Volume, depth: u32, rng: &mut RandomSource) -> BspNode {
        if self.is_terminal(&volume, depth) {
            return BspNode::create_leaf(volume, depth);
        }

        let axis = if rng.next_float() >= 0.5 { Axis::X } else { Axis::Z };
        let extent = volume.extent(axis);
        let offset = rng.next_float_range(self.min_room_size, extent - self.min_room_size);
        let (left, right) = volume.split(axis, offset);

        let left = self.split_node(left, depth + 1, rng);
        let right = self.split_node(right, depth + 1, rng);
        BspNode::create_node(volume, depth, Partition { axis, offset }, left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Vec3;
    use assert_approx_eq::assert_approx_eq;

    fn map(x: f32, y: f32, z: f32) -> Volume {
        Volume::new(Vec3::ZERO, Vec3::new(x, y, z))
    }

    #[test]
    fn test_leaves_tile_root() {
        let mut seeds = RandomSource::seeded(2024);
        for _ in 0..200 {
            let seed = seeds.next_int(0, i32::MAX) as u64;
            let root = map(
                seeds.next_float_range(1.0, 200.0),
                seeds.next_float_range(1.0, 20.0),
                seeds.next_float_range(1.0, 200.0),
            );
            let depth = seeds.next_int(0, 7) as u32;
            let min_size = seeds.next_float_range(0.5, 20.0);
            let partitioner = BspPartitioner::new(depth, min_size);
            let leaves = partitioner.leaf_volumes(root, &mut RandomSource::seeded(seed));

            let area: f32 = leaves.iter().map(Volume::floor_area).sum();
            assert_approx_eq!(area, root.floor_area(), root.floor_area() * 1e-4);
            for (i, a) in leaves.iter().enumerate() {
                assert!(root.contains_floor(a, 1e-3));
                assert_eq!(a.size.y, root.size.y);
                for b in &leaves[i + 1..] {
                    assert!(!a.overlaps_floor(b, 1e-3), "{:?} overlaps {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_depth_and_size_limits() {
        // 50x50 map, depth 2, min room 5: never deeper than 2, and a node
        // with an X or Z extent below 10 is never split.
        let partitioner = BspPartitioner::new(2, 5.0);
        for seed in 0..100 {
            let tree = partitioner.partition(map(50.0, 10.0, 50.0), &mut RandomSource::seeded(seed));
            assert!(tree.max_depth() <= 2);
            for record in tree.records() {
                if record.volume.size.x < 10.0 || record.volume.size.z < 10.0 {
                    assert!(record.is_leaf);
                }
                if !record.is_leaf {
                    assert!(record.depth < 2);
                }
            }
        }
    }

    #[test]
    fn test_splits_respect_min_room_size() {
        let partitioner = BspPartitioner::new(6, 4.0);
        for seed in 0..50 {
            let leaves = partitioner.leaf_volumes(map(80.0, 5.0, 60.0), &mut RandomSource::seeded(seed));
            for leaf in leaves {
                assert!(leaf.size.x >= 4.0 - 1e-4);
                assert!(leaf.size.z >= 4.0 - 1e-4);
            }
        }
    }

    #[test]
    fn test_oversized_min_room_keeps_root() {
        let root = map(50.0, 10.0, 50.0);
        let partitioner = BspPartitioner::new(4, 30.0);
        let leaves = partitioner.leaf_volumes(root, &mut RandomSource::seeded(5));
        assert_eq!(leaves, vec![root]);

        // Only one axis too small still stops the split.
        let narrow = map(200.0, 10.0, 8.0);
        let leaves = BspPartitioner::new(4, 5.0).leaf_volumes(narrow, &mut RandomSource::seeded(5));
        assert_eq!(leaves, vec![narrow]);
    }

    #[test]
    fn test_zero_depth_is_single_leaf() {
        let root = map(100.0, 10.0, 100.0);
        let tree = BspPartitioner::new(0, 5.0).partition(root, &mut RandomSource::seeded(9));
        assert!(tree.is_leaf());
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_from_settings() {
        let settings = MapSettings { max_depth: 0, ..MapSettings::default() };
        let root = settings.map_volume();
        let leaves = BspPartitioner::from_settings(&settings).leaf_volumes(root, &mut RandomSource::seeded(3));
        assert_eq!(leaves, vec![root]);
    }

    #[test]
    fn test_deterministic() {
        let partitioner = BspPartitioner::new(5, 3.0);
        let root = map(64.0, 8.0, 48.0);
        let a = partitioner.partition(root, &mut RandomSource::seeded(77));
        let b = partitioner.partition(root, &mut RandomSource::seeded(77));
        assert_eq!(a, b);
    }
}
