//! src/bsp/bsp_node.rs

use crate::utils::{Axis, Volume};

/// Where a node was cut: the axis and the offset from the node's origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition {
    pub axis: Axis,
    pub offset: f32,
}

/// A node in the BSP tree. Each node has:
/// - the `volume` it covers and its `depth` below the root,
/// - an optional `partition` (None for leaves),
/// - optionally a `left` child and a `right` child, which tile `volume`.
#[derive(Debug, Clone, PartialEq)]
pub struct BspNode {
    pub volume: Volume,
    pub depth: u32,
    pub partition: Option<Partition>,
    pub left: Option<Box<BspNode>>,
    pub right: Option<Box<BspNode>>,
}

/// A visited node as recorded during partitioning, without its children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRecord {
    pub volume: Volume,
    pub depth: u32,
    pub is_leaf: bool,
}

impl BspNode {
    /// Create a leaf node covering `volume`.
    pub fn create_leaf(volume: Volume, depth: u32) -> Self {
        BspNode {
            volume,
            depth,
            partition: None,
            left: None,
            right: None,
        }
    }

    /// Create an internal node with a partition and the two halves it produced.
    pub fn create_node(volume: Volume, depth: u32, partition: Partition, left: BspNode, right: BspNode) -> Self {
        BspNode {
            volume,
            depth,
            partition: Some(partition),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Returns `true` if `self` is a leaf (i.e. `partition.is_none()`).
    pub fn is_leaf(&self) -> bool {
        self.partition.is_none()
    }

    pub fn children(&self) -> impl Iterator<Item = &BspNode> {
        self.left.iter().chain(self.right.iter()).map(|child| &**child)
    }

    /// Leaf volumes in left-to-right order.
    pub fn leaves(&self) -> Vec<Volume> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<Volume>) {
        if self.is_leaf() {
            out.push(self.volume);
            return;
        }
        for child in self.children() {
            child.collect_leaves(out);
        }
    }

    /// Every node in pre-order, each with its volume, depth and leaf flag.
    pub fn records(&self) -> Vec<NodeRecord> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(NodeRecord {
                volume: node.volume,
                depth: node.depth,
                is_leaf: node.is_leaf(),
            });
            // Right first so the left subtree is visited first.
            if let Some(right) = &node.right {
                stack.push(right);
            }
            if let Some(left) = &node.left {
                stack.push(left);
            }
        }
        out
    }

    pub fn node_count(&self) -> usize {
        1 + self.children().map(BspNode::node_count).sum::<usize>()
    }

    /// Depth of the deepest node in the subtree.
    pub fn max_depth(&self) -> u32 {
        self.children().map(BspNode::max_depth).max().unwrap_or(self.depth)
    }
}
