use glam::{BVec2, Vec2};

use crate::arena::NodeId;
use crate::component::{BoxKey, FlowKey, MarginKey};
use crate::primitives::{Rect, Sides};

/// Layout algorithm a node applies to its direct children
///
/// Container kinds carry the key of their entry in the matching side-table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Children keep their anchored bounds, grown to their minimum size
    Generic,
    /// Children are centered inside the node
    Center,
    /// Children are stacked along one axis
    Box(BoxKey),
    /// Children are placed along one axis and wrap onto new lines
    Flow(FlowKey),
    /// Children are laid out inside the node's bounds shrunk by insets
    Margin(MarginKey),
}

impl NodeKind {
    /// Name of the kind, for diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            NodeKind::Generic => "Generic",
            NodeKind::Center => "Center",
            NodeKind::Box(_) => "Box",
            NodeKind::Flow(_) => "Flow",
            NodeKind::Margin(_) => "Margin",
        }
    }
}

/// A node of the layout tree
///
/// The hint fields are public and meant to be set by the caller before
/// calling [`LayoutTree::compute_layout`](crate::LayoutTree::compute_layout).
/// `bounds` is the output of layout, except on the root, where the caller
/// supplies it. Structural links are only changed through [`LayoutTree`](crate::LayoutTree).
#[derive(Clone, Debug)]
pub struct Node {
    /// Resolved rectangle
    pub bounds: Rect,
    /// Smallest size the parent's algorithm will give this node
    pub minimum_size: Vec2,
    /// Per axis: take up available space on that axis
    pub expand: BVec2,
    /// Per axis: weight when sharing leftover space with other expanding siblings
    pub stretch: Vec2,
    /// Normalized attachment points relative to the parent
    pub anchors: Sides,
    /// Pixel adjustments applied after the anchors
    pub offsets: Sides,

    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) kind: NodeKind,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            bounds: Rect::ZERO,
            minimum_size: Vec2::ZERO,
            expand: BVec2::FALSE,
            stretch: Vec2::ONE,
            anchors: Sides::ZERO,
            offsets: Sides::ZERO,
            parent,
            children: Vec::new(),
            kind,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct children, in layout order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_defaults() {
        let node = Node::new(NodeKind::Center, None);
        assert_eq!(node.bounds, Rect::ZERO);
        assert_eq!(node.minimum_size, Vec2::ZERO);
        assert_eq!(node.expand, BVec2::FALSE);
        assert_eq!(node.stretch, Vec2::ONE);
        assert!(node.children().is_empty());
        assert!(node.is_root());
        assert_eq!(node.kind().name(), "Center");
    }
}
