//! Tree construction and structural mutation
//!
//! [`LayoutTree`] owns every node in a generational [`Arena`] together with
//! the per-kind side-tables. Nodes reference each other only by [`NodeId`],
//! so a stale handle is detected instead of dereferenced.

use crate::arena::{Arena, NodeId};
use crate::component::{BoxData, Components, FlowData, MarginData};
use crate::error::TreeError;
use crate::node::{Node, NodeKind};

/// Owner of a node tree (or forest) and its side data
///
/// Parentless nodes are roots. Any number of roots may coexist; each one is
/// laid out independently.
#[derive(Debug, Default)]
pub struct LayoutTree {
    pub(crate) nodes: Arena<Node>,
    pub(crate) components: Components,
    roots: Vec<NodeId>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree with room for `capacity` nodes before the arena grows
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            components: Components::new(),
            roots: Vec::new(),
        }
    }

    // Construction

    pub fn add_generic(&mut self, parent: Option<NodeId>) -> Result<NodeId, TreeError> {
        self.check_parent(parent)?;
        Ok(self.insert_node(NodeKind::Generic, parent))
    }

    pub fn add_center(&mut self, parent: Option<NodeId>) -> Result<NodeId, TreeError> {
        self.check_parent(parent)?;
        Ok(self.insert_node(NodeKind::Center, parent))
    }

    pub fn add_box(&mut self, parent: Option<NodeId>, data: BoxData) -> Result<NodeId, TreeError> {
        self.check_parent(parent)?;
        let key = self.components.boxes.insert(data);
        Ok(self.insert_node(NodeKind::Box(key), parent))
    }

    pub fn add_flow(
        &mut self,
        parent: Option<NodeId>,
        data: FlowData,
    ) -> Result<NodeId, TreeError> {
        self.check_parent(parent)?;
        let key = self.components.flows.insert(data);
        Ok(self.insert_node(NodeKind::Flow(key), parent))
    }

    pub fn add_margin(
        &mut self,
        parent: Option<NodeId>,
        data: MarginData,
    ) -> Result<NodeId, TreeError> {
        self.check_parent(parent)?;
        let key = self.components.margins.insert(data);
        Ok(self.insert_node(NodeKind::Margin(key), parent))
    }

    fn check_parent(&self, parent: Option<NodeId>) -> Result<(), TreeError> {
        match parent {
            Some(parent) if !self.nodes.contains(parent) => {
                log::debug!("rejected add under invalid parent {parent}");
                Err(TreeError::InvalidHandle(parent))
            }
            _ => Ok(()),
        }
    }

    /// Allocate a node and link it. `parent` must already be validated.
    fn insert_node(&mut self, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.insert(Node::new(kind, parent));
        match parent {
            Some(parent) => self.nodes[parent].children.push(id),
            None => self.roots.push(id),
        }
        log::trace!("added {} node {id} under {parent:?}", kind.name());
        id
    }

    // Destruction

    /// Delete a node together with its whole subtree
    ///
    /// Every deleted id becomes invalid and its slot and side-table entry are
    /// released for reuse. Fails without touching the tree if `id` is invalid.
    pub fn delete_node(&mut self, id: NodeId) -> Result<(), TreeError> {
        let Some(node) = self.nodes.get(id) else {
            log::debug!("rejected delete of invalid node {id}");
            return Err(TreeError::InvalidHandle(id));
        };

        let parent = node.parent;
        self.detach(id, parent);

        let mut stack = vec![id];
        let mut freed = 0usize;
        while let Some(current) = stack.pop() {
            let node = self.nodes.remove(current).expect("subtree contains a dangling id");
            self.release_component(node.kind);
            stack.extend(node.children);
            freed += 1;
        }

        log::trace!("deleted node {id} and {} descendant(s)", freed - 1);
        Ok(())
    }

    fn release_component(&mut self, kind: NodeKind) {
        let released = match kind {
            NodeKind::Generic | NodeKind::Center => true,
            NodeKind::Box(key) => self.components.boxes.remove(key).is_some(),
            NodeKind::Flow(key) => self.components.flows.remove(key).is_some(),
            NodeKind::Margin(key) => self.components.margins.remove(key).is_some(),
        };
        assert!(released, "live {} node without a side-table entry", kind.name());
    }

    /// Unlink `id` from `parent`'s children, or from the root list
    fn detach(&mut self, id: NodeId, parent: Option<NodeId>) {
        let siblings = match parent {
            Some(parent) => &mut self.nodes[parent].children,
            None => &mut self.roots,
        };
        if let Some(position) = siblings.iter().position(|&child| child == id) {
            siblings.remove(position);
        }
    }

    /// Drop every node and side-table entry
    ///
    /// All outstanding ids become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.components.clear();
        self.roots.clear();
    }

    // Reparenting

    /// Move `id` (with its subtree) under `new_parent`, or make it a root
    ///
    /// The node is appended after the new parent's existing children. Rejects
    /// invalid handles, self-parenting and moves that would create a cycle;
    /// a rejected move changes nothing.
    pub fn reparent_node(
        &mut self,
        id: NodeId,
        new_parent: Option<NodeId>,
    ) -> Result<(), TreeError> {
        let Some(node) = self.nodes.get(id) else {
            log::debug!("rejected reparent of invalid node {id}");
            return Err(TreeError::InvalidHandle(id));
        };
        let old_parent = node.parent;

        if let Some(target) = new_parent {
            if !self.nodes.contains(target) {
                log::debug!("rejected reparent of {id} under invalid node {target}");
                return Err(TreeError::InvalidHandle(target));
            }
            if target == id {
                log::debug!("rejected reparent of {id} under itself");
                return Err(TreeError::SelfParent(id));
            }
            if self.is_ancestor(id, target) {
                log::debug!("rejected reparent of {id} under its descendant {target}");
                return Err(TreeError::CycleRejected {
                    node: id,
                    new_parent: target,
                });
            }
        }

        self.detach(id, old_parent);
        match new_parent {
            Some(target) => self.nodes[target].children.push(id),
            None => self.roots.push(id),
        }
        self.nodes[id].parent = new_parent;

        log::trace!("reparented {id} from {old_parent:?} to {new_parent:?}");
        Ok(())
    }

    /// Whether `ancestor` is a strict ancestor of `id`
    ///
    /// Walks the parent chain upward, so the cost is the depth of `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.nodes.get(id).and_then(|node| node.parent);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.nodes.get(node).and_then(|node| node.parent);
        }
        false
    }

    // Access

    pub fn is_valid(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's hints and bounds
    pub fn get_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Parentless nodes, in the order they became roots
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of living nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    pub fn box_data(&self, id: NodeId) -> Option<&BoxData> {
        match self.nodes.get(id)?.kind {
            NodeKind::Box(key) => self.components.boxes.get(key),
            _ => None,
        }
    }

    pub fn box_data_mut(&mut self, id: NodeId) -> Option<&mut BoxData> {
        match self.nodes.get(id)?.kind {
            NodeKind::Box(key) => self.components.boxes.get_mut(key),
            _ => None,
        }
    }

    /// Flow configuration (`None` for invalid ids and non-flow nodes)
    pub fn flow_data(&self, id: NodeId) -> Option<&FlowData> {
        match self.nodes.get(id)?.kind {
            NodeKind::Flow(key) => self.components.flows.get(key),
            _ => None,
        }
    }

    pub fn flow_data_mut(&mut self, id: NodeId) -> Option<&mut FlowData> {
        match self.nodes.get(id)?.kind {
            NodeKind::Flow(key) => self.components.flows.get_mut(key),
            _ => None,
        }
    }

    pub fn margin_data(&self, id: NodeId) -> Option<&MarginData> {
        match self.nodes.get(id)?.kind {
            NodeKind::Margin(key) => self.components.margins.get(key),
            _ => None,
        }
    }

    pub fn margin_data_mut(&mut self, id: NodeId) -> Option<&mut MarginData> {
        match self.nodes.get(id)?.kind {
            NodeKind::Margin(key) => self.components.margins.get_mut(key),
            _ => None,
        }
    }

    /// Pre-order iterator over the strict descendants of `id`
    ///
    /// Empty if `id` is invalid.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack = Vec::new();
        if let Some(node) = self.nodes.get(id) {
            stack.extend(node.children.iter().rev().copied());
        }
        Descendants { tree: self, stack }
    }
}

/// Iterator returned by [`LayoutTree::descendants`]
pub struct Descendants<'a> {
    tree: &'a LayoutTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let node = &self.tree.nodes[id];
        self.stack.extend(node.children.iter().rev().copied());
        Some(id)
    }
}
